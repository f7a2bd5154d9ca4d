//! Color-harmony collaborator.
//!
//! Wraps the Huemint palette generator. The request carries the current lock
//! state as a 5-slot palette where unlocked slots are the `"-"` placeholder;
//! the adjacency matrix weights how strongly neighboring slots should
//! contrast. Huemint returns many candidate palettes; the wizard adopts only
//! the first.

use serde::{Deserialize, Serialize};

use super::GenerationError;

const SERVICE: &str = "huemint";

/// Placeholder for an unconstrained palette slot.
pub const UNCONSTRAINED_SLOT: &str = "-";

/// Number of palette slots.
pub const PALETTE_SIZE: usize = 5;

/// Contrast weights between the five palette slots, row-major.
pub const DEFAULT_ADJACENCY: [&str; 25] = [
    "0", "65", "45", "35", "60", //
    "65", "0", "35", "65", "50", //
    "45", "35", "0", "35", "55", //
    "35", "65", "35", "0", "40", //
    "60", "50", "55", "40", "0",
];

/// Request body for the Huemint color endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteRequest {
    pub mode: String,
    pub num_colors: u32,
    /// Sampling temperature, serialized as a string per the API contract.
    pub temperature: String,
    pub num_results: u32,
    pub adjacency: Vec<String>,
    /// Hex codes for locked slots, `"-"` for unconstrained ones.
    pub palette: Vec<String>,
}

impl PaletteRequest {
    /// Standard request for the wizard's 5-slot palette with the given
    /// constraint slots.
    pub fn constrained(palette: Vec<String>) -> Self {
        Self {
            mode: "transformer".to_string(),
            num_colors: PALETTE_SIZE as u32,
            temperature: "1.2".to_string(),
            num_results: 50,
            adjacency: DEFAULT_ADJACENCY.iter().map(|s| s.to_string()).collect(),
            palette,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PaletteResponse {
    results: Vec<PaletteCandidate>,
}

#[derive(Debug, Deserialize)]
struct PaletteCandidate {
    palette: Vec<String>,
}

/// Huemint API client.
#[derive(Debug, Clone)]
pub struct HuemintClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for HuemintClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HuemintClient {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.huemint.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Generate candidate palettes and return the best one.
    pub async fn generate(
        &self,
        request: &PaletteRequest,
    ) -> Result<Vec<String>, GenerationError> {
        let url = format!("{}/color", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport {
                service: SERVICE,
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PaletteResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationError::Transport {
                    service: SERVICE,
                    source: e,
                })?;

        parsed
            .results
            .into_iter()
            .next()
            .map(|candidate| candidate.palette)
            .ok_or_else(|| GenerationError::MalformedResponse {
                service: SERVICE,
                message: "no palette candidates in response".to_string(),
            })
    }
}
