//! Stock-photo search collaborator.
//!
//! Wraps the Unsplash search API for two wizard steps: visual inspiration
//! (keyword queries derived from the discovery answers) and imagery direction
//! (one query per model-suggested keyword, fanned out concurrently).

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::profile::BrandDiscovery;

use super::responses::ImagerySet;
use super::GenerationError;

const SERVICE: &str = "unsplash";

/// One search result, flattened to the fields the wizard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspirationImage {
    pub id: String,
    pub image_url: String,
    pub alt_description: String,
    pub author: String,
    pub source_url: String,
}

/// An imagery keyword with its fetched sample images.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageryDirection {
    pub id: String,
    pub keyword: String,
    pub description: String,
    pub images: Vec<InspirationImage>,
}

// Wire shapes of the Unsplash search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: String,
    #[serde(default)]
    urls: ImageUrls,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    user: Option<ImageUser>,
    #[serde(default)]
    links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageUrls {
    #[serde(default)]
    regular: String,
}

#[derive(Debug, Deserialize)]
struct ImageUser {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    #[serde(default)]
    html: String,
}

/// Unsplash search client.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    access_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl UnsplashClient {
    /// Create a client.
    ///
    /// # Arguments
    ///
    /// * `access_key` - Optional access key (defaults to the
    ///   `UNSPLASH_ACCESS_KEY` environment variable).
    pub fn new(access_key: Option<String>) -> Self {
        let access_key = access_key.or_else(|| std::env::var("UNSPLASH_ACCESS_KEY").ok());
        Self {
            access_key,
            base_url: "https://api.unsplash.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Search for photos by keyword, returning results in rank order.
    pub async fn search(
        &self,
        keyword: &str,
        count_per_query: u32,
    ) -> Result<Vec<InspirationImage>, GenerationError> {
        let access_key =
            self.access_key
                .as_deref()
                .ok_or(GenerationError::MissingCredentials {
                    service: "Unsplash",
                    env_var: "UNSPLASH_ACCESS_KEY",
                })?;

        let url = format!("{}/search/photos", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", keyword),
                ("per_page", &count_per_query.to_string()),
                ("client_id", access_key),
            ])
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

        let parsed: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationError::Transport {
                    service: SERVICE,
                    source: e,
                })?;

        Ok(parsed.results.into_iter().map(flatten_result).collect())
    }

    /// Fetch sample images for each suggested imagery keyword.
    ///
    /// Searches run concurrently; a failed keyword fails the whole fetch, as
    /// a partially populated imagery step is not meaningful to choose from.
    pub async fn fetch_imagery_sets(
        &self,
        keywords: &[ImagerySet],
        count_per_query: u32,
    ) -> Result<Vec<ImageryDirection>, GenerationError> {
        let searches = keywords
            .iter()
            .map(|set| self.search(&set.keyword, count_per_query));
        let results = join_all(searches).await;

        let mut directions = Vec::with_capacity(keywords.len());
        for (set, images) in keywords.iter().zip(results) {
            directions.push(ImageryDirection {
                id: set.id.clone(),
                keyword: set.keyword.clone(),
                description: set.description.clone(),
                images: images?,
            });
        }
        Ok(directions)
    }
}

fn flatten_result(result: SearchResult) -> InspirationImage {
    InspirationImage {
        id: result.id,
        image_url: result.urls.regular,
        alt_description: result.alt_description.unwrap_or_default(),
        author: result.user.map(|u| u.name).unwrap_or_default(),
        source_url: result.links.map(|l| l.html).unwrap_or_default(),
    }
}

/// Map of value ids to the search phrase that best represents them.
const VALUE_SEARCH_TERMS: [(&str, &str); 12] = [
    ("innovation", "innovative design"),
    ("sustainability", "sustainable design"),
    ("quality", "premium quality"),
    ("trust", "trustworthy brand"),
    ("creativity", "creative design"),
    ("reliability", "reliable professional"),
    ("excellence", "excellent design"),
    ("integrity", "authentic brand"),
    ("community", "community focused"),
    ("growth", "growth oriented"),
    ("efficiency", "efficient design"),
    ("transparency", "transparent brand"),
];

/// Queries used when no discovery answer contributes a term.
const DEFAULT_SEARCH_TERMS: [&str; 5] = [
    "minimal design",
    "branding",
    "modern design",
    "creative",
    "aesthetic",
];

/// Derive inspiration search queries from the discovery answers.
///
/// Industry contributes design/branding phrases, each selected value maps
/// through [`VALUE_SEARCH_TERMS`], the first target audience's income and
/// education bands steer toward luxury, accessible, or professional imagery,
/// and personality sliders outside the 30..=70 midband contribute tone
/// phrases. A discovery that yields nothing falls back to
/// [`DEFAULT_SEARCH_TERMS`].
pub fn build_search_terms(discovery: &BrandDiscovery) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    if !discovery.industry.is_empty() {
        terms.push(format!("{} design", discovery.industry));
        terms.push(format!("{} branding", discovery.industry));
    }

    for value_id in &discovery.values {
        if let Some((_, phrase)) = VALUE_SEARCH_TERMS
            .iter()
            .find(|(id, _)| *id == value_id.as_str())
        {
            terms.push((*phrase).to_string());
        }
    }

    if let Some(audience) = discovery.target_audience.first() {
        match audience.income.as_str() {
            "luxury" | "affluent" => {
                terms.push("luxury design".to_string());
                terms.push("premium branding".to_string());
                terms.push("elegant design".to_string());
            }
            "budget" => {
                terms.push("accessible design".to_string());
                terms.push("simple branding".to_string());
                terms.push("clean design".to_string());
            }
            _ => {}
        }
        if matches!(audience.education.as_str(), "phd" | "masters") {
            terms.push("professional design".to_string());
            terms.push("sophisticated branding".to_string());
        }
    }

    let personality = &discovery.personality;
    if personality.formal_casual > 70 {
        terms.push("casual design".to_string());
        terms.push("friendly branding".to_string());
    } else if personality.formal_casual < 30 {
        terms.push("formal design".to_string());
        terms.push("corporate branding".to_string());
    }
    if personality.traditional_modern > 70 {
        terms.push("modern design".to_string());
        terms.push("contemporary branding".to_string());
    } else if personality.traditional_modern < 30 {
        terms.push("traditional design".to_string());
        terms.push("classic branding".to_string());
    }
    if personality.serious_playful > 70 {
        terms.push("playful design".to_string());
        terms.push("fun branding".to_string());
    } else if personality.serious_playful < 30 {
        terms.push("serious design".to_string());
        terms.push("professional branding".to_string());
    }

    if terms.is_empty() {
        terms.extend(DEFAULT_SEARCH_TERMS.iter().map(|t| (*t).to_string()));
    }

    terms
}
