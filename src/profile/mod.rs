//! The brand profile: the canonical in-memory record of a brand-in-progress.
//!
//! A [`BrandProfile`] is built with default values when a user enters the
//! wizard, mutated in place by step interactions, and serialized whole on
//! every save. It is owned by exactly one editing session and carries no
//! locking; all mutation is synchronous and last-writer-wins.

pub mod audience;
pub mod discovery;

pub use audience::{TargetAudience, TargetAudienceType};
pub use discovery::{BrandDiscovery, BrandPersonality, DiscoveryUpdate};

use serde::{Deserialize, Serialize};

use crate::steps::catalog::MAX_SELECTED_IMAGES;

/// Root aggregate of a user's branding decisions for one project.
///
/// Creative selections are stored by value where the artifact itself is the
/// decision (`selected_logo` holds the full SVG markup) and by identifier
/// where the decision points into a transient generation result
/// (`selected_imagery_set`, `selected_voice_set`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub brand_discovery: BrandDiscovery,
    /// Indices into the current inspiration-image result set.
    pub selected_images: Vec<u32>,
    /// Full SVG markup of the chosen logo, not a reference.
    pub selected_logo: Option<String>,
    /// Hex color codes; order is positional against the palette adjacency
    /// scheme and must be preserved.
    pub selected_colors: Vec<String>,
    pub selected_font: String,
    pub selected_imagery_set: Option<String>,
    pub selected_voice_set: Option<String>,
    pub brand_feedback: String,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            brand_discovery: BrandDiscovery::default(),
            // Three starter mood-board picks and the catalog's first font.
            selected_images: vec![1, 4, 7],
            selected_logo: None,
            selected_colors: Vec::new(),
            selected_font: "inter".to_string(),
            selected_imagery_set: None,
            selected_voice_set: None,
            brand_feedback: String::new(),
        }
    }
}

impl BrandProfile {
    /// Create a profile with all-default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an inspiration image's membership in the selection.
    ///
    /// Removal is always allowed; insertion is refused once the selection
    /// holds [`MAX_SELECTED_IMAGES`] entries. This is a soft cap for the
    /// toggle path only; a load can restore a larger selection unchanged.
    pub fn toggle_image_selection(&mut self, index: u32) {
        if let Some(position) = self.selected_images.iter().position(|&i| i == index) {
            self.selected_images.remove(position);
        } else if self.selected_images.len() < MAX_SELECTED_IMAGES {
            self.selected_images.push(index);
        }
    }

    /// Replace the image selection wholesale (load path).
    pub fn set_selected_images(&mut self, indices: Vec<u32>) {
        self.selected_images = indices;
    }

    pub fn set_selected_logo(&mut self, svg: impl Into<String>) {
        self.selected_logo = Some(svg.into());
    }

    pub fn set_selected_colors(&mut self, colors: Vec<String>) {
        self.selected_colors = colors;
    }

    pub fn set_selected_font(&mut self, font: impl Into<String>) {
        self.selected_font = font.into();
    }

    pub fn set_selected_imagery_set(&mut self, set_id: impl Into<String>) {
        self.selected_imagery_set = Some(set_id.into());
    }

    pub fn set_selected_voice_set(&mut self, set_id: impl Into<String>) {
        self.selected_voice_set = Some(set_id.into());
    }

    pub fn set_brand_feedback(&mut self, feedback: impl Into<String>) {
        self.brand_feedback = feedback.into();
    }

    /// Prepend a newly captured audience entry, as the discovery form does.
    pub fn add_target_audience(&mut self, audience: TargetAudience) {
        self.brand_discovery.target_audience.insert(0, audience);
    }

    /// Append audience entries (used when reconciling a persisted document).
    pub fn extend_target_audiences(
        &mut self,
        audiences: impl IntoIterator<Item = TargetAudience>,
    ) {
        self.brand_discovery.target_audience.extend(audiences);
    }

    /// Remove the audience entry with the given unique id, if present.
    pub fn remove_target_audience(&mut self, unique_id: &str) {
        self.brand_discovery
            .target_audience
            .retain(|audience| audience.unique_id != unique_id);
    }
}
