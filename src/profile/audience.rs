//! Target audience entries collected during brand discovery.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an audience entry describes a business or an individual consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetAudienceType {
    Business,
    IndividualConsumer,
}

impl Default for TargetAudienceType {
    fn default() -> Self {
        TargetAudienceType::Business
    }
}

/// One target audience segment.
///
/// Business-only and consumer-only fields coexist on the struct; the active
/// branch is selected by `target_audience_type`. Switching the type retains
/// the inactive branch's fields so a user can switch back without losing
/// input (see `set_audience_type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAudience {
    /// Short unique id used to address this entry in the list.
    #[serde(default)]
    pub unique_id: String,
    #[serde(default)]
    pub target_audience_type: TargetAudienceType,

    // Business-only fields.
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub annual_revenue: String,
    #[serde(default)]
    pub decision_maker_role: String,
    #[serde(default)]
    pub geographic_market: String,

    // Consumer-only fields.
    #[serde(default)]
    pub age_range: [u32; 2],
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub income: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub location: String,
}

impl Default for TargetAudience {
    fn default() -> Self {
        Self {
            unique_id: String::new(),
            target_audience_type: TargetAudienceType::default(),
            company_size: String::new(),
            industry: String::new(),
            annual_revenue: String::new(),
            decision_maker_role: String::new(),
            geographic_market: String::new(),
            age_range: [0, 0],
            gender: String::new(),
            income: String::new(),
            education: String::new(),
            location: String::new(),
        }
    }
}

impl TargetAudience {
    /// Create an empty entry of the given type with a fresh unique id.
    pub fn new(target_audience_type: TargetAudienceType) -> Self {
        Self {
            unique_id: Uuid::new_v4().to_string(),
            target_audience_type,
            ..Self::default()
        }
    }

    /// Switch the audience type.
    ///
    /// Fields belonging to the now-inactive branch are retained, not cleared,
    /// so switching back restores the previous input.
    pub fn set_audience_type(&mut self, target_audience_type: TargetAudienceType) {
        self.target_audience_type = target_audience_type;
    }

    /// Ensure the entry carries a unique id, generating one if absent.
    ///
    /// Persisted documents written by older producers may omit the id.
    pub fn ensure_unique_id(&mut self) {
        if self.unique_id.is_empty() {
            self.unique_id = Uuid::new_v4().to_string();
        }
    }
}
