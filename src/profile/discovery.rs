//! Discovery answers: the business facts gathered on the first wizard step.

use serde::{Deserialize, Serialize};

use super::audience::TargetAudience;

/// Three independent personality sliders, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPersonality {
    pub formal_casual: u8,
    pub traditional_modern: u8,
    pub serious_playful: u8,
}

impl Default for BrandPersonality {
    fn default() -> Self {
        Self {
            formal_casual: 50,
            traditional_modern: 50,
            serious_playful: 50,
        }
    }
}

impl BrandPersonality {
    fn clamp_slider(value: u8) -> u8 {
        value.min(100)
    }
}

/// Everything the user tells us about the business before any creative
/// generation happens. Serialized as the `brandDiscovery` block of the
/// persisted branding document and sent verbatim as brand context to the
/// prompt model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDiscovery {
    pub business_name: String,
    pub business_description: String,
    pub target_audience: Vec<TargetAudience>,
    pub industry: String,
    /// Selected value ids, insertion-ordered. The 3-value cap is a
    /// presentation rule; the model accepts any count (a load can legally
    /// carry more).
    pub values: Vec<String>,
    pub competitors: String,
    pub differentiation: String,
    pub personality: BrandPersonality,
    pub problems_solved: Vec<String>,
    pub short_term_goals: String,
    pub long_term_goals: String,
    pub visual_preferences: String,
    pub visual_aversions: String,
}

/// Typed field-update commands for [`BrandDiscovery`].
///
/// A closed set of variants rather than string field paths, so every
/// addressable field is covered at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryUpdate {
    BusinessName(String),
    BusinessDescription(String),
    Industry(String),
    Competitors(String),
    Differentiation(String),
    FormalCasual(u8),
    TraditionalModern(u8),
    SeriousPlayful(u8),
    ShortTermGoals(String),
    LongTermGoals(String),
    VisualPreferences(String),
    VisualAversions(String),
}

impl BrandDiscovery {
    /// Apply one typed field update. Slider values are clamped to `0..=100`.
    pub fn apply_update(&mut self, update: DiscoveryUpdate) {
        match update {
            DiscoveryUpdate::BusinessName(v) => self.business_name = v,
            DiscoveryUpdate::BusinessDescription(v) => self.business_description = v,
            DiscoveryUpdate::Industry(v) => self.industry = v,
            DiscoveryUpdate::Competitors(v) => self.competitors = v,
            DiscoveryUpdate::Differentiation(v) => self.differentiation = v,
            DiscoveryUpdate::FormalCasual(v) => {
                self.personality.formal_casual = BrandPersonality::clamp_slider(v);
            }
            DiscoveryUpdate::TraditionalModern(v) => {
                self.personality.traditional_modern = BrandPersonality::clamp_slider(v);
            }
            DiscoveryUpdate::SeriousPlayful(v) => {
                self.personality.serious_playful = BrandPersonality::clamp_slider(v);
            }
            DiscoveryUpdate::ShortTermGoals(v) => self.short_term_goals = v,
            DiscoveryUpdate::LongTermGoals(v) => self.long_term_goals = v,
            DiscoveryUpdate::VisualPreferences(v) => self.visual_preferences = v,
            DiscoveryUpdate::VisualAversions(v) => self.visual_aversions = v,
        }
    }

    /// Toggle a value id's membership; absent ids are appended.
    pub fn toggle_value(&mut self, value_id: &str) {
        toggle_membership(&mut self.values, value_id);
    }

    /// Toggle a problem id's membership; absent ids are appended.
    pub fn toggle_problem(&mut self, problem_id: &str) {
        toggle_membership(&mut self.problems_solved, problem_id);
    }
}

fn toggle_membership(items: &mut Vec<String>, id: &str) {
    if let Some(position) = items.iter().position(|existing| existing == id) {
        items.remove(position);
    } else {
        items.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let discovery = BrandDiscovery::default();
        assert_eq!(discovery.personality.formal_casual, 50);
        assert_eq!(discovery.personality.traditional_modern, 50);
        assert_eq!(discovery.personality.serious_playful, 50);
        assert!(discovery.values.is_empty());
        assert!(discovery.target_audience.is_empty());
    }

    #[test]
    fn test_toggle_value_twice_is_identity() {
        let mut discovery = BrandDiscovery::default();
        discovery.toggle_value("innovation");
        assert_eq!(discovery.values, vec!["innovation"]);
        discovery.toggle_value("innovation");
        assert!(discovery.values.is_empty());
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let mut discovery = BrandDiscovery::default();
        discovery.toggle_value("trust");
        discovery.toggle_value("quality");
        discovery.toggle_value("growth");
        discovery.toggle_value("quality");
        assert_eq!(discovery.values, vec!["trust", "growth"]);
    }

    #[test]
    fn test_apply_update_clamps_sliders() {
        let mut discovery = BrandDiscovery::default();
        discovery.apply_update(DiscoveryUpdate::FormalCasual(200));
        assert_eq!(discovery.personality.formal_casual, 100);
        discovery.apply_update(DiscoveryUpdate::SeriousPlayful(0));
        assert_eq!(discovery.personality.serious_playful, 0);
    }

    #[test]
    fn test_apply_update_scalar() {
        let mut discovery = BrandDiscovery::default();
        discovery.apply_update(DiscoveryUpdate::BusinessName("Acme".to_string()));
        assert_eq!(discovery.business_name, "Acme");
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(BrandDiscovery::default()).unwrap();
        assert!(json.get("businessName").is_some());
        assert!(json.get("problemsSolved").is_some());
        assert_eq!(json["personality"]["formalCasual"], 50);
    }
}
