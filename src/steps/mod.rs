//! Wizard step registry.
//!
//! The branding wizard is a fixed, linear flow of eight steps. Each step has
//! a stable wire identifier used when persisting progress, a zero-based index
//! used by the navigation controller, and a display title. The catalog of
//! selectable value/problem/font options presented during discovery also
//! lives here.

pub mod catalog;

use serde::{Deserialize, Serialize};

/// One stage of the linear brand-creation flow.
///
/// Variants are declared in wizard order; `index()` and `from_index()` map
/// between the enum and the navigation controller's zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    BrandDiscovery,
    VisualInspiration,
    LogoExploration,
    ColorHarmony,
    TypographySelection,
    ImageryDirection,
    BrandVoice,
    BrandIdentitySuite,
}

/// All steps in wizard order.
pub const ALL_STEPS: [WizardStep; 8] = [
    WizardStep::BrandDiscovery,
    WizardStep::VisualInspiration,
    WizardStep::LogoExploration,
    WizardStep::ColorHarmony,
    WizardStep::TypographySelection,
    WizardStep::ImageryDirection,
    WizardStep::BrandVoice,
    WizardStep::BrandIdentitySuite,
];

/// Index of the final step.
pub const LAST_STEP_INDEX: usize = ALL_STEPS.len() - 1;

impl WizardStep {
    /// Zero-based position of this step in the flow.
    pub fn index(self) -> usize {
        match self {
            WizardStep::BrandDiscovery => 0,
            WizardStep::VisualInspiration => 1,
            WizardStep::LogoExploration => 2,
            WizardStep::ColorHarmony => 3,
            WizardStep::TypographySelection => 4,
            WizardStep::ImageryDirection => 5,
            WizardStep::BrandVoice => 6,
            WizardStep::BrandIdentitySuite => 7,
        }
    }

    /// Step at the given index, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_STEPS.get(index).copied()
    }

    /// Stable identifier used by the persistence API.
    pub fn identifier(self) -> &'static str {
        match self {
            WizardStep::BrandDiscovery => "BRAND_DISCOVERY",
            WizardStep::VisualInspiration => "VISUAL_INSPIRATION",
            WizardStep::LogoExploration => "LOGO_EXPLORATION",
            WizardStep::ColorHarmony => "COLOR_HARMONY",
            WizardStep::TypographySelection => "TYPOGRAPHY_SELECTION",
            WizardStep::ImageryDirection => "IMAGERY_DIRECTION",
            WizardStep::BrandVoice => "BRAND_VOICE",
            WizardStep::BrandIdentitySuite => "BRAND_IDENTITY_SUITE",
        }
    }

    /// Resolve a persisted identifier back to a step.
    ///
    /// Returns `None` for unrecognized identifiers; callers decide what to do
    /// with documents written by a newer (or corrupted) producer.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        ALL_STEPS
            .iter()
            .copied()
            .find(|step| step.identifier() == identifier)
    }

    /// Display title shown in the stepper.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BrandDiscovery => "Brand Discovery",
            WizardStep::VisualInspiration => "Visual Inspiration",
            WizardStep::LogoExploration => "Logo Exploration",
            WizardStep::ColorHarmony => "Color Harmony",
            WizardStep::TypographySelection => "Typography Selection",
            WizardStep::ImageryDirection => "Imagery Direction",
            WizardStep::BrandVoice => "Brand Voice",
            WizardStep::BrandIdentitySuite => "Brand Identity Suite",
        }
    }
}
