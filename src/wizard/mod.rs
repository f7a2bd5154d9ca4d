//! Wizard navigation and the editing session context.
//!
//! [`WizardNavigator`] holds the current step index and clamps every
//! movement into the registry's range; navigation never errors.
//! [`WizardSession`] is the session-scoped context object that owns the
//! profile, the navigator, and the transient generation results a UI host
//! reads while a step is open. It is created when the wizard mounts and
//! discarded on unmount; nothing here is process-global.

use crate::generation::responses::{BrandVoice, LogoOption};
use crate::generation::unsplash::ImageryDirection;
use crate::profile::BrandProfile;
use crate::steps::{WizardStep, LAST_STEP_INDEX};

/// Bounded cursor over the eight wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardNavigator {
    current_step_index: usize,
}

impl WizardNavigator {
    /// Navigator positioned at the first step (Brand Discovery).
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current step.
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// The current step.
    pub fn current_step(&self) -> WizardStep {
        WizardStep::from_index(self.current_step_index)
            .unwrap_or(WizardStep::BrandDiscovery)
    }

    /// Jump to an arbitrary step; the index is clamped into range.
    pub fn go_to_step(&mut self, index: usize) {
        self.current_step_index = index.min(LAST_STEP_INDEX);
    }

    /// Advance one step; a no-op on the last step.
    pub fn go_next(&mut self) {
        self.current_step_index = (self.current_step_index + 1).min(LAST_STEP_INDEX);
    }

    /// Step back once; a no-op on the first step.
    pub fn go_previous(&mut self) {
        self.current_step_index = self.current_step_index.saturating_sub(1);
    }

    /// Restore the step recorded in a persisted document.
    ///
    /// An unrecognized identifier performs no navigation change; the
    /// document may have been written by a newer producer.
    pub fn set_step_from_persisted(&mut self, identifier: &str) {
        match WizardStep::from_identifier(identifier) {
            Some(step) => self.go_to_step(step.index()),
            None => {
                log::warn!(
                    "ignoring unknown persisted wizard step identifier: {}",
                    identifier
                );
            }
        }
    }
}

/// Transient generation results held for the duration of the session.
///
/// These are collaborator outputs awaiting a user decision; only the
/// decision itself is merged into the profile and persisted.
#[derive(Debug, Clone, Default)]
pub struct GenerationResults {
    pub logo_options: Vec<LogoOption>,
    pub has_generated_logos: bool,
    pub custom_logo_options: Vec<LogoOption>,
    pub brand_voices: Vec<BrandVoice>,
    pub imagery_directions: Vec<ImageryDirection>,
}

/// One user's editing session over one project's brand.
///
/// All mutation is synchronous and last-writer-wins; the session assumes a
/// single logical editor and carries no locking.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    pub profile: BrandProfile,
    pub navigator: WizardNavigator,
    pub generated: GenerationResults,
    save_in_flight: bool,
}

impl WizardSession {
    /// Fresh session with a default profile at the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a save as started.
    ///
    /// Returns `false` when a save is already outstanding; callers must then
    /// skip issuing another request. This reproduces the host UI's
    /// disabled-while-saving rule at the API boundary.
    pub fn begin_save(&mut self) -> bool {
        if self.save_in_flight {
            return false;
        }
        self.save_in_flight = true;
        true
    }

    /// Mark the outstanding save as finished, whatever its outcome.
    pub fn finish_save(&mut self) {
        self.save_in_flight = false;
    }

    /// Whether a save request is currently outstanding.
    pub fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    /// Store freshly generated logo options for display.
    pub fn set_logo_options(&mut self, options: Vec<LogoOption>) {
        self.generated.logo_options = options;
        self.generated.has_generated_logos = true;
    }

    /// Drop generated logos so the step regenerates on next entry.
    pub fn clear_logo_options(&mut self) {
        self.generated.logo_options.clear();
        self.generated.has_generated_logos = false;
    }

    /// Append a user-uploaded logo option.
    pub fn add_custom_logo(&mut self, logo: LogoOption) {
        self.generated.custom_logo_options.push(logo);
    }

    /// Remove a user-uploaded logo option by position; out-of-range indices
    /// are ignored.
    pub fn remove_custom_logo(&mut self, index: usize) {
        if index < self.generated.custom_logo_options.len() {
            self.generated.custom_logo_options.remove(index);
        }
    }

    pub fn set_brand_voices(&mut self, voices: Vec<BrandVoice>) {
        self.generated.brand_voices = voices;
    }

    pub fn set_imagery_directions(&mut self, directions: Vec<ImageryDirection>) {
        self.generated.imagery_directions = directions;
    }
}
