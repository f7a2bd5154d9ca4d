//! # Brandcraft
//!
//! Wizard and state-synchronization core for a guided brand-building flow.
//!
//! A session walks a user through eight fixed steps, from discovery through
//! the assembled identity suite, collecting decisions into a
//! [`BrandProfile`]. Creative
//! suggestions come from external collaborators (an LLM for structured
//! generation, Unsplash for imagery, Huemint for palette harmony); only the
//! user's selections are merged into the profile and persisted through the
//! organization branding API.

pub mod generation;
pub mod identity;
pub mod palette;
pub mod profile;
pub mod steps;
pub mod sync;
pub mod wizard;

pub use generation::{ClaudeClient, HuemintClient, PromptResult, UnsplashClient};
pub use identity::IdentitySuite;
pub use palette::PaletteBoard;
pub use profile::{BrandDiscovery, BrandProfile, DiscoveryUpdate, TargetAudience};
pub use steps::WizardStep;
pub use sync::RemoteSyncAdapter;
pub use wizard::{WizardNavigator, WizardSession};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
