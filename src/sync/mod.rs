//! Remote persistence for brand profiles.
//!
//! The organization API stores one branding document per project: a partial
//! snapshot of the profile plus the wizard step it was saved on. Loading
//! reconciles that document into the session with a sparse field-by-field
//! merge: a remote field only overwrites local state when it is present and
//! non-empty, so blank placeholders never clobber in-progress edits. Saving
//! submits the full current snapshot, creating the document on first save
//! and replacing it afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::{BrandProfile, DiscoveryUpdate, TargetAudience};
use crate::steps::WizardStep;
use crate::wizard::WizardSession;

/// Errors surfaced by the sync adapter.
///
/// Load-path transients are swallowed by [`RemoteSyncAdapter::load`]; only
/// save failures reach callers, who surface a notification and leave local
/// state untouched for a manual retry.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("branding API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("branding API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("branding API token not set. Pass it to the constructor or set BRANDING_API_TOKEN.")]
    MissingCredentials,
}

/// Partial personality block as persisted remotely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPersonality {
    pub formal_casual: Option<u8>,
    pub traditional_modern: Option<u8>,
    pub serious_playful: Option<u8>,
}

/// Partial discovery block as persisted remotely. Every field is optional;
/// absence means "nothing recorded", which the merge leaves alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDiscovery {
    pub business_name: Option<String>,
    pub business_description: Option<String>,
    pub target_audience: Option<Vec<TargetAudience>>,
    pub industry: Option<String>,
    pub values: Option<Vec<String>>,
    pub competitors: Option<String>,
    pub differentiation: Option<String>,
    pub personality: Option<PersistedPersonality>,
    pub problems_solved: Option<Vec<String>>,
    pub short_term_goals: Option<String>,
    pub long_term_goals: Option<String>,
    pub visual_preferences: Option<String>,
    pub visual_aversions: Option<String>,
}

/// Partial profile snapshot as persisted remotely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedBrand {
    pub brand_discovery: Option<PersistedDiscovery>,
    pub selected_images: Option<Vec<u32>>,
    pub selected_logo: Option<String>,
    pub selected_colors: Option<Vec<String>>,
    pub selected_font: Option<String>,
    pub selected_imagery_set: Option<String>,
    pub selected_voice_set: Option<String>,
    pub brand_feedback: Option<String>,
}

/// The branding document: persisted metadata plus the step it was saved on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingDocument {
    pub metadata: Option<PersistedBrand>,
    /// Wire identifier of the step; kept as a string so documents written by
    /// a newer producer still deserialize.
    pub branding_step: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BrandingEnvelope {
    data: Option<BrandingDocument>,
}

/// Save request body: the full snapshot, never a partial one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBody<'a> {
    pub project_id: &'a str,
    pub branding_step: &'static str,
    pub metadata: &'a BrandProfile,
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}

/// Reconcile a persisted document into a profile, field by field.
///
/// Returns a new profile value; the input is never mutated. A remote string
/// overwrites only when non-empty, a remote sequence only when non-empty,
/// and a personality slider only when present and non-zero (a persisted zero
/// is indistinguishable from "never set" in the source data). Remote target
/// audiences are appended to the local list.
pub fn merge_persisted(base: &BrandProfile, persisted: &PersistedBrand) -> BrandProfile {
    let mut profile = base.clone();

    if let Some(discovery) = &persisted.brand_discovery {
        let mut updates: Vec<DiscoveryUpdate> = Vec::new();

        if let Some(v) = non_empty(&discovery.business_name) {
            updates.push(DiscoveryUpdate::BusinessName(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.business_description) {
            updates.push(DiscoveryUpdate::BusinessDescription(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.industry) {
            updates.push(DiscoveryUpdate::Industry(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.competitors) {
            updates.push(DiscoveryUpdate::Competitors(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.differentiation) {
            updates.push(DiscoveryUpdate::Differentiation(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.short_term_goals) {
            updates.push(DiscoveryUpdate::ShortTermGoals(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.long_term_goals) {
            updates.push(DiscoveryUpdate::LongTermGoals(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.visual_preferences) {
            updates.push(DiscoveryUpdate::VisualPreferences(v.clone()));
        }
        if let Some(v) = non_empty(&discovery.visual_aversions) {
            updates.push(DiscoveryUpdate::VisualAversions(v.clone()));
        }

        if let Some(personality) = &discovery.personality {
            if let Some(v) = personality.formal_casual.filter(|v| *v != 0) {
                updates.push(DiscoveryUpdate::FormalCasual(v));
            }
            if let Some(v) = personality.traditional_modern.filter(|v| *v != 0) {
                updates.push(DiscoveryUpdate::TraditionalModern(v));
            }
            if let Some(v) = personality.serious_playful.filter(|v| *v != 0) {
                updates.push(DiscoveryUpdate::SeriousPlayful(v));
            }
        }

        for update in updates {
            profile.brand_discovery.apply_update(update);
        }

        if let Some(values) = discovery.values.as_ref().filter(|v| !v.is_empty()) {
            profile.brand_discovery.values = values.clone();
        }
        if let Some(problems) = discovery.problems_solved.as_ref().filter(|v| !v.is_empty()) {
            profile.brand_discovery.problems_solved = problems.clone();
        }
        if let Some(audiences) = discovery
            .target_audience
            .as_ref()
            .filter(|v| !v.is_empty())
        {
            let mut audiences = audiences.clone();
            for audience in &mut audiences {
                audience.ensure_unique_id();
            }
            profile.extend_target_audiences(audiences);
        }
    }

    if let Some(images) = persisted.selected_images.as_ref().filter(|v| !v.is_empty()) {
        profile.set_selected_images(images.clone());
    }
    if let Some(logo) = non_empty(&persisted.selected_logo) {
        profile.set_selected_logo(logo.clone());
    }
    if let Some(colors) = persisted.selected_colors.as_ref().filter(|v| !v.is_empty()) {
        profile.set_selected_colors(colors.clone());
    }
    if let Some(font) = non_empty(&persisted.selected_font) {
        profile.set_selected_font(font.clone());
    }
    if let Some(set_id) = non_empty(&persisted.selected_imagery_set) {
        profile.set_selected_imagery_set(set_id.clone());
    }
    if let Some(set_id) = non_empty(&persisted.selected_voice_set) {
        profile.set_selected_voice_set(set_id.clone());
    }
    if let Some(feedback) = non_empty(&persisted.brand_feedback) {
        profile.set_brand_feedback(feedback.clone());
    }

    profile
}

/// HTTP adapter for the organization branding API.
///
/// Tracks whether a persisted document exists for the loaded project
/// (`has_brand`) to decide between the API's create and update operations,
/// which have insert/replace semantics rather than an idempotent upsert.
#[derive(Debug, Clone)]
pub struct RemoteSyncAdapter {
    base_url: String,
    organization_id: String,
    auth_token: Option<String>,
    has_brand: bool,
    client: reqwest::Client,
}

impl RemoteSyncAdapter {
    /// Create an adapter for one organization.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API origin, without a trailing slash.
    /// * `organization_id` - Organization owning the projects.
    /// * `auth_token` - Optional bearer token (defaults to the
    ///   `BRANDING_API_TOKEN` environment variable).
    pub fn new(
        base_url: impl Into<String>,
        organization_id: impl Into<String>,
        auth_token: Option<String>,
    ) -> Self {
        let auth_token = auth_token.or_else(|| std::env::var("BRANDING_API_TOKEN").ok());
        Self {
            base_url: base_url.into(),
            organization_id: organization_id.into(),
            auth_token,
            has_brand: false,
            client: reqwest::Client::new(),
        }
    }

    /// Whether a persisted document was seen for the loaded project.
    pub fn has_brand(&self) -> bool {
        self.has_brand
    }

    /// The operation the next [`save`](Self::save) will issue.
    pub fn save_operation(&self) -> SaveOperation {
        if self.has_brand {
            SaveOperation::Update
        } else {
            SaveOperation::Create
        }
    }

    fn branding_url(&self) -> String {
        format!("{}/organizations/{}/branding", self.base_url, self.organization_id)
    }

    fn token(&self) -> Result<&str, SyncError> {
        self.auth_token.as_deref().ok_or(SyncError::MissingCredentials)
    }

    /// Load the persisted brand for a project into the session.
    ///
    /// Returns `true` when a document was found and merged. Not-found means
    /// "start fresh" and returns `false`. Transient network or parse
    /// failures are logged and swallowed; the session keeps its defaults
    /// and the wizard stays usable without persistence.
    pub async fn load(&mut self, project_id: &str, session: &mut WizardSession) -> bool {
        match self.try_load(project_id).await {
            Ok(Some(document)) => {
                self.has_brand = true;
                if let Some(step) = document.branding_step.as_deref() {
                    session.navigator.set_step_from_persisted(step);
                }
                if let Some(metadata) = &document.metadata {
                    session.profile = merge_persisted(&session.profile, metadata);
                }
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("failed to load branding for project {}: {}", project_id, e);
                false
            }
        }
    }

    /// Fetch the branding document, distinguishing not-found from failure.
    pub async fn try_load(
        &self,
        project_id: &str,
    ) -> Result<Option<BrandingDocument>, SyncError> {
        let token = self.token()?;
        let url = format!("{}/{}", self.branding_url(), project_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: BrandingEnvelope = response.json().await?;
        Ok(Some(envelope.data.unwrap_or_default()))
    }

    /// Persist the current profile snapshot, tagged with the current step.
    ///
    /// Issues a create when no document existed for this project, an update
    /// otherwise. On failure local state is untouched and the caller may
    /// retry via the same action; there is no automatic retry.
    pub async fn save(
        &mut self,
        project_id: &str,
        profile: &BrandProfile,
        current_step: WizardStep,
    ) -> Result<(), SyncError> {
        let token = self.token()?;
        let url = self.branding_url();
        let body = build_save_body(project_id, profile, current_step);

        let request = match self.save_operation() {
            SaveOperation::Update => {
                log::debug!("updating branding for project {}", project_id);
                self.client.put(&url)
            }
            SaveOperation::Create => {
                log::debug!("creating branding for project {}", project_id);
                self.client.post(&url)
            }
        };

        let response = request.bearer_auth(token).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // The document exists now; subsequent saves must be updates.
        self.has_brand = true;
        Ok(())
    }
}

/// Which persistence operation the next save will issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOperation {
    /// No document exists yet; the save inserts one.
    Create,
    /// A document exists; the save replaces it.
    Update,
}

/// Build the save request body: full snapshot plus the step identifier.
pub fn build_save_body<'a>(
    project_id: &'a str,
    profile: &'a BrandProfile,
    current_step: WizardStep,
) -> SaveBody<'a> {
    SaveBody {
        project_id,
        branding_step: current_step.identifier(),
        metadata: profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TargetAudienceType;

    fn persisted_with_discovery(discovery: PersistedDiscovery) -> PersistedBrand {
        PersistedBrand {
            brand_discovery: Some(discovery),
            ..PersistedBrand::default()
        }
    }

    #[test]
    fn test_empty_remote_string_does_not_clobber_local() {
        let mut base = BrandProfile::new();
        base.brand_discovery
            .apply_update(DiscoveryUpdate::BusinessName("Acme".to_string()));

        let persisted = persisted_with_discovery(PersistedDiscovery {
            business_name: Some(String::new()),
            ..PersistedDiscovery::default()
        });

        let merged = merge_persisted(&base, &persisted);
        assert_eq!(merged.brand_discovery.business_name, "Acme");
    }

    #[test]
    fn test_non_empty_remote_string_overwrites() {
        let base = BrandProfile::new();
        let persisted = persisted_with_discovery(PersistedDiscovery {
            business_name: Some("Acme".to_string()),
            ..PersistedDiscovery::default()
        });

        let merged = merge_persisted(&base, &persisted);
        assert_eq!(merged.brand_discovery.business_name, "Acme");
    }

    #[test]
    fn test_merge_never_mutates_base() {
        let base = BrandProfile::new();
        let persisted = persisted_with_discovery(PersistedDiscovery {
            business_name: Some("Acme".to_string()),
            ..PersistedDiscovery::default()
        });

        let _ = merge_persisted(&base, &persisted);
        assert!(base.brand_discovery.business_name.is_empty());
    }

    #[test]
    fn test_personality_zero_is_not_copied() {
        let base = BrandProfile::new();
        let persisted = persisted_with_discovery(PersistedDiscovery {
            personality: Some(PersistedPersonality {
                formal_casual: Some(0),
                traditional_modern: Some(80),
                serious_playful: None,
            }),
            ..PersistedDiscovery::default()
        });

        let merged = merge_persisted(&base, &persisted);
        assert_eq!(merged.brand_discovery.personality.formal_casual, 50);
        assert_eq!(merged.brand_discovery.personality.traditional_modern, 80);
        assert_eq!(merged.brand_discovery.personality.serious_playful, 50);
    }

    #[test]
    fn test_empty_remote_arrays_leave_defaults() {
        let base = BrandProfile::new();
        let persisted = PersistedBrand {
            brand_discovery: Some(PersistedDiscovery {
                values: Some(Vec::new()),
                ..PersistedDiscovery::default()
            }),
            selected_images: Some(Vec::new()),
            selected_colors: Some(Vec::new()),
            ..PersistedBrand::default()
        };

        let merged = merge_persisted(&base, &persisted);
        assert!(merged.brand_discovery.values.is_empty());
        // Empty remote selection keeps the default picks.
        assert_eq!(merged.selected_images, vec![1, 4, 7]);
    }

    #[test]
    fn test_values_beyond_ui_cap_are_accepted_on_load() {
        let base = BrandProfile::new();
        let values: Vec<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let persisted = persisted_with_discovery(PersistedDiscovery {
            values: Some(values.clone()),
            ..PersistedDiscovery::default()
        });

        let merged = merge_persisted(&base, &persisted);
        assert_eq!(merged.brand_discovery.values, values);
    }

    #[test]
    fn test_audiences_append_and_get_ids() {
        let mut base = BrandProfile::new();
        base.add_target_audience(TargetAudience::new(TargetAudienceType::Business));

        let mut remote = TargetAudience::default();
        remote.income = "luxury".to_string();
        let persisted = persisted_with_discovery(PersistedDiscovery {
            target_audience: Some(vec![remote]),
            ..PersistedDiscovery::default()
        });

        let merged = merge_persisted(&base, &persisted);
        let audiences = &merged.brand_discovery.target_audience;
        assert_eq!(audiences.len(), 2);
        // Remote entries land after local ones and always carry an id.
        assert_eq!(audiences[1].income, "luxury");
        assert!(!audiences[1].unique_id.is_empty());
    }

    #[test]
    fn test_selection_fields_merge() {
        let base = BrandProfile::new();
        let persisted = PersistedBrand {
            selected_logo: Some("<svg/>".to_string()),
            selected_colors: Some(vec!["#111111".to_string()]),
            selected_font: Some("poppins".to_string()),
            selected_imagery_set: Some("minimal".to_string()),
            selected_voice_set: Some("confident".to_string()),
            brand_feedback: Some("Looks great".to_string()),
            ..PersistedBrand::default()
        };

        let merged = merge_persisted(&base, &persisted);
        assert_eq!(merged.selected_logo.as_deref(), Some("<svg/>"));
        assert_eq!(merged.selected_colors, vec!["#111111"]);
        assert_eq!(merged.selected_font, "poppins");
        assert_eq!(merged.selected_imagery_set.as_deref(), Some("minimal"));
        assert_eq!(merged.selected_voice_set.as_deref(), Some("confident"));
        assert_eq!(merged.brand_feedback, "Looks great");
    }

    #[test]
    fn test_save_body_shape() {
        let mut profile = BrandProfile::new();
        profile
            .brand_discovery
            .apply_update(DiscoveryUpdate::BusinessName("Acme".to_string()));

        let body = build_save_body("project-9", &profile, WizardStep::ColorHarmony);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["projectId"], "project-9");
        assert_eq!(json["brandingStep"], "COLOR_HARMONY");
        assert_eq!(json["metadata"]["brandDiscovery"]["businessName"], "Acme");
        assert_eq!(json["metadata"]["selectedFont"], "inter");
    }

    #[test]
    fn test_document_tolerates_unknown_step() {
        let json = r#"{"metadata": null, "brandingStep": "FUTURE_STEP"}"#;
        let document: BrandingDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.branding_step.as_deref(), Some("FUTURE_STEP"));
    }

    #[test]
    fn test_envelope_with_missing_data() {
        let envelope: BrandingEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_fresh_adapter_saves_with_create() {
        let adapter = RemoteSyncAdapter::new("https://api.example", "org-1", Some("t".into()));
        assert!(!adapter.has_brand());
        assert_eq!(adapter.save_operation(), SaveOperation::Create);
    }

    #[test]
    fn test_new_project_flow_produces_create_with_current_step() {
        use crate::palette::PaletteBoard;

        // No persisted branding: the session keeps its defaults.
        let mut session = WizardSession::new();
        let adapter = RemoteSyncAdapter::new("https://api.example", "org-1", Some("t".into()));
        assert_eq!(session.profile.brand_discovery.business_name, "");

        // User fills in a name and advances to the color step.
        session
            .profile
            .brand_discovery
            .apply_update(DiscoveryUpdate::BusinessName("Acme".to_string()));
        session.navigator.go_to_step(3);

        // One regeneration with no locks.
        let mut board = PaletteBoard::new(vec!["#111111".to_string(); 5]);
        assert_eq!(board.constrained_slots(), vec!["-"; 5]);
        board.adopt(vec!["#222222".to_string(); 5]);
        session
            .profile
            .set_selected_colors(board.current().to_vec());

        // The save is a create, tagged with the color harmony step.
        assert_eq!(adapter.save_operation(), SaveOperation::Create);
        let body = build_save_body("project-1", &session.profile, session.navigator.current_step());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["brandingStep"], "COLOR_HARMONY");
        assert_eq!(json["metadata"]["brandDiscovery"]["businessName"], "Acme");
        assert_eq!(json["metadata"]["selectedColors"][0], "#222222");
    }

    #[test]
    fn test_persisted_brand_partial_deserialization() {
        let json = r#"{
            "brandDiscovery": {"businessName": "Acme", "personality": {"formalCasual": 70}},
            "selectedFont": "lexend"
        }"#;
        let persisted: PersistedBrand = serde_json::from_str(json).unwrap();
        let discovery = persisted.brand_discovery.as_ref().unwrap();
        assert_eq!(discovery.business_name.as_deref(), Some("Acme"));
        assert_eq!(
            discovery.personality.as_ref().unwrap().formal_casual,
            Some(70)
        );
        assert!(discovery.values.is_none());
        assert_eq!(persisted.selected_font.as_deref(), Some("lexend"));
    }
}
