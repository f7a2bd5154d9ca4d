//! Typed shapes for structured model responses, plus the canned
//! instruction/format text for each generation task.
//!
//! The format specs are sent to the model verbatim, so their JSON examples
//! must stay in sync with the serde shapes below.

use serde::{Deserialize, Serialize};

/// A five-color palette suggestion with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPaletteSuggestion {
    pub colors: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// One generated logo concept. The SVG is the artifact itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoOption {
    pub name: String,
    pub description: String,
    pub svg: String,
}

/// Response shape for the logo exploration task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoOptionsResponse {
    pub logos: Vec<LogoOption>,
    #[serde(default)]
    pub description: String,
}

/// The fictional person embodying a brand voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicePersona {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    pub background: String,
    pub personality: String,
    pub communication_style: String,
}

/// One suggested brand voice style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandVoice {
    pub id: String,
    pub name: String,
    pub description: String,
    pub hero: String,
    pub descriptive: String,
    pub persona: VoicePersona,
}

/// Response shape for the brand voice task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandVoiceResponse {
    pub brand_voices: Vec<BrandVoice>,
    #[serde(default)]
    pub description: String,
}

/// One imagery keyword suggested for stock-photo search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagerySet {
    pub id: String,
    pub keyword: String,
    pub description: String,
}

/// Response shape for the imagery direction task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageryResponse {
    pub imagery_sets: Vec<ImagerySet>,
}

/// Instruction and response-format pair for one generation task.
#[derive(Debug, Clone, Copy)]
pub struct PromptSpec {
    pub instruction: &'static str,
    pub response_format: &'static str,
}

/// Palette generation, used to seed the color harmony step.
pub const COLOR_PALETTE_PROMPT: PromptSpec = PromptSpec {
    instruction:
        "Generate a brand color palette of 5 colors that would work well for this company",
    response_format: r##"
Return a JSON object with this exact structure:
{
  "colors": ["#hex1", "#hex2", "#hex3", "#hex4", "#hex5"],
  "description": "A detailed explanation of why this palette was recommended for the brand"
}
"##,
};

/// Logo concept generation for the logo exploration step.
pub const LOGO_OPTIONS_PROMPT: PromptSpec = PromptSpec {
    instruction: "Generate 3 different logo design options for this brand, make them black \
                  and white, with black being #3D3D3D. Have a mix of some without the name \
                  and some with.",
    response_format: r#"
Return a JSON object with this exact structure:
{
  "logos": [
    {
      "name": "Logo Name",
      "description": "Description of the logo design and what it represents",
      "svg": "<svg>...</svg>"
    }
  ],
  "description": "Overall explanation of the logo options and design approach"
}

Create 3 distinct logo styles:
1. A modern, minimalist design
2. A classic, professional design
3. A creative, unique design

Each SVG should be 200x200 viewBox with appropriate colors and styling that match the brand's personality.
"#,
};

/// Brand voice generation for the voice step.
pub const BRAND_VOICE_PROMPT: PromptSpec = PromptSpec {
    instruction: "Please suggest 3 brand voice styles that best represent how this brand \
                  should communicate with its audience.",
    response_format: r#"
Each brandVoice item should be an object with the following structure:

{
  id: name of the voice style as an identifier,
  name: name of the voice style,
  description: a brief description of the voice style,
  hero: a short hero text about the voice (max 6 words),
  descriptive: a detailed description of the voice,
  persona: {
    name: name of the person representing the voice,
    age: age of the person,
    occupation: occupation of the person,
    background: background information about the person,
    personality: personality traits of the person,
    communicationStyle: how the person typically communicates
  }
}

Return a JSON object with this exact structure:

{
  "brandVoices": [ {}, {}, {} ],
  "description": "Include a detailed explanation of why these brand voices were recommended for this brand"
}
"#,
};

/// Imagery keyword generation for the imagery direction step.
pub const IMAGERY_DIRECTION_PROMPT: PromptSpec = PromptSpec {
    instruction: "Generate 3 keywords that would yield the most accurate and brand-aligned \
                  imagery direction for this company, suitable for use in an images API query",
    response_format: r#"
Each imagerySet item should be an object with the following structure:

{
  id: The keyword to be used as the ID,
  keyword: The appropriate keyword,
  description: A description of the keyword, not exceeding 20 word
}

Return a JSON object with this exact structure:
{
  "imagerySets": [{}, {}, {}],
}
"#,
};
