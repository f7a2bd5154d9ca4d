//! Brand identity suite assembly.
//!
//! A read-only derivation over the profile's selections: the perceptually
//! darkest and lightest palette colors become the suite's accent pair, and
//! the stored logo SVG is recolored by substituting its fill attributes.
//! Everything here is a pure function of its inputs and is recomputed on
//! every call; nothing is cached.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::BrandProfile;

static HEX_FILL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"fill=["']#[0-9a-fA-F]{3,6}["']"#).expect("valid regex"));
static CURRENT_COLOR_FILL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"fill=["']currentColor["']"#).expect("valid regex"));
static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([a-fA-F0-9]{2})([a-fA-F0-9]{2})([a-fA-F0-9]{2})$").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Fallback accent when the palette has no usable dark color.
pub const FALLBACK_DARK: &str = "#000000";

/// Fallback accent when the palette has no usable light color.
pub const FALLBACK_LIGHT: &str = "#ffffff";

/// Decode a six-digit hex color to its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let captures = HEX_COLOR.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&captures[i], 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// Perceptual brightness of a hex color, 0 (darkest) to 255 (lightest).
///
/// Uses the standard luma weights: `(r*299 + g*587 + b*114) / 1000`.
pub fn brightness(hex: &str) -> Option<f64> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some((f64::from(r) * 299.0 + f64::from(g) * 587.0 + f64::from(b) * 114.0) / 1000.0)
}

fn brightness_or_zero(hex: &str) -> f64 {
    brightness(hex).unwrap_or(0.0)
}

/// The darkest color in the palette, or [`FALLBACK_DARK`] when empty.
pub fn darkest_color(palette: &[String]) -> String {
    palette
        .iter()
        .min_by(|a, b| {
            brightness_or_zero(a)
                .partial_cmp(&brightness_or_zero(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .cloned()
        .unwrap_or_else(|| FALLBACK_DARK.to_string())
}

/// The lightest color in the palette, or [`FALLBACK_LIGHT`] when empty.
pub fn lightest_color(palette: &[String]) -> String {
    palette
        .iter()
        .max_by(|a, b| {
            brightness_or_zero(a)
                .partial_cmp(&brightness_or_zero(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .cloned()
        .unwrap_or_else(|| FALLBACK_LIGHT.to_string())
}

/// Replace every fill attribute in an SVG payload with the given color.
///
/// Covers double- and single-quoted hex fills and `currentColor`.
pub fn recolor_svg(svg: &str, color: &str) -> String {
    let replacement = format!("fill=\"{color}\"");
    let recolored = HEX_FILL.replace_all(svg, replacement.as_str());
    CURRENT_COLOR_FILL
        .replace_all(&recolored, replacement.as_str())
        .into_owned()
}

/// Download file name for a logo: lowercased, whitespace collapsed to `-`,
/// with a `-logo.svg` suffix.
pub fn logo_file_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let slug = WHITESPACE.replace_all(lowered.trim(), "-");
    format!("{slug}-logo.svg")
}

/// Derived accent colors and logo renditions for the identity suite step.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentitySuite {
    /// Darkest palette color; used as the cover background and heading accent.
    pub darkest: String,
    /// Lightest palette color; used as the foreground accent on dark ground.
    pub lightest: String,
    /// The selected logo recolored to the lightest accent, for the cover.
    pub cover_logo: Option<String>,
    /// The logo recolored once per palette color, in palette order.
    pub logo_variations: Vec<String>,
}

impl IdentitySuite {
    /// Derive the suite from the profile's current selections.
    ///
    /// Pure; callers must re-derive whenever `selected_colors` or
    /// `selected_logo` change rather than hold a stale value.
    pub fn derive(profile: &BrandProfile) -> Self {
        let darkest = darkest_color(&profile.selected_colors);
        let lightest = lightest_color(&profile.selected_colors);

        let cover_logo = profile
            .selected_logo
            .as_deref()
            .map(|svg| recolor_svg(svg, &lightest));

        let logo_variations = match profile.selected_logo.as_deref() {
            Some(svg) => profile
                .selected_colors
                .iter()
                .map(|color| recolor_svg(svg, color))
                .collect(),
            None => Vec::new(),
        };

        Self {
            darkest,
            lightest,
            cover_logo,
            logo_variations,
        }
    }
}
