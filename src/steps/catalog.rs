//! Selectable option catalogs for the discovery and typography steps.

/// A selectable option with a stable id and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectableOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Brand values offered during discovery.
pub const VALUE_OPTIONS: [SelectableOption; 8] = [
    SelectableOption { id: "innovation", label: "Innovation" },
    SelectableOption { id: "quality", label: "Quality" },
    SelectableOption { id: "sustainability", label: "Sustainability" },
    SelectableOption { id: "trust", label: "Trust" },
    SelectableOption { id: "excellence", label: "Excellence" },
    SelectableOption { id: "community", label: "Community" },
    SelectableOption { id: "growth", label: "Growth" },
    SelectableOption { id: "integrity", label: "Integrity" },
];

/// Customer problems offered during discovery.
pub const PROBLEM_OPTIONS: [SelectableOption; 6] = [
    SelectableOption { id: "time-saving", label: "Saving Time" },
    SelectableOption { id: "cost-reduction", label: "Reducing Costs" },
    SelectableOption { id: "quality-improvement", label: "Improving Quality" },
    SelectableOption { id: "efficiency", label: "Increasing Efficiency" },
    SelectableOption { id: "convenience", label: "Enhancing Convenience" },
    SelectableOption { id: "sustainability", label: "Promoting Sustainability" },
];

/// A font choice with preview copy for the typography step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub content: &'static str,
}

/// Fonts offered on the typography step.
pub const FONT_OPTIONS: [FontOption; 3] = [
    FontOption {
        id: "inter",
        name: "Inter",
        subtitle: "A modern, clean typeface",
        content: "Perfect for digital interfaces and modern designs. Inter is known for its \
                  excellent readability and versatility.",
    },
    FontOption {
        id: "lexend",
        name: "Lexend",
        subtitle: "A contemporary, professional typeface",
        content: "Lexend offers a perfect balance between modern aesthetics and professional \
                  appearance. Great for corporate and creative projects.",
    },
    FontOption {
        id: "poppins",
        name: "Poppins",
        subtitle: "A geometric sans-serif typeface",
        content: "Poppins brings a geometric touch to your typography. Its clean lines and \
                  modern feel make it ideal for contemporary designs.",
    },
];

/// UI cap on highlighted brand values. The model itself does not enforce it.
pub const MAX_SELECTED_VALUES: usize = 3;

/// Cap on inspiration image selections, enforced by the toggle action.
pub const MAX_SELECTED_IMAGES: usize = 5;
