//! Random attribute sets for the "surprise me" button.
//!
//! Each field is drawn independently and uniformly. Callers can hold their
//! current attire and/or hijab style fixed through [`HeldFields`].

use rand::Rng;
use serde::Deserialize;

use crate::attributes::{normalize_optional, AttributeSet, MAX_FREE_TEXT_LEN};
use crate::catalog::{
    self, CameraAngle, CouplePose, Lighting, StudioBackground, Theme, VisualStyle,
};

/// Stand-in for a preserved attire field that is missing, blank or too long.
pub const PRESERVED_ATTIRE: &str = "Preserved current attire";

pub const MENS_TOPS: &[&str] = &[
    "White formal dress shirt",
    "Black turtleneck sweater",
    "Navy blue blazer",
    "Casual white polo shirt",
    "Traditional batik shirt",
    "Light blue oxford shirt",
];

pub const MENS_BOTTOMS: &[&str] = &[
    "Dark navy formal trousers",
    "Black dress pants",
    "Khaki chinos",
    "Dark blue jeans",
    "Traditional sarong",
    "Grey formal slacks",
];

pub const WOMENS_CLOTHING: &[&str] = &[
    "Elegant long-sleeve dress in navy blue",
    "White blouse with black pencil skirt",
    "Floral midi dress",
    "Traditional kebaya with batik skirt",
    "Vintage-style A-line dress",
    "Professional blazer with matching pants",
];

/// `None` means no hijab.
pub const HIJAB_STYLES: &[Option<&str>] = &[
    Some("Simple draped hijab in neutral color"),
    Some("Elegant wrapped hijab with subtle patterns"),
    Some("Traditional Indonesian jilbab style"),
    Some("Modern layered hijab in pastel tones"),
    None,
];

/// `None` means no accessories.
pub const ACCESSORIES: &[Option<&str>] = &[
    Some("Simple pearl earrings"),
    Some("Traditional gold jewelry"),
    Some("Minimalist watch and bracelet"),
    Some("Vintage brooch on lapel"),
    Some("Small flower corsage"),
    None,
];

/// Which fields to keep, and the caller's current values for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeldFields {
    #[serde(default)]
    pub preserve_attire: bool,
    #[serde(default)]
    pub preserve_hijab: bool,
    pub mens_top: Option<String>,
    pub mens_bottom: Option<String>,
    pub womens_clothing: Option<String>,
    pub hijab_style: Option<String>,
}

/// Uniform pick from a non-empty slice.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn within_limit(value: &str) -> bool {
    value.chars().count() <= MAX_FREE_TEXT_LEN
}

fn held_or_marker(value: &Option<String>) -> String {
    normalize_optional(value.clone())
        .filter(|v| within_limit(v))
        .unwrap_or_else(|| PRESERVED_ATTIRE.to_string())
}

/// A held hijab that is blank or over the limit counts as absent.
fn held_hijab(value: &Option<String>) -> Option<String> {
    normalize_optional(value.clone()).filter(|v| within_limit(v))
}

/// Draw a fresh attribute set.
pub fn randomize<R: Rng + ?Sized>(rng: &mut R, held: &HeldFields) -> AttributeSet {
    let aspect_ratios: Vec<&str> = catalog::aspect_ratio_values().collect();

    let (mens_top, mens_bottom, womens_clothing) = if held.preserve_attire {
        (
            held_or_marker(&held.mens_top),
            held_or_marker(&held.mens_bottom),
            held_or_marker(&held.womens_clothing),
        )
    } else {
        (
            pick(rng, MENS_TOPS).to_string(),
            pick(rng, MENS_BOTTOMS).to_string(),
            pick(rng, WOMENS_CLOTHING).to_string(),
        )
    };

    let hijab_style = if held.preserve_hijab {
        held_hijab(&held.hijab_style)
    } else {
        pick(rng, HIJAB_STYLES).map(str::to_string)
    };

    AttributeSet {
        theme: *pick(rng, Theme::ALL),
        visual_style: *pick(rng, VisualStyle::ALL),
        studio_background: *pick(rng, StudioBackground::ALL),
        lighting: *pick(rng, Lighting::ALL),
        camera_angle: *pick(rng, CameraAngle::ALL),
        couple_pose: *pick(rng, CouplePose::ALL),
        mens_top,
        mens_bottom,
        womens_clothing,
        hijab_style,
        accessories: pick(rng, ACCESSORIES).map(str::to_string),
        aspect_ratio: pick(rng, &aspect_ratios).to_string(),
    }
}
