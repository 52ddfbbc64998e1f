//! Prompt rendering.
//!
//! Turns an [`AttributeSet`] into the sentence handed to the image model.
//! Values are substituted verbatim, in a fixed clause order.

use crate::attributes::AttributeSet;

/// Render the prompt text for an attribute set.
///
/// The hijab style, when present, qualifies the women's clothing clause.
/// The accessories clause is left out entirely when absent.
pub fn render_prompt(attrs: &AttributeSet) -> String {
    let mut parts = vec![
        format!("Create a {} couple portrait", attrs.theme),
        format!("in {} style.", attrs.visual_style),
        format!("Pose: {}.", attrs.couple_pose),
        format!("Setting: {}.", attrs.studio_background),
        format!("Lighting: {}.", attrs.lighting),
        format!("Camera angle: {}.", attrs.camera_angle),
        format!("Man wearing: {}, {}.", attrs.mens_top, attrs.mens_bottom),
    ];

    match &attrs.hijab_style {
        Some(hijab) => parts.push(format!(
            "Woman wearing: {}, {}.",
            attrs.womens_clothing, hijab
        )),
        None => parts.push(format!("Woman wearing: {}.", attrs.womens_clothing)),
    }

    if let Some(accessories) = &attrs.accessories {
        parts.push(format!("Accessories: {accessories}."));
    }

    parts.push(format!("Aspect ratio: {}", attrs.aspect_ratio));

    parts.join(" ")
}
