//! Attribute sets: the bundle of fields describing one photo composition.
//!
//! [`AttributeInput`] is the loosely-typed shape clients send.
//! [`AttributeInput::into_attribute_set`] normalizes and validates it into an
//! [`AttributeSet`], whose enumerated fields are guaranteed catalog members.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{
    CameraAngle, CouplePose, Lighting, StudioBackground, Theme, VisualStyle,
    DEFAULT_ASPECT_RATIO,
};
use crate::error::CoreError;

/// A validated attribute set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub theme: Theme,
    pub visual_style: VisualStyle,
    pub studio_background: StudioBackground,
    pub lighting: Lighting,
    pub camera_angle: CameraAngle,
    pub couple_pose: CouplePose,
    pub mens_top: String,
    pub mens_bottom: String,
    pub womens_clothing: String,
    pub hijab_style: Option<String>,
    pub accessories: Option<String>,
    pub aspect_ratio: String,
}

/// Raw attribute fields as submitted by a client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttributeInput {
    pub theme: String,
    pub visual_style: String,
    pub studio_background: String,
    pub lighting: String,
    pub camera_angle: String,
    pub couple_pose: String,
    #[validate(length(min = 1, max = 500, message = "must be 1-500 characters"))]
    pub mens_top: String,
    #[validate(length(min = 1, max = 500, message = "must be 1-500 characters"))]
    pub mens_bottom: String,
    #[validate(length(min = 1, max = 500, message = "must be 1-500 characters"))]
    pub womens_clothing: String,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub hijab_style: Option<String>,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub accessories: Option<String>,
    #[serde(default = "default_aspect_ratio")]
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub aspect_ratio: String,
}

/// Upper bound on any free-text attribute, in characters.
pub const MAX_FREE_TEXT_LEN: usize = 500;

fn default_aspect_ratio() -> String {
    DEFAULT_ASPECT_RATIO.to_string()
}

/// Trim an optional field; blank values count as absent.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AttributeInput {
    /// Trim free text, then check lengths and catalog membership.
    ///
    /// Free-text problems are reported before enumerated ones.
    pub fn into_attribute_set(self) -> Result<AttributeSet, CoreError> {
        let input = AttributeInput {
            mens_top: self.mens_top.trim().to_string(),
            mens_bottom: self.mens_bottom.trim().to_string(),
            womens_clothing: self.womens_clothing.trim().to_string(),
            hijab_style: normalize_optional(self.hijab_style),
            accessories: normalize_optional(self.accessories),
            aspect_ratio: self.aspect_ratio.trim().to_string(),
            ..self
        };
        input.validate()?;

        Ok(AttributeSet {
            theme: input.theme.parse()?,
            visual_style: input.visual_style.parse()?,
            studio_background: input.studio_background.parse()?,
            lighting: input.lighting.parse()?,
            camera_angle: input.camera_angle.parse()?,
            couple_pose: input.couple_pose.parse()?,
            mens_top: input.mens_top,
            mens_bottom: input.mens_bottom,
            womens_clothing: input.womens_clothing,
            hijab_style: input.hijab_style,
            accessories: input.accessories,
            aspect_ratio: input.aspect_ratio,
        })
    }
}

impl From<AttributeSet> for AttributeInput {
    fn from(set: AttributeSet) -> Self {
        AttributeInput {
            theme: set.theme.to_string(),
            visual_style: set.visual_style.to_string(),
            studio_background: set.studio_background.to_string(),
            lighting: set.lighting.to_string(),
            camera_angle: set.camera_angle.to_string(),
            couple_pose: set.couple_pose.to_string(),
            mens_top: set.mens_top,
            mens_bottom: set.mens_bottom,
            womens_clothing: set.womens_clothing,
            hijab_style: set.hijab_style,
            accessories: set.accessories,
            aspect_ratio: set.aspect_ratio,
        }
    }
}
