//! Prompt template model and DTOs.

use duet_core::attributes::{AttributeInput, AttributeSet};
use duet_core::error::CoreError;
use duet_core::template::{validate_description, validate_template_name};
use duet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `prompt_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptTemplate {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub theme: String,
    pub visual_style: String,
    pub studio_background: String,
    pub lighting: String,
    pub camera_angle: String,
    pub couple_pose: String,
    pub mens_top: String,
    pub mens_bottom: String,
    pub womens_clothing: String,
    pub hijab_style: Option<String>,
    pub accessories: Option<String>,
    pub aspect_ratio: String,
    pub is_preset: bool,
    pub created_at: Timestamp,
}

impl PromptTemplate {
    /// The stored attributes, ready to be re-validated against the catalog.
    pub fn attribute_input(&self) -> AttributeInput {
        AttributeInput {
            theme: self.theme.clone(),
            visual_style: self.visual_style.clone(),
            studio_background: self.studio_background.clone(),
            lighting: self.lighting.clone(),
            camera_angle: self.camera_angle.clone(),
            couple_pose: self.couple_pose.clone(),
            mens_top: self.mens_top.clone(),
            mens_bottom: self.mens_bottom.clone(),
            womens_clothing: self.womens_clothing.clone(),
            hijab_style: self.hijab_style.clone(),
            accessories: self.accessories.clone(),
            aspect_ratio: self.aspect_ratio.clone(),
        }
    }
}

/// DTO for creating a new template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePromptTemplate {
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub attributes: AttributeInput,
    #[serde(default)]
    pub is_preset: bool,
}

/// A validated template, ready for insertion.
#[derive(Debug, Clone)]
pub struct NewPromptTemplate {
    pub name: String,
    pub description: Option<String>,
    pub attributes: AttributeSet,
    pub is_preset: bool,
}

impl CreatePromptTemplate {
    /// Validate the name, description and attributes.
    pub fn validate(self) -> Result<NewPromptTemplate, CoreError> {
        let name = self.name.trim().to_string();
        validate_template_name(&name)?;

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        validate_description(description.as_deref())?;

        Ok(NewPromptTemplate {
            name,
            description,
            attributes: self.attributes.into_attribute_set()?,
            is_preset: self.is_preset,
        })
    }
}
