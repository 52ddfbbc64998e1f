//! Generated prompt history model and DTOs.

use duet_core::attributes::{AttributeInput, AttributeSet};
use duet_core::composer::render_prompt;
use duet_core::error::CoreError;
use duet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `generated_prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GeneratedPrompt {
    pub id: DbId,
    pub template_id: Option<DbId>,
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
    pub generated_prompt: String,
    pub created_at: Timestamp,
}

/// DTO for a generate request.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePrompt {
    pub template_id: Option<DbId>,
    #[serde(flatten)]
    pub attributes: AttributeInput,
}

/// A rendered prompt, ready for insertion.
#[derive(Debug, Clone)]
pub struct NewGeneratedPrompt {
    pub template_id: Option<DbId>,
    pub attributes: AttributeSet,
    pub generated_prompt: String,
}

impl NewGeneratedPrompt {
    /// Render the prompt text for a validated attribute set.
    pub fn render(attributes: AttributeSet, template_id: Option<DbId>) -> Self {
        let generated_prompt = render_prompt(&attributes);
        Self {
            template_id,
            attributes,
            generated_prompt,
        }
    }
}

impl GeneratePrompt {
    /// Validate the attributes and render the prompt.
    pub fn validate(self) -> Result<NewGeneratedPrompt, CoreError> {
        let attributes = self.attributes.into_attribute_set()?;
        Ok(NewGeneratedPrompt::render(attributes, self.template_id))
    }
}
