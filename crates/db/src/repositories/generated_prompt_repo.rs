//! Repository for the append-only `generated_prompts` table.

use duet_core::types::DbId;
use sqlx::PgPool;

use crate::models::generated_prompt::{GeneratedPrompt, NewGeneratedPrompt};

const COLUMNS: &str = "id, template_id, theme, visual_style, studio_background, \
     lighting, camera_angle, couple_pose, mens_top, mens_bottom, womens_clothing, \
     hijab_style, accessories, aspect_ratio, generated_prompt, created_at";

/// Provides append and read operations for generated prompts.
pub struct GeneratedPromptRepo;

impl GeneratedPromptRepo {
    /// Append a rendered prompt, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &NewGeneratedPrompt,
    ) -> Result<GeneratedPrompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_prompts \
                (template_id, theme, visual_style, studio_background, lighting, \
                 camera_angle, couple_pose, mens_top, mens_bottom, womens_clothing, \
                 hijab_style, accessories, aspect_ratio, generated_prompt) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        let attrs = &input.attributes;
        sqlx::query_as::<_, GeneratedPrompt>(&query)
            .bind(input.template_id)
            .bind(attrs.theme.as_str())
            .bind(attrs.visual_style.as_str())
            .bind(attrs.studio_background.as_str())
            .bind(attrs.lighting.as_str())
            .bind(attrs.camera_angle.as_str())
            .bind(attrs.couple_pose.as_str())
            .bind(&attrs.mens_top)
            .bind(&attrs.mens_bottom)
            .bind(&attrs.womens_clothing)
            .bind(&attrs.hijab_style)
            .bind(&attrs.accessories)
            .bind(&attrs.aspect_ratio)
            .bind(&input.generated_prompt)
            .fetch_one(pool)
            .await
    }

    /// Find a generated prompt by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GeneratedPrompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM generated_prompts WHERE id = $1");
        sqlx::query_as::<_, GeneratedPrompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List history newest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<GeneratedPrompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generated_prompts \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, GeneratedPrompt>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
