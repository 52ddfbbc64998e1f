//! Repository for the `prompt_templates` table.

use duet_core::types::DbId;
use sqlx::PgPool;

use crate::models::template::{NewPromptTemplate, PromptTemplate};

const COLUMNS: &str = "id, name, description, theme, visual_style, studio_background, \
     lighting, camera_angle, couple_pose, mens_top, mens_bottom, womens_clothing, \
     hijab_style, accessories, aspect_ratio, is_preset, created_at";

/// Provides create and read operations for prompt templates.
pub struct PromptTemplateRepo;

impl PromptTemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewPromptTemplate,
    ) -> Result<PromptTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_templates \
                (name, description, theme, visual_style, studio_background, lighting, \
                 camera_angle, couple_pose, mens_top, mens_bottom, womens_clothing, \
                 hijab_style, accessories, aspect_ratio, is_preset) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {COLUMNS}"
        );
        let attrs = &input.attributes;
        sqlx::query_as::<_, PromptTemplate>(&query)
            .bind(&input.name)
            .bind(&input.description)
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
            .bind(input.is_preset)
            .fetch_one(pool)
            .await
    }

    /// Find a template by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PromptTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompt_templates WHERE id = $1");
        sqlx::query_as::<_, PromptTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List templates, newest first. `is_preset` narrows to presets or
    /// user templates when given.
    pub async fn list(
        pool: &PgPool,
        is_preset: Option<bool>,
    ) -> Result<Vec<PromptTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_templates \
             WHERE ($1::BOOLEAN IS NULL OR is_preset = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PromptTemplate>(&query)
            .bind(is_preset)
            .fetch_all(pool)
            .await
    }

    /// Count templates, optionally only presets or only user templates.
    pub async fn count(pool: &PgPool, is_preset: Option<bool>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM prompt_templates \
             WHERE ($1::BOOLEAN IS NULL OR is_preset = $1)",
        )
        .bind(is_preset)
        .fetch_one(pool)
        .await
    }
}
