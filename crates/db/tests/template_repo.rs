//! Integration tests for the prompt template repository.
//!
//! Exercises the repository layer against a real database, including the
//! preset seeded by the migrations.

use assert_matches::assert_matches;
use duet_core::attributes::AttributeInput;
use duet_core::catalog::{Theme, VisualStyle};
use duet_core::error::CoreError;
use duet_db::models::template::CreatePromptTemplate;
use duet_db::repositories::PromptTemplateRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn attributes() -> AttributeInput {
    AttributeInput {
        theme: "Vintage".to_string(),
        visual_style: "Black and White".to_string(),
        studio_background: "Classic Library Setting".to_string(),
        lighting: "Dim ambient light".to_string(),
        camera_angle: "Full body shot".to_string(),
        couple_pose: "Man holding the woman's arm from behind".to_string(),
        mens_top: "Light blue oxford shirt".to_string(),
        mens_bottom: "Grey formal slacks".to_string(),
        womens_clothing: "Vintage-style A-line dress".to_string(),
        hijab_style: Some("Elegant wrapped hijab with subtle patterns".to_string()),
        accessories: None,
        aspect_ratio: "--ar 9:16".to_string(),
    }
}

fn new_template(name: &str, is_preset: bool) -> CreatePromptTemplate {
    CreatePromptTemplate {
        name: name.to_string(),
        description: Some("Library session".to_string()),
        attributes: attributes(),
        is_preset,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_preset_present(pool: PgPool) {
    let presets = PromptTemplateRepo::list(&pool, Some(true)).await.unwrap();
    assert_eq!(presets.len(), 1);
    assert_eq!(presets[0].name, "Formal Wedding Style");
    assert!(presets[0].is_preset);
    assert_eq!(presets[0].hijab_style, None);

    // The seed must itself be a valid attribute set.
    presets[0].attribute_input().into_attribute_set().unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_list_round_trip(pool: PgPool) {
    let input = new_template("Library Noir", false).validate().unwrap();
    let created = PromptTemplateRepo::create(&pool, &input).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Library Noir");
    assert_eq!(created.description.as_deref(), Some("Library session"));
    assert_eq!(created.theme, Theme::Vintage.as_str());
    assert_eq!(created.visual_style, VisualStyle::BlackAndWhite.as_str());
    assert_eq!(created.aspect_ratio, "--ar 9:16");
    assert!(!created.is_preset);

    let all = PromptTemplateRepo::list(&pool, None).await.unwrap();
    let listed = all.iter().find(|t| t.id == created.id).expect("created template listed");
    assert_eq!(listed.name, created.name);
    assert_eq!(listed.couple_pose, created.couple_pose);
    assert_eq!(listed.hijab_style, created.hijab_style);
    assert_eq!(listed.accessories, None);
    assert_eq!(listed.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_newest_first_and_filter(pool: PgPool) {
    let first = PromptTemplateRepo::create(&pool, &new_template("First", false).validate().unwrap())
        .await
        .unwrap();
    let second = PromptTemplateRepo::create(&pool, &new_template("Second", true).validate().unwrap())
        .await
        .unwrap();
    assert!(second.created_at >= first.created_at);
    assert!(second.id > first.id);

    let all = PromptTemplateRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);

    let user_only = PromptTemplateRepo::list(&pool, Some(false)).await.unwrap();
    assert_eq!(user_only.len(), 1);
    assert_eq!(user_only[0].id, first.id);

    let presets = PromptTemplateRepo::list(&pool, Some(true)).await.unwrap();
    assert_eq!(presets.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id(pool: PgPool) {
    let created = PromptTemplateRepo::create(&pool, &new_template("Findable", false).validate().unwrap())
        .await
        .unwrap();

    let found = PromptTemplateRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.map(|t| t.name), Some("Findable".to_string()));

    let missing = PromptTemplateRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_invalid_template_never_reaches_storage() {
    let blank = new_template("  ", false).validate().unwrap_err();
    assert_matches!(blank, CoreError::Validation(ref msg) if msg.contains("name"));

    let mut bad_theme = new_template("Bad theme", false);
    bad_theme.attributes.theme = "vintage".to_string();
    assert_matches!(bad_theme.validate(), Err(CoreError::Validation(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_by_preset_flag(pool: PgPool) {
    let new = new_template("Counted", false).validate().unwrap();
    PromptTemplateRepo::create(&pool, &new).await.unwrap();

    assert_eq!(PromptTemplateRepo::count(&pool, Some(true)).await.unwrap(), 1);
    assert_eq!(PromptTemplateRepo::count(&pool, Some(false)).await.unwrap(), 1);
    assert_eq!(PromptTemplateRepo::count(&pool, None).await.unwrap(), 2);
}
