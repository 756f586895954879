//! Integration tests for the activity group repository.
//!
//! Each test runs against a fresh database with migrations applied.

use serde_json::json;
use sqlx::PgPool;
use todolist_core::fields::FieldSet;
use todolist_core::resource::ActivityGroupField;
use todolist_db::models::activity_group::{CreateActivityGroup, UpdateActivityGroup};
use todolist_db::repositories::ActivityGroupRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_group(title: &str, email: &str) -> CreateActivityGroup {
    CreateActivityGroup {
        title: title.to_string(),
        email: email.to_string(),
    }
}

fn patch(body: serde_json::Value) -> UpdateActivityGroup {
    let map = body.as_object().cloned().unwrap();
    FieldSet::<ActivityGroupField>::partial(&map).unwrap().into()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_assigns_id_and_equal_timestamps(pool: PgPool) {
    let group = ActivityGroupRepo::create(&pool, &new_group("Plan", "a@b.com"))
        .await
        .unwrap();

    assert!(group.id > 0);
    assert_eq!(group.title, "Plan");
    assert_eq!(group.email, "a@b.com");
    assert_eq!(group.created_at, group.updated_at);
}

#[sqlx::test]
async fn test_create_from_complete_field_set(pool: PgPool) {
    let map = json!({"title": "Plan", "email": "a@b.com"})
        .as_object()
        .cloned()
        .unwrap();
    let set = FieldSet::<ActivityGroupField>::complete(&map).unwrap();
    let input = CreateActivityGroup::try_from(set).unwrap();
    let group = ActivityGroupRepo::create(&pool, &input).await.unwrap();
    assert_eq!(group.title, "Plan");
}

#[sqlx::test]
async fn test_find_by_id_missing_returns_none(pool: PgPool) {
    let found = ActivityGroupRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_list_returns_rows_in_id_order(pool: PgPool) {
    let first = ActivityGroupRepo::create(&pool, &new_group("A", "a@b.com"))
        .await
        .unwrap();
    let second = ActivityGroupRepo::create(&pool, &new_group("B", "b@b.com"))
        .await
        .unwrap();

    let all = ActivityGroupRepo::list(&pool).await.unwrap();
    let ids: Vec<_> = all.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[sqlx::test]
async fn test_update_touches_only_given_fields(pool: PgPool) {
    let group = ActivityGroupRepo::create(&pool, &new_group("Plan", "a@b.com"))
        .await
        .unwrap();

    let updated = ActivityGroupRepo::update(&pool, group.id, &patch(json!({"title": "Plan v2"})))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, group.id);
    assert_eq!(updated.title, "Plan v2");
    assert_eq!(updated.email, "a@b.com");
    assert_eq!(updated.created_at, group.created_at);
    assert!(updated.updated_at > group.updated_at);
}

#[sqlx::test]
async fn test_update_is_idempotent_on_field_values(pool: PgPool) {
    let group = ActivityGroupRepo::create(&pool, &new_group("Plan", "a@b.com"))
        .await
        .unwrap();
    let input = patch(json!({"title": "Same", "email": "same@b.com"}));

    let once = ActivityGroupRepo::update(&pool, group.id, &input)
        .await
        .unwrap()
        .unwrap();
    let twice = ActivityGroupRepo::update(&pool, group.id, &input)
        .await
        .unwrap()
        .unwrap();

    assert_eq!((once.title, once.email), (twice.title, twice.email));
    assert!(twice.updated_at > once.updated_at);
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = ActivityGroupRepo::update(&pool, 424_242, &patch(json!({"title": "x"})))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_removes_row_permanently(pool: PgPool) {
    let group = ActivityGroupRepo::create(&pool, &new_group("Gone", "g@b.com"))
        .await
        .unwrap();

    assert!(ActivityGroupRepo::delete(&pool, group.id).await.unwrap());
    assert!(ActivityGroupRepo::find_by_id(&pool, group.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ActivityGroupRepo::delete(&pool, group.id).await.unwrap());
}
