//! Integration tests for the catalog store.
//!
//! Exercises the repository layer against a real database:
//! - upsert insert and full-replace semantics
//! - find_by_id, list ordering
//! - case-insensitive substring search across the text columns
//! - hide / unhide

use gorgina_db::models::catalog::PutCatalogItem;
use gorgina_db::repositories::{CatalogRepo, UsageRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(id: &str, title: &str) -> PutCatalogItem {
    PutCatalogItem {
        id: id.to_string(),
        category: None,
        brand: None,
        color: None,
        pattern: None,
        title: Some(title.to_string()),
        description: None,
        price: None,
    }
}

fn full_item(id: &str) -> PutCatalogItem {
    PutCatalogItem {
        id: id.to_string(),
        category: Some("Outerwear".to_string()),
        brand: Some("Acme".to_string()),
        color: Some("Navy".to_string()),
        pattern: Some("Plain".to_string()),
        title: Some("Blue Jacket".to_string()),
        description: Some("Waterproof shell".to_string()),
        price: Some(50.0),
    }
}

fn assert_matches_input(item: &gorgina_db::models::catalog::CatalogItem, input: &PutCatalogItem) {
    assert_eq!(item.id, input.id);
    assert_eq!(item.category, input.category);
    assert_eq!(item.brand, input.brand);
    assert_eq!(item.color, input.color);
    assert_eq!(item.pattern, input.pattern);
    assert_eq!(item.title, input.title);
    assert_eq!(item.description, input.description);
    assert_eq!(item.price, input.price);
}

// ---------------------------------------------------------------------------
// Test: upsert then get returns the same fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_and_get(pool: PgPool) {
    let input = full_item("a1");
    let created = CatalogRepo::upsert(&pool, &input).await.unwrap();
    assert_matches_input(&created, &input);
    assert!(!created.hidden, "new items default to visible");
    assert!(created.last_activity.is_none());
    assert!(created.last_note.is_none());

    let found = CatalogRepo::find_by_id(&pool, "a1")
        .await
        .unwrap()
        .expect("item should exist");
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_returns_none(pool: PgPool) {
    let found = CatalogRepo::find_by_id(&pool, "nope").await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Test: upsert replaces every field, absent fields become NULL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_replaces_without_merge(pool: PgPool) {
    CatalogRepo::upsert(&pool, &full_item("a1")).await.unwrap();

    let replacement = new_item("a1", "Renamed");
    let replaced = CatalogRepo::upsert(&pool, &replacement).await.unwrap();

    assert_matches_input(&replaced, &replacement);
    assert_eq!(replaced.brand, None, "absent field must be cleared, not kept");
    assert_eq!(replaced.price, None);

    let all = CatalogRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1, "replace must not create a second row");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_preserves_hidden_and_usage_cache(pool: PgPool) {
    CatalogRepo::upsert(&pool, &full_item("a1")).await.unwrap();
    CatalogRepo::set_hidden(&pool, "a1", true).await.unwrap();
    let recorded = UsageRepo::record(&pool, "a1").await.unwrap();

    let replaced = CatalogRepo::upsert(&pool, &new_item("a1", "Renamed"))
        .await
        .unwrap();
    assert!(replaced.hidden);
    assert_eq!(replaced.last_activity, Some(recorded.event.ts));
    assert_eq!(replaced.created_at, recorded.item.created_at);
}

// ---------------------------------------------------------------------------
// Test: upsert is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_idempotent(pool: PgPool) {
    let input = full_item("a1");
    let first = CatalogRepo::upsert(&pool, &input).await.unwrap();
    let after_once = CatalogRepo::list(&pool).await.unwrap();

    let second = CatalogRepo::upsert(&pool, &input).await.unwrap();
    let after_twice = CatalogRepo::list(&pool).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(after_once, after_twice);
}

// ---------------------------------------------------------------------------
// Test: list order is insertion order and stable across replaces
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_insertion_order(pool: PgPool) {
    for id in ["c", "a", "b"] {
        CatalogRepo::upsert(&pool, &new_item(id, id)).await.unwrap();
    }
    // Replacing an existing item must not move it.
    CatalogRepo::upsert(&pool, &new_item("c", "changed"))
        .await
        .unwrap();

    let ids: Vec<String> = CatalogRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

// ---------------------------------------------------------------------------
// Test: search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_any_text_field(pool: PgPool) {
    let items = [
        PutCatalogItem {
            title: Some("Red Scarf".into()),
            ..new_item("t", "")
        },
        PutCatalogItem {
            title: None,
            color: Some("dark RED".into()),
            ..new_item("c", "")
        },
        PutCatalogItem {
            title: Some("Jeans".into()),
            ..new_item("none", "")
        },
        PutCatalogItem {
            title: None,
            description: Some("covered in credit cards".into()),
            ..new_item("d", "")
        },
        PutCatalogItem {
            title: None,
            brand: Some("Redwood".into()),
            ..new_item("b", "")
        },
        PutCatalogItem {
            title: None,
            category: Some("shirts".into()),
            pattern: Some("tiny red dots".into()),
            ..new_item("p", "")
        },
    ];
    for item in &items {
        CatalogRepo::upsert(&pool, item).await.unwrap();
    }

    let found: Vec<String> = CatalogRepo::search(&pool, "red")
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();

    // Same relative order as the full list.
    assert_eq!(found, vec!["t", "c", "d", "b", "p"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    CatalogRepo::upsert(&pool, &new_item("pct", "100% cotton"))
        .await
        .unwrap();
    CatalogRepo::upsert(&pool, &new_item("plain", "1000 threads"))
        .await
        .unwrap();

    let found = CatalogRepo::search(&pool, "100%").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "pct");

    let underscore = CatalogRepo::search(&pool, "_").await.unwrap();
    assert!(underscore.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_includes_hidden_items(pool: PgPool) {
    CatalogRepo::upsert(&pool, &new_item("a1", "Red Hat"))
        .await
        .unwrap();
    CatalogRepo::set_hidden(&pool, "a1", true).await.unwrap();

    let found = CatalogRepo::search(&pool, "hat").await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].hidden);
}

// ---------------------------------------------------------------------------
// Test: hide / unhide
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_hidden_toggles(pool: PgPool) {
    CatalogRepo::upsert(&pool, &new_item("a1", "Hat")).await.unwrap();

    let hidden = CatalogRepo::set_hidden(&pool, "a1", true)
        .await
        .unwrap()
        .expect("item exists");
    assert!(hidden.hidden);

    // Hidden items still appear in the default list.
    let all = CatalogRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);

    let shown = CatalogRepo::set_hidden(&pool, "a1", false)
        .await
        .unwrap()
        .expect("item exists");
    assert!(!shown.hidden);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_hidden_missing_returns_none(pool: PgPool) {
    let result = CatalogRepo::set_hidden(&pool, "ghost", true).await.unwrap();
    assert!(result.is_none());
}
