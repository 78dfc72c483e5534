// tests/queries_tests.rs - Database CRUD and paging queries
//
// Runs against a real PostgreSQL (DATABASE_URL); the schema is dropped
// and rebuilt from the fixtures, so the suite is idempotent. Everything
// lives in one flow because the tests share the catalog schema.

mod common;

use catalog_admin::web_app::api::queries;
use catalog_admin::web_app::model::{ProductPayload, DEFAULT_OWNER_ID};

fn payload(name: &str, category_id: i32) -> ProductPayload {
    ProductPayload {
        name: name.to_string(),
        description: "from the test suite".to_string(),
        price: 42.5,
        stock: 6,
        entry_date: chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        category_id,
        image_url: None,
        owner_id: DEFAULT_OWNER_ID,
    }
}

#[tokio::test]
async fn test_catalog_crud_and_paging() -> anyhow::Result<()> {
    let pool = common::create_test_pool().await?;
    common::setup_catalog(&pool).await?;

    // --- categories are read back ordered by name ---
    let categories = queries::list_categories(&pool).await?;
    assert_eq!(categories.len(), 3);
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Electronics", "Furniture", "Stationery"]);
    let electronics_id = categories[0].id;

    // --- paging: fixtures hold 7 products, page size 3 -> 3 pages ---
    let page0 = queries::list_products(&pool, 0, 3).await?;
    assert_eq!(page0.total_items, 7);
    assert_eq!(page0.total_pages, 3);
    assert_eq!(page0.page_index, 0);
    assert_eq!(page0.items.len(), 3);

    let page1 = queries::list_products(&pool, 1, 3).await?;
    let page2 = queries::list_products(&pool, 2, 3).await?;
    assert_eq!(page1.items.len(), 3);
    assert_eq!(page2.items.len(), 1);

    // pages are disjoint slices in stable id order
    let all_ids: Vec<i32> = page0
        .items
        .iter()
        .chain(&page1.items)
        .chain(&page2.items)
        .map(|p| p.id)
        .collect();
    assert!(
        all_ids.windows(2).all(|w| w[0] < w[1]),
        "server order is by id with no overlap across pages: {:?}",
        all_ids
    );

    // a page past the end is empty but reports the real page count
    let beyond = queries::list_products(&pool, 9, 3).await?;
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_pages, 3);
    assert_eq!(beyond.page_index, 9);

    // --- create ---
    let created = queries::insert_product(&pool, &payload("Test Lamp", electronics_id)).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Test Lamp");
    assert_eq!(created.stock, 6);
    assert_eq!(created.category_id, electronics_id);
    assert_eq!(created.image_url, None);
    assert_eq!(format!("{:.2}", created.price), "42.50");

    let after_create = queries::list_products(&pool, 0, 3).await?;
    assert_eq!(after_create.total_items, 8);

    // --- update ---
    let mut updated_payload = payload("Test Lamp XL", electronics_id);
    updated_payload.price = 55.0;
    updated_payload.image_url = Some("/uploads/lamp.png".to_string());
    let updated = queries::update_product(&pool, created.id, &updated_payload).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Test Lamp XL");
    assert_eq!(updated.image_url.as_deref(), Some("/uploads/lamp.png"));
    assert_eq!(format!("{:.2}", updated.price), "55.00");

    // updating a missing id is RowNotFound
    let missing = queries::update_product(&pool, 999_999, &updated_payload).await;
    assert!(matches!(missing, Err(sqlx::Error::RowNotFound)));

    // --- delete ---
    queries::delete_product(&pool, created.id).await?;
    let after_delete = queries::list_products(&pool, 0, 3).await?;
    assert_eq!(after_delete.total_items, 7);

    // deleting twice is RowNotFound, not a silent success
    let twice = queries::delete_product(&pool, created.id).await;
    assert!(matches!(twice, Err(sqlx::Error::RowNotFound)));

    // --- page size zero is clamped to one ---
    let clamped = queries::list_products(&pool, 0, 0).await?;
    assert_eq!(clamped.items.len(), 1, "size 0 behaves like size 1");
    assert_eq!(clamped.total_pages, 7);

    common::teardown_catalog(&pool).await?;
    Ok(())
}
