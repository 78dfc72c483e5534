// web_app/api/queries.rs - Database query implementations
//
// CRUD over catalog.products plus the read-only category list.
//
// Philosophy: pure functions that take a pool and parameters and return
// typed results. No side effects beyond the statement itself, easy to
// test against a real database.

use sqlx::{PgPool, Row};

use crate::web_app::model::*;

const PRODUCT_COLUMNS: &str = "id, name, description, price::numeric as price, stock, \
     entry_date, category_id, image_url, owner_id, created_at, updated_at";

/// One page of products in stable server order (by id).
///
/// The answer echoes the requested index along with the page count so
/// the client can fold both back into its paging state.
pub async fn list_products(
    pool: &PgPool,
    page_index: u32,
    page_size: u32,
) -> Result<ProductPage, sqlx::Error> {
    let page_size = page_size.max(1);

    let total_row = sqlx::query("SELECT COUNT(*) FROM catalog.products")
        .fetch_one(pool)
        .await?;
    let total_items: i64 = total_row.get(0);

    let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;

    let offset = (page_index as i64) * (page_size as i64);
    let sql = format!(
        "SELECT {} FROM catalog.products ORDER BY id LIMIT $1 OFFSET $2",
        PRODUCT_COLUMNS
    );

    let items = sqlx::query_as::<_, Product>(&sql)
        .bind(page_size as i64)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(ProductPage {
        items,
        page_index,
        total_pages,
        total_items,
    })
}

/// Insert a product and return the stored row.
pub async fn insert_product(pool: &PgPool, payload: &ProductPayload) -> Result<Product, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO catalog.products
            (name, description, price, stock, entry_date, category_id, image_url, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {}
        "#,
        PRODUCT_COLUMNS
    );

    sqlx::query_as::<_, Product>(&sql)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.stock)
        .bind(payload.entry_date)
        .bind(payload.category_id)
        .bind(&payload.image_url)
        .bind(payload.owner_id)
        .fetch_one(pool)
        .await
}

/// Update the product named by `id` and return the stored row.
///
/// A missing id surfaces as RowNotFound.
pub async fn update_product(
    pool: &PgPool,
    id: i32,
    payload: &ProductPayload,
) -> Result<Product, sqlx::Error> {
    let sql = format!(
        r#"
        UPDATE catalog.products SET
            name = $2,
            description = $3,
            price = $4,
            stock = $5,
            entry_date = $6,
            category_id = $7,
            image_url = $8,
            owner_id = $9,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        PRODUCT_COLUMNS
    );

    sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(payload.stock)
        .bind(payload.entry_date)
        .bind(payload.category_id)
        .bind(&payload.image_url)
        .bind(payload.owner_id)
        .fetch_one(pool)
        .await
}

/// Delete a product by id. A missing id surfaces as RowNotFound.
pub async fn delete_product(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    let result = sqlx::query("DELETE FROM catalog.products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

/// All categories ordered by display name.
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "SELECT id, name, description FROM catalog.categories ORDER BY name",
    )
    .fetch_all(pool)
    .await
}
