// web_app/server_fns.rs - Leptos server function declarations
//
// The CRUD API the catalog screen consumes. The #[server] macro
// generates:
// - On server: the actual function implementation
// - On client: a stub that makes HTTP POST requests to the server
//
// Server functions are bridges, not business logic: SQL lives in
// api::queries, file handling in api::uploads. Context extraction and
// error conversion to ServerFnError happen here.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use sqlx::PgPool;

    use crate::web_app::api::db;

    // First try the Leptos context (tests set the pool there)
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    // Global pool installed by the server binary
    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }
            if let Some(pool) = req.app_data::<PgPool>() {
                return Ok(pool.clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Database pool not available"))
}

/// List one page of products in server order.
#[server(ListProducts, "/api")]
pub async fn list_products(
    page_index: u32,
    page_size: u32,
) -> Result<ProductPage, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("List request: page_index={}, page_size={}", page_index, page_size);

    let pool = pool().await?;
    let page = queries::list_products(&pool, page_index, page_size).await;

    match &page {
        Ok(p) => tracing::info!(
            "List successful: {} items, page {}/{}",
            p.items.len(),
            p.page_index,
            p.total_pages
        ),
        Err(e) => tracing::error!("List failed: {}", e),
    }

    page.map_err(|e| ServerFnError::new(format!("Listing products failed: {}", e)))
}

/// Create a product and return the stored record.
#[server(CreateProduct, "/api")]
pub async fn create_product(payload: ProductPayload) -> Result<Product, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Create request: name='{}'", payload.name);

    let pool = pool().await?;
    queries::insert_product(&pool, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Create failed: {}", e);
            ServerFnError::new(format!("Creating product failed: {}", e))
        })
}

/// Update the product named by `id` and return the stored record.
#[server(UpdateProduct, "/api")]
pub async fn update_product(id: i32, payload: ProductPayload) -> Result<Product, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Update request: id={}, name='{}'", id, payload.name);

    let pool = pool().await?;
    queries::update_product(&pool, id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Update failed for id={}: {}", id, e);
            ServerFnError::new(format!("Updating product failed: {}", e))
        })
}

/// Delete a product by id.
#[server(DeleteProduct, "/api")]
pub async fn delete_product(id: i32) -> Result<(), ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Delete request: id={}", id);

    let pool = pool().await?;
    queries::delete_product(&pool, id).await.map_err(|e| {
        tracing::error!("Delete failed for id={}: {}", id, e);
        ServerFnError::new(format!("Deleting product failed: {}", e))
    })
}

/// All categories, for the form's select. Read-only on this screen.
#[server(ListCategories, "/api")]
pub async fn list_categories() -> Result<Vec<Category>, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::list_categories(&pool).await.map_err(|e| {
        tracing::error!("Category load failed: {}", e);
        ServerFnError::new(format!("Loading categories failed: {}", e))
    })
}

/// Store an uploaded image and return its public URL.
#[server(UploadImage, "/api")]
pub async fn upload_image(
    file_name: String,
    content: Vec<u8>,
) -> Result<UploadedImage, ServerFnError> {
    use crate::web_app::api::uploads;

    tracing::info!("Upload request: file='{}', {} bytes", file_name, content.len());

    uploads::store_image(&file_name, &content).map_err(|e| {
        tracing::error!("Upload failed for '{}': {}", file_name, e);
        ServerFnError::new(format!("Image upload failed: {}", e))
    })
}
