// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use sqlx::FromRow;

/// Owner id stamped onto every payload sent from this screen.
///
/// The admin screen manages a single user's catalog; multi-user
/// ownership is handled elsewhere.
pub const DEFAULT_OWNER_ID: i32 = 2;

/// Product from database (matches catalog.products schema)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(FromRow))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: rust_decimal::Decimal,
    pub stock: i32,
    pub entry_date: chrono::NaiveDate,
    pub category_id: i32,
    pub image_url: Option<String>,
    pub owner_id: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Category referenced by products (read-only on this screen)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(FromRow))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Request body for create and update calls.
///
/// Carries no id; the target product is named by the call itself.
/// Numeric fields are already coerced (stock and category id are i32
/// everywhere, price travels as f64 and is stored as NUMERIC).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub entry_date: chrono::NaiveDate,
    pub category_id: i32,
    pub image_url: Option<String>,
    pub owner_id: i32,
}

/// One page of the product list as returned by the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub page_index: u32,
    pub total_pages: u32,
    pub total_items: i64,
}

impl ProductPage {
    /// An empty page, used before the first fetch resolves.
    pub fn empty(page_index: u32) -> Self {
        ProductPage {
            items: vec![],
            page_index,
            total_pages: 0,
            total_items: 0,
        }
    }
}

/// Response of a successful image upload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

/// Category from JSON seed data (flexible schema)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub description: Option<String>,
}

/// Product from JSON seed data (flexible schema)
///
/// References its category by name; the importer resolves the id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: Option<i32>,
    pub entry_date: chrono::NaiveDate,
    pub category: String,
    pub image_url: Option<String>,
}
