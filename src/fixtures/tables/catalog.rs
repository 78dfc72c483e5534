// fixtures/tables/catalog.rs
//
// Catalog schema fixtures: categories and a known set of products.
// The ids and values below are what the query tests assert against,
// so keep them stable.

use crate::fixtures::TestTable;

pub struct CategoriesTable;

impl TestTable for CategoriesTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            "CREATE SCHEMA IF NOT EXISTS catalog",
            r#"
            CREATE TABLE IF NOT EXISTS catalog.categories (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT ''
            )
            "#,
            r#"
            INSERT INTO catalog.categories (name, description)
            VALUES
                ('Electronics', 'Devices and gadgets'),
                ('Furniture', 'Desks, chairs and shelves'),
                ('Stationery', 'Office and school supplies')
            "#,
        ]
    }
}

pub struct ProductsTable;

impl TestTable for ProductsTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            r#"
            CREATE TABLE IF NOT EXISTS catalog.products (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
                stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
                entry_date DATE NOT NULL,
                category_id INTEGER NOT NULL REFERENCES catalog.categories(id),
                image_url TEXT,
                owner_id INTEGER NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            r#"
            INSERT INTO catalog.products
                (name, description, price, stock, entry_date, category_id, image_url, owner_id)
            VALUES
                ('Wireless Headphones',
                 'Noise cancelling, 30-hour battery life',
                 79.99, 12, '2024-01-05', 1, '/uploads/headphones.png', 2),
                ('Mechanical Keyboard',
                 'RGB lighting and hot-swappable switches',
                 89.99, 7, '2024-01-12', 1, NULL, 2),
                ('USB-C Cable',
                 'Braided, fast charging',
                 12.99, 40, '2024-02-01', 1, NULL, 2),
                ('Ergonomic Office Chair',
                 'Lumbar support and adjustable height',
                 199.99, 3, '2024-02-15', 2, '/uploads/chair.png', 2),
                ('Standing Desk',
                 'Electric height adjustment',
                 399.00, 2, '2024-03-01', 2, NULL, 2),
                ('Notebook A5',
                 'Dotted, 120 pages',
                 4.50, 100, '2024-03-10', 3, NULL, 2),
                ('Fountain Pen',
                 'Fine nib, refillable',
                 24.00, 15, '2024-03-22', 3, NULL, 2)
            "#,
        ]
    }
}
