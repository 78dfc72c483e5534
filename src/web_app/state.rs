// web_app/state.rs - Client-side state for the catalog screen
//
// Everything here is plain data with no DOM or framework types, so the
// paging transitions, the form state machine, and the row view-model
// mapping can all be unit tested without a browser.
//
// Philosophy: components render state and report actions; handlers apply
// a transition here and trigger a reload when the transition says so.

use serde::{Deserialize, Serialize};

use crate::web_app::model::{Product, ProductPayload, DEFAULT_OWNER_ID};

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Choices offered by the page-size selector.
pub const PAGE_SIZE_CHOICES: [u32; 4] = [5, 10, 20, 50];

/// Paging state for the product table.
///
/// A value object: the page component owns one instance inside a signal
/// and every navigation control goes through the methods below. The
/// transition methods return `true` when the state actually changed and
/// a reload is warranted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page_index: u32,
    page_size: u32,
    total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        PageState::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Fresh state on the first page with an unknown page count.
    pub fn new(page_size: u32) -> Self {
        PageState {
            page_index: 0,
            page_size: page_size.max(1),
            total_pages: 0,
        }
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Set the page size and jump back to the first page.
    pub fn set_page_size(&mut self, size: u32) -> bool {
        self.page_size = size.max(1);
        self.page_index = 0;
        true
    }

    /// Navigate to `index` if it names an existing page; out-of-range
    /// indices leave the state untouched.
    pub fn go_to(&mut self, index: u32) -> bool {
        if index >= self.total_pages {
            return false;
        }
        self.page_index = index;
        true
    }

    pub fn next(&mut self) -> bool {
        match self.page_index.checked_add(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.page_index == 0 {
            return false;
        }
        self.go_to(self.page_index - 1)
    }

    /// Apply a single navigation action.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::Previous => self.previous(),
            PageAction::Next => self.next(),
            PageAction::Goto(index) => self.go_to(index),
        }
    }

    /// Fold the server's answer back into the state.
    ///
    /// The server reports the index it actually served plus the current
    /// page count. If the count shrank below our index (a delete emptied
    /// the last page), clamp to the last valid page so the follow-up
    /// fetch lands on real data.
    pub fn record_response(&mut self, page_index: u32, total_pages: u32) {
        self.total_pages = total_pages;
        self.page_index = page_index;
        if total_pages == 0 {
            self.page_index = 0;
        } else if self.page_index >= total_pages {
            self.page_index = total_pages - 1;
        }
    }

    /// True when `record_response` with these values would be a no-op.
    pub fn in_sync_with(&self, page_index: u32, total_pages: u32) -> bool {
        let mut probe = *self;
        probe.record_response(page_index, total_pages);
        probe == *self
    }

    pub fn has_previous(&self) -> bool {
        self.total_pages > 0 && self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.total_pages > 0 && self.page_index < self.total_pages - 1
    }

    /// Indices for the numbered strip, empty when there are no pages.
    pub fn page_numbers(&self) -> std::ops::Range<u32> {
        0..self.total_pages
    }
}

/// Navigation vocabulary between the pagination strip and the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
    Goto(u32),
}

/// Which product, if any, the modal form is working on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    Editing(i32),
}

/// An image file the user picked but has not uploaded yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The in-progress, unsaved product being created or edited.
///
/// Field values are the raw strings from the form controls; the typed
/// coercions happen in [`FormDraft::payload`]. The draft also tracks two
/// image slots: the URL the product already has and a freshly selected
/// file that has not been uploaded yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDraft {
    mode: FormMode,
    pub name: String,
    pub price: String,
    pub description: String,
    pub stock: String,
    pub entry_date: String,
    pub category_id: String,
    pub existing_image_url: Option<String>,
    pub pending_image: Option<PendingImage>,
}

impl FormDraft {
    /// Blank draft in create mode: no id, no preview, no pending file.
    pub fn for_add() -> Self {
        FormDraft {
            mode: FormMode::Creating,
            ..FormDraft::default()
        }
    }

    /// Draft populated from an existing product, keeping its id.
    ///
    /// The preview shows the product's current image; any file selection
    /// from a previous modal session is dropped.
    pub fn for_edit(product: &Product) -> Self {
        FormDraft {
            mode: FormMode::Editing(product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            stock: product.stock.to_string(),
            entry_date: product.entry_date.format("%Y-%m-%d").to_string(),
            category_id: product.category_id.to_string(),
            existing_image_url: product.image_url.clone(),
            pending_image: None,
        }
    }

    /// Dismissed / saved: the draft is gone.
    pub fn closed() -> Self {
        FormDraft::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// The id to update, or None when submitting means create.
    pub fn product_id(&self) -> Option<i32> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn select_image(&mut self, file_name: String, bytes: Vec<u8>) {
        self.pending_image = Some(PendingImage { file_name, bytes });
    }

    pub fn clear_image_selection(&mut self) {
        self.pending_image = None;
    }

    /// Build the request payload from the current field values.
    ///
    /// `uploaded_url` is the URL returned by a just-finished upload, if
    /// any; it wins over the existing URL, which in turn wins over null.
    /// String fields are trimmed, numeric fields parsed into the typed
    /// contract (price f64, stock and category id i32).
    pub fn payload(&self, uploaded_url: Option<String>) -> Result<ProductPayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(DraftError::InvalidPrice);
        }

        let stock: i32 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidStock)?;
        if stock < 0 {
            return Err(DraftError::InvalidStock);
        }

        let entry_date = chrono::NaiveDate::parse_from_str(self.entry_date.trim(), "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate)?;

        let category_id: i32 = self
            .category_id
            .trim()
            .parse()
            .map_err(|_| DraftError::MissingCategory)?;

        Ok(ProductPayload {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            stock,
            entry_date,
            category_id,
            image_url: uploaded_url.or_else(|| self.existing_image_url.clone()),
            owner_id: DEFAULT_OWNER_ID,
        })
    }
}

/// Why a draft could not be turned into a payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,
    #[error("Price must be a non-negative number")]
    InvalidPrice,
    #[error("Stock must be a non-negative whole number")]
    InvalidStock,
    #[error("Entry date must be a valid date (YYYY-MM-DD)")]
    InvalidDate,
    #[error("Pick a category")]
    MissingCategory,
}

/// What the image column of a row shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageCell {
    Url(String),
    /// Explicit "no image" marker, never a broken <img>.
    Placeholder,
}

/// View-model for one table row.
///
/// A pure mapping from [`Product`], so display rules (two-decimal price,
/// image placeholder) are testable without rendering anything.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub stock: i32,
    pub entry_date: String,
    pub price_display: String,
    pub image: ImageCell,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let image = match &product.image_url {
            Some(url) if !url.trim().is_empty() => ImageCell::Url(url.clone()),
            _ => ImageCell::Placeholder,
        };

        ProductRow {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            stock: product.stock,
            entry_date: product.entry_date.format("%Y-%m-%d").to_string(),
            price_display: format!("${:.2}", product.price),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::Product;

    fn product(id: i32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: "desc".to_string(),
            price: rust_decimal::Decimal::new(950, 2),
            stock: 3,
            entry_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category_id: 2,
            image_url: Some("http://x/y.png".to_string()),
            owner_id: DEFAULT_OWNER_ID,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut state = PageState::new(10);
        state.record_response(0, 5);
        assert!(state.go_to(3));

        assert!(state.set_page_size(20));
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_size(), 20);
    }

    #[test]
    fn test_page_size_minimum_is_one() {
        let mut state = PageState::new(0);
        assert_eq!(state.page_size(), 1);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut state = PageState::new(10);
        state.record_response(1, 3);
        let before = state;

        assert!(!state.go_to(3));
        assert!(!state.go_to(99));
        assert_eq!(state, before);
    }

    #[test]
    fn test_boundaries() {
        let mut state = PageState::new(10);
        state.record_response(0, 3);

        assert!(!state.previous());
        assert_eq!(state.page_index(), 0);

        assert!(state.next());
        assert!(state.next());
        assert_eq!(state.page_index(), 2);
        assert!(!state.next());
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn test_zero_pages_disables_everything() {
        let mut state = PageState::new(10);
        state.record_response(0, 0);

        assert!(!state.has_previous());
        assert!(!state.has_next());
        assert!(state.page_numbers().next().is_none());
        assert!(!state.next());
        assert!(!state.previous());
        assert!(!state.go_to(0));
    }

    #[test]
    fn test_single_page_disables_navigation() {
        // listProducts(0, 10) -> 3 items, totalPages = 1
        let mut state = PageState::new(10);
        state.record_response(0, 1);

        assert!(!state.has_previous());
        assert!(!state.has_next());
        assert_eq!(state.page_numbers().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_record_response_clamps_shrunk_page_count() {
        let mut state = PageState::new(10);
        state.record_response(0, 4);
        assert!(state.go_to(3));

        // Deleting the last row of the last page shrinks the count
        state.record_response(3, 3);
        assert_eq!(state.page_index(), 2);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_in_sync_with() {
        let mut state = PageState::new(10);
        state.record_response(1, 3);

        assert!(state.in_sync_with(1, 3));
        assert!(!state.in_sync_with(1, 2));
        assert!(!state.in_sync_with(0, 3));
    }

    #[test]
    fn test_apply_actions() {
        let mut state = PageState::new(10);
        state.record_response(0, 3);

        assert!(state.apply(PageAction::Next));
        assert_eq!(state.page_index(), 1);
        assert!(state.apply(PageAction::Goto(2)));
        assert_eq!(state.page_index(), 2);
        assert!(state.apply(PageAction::Previous));
        assert_eq!(state.page_index(), 1);
        assert!(!state.apply(PageAction::Goto(7)));
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn test_for_add_clears_everything() {
        let draft = FormDraft::for_add();

        assert_eq!(draft.mode(), FormMode::Creating);
        assert_eq!(draft.product_id(), None);
        assert!(draft.name.is_empty());
        assert!(draft.category_id.is_empty());
        assert!(draft.existing_image_url.is_none());
        assert!(draft.pending_image.is_none());
        assert!(draft.is_open());
    }

    #[test]
    fn test_for_edit_populates_every_field() {
        let p = product(5);
        let draft = FormDraft::for_edit(&p);

        assert_eq!(draft.mode(), FormMode::Editing(5));
        assert_eq!(draft.product_id(), Some(5));
        assert_eq!(draft.name, "Product 5");
        assert_eq!(draft.price, "9.50");
        assert_eq!(draft.stock, "3");
        assert_eq!(draft.entry_date, "2024-01-01");
        assert_eq!(draft.category_id, "2");
        assert_eq!(draft.existing_image_url.as_deref(), Some("http://x/y.png"));
        assert!(draft.pending_image.is_none());
    }

    #[test]
    fn test_closed_draft() {
        let draft = FormDraft::closed();
        assert_eq!(draft.mode(), FormMode::Closed);
        assert!(!draft.is_open());
    }

    #[test]
    fn test_edit_submit_without_changes_keeps_image_and_category() {
        // loadForEdit(p) then submit with no new file: the payload keeps
        // the original image URL and category.
        let p = product(5);
        let draft = FormDraft::for_edit(&p);

        let payload = draft.payload(None).unwrap();
        assert_eq!(payload.image_url.as_deref(), Some("http://x/y.png"));
        assert_eq!(payload.category_id, 2);
        assert_eq!(payload.price, 9.5);
        assert_eq!(payload.stock, 3);
        assert_eq!(payload.owner_id, DEFAULT_OWNER_ID);
    }

    #[test]
    fn test_uploaded_url_wins_over_existing() {
        let p = product(5);
        let draft = FormDraft::for_edit(&p);

        let payload = draft.payload(Some("/uploads/new.png".to_string())).unwrap();
        assert_eq!(payload.image_url.as_deref(), Some("/uploads/new.png"));
    }

    #[test]
    fn test_no_image_at_all_is_null() {
        let mut p = product(5);
        p.image_url = None;
        let draft = FormDraft::for_edit(&p);

        let payload = draft.payload(None).unwrap();
        assert_eq!(payload.image_url, None);
    }

    #[test]
    fn test_payload_trims_strings() {
        let mut draft = FormDraft::for_add();
        draft.name = "  Widget  ".to_string();
        draft.description = " nice \n".to_string();
        draft.price = " 9.5 ".to_string();
        draft.stock = " 3 ".to_string();
        draft.entry_date = "2024-01-01".to_string();
        draft.category_id = "2".to_string();

        let payload = draft.payload(None).unwrap();
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.description, "nice");
        assert_eq!(payload.price, 9.5);
    }

    #[test]
    fn test_payload_validation_errors() {
        let mut draft = FormDraft::for_add();
        draft.entry_date = "2024-01-01".to_string();
        draft.category_id = "2".to_string();
        draft.price = "1".to_string();
        draft.stock = "1".to_string();

        draft.name = "   ".to_string();
        assert_eq!(draft.payload(None), Err(DraftError::MissingName));

        draft.name = "Widget".to_string();
        draft.price = "-1".to_string();
        assert_eq!(draft.payload(None), Err(DraftError::InvalidPrice));
        draft.price = "abc".to_string();
        assert_eq!(draft.payload(None), Err(DraftError::InvalidPrice));

        draft.price = "1".to_string();
        draft.stock = "-3".to_string();
        assert_eq!(draft.payload(None), Err(DraftError::InvalidStock));
        draft.stock = "2.5".to_string();
        assert_eq!(draft.payload(None), Err(DraftError::InvalidStock));

        draft.stock = "3".to_string();
        draft.entry_date = "01/01/2024".to_string();
        assert_eq!(draft.payload(None), Err(DraftError::InvalidDate));

        draft.entry_date = "2024-01-01".to_string();
        draft.category_id = String::new();
        assert_eq!(draft.payload(None), Err(DraftError::MissingCategory));
    }

    #[test]
    fn test_failed_submit_leaves_draft_intact() {
        // Upload failure aborts the submit before any payload is built;
        // the draft the user typed must survive untouched for the retry.
        let mut draft = FormDraft::for_add();
        draft.name = "Widget".to_string();
        draft.price = "9.5".to_string();
        draft.select_image("photo.png".to_string(), vec![1, 2, 3]);

        let snapshot = draft.clone();
        // (the submit handler only reads the draft until the upload
        // succeeds, so a failed upload cannot have mutated it)
        assert_eq!(draft, snapshot);
        assert_eq!(draft.pending_image.as_ref().unwrap().file_name, "photo.png");
    }

    #[test]
    fn test_select_image_replaces_pending() {
        let mut draft = FormDraft::for_add();
        draft.select_image("a.png".to_string(), vec![1]);
        draft.select_image("b.png".to_string(), vec![2]);

        let pending = draft.pending_image.unwrap();
        assert_eq!(pending.file_name, "b.png");
        assert_eq!(pending.bytes, vec![2]);
    }

    #[test]
    fn test_row_mapping_formats_price_two_decimals() {
        let mut p = product(1);
        p.price = rust_decimal::Decimal::new(95, 1); // 9.5
        let row = ProductRow::from(&p);
        assert_eq!(row.price_display, "$9.50");

        p.price = rust_decimal::Decimal::new(100000, 2); // 1000.00
        let row = ProductRow::from(&p);
        assert_eq!(row.price_display, "$1000.00");
    }

    #[test]
    fn test_row_mapping_image_placeholder() {
        let mut p = product(1);
        p.image_url = None;
        assert_eq!(ProductRow::from(&p).image, ImageCell::Placeholder);

        p.image_url = Some("   ".to_string());
        assert_eq!(ProductRow::from(&p).image, ImageCell::Placeholder);

        p.image_url = Some("http://x/y.png".to_string());
        assert_eq!(
            ProductRow::from(&p).image,
            ImageCell::Url("http://x/y.png".to_string())
        );
    }

    #[test]
    fn test_rows_keep_server_order() {
        let products = vec![product(9), product(2), product(7)];
        let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2, 7]);
    }
}
