// web_app/pages/catalog.rs - Catalog admin page
//
// The page that composes the product table, the paging controls, and
// the modal form, and owns the state lifecycle between them.
//
// Handlers follow one shape: apply a transition to PageState/FormDraft,
// then let the product Resource reload (navigation changes its source
// tuple, writes bump an explicit tick). Failures on the list path are
// logged and leave the previous render in place; failures on the submit
// path surface in the form and keep the draft.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::Product;
use crate::web_app::server_fns::{
    create_product, delete_product, list_categories, list_products, update_product, upload_image,
};
use crate::web_app::state::{FormDraft, FormMode, PageAction, PageState, ProductRow};

/// Catalog administration page
///
/// Orchestrates:
/// - Paging state + product table
/// - Add/Edit modal form (create and update)
/// - Delete confirmation
#[component]
pub fn CatalogPage() -> impl IntoView {
    // Paging state as an explicit value object
    let page_state = RwSignal::new(PageState::default());
    // Bumped after a successful write to reload the current page
    let reload_tick = RwSignal::new(0_u32);

    // Last successfully fetched page; kept (stale) when a fetch fails
    let current_items = RwSignal::new(Vec::<Product>::new());
    let total_items = RwSignal::new(0_i64);

    // Modal form state
    let draft = RwSignal::new(FormDraft::closed());
    let form_error = RwSignal::new(None::<String>);

    // Row pending delete confirmation
    let pending_delete = RwSignal::new(None::<i32>);

    // Product page resource: refetches on navigation, page-size change,
    // or reload tick
    let products = Resource::new(
        move || {
            let state = page_state.get();
            (state.page_index(), state.page_size(), reload_tick.get())
        },
        move |(page_index, page_size, _)| async move { list_products(page_index, page_size).await },
    );

    // Categories are loaded once at startup
    let categories_res = Resource::new(|| (), move |_| async move { list_categories().await });
    let categories = Signal::derive(move || {
        categories_res
            .get()
            .and_then(|r| r.ok())
            .unwrap_or_default()
    });

    // Fold each fetch back into client state. Errors keep the previous
    // table (stale view) and are only logged.
    Effect::new(move || match products.get() {
        Some(Ok(page)) => {
            current_items.set(page.items.clone());
            total_items.set(page.total_items);
            let in_sync =
                page_state.with_untracked(|s| s.in_sync_with(page.page_index, page.total_pages));
            if !in_sync {
                page_state.update(|s| s.record_response(page.page_index, page.total_pages));
            }
        }
        Some(Err(e)) => {
            tracing::error!("Loading products failed: {}", e);
        }
        None => {}
    });

    Effect::new(move || {
        if let Some(Err(e)) = categories_res.get() {
            tracing::error!("Loading categories failed: {}", e);
        }
    });

    // Rows in server order; falls back to the last good page on failure
    let rows = Signal::derive(move || {
        let items = match products.get() {
            Some(Ok(page)) => page.items,
            _ => current_items.get(),
        };
        items.iter().map(ProductRow::from).collect::<Vec<_>>()
    });

    // --- Handlers: state transition + reload ---

    let on_navigate = Callback::new(move |action: PageAction| {
        page_state.update(|state| {
            state.apply(action);
        });
    });

    let on_page_size = Callback::new(move |size: u32| {
        page_state.update(|state| {
            state.set_page_size(size);
        });
    });

    let on_add = Callback::new(move |()| {
        form_error.set(None);
        draft.set(FormDraft::for_add());
    });

    let on_edit = Callback::new(move |id: i32| {
        let product = current_items
            .get_untracked()
            .iter()
            .find(|p| p.id == id)
            .cloned();
        if let Some(product) = product {
            form_error.set(None);
            draft.set(FormDraft::for_edit(&product));
        }
    });

    let on_cancel = Callback::new(move |()| {
        draft.set(FormDraft::closed());
        form_error.set(None);
    });

    // Submit sequence: upload first, then build the payload, then create
    // or update depending on the draft's mode. Any failure keeps the
    // form open with the draft untouched.
    let on_submit = Callback::new(move |()| {
        let snapshot = draft.get_untracked();

        leptos::task::spawn_local(async move {
            let uploaded_url = match snapshot.pending_image.as_ref() {
                Some(pending) => {
                    match upload_image(pending.file_name.clone(), pending.bytes.clone()).await {
                        Ok(uploaded) => Some(uploaded.url),
                        Err(e) => {
                            tracing::error!("Image upload failed: {}", e);
                            form_error.set(Some(format!("Image upload failed: {}", e)));
                            return;
                        }
                    }
                }
                None => None,
            };

            let payload = match snapshot.payload(uploaded_url) {
                Ok(payload) => payload,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };

            let result = match snapshot.product_id() {
                Some(id) => update_product(id, payload).await.map(|_| ()),
                None => create_product(payload).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    draft.set(FormDraft::closed());
                    form_error.set(None);
                    reload_tick.update(|t| *t += 1);
                }
                Err(e) => {
                    tracing::error!("Saving product failed: {}", e);
                    form_error.set(Some(format!("Saving failed: {}", e)));
                }
            }
        });
    });

    let on_delete_request = Callback::new(move |id: i32| {
        pending_delete.set(Some(id));
    });

    let on_delete_cancel = Callback::new(move |()| {
        pending_delete.set(None);
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);

        leptos::task::spawn_local(async move {
            match delete_product(id).await {
                // Reload the current page; PageState clamps if it shrank
                Ok(()) => reload_tick.update(|t| *t += 1),
                // Stale view: the table keeps its last good render
                Err(e) => tracing::error!("Deleting product {} failed: {}", id, e),
            }
        });
    });

    let modal_title = move || match draft.with(|d| d.mode()) {
        FormMode::Editing(_) => "Edit Product",
        _ => "Add Product",
    };

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"🗂"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                            "Catalog Admin"
                        </h1>
                    </div>
                    <div class="text-sm text-gray-500">
                        {move || format!("{} products", total_items.get())}
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Toolbar
                <div class="flex justify-between items-center mb-6">
                    <PageSizeSelector page=page_state.into() on_change=on_page_size />
                    <Button on_click=on_add>"+ Add Product"</Button>
                </div>

                // Table + pagination
                <Suspense fallback=move || view! {
                    <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                        <Loading message="Loading products..." />
                    </div>
                }>
                    {move || {
                        match products.get() {
                            None => view! {
                                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                                    <Loading message="Loading products..." />
                                </div>
                            }.into_any(),
                            Some(_) => view! {
                                <div class="animate-fade-in">
                                    <ProductTable
                                        rows=rows
                                        on_edit=on_edit
                                        on_delete=on_delete_request
                                    />
                                    <PaginationStrip
                                        page=page_state.into()
                                        on_navigate=on_navigate
                                    />
                                </div>
                            }.into_any(),
                        }
                    }}
                </Suspense>
            </main>

            // Add/Edit modal
            {move || {
                draft.with(|d| d.is_open()).then(|| view! {
                    <ModalWrapper
                        title=modal_title()
                        on_close=on_cancel
                    >
                        <ProductForm
                            draft=draft
                            categories=categories
                            error=form_error.into()
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    </ModalWrapper>
                })
            }}

            // Delete confirmation
            {move || {
                pending_delete.get().map(|_| view! {
                    <ConfirmDialog
                        message="Delete this product? This cannot be undone."
                        on_confirm=on_delete_confirm
                        on_cancel=on_delete_cancel
                    />
                })
            }}
        </div>
    }
}
