// web_app/components/catalog.rs - Product table and paging controls
//
// Components for the list half of the screen:
// - ProductTable: one row per product, edit/delete actions
// - PaginationStrip: previous / numbered pages / next
// - PageSizeSelector: rows-per-page dropdown
//
// All of them render pure state (ProductRow, PageState) and report user
// intent through callbacks; no component mutates paging state itself.

use leptos::prelude::*;

use crate::web_app::state::{ImageCell, PageAction, PageState, ProductRow, PAGE_SIZE_CHOICES};

/// Product table
///
/// Renders rows in the order given (server order). Each row exposes an
/// Edit and a Delete action via the callbacks.
#[component]
pub fn ProductTable(
    /// Row view-models to display
    rows: Signal<Vec<ProductRow>>,
    /// Edit action, receives the product id
    on_edit: Callback<i32>,
    /// Delete action, receives the product id
    on_delete: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 overflow-x-auto">
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! {
                    <div class="text-center py-16">
                        <div class="text-gray-300 text-6xl mb-4">"📦"</div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">"No products yet"</h3>
                        <p class="text-gray-500">"Add your first product to get started."</p>
                    </div>
                }
            >
                <table class="w-full text-left text-sm">
                    <thead class="bg-gray-50 text-xs uppercase tracking-wider text-gray-500">
                        <tr>
                            <th class="px-4 py-3">"Id"</th>
                            <th class="px-4 py-3">"Image"</th>
                            <th class="px-4 py-3">"Name"</th>
                            <th class="px-4 py-3">"Description"</th>
                            <th class="px-4 py-3">"Stock"</th>
                            <th class="px-4 py-3">"Entry date"</th>
                            <th class="px-4 py-3 text-right">"Price"</th>
                            <th class="px-4 py-3 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=move || rows.get()
                            key=|row| row.id
                            children=move |row| {
                                let row_id = row.id;
                                view! {
                                    <tr class="hover:bg-gray-50 transition-colors">
                                        <td class="px-4 py-3 text-gray-500">{row.id}</td>
                                        <td class="px-4 py-3">
                                            {match row.image.clone() {
                                                ImageCell::Url(url) => view! {
                                                    <img
                                                        src=url
                                                        alt=row.name.clone()
                                                        class="h-10 w-10 rounded-lg object-cover bg-gray-100"
                                                    />
                                                }.into_any(),
                                                ImageCell::Placeholder => view! {
                                                    <div
                                                        class="h-10 w-10 rounded-lg bg-gray-100 flex items-center justify-center text-gray-300"
                                                        title="No image"
                                                    >
                                                        <span>"📦"</span>
                                                    </div>
                                                }.into_any(),
                                            }}
                                        </td>
                                        <td class="px-4 py-3 font-medium text-gray-900">{row.name.clone()}</td>
                                        <td class="px-4 py-3 text-gray-600 max-w-xs truncate">{row.description.clone()}</td>
                                        <td class="px-4 py-3 text-gray-700">{row.stock}</td>
                                        <td class="px-4 py-3 text-gray-700">{row.entry_date.clone()}</td>
                                        <td class="px-4 py-3 text-right font-semibold text-gray-900">{row.price_display.clone()}</td>
                                        <td class="px-4 py-3">
                                            <div class="flex justify-end gap-1">
                                                <button
                                                    type="button"
                                                    class="p-2 rounded-lg text-gray-500 hover:text-blue-600 hover:bg-blue-50 transition-colors"
                                                    title="Edit"
                                                    on:click=move |_| on_edit.run(row_id)
                                                >
                                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2"
                                                         stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                                                        <path d="M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/>
                                                        <path d="M18.375 2.625a1 1 0 0 1 3 3l-9.013 9.014a2 2 0 0 1-.853.505l-2.873.84a.5.5 0 0 1-.62-.62l.84-2.873a2 2 0 0 1 .506-.852z"/>
                                                    </svg>
                                                </button>
                                                <button
                                                    type="button"
                                                    class="p-2 rounded-lg text-gray-500 hover:text-red-600 hover:bg-red-50 transition-colors"
                                                    title="Delete"
                                                    on:click=move |_| on_delete.run(row_id)
                                                >
                                                    <svg class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2"
                                                         stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                                                        <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/>
                                                        <path d="M3 6h18"/>
                                                        <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>
                                                    </svg>
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// Pagination strip: previous / numbered pages / next.
///
/// With zero pages the strip is empty and both navigation buttons are
/// disabled. The current page gets the active style.
#[component]
pub fn PaginationStrip(
    /// Current paging state
    page: Signal<PageState>,
    /// Navigation handler; the page applies the action and reloads
    on_navigate: Callback<PageAction>,
) -> impl IntoView {
    let nav_class = "px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                     disabled:opacity-50 disabled:cursor-not-allowed \
                     hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700";

    view! {
        <nav class="flex items-center justify-center gap-2 mt-8 mb-4">
            <button
                type="button"
                class=nav_class
                disabled=move || !page.get().has_previous()
                on:click=move |_| on_navigate.run(PageAction::Previous)
            >
                "← Previous"
            </button>

            <For
                each=move || page.get().page_numbers()
                key=|index| *index
                children=move |index| {
                    let is_current = move || page.get().page_index() == index;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_current() {
                                    "px-3.5 py-2 rounded-lg font-semibold bg-blue-600 text-white shadow-sm"
                                } else {
                                    "px-3.5 py-2 rounded-lg font-medium bg-white border border-gray-200 \
                                     text-gray-700 hover:bg-gray-50 transition-all"
                                }
                            }
                            on:click=move |_| on_navigate.run(PageAction::Goto(index))
                        >
                            {index + 1}
                        </button>
                    }
                }
            />

            <button
                type="button"
                class=nav_class
                disabled=move || !page.get().has_next()
                on:click=move |_| on_navigate.run(PageAction::Next)
            >
                "Next →"
            </button>
        </nav>
    }
}

/// Rows-per-page dropdown.
#[component]
pub fn PageSizeSelector(
    /// Current paging state
    page: Signal<PageState>,
    /// Called with the newly selected size
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 bg-white px-3 py-1.5 rounded-lg border border-gray-200 shadow-sm">
            <label class="text-sm font-medium text-gray-600">"Per page:"</label>
            <select
                class="text-sm font-semibold text-gray-800 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-6"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_CHOICES.into_iter().map(|size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || page.get().page_size() == size
                        >
                            {size}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
