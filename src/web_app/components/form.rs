// web_app/components/form.rs - Product create/edit form
//
// The modal form bound to a FormDraft signal. The form never talks to
// the API itself: submitting just reports intent upward, and the page
// runs the upload/save sequence against the draft.

use leptos::prelude::*;
use leptos::web_sys;

use super::common::{Button, ErrorDisplay, SecondaryButton};
use crate::web_app::model::Category;
use crate::web_app::state::FormDraft;

/// Product form fields, image picker, and actions.
///
/// Field edits write straight into the draft signal, so the draft always
/// mirrors what is on screen and survives a failed submit untouched.
#[component]
pub fn ProductForm(
    /// The draft being edited
    draft: RwSignal<FormDraft>,
    /// Category choices, loaded once at startup
    categories: Signal<Vec<Category>>,
    /// Error from the last submit attempt, if any
    error: Signal<Option<String>>,
    /// Submit intent (the page uploads, builds the payload, and saves)
    on_submit: Callback<()>,
    /// Cancel intent
    on_cancel: Callback<()>,
) -> impl IntoView {
    let input_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none transition-shadow shadow-sm";

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    // Read the picked file's bytes into the draft; the upload itself
    // happens later, on submit.
    let handle_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            draft.update(|d| d.clear_image_selection());
            return;
        };
        let file_name = file.name();

        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => {
                    let bytes = web_sys::js_sys::Uint8Array::new(&buffer).to_vec();
                    draft.update(|d| d.select_image(file_name, bytes));
                }
                Err(_) => {
                    tracing::error!("Could not read selected file '{}'", file_name);
                }
            }
        });
    };

    view! {
        <form on:submit=handle_submit class="space-y-5">
            // Submit-path errors keep the form open; show them here
            {move || error.get().map(|message| view! { <ErrorDisplay error=message /> })}

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div class="sm:col-span-2">
                    <FieldLabel label="Name" />
                    <input
                        type="text"
                        required=true
                        class=input_class
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </div>

                <div>
                    <FieldLabel label="Price" />
                    <input
                        type="number"
                        required=true
                        min="0"
                        step="0.01"
                        class=input_class
                        prop:value=move || draft.with(|d| d.price.clone())
                        on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                    />
                </div>

                <div>
                    <FieldLabel label="Stock" />
                    <input
                        type="number"
                        required=true
                        min="0"
                        step="1"
                        class=input_class
                        prop:value=move || draft.with(|d| d.stock.clone())
                        on:input=move |ev| draft.update(|d| d.stock = event_target_value(&ev))
                    />
                </div>

                <div>
                    <FieldLabel label="Entry date" />
                    <input
                        type="date"
                        required=true
                        class=input_class
                        prop:value=move || draft.with(|d| d.entry_date.clone())
                        on:input=move |ev| draft.update(|d| d.entry_date = event_target_value(&ev))
                    />
                </div>

                <div>
                    <FieldLabel label="Category" />
                    <select
                        required=true
                        class=input_class
                        on:change=move |ev| draft.update(|d| d.category_id = event_target_value(&ev))
                    >
                        // Placeholder stays visible but can never be picked
                        <option
                            value=""
                            disabled=true
                            hidden=true
                            selected=move || draft.with(|d| d.category_id.is_empty())
                        >
                            "Select a category…"
                        </option>
                        <For
                            each=move || categories.get()
                            key=|category| category.id
                            children=move |category| {
                                let id_value = category.id.to_string();
                                let selected_value = id_value.clone();
                                view! {
                                    <option
                                        value=id_value
                                        title=category.description.clone()
                                        selected=move || draft.with(|d| d.category_id == selected_value)
                                    >
                                        {category.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="sm:col-span-2">
                    <FieldLabel label="Description" />
                    <textarea
                        rows="3"
                        class=input_class
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="sm:col-span-2">
                    <FieldLabel label="Image" />
                    <div class="flex items-center gap-4">
                        <ImagePreview draft=draft.into() />
                        <div class="flex-1">
                            <input
                                type="file"
                                accept="image/*"
                                class="block w-full text-sm text-gray-600 \
                                       file:mr-3 file:px-4 file:py-2 file:rounded-lg file:border-0 \
                                       file:bg-blue-50 file:text-blue-700 file:font-medium \
                                       hover:file:bg-blue-100 file:cursor-pointer"
                                on:change=handle_file_change
                            />
                            <p class="mt-1 text-xs text-gray-400">
                                "Leave empty to keep the current image."
                            </p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="flex justify-end gap-3 pt-2 border-t border-gray-100">
                <SecondaryButton on_click=on_cancel>
                    "Cancel"
                </SecondaryButton>
                <Button button_type="submit">
                    "Save"
                </Button>
            </div>
        </form>
    }
}

/// Small label above a form control.
#[component]
fn FieldLabel(label: &'static str) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
    }
}

/// Image preview: the freshly picked file wins over the stored URL.
#[component]
fn ImagePreview(draft: Signal<FormDraft>) -> impl IntoView {
    view! {
        {move || {
            let (pending_name, existing_url) = draft.with(|d| {
                (
                    d.pending_image.as_ref().map(|p| p.file_name.clone()),
                    d.existing_image_url.clone(),
                )
            });

            if let Some(name) = pending_name {
                view! {
                    <div class="h-16 w-16 rounded-lg bg-blue-50 border border-blue-200 \
                                flex items-center justify-center text-center p-1"
                         title=name>
                        <span class="text-[10px] text-blue-700 break-all line-clamp-3">"new file"</span>
                    </div>
                }.into_any()
            } else if let Some(url) = existing_url {
                view! {
                    <img src=url alt="Current image" class="h-16 w-16 rounded-lg object-cover bg-gray-100" />
                }.into_any()
            } else {
                view! {
                    <div class="h-16 w-16 rounded-lg bg-gray-100 flex items-center justify-center text-gray-300">
                        <span class="text-2xl">"📦"</span>
                    </div>
                }.into_any()
            }
        }}
    }
}
