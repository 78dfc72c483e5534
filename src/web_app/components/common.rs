// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used throughout the application.
// Philosophy: pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-3">
            <div class="bg-red-100 p-1.5 rounded-full text-red-600">
                <span class="text-lg font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-0.5">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
) -> impl IntoView {
    let class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                 transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                 font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Danger button component, for destructive actions.
#[component]
pub fn DangerButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 \
                 transition-colors font-medium shadow-sm active:bg-red-800";

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. Open/close state is owned by the
/// parent; escape and backdrop clicks request a close.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = String::new(), into)]
    title: String,
) -> impl IntoView {
    // Close on escape key
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    // Close on backdrop click
    let handle_backdrop_click = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            // Backdrop with blur
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=handle_backdrop_click
            ></div>

            // Modal Content
            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-2xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                // Header
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                // Body (Scrollable)
                <div class="p-6 overflow-y-auto custom-scrollbar">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for destructive actions.
///
/// The caller owns the open state; nothing happens until the user picks
/// a side. Declining runs only `on_cancel`.
#[component]
pub fn ConfirmDialog(
    /// Question shown to the user
    #[prop(into)]
    message: String,
    /// Affirmative choice
    on_confirm: Callback<()>,
    /// Declining choice (also wired to escape/backdrop)
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalWrapper title="Please confirm" on_close=on_cancel>
            <div class="space-y-6">
                <p class="text-gray-700">{message}</p>
                <div class="flex justify-end gap-3">
                    <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
                    <DangerButton on_click=on_confirm>"Delete"</DangerButton>
                </div>
            </div>
        </ModalWrapper>
    }
}
