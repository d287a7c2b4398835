//! Dismissible feedback banner

use leptos::prelude::*;

/// A dismissible banner for success/error feedback. `tone` selects the CSS
/// class (`banner-success`, `banner-error`).
#[component]
pub fn Banner(
    #[prop(into)] tone: String,
    on_dismiss: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("banner banner-{}", tone)>
            <button
                class="banner-dismiss"
                on:click=move |_| on_dismiss.run(())
            >
                "✕"
            </button>
            {children()}
        </div>
    }
}
