//! App shell: wallet context and routing

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::HomePage;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    // The wallet context is created here and provided explicitly to the
    // component tree; pages consume it through use_wallet_context().
    provide_wallet_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="max-width: 500px; margin: 80px auto; text-align: center;">
            <h1>"404 - Page Not Found"</h1>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
