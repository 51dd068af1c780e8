use crate::shared::icons::icon;
use crate::system::auth::{context::use_auth, context::AuthState, storage};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    // Session teardown: clear both the stored token and the context state.
    let logout = move |_| {
        storage::clear_token();
        set_auth_state.set(AuthState::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__logo">"ARTbeat"</span>
                <span class="top-header__subtitle">"Admin"</span>
            </div>
            <div class="top-header__actions">
                <button class="button button--ghost" on:click=logout>
                    {icon("logout")}
                    {"Log out"}
                </button>
            </div>
        </header>
    }
}
