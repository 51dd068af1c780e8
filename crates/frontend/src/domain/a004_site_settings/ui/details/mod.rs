//! Site settings: a single form over the `/api/admin/site-info` singleton.

use contracts::domain::site_settings::SiteSettings;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn SiteSettingsDetails() -> impl IntoView {
    let form = RwSignal::new(SiteSettings::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match api_utils::get_json::<SiteSettings>("/api/admin/site-info", &token).await {
                Ok(settings) => {
                    form.set(settings);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let save = move |_| {
        let current = form.get();
        if let Err(e) = current.validate() {
            set_error.set(Some(e));
            return;
        }
        let token = token();
        set_saving.set(true);
        set_error.set(None);
        set_success.set(None);
        spawn_local(async move {
            match api_utils::put_json_unit("/api/admin/site-info", &token, &current).await {
                Ok(()) => {
                    set_success.set(Some("Settings updated!".to_string()));
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Site Settings"}</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
            {move || success.get().map(|s| view! { <div class="success-banner">{s}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">{"Loading..."}</div> }>
                <div class="details-form details-form--narrow">
                    <div class="form-group">
                        <label for="site-name">{"Site Name"}</label>
                        <input
                            type="text"
                            id="site-name"
                            prop:value=move || form.get().site_name
                            on:input=move |ev| form.update(|f| f.site_name = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="site-contact-email">{"Contact Email"}</label>
                        <input
                            type="email"
                            id="site-contact-email"
                            prop:value=move || form.get().contact_email
                            on:input=move |ev| form.update(|f| f.contact_email = event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="site-description">{"Description"}</label>
                        <textarea
                            id="site-description"
                            prop:value=move || form.get().description
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            rows="4"
                        />
                    </div>

                    <div class="details-actions">
                        <button class="btn btn-primary" on:click=save disabled=move || saving.get()>
                            {icon("save")}
                            {"Save Settings"}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
