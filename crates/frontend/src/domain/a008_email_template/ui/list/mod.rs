//! Email template manager. Standalone screen from the sidebar, and embedded
//! in the campaign editor with an apply-template callback.

use contracts::domain::email_template::EmailTemplate;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils;
use crate::shared::icons::icon;
use crate::shared::slug::slugify;
use crate::system::auth::context::use_auth;

#[component]
pub fn TemplateManager(on_select: Option<Callback<EmailTemplate>>) -> impl IntoView {
    let (templates, set_templates) = signal::<Vec<EmailTemplate>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (show_form, set_show_form) = signal(false);
    let (saving, set_saving) = signal(false);
    let form = RwSignal::new(EmailTemplate::default());

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match api_utils::get_json::<Vec<EmailTemplate>>("/api/admin/email-templates", &token)
                .await
            {
                Ok(list) => {
                    set_templates.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_save = move |_| {
        let template = form.get();
        if let Err(e) = template.validate() {
            set_error.set(Some(e));
            return;
        }
        let token = token();
        set_saving.set(true);
        spawn_local(async move {
            match api_utils::post_json_unit("/api/admin/email-templates", &token, &template).await {
                Ok(()) => {
                    form.set(EmailTemplate::default());
                    set_show_form.set(false);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this template?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = token();
        spawn_local(async move {
            match api_utils::delete(&format!("/api/admin/email-templates/{}", id), &token).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_clone = move |id: i64| {
        let token = token();
        spawn_local(async move {
            match api_utils::post_empty(
                &format!("/api/admin/email-templates/{}/clone", id),
                &token,
            )
            .await
            {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="template-manager">
            <div class="template-manager__header">
                <h3>{"Email Templates"}</h3>
                <button class="button button--small" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {icon("plus")}
                    {move || if show_form.get() { "Cancel" } else { "New Template" }}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || show_form.get()>
                <div class="template-manager__form">
                    <input
                        type="text"
                        placeholder="Template name"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            form.update(|f| {
                                if f.slug.is_empty() {
                                    f.slug = slugify(&name);
                                }
                                f.name = name;
                            });
                        }
                    />
                    <input
                        type="text"
                        placeholder="template-slug"
                        prop:value=move || form.get().slug
                        on:input=move |ev| form.update(|f| f.slug = slugify(&event_target_value(&ev)))
                    />
                    <input
                        type="text"
                        placeholder="Description (optional)"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                    <textarea
                        rows="5"
                        placeholder="Template HTML"
                        prop:value=move || form.get().content_html
                        on:input=move |ev| form.update(|f| f.content_html = event_target_value(&ev))
                    />
                    <label class="form-group--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_default
                            on:change=move |ev| form.update(|f| f.is_default = event_target_checked(&ev))
                        />
                        {"Use as default template"}
                    </label>
                    <button class="button button--primary" on:click=handle_save disabled=move || saving.get()>
                        {"Save Template"}
                    </button>
                </div>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">{"Loading..."}</div> }>
                <ul class="template-manager__list">
                    {move || templates.get().into_iter().map(|template| {
                        let id = template.id;
                        let template_for_select = template.clone();
                        view! {
                            <li class="template-manager__item">
                                <div class="template-manager__meta">
                                    <span class="template-manager__name">
                                        {template.name.clone()}
                                        {template.is_default.then(|| view! {
                                            <span class="template-manager__default-badge">{"default"}</span>
                                        })}
                                    </span>
                                    <span class="template-manager__description">{template.description.clone()}</span>
                                </div>
                                <div class="template-manager__actions">
                                    {on_select.map(|cb| {
                                        let template = template_for_select.clone();
                                        view! {
                                            <button
                                                class="button button--small button--primary"
                                                on:click=move |_| cb.run(template.clone())
                                            >
                                                {"Use"}
                                            </button>
                                        }
                                    })}
                                    {id.map(|id| view! {
                                        <button
                                            class="button button--small"
                                            on:click=move |_| handle_clone(id)
                                        >
                                            {icon("copy")}
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            on:click=move |_| handle_delete(id)
                                        >
                                            {icon("delete")}
                                        </button>
                                    })}
                                </div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
