//! Subscribers: list with inline add form, bulk delete and CSV export.

use std::collections::HashSet;

use contracts::domain::subscriber::{Subscriber, SubscriberDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils;
use crate::shared::date_utils::format_date;
use crate::shared::export::{export_to_csv, CsvExport};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

impl CsvExport for Subscriber {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Email", "Name", "Interests", "Confirmed", "Created At"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.email.clone(),
            self.name.clone(),
            self.interests.clone(),
            if self.confirmed { "Yes".into() } else { "No".into() },
            self.created_at.clone(),
        ]
    }
}

#[component]
pub fn SubscriberList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Subscriber>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (selected, set_selected) = signal::<HashSet<i64>>(HashSet::new());
    let (show_form, set_show_form) = signal(false);
    let form = RwSignal::new(SubscriberDto::default());

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match fetch_subscribers(&token).await {
                Ok(subscribers) => {
                    set_items.set(subscribers);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get();
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        let token = token();
        spawn_local(async move {
            match api_utils::post_json_unit("/api/admin/newsletter-subscribers", &token, &dto).await
            {
                Ok(()) => {
                    form.set(SubscriberDto::default());
                    set_show_form.set(false);
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this subscriber?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = token();
        spawn_local(async move {
            if let Err(e) =
                api_utils::delete(&format!("/api/admin/newsletter-subscribers/{}", id), &token)
                    .await
            {
                set_error.set(Some(e));
            }
            fetch();
        });
    };

    let bulk_delete = move |_| {
        let ids: Vec<i64> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete {} selected subscribers?", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = token();
        spawn_local(async move {
            let total = ids.len();
            let mut failed = 0usize;
            for id in ids {
                if api_utils::delete(&format!("/api/admin/newsletter-subscribers/{}", id), &token)
                    .await
                    .is_err()
                {
                    failed += 1;
                }
            }
            if failed > 0 {
                set_error.set(Some(format!("{} of {} deletions failed", failed, total)));
            }
            set_selected.set(HashSet::new());
            fetch();
        });
    };

    let export_selected = move |_| {
        let chosen = selected.get();
        let rows: Vec<Subscriber> = items
            .get()
            .into_iter()
            .filter(|s| chosen.contains(&s.id))
            .collect();
        if let Err(e) = export_to_csv(&rows, "newsletter_subscribers.csv") {
            set_error.set(Some(e));
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Newsletter Subscribers"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                        {icon("plus")}
                        {move || if show_form.get() { "Cancel" } else { "Add Subscriber" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=export_selected
                        disabled=move || selected.get().is_empty()
                    >
                        {icon("download")}
                        {"Export CSV"}
                    </button>
                    <button
                        class="button button--danger"
                        on:click=bulk_delete
                        disabled=move || selected.get().is_empty()
                    >
                        {icon("delete")}
                        {move || format!("Delete ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-banner">{e}</div>
            })}

            <Show when=move || show_form.get()>
                <form class="details-form details-form--narrow" on:submit=handle_add>
                    <div class="form-group">
                        <label for="subscriber-email">{"Email"}</label>
                        <input
                            type="email"
                            id="subscriber-email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="subscriber-name">{"Name (optional)"}</label>
                        <input
                            type="text"
                            id="subscriber-name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="subscriber-interests">{"Interests (optional)"}</label>
                        <input
                            type="text"
                            id="subscriber-interests"
                            prop:value=move || form.get().interests
                            on:input=move |ev| form.update(|f| f.interests = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().confirmed
                                on:change=move |ev| form.update(|f| f.confirmed = event_target_checked(&ev))
                            />
                            {"Mark as confirmed (skip confirmation email)"}
                        </label>
                    </div>
                    <button type="submit" class="btn btn-primary">
                        {"Add Subscriber"}
                    </button>
                </form>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">{"Loading..."}</div> }>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        on:change=move |ev| {
                                            if event_target_checked(&ev) {
                                                set_selected.set(items.get().iter().map(|s| s.id).collect());
                                            } else {
                                                set_selected.set(HashSet::new());
                                            }
                                        }
                                    />
                                </th>
                                <th class="table__header-cell">{"Email"}</th>
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"Interests"}</th>
                                <th class="table__header-cell">{"Confirmed"}</th>
                                <th class="table__header-cell">{"Subscribed"}</th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|subscriber| {
                                let id = subscriber.id;
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selected.get().contains(&id)
                                    >
                                        <td class="table__cell table__cell--checkbox">
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || selected.get().contains(&id)
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    set_selected.update(|s| {
                                                        if checked {
                                                            s.insert(id);
                                                        } else {
                                                            s.remove(&id);
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">{subscriber.email.clone()}</td>
                                        <td class="table__cell">{subscriber.name.clone()}</td>
                                        <td class="table__cell">{subscriber.interests.clone()}</td>
                                        <td class="table__cell">{if subscriber.confirmed { "Yes" } else { "No" }}</td>
                                        <td class="table__cell">{format_date(&subscriber.created_at)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--small button--danger"
                                                on:click=move |_| handle_delete(id)
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

async fn fetch_subscribers(token: &str) -> Result<Vec<Subscriber>, String> {
    let response: contracts::domain::subscriber::SubscriberListResponse =
        api_utils::get_json("/api/admin/newsletter-subscribers", token).await?;
    Ok(response.subscribers)
}
