//! Donations: read-only list with bulk delete and CSV export.

use std::collections::HashSet;

use contracts::domain::donation::Donation;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{export_to_csv, CsvExport};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

impl CsvExport for Donation {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Amount", "Date"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            format!("{:.2}", self.amount),
            self.created_at.clone(),
        ]
    }
}

#[component]
pub fn DonationList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Donation>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (selected, set_selected) = signal::<HashSet<i64>>(HashSet::new());

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match fetch_donations(&token).await {
                Ok(donations) => {
                    set_items.set(donations);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let bulk_delete = move |_| {
        let ids: Vec<i64> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete {} selected donations?", ids.len()))
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
                if api_utils::delete(&format!("/api/admin/donations/{}", id), &token)
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
        let rows: Vec<Donation> = items
            .get()
            .into_iter()
            .filter(|d| chosen.contains(&d.id))
            .collect();
        if let Err(e) = export_to_csv(&rows, "donations.csv") {
            set_error.set(Some(e));
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Donations"}</h1>
                </div>
                <div class="header__actions">
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
                                                set_selected.set(items.get().iter().map(|d| d.id).collect());
                                            } else {
                                                set_selected.set(HashSet::new());
                                            }
                                        }
                                    />
                                </th>
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"Email"}</th>
                                <th class="table__header-cell">{"Amount"}</th>
                                <th class="table__header-cell">{"Date"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|donation| {
                                let id = donation.id;
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
                                        <td class="table__cell">{donation.name.clone()}</td>
                                        <td class="table__cell">{donation.email.clone()}</td>
                                        <td class="table__cell">{format!("${:.2}", donation.amount)}</td>
                                        <td class="table__cell">{format_datetime(&donation.created_at)}</td>
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

async fn fetch_donations(token: &str) -> Result<Vec<Donation>, String> {
    let response: contracts::domain::donation::DonationListResponse =
        api_utils::get_json("/api/admin/donations", token).await?;
    Ok(response.donations)
}
