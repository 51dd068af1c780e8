use std::collections::HashSet;
use std::rc::Rc;

use contracts::domain::tour::Tour;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::details::TourDetails;
use crate::shared::api_utils;
use crate::shared::export::{export_to_csv, CsvExport};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

impl CsvExport for Tour {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "City", "Type", "Free", "Date", "Time", "Guide"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.city.clone(),
            self.tour_type.clone(),
            if self.is_free { "Yes".into() } else { "No".into() },
            self.date.clone(),
            self.time.clone(),
            self.guide.clone(),
        ]
    }
}

#[component]
pub fn TourList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Tour>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (selected, set_selected) = signal::<HashSet<i64>>(HashSet::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Tour>>(None);

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match fetch_tours(&token).await {
                Ok(tours) => {
                    set_items.set(tours);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this tour?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = token();
        spawn_local(async move {
            if let Err(e) = api_utils::delete(&format!("/api/admin/tours/{}", id), &token).await {
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
                w.confirm_with_message(&format!("Delete {} selected tours?", ids.len()))
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
                if api_utils::delete(&format!("/api/admin/tours/{}", id), &token)
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
        let rows: Vec<Tour> = items
            .get()
            .into_iter()
            .filter(|t| chosen.contains(&t.id))
            .collect();
        if let Err(e) = export_to_csv(&rows, "tours.csv") {
            set_error.set(Some(e));
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Tours"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }>
                        {icon("plus")}
                        {"New Tour"}
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

            {move || if show_form.get() {
                view! {
                    <TourDetails
                        tour=editing.get()
                        on_saved=Rc::new(move |_| {
                            set_show_form.set(false);
                            set_editing.set(None);
                            fetch();
                        })
                        on_cancel=Rc::new(move |_| {
                            set_show_form.set(false);
                            set_editing.set(None);
                        })
                    />
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

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
                                                set_selected.set(items.get().iter().map(|t| t.id).collect());
                                            } else {
                                                set_selected.set(HashSet::new());
                                            }
                                        }
                                    />
                                </th>
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"City"}</th>
                                <th class="table__header-cell">{"Type"}</th>
                                <th class="table__header-cell">{"Free"}</th>
                                <th class="table__header-cell">{"Date"}</th>
                                <th class="table__header-cell">{"Guide"}</th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|tour| {
                                let id = tour.id;
                                let tour_for_edit = tour.clone();
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
                                        <td class="table__cell">{tour.name.clone()}</td>
                                        <td class="table__cell">{tour.city.clone()}</td>
                                        <td class="table__cell">{tour.tour_type.clone()}</td>
                                        <td class="table__cell">{if tour.is_free { "Yes" } else { "No" }}</td>
                                        <td class="table__cell">{format!("{} {}", tour.date, tour.time)}</td>
                                        <td class="table__cell">{tour.guide.clone()}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--small"
                                                on:click=move |_| {
                                                    set_editing.set(Some(tour_for_edit.clone()));
                                                    set_show_form.set(true);
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
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

async fn fetch_tours(token: &str) -> Result<Vec<Tour>, String> {
    let response: contracts::domain::tour::TourListResponse =
        api_utils::get_json("/api/admin/tours", token).await?;
    Ok(response.tours)
}
