use std::rc::Rc;

use contracts::domain::page::Page;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::details::PageDetails;
use crate::shared::api_utils;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn PageList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Page>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Page>>(None);

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match fetch_pages(&token).await {
                Ok(pages) => {
                    set_items.set(pages);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this page?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = token();
        spawn_local(async move {
            if let Err(e) = api_utils::delete(&format!("/api/admin/pages/{}", id), &token).await {
                set_error.set(Some(e));
            }
            fetch();
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Pages"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }>
                        {icon("plus")}
                        {"New Page"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-banner">{e}</div>
            })}

            {move || if show_form.get() {
                view! {
                    <PageDetails
                        page=editing.get()
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
                                <th class="table__header-cell">{"Title"}</th>
                                <th class="table__header-cell">{"Slug"}</th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|page| {
                                let id = page.id;
                                let page_for_edit = page.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{page.title.clone()}</td>
                                        <td class="table__cell">{page.slug.clone()}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--small"
                                                on:click=move |_| {
                                                    set_editing.set(Some(page_for_edit.clone()));
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

async fn fetch_pages(token: &str) -> Result<Vec<Page>, String> {
    let response: contracts::domain::page::PageListResponse =
        api_utils::get_json("/api/admin/pages", token).await?;
    Ok(response.pages)
}
