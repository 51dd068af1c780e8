use std::collections::HashSet;
use std::rc::Rc;

use contracts::domain::post::{Post, PostStatusUpdate};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::details::PostDetails;
use crate::shared::api_utils;
use crate::shared::date_utils::format_date;
use crate::shared::export::{export_to_csv, CsvExport};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

impl CsvExport for Post {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Slug", "Author", "Category", "Status", "Published At"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.slug.clone(),
            self.author.clone(),
            self.category.clone(),
            self.status.clone(),
            self.published_at.clone(),
        ]
    }
}

#[component]
pub fn PostList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Post>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (selected, set_selected) = signal::<HashSet<i64>>(HashSet::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Post>>(None);

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match fetch_posts(&token).await {
                Ok(posts) => {
                    set_items.set(posts);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_create_new = move |_| {
        set_editing.set(None);
        set_show_form.set(true);
    };

    let handle_edit = move |post: Post| {
        set_editing.set(Some(post));
        set_show_form.set(true);
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this post?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = token();
        spawn_local(async move {
            if let Err(e) = api_utils::delete(&format!("/api/admin/posts/{}", id), &token).await {
                set_error.set(Some(e));
            }
            fetch();
        });
    };

    let toggle_select = move |id: i64, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    // Per-id requests; failures are counted and surfaced, and the refetch
    // always shows backend truth instead of assuming every call landed.
    let bulk_delete = move |_| {
        let ids: Vec<i64> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete {} selected posts?", ids.len()))
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
                if api_utils::delete(&format!("/api/admin/posts/{}", id), &token)
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

    let bulk_set_status = move |status: &'static str| {
        let ids: Vec<i64> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let token = token();
        spawn_local(async move {
            let total = ids.len();
            let mut failed = 0usize;
            let body = PostStatusUpdate {
                status: status.to_string(),
            };
            for id in ids {
                if api_utils::put_json_unit(&format!("/api/admin/posts/{}", id), &token, &body)
                    .await
                    .is_err()
                {
                    failed += 1;
                }
            }
            if failed > 0 {
                set_error.set(Some(format!("{} of {} status updates failed", failed, total)));
            }
            set_selected.set(HashSet::new());
            fetch();
        });
    };

    let export_selected = move |_| {
        let chosen = selected.get();
        let rows: Vec<Post> = items
            .get()
            .into_iter()
            .filter(|p| chosen.contains(&p.id))
            .collect();
        if let Err(e) = export_to_csv(&rows, "posts.csv") {
            set_error.set(Some(e));
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Posts"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_create_new>
                        {icon("plus")}
                        {"New Post"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| bulk_set_status("published")
                        disabled=move || selected.get().is_empty()
                    >
                        {"Publish"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| bulk_set_status("draft")
                        disabled=move || selected.get().is_empty()
                    >
                        {"Unpublish"}
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
                    <PostDetails
                        post=editing.get()
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
                                            let checked = event_target_checked(&ev);
                                            if checked {
                                                let all: HashSet<i64> = items.get().iter().map(|p| p.id).collect();
                                                set_selected.set(all);
                                            } else {
                                                set_selected.set(HashSet::new());
                                            }
                                        }
                                    />
                                </th>
                                <th class="table__header-cell">{"Title"}</th>
                                <th class="table__header-cell">{"Slug"}</th>
                                <th class="table__header-cell">{"Author"}</th>
                                <th class="table__header-cell">{"Status"}</th>
                                <th class="table__header-cell">{"Published"}</th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|post| {
                                let id = post.id;
                                let post_for_edit = post.clone();
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
                                                on:change=move |ev| toggle_select(id, event_target_checked(&ev))
                                            />
                                        </td>
                                        <td class="table__cell">{post.title.clone()}</td>
                                        <td class="table__cell">{post.slug.clone()}</td>
                                        <td class="table__cell">{post.author.clone()}</td>
                                        <td class="table__cell">
                                            <span class="status-badge" class:status-badge--published=post.status == "published">
                                                {post.status.clone()}
                                            </span>
                                        </td>
                                        <td class="table__cell">{format_date(&post.published_at)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--small"
                                                on:click=move |_| handle_edit(post_for_edit.clone())
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

async fn fetch_posts(token: &str) -> Result<Vec<Post>, String> {
    let response: contracts::domain::post::PostListResponse =
        api_utils::get_json("/api/posts", token).await?;
    Ok(response.posts)
}
