//! RSS feed registrations and the article browser. Fetching/parsing feeds
//! is backend work; these screens only manage the list and reuse ingested
//! articles in campaigns.

use contracts::domain::rss::{RssArticle, RssFeed, RssFeedDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn RssFeedManager() -> impl IntoView {
    let (feeds, set_feeds) = signal::<Vec<RssFeed>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let form = RwSignal::new(RssFeedDto::default());

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match api_utils::get_json::<Vec<RssFeed>>("/api/admin/rss-feeds", &token).await {
                Ok(list) => {
                    set_feeds.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get();
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }
        let token = token();
        let editing = editing_id.get();
        spawn_local(async move {
            let result = match editing {
                Some(id) => {
                    api_utils::put_json_unit(&format!("/api/admin/rss-feeds/{}", id), &token, &dto)
                        .await
                }
                None => api_utils::post_json_unit("/api/admin/rss-feeds", &token, &dto).await,
            };
            match result {
                Ok(()) => {
                    set_editing_id.set(None);
                    form.set(RssFeedDto::default());
                    set_error.set(None);
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_edit = move |feed: RssFeed| {
        set_editing_id.set(Some(feed.id));
        form.set(RssFeedDto {
            name: feed.name,
            url: feed.url,
            auto_include: feed.auto_include,
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this RSS feed?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = token();
        spawn_local(async move {
            match api_utils::delete(&format!("/api/admin/rss-feeds/{}", id), &token).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"RSS Feeds"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <form class="details-form details-form--narrow" on:submit=handle_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="rss-name">{"Name"}</label>
                        <input
                            type="text"
                            id="rss-name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="rss-url">{"Feed URL"}</label>
                        <input
                            type="url"
                            id="rss-url"
                            prop:value=move || form.get().url
                            on:input=move |ev| form.update(|f| f.url = event_target_value(&ev))
                            placeholder="https://example.com/feed.xml"
                            required
                        />
                    </div>
                </div>
                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().auto_include
                            on:change=move |ev| form.update(|f| f.auto_include = event_target_checked(&ev))
                        />
                        {"Automatically include new articles in campaigns"}
                    </label>
                </div>
                <div class="details-actions">
                    <button type="submit" class="btn btn-primary">
                        {move || if editing_id.get().is_some() { "Update Feed" } else { "Add Feed" }}
                    </button>
                    <Show when=move || editing_id.get().is_some()>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| {
                                set_editing_id.set(None);
                                form.set(RssFeedDto::default());
                            }
                        >
                            {"Cancel"}
                        </button>
                    </Show>
                </div>
            </form>

            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">{"Loading..."}</div> }>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"URL"}</th>
                                <th class="table__header-cell">{"Auto-include"}</th>
                                <th class="table__header-cell">{"Articles"}</th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || feeds.get().into_iter().map(|feed| {
                                let id = feed.id;
                                let feed_for_edit = feed.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{feed.name.clone()}</td>
                                        <td class="table__cell">{feed.url.clone()}</td>
                                        <td class="table__cell">{if feed.auto_include { "Yes" } else { "No" }}</td>
                                        <td class="table__cell">{feed.articles_count.unwrap_or(0)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--small"
                                                on:click=move |_| handle_edit(feed_for_edit.clone())
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

/// Browse ingested articles and hand the picked one to the campaign editor.
#[component]
pub fn RssArticleBrowser(on_insert: Callback<RssArticle>) -> impl IntoView {
    let (articles, set_articles) = signal::<Vec<RssArticle>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    let (auth_state, _) = use_auth();

    let fetch = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);
            match api_utils::get_json::<Vec<RssArticle>>("/api/admin/rss-articles", &token).await {
                Ok(list) => {
                    set_articles.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="rss-browser">
            <h3>{"RSS Articles"}</h3>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <div class="loading">{"Loading..."}</div> }>
                <ul class="rss-browser__list">
                    {move || articles.get().into_iter().map(|article| {
                        let article_for_insert = article.clone();
                        view! {
                            <li class="rss-browser__item">
                                <div class="rss-browser__meta">
                                    <span class="rss-browser__title">{article.title.clone()}</span>
                                    <span class="rss-browser__date">{format_datetime(&article.published_at)}</span>
                                </div>
                                <button
                                    class="button button--small"
                                    on:click=move |_| on_insert.run(article_for_insert.clone())
                                >
                                    {"Insert"}
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
