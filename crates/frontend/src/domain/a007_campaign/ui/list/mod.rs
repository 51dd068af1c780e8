use std::rc::Rc;

use contracts::domain::campaign::{
    AnalyticsResponse, Campaign, CampaignAnalytics, SendTestRequest,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::editor::CampaignEditor;
use crate::shared::api_utils;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn CampaignList() -> impl IntoView {
    let (campaigns, set_campaigns) = signal::<Vec<Campaign>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_editor, set_show_editor) = signal(false);
    let (editing, set_editing) = signal::<Option<Campaign>>(None);
    let (sending, set_sending) = signal(false);

    // send-test modal
    let (show_test_modal, set_show_test_modal) = signal(false);
    let (test_emails, set_test_emails) = signal(String::new());
    let (testing_campaign_id, set_testing_campaign_id) = signal::<Option<i64>>(None);

    // analytics modal
    let (show_analytics, set_show_analytics) = signal(false);
    let (analytics, set_analytics) = signal::<Option<CampaignAnalytics>>(None);
    let (analytics_campaign, set_analytics_campaign) = signal::<Option<Campaign>>(None);

    let (auth_state, _) = use_auth();
    let token = move || auth_state.get_untracked().token.unwrap_or_default();

    let fetch = move || {
        let token = token();
        spawn_local(async move {
            set_loading.set(true);
            match api_utils::get_json::<Vec<Campaign>>("/api/admin/newsletter-campaigns", &token)
                .await
            {
                Ok(list) => {
                    set_campaigns.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_send = move |id: i64| {
        if !confirm("Send this campaign to all confirmed subscribers?") {
            return;
        }
        let token = token();
        set_sending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api_utils::post_empty(
                &format!("/api/admin/newsletter-campaigns/{}/send", id),
                &token,
            )
            .await
            {
                Ok(()) => {
                    fetch();
                    alert("Campaign sent successfully!");
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_sending.set(false);
        });
    };

    let handle_delete = move |id: i64| {
        if !confirm("Delete this campaign?") {
            return;
        }
        let token = token();
        set_error.set(None);
        spawn_local(async move {
            match api_utils::delete(&format!("/api/admin/newsletter-campaigns/{}", id), &token)
                .await
            {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_view_analytics = move |campaign: Campaign| {
        let id = campaign.id;
        set_analytics_campaign.set(Some(campaign));
        let token = token();
        spawn_local(async move {
            match api_utils::get_json::<AnalyticsResponse>(
                &format!("/api/admin/newsletter-campaigns/{}/analytics", id),
                &token,
            )
            .await
            {
                Ok(response) => {
                    set_analytics.set(Some(response.analytics));
                    set_show_analytics.set(true);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_send_test = move |_| {
        let id = match testing_campaign_id.get() {
            Some(id) => id,
            None => return,
        };
        let emails: Vec<String> = test_emails
            .get()
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        let body = SendTestRequest {
            test_emails: emails,
        };
        let token = token();
        set_sending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api_utils::post_json_unit(
                &format!("/api/admin/newsletter-campaigns/{}/send-test", id),
                &token,
                &body,
            )
            .await
            {
                Ok(()) => {
                    set_show_test_modal.set(false);
                    set_test_emails.set(String::new());
                    set_testing_campaign_id.set(None);
                    alert("Test emails sent successfully!");
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_sending.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            {move || if show_editor.get() {
                view! {
                    <CampaignEditor
                        campaign=editing.get()
                        on_saved=Rc::new(move |_| {
                            fetch();
                        })
                        on_back=Rc::new(move |_| {
                            set_show_editor.set(false);
                            set_editing.set(None);
                            fetch();
                        })
                    />
                }.into_any()
            } else {
                view! {
                <div class="campaign-screen">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">{"Newsletter Campaigns"}</h1>
                    </div>
                    <div class="header__actions">
                        <button class="button button--primary" on:click=move |_| {
                            set_editing.set(None);
                            set_show_editor.set(true);
                        }>
                            {icon("plus")}
                            {"Create Campaign"}
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

                <Show when=move || !loading.get() fallback=|| view! { <div class="loading">{"Loading..."}</div> }>
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Title"}</th>
                                    <th class="table__header-cell">{"Subject"}</th>
                                    <th class="table__header-cell">{"Status"}</th>
                                    <th class="table__header-cell">{"Recipients"}</th>
                                    <th class="table__header-cell">{"Opens"}</th>
                                    <th class="table__header-cell">{"Clicks"}</th>
                                    <th class="table__header-cell">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || campaigns.get().into_iter().map(|campaign| {
                                    let id = campaign.id;
                                    let is_draft = campaign.is_draft();
                                    let status = campaign.status.clone();
                                    let campaign_for_edit = campaign.clone();
                                    let campaign_for_analytics = campaign.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{campaign.title.clone()}</td>
                                            <td class="table__cell">{campaign.subject_line.clone()}</td>
                                            <td class="table__cell">
                                                <span
                                                    class="status-badge"
                                                    class:status-badge--sent=status == "sent"
                                                    class:status-badge--sending=status == "sending"
                                                    class:status-badge--scheduled=status == "scheduled"
                                                >
                                                    {status.clone()}
                                                </span>
                                            </td>
                                            <td class="table__cell">{campaign.total_recipients}</td>
                                            <td class="table__cell">{campaign.opened_count}</td>
                                            <td class="table__cell">{campaign.clicked_count}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Show
                                                    when=move || is_draft
                                                    fallback={
                                                        let campaign_for_analytics = campaign_for_analytics.clone();
                                                        move || {
                                                            let campaign = campaign_for_analytics.clone();
                                                            view! {
                                                                <button
                                                                    class="button button--small"
                                                                    on:click=move |_| handle_view_analytics(campaign.clone())
                                                                >
                                                                    {icon("eye")}
                                                                    {"View Details"}
                                                                </button>
                                                            }
                                                        }
                                                    }
                                                >
                                                    {
                                                        let campaign_for_edit = campaign_for_edit.clone();
                                                        view! {
                                                            <button
                                                                class="button button--small"
                                                                on:click={
                                                                    let campaign_for_edit = campaign_for_edit.clone();
                                                                    move |_| {
                                                                        set_editing.set(Some(campaign_for_edit.clone()));
                                                                        set_show_editor.set(true);
                                                                    }
                                                                }
                                                            >
                                                                {"Edit"}
                                                            </button>
                                                            <button
                                                                class="button button--small"
                                                                on:click=move |_| {
                                                                    set_testing_campaign_id.set(Some(id));
                                                                    set_show_test_modal.set(true);
                                                                }
                                                            >
                                                                {"Test"}
                                                            </button>
                                                            <button
                                                                class="button button--small button--primary"
                                                                disabled=move || sending.get()
                                                                on:click=move |_| handle_send(id)
                                                            >
                                                                {icon("send")}
                                                                {"Send"}
                                                            </button>
                                                            <button
                                                                class="button button--small button--danger"
                                                                on:click=move |_| handle_delete(id)
                                                            >
                                                                {icon("delete")}
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </Show>

                <Show when=move || show_test_modal.get()>
                    <div class="modal-overlay">
                        <div class="modal">
                            <h2>{"Send Test Email"}</h2>
                            <input
                                type="text"
                                placeholder="email1@example.com, email2@example.com"
                                prop:value=move || test_emails.get()
                                on:input=move |ev| set_test_emails.set(event_target_value(&ev))
                            />
                            <div class="modal__actions">
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| {
                                        set_show_test_modal.set(false);
                                        set_testing_campaign_id.set(None);
                                    }
                                >
                                    {"Cancel"}
                                </button>
                                <button
                                    class="button button--primary"
                                    disabled=move || sending.get()
                                    on:click=handle_send_test
                                >
                                    {"Send Test"}
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>

                <Show when=move || show_analytics.get()>
                    <div class="modal-overlay">
                        <div class="modal">
                            <button class="modal__close" on:click=move |_| set_show_analytics.set(false)>
                                {icon("x")}
                            </button>
                            <h2>{"Campaign Analytics"}</h2>
                            {move || {
                                let campaign = analytics_campaign.get();
                                let stats = analytics.get();
                                match (campaign, stats) {
                                    (Some(c), Some(a)) => view! {
                                        <div class="analytics">
                                            <div><b>{"Title: "}</b>{c.title.clone()}</div>
                                            <div><b>{"Subject: "}</b>{c.subject_line.clone()}</div>
                                            <div><b>{"Status: "}</b>{c.status.clone()}</div>
                                            <div><b>{"Sent At: "}</b>{c.sent_at.clone().map(|s| format_datetime(&s)).unwrap_or_else(|| "N/A".into())}</div>
                                            <div><b>{"Total Recipients: "}</b>{a.total_recipients}</div>
                                            <div><b>{"Delivered: "}</b>{a.delivered}</div>
                                            <div><b>{"Opened: "}</b>{format!("{} ({:.1}%)", a.opened, a.open_rate)}</div>
                                            <div><b>{"Clicked: "}</b>{format!("{} ({:.1}%)", a.clicked, a.click_rate)}</div>
                                            <div><b>{"Bounced: "}</b>{format!("{} ({:.1}%)", a.bounced, a.bounce_rate)}</div>
                                            <div><b>{"Unsubscribed: "}</b>{format!("{} ({:.1}%)", a.unsubscribed, a.unsubscribe_rate)}</div>
                                        </div>
                                    }.into_any(),
                                    _ => view! { <div class="loading">{"Loading analytics..."}</div> }.into_any(),
                                }
                            }}
                        </div>
                    </div>
                </Show>
                </div>
                }.into_any()
            }}
        </div>
    }
}
