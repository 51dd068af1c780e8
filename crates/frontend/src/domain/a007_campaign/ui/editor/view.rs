use std::rc::Rc;

use contracts::domain::campaign::Campaign;
use contracts::domain::email_template::EmailTemplate;
use contracts::editor::block_list::BlockList;
use leptos::prelude::*;

use super::block_builder::BlockBuilder;
use super::media_library::MediaLibrary;
use super::preview::PreviewPanel;
use super::styles_panel::StylesPanel;
use super::view_model::{AutoSaveStatus, CampaignEditorViewModel};
use crate::domain::a008_email_template::ui::list::TemplateManager;
use crate::domain::a009_rss_feed::ui::list::RssArticleBrowser;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum EditorTab {
    Editor,
    Blocks,
    Settings,
    Preview,
}

#[component]
pub fn CampaignEditor(
    campaign: Option<Campaign>,
    on_saved: Rc<dyn Fn(())>,
    on_back: Rc<dyn Fn(())>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let token = auth_state.get_untracked().token.unwrap_or_default();

    let vm = CampaignEditorViewModel::new(campaign.as_ref(), token.clone());
    let (tab, set_tab) = signal(EditorTab::Editor);

    // No auto-save may fire into a torn-down editor.
    on_cleanup(move || vm.dispose());

    let apply_template = Callback::new(move |template: EmailTemplate| {
        vm.content_html.set(template.content_html);
        if let Some(blocks) = template.content_blocks {
            vm.blocks.set(BlockList::from_blocks(blocks));
        }
        if let Some(styles) = template.global_styles {
            vm.styles.set(styles);
        }
        vm.touch();
    });

    let insert_article = Callback::new(move |article: contracts::domain::rss::RssArticle| {
        vm.append_html(&format!(
            "<div class=\"rss-article-block\" style=\"border:1px solid #e5e7eb;padding:12px;margin:12px 0;border-radius:8px;\">\
             <div style=\"font-weight:bold;font-size:1.1em;\">{}</div>\
             <div style=\"color:#666;font-size:0.9em;\">{}</div>\
             <div style=\"margin:8px 0;\">{}</div>\
             <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color:#2563eb;text-decoration:underline;\">Read more</a>\
             </div>",
            article.title, article.published_at, article.summary, article.url
        ));
    });

    let tab_button = move |target: EditorTab, label: &'static str| {
        view! {
            <button
                class="editor-tabs__tab"
                class:editor-tabs__tab--active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="campaign-editor">
            <div class="header">
                <div class="header__content">
                    <button class="button button--ghost" on:click=move |_| (on_back)(())>
                        {"← Back to Campaigns"}
                    </button>
                    <h1 class="header__title">{"Campaign Editor"}</h1>
                </div>
                <div class="header__actions">
                    <span
                        class="autosave-badge"
                        class:autosave-badge--saving=move || vm.auto_save_status.get() == AutoSaveStatus::Saving
                        class:autosave-badge--saved=move || vm.auto_save_status.get() == AutoSaveStatus::Saved
                    >
                        {move || vm.auto_save_status.get().label()}
                    </span>
                    <button
                        class="button button--primary"
                        on:click={
                            let on_saved = on_saved.clone();
                            move |_| vm.save_command(on_saved.clone())
                        }
                        disabled=move || vm.saving.get() || !vm.unsaved_changes.get()
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { "Saving..." } else { "Save Campaign" }}
                    </button>
                </div>
            </div>

            <Show when=move || vm.draft_prompt.get()>
                <div class="draft-banner">
                    <span>{"Restore previous draft?"}</span>
                    <button class="button button--primary button--small" on:click=move |_| vm.restore_draft()>
                        {"Restore"}
                    </button>
                    <button class="button button--secondary button--small" on:click=move |_| vm.discard_draft()>
                        {"Discard"}
                    </button>
                </div>
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <div class="details-form campaign-editor__meta">
                <div class="form-row">
                    <div class="form-group">
                        <label for="campaign-title">{"Campaign Title"}</label>
                        <input
                            type="text"
                            id="campaign-title"
                            placeholder="Internal campaign name"
                            prop:value=move || vm.title.get()
                            on:input=move |ev| {
                                vm.title.set(event_target_value(&ev));
                                vm.touch();
                            }
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="campaign-subject">{"Subject Line"}</label>
                        <input
                            type="text"
                            id="campaign-subject"
                            placeholder="Email subject line"
                            prop:value=move || vm.subject_line.get()
                            on:input=move |ev| {
                                vm.subject_line.set(event_target_value(&ev));
                                vm.touch();
                            }
                            required
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="campaign-from-name">{"From Name"}</label>
                        <input
                            type="text"
                            id="campaign-from-name"
                            placeholder="e.g. ARTbeat Team"
                            prop:value=move || vm.from_name.get()
                            on:input=move |ev| {
                                vm.from_name.set(event_target_value(&ev));
                                vm.touch();
                            }
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="campaign-from-email">{"From Email"}</label>
                        <input
                            type="email"
                            id="campaign-from-email"
                            placeholder="noreply@artbeat.local"
                            prop:value=move || vm.from_email.get()
                            on:input=move |ev| {
                                vm.from_email.set(event_target_value(&ev));
                                vm.touch();
                            }
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="campaign-reply-to">{"Reply-To Email"}</label>
                        <input
                            type="email"
                            id="campaign-reply-to"
                            placeholder="support@artbeat.local"
                            prop:value=move || vm.reply_to_email.get()
                            on:input=move |ev| {
                                vm.reply_to_email.set(event_target_value(&ev));
                                vm.touch();
                            }
                            required
                        />
                    </div>
                </div>
            </div>

            <div class="editor-tabs">
                <div class="editor-tabs__bar">
                    {tab_button(EditorTab::Editor, "HTML Editor")}
                    {tab_button(EditorTab::Blocks, "Block Builder")}
                    {tab_button(EditorTab::Settings, "Styles & Media")}
                    {tab_button(EditorTab::Preview, "Preview")}
                </div>

                <div class="editor-tabs__panel">
                    <Show when=move || tab.get() == EditorTab::Editor>
                        <div class="form-group">
                            <textarea
                                class="rich-text-input campaign-editor__html"
                                rows="18"
                                placeholder="Email body (HTML)"
                                prop:value=move || vm.content_html.get()
                                on:input=move |ev| {
                                    vm.content_html.set(event_target_value(&ev));
                                    vm.touch();
                                }
                            />
                        </div>
                    </Show>

                    <Show when=move || tab.get() == EditorTab::Blocks>
                        <BlockBuilder vm=vm />
                    </Show>

                    <Show when=move || tab.get() == EditorTab::Settings>
                        <div class="campaign-editor__settings">
                            <div>
                                <StylesPanel vm=vm />
                                <Show when=move || !vm.blocks.get().is_empty()>
                                    <button
                                        class="button button--primary campaign-editor__generate"
                                        on:click=move |_| vm.generate_html_from_blocks()
                                    >
                                        {"Generate HTML from Blocks"}
                                    </button>
                                </Show>
                            </div>
                            <div>
                                <MediaLibrary vm=vm token=token.clone() />
                                <TemplateManager on_select=Some(apply_template) />
                                <RssArticleBrowser on_insert=insert_article />
                            </div>
                        </div>
                    </Show>

                    <Show when=move || tab.get() == EditorTab::Preview>
                        <PreviewPanel html=vm.content_html />
                    </Show>
                </div>
            </div>
        </div>
    }
}
