use std::rc::Rc;

use contracts::domain::campaign::{Campaign, CampaignPayload};
use contracts::editor::block_list::BlockList;
use contracts::editor::editor_data::EditorData;
use contracts::editor::global_styles::GlobalStyles;
use contracts::editor::html::render_email_html;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{draft, model};
use crate::shared::debounce::Debouncer;

/// Quiet period before an auto-save fires.
pub const AUTO_SAVE_DELAY_MS: i32 = 3000;
/// How long the "Saved" badge stays up before reverting to idle.
pub const STATUS_RESET_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AutoSaveStatus {
    Idle,
    Saving,
    Saved,
}

impl AutoSaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AutoSaveStatus::Idle => "",
            AutoSaveStatus::Saving => "Saving...",
            AutoSaveStatus::Saved => "Saved",
        }
    }
}

/// State and commands behind the campaign editor.
///
/// All fields are arena-backed signals, so the whole view model is `Copy`
/// and moves freely into event closures.
#[derive(Clone, Copy)]
pub struct CampaignEditorViewModel {
    pub campaign_id: RwSignal<Option<i64>>,
    pub title: RwSignal<String>,
    pub subject_line: RwSignal<String>,
    pub from_name: RwSignal<String>,
    pub from_email: RwSignal<String>,
    pub reply_to_email: RwSignal<String>,
    pub content_html: RwSignal<String>,
    pub blocks: RwSignal<BlockList>,
    pub styles: RwSignal<GlobalStyles>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub unsaved_changes: RwSignal<bool>,
    pub auto_save_status: RwSignal<AutoSaveStatus>,
    /// True while the restore-or-discard prompt is up; the draft mirror is
    /// paused so the stored draft is not clobbered before the user decides.
    pub draft_prompt: RwSignal<bool>,
    status: StoredValue<String>,
    token: StoredValue<String>,
    debounce: Debouncer,
}

impl CampaignEditorViewModel {
    pub fn new(campaign: Option<&Campaign>, token: String) -> Self {
        let status = campaign
            .map(|c| c.status.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "draft".to_string());

        Self {
            campaign_id: RwSignal::new(campaign.map(|c| c.id)),
            title: RwSignal::new(campaign.map(|c| c.title.clone()).unwrap_or_default()),
            subject_line: RwSignal::new(
                campaign.map(|c| c.subject_line.clone()).unwrap_or_default(),
            ),
            from_name: RwSignal::new(campaign.map(|c| c.from_name.clone()).unwrap_or_default()),
            from_email: RwSignal::new(campaign.map(|c| c.from_email.clone()).unwrap_or_default()),
            reply_to_email: RwSignal::new(
                campaign
                    .map(|c| c.reply_to_email.clone())
                    .unwrap_or_default(),
            ),
            content_html: RwSignal::new(
                campaign.map(|c| c.content_html.clone()).unwrap_or_default(),
            ),
            blocks: RwSignal::new(BlockList::new()),
            styles: RwSignal::new(GlobalStyles::editor_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            unsaved_changes: RwSignal::new(false),
            auto_save_status: RwSignal::new(AutoSaveStatus::Idle),
            draft_prompt: RwSignal::new(draft::load_draft().is_some()),
            status: StoredValue::new(status),
            token: StoredValue::new(token),
            debounce: Debouncer::new(AUTO_SAVE_DELAY_MS),
        }
    }

    /// The aggregate serialized on save and auto-save.
    pub fn snapshot(&self) -> EditorData {
        EditorData {
            title: self.title.get_untracked(),
            subject_line: self.subject_line.get_untracked(),
            from_name: self.from_name.get_untracked(),
            from_email: self.from_email.get_untracked(),
            reply_to_email: self.reply_to_email.get_untracked(),
            content_html: self.content_html.get_untracked(),
            content_blocks: Some(self.blocks.get_untracked().to_vec()),
            global_styles: Some(self.styles.get_untracked()),
        }
    }

    /// Call after every edit: mirror the local draft, mark unsaved, and
    /// re-arm the auto-save timer (trailing-edge debounce).
    pub fn touch(&self) {
        if !self.draft_prompt.get_untracked() {
            draft::save_draft(&self.content_html.get_untracked());
        }
        self.unsaved_changes.set(true);

        let vm = *self;
        self.debounce.schedule(move || vm.auto_save());
    }

    /// Cancel pending timers; called when the editor unmounts so no save
    /// fires into a torn-down component.
    pub fn dispose(&self) {
        self.debounce.cancel();
    }

    fn payload(&self, data: EditorData) -> CampaignPayload {
        CampaignPayload {
            editor: data,
            status: self.status.get_value(),
        }
    }

    /// Background save. A no-op until the campaign exists; failures are
    /// logged, never surfaced.
    fn auto_save(&self) {
        let id = match self.campaign_id.get_untracked() {
            Some(id) => id,
            None => return,
        };

        let payload = self.payload(self.snapshot());
        let vm = *self;
        spawn_local(async move {
            vm.auto_save_status.set(AutoSaveStatus::Saving);
            match model::update_campaign(id, &payload, &vm.token.get_value()).await {
                Ok(()) => {
                    vm.auto_save_status.set(AutoSaveStatus::Saved);
                    TimeoutFuture::new(STATUS_RESET_DELAY_MS).await;
                    vm.auto_save_status.set(AutoSaveStatus::Idle);
                }
                Err(e) => {
                    log::error!("Auto-save failed: {}", e);
                    vm.auto_save_status.set(AutoSaveStatus::Idle);
                }
            }
        });
    }

    /// Explicit save: creates the record when there is no id yet, surfaces
    /// failures to the user.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let data = self.snapshot();
        if let Err(e) = data.validate() {
            self.error.set(Some(e));
            return;
        }

        let payload = self.payload(data);
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let token = vm.token.get_value();
            let result = match vm.campaign_id.get_untracked() {
                Some(id) => model::update_campaign(id, &payload, &token).await,
                None => model::create_campaign(&payload, &token)
                    .await
                    .map(|created| vm.campaign_id.set(Some(created.id))),
            };
            match result {
                Ok(()) => {
                    vm.unsaved_changes.set(false);
                    (on_saved)(());
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.saving.set(false);
        });
    }

    /// "Generate HTML from Blocks" button.
    pub fn generate_html_from_blocks(&self) {
        let html = render_email_html(
            self.blocks.get_untracked().blocks(),
            &self.styles.get_untracked(),
        );
        self.content_html.set(html);
        self.touch();
    }

    /// Append a fragment (media insert, RSS article card) to the body.
    pub fn append_html(&self, fragment: &str) {
        self.content_html.update(|html| html.push_str(fragment));
        self.touch();
    }

    pub fn restore_draft(&self) {
        if let Some(content) = draft::load_draft() {
            self.content_html.set(content);
        }
        self.draft_prompt.set(false);
    }

    pub fn discard_draft(&self) {
        draft::clear_draft();
        self.draft_prompt.set(false);
    }
}
