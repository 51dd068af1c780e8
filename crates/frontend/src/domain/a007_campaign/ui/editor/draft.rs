//! Local draft mirror, the safety net for unsaved sessions. Independent of
//! backend auto-save: this survives a closed tab even before the campaign
//! has ever been persisted.

use web_sys::window;

const DRAFT_KEY: &str = "campaign-editor-draft";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_draft() -> Option<String> {
    get_local_storage()?.get_item(DRAFT_KEY).ok()?
}

pub fn save_draft(content: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(DRAFT_KEY, content);
    }
}

pub fn clear_draft() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(DRAFT_KEY);
    }
}
