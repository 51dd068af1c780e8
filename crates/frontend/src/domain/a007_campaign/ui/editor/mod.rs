//! Campaign editor.
//!
//! Simplified MVVM split: model.rs talks to the backend, view_model.rs owns
//! the editor state (auto-save debounce, draft mirror, status flag), view.rs
//! and the widget files are pure UI.

mod block_builder;
mod draft;
mod media_library;
mod model;
mod preview;
mod styles_panel;
mod view;
mod view_model;

pub use view::CampaignEditor;
pub use view_model::{AutoSaveStatus, CampaignEditorViewModel};
