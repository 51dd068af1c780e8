use std::rc::Rc;

use contracts::domain::page::{Page, PageDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::slug::slugify;

#[derive(Clone, Copy)]
pub struct PageDetailsViewModel {
    pub form: RwSignal<PageDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PageDetailsViewModel {
    pub fn new(page: Option<Page>) -> Self {
        let form = match page {
            Some(p) => PageDto::from(p),
            None => PageDto::default(),
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    pub fn set_title(&self, title: String) {
        self.form.update(|f| {
            if f.slug.is_empty() {
                f.slug = slugify(&title);
            }
            f.title = title;
        });
    }

    pub fn save_command(&self, token: String, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match model::save_page(&current, &token).await {
                Ok(()) => {
                    error.set(None);
                    (on_saved)(());
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}
