use std::rc::Rc;

use contracts::domain::post::{Post, PostDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::slug::slugify;

/// ViewModel for the post form
#[derive(Clone, Copy)]
pub struct PostDetailsViewModel {
    pub form: RwSignal<PostDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PostDetailsViewModel {
    pub fn new(post: Option<Post>) -> Self {
        let form = match post {
            Some(p) => PostDto::from(p),
            None => PostDto::default(),
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

    /// Title edits derive the slug until the user has set one explicitly.
    pub fn set_title(&self, title: String) {
        self.form.update(|f| {
            if f.slug.is_empty() {
                f.slug = slugify(&title);
            }
            f.title = title;
        });
    }

    pub fn set_slug(&self, raw: String) {
        self.form.update(|f| f.slug = slugify(&raw));
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
            match model::save_post(&current, &token).await {
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
