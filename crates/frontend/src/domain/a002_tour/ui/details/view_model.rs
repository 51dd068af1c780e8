use std::rc::Rc;

use contracts::domain::tour::{Tour, TourDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::shared::slug::slugify;

#[derive(Clone, Copy)]
pub struct TourDetailsViewModel {
    pub form: RwSignal<TourDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl TourDetailsViewModel {
    pub fn new(tour: Option<Tour>) -> Self {
        let form = match tour {
            Some(t) => TourDto::from(t),
            None => TourDto::default(),
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

    pub fn set_name(&self, name: String) {
        self.form.update(|f| {
            if f.slug.is_empty() {
                f.slug = slugify(&name);
            }
            f.name = name;
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
            match model::save_tour(&current, &token).await {
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
