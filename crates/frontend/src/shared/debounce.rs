use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Trailing-edge debounce over the browser timer.
///
/// `schedule` cancels any pending callback and arms a new one, so at most
/// one callback fires per quiet period. `cancel` on unmount prevents stale
/// work after the owning component is torn down.
#[derive(Clone, Copy)]
pub struct Debouncer {
    handle: StoredValue<Option<i32>>,
    delay_ms: i32,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            handle: StoredValue::new(None),
            delay_ms,
        }
    }

    pub fn schedule(&self, callback: impl Fn() + 'static) {
        self.cancel();

        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            self.delay_ms,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                self.handle.set_value(Some(timeout_id));
            }
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(timeout_id) = self.handle.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
            self.handle.set_value(None);
        }
    }
}
