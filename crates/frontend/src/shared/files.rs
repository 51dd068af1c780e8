//! File helpers for upload inputs and image previews.

use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Read a picked file into a data URL (used for featured-image previews
/// stored inline on the record).
pub fn read_file_as_data_url(file: web_sys::File, on_done: Rc<dyn Fn(String)>) {
    let reader = match web_sys::FileReader::new() {
        Ok(r) => r,
        Err(e) => {
            log::error!("FileReader unavailable: {:?}", e);
            return;
        }
    };

    let reader_for_cb = reader.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_for_cb.result() {
            if let Some(data_url) = result.as_string() {
                on_done(data_url);
            }
        }
    }) as Box<dyn FnMut(web_sys::ProgressEvent)>);

    reader.set_onloadend(Some(cb.as_ref().unchecked_ref()));
    cb.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        log::error!("read_as_data_url failed: {:?}", e);
    }
}

/// "1536.0" bytes -> "1.5 KB"
pub fn format_file_size(bytes: f64) -> String {
    if bytes <= 0.0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    let exponent = (bytes.log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let value = bytes / 1024f64.powi(exponent as i32);
    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
        assert_eq!(format_file_size(512.0), "512 Bytes");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(5.0 * 1024.0 * 1024.0), "5 MB");
    }
}
