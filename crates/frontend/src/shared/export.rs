//! Client-side CSV export with browser download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types exportable from a list screen.
pub trait CsvExport {
    /// Column headers, in output order.
    fn headers() -> Vec<&'static str>;

    /// One row of cell values matching `headers()`.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Build the CSV text for a data set. Separated from the download so the
/// quoting rules stay testable off-browser.
pub fn build_csv<T: CsvExport>(data: &[T]) -> String {
    let mut csv = String::new();

    // UTF-8 BOM so spreadsheet apps pick up the encoding
    csv.push('\u{FEFF}');

    csv.push_str(&T::headers().join(","));
    csv.push('\n');

    for item in data {
        let escaped: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv.push_str(&escaped.join(","));
        csv.push('\n');
    }

    csv
}

/// Export a data set as a CSV file and trigger a browser download.
pub fn export_to_csv<T: CsvExport>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing selected to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)
}

/// Quote cells containing the delimiter, quotes, or newlines; double any
/// embedded quotes.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        note: String,
    }

    impl CsvExport for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.clone(), self.note.clone()]
        }
    }

    #[test]
    fn test_cells_with_delimiters_are_quoted() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_build_csv_shape() {
        let rows = vec![
            Row {
                name: "Ada".into(),
                note: "likes, commas".into(),
            },
            Row {
                name: "Bea".into(),
                note: "plain".into(),
            },
        ];
        let csv = build_csv(&rows);
        let body = csv.trim_start_matches('\u{FEFF}');
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "Name,Note");
        assert_eq!(lines[1], "Ada,\"likes, commas\"");
        assert_eq!(lines[2], "Bea,plain");
    }
}
