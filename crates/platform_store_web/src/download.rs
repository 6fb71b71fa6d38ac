//! CSV file downloads via an object-URL anchor click.

/// Offers `csv` to the user as a file download named `filename`.
///
/// Builds a `text/csv` blob, points a temporary anchor element at its object
/// URL, clicks it, and revokes the URL again.
///
/// # Errors
///
/// Returns an error when the document or any DOM call involved in the
/// download is unavailable or fails.
pub fn download_csv(filename: &str, csv: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "document unavailable".to_string())?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(csv));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| format!("blob creation failed: {e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("object URL creation failed: {e:?}"))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| format!("anchor creation failed: {e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element has unexpected type".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        web_sys::Url::revoke_object_url(&url)
            .map_err(|e| format!("object URL revocation failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (filename, csv);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_stub_accepts_download() {
        assert!(download_csv("flow.csv", "Unit,Value\nLitres per minute,50\n").is_ok());
    }
}
