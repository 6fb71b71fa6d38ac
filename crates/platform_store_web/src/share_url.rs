//! URL query read and in-place replacement.
//!
//! Converter pages mirror their state into the query string. The mirror is
//! applied with `history.replaceState` so browser history gains no entry per
//! keystroke; the back button leaves the page rather than undoing edits.

/// Returns the current window query string without its leading `?`.
///
/// Empty when there is no query or no browser window.
pub fn current_query() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| search.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Replaces the current URL's query string in place.
///
/// # Errors
///
/// Returns an error when the window, location, or history API is
/// unavailable or rejects the replacement.
pub fn replace_query(query: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let pathname = window
            .location()
            .pathname()
            .map_err(|e| format!("location pathname failed: {e:?}"))?;
        let url = if query.is_empty() {
            pathname
        } else {
            format!("{pathname}?{query}")
        };
        window
            .history()
            .map_err(|e| format!("history unavailable: {e:?}"))?
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
            .map_err(|e| format!("history replace_state failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = query;
        Ok(())
    }
}
