//! Clipboard writes via the async Clipboard API.

/// Copies text to the system clipboard.
///
/// The underlying browser call is a promise; the write is fire-and-forget
/// and a rejected promise (denied permission, insecure context) is ignored.
///
/// # Errors
///
/// Returns an error when no browser window is available to issue the write.
pub fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let _ = window.navigator().clipboard().write_text(text);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Ok(())
    }
}
