//! Clipboard adapter over `navigator.clipboard` with an `execCommand` shim.

use platform_host::{ClipboardError, ClipboardFuture, TextClipboard};

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard. Copy tries the async clipboard API first and falls back
/// to a hidden-textarea `execCommand("copy")` shim when the API is missing or
/// the permission prompt is refused. Reads have no shim; denial surfaces as
/// [`ClipboardError::Denied`] and callers leave their document untouched.
pub struct WebClipboard;

impl TextClipboard for WebClipboard {
    fn copy_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), ClipboardError>> {
        #[cfg(target_arch = "wasm32")]
        {
            let text = text.to_string();
            Box::pin(async move {
                if write_via_clipboard_api(&text).await.is_ok() {
                    return Ok(());
                }
                copy_via_exec_command(&text)
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = text;
            Box::pin(async { Err(ClipboardError::Unavailable) })
        }
    }

    fn read_text(&self) -> ClipboardFuture<'_, Result<String, ClipboardError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(async {
                let navigator = web_sys::window()
                    .ok_or(ClipboardError::Unavailable)?
                    .navigator();
                let promise = navigator.clipboard().read_text();
                let value = wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map_err(|_| ClipboardError::Denied)?;
                Ok(value.as_string().unwrap_or_default())
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async { Err(ClipboardError::Unavailable) })
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn write_via_clipboard_api(text: &str) -> Result<(), ()> {
    let navigator = web_sys::window().ok_or(())?.navigator();
    let promise = navigator.clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| ())
}

#[cfg(target_arch = "wasm32")]
fn copy_via_exec_command(text: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::Unavailable)?;
    let body = document.body().ok_or(ClipboardError::Unavailable)?;

    let area: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|_| ClipboardError::Unavailable)?
        .dyn_into()
        .map_err(|_| ClipboardError::Unavailable)?;
    area.set_value(text);
    let _ = area.style().set_property("position", "fixed");
    let _ = area.style().set_property("opacity", "0");

    body.append_child(&area)
        .map_err(|_| ClipboardError::Unavailable)?;
    area.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&area);

    if copied {
        Ok(())
    } else {
        Err(ClipboardError::Denied)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_fallback_reports_unavailable() {
        let clipboard = WebClipboard;
        assert_eq!(
            block_on(clipboard.copy_text("x")),
            Err(ClipboardError::Unavailable)
        );
        assert_eq!(
            block_on(clipboard.read_text()),
            Err(ClipboardError::Unavailable)
        );
    }
}
