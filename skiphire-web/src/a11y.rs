// Accessibility helpers

/// Update the live region status for screen readers.
///
/// Writes into the `#status-helper` element when present; the app shell
/// renders it next to the step so selection confirmations are announced.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("status-helper"))
    {
        node.set_text_content(Some(msg));
    }
}
