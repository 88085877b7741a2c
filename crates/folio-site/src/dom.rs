//! Browser-backed navigation

use folio_core::Navigator;

/// [`Navigator`] over the real DOM.
///
/// Both capabilities are fire-and-forget: a blocked popup or a missing
/// anchor never surfaces as an error to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomNavigator;

impl Navigator for DomNavigator {
    fn open_external(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }

    fn scroll_to(&self, anchor_id: &str) {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor_id));
        match element {
            Some(element) => element.scroll_into_view(),
            None => tracing::debug!(anchor_id, "scroll target not in page, ignoring"),
        }
    }
}
