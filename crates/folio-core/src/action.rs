//! Control actions
//!
//! Every interactive control binds exactly one action target. Dispatch
//! forwards the bound identifier to the environment untransformed and never
//! observes the outcome.

/// Navigation capabilities the rendering environment must provide.
///
/// The core never assumes a concrete implementation; the site crate supplies
/// the DOM-backed one and tests use a recording stub.
pub trait Navigator {
    /// Open an external resource in a new browsing context.
    fn open_external(&self, url: &str);
    /// Bring the element with the given id into view. A missing anchor is a
    /// silent no-op, never a failure.
    fn scroll_to(&self, anchor_id: &str);
}

/// The action a control performs when activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    /// Open an external resource identifier.
    OpenExternal(&'static str),
    /// Scroll the viewport to a named in-page anchor.
    ScrollTo(&'static str),
    /// Decorative control with no bound action.
    #[default]
    None,
}

impl Action {
    /// Dispatches the action through `nav`, exactly once per call.
    ///
    /// Activations are not debounced or queued; every call dispatches again.
    pub fn dispatch(&self, nav: &impl Navigator) {
        match self {
            Action::OpenExternal(url) => nav.open_external(url),
            Action::ScrollTo(anchor_id) => nav.scroll_to(anchor_id),
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: RefCell<Vec<String>>,
        scrolled: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn open_external(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
        fn scroll_to(&self, anchor_id: &str) {
            self.scrolled.borrow_mut().push(anchor_id.to_string());
        }
    }

    #[test]
    fn test_open_external_forwards_url_untransformed() {
        let nav = RecordingNavigator::default();
        Action::OpenExternal("https://example.com/x").dispatch(&nav);
        assert_eq!(*nav.opened.borrow(), vec!["https://example.com/x"]);
        assert!(nav.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_every_activation_dispatches_again() {
        let nav = RecordingNavigator::default();
        let action = Action::OpenExternal("https://example.com/x");
        action.dispatch(&nav);
        action.dispatch(&nav);
        assert_eq!(nav.opened.borrow().len(), 2);
    }

    #[test]
    fn test_scroll_to_forwards_anchor_once() {
        let nav = RecordingNavigator::default();
        Action::ScrollTo("case-study").dispatch(&nav);
        assert_eq!(*nav.scrolled.borrow(), vec!["case-study"]);
        assert!(nav.opened.borrow().is_empty());
    }

    #[test]
    fn test_none_is_inert() {
        let nav = RecordingNavigator::default();
        Action::None.dispatch(&nav);
        assert!(nav.opened.borrow().is_empty());
        assert!(nav.scrolled.borrow().is_empty());
    }
}
