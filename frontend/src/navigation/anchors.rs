use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::Callback;

/// Looks up in-page anchors and brings them into view.
pub trait AnchorDocument {
    type Target;

    /// `None` covers both a missing element and an unusable selector.
    fn find_anchor(&self, anchor: &str) -> Option<Self::Target>;

    /// Starts an animated scroll; completion is never observed.
    fn smooth_scroll_to(&self, target: &Self::Target);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserDocument;

impl AnchorDocument for BrowserDocument {
    type Target = Element;

    fn find_anchor(&self, anchor: &str) -> Option<Element> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(anchor).ok().flatten())
    }

    fn smooth_scroll_to(&self, target: &Element) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Scrolls to `anchor` if it exists. Returns whether a scroll was started.
pub fn scroll_to_anchor<D: AnchorDocument>(document: &D, anchor: &str) -> bool {
    match document.find_anchor(anchor) {
        Some(target) => {
            document.smooth_scroll_to(&target);
            true
        }
        None => false,
    }
}

/// Click handler for a plain in-page link: no browser navigation, just a
/// smooth scroll to the anchor.
pub fn anchor_click(anchor: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(&BrowserDocument, anchor);
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// A document holding a fixed set of element ids, recording every
    /// scroll request it receives.
    pub struct FakeDocument {
        ids: Vec<&'static str>,
        pub scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        pub fn with_ids(ids: &[&'static str]) -> Self {
            Self { ids: ids.to_vec(), scrolled_to: RefCell::new(Vec::new()) }
        }

        pub fn scroll_calls(&self) -> usize {
            self.scrolled_to.borrow().len()
        }
    }

    impl AnchorDocument for FakeDocument {
        type Target = String;

        fn find_anchor(&self, anchor: &str) -> Option<String> {
            let id = anchor.strip_prefix('#')?;
            self.ids.iter().find(|known| **known == id).map(|id| id.to_string())
        }

        fn smooth_scroll_to(&self, target: &String) {
            self.scrolled_to.borrow_mut().push(target.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeDocument;
    use super::*;

    #[test]
    fn test_existing_anchor_scrolls_once() {
        let document = FakeDocument::with_ids(&["features", "pricing"]);
        assert!(scroll_to_anchor(&document, "#pricing"));
        assert_eq!(*document.scrolled_to.borrow(), vec!["pricing".to_string()]);
    }

    #[test]
    fn test_missing_anchor_is_silent() {
        let document = FakeDocument::with_ids(&["pricing"]);
        assert!(!scroll_to_anchor(&document, "#doesnotexist"));
        assert_eq!(document.scroll_calls(), 0);
    }

    #[test]
    fn test_malformed_anchor_is_treated_as_missing() {
        let document = FakeDocument::with_ids(&["pricing"]);
        assert!(!scroll_to_anchor(&document, "pricing"));
        assert!(!scroll_to_anchor(&document, ""));
        assert_eq!(document.scroll_calls(), 0);
    }
}
