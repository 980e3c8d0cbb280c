//! Search box state and the redirect it triggers on submission.

use tracing::{debug, trace};

use crate::routes::search_path;

/// Client-side navigation primitive.
///
/// The frontend implements this over the browser history so submitting the
/// search box does not reload the page.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Text currently typed into the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Redirect to the search results route and clear the box.
    ///
    /// Blank or whitespace-only text is ignored: nothing is navigated and the
    /// text is left as typed. Returns the path navigated to, if any.
    pub fn submit<N: Navigate + ?Sized>(&mut self, navigator: &N) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            trace!("Ignoring blank search submission");
            return None;
        }

        let path = search_path(trimmed);
        debug!("Search submitted, navigating to {}", path);
        navigator.navigate(&path);
        self.text.clear();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_submit_trims_navigates_and_clears() {
        let navigator = RecordingNavigator::default();
        let mut query = SearchQuery::new("  cameras  ");

        let path = query.submit(&navigator);

        assert_eq!(path.as_deref(), Some("/search?query=cameras"));
        assert_eq!(*navigator.visited.borrow(), vec!["/search?query=cameras"]);
        assert_eq!(query.text(), "");
    }

    #[test]
    fn test_submit_empty_does_nothing() {
        let navigator = RecordingNavigator::default();
        let mut query = SearchQuery::default();

        assert_eq!(query.submit(&navigator), None);
        assert!(navigator.visited.borrow().is_empty());
        assert_eq!(query.text(), "");
    }

    #[test]
    fn test_submit_whitespace_does_nothing() {
        let navigator = RecordingNavigator::default();
        let mut query = SearchQuery::new("   ");

        assert_eq!(query.submit(&navigator), None);
        assert!(navigator.visited.borrow().is_empty());
        assert_eq!(query.text(), "   ");
    }

    #[test]
    fn test_submit_encodes_inner_spaces() {
        let navigator = RecordingNavigator::default();
        let mut query = SearchQuery::new(" fiber splicer ");

        query.submit(&navigator);

        assert_eq!(*navigator.visited.borrow(), vec!["/search?query=fiber%20splicer"]);
    }

    #[test]
    fn test_consecutive_submissions() {
        let navigator = RecordingNavigator::default();
        let mut query = SearchQuery::default();

        query.set_text("dome");
        query.submit(&navigator);
        query.submit(&navigator);
        query.set_text("nvr");
        query.submit(&navigator);

        assert_eq!(
            *navigator.visited.borrow(),
            vec!["/search?query=dome", "/search?query=nvr"]
        );
    }

    #[test]
    fn test_submit_through_trait_object() {
        let navigator = RecordingNavigator::default();
        let dyn_navigator: &dyn Navigate = &navigator;
        let mut query = SearchQuery::new("router");

        query.submit(dyn_navigator);

        assert_eq!(*navigator.visited.borrow(), vec!["/search?query=router"]);
    }
}
