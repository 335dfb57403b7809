//! Navigation history stack.

use crate::page::{PageId, Route};

/// Current page plus the stack of visited routes.
///
/// The stack is never empty and its last entry is always the current page.
/// There is no forward stack: popped entries are gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStore {
    history: Vec<Route>,
}

impl NavigationStore {
    /// Start at `home` with a one-entry history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Route::Page(PageId::Home)],
        }
    }

    /// Push `route` and make it current.
    ///
    /// The target is not validated and repeats are not collapsed.
    pub fn navigate(&mut self, route: impl Into<Route>) {
        let route = route.into();
        tracing::debug!(page = %route, depth = self.depth() + 1, "navigate");
        self.history.push(route);
    }

    /// Pop the current page if there is one to return to.
    ///
    /// Returns whether anything was popped.
    pub fn go_back(&mut self) -> bool {
        if self.can_go_back() {
            let left = self.history.pop();
            tracing::debug!(
                from = ?left.as_ref().map(Route::as_str),
                to = %self.current(),
                depth = self.depth(),
                "go back"
            );
            true
        } else {
            tracing::trace!("go back ignored at root");
            false
        }
    }

    /// The current page.
    #[must_use]
    pub fn current(&self) -> &Route {
        // Never empty: seeded in `new` and `go_back` keeps one entry.
        &self.history[self.history.len() - 1]
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.depth() > 1
    }

    /// Visited routes, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Number of entries in the history, at least one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}
