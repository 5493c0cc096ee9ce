//! In-process address history
//!
//! Owns the current path. The runner pushes paths requested by the
//! synchronizer and reports every change back as `RawMsg::PathChanged`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Returns the new current path, or `None` when `path` is already current.
    pub fn push(&mut self, path: &str) -> Option<&str> {
        if self.current() == path {
            return None;
        }
        self.entries.push(path.to_string());
        Some(self.current())
    }

    /// Returns the path now current, or `None` at the first entry.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_push_same_path_is_noop() {
        let mut history = History::new("/library");
        assert_eq!(history.push("/library"), None);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_and_back() {
        let mut history = History::default();
        assert_eq!(history.push("/library"), Some("/library"));
        assert_eq!(history.push("/reader/2"), Some("/reader/2"));

        assert_eq!(history.back(), Some("/library"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), "/");
    }
}
