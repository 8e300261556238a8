//! Prefix navigation history.

/// Stack of visited prefixes, root to current.
///
/// The stack is never empty: the bottom entry is always the bucket root
/// (the empty prefix). Going back at the root is a no-op.
#[derive(Debug, Clone)]
pub struct PathHistory {
    stack: Vec<String>,
}

impl Default for PathHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PathHistory {
    pub fn new() -> Self {
        Self {
            stack: vec![String::new()],
        }
    }

    /// The prefix currently being viewed.
    pub fn current(&self) -> &str {
        // Invariant: the stack always holds at least the root entry.
        self.stack.last().map(String::as_str).unwrap_or("")
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.len() == 1
    }

    /// Descend into `prefix`, making it current.
    pub fn push(&mut self, prefix: String) {
        self.stack.push(prefix);
    }

    /// Go up one level. Returns `false` if already at the root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Jump to the entry at `index`, discarding everything deeper.
    /// Out-of-range indices are ignored.
    pub fn truncate_to(&mut self, index: usize) {
        if index < self.stack.len() {
            self.stack.truncate(index + 1);
        }
    }

    /// Drop everything back to the root.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    pub fn entries(&self) -> &[String] {
        &self.stack
    }

    /// Breadcrumb labels, one per stack entry. The root shows as "Root",
    /// deeper entries show their last path segment.
    pub fn breadcrumbs(&self) -> Vec<String> {
        self.stack
            .iter()
            .map(|prefix| {
                if prefix.is_empty() {
                    "Root".to_string()
                } else {
                    prefix
                        .trim_end_matches('/')
                        .rsplit('/')
                        .next()
                        .unwrap_or(prefix)
                        .to_string()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let history = PathHistory::new();
        assert_eq!(history.current(), "");
        assert!(history.is_at_root());
    }

    #[test]
    fn test_push_and_pop() {
        let mut history = PathHistory::new();
        history.push("photos".to_string());
        history.push("photos/2024".to_string());
        assert_eq!(history.current(), "photos/2024");

        assert!(history.pop());
        assert_eq!(history.current(), "photos");
        assert!(history.pop());
        assert_eq!(history.current(), "");
    }

    #[test]
    fn test_pop_at_root_is_noop() {
        let mut history = PathHistory::new();
        assert!(!history.pop());
        assert_eq!(history.current(), "");
    }

    #[test]
    fn test_truncate_to() {
        let mut history = PathHistory::new();
        history.push("a".to_string());
        history.push("a/b".to_string());
        history.push("a/b/c".to_string());

        history.truncate_to(1);
        assert_eq!(history.current(), "a");
        assert_eq!(history.entries().len(), 2);

        // Out of range: unchanged.
        history.truncate_to(9);
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn test_breadcrumbs() {
        let mut history = PathHistory::new();
        history.push("photos".to_string());
        history.push("photos/2024".to_string());

        assert_eq!(history.breadcrumbs(), vec!["Root", "photos", "2024"]);
    }

    #[test]
    fn test_reset() {
        let mut history = PathHistory::new();
        history.push("photos".to_string());
        history.reset();
        assert!(history.is_at_root());
    }
}
