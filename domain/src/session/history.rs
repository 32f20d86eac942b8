//! Append-only conversation history

use super::entities::Turn;

/// Ordered, append-only sequence of turns for one session.
///
/// Insertion order is the conversational memory handed to the provider on
/// every call. There is no API for removing or editing turns.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    turns: Vec<Turn>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that starts with a single seed turn (usually the greeting).
    pub fn seeded(turn: Turn) -> Self {
        Self { turns: vec![turn] }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

impl<'a> IntoIterator for &'a SessionHistory {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut history = SessionHistory::seeded(Turn::assistant("greeting"));
        history.push(Turn::user("one"));
        history.push(Turn::assistant("two"));
        history.push(Turn::user("three"));

        let texts: Vec<&str> = history.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["greeting", "one", "two", "three"]);
        assert_eq!(history.last().map(|t| t.role()), Some(Role::User));
    }

    #[test]
    fn test_empty_history() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
    }
}
