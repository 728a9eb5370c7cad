//! The in-memory list of todos for the running session

use crate::todo::{Todo, TodoId};

/// Holds the todos, in the order they were received or appended.
///
/// The store exclusively owns its list: callers only get immutable views or owned copies,
/// and every mutation goes through one of its methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    todos: Vec<Todo>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current list and replace it wholesale.
    /// No check is made for duplicate ids.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Returns the current list
    pub fn get_all(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns an owned copy of the current list
    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Add a todo at the end of the list.
    ///
    /// In case a todo with the same id is already known, it is replaced in place instead, so that ids stay unique
    pub fn append(&mut self, todo: Todo) {
        if let Some(existing) = self.todos.iter_mut().find(|t| t.id() == todo.id()) {
            log::warn!("Todo {} is already in the list, replacing it instead of appending it", todo.id());
            *existing = todo;
            return;
        }
        self.todos.push(todo);
    }

    /// Remove every todo that has this id. This is not an error if there is none.
    pub fn remove_by_id(&mut self, id: &TodoId) {
        self.todos.retain(|t| t.id() != id);
    }

    pub fn get_by_id(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == id)
    }

    /// Replace the todo that has this id, keeping its position.
    /// Returns whether such a todo was found.
    pub fn replace_by_id(&mut self, id: &TodoId, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id() == id) {
            None => false,
            Some(existing) => {
                *existing = todo;
                true
            },
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn todo(id: &str) -> Todo {
        Todo::new(TodoId::from(id), format!("Task {}", id), false, None, None)
    }

    fn ids(store: &Store) -> Vec<&str> {
        store.get_all().iter().map(|t| t.id().as_str()).collect()
    }

    #[test]
    fn append_to_empty_store() {
        let mut store = Store::new();
        let standup = Todo::new(
            TodoId::from("1"), "Standup", false,
            NaiveDate::from_ymd_opt(2024, 1, 1), NaiveDate::from_ymd_opt(2024, 1, 1),
        );
        store.append(standup.clone());
        assert_eq!(store.get_all(), &[standup]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = Store::new();
        store.replace_all(vec![todo("1"), todo("2"), todo("3")]);
        store.remove_by_id(&TodoId::from("2"));
        assert_eq!(ids(&store), vec!["1", "3"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut once = Store::new();
        once.replace_all(vec![todo("1"), todo("2"), todo("3")]);
        let mut twice = once.clone();

        once.remove_by_id(&TodoId::from("1"));
        twice.remove_by_id(&TodoId::from("1"));
        twice.remove_by_id(&TodoId::from("1"));
        assert_eq!(once, twice);

        // Unknown ids are fine too
        twice.remove_by_id(&TodoId::from("unknown"));
        assert_eq!(once, twice);
    }

    #[test]
    fn sequence_of_operations() {
        let mut store = Store::new();
        store.append(todo("a"));
        store.append(todo("b"));
        store.replace_all(vec![todo("c"), todo("d")]);
        store.append(todo("e"));
        store.remove_by_id(&TodoId::from("d"));
        store.append(todo("f"));
        assert_eq!(ids(&store), vec!["c", "e", "f"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn append_keeps_ids_unique() {
        let mut store = Store::new();
        store.replace_all(vec![todo("1"), todo("2")]);
        let renamed = Todo::new(TodoId::from("1"), "Renamed", true, None, None);
        store.append(renamed.clone());
        assert_eq!(ids(&store), vec!["1", "2"]);
        assert_eq!(store.get_by_id(&TodoId::from("1")), Some(&renamed));
    }

    #[test]
    fn replace_in_place() {
        let mut store = Store::new();
        store.replace_all(vec![todo("1"), todo("2"), todo("3")]);
        let edited = Todo::new(TodoId::from("2"), "Edited", false, None, None);
        assert!(store.replace_by_id(&TodoId::from("2"), edited.clone()));
        assert_eq!(store.get_all()[1], edited);
        assert!(store.replace_by_id(&TodoId::from("9"), edited) == false);
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = Store::new();
        store.append(todo("1"));
        let snapshot = store.snapshot();
        store.remove_by_id(&TodoId::from("1"));
        assert!(store.is_empty());
        assert_eq!(snapshot.len(), 1);
    }
}
