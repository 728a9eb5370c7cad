//! An in-memory [`EventSource`], that behaves like a json-server collection
//!
//! This is meant for tests, and for apps that want to run without any server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::RemoteError;
use crate::mock_behaviour::MockBehaviour;
use crate::todo::{NewTodo, Todo, TodoId};
use crate::traits::EventSource;

/// A mocked remote collection.
///
/// New todos get the next integer id, like json-server does. \
/// The [`MockBehaviour`] is shared, so that a test can keep a handle on it and make the source fail at will.
#[derive(Clone, Debug)]
pub struct MockSource {
    todos: Vec<Todo>,
    next_id: u64,
    behaviour: Arc<Mutex<MockBehaviour>>,
}

impl MockSource {
    /// Create a source that contains these todos
    pub fn new(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter()
            .filter_map(|t| t.id().as_str().parse::<u64>().ok())
            .max()
            .map(|max| max + 1)
            .unwrap_or(1);
        Self { todos, next_id, behaviour: Arc::new(Mutex::new(MockBehaviour::new())) }
    }

    pub fn with_behaviour(mut self, behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        self.behaviour = behaviour;
        self
    }

    /// Returns the shared behaviour of this source
    pub fn behaviour(&self) -> Arc<Mutex<MockBehaviour>> {
        Arc::clone(&self.behaviour)
    }

    /// Returns what this source currently contains
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Force the id the next created todo will get
    pub fn set_next_id(&mut self, next_id: u64) {
        self.next_id = next_id;
    }

    fn check<F>(&self, can: F) -> Result<(), RemoteError>
    where
        F: FnOnce(&mut MockBehaviour) -> Result<(), RemoteError>,
    {
        let mut behaviour = self.behaviour.lock().unwrap();
        can(&mut *behaviour)
    }

    fn not_found(id: &TodoId) -> RemoteError {
        RemoteError::Status { status: StatusCode::NOT_FOUND, url: format!("mock://events/{}", id) }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl EventSource for MockSource {
    async fn fetch_all(&self) -> Result<Vec<Todo>, RemoteError> {
        self.check(MockBehaviour::can_fetch_all)?;
        Ok(self.todos.clone())
    }

    async fn create(&mut self, new_todo: &NewTodo) -> Result<Todo, RemoteError> {
        self.check(MockBehaviour::can_create)?;
        let id = TodoId::from(self.next_id.to_string());
        self.next_id += 1;
        let created = Todo::with_fields(id, new_todo.clone());
        self.todos.push(created.clone());
        Ok(created)
    }

    async fn update(&mut self, id: &TodoId, todo: &Todo) -> Result<Todo, RemoteError> {
        self.check(MockBehaviour::can_update)?;
        let existing = self.todos.iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        // The id in the URL wins over the one in the body
        *existing = Todo::with_fields(id.clone(), todo.fields());
        Ok(existing.clone())
    }

    async fn delete(&mut self, id: &TodoId) -> Result<(), RemoteError> {
        self.check(MockBehaviour::can_delete)?;
        let len_before = self.todos.len();
        self.todos.retain(|t| t.id() != id);
        if self.todos.len() == len_before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
