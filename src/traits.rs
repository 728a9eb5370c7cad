//! The seams of this crate: where todos come from, and where they are displayed

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::presenter::render::{FormFields, RenderInstruction};
use crate::todo::{NewTodo, Todo, TodoId};

/// A remote collection of todos.
///
/// This is usually a [`Client`](crate::client::Client), but can be mocked by a [`MockSource`](crate::mock_source::MockSource)
#[async_trait]
pub trait EventSource {
    /// Returns every todo of the collection
    async fn fetch_all(&self) -> Result<Vec<Todo>, RemoteError>;

    /// Create a todo. Returns it, with the id the collection assigned to it
    async fn create(&mut self, new_todo: &NewTodo) -> Result<Todo, RemoteError>;

    /// Replace the todo that has this id. Returns the todo as stored by the collection
    async fn update(&mut self, id: &TodoId, todo: &Todo) -> Result<Todo, RemoteError>;

    /// Delete the todo that has this id
    async fn delete(&mut self, id: &TodoId) -> Result<(), RemoteError>;
}


/// A UI tree that render instructions can be applied to.
///
/// Implementors only apply instructions and report what the user typed. They never decide anything.
pub trait Renderer {
    fn apply(&mut self, instruction: &RenderInstruction);

    /// Returns the current values of the new-todo input form
    fn read_input_form(&self) -> FormFields;

    /// Returns the current values of the inline edit form shown in place of a row, if any
    fn read_edit_form(&self, element_id: &str) -> Option<FormFields>;
}
