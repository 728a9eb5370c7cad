//! Displays todos, and reports what the user does with them
//!
//! The [`Presenter`] turns todos into [`RenderInstruction`]s (see the [`render`] module, which is pure),
//! then hands them to a [`Renderer`] that owns the actual UI tree. \
//! It also translates clicks and submissions into [`UiEvent`]s, but never acts on them: this is the job of the
//! [`Coordinator`](crate::coordinator::Coordinator).

pub mod render;
pub mod memory;
pub mod html;

use crate::todo::{Todo, TodoId};
use crate::traits::Renderer;
use render::{FormFields, RenderInstruction, RowControl};

/// Something the user did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The "add" button was clicked
    ShowInputForm,
    /// The new-todo input form was submitted
    SubmitNewTodo,
    /// The new-todo input form was cancelled
    CancelNewTodo,
    /// The edit control of a row was clicked
    EditClicked(TodoId),
    /// The inline edit form of a row was submitted
    SubmitEdit(TodoId),
    /// The inline edit form of a row was cancelled
    CancelEdit(TodoId),
    /// The delete control of a row was clicked
    DeleteClicked(TodoId),
}


/// Renders todos through a [`Renderer`]
#[derive(Debug)]
pub struct Presenter<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> Presenter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }
    pub fn into_renderer(self) -> R { self.renderer }

    fn apply_all(&mut self, instructions: Vec<RenderInstruction>) {
        for instruction in &instructions {
            log::trace!("Applying {:?}", instruction);
            self.renderer.apply(instruction);
        }
    }

    /// Clear the list, then display one row per todo, in order
    pub fn render_all(&mut self, todos: &[Todo]) {
        log::debug!("Rendering {} todos", todos.len());
        self.apply_all(render::render_all_instructions(todos));
    }

    /// Append a row for a single todo
    pub fn render_one(&mut self, todo: &Todo) {
        self.apply_all(render::render_one_instructions(todo));
    }

    /// Remove the row of a todo. This is a no-op in case it is not displayed
    pub fn remove_one(&mut self, id: &TodoId) {
        self.apply_all(render::remove_one_instructions(id));
    }

    /// Replace the row of a todo with an edit form, pre-filled with its current values
    pub fn show_edit_form(&mut self, todo: &Todo) {
        self.apply_all(render::edit_form_instructions(todo));
    }

    pub fn show_input_form(&mut self) {
        self.apply_all(vec![RenderInstruction::SetInputFormVisible(true)]);
    }

    pub fn hide_input_form(&mut self) {
        self.apply_all(vec![RenderInstruction::SetInputFormVisible(false)]);
    }

    /// Reset the title and dates of the new-todo input form
    pub fn clear_input_form(&mut self) {
        self.apply_all(vec![RenderInstruction::SetInputFormFields(FormFields::default())]);
    }

    /// Returns what the user typed in the new-todo input form
    pub fn input_form_fields(&self) -> FormFields {
        self.renderer.read_input_form()
    }

    /// Returns what the user typed in the edit form of a todo, if it is being edited
    pub fn edit_form_fields(&self, id: &TodoId) -> Option<FormFields> {
        self.renderer.read_edit_form(&render::row_element_id(id))
    }

    /// Translate a click on a control of the row with this element identity
    pub fn resolve_click(&self, element_id: &str, control: RowControl) -> Option<UiEvent> {
        let id = match render::parse_row_element_id(element_id) {
            None => {
                log::debug!("Ignoring a click on {}, which is not a todo row", element_id);
                return None;
            },
            Some(id) => id,
        };
        log::debug!("{:?} clicked for todo {}", control, id);
        let event = match control {
            RowControl::Edit => UiEvent::EditClicked(id),
            RowControl::Delete => UiEvent::DeleteClicked(id),
            RowControl::Save => UiEvent::SubmitEdit(id),
            RowControl::Cancel => UiEvent::CancelEdit(id),
        };
        Some(event)
    }

    /// Translate a click on one of the elements of the new-todo input form
    pub fn resolve_form_action(&self, element_id: &str) -> Option<UiEvent> {
        match element_id {
            render::ADD_BUTTON_ID => Some(UiEvent::ShowInputForm),
            render::NEW_TODO_FORM_ID => Some(UiEvent::SubmitNewTodo),
            render::CANCEL_BUTTON_ID => Some(UiEvent::CancelNewTodo),
            _ => None,
        }
    }
}
