//! Pure translation of todos into render instructions.
//!
//! Nothing in here touches a UI tree: the resulting [`RenderInstruction`]s are applied by a [`Renderer`](crate::traits::Renderer).

use crate::todo::{display_date, input_date, Todo, TodoId};

/// Element identities of rows are this prefix, followed by the todo id
pub const ROW_ID_PREFIX: &str = "todo-";

/// The button that reveals the new-todo input form
pub const ADD_BUTTON_ID: &str = "add-event-button";
/// The button that hides the new-todo input form
pub const CANCEL_BUTTON_ID: &str = "delete-event-button";
/// The new-todo input form itself
pub const NEW_TODO_FORM_ID: &str = "new-todo-form";


/// Returns the element identity of the row that displays this todo
pub fn row_element_id(id: &TodoId) -> String {
    format!("{}{}", ROW_ID_PREFIX, id)
}

/// Returns the todo id embedded in a row element identity.
///
/// Only the prefix is stripped, so that ids that contain dashes survive.
pub fn parse_row_element_id(element_id: &str) -> Option<TodoId> {
    match element_id.strip_prefix(ROW_ID_PREFIX) {
        None | Some("") => None,
        Some(id) => Some(TodoId::from(id)),
    }
}


/// The clickable controls of a row, or of the inline edit form that replaces it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowControl {
    Edit,
    Delete,
    Save,
    Cancel,
}

/// What a displayed row shows
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    element_id: String,
    title: String,
    dates: String,
}

impl Row {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            element_id: row_element_id(todo.id()),
            title: todo.title().to_string(),
            dates: format!("{} ~ {}", display_date(todo.start_date()), display_date(todo.end_date())),
        }
    }

    pub fn element_id(&self) -> &str { &self.element_id }
    pub fn title(&self) -> &str      { &self.title }
    /// Returns `<start> ~ <end>`, with `N/A` in place of absent dates
    pub fn dates(&self) -> &str      { &self.dates }

    /// Every displayed row has an edit and a delete control
    pub fn controls(&self) -> [RowControl; 2] {
        [RowControl::Edit, RowControl::Delete]
    }
}


/// The raw content of a form: a title and two date inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

impl FormFields {
    pub fn new<S: ToString, T: ToString, U: ToString>(title: S, start_date: T, end_date: U) -> Self {
        Self {
            title: title.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    /// The fields of an edit form, pre-filled from an existing todo
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title().to_string(),
            start_date: input_date(todo.start_date()),
            end_date: input_date(todo.end_date()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.start_date.is_empty() && self.end_date.is_empty()
    }
}


/// A single change to apply to a UI tree
#[derive(Clone, Debug, PartialEq)]
pub enum RenderInstruction {
    /// Remove every row from the list container
    ClearList,
    /// Append a row at the end of the list container
    AppendRow(Row),
    /// Remove the row with this element identity, if there is one
    RemoveRow { element_id: String },
    /// Replace the content of a row with an inline edit form
    ShowEditForm { element_id: String, fields: FormFields },
    /// Show or hide the new-todo input form
    SetInputFormVisible(bool),
    /// Set the values of the new-todo input form
    SetInputFormFields(FormFields),
}

/// Instructions that display exactly these todos, in this order, whatever was displayed before
pub fn render_all_instructions(todos: &[Todo]) -> Vec<RenderInstruction> {
    let mut instructions = Vec::with_capacity(todos.len() + 1);
    instructions.push(RenderInstruction::ClearList);
    instructions.extend(todos.iter().map(|todo| RenderInstruction::AppendRow(Row::from_todo(todo))));
    instructions
}

/// Instructions that append a single todo to the displayed list
pub fn render_one_instructions(todo: &Todo) -> Vec<RenderInstruction> {
    vec![RenderInstruction::AppendRow(Row::from_todo(todo))]
}

/// Instructions that remove a todo from the displayed list
pub fn remove_one_instructions(id: &TodoId) -> Vec<RenderInstruction> {
    vec![RenderInstruction::RemoveRow { element_id: row_element_id(id) }]
}

/// Instructions that turn the row of a todo into an edit form
pub fn edit_form_instructions(todo: &Todo) -> Vec<RenderInstruction> {
    vec![RenderInstruction::ShowEditForm {
        element_id: row_element_id(todo.id()),
        fields: FormFields::from_todo(todo),
    }]
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn element_ids() {
        let id = TodoId::from("2024-a");
        let element_id = row_element_id(&id);
        assert_eq!(element_id, "todo-2024-a");
        assert_eq!(parse_row_element_id(&element_id), Some(id));
        assert_eq!(parse_row_element_id("todo-"), None);
        assert_eq!(parse_row_element_id("event-inputs"), None);
    }

    #[test]
    fn row_content() {
        let todo = Todo::new(TodoId::from("3"), "Standup", false, NaiveDate::from_ymd_opt(2024, 1, 1), None);
        let row = Row::from_todo(&todo);
        assert_eq!(row.element_id(), "todo-3");
        assert_eq!(row.title(), "Standup");
        assert_eq!(row.dates(), "2024-01-01 ~ N/A");
        assert_eq!(row.controls(), [RowControl::Edit, RowControl::Delete]);
    }

    #[test]
    fn render_all_clears_first() {
        let todos = vec![
            Todo::new(TodoId::from("1"), "A", false, None, None),
            Todo::new(TodoId::from("2"), "B", true, None, None),
        ];
        let instructions = render_all_instructions(&todos);
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0], RenderInstruction::ClearList);
        assert_eq!(instructions[2], RenderInstruction::AppendRow(Row::from_todo(&todos[1])));

        assert_eq!(render_all_instructions(&[]), vec![RenderInstruction::ClearList]);
    }

    #[test]
    fn edit_form_is_prefilled() {
        let todo = Todo::new(TodoId::from("5"), "Retro", false, None, NaiveDate::from_ymd_opt(2024, 5, 6));
        let instructions = edit_form_instructions(&todo);
        assert_eq!(instructions, vec![RenderInstruction::ShowEditForm {
            element_id: String::from("todo-5"),
            fields: FormFields::new("Retro", "", "2024-05-06"),
        }]);
    }
}
