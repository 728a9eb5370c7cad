//! An in-memory UI tree
//!
//! This is the reference [`Renderer`]. It is used by tests and by the `eventlist` binary,
//! and can be serialized to markup with [`to_html`](super::html::to_html).

use crate::presenter::render::{FormFields, RenderInstruction, Row};
use crate::traits::Renderer;

/// What a row of the list container currently holds
#[derive(Clone, Debug, PartialEq)]
pub enum RowContent {
    /// The regular display of a todo
    Display(Row),
    /// An inline edit form, holding whatever the user typed so far
    Editing(FormFields),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowNode {
    element_id: String,
    content: RowContent,
}

impl RowNode {
    pub fn element_id(&self) -> &str { &self.element_id }
    pub fn content(&self) -> &RowContent { &self.content }

    /// Returns the displayed row, unless this row is being edited
    pub fn as_row(&self) -> Option<&Row> {
        match &self.content {
            RowContent::Display(row) => Some(row),
            RowContent::Editing(_) => None,
        }
    }
}


/// A UI tree held in memory: a list container, and a new-todo input form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryRenderer {
    rows: Vec<RowNode>,
    input_form_visible: bool,
    input_form: FormFields,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rows of the list container, in display order
    pub fn rows(&self) -> &[RowNode] {
        &self.rows
    }

    pub fn row(&self, element_id: &str) -> Option<&RowNode> {
        self.rows.iter().find(|r| r.element_id == element_id)
    }

    /// Returns the element identities of the rows, in display order
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.element_id.as_str()).collect()
    }

    pub fn is_input_form_visible(&self) -> bool {
        self.input_form_visible
    }

    pub fn input_form(&self) -> &FormFields {
        &self.input_form
    }

    /// Mimic a user typing into the new-todo input form
    pub fn type_into_input_form(&mut self, fields: FormFields) {
        self.input_form = fields;
    }

    /// Mimic a user typing into the edit form of a row.
    /// Returns false in case this row is not being edited.
    pub fn type_into_edit_form(&mut self, element_id: &str, fields: FormFields) -> bool {
        match self.rows.iter_mut().find(|r| r.element_id == element_id) {
            Some(RowNode { content: RowContent::Editing(current), .. }) => {
                *current = fields;
                true
            },
            _ => false,
        }
    }
}

impl Renderer for MemoryRenderer {
    fn apply(&mut self, instruction: &RenderInstruction) {
        match instruction {
            RenderInstruction::ClearList => self.rows.clear(),
            RenderInstruction::AppendRow(row) => {
                self.rows.push(RowNode {
                    element_id: row.element_id().to_string(),
                    content: RowContent::Display(row.clone()),
                });
            },
            RenderInstruction::RemoveRow { element_id } => {
                self.rows.retain(|r| &r.element_id != element_id);
            },
            RenderInstruction::ShowEditForm { element_id, fields } => {
                match self.rows.iter_mut().find(|r| &r.element_id == element_id) {
                    None => log::warn!("No row {} to edit", element_id),
                    Some(node) => node.content = RowContent::Editing(fields.clone()),
                }
            },
            RenderInstruction::SetInputFormVisible(visible) => self.input_form_visible = *visible,
            RenderInstruction::SetInputFormFields(fields) => self.input_form = fields.clone(),
        }
    }

    fn read_input_form(&self) -> FormFields {
        self.input_form.clone()
    }

    fn read_edit_form(&self, element_id: &str) -> Option<FormFields> {
        match self.row(element_id).map(|r| &r.content) {
            Some(RowContent::Editing(fields)) => Some(fields.clone()),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::render::render_all_instructions;
    use crate::todo::{Todo, TodoId};

    fn render(renderer: &mut MemoryRenderer, ids: &[&str]) {
        let todos: Vec<Todo> = ids.iter()
            .map(|id| Todo::new(TodoId::from(*id), "t", false, None, None))
            .collect();
        for instruction in render_all_instructions(&todos) {
            renderer.apply(&instruction);
        }
    }

    #[test]
    fn rerender_replaces_everything() {
        let mut renderer = MemoryRenderer::new();
        render(&mut renderer, &["1", "2", "3"]);
        render(&mut renderer, &["4", "5"]);
        assert_eq!(renderer.row_ids(), vec!["todo-4", "todo-5"]);
    }

    #[test]
    fn edit_forms() {
        let mut renderer = MemoryRenderer::new();
        render(&mut renderer, &["1", "2"]);
        assert_eq!(renderer.read_edit_form("todo-1"), None);
        assert!(renderer.type_into_edit_form("todo-1", FormFields::default()) == false);

        renderer.apply(&RenderInstruction::ShowEditForm {
            element_id: String::from("todo-1"),
            fields: FormFields::new("t", "", ""),
        });
        assert!(renderer.row("todo-1").unwrap().as_row().is_none());
        assert!(renderer.type_into_edit_form("todo-1", FormFields::new("changed", "2024-01-01", "")));
        assert_eq!(renderer.read_edit_form("todo-1"), Some(FormFields::new("changed", "2024-01-01", "")));

        // Editing an unknown row changes nothing
        let before = renderer.clone();
        renderer.apply(&RenderInstruction::ShowEditForm {
            element_id: String::from("todo-9"),
            fields: FormFields::default(),
        });
        assert_eq!(renderer, before);
    }

    #[test]
    fn input_form() {
        let mut renderer = MemoryRenderer::new();
        assert!(renderer.is_input_form_visible() == false);
        renderer.apply(&RenderInstruction::SetInputFormVisible(true));
        renderer.type_into_input_form(FormFields::new("Walk", "", ""));
        assert!(renderer.is_input_form_visible());
        assert_eq!(renderer.read_input_form().title, "Walk");

        renderer.apply(&RenderInstruction::SetInputFormFields(FormFields::default()));
        assert!(renderer.read_input_form().is_empty());
    }
}
