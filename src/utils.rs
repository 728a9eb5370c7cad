//! Some utility functions

use crate::presenter::memory::{MemoryRenderer, RowContent};
use crate::todo::{display_date, Todo};

/// A debug utility that pretty-prints a list of todos
pub fn print_todo_list(todos: &[Todo]) {
    for todo in todos {
        print_todo(todo);
    }
}

pub fn print_todo(todo: &Todo) {
    let completion = if todo.completed() { "✓" } else { " " };
    println!("    {} {}\t{} ~ {}\t{}",
        completion, todo.title(),
        display_date(todo.start_date()), display_date(todo.end_date()),
        todo.id());
}

/// A debug utility that pretty-prints what a [`MemoryRenderer`] displays
pub fn print_view(renderer: &MemoryRenderer) {
    if renderer.is_input_form_visible() {
        let form = renderer.input_form();
        println!("  [new todo] {:?} {:?} ~ {:?}", form.title, form.start_date, form.end_date);
    }
    for node in renderer.rows() {
        match node.content() {
            RowContent::Display(row) => println!("    {}\t{}\t({})", row.title(), row.dates(), node.element_id()),
            RowContent::Editing(fields) => println!("    [editing {}] {:?} {:?} ~ {:?}",
                node.element_id(), fields.title, fields.start_date, fields.end_date),
        }
    }
}
