//! Serialization of a [`MemoryRenderer`] tree to HTML markup

use std::fmt::Write;

use crate::presenter::memory::{MemoryRenderer, RowContent};
use crate::presenter::render::{FormFields, Row, ADD_BUTTON_ID, CANCEL_BUTTON_ID, NEW_TODO_FORM_ID};

/// Escape text so that it can be put inside an element or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Returns the markup of the whole tree: the input form, its buttons, and the list container
pub fn to_html(renderer: &MemoryRenderer) -> String {
    let mut html = String::new();
    write_page(&mut html, renderer).unwrap(/* this cannot panic since writing into a String never fails */);
    html
}

fn write_page(html: &mut String, renderer: &MemoryRenderer) -> std::fmt::Result {
    writeln!(html, r#"<button id="{}">Add event</button>"#, ADD_BUTTON_ID)?;

    let hidden = if renderer.is_input_form_visible() { "" } else { r#" class="hidden""# };
    let form = renderer.input_form();
    writeln!(html, r#"<form class="{}">"#, NEW_TODO_FORM_ID)?;
    writeln!(html, r#"  <div id="event-inputs"{}>"#, hidden)?;
    writeln!(html, r#"    <input type="text" id="new-todo-input" value="{}" />"#, escape(&form.title))?;
    writeln!(html, r#"    <input type="date" id="new-todo-start-date" value="{}" />"#, escape(&form.start_date))?;
    writeln!(html, r#"    <input type="date" id="new-todo-end-date" value="{}" />"#, escape(&form.end_date))?;
    writeln!(html, r#"    <button type="submit" id="save-event-button">Save</button>"#)?;
    writeln!(html, r#"    <button type="button" id="{}">Cancel</button>"#, CANCEL_BUTTON_ID)?;
    writeln!(html, r#"  </div>"#)?;
    writeln!(html, r#"</form>"#)?;

    writeln!(html, r#"<div class="todos-list">"#)?;
    for node in renderer.rows() {
        match node.content() {
            RowContent::Display(row) => write_row(html, row)?,
            RowContent::Editing(fields) => write_edit_form(html, node.element_id(), fields)?,
        }
    }
    writeln!(html, r#"</div>"#)
}

fn write_row(html: &mut String, row: &Row) -> std::fmt::Result {
    writeln!(html, r#"  <div class="todo" id="{}">"#, escape(row.element_id()))?;
    writeln!(html, r#"    <span class="todo__title">{}</span>"#, escape(row.title()))?;
    writeln!(html, r#"    <span class="todo__dates">{}</span>"#, escape(row.dates()))?;
    writeln!(html, r#"    <button class="todo__edit">Edit</button>"#)?;
    writeln!(html, r#"    <button class="todo__delete">Delete</button>"#)?;
    writeln!(html, r#"  </div>"#)
}

fn write_edit_form(html: &mut String, element_id: &str, fields: &FormFields) -> std::fmt::Result {
    let element_id = escape(element_id);
    writeln!(html, r#"  <div class="todo" id="{}">"#, element_id)?;
    writeln!(html, r#"    <form>"#)?;
    writeln!(html, r#"      <input type="text" value="{}" id="edit-{}-title" />"#, escape(&fields.title), element_id)?;
    writeln!(html, r#"      <input type="date" value="{}" id="edit-{}-start-date" />"#, escape(&fields.start_date), element_id)?;
    writeln!(html, r#"      <input type="date" value="{}" id="edit-{}-end-date" />"#, escape(&fields.end_date), element_id)?;
    writeln!(html, r#"      <button type="submit">Save</button>"#)?;
    writeln!(html, r#"      <button type="button" id="cancel-edit-{}">Cancel</button>"#, element_id)?;
    writeln!(html, r#"    </form>"#)?;
    writeln!(html, r#"  </div>"#)
}
