//! Dated to-do items, as exchanged with the remote collection

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The date format used on the wire and in form inputs (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text shown in place of an absent date
pub const MISSING_DATE: &str = "N/A";


/// The identifier of a todo.
///
/// It is assigned by the remote service and never generated locally.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId {
    content: String,
}

impl TodoId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for TodoId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TodoId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TodoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}

/// Used to support serde.
/// Some backends (e.g. json-server) hand out integer ids, others strings. Both are accepted.
impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<TodoId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TodoIdVisitor;

        impl<'de> Visitor<'de> for TodoIdVisitor {
            type Value = TodoId;

            fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
                write!(f, "a string or an integer identifier")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TodoId, E> {
                Ok(TodoId::from(value))
            }
            fn visit_string<E: de::Error>(self, value: String) -> Result<TodoId, E> {
                Ok(TodoId::from(value))
            }
            fn visit_u64<E: de::Error>(self, value: u64) -> Result<TodoId, E> {
                Ok(TodoId::from(value.to_string()))
            }
            fn visit_i64<E: de::Error>(self, value: i64) -> Result<TodoId, E> {
                Ok(TodoId::from(value.to_string()))
            }
        }

        deserializer.deserialize_any(TodoIdVisitor)
    }
}


/// The client-supplied part of a todo, i.e. everything but its id.
///
/// This is what gets sent to the server when creating a new todo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "startDate", default, with = "optional_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, with = "optional_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}


/// A dated to-do item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    #[serde(default)]
    completed: bool,
    #[serde(rename = "startDate", default, with = "optional_date", skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, with = "optional_date", skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
}

impl Todo {
    pub fn new<S: ToString>(id: TodoId, title: S, completed: bool, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self { id, title: title.to_string(), completed, start_date, end_date }
    }

    /// Build a todo from the fields a client sent and the id a server assigned
    pub fn with_fields(id: TodoId, fields: NewTodo) -> Self {
        Self {
            id,
            title: fields.title,
            completed: fields.completed,
            start_date: fields.start_date,
            end_date: fields.end_date,
        }
    }

    pub fn id(&self) -> &TodoId     { &self.id }
    pub fn title(&self) -> &str     { &self.title }
    pub fn completed(&self) -> bool { self.completed }
    pub fn start_date(&self) -> Option<NaiveDate> { self.start_date }
    pub fn end_date(&self) -> Option<NaiveDate>   { self.end_date }

    /// Returns the client-supplied fields of this todo
    pub fn fields(&self) -> NewTodo {
        NewTodo {
            title: self.title.clone(),
            completed: self.completed,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    pub fn set_title<S: ToString>(&mut self, new_title: S) {
        self.title = new_title.to_string();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn set_dates(&mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) {
        self.start_date = start_date;
        self.end_date = end_date;
    }

    /// Returns a copy of this todo, with its title and dates replaced.
    /// The id and the completion status are kept.
    pub fn merged_with(&self, title: &str, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        let mut merged = self.clone();
        merged.set_title(title);
        merged.set_dates(start_date, end_date);
        merged
    }
}


/// Format an optional date the way it is displayed, i.e. `N/A` when absent
pub fn display_date(date: Option<NaiveDate>) -> String {
    match date {
        None => MISSING_DATE.to_string(),
        Some(d) => d.format(DATE_FORMAT).to_string(),
    }
}

/// Format an optional date the way a date input holds it, i.e. empty when absent
pub fn input_date(date: Option<NaiveDate>) -> String {
    match date {
        None => String::new(),
        Some(d) => d.format(DATE_FORMAT).to_string(),
    }
}

/// Parse the content of a date input.
///
/// An empty input means "no date". Anything that is not a `YYYY-MM-DD` date is ignored (with a warning)
pub fn parse_input_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(text, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("Ignoring invalid date {:?}: {}", text, err);
            None
        },
    }
}


/// Serde support for optional dates.
///
/// A missing field, a `null` and an empty string all mean "no date" (browser forms send `""` for empty date inputs).
/// The server does not validate dates, so a string that is not a `YYYY-MM-DD` date is treated as absent
/// rather than failing the whole payload.
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_input_date, DATE_FORMAT};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            None => serializer.serialize_none(),
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: Option<String> = Option::deserialize(deserializer)?;
        Ok(text.as_deref().and_then(parse_input_date))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_remote_todo() {
        let json = r#"{"id":"1","title":"Standup","completed":false,"startDate":"2024-01-01","endDate":"2024-01-02"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id(), &TodoId::from("1"));
        assert_eq!(todo.title(), "Standup");
        assert_eq!(todo.completed(), false);
        assert_eq!(todo.start_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(todo.end_date(), NaiveDate::from_ymd_opt(2024, 1, 2));
    }

    #[test]
    fn integer_ids_and_empty_dates() {
        let json = r#"{"id":42,"title":"Lunch","completed":true,"startDate":"","endDate":null}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id().as_str(), "42");
        assert!(todo.completed());
        assert_eq!(todo.start_date(), None);
        assert_eq!(todo.end_date(), None);

        let no_dates: Todo = serde_json::from_str(r#"{"id":"x","title":"Nap"}"#).unwrap();
        assert_eq!(no_dates.start_date(), None);
        assert_eq!(no_dates.completed(), false);
    }

    #[test]
    fn unparseable_dates_are_absent() {
        let json = r#"{"id":"1","title":"Standup","startDate":"2024-01-01T09:00","endDate":"tomorrow"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.title(), "Standup");
        assert_eq!(todo.start_date(), None);
        assert_eq!(todo.end_date(), None);

        let list = r#"[{"id":"1","title":"A","startDate":"2024-01-01"},{"id":"2","title":"B","startDate":"2024-01-01T09:00"}]"#;
        let todos: Vec<Todo> = serde_json::from_str(list).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].start_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(todos[1].start_date(), None);
    }

    #[test]
    fn completion_can_be_toggled() {
        let mut todo = Todo::new(TodoId::from("4"), "Laundry", false, None, None);
        todo.set_completed(true);
        assert!(todo.completed());
        assert_eq!(todo.fields().completed, true);
    }

    #[test]
    fn new_todo_body() {
        let new_todo = NewTodo {
            title: String::from("Review"),
            completed: false,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            end_date: None,
        };
        let value = serde_json::to_value(&new_todo).unwrap();
        assert_eq!(value, serde_json::json!({"title": "Review", "completed": false, "startDate": "2024-03-05"}));
    }

    #[test]
    fn merge_keeps_id_and_completion() {
        let original = Todo::new(TodoId::from("7"), "Old", true, None, None);
        let merged = original.merged_with("New", NaiveDate::from_ymd_opt(2024, 2, 1), None);
        assert_eq!(merged.id(), original.id());
        assert!(merged.completed());
        assert_eq!(merged.title(), "New");
        assert_eq!(merged.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn input_dates() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("  "), None);
        assert_eq!(parse_input_date("2024-12-31"), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(parse_input_date("31/12/2024"), None);
        assert_eq!(display_date(None), "N/A");
        assert_eq!(input_date(None), "");
        assert_eq!(display_date(NaiveDate::from_ymd_opt(2024, 1, 9)), "2024-01-09");
    }
}
