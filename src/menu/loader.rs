//! Lenient loading of menu trees from declarative records.
//!
//! Record shape:
//!
//! ```json
//! [
//!   { "type": "menu", "title": "Modes", "items": [ ... ] },
//!   { "type": "item", "title": "Op", "commands": ["/mode ${channel} +o ${user}"] },
//!   { "type": "item", "title": "Hi", "commands": "/say hi" },
//!   { "type": "separator" }
//! ]
//! ```
//!
//! A record that does not fit is dropped with a warning; its siblings still load.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::MenuNode;

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum MenuRecord {
    Menu {
        title: String,
        items: Vec<Value>,
    },
    Item {
        title: String,
        commands: CommandLines,
    },
    Separator,
}

/// `commands` is either one string or a list of strings.
///
/// A string holds one template per non-blank line; list entries are templates as given.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum CommandLines {
    One(String),
    Many(Vec<String>),
}

impl CommandLines {
    fn into_templates(self) -> Vec<String> {
        match self {
            CommandLines::One(text) => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            CommandLines::Many(lines) => lines,
        }
    }
}

/// Load a top-level menu document. Anything but an array loads as empty.
pub fn load_value(document: &Value) -> Vec<MenuNode> {
    match document {
        Value::Array(records) => load(records),
        other => {
            tracing::warn!(kind = %value_kind(other), "Menu document is not a list, ignoring");
            Vec::new()
        }
    }
}

/// Load a list of records into menu nodes, skipping the ones that do not fit.
pub fn load(records: &[Value]) -> Vec<MenuNode> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| load_record(index, record))
        .collect()
}

fn load_record(index: usize, record: &Value) -> Option<MenuNode> {
    let record = match MenuRecord::deserialize(record) {
        Ok(record) => record,
        Err(e) => {
            let record_type = record
                .get("type")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<none>");
            tracing::warn!(
                index = index,
                record_type = %record_type,
                error = %e,
                "Dropping malformed menu record"
            );
            return None;
        }
    };

    Some(match record {
        MenuRecord::Menu { title, items } => MenuNode::Menu {
            title,
            children: load(&items),
        },
        MenuRecord::Item { title, commands } => MenuNode::Command {
            title,
            templates: commands.into_templates(),
        },
        MenuRecord::Separator => MenuNode::Separator,
    })
}

/// Serialise nodes back into the record shape [`load`] accepts.
pub fn to_records(nodes: &[MenuNode]) -> Vec<Value> {
    nodes.iter().map(to_record).collect()
}

fn to_record(node: &MenuNode) -> Value {
    let record = match node {
        MenuNode::Menu { title, children } => MenuRecord::Menu {
            title: title.clone(),
            items: to_records(children),
        },
        MenuNode::Command { title, templates } => MenuRecord::Item {
            title: title.clone(),
            commands: CommandLines::Many(templates.clone()),
        },
        MenuNode::Separator => MenuRecord::Separator,
    };

    // Strings, lists and objects only; serialisation cannot fail
    serde_json::to_value(record).unwrap_or(Value::Null)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_all_kinds() {
        let document = json!([
            { "type": "menu", "title": "Modes", "items": [
                { "type": "item", "title": "Op", "commands": ["/mode ${channel} +o ${user}"] }
            ]},
            { "type": "separator" },
            { "type": "item", "title": "Hi", "commands": "/say hi" }
        ]);

        assert_eq!(
            load_value(&document),
            vec![
                MenuNode::menu(
                    "Modes",
                    vec![MenuNode::command("Op", ["/mode ${channel} +o ${user}"])]
                ),
                MenuNode::Separator,
                MenuNode::command("Hi", ["/say hi"]),
            ]
        );
    }

    #[test]
    fn test_unknown_type_dropped() {
        let records = vec![
            json!({ "type": "item", "title": "One", "commands": ["/one"] }),
            json!({ "type": "widget", "title": "Nope" }),
            json!({ "type": "item", "title": "Two", "commands": ["/two"] }),
        ];

        let nodes = load(&records);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].title(), Some("One"));
        assert_eq!(nodes[1].title(), Some("Two"));
    }

    #[test]
    fn test_missing_fields_dropped() {
        let records = vec![
            json!({ "title": "No type" }),
            json!({ "type": "item", "commands": ["/x"] }),
            json!({ "type": "item", "title": "No commands" }),
            json!({ "type": "menu", "title": "No items" }),
            json!({ "type": "item", "title": "Bad commands", "commands": 7 }),
            json!("not a record"),
            json!({ "type": "separator" }),
        ];

        assert_eq!(load(&records), vec![MenuNode::Separator]);
    }

    #[test]
    fn test_malformed_child_does_not_drop_parent() {
        let document = json!([
            { "type": "menu", "title": "Parent", "items": [
                { "type": "item", "title": "Good", "commands": ["/good"] },
                { "type": "item", "title": "Bad" }
            ]}
        ]);

        assert_eq!(
            load_value(&document),
            vec![MenuNode::menu(
                "Parent",
                vec![MenuNode::command("Good", ["/good"])]
            )]
        );
    }

    #[test]
    fn test_command_string_split_into_lines() {
        let records = vec![json!({
            "type": "item",
            "title": "Two lines",
            "commands": "/one\n\n/two\n"
        })];

        assert_eq!(
            load(&records),
            vec![MenuNode::command("Two lines", ["/one", "/two"])]
        );
    }

    #[test]
    fn test_command_list_entries_kept_as_given() {
        let records = vec![json!({
            "type": "item",
            "title": "Verbatim",
            "commands": ["/one", "", "/two\n/three"]
        })];

        assert_eq!(
            load(&records),
            vec![MenuNode::command("Verbatim", ["/one", "", "/two\n/three"])]
        );
    }

    #[test]
    fn test_record_type_reported_for_dropped_records() {
        let records = vec![
            json!({ "type": 7, "title": "Numeric type" }),
            json!({ "type": "item", "title": "Kept", "commands": ["/kept"] }),
        ];

        assert_eq!(load(&records), vec![MenuNode::command("Kept", ["/kept"])]);
    }

    #[test]
    fn test_non_list_document_is_empty() {
        assert!(load_value(&json!({ "type": "separator" })).is_empty());
    }

    #[test]
    fn test_records_roundtrip() {
        let nodes = vec![
            MenuNode::menu("Sub", vec![MenuNode::Separator]),
            MenuNode::command("Cmd", ["/a", "/b"]),
        ];

        assert_eq!(load(&to_records(&nodes)), nodes);
    }
}
