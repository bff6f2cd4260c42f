//! Command menu trees.
//!
//! This module provides:
//! - [`MenuNode`], the menu / command / separator tree
//! - A lenient loader from declarative records, and the reverse
//! - [`MenuStore`] for JSON files in a support directory
//! - [`MenuEditor`] for index-path edits
//! - [`build_entries`], flattening a tree into invocable entries

mod editor;
mod loader;
mod store;
mod types;

pub use editor::MenuEditor;
pub use loader::{load, load_value, to_records};
pub use store::MenuStore;
pub use types::{find, MenuError, MenuNode, MenuResult};

use crate::template::{ParseOptions, Template};

/// What a flattened menu entry does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Submenu,
    Command(Vec<Template>),
    Separator,
}

/// One row of a flattened menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Index path of the node in its tree
    pub path: Vec<usize>,
    pub depth: usize,
    pub title: String,
    pub kind: EntryKind,
}

impl MenuEntry {
    /// Dot-separated path, e.g. `2.0`
    pub fn path_label(&self) -> String {
        self.path
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn templates(&self) -> Option<&[Template]> {
        match &self.kind {
            EntryKind::Command(templates) => Some(templates),
            EntryKind::Submenu | EntryKind::Separator => None,
        }
    }
}

/// Flatten `nodes` depth-first, parsing every command line once.
///
/// A command whose lines fail to parse under `options` is left out.
pub fn build_entries(nodes: &[MenuNode], options: &ParseOptions) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    collect_entries(nodes, options, &mut Vec::new(), &mut entries);
    entries
}

fn collect_entries(
    nodes: &[MenuNode],
    options: &ParseOptions,
    path: &mut Vec<usize>,
    entries: &mut Vec<MenuEntry>,
) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        let depth = path.len() - 1;

        match node {
            MenuNode::Menu { title, children } => {
                entries.push(MenuEntry {
                    path: path.clone(),
                    depth,
                    title: title.clone(),
                    kind: EntryKind::Submenu,
                });
                collect_entries(children, options, path, entries);
            }
            MenuNode::Command { title, templates } => {
                let parsed: Result<Vec<_>, _> = templates
                    .iter()
                    .map(|source| Template::with_options(source, options))
                    .collect();

                match parsed {
                    Ok(templates) => entries.push(MenuEntry {
                        path: path.clone(),
                        depth,
                        title: title.clone(),
                        kind: EntryKind::Command(templates),
                    }),
                    Err(e) => {
                        tracing::warn!(title = %title, error = %e, "Skipping menu command");
                    }
                }
            }
            MenuNode::Separator => entries.push(MenuEntry {
                path: path.clone(),
                depth,
                title: String::new(),
                kind: EntryKind::Separator,
            }),
        }

        path.pop();
    }
}

/// Find the entry with the given dot-separated path label
pub fn find_entry<'a>(entries: &'a [MenuEntry], label: &str) -> Option<&'a MenuEntry> {
    entries.iter().find(|entry| entry.path_label() == label.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Delimiters, UnterminatedPolicy};

    fn tree() -> Vec<MenuNode> {
        vec![
            MenuNode::command("Op", ["/mode ${channel} +o ${user}"]),
            MenuNode::Separator,
            MenuNode::menu(
                "Kick",
                vec![
                    MenuNode::command("Kick", ["/kick ${channel} ${user}"]),
                    MenuNode::command("Broken", ["/kick ${user"]),
                ],
            ),
        ]
    }

    #[test]
    fn test_build_entries_depth_first() {
        let entries = build_entries(&tree(), &ParseOptions::default());

        let labels: Vec<_> = entries
            .iter()
            .map(|e| (e.path_label(), e.depth, e.title.as_str()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("0".to_string(), 0, "Op"),
                ("1".to_string(), 0, ""),
                ("2".to_string(), 0, "Kick"),
                ("2.0".to_string(), 1, "Kick"),
                ("2.1".to_string(), 1, "Broken"),
            ]
        );
        assert_eq!(entries[0].templates().map(<[Template]>::len), Some(1));
        assert_eq!(entries[2].templates(), None);
    }

    #[test]
    fn test_reject_policy_skips_broken_command() {
        let options = ParseOptions::new(Delimiters::default(), UnterminatedPolicy::Reject);
        let entries = build_entries(&tree(), &options);

        assert_eq!(entries.len(), 4);
        assert!(find_entry(&entries, "2.1").is_none());
        assert!(find_entry(&entries, " 2.0 ").is_some());
    }
}
