//! Menu tree types and error definitions

use thiserror::Error;

/// Menu-specific error type
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("No menu node at path {0:?}")]
    InvalidPath(Vec<usize>),

    #[error("Node at path {0:?} is not a menu")]
    NotAMenu(Vec<usize>),

    #[error("Node at path {0:?} is not a command")]
    NotACommand(Vec<usize>),

    #[error("Node at path {0:?} has no title")]
    Untitled(Vec<usize>),

    #[error("Menu file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Menu file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// One node of a command menu tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// A submenu
    Menu {
        title: String,
        children: Vec<MenuNode>,
    },
    /// An entry sending one or more command lines
    Command {
        title: String,
        templates: Vec<String>,
    },
    Separator,
}

impl MenuNode {
    pub fn menu(title: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Menu {
            title: title.into(),
            children,
        }
    }

    pub fn command<S: Into<String>>(
        title: impl Into<String>,
        templates: impl IntoIterator<Item = S>,
    ) -> Self {
        MenuNode::Command {
            title: title.into(),
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            MenuNode::Menu { title, .. } | MenuNode::Command { title, .. } => Some(title),
            MenuNode::Separator => None,
        }
    }

    pub fn children(&self) -> Option<&[MenuNode]> {
        match self {
            MenuNode::Menu { children, .. } => Some(children),
            MenuNode::Command { .. } | MenuNode::Separator => None,
        }
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, MenuNode::Menu { .. })
    }
}

/// Walk an index path from `nodes`. An empty path finds nothing.
pub fn find<'a>(nodes: &'a [MenuNode], path: &[usize]) -> Option<&'a MenuNode> {
    let (&last, parents) = path.split_last()?;

    let mut level = nodes;
    for &index in parents {
        level = level.get(index)?.children()?;
    }

    level.get(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuNode> {
        vec![
            MenuNode::command("Op", ["/op ${user}"]),
            MenuNode::Separator,
            MenuNode::menu(
                "Kick",
                vec![MenuNode::command("Kick", ["/kick ${channel} ${user}"])],
            ),
        ]
    }

    #[test]
    fn test_find_nested() {
        let nodes = tree();
        assert_eq!(find(&nodes, &[2, 0]).and_then(MenuNode::title), Some("Kick"));
        assert_eq!(find(&nodes, &[1]), Some(&MenuNode::Separator));
    }

    #[test]
    fn test_find_invalid_paths() {
        let nodes = tree();
        assert_eq!(find(&nodes, &[]), None);
        assert_eq!(find(&nodes, &[9]), None);
        // Commands have no children
        assert_eq!(find(&nodes, &[0, 0]), None);
    }

    #[test]
    fn test_title_and_children() {
        let nodes = tree();
        assert_eq!(nodes[1].title(), None);
        assert!(nodes[2].is_menu());
        assert_eq!(nodes[2].children().map(<[MenuNode]>::len), Some(1));
        assert_eq!(nodes[0].children(), None);
    }
}
