//! Editing a menu tree addressed by index paths.
//!
//! A path lists child indices from the root: `[2, 0]` is the first child of
//! the third top-level node. The empty path addresses the root list itself
//! when used as a parent.

use super::types::{find, MenuError, MenuNode, MenuResult};

/// An editable menu tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuEditor {
    nodes: Vec<MenuNode>,
}

impl MenuEditor {
    pub fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<MenuNode> {
        self.nodes
    }

    pub fn get(&self, path: &[usize]) -> Option<&MenuNode> {
        find(&self.nodes, path)
    }

    /// Insert `node` at `index` under the menu at `parent`.
    ///
    /// An index past the end appends. Returns the path of the inserted node.
    pub fn insert(
        &mut self,
        parent: &[usize],
        index: usize,
        node: MenuNode,
    ) -> MenuResult<Vec<usize>> {
        let children = self.children_mut(parent)?;
        let index = index.min(children.len());
        children.insert(index, node);

        let mut path = parent.to_vec();
        path.push(index);
        Ok(path)
    }

    /// Remove and return the node at `path`
    pub fn remove(&mut self, path: &[usize]) -> MenuResult<MenuNode> {
        let (&index, parent) = path
            .split_last()
            .ok_or_else(|| MenuError::InvalidPath(path.to_vec()))?;

        let children = self.children_mut(parent)?;
        if index >= children.len() {
            return Err(MenuError::InvalidPath(path.to_vec()));
        }

        Ok(children.remove(index))
    }

    pub fn set_title(&mut self, path: &[usize], new_title: impl Into<String>) -> MenuResult<()> {
        match self.node_mut(path)? {
            MenuNode::Menu { title, .. } | MenuNode::Command { title, .. } => {
                *title = new_title.into();
                Ok(())
            }
            MenuNode::Separator => Err(MenuError::Untitled(path.to_vec())),
        }
    }

    /// Replace a command's lines from editor text, one template per non-blank line
    pub fn set_commands(&mut self, path: &[usize], text: &str) -> MenuResult<()> {
        match self.node_mut(path)? {
            MenuNode::Command { templates, .. } => {
                *templates = text
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(())
            }
            MenuNode::Menu { .. } | MenuNode::Separator => {
                Err(MenuError::NotACommand(path.to_vec()))
            }
        }
    }

    /// A command's lines joined for editing
    pub fn commands_text(&self, path: &[usize]) -> MenuResult<String> {
        match self.get(path) {
            Some(MenuNode::Command { templates, .. }) => Ok(templates.join("\n")),
            Some(_) => Err(MenuError::NotACommand(path.to_vec())),
            None => Err(MenuError::InvalidPath(path.to_vec())),
        }
    }

    fn node_mut(&mut self, path: &[usize]) -> MenuResult<&mut MenuNode> {
        let (&index, parent) = path
            .split_last()
            .ok_or_else(|| MenuError::InvalidPath(path.to_vec()))?;

        self.children_mut(parent)?
            .get_mut(index)
            .ok_or_else(|| MenuError::InvalidPath(path.to_vec()))
    }

    fn children_mut(&mut self, parent: &[usize]) -> MenuResult<&mut Vec<MenuNode>> {
        let mut children = &mut self.nodes;

        for (depth, &index) in parent.iter().enumerate() {
            children = match children.get_mut(index) {
                Some(MenuNode::Menu { children, .. }) => children,
                Some(_) => return Err(MenuError::NotAMenu(parent[..=depth].to_vec())),
                None => return Err(MenuError::InvalidPath(parent[..=depth].to_vec())),
            };
        }

        Ok(children)
    }
}
