//! Headless render surface backed by an arena of nodes.
//!
//! Mirrors the DOM semantics the engine relies on (single parent, text
//! content replacing children, detach on re-append) and exposes inspection
//! helpers plus [`MemorySurface::click`] to drive bound handlers.

use futures_util::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{ClickHandler, RenderSurface};

/// Index of a node in a [`MemorySurface`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Default)]
struct NodeData {
    tag: String,
    class: String,
    text: String,
    attributes: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    click: Option<ClickHandler>,
}

/// In-memory node tree
#[derive(Default)]
pub struct MemorySurface {
    nodes: RefCell<Vec<NodeData>>,
    form_resets: Cell<usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    pub fn class(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].class.clone()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0]
            .class
            .split_whitespace()
            .any(|c| c == class)
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.has_class(node, "hidden")
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    /// Depth-first search below `root` (inclusive) for nodes carrying `class`
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                found.push(id);
            }
            stack.extend(self.children(id).into_iter().rev());
        }
        found
    }

    /// Invoke the click handler bound to `node`, returning its future
    pub fn click(&self, node: NodeId) -> Option<LocalBoxFuture<'static, ()>> {
        let handler = self.nodes.borrow()[node.0].click.clone()?;
        Some(handler())
    }

    /// How many times [`RenderSurface::reset_form`] ran
    pub fn form_resets(&self) -> usize {
        self.form_resets.get()
    }

    fn detach(nodes: &mut [NodeData], node: NodeId) {
        if let Some(parent) = nodes[node.0].parent.take() {
            nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn collect_text(nodes: &[NodeData], node: NodeId, out: &mut String) {
        out.push_str(&nodes[node.0].text);
        for child in &nodes[node.0].children {
            Self::collect_text(nodes, *child, out);
        }
    }
}

impl RenderSurface for MemorySurface {
    type Node = NodeId;

    fn create(&self, tag: &str, class: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_string(),
            class: class.to_string(),
            ..NodeData::default()
        });
        NodeId(nodes.len() - 1)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.clear(node);
        self.nodes.borrow_mut()[node.0].text = text.to_string();
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = String::new();
        Self::collect_text(&self.nodes.borrow(), *node, &mut out);
        out
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].class = class.to_string();
    }

    fn set_hidden(&self, node: &NodeId, hidden: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let data = &mut nodes[node.0];
        let mut classes: Vec<&str> = data
            .class
            .split_whitespace()
            .filter(|c| *c != "hidden")
            .collect();
        if hidden {
            classes.push("hidden");
        }
        data.class = classes.join(" ");
    }

    fn append(&self, parent: &NodeId, child: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach(&mut nodes, *child);
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.push(*child);
    }

    fn replace(&self, parent: &NodeId, new: &NodeId, old: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(index) = nodes[parent.0].children.iter().position(|c| c == old) else {
            return;
        };
        Self::detach(&mut nodes, *new);
        // detaching `new` may have shifted `old` when both shared the parent
        let index = nodes[parent.0]
            .children
            .iter()
            .position(|c| c == old)
            .unwrap_or(index);
        nodes[parent.0].children[index] = *new;
        nodes[old.0].parent = None;
        nodes[new.0].parent = Some(*parent);
    }

    fn remove(&self, node: &NodeId) {
        Self::detach(&mut self.nodes.borrow_mut(), *node);
    }

    fn clear(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[node.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
        nodes[node.0].text.clear();
    }

    fn child_count(&self, node: &NodeId) -> usize {
        self.nodes.borrow()[node.0].children.len()
    }

    fn on_click(&self, node: &NodeId, handler: ClickHandler) {
        self.nodes.borrow_mut()[node.0].click = Some(handler);
    }

    fn reset_form(&self, _form: &NodeId) {
        self.form_resets.set(self.form_resets.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_tree_and_text() {
        let surface = MemorySurface::new();
        let card = surface.create("div", "activity-card");
        let header = surface.create("h4", "");
        let body = surface.create("p", "");
        surface.set_text(&header, "Chess Club");
        surface.set_text(&body, "Fridays");
        surface.append(&card, &header);
        surface.append(&card, &body);

        assert_eq!(surface.text(&card), "Chess ClubFridays");
        assert_eq!(surface.child_count(&card), 2);
        assert_eq!(surface.parent(header), Some(card));

        surface.set_text(&card, "replaced");
        assert_eq!(surface.child_count(&card), 0);
        assert_eq!(surface.parent(header), None);
        assert_eq!(surface.text(&card), "replaced");
    }

    #[test]
    fn test_replace_and_remove() {
        let surface = MemorySurface::new();
        let section = surface.create("div", "participants-section");
        let title = surface.create("div", "participants-title");
        let empty = surface.create("div", "participants-empty");
        let list = surface.create("ul", "participants-list");
        surface.append(&section, &title);
        surface.append(&section, &empty);

        surface.replace(&section, &list, &empty);
        assert_eq!(surface.children(section), vec![title, list]);
        assert_eq!(surface.parent(empty), None);

        surface.remove(&list);
        surface.remove(&list);
        assert_eq!(surface.children(section), vec![title]);

        // replacing a node that is not a child does nothing
        surface.replace(&section, &empty, &list);
        assert_eq!(surface.children(section), vec![title]);
    }

    #[test]
    fn test_append_moves_node() {
        let surface = MemorySurface::new();
        let a = surface.create("ul", "");
        let b = surface.create("ul", "");
        let li = surface.create("li", "");
        surface.append(&a, &li);
        surface.append(&b, &li);
        assert_eq!(surface.child_count(&a), 0);
        assert_eq!(surface.children(b), vec![li]);
    }

    #[test]
    fn test_hidden_toggle_keeps_other_classes() {
        let surface = MemorySurface::new();
        let banner = surface.create("div", "success");
        surface.set_hidden(&banner, true);
        assert!(surface.is_hidden(banner));
        assert!(surface.has_class(banner, "success"));
        surface.set_hidden(&banner, false);
        assert_eq!(surface.class(banner), "success");
    }

    #[test]
    fn test_find_by_class_in_document_order() {
        let surface = MemorySurface::new();
        let list = surface.create("ul", "");
        let first = surface.create("li", "row");
        let second = surface.create("li", "row");
        surface.append(&list, &first);
        surface.append(&list, &second);
        assert_eq!(surface.find_by_class(list, "row"), vec![first, second]);
    }

    #[tokio::test]
    async fn test_click_runs_bound_handler() {
        let surface = MemorySurface::new();
        let button = surface.create("span", "delete-icon");
        assert!(surface.click(button).is_none());

        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        surface.on_click(
            &button,
            Rc::new(move || -> LocalBoxFuture<'static, ()> {
                let counter = Rc::clone(&counter);
                Box::pin(async move { counter.set(counter.get() + 1) })
            }),
        );

        surface.click(button).unwrap().await;
        surface.click(button).unwrap().await;
        assert_eq!(clicks.get(), 2);
    }
}
