//! Render Surface
//!
//! The DOM primitives the engine needs, behind a trait so the same card
//! logic drives a browser document or an in-memory tree.

mod memory;

pub use memory::{MemorySurface, NodeId};

use futures_util::future::LocalBoxFuture;
use std::fmt;
use std::rc::Rc;

/// Async handler bound to a click. The surface decides how to drive the
/// returned future (the browser spawns it on the event loop).
pub type ClickHandler = Rc<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// A tree of nodes the client renders into
pub trait RenderSurface {
    /// Opaque handle to one node
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    /// Create a detached element. An empty `class` sets no class.
    fn create(&self, tag: &str, class: &str) -> Self::Node;

    /// Replace all content of `node` with a single text run
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Concatenated text of `node` and its descendants
    fn text(&self, node: &Self::Node) -> String;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Replace the class list of `node`
    fn set_class(&self, node: &Self::Node, class: &str);

    /// Toggle the `hidden` class
    fn set_hidden(&self, node: &Self::Node, hidden: bool);

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere
    fn append(&self, parent: &Self::Node, child: &Self::Node);

    /// Put `new` where `old` sits under `parent`, detaching `old`
    fn replace(&self, parent: &Self::Node, new: &Self::Node, old: &Self::Node);

    /// Detach `node` from its parent. No-op when already detached.
    fn remove(&self, node: &Self::Node);

    /// Drop all children and text of `node`
    fn clear(&self, node: &Self::Node);

    /// Number of element children
    fn child_count(&self, node: &Self::Node) -> usize;

    fn on_click(&self, node: &Self::Node, handler: ClickHandler);

    /// Restore a form's inputs to their initial values
    fn reset_form(&self, form: &Self::Node);
}
