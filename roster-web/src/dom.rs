//! Browser DOM Surface
//!
//! [`RenderSurface`] over `web_sys` elements. Click handlers are spawned on
//! the browser event loop; DOM call failures are logged, never fatal.

use activity_roster::{ClickHandler, RenderSurface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlFormElement};

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Look up a shell element by id
    pub fn element_by_id(&self, id: &str) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{} element", id)))
    }
}

fn log_failure<T>(op: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        tracing::warn!(op, error = ?e, "DOM operation failed");
    }
}

impl RenderSurface for DomSurface {
    type Node = Element;

    /// `createElement` throws only for names that are not valid XML names.
    /// Every tag the engine creates is a fixed literal, so a failure here is
    /// a programming error and is thrown rather than logged.
    fn create(&self, tag: &str, class: &str) -> Element {
        let element = self
            .document
            .create_element(tag)
            .expect_throw("failed to create element");
        if !class.is_empty() {
            element.set_class_name(class);
        }
        element
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        log_failure("set_attribute", node.set_attribute(name, value));
    }

    fn set_class(&self, node: &Element, class: &str) {
        node.set_class_name(class);
    }

    fn set_hidden(&self, node: &Element, hidden: bool) {
        log_failure(
            "toggle hidden",
            node.class_list().toggle_with_force("hidden", hidden),
        );
    }

    fn append(&self, parent: &Element, child: &Element) {
        log_failure("append_child", parent.append_child(child));
    }

    fn replace(&self, parent: &Element, new: &Element, old: &Element) {
        log_failure("replace_child", parent.replace_child(new, old));
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn clear(&self, node: &Element) {
        node.set_inner_html("");
    }

    fn child_count(&self, node: &Element) -> usize {
        node.child_element_count() as usize
    }

    fn on_click(&self, node: &Element, handler: ClickHandler) {
        let on_click = Closure::wrap(Box::new(move || {
            spawn_local(handler());
        }) as Box<dyn FnMut()>);
        log_failure(
            "add click listener",
            node.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
        );
        on_click.forget();
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}
