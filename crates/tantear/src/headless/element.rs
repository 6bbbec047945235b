//! In-memory element tree nodes.
//!
//! Elements are shared handles (`Rc<RefCell<_>>`) so that drivers, node
//! sets, and bindings all address the same underlying node; identity is
//! stable across update passes because bindings mutate nodes in place
//! instead of rebuilding the tree.

use crate::selector::SelectorTarget;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler = Rc<dyn Fn()>;

struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    present: bool,
    children: Vec<Element>,
    parent: Option<Weak<RefCell<ElementData>>>,
    click_handlers: Vec<Handler>,
    blur_handlers: Vec<Handler>,
}

/// A node of the headless element tree.
///
/// Cloning an `Element` clones the handle, not the node; all clones
/// observe the same state. Single-threaded by construction.
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

impl Element {
    /// Start building an element with the given tag name.
    #[must_use]
    pub fn builder(tag: impl Into<String>) -> ElementBuilder {
        ElementBuilder::new(tag)
    }

    fn from_data(data: ElementData) -> Self {
        Self {
            inner: Rc::new(RefCell::new(data)),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    /// True when both handles address the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// True when the element carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    /// Classes, in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    /// All attributes, sorted by name.
    #[must_use]
    pub fn attributes(&self) -> BTreeMap<String, String> {
        self.inner.borrow().attributes.clone()
    }

    /// Add a class if not already present.
    pub fn add_class(&self, class: &str) {
        let mut data = self.inner.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.retain(|c| c != class);
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    /// Set an attribute.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.into(), value.into());
    }

    /// Remove an attribute.
    pub fn remove_attribute(&self, name: &str) {
        self.inner.borrow_mut().attributes.remove(name);
    }

    /// The element's own text (excluding children).
    #[must_use]
    pub fn own_text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Replace the element's own text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.borrow_mut().text = text.into();
    }

    /// Input value.
    #[must_use]
    pub fn value(&self) -> String {
        self.inner.borrow().value.clone()
    }

    /// Replace the input value.
    pub fn set_value(&self, value: impl Into<String>) {
        self.inner.borrow_mut().value = value.into();
    }

    /// Disabled flag.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.inner.borrow().disabled
    }

    /// Set the disabled flag.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
    }

    /// Presence flag. Non-present subtrees are invisible to queries and
    /// contribute no rendered text.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.inner.borrow().present
    }

    /// Set the presence flag.
    pub fn set_present(&self, present: bool) {
        self.inner.borrow_mut().present = present;
    }

    /// Child handles, in order.
    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    /// Parent handle, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<Element> {
        let data = self.inner.borrow();
        let weak = data.parent.as_ref()?;
        weak.upgrade().map(|inner| Element { inner })
    }

    /// Attach a child, wiring its parent back-link.
    pub fn append_child(&self, child: Element) {
        child.inner.borrow_mut().parent = Some(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().children.push(child);
    }

    /// Register a click handler.
    pub fn on_click(&self, handler: impl Fn() + 'static) {
        self.inner.borrow_mut().click_handlers.push(Rc::new(handler));
    }

    /// Register a blur handler.
    pub fn on_blur(&self, handler: impl Fn() + 'static) {
        self.inner.borrow_mut().blur_handlers.push(Rc::new(handler));
    }

    /// Dispatch a click to this node (handlers only; no update pass).
    pub fn click(&self) {
        let handlers: Vec<Handler> = self.inner.borrow().click_handlers.clone();
        for handler in handlers {
            handler();
        }
    }

    /// Dispatch a blur to this node (handlers only; no update pass).
    pub fn blur(&self) {
        let handlers: Vec<Handler> = self.inner.borrow().blur_handlers.clone();
        for handler in handlers {
            handler();
        }
    }

    /// Concatenated rendered text of the subtree: own text first, then
    /// present children in order.
    #[must_use]
    pub fn rendered_text(&self) -> String {
        if !self.is_present() {
            return String::new();
        }
        let mut out = self.own_text();
        for child in self.children() {
            out.push_str(&child.rendered_text());
        }
        out
    }

    /// Present descendants in depth-first pre-order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants(&self, out: &mut Vec<Element>) {
        for child in self.children() {
            if !child.is_present() {
                continue;
            }
            out.push(child.clone());
            child.collect_descendants(out);
        }
    }
}

impl SelectorTarget for Element {
    fn tag_name(&self) -> String {
        self.tag()
    }

    fn id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        Element::has_class(self, class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        Element::attribute(self, name)
    }

    fn parent(&self) -> Option<Self> {
        Element::parent(self)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("id", &data.id)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish_non_exhaustive()
    }
}

/// Fluent construction of element trees.
///
/// # Example
///
/// ```ignore
/// let root = Element::builder("div")
///     .class("counter")
///     .child(Element::builder("span").class("count").text("0").build())
///     .child(Element::builder("button").text("+").build())
///     .build();
/// ```
pub struct ElementBuilder {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    present: bool,
    children: Vec<Element>,
    click_handlers: Vec<Handler>,
    blur_handlers: Vec<Handler>,
}

impl ElementBuilder {
    /// Start a builder for the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            disabled: false,
            present: true,
            children: Vec::new(),
            click_handlers: Vec::new(),
            blur_handlers: Vec::new(),
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the element's own text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the input value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the initial presence flag.
    #[must_use]
    pub fn present(mut self, present: bool) -> Self {
        self.present = present;
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Register a click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.click_handlers.push(Rc::new(handler));
        self
    }

    /// Register a blur handler.
    #[must_use]
    pub fn on_blur(mut self, handler: impl Fn() + 'static) -> Self {
        self.blur_handlers.push(Rc::new(handler));
        self
    }

    /// Build the element and wire parent links for its children.
    #[must_use]
    pub fn build(self) -> Element {
        let element = Element::from_data(ElementData {
            tag: self.tag,
            id: self.id,
            classes: self.classes,
            attributes: self.attributes,
            text: self.text,
            value: self.value,
            disabled: self.disabled,
            present: self.present,
            children: Vec::new(),
            parent: None,
            click_handlers: self.click_handlers,
            blur_handlers: self.blur_handlers,
        });
        for child in self.children {
            element.append_child(child);
        }
        element
    }
}

impl fmt::Debug for ElementBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementBuilder")
            .field("tag", &self.tag)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::cell::Cell;

    mod builder_tests {
        use super::*;

        #[test]
        fn test_builder_sets_all_fields() {
            let el = Element::builder("button")
                .id("save")
                .class("primary")
                .attr("data-role", "action")
                .text("Save")
                .disabled(true)
                .build();
            assert_eq!(el.tag(), "button");
            assert_eq!(SelectorTarget::id(&el), Some("save".to_string()));
            assert!(el.has_class("primary"));
            assert_eq!(el.attribute("data-role"), Some("action".to_string()));
            assert_eq!(el.own_text(), "Save");
            assert!(el.disabled());
            assert!(el.is_present());
        }

        #[test]
        fn test_children_get_parent_links() {
            let child = Element::builder("span").build();
            let parent = Element::builder("div").child(child.clone()).build();
            assert!(child.parent().unwrap().ptr_eq(&parent));
            assert_eq!(parent.children().len(), 1);
        }
    }

    mod tree_tests {
        use super::*;

        #[test]
        fn test_rendered_text_concatenates_subtree() {
            let el = Element::builder("div")
                .text("a")
                .child(Element::builder("span").text("b").build())
                .child(
                    Element::builder("span")
                        .text("c")
                        .child(Element::builder("i").text("d").build())
                        .build(),
                )
                .build();
            assert_eq!(el.rendered_text(), "abcd");
        }

        #[test]
        fn test_non_present_subtree_contributes_nothing() {
            let hidden = Element::builder("span").text("secret").build();
            let el = Element::builder("div")
                .text("shown")
                .child(hidden.clone())
                .build();
            hidden.set_present(false);
            assert_eq!(el.rendered_text(), "shown");
            assert!(el.descendants().is_empty());
        }

        #[test]
        fn test_descendants_pre_order() {
            let tree = Element::builder("div")
                .id("root")
                .child(
                    Element::builder("ul")
                        .child(Element::builder("li").id("a").build())
                        .child(Element::builder("li").id("b").build())
                        .build(),
                )
                .child(Element::builder("p").id("tail").build())
                .build();
            let tags: Vec<String> = tree.descendants().iter().map(Element::tag).collect();
            assert_eq!(tags, ["ul", "li", "li", "p"]);
        }

        #[test]
        fn test_presence_toggle_restores_subtree() {
            let row = Element::builder("li").text("row").build();
            let list = Element::builder("ul").child(row.clone()).build();
            row.set_present(false);
            assert_eq!(list.descendants().len(), 0);
            row.set_present(true);
            assert_eq!(list.descendants().len(), 1);
        }
    }

    mod event_tests {
        use super::*;

        #[test]
        fn test_click_runs_all_handlers() {
            let hits = Rc::new(Cell::new(0));
            let el = Element::builder("button").build();
            for _ in 0..3 {
                let hits = Rc::clone(&hits);
                el.on_click(move || hits.set(hits.get() + 1));
            }
            el.click();
            assert_eq!(hits.get(), 3);
        }

        #[test]
        fn test_handler_may_mutate_own_element() {
            let el = Element::builder("button").text("off").build();
            {
                let el2 = el.clone();
                el.on_click(move || el2.set_text("on"));
            }
            el.click();
            assert_eq!(el.own_text(), "on");
        }

        #[test]
        fn test_blur_handlers_run() {
            let hits = Rc::new(Cell::new(0));
            let el = Element::builder("input").build();
            let counter = Rc::clone(&hits);
            el.on_blur(move || counter.set(counter.get() + 1));
            el.blur();
            el.blur();
            assert_eq!(hits.get(), 2);
        }
    }
}
