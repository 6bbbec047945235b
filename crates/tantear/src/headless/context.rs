//! Render context: owns the element tree and its data bindings.
//!
//! A binding is a closure that pulls a value from application state and
//! writes it into a target element. [`RenderContext::detect_changes`]
//! runs every binding once and counts the pass; interactions on node
//! sets trigger exactly one such pass per call, so tests can assert on
//! the pass count to pin down re-render behaviour.

use super::element::Element;
use crate::result::TantearResult;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

type Binding = Rc<dyn Fn()>;

struct ContextData {
    root: Element,
    bindings: Vec<Binding>,
    update_passes: u64,
}

/// Owns a headless element tree and the bindings that refresh it.
///
/// Clones share the same tree and pass counter.
#[derive(Clone)]
pub struct RenderContext {
    inner: Rc<RefCell<ContextData>>,
}

impl RenderContext {
    /// Wrap a built element tree in a context with no bindings.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContextData {
                root,
                bindings: Vec::new(),
                update_passes: 0,
            })),
        }
    }

    /// Root element handle.
    #[must_use]
    pub fn root(&self) -> Element {
        self.inner.borrow().root.clone()
    }

    /// Number of update passes run so far.
    #[must_use]
    pub fn update_passes(&self) -> u64 {
        self.inner.borrow().update_passes
    }

    fn push_binding(&self, binding: Binding) {
        self.inner.borrow_mut().bindings.push(binding);
    }

    /// Bind the target's own text to a source closure.
    pub fn bind_text(&self, target: &Element, source: impl Fn() -> String + 'static) {
        let target = target.clone();
        self.push_binding(Rc::new(move || target.set_text(source())));
    }

    /// Bind the target's input value to a source closure.
    pub fn bind_value(&self, target: &Element, source: impl Fn() -> String + 'static) {
        let target = target.clone();
        self.push_binding(Rc::new(move || target.set_value(source())));
    }

    /// Bind the target's disabled flag to a source closure.
    pub fn bind_disabled(&self, target: &Element, source: impl Fn() -> bool + 'static) {
        let target = target.clone();
        self.push_binding(Rc::new(move || target.set_disabled(source())));
    }

    /// Bind an attribute to a source closure; `None` removes it.
    pub fn bind_attr(
        &self,
        target: &Element,
        name: impl Into<String>,
        source: impl Fn() -> Option<String> + 'static,
    ) {
        let target = target.clone();
        let name = name.into();
        self.push_binding(Rc::new(move || match source() {
            Some(value) => target.set_attribute(name.clone(), value),
            None => target.remove_attribute(&name),
        }));
    }

    /// Bind the target's presence flag to a source closure.
    pub fn bind_present(&self, target: &Element, source: impl Fn() -> bool + 'static) {
        let target = target.clone();
        self.push_binding(Rc::new(move || target.set_present(source())));
    }

    /// Run every binding once and count the pass.
    ///
    /// The binding list is cloned up front so a binding that registers
    /// further bindings cannot invalidate the iteration; late additions
    /// run from the next pass on.
    pub fn detect_changes(&self) {
        let bindings: Vec<Binding> = self.inner.borrow().bindings.clone();
        for binding in &bindings {
            binding();
        }
        let mut data = self.inner.borrow_mut();
        data.update_passes += 1;
        trace!(
            pass = data.update_passes,
            bindings = bindings.len(),
            "update pass"
        );
    }

    /// Capture the present portion of the tree as plain data.
    #[must_use]
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot::capture(&self.root())
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("RenderContext")
            .field("root", &data.root)
            .field("bindings", &data.bindings.len())
            .field("update_passes", &data.update_passes)
            .finish()
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Plain-data capture of a rendered tree, for assertions and goldens.
///
/// Non-present subtrees are omitted, matching what queries can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Tag name.
    pub tag: String,
    /// Element id, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Classes, in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attributes, sorted by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// The element's own text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Input value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Disabled flag.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    /// Present children, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    /// Capture an element and its present descendants.
    #[must_use]
    pub fn capture(element: &Element) -> Self {
        use crate::selector::SelectorTarget;
        Self {
            tag: element.tag(),
            id: SelectorTarget::id(element),
            classes: element.classes(),
            attributes: element.attributes(),
            text: element.own_text(),
            value: element.value(),
            disabled: element.disabled(),
            children: element
                .children()
                .iter()
                .filter(|child| child.is_present())
                .map(Self::capture)
                .collect(),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> TantearResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
