//! Locator driver over the headless element tree.

use super::context::RenderContext;
use super::element::Element;
use super::nodes::HeadlessNodes;
use crate::driver::LocatorDriver;
use crate::filter::TextFilter;
use crate::result::TantearResult;
use crate::selector::Selector;
use std::fmt;

/// Driver rooted at a set of scope elements inside one [`RenderContext`].
///
/// Drivers are immutable: every narrowing operation returns a new
/// driver and leaves the receiver untouched. Queries visit each
/// distinct scope node once and concatenate the per-node matches in
/// document order; `query_parents` additionally deduplicates shared
/// ancestors.
#[derive(Clone)]
pub struct HeadlessDriver {
    context: RenderContext,
    scope: Vec<Element>,
    description: String,
}

impl HeadlessDriver {
    /// Driver scoped to the document root of a context.
    #[must_use]
    pub fn document(context: &RenderContext) -> Self {
        Self {
            context: context.clone(),
            scope: vec![context.root()],
            description: "document".to_string(),
        }
    }

    /// The render context behind this driver.
    #[must_use]
    pub const fn context(&self) -> &RenderContext {
        &self.context
    }

    fn derived(&self, scope: Vec<Element>, description: String) -> Self {
        Self {
            context: self.context.clone(),
            scope,
            description,
        }
    }

    /// Matching descendants grouped by scope node: each distinct scope
    /// node is visited once, its matches come out in depth-first
    /// pre-order, and the groups are concatenated in scope order. A
    /// node under two nested scope nodes appears once per group.
    fn collect_matches(&self, selector: &Selector) -> Vec<Element> {
        let mut seen: Vec<Element> = Vec::new();
        let mut out: Vec<Element> = Vec::new();
        for node in &self.scope {
            if !node.is_present() || contains(&seen, node) {
                continue;
            }
            seen.push(node.clone());
            for candidate in node.descendants() {
                if selector.matches(&candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }
}

fn contains(elements: &[Element], candidate: &Element) -> bool {
    elements.iter().any(|el| el.ptr_eq(candidate))
}

/// Reorder `nodes` into whole-document pre-order. Nodes detached from
/// the root keep their incoming relative order at the tail.
fn document_order(context: &RenderContext, mut nodes: Vec<Element>) -> Vec<Element> {
    let root = context.root();
    let mut ordered = Vec::with_capacity(nodes.len());
    for candidate in std::iter::once(root.clone()).chain(root.descendants()) {
        if let Some(pos) = nodes.iter().position(|n| n.ptr_eq(&candidate)) {
            ordered.push(nodes.remove(pos));
        }
    }
    ordered.extend(nodes);
    ordered
}

impl LocatorDriver for HeadlessDriver {
    type Nodes = HeadlessNodes;

    fn query(&self, selector: &Selector) -> Self {
        let matches = self.collect_matches(selector);
        self.derived(matches, format!("{} {selector}", self.description))
    }

    fn query_filtered(&self, selector: &Selector, filter: &TextFilter) -> Self {
        let mut matches = self.collect_matches(selector);
        matches.retain(|el| filter.accepts(&el.rendered_text()));
        self.derived(matches, format!("{} {selector}:{filter}", self.description))
    }

    fn query_parents(&self, selector: &Selector) -> Self {
        let mut found: Vec<Element> = Vec::new();
        for node in &self.scope {
            let mut cursor = node.parent();
            while let Some(ancestor) = cursor {
                if selector.matches(&ancestor) {
                    if !contains(&found, &ancestor) {
                        found.push(ancestor);
                    }
                    break;
                }
                cursor = ancestor.parent();
            }
        }
        let ordered = document_order(&self.context, found);
        self.derived(ordered, format!("{} parents({selector})", self.description))
    }

    fn nodes(&self) -> HeadlessNodes {
        HeadlessNodes::new(
            self.context.clone(),
            self.scope.clone(),
            self.description.clone(),
        )
    }

    fn scopes(&self) -> Vec<Self> {
        self.scope
            .iter()
            .enumerate()
            .map(|(index, el)| {
                self.derived(vec![el.clone()], format!("{}[{index}]", self.description))
            })
            .collect()
    }

    fn stabilize(&self) -> TantearResult<()> {
        self.context.detect_changes();
        Ok(())
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

impl fmt::Debug for HeadlessDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessDriver")
            .field("description", &self.description)
            .field("scope", &self.scope.len())
            .finish_non_exhaustive()
    }
}
