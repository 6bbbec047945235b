//! Node-set handle for the headless backend.

use super::context::RenderContext;
use super::element::Element;
use crate::node_set::NodeSet;
use crate::result::{TantearError, TantearResult};
use std::fmt;
use tracing::debug;

/// Snapshot handle over the elements a driver resolved.
///
/// Reads take the first element; interactions hit every element and
/// then run exactly one update pass, whether the set holds zero nodes
/// or fifty.
#[derive(Clone)]
pub struct HeadlessNodes {
    context: RenderContext,
    elements: Vec<Element>,
    description: String,
}

impl HeadlessNodes {
    pub(crate) fn new(
        context: RenderContext,
        elements: Vec<Element>,
        description: String,
    ) -> Self {
        Self {
            context,
            elements,
            description,
        }
    }

    /// The human-readable scope this set came from.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    fn first(&self, property: &str) -> TantearResult<&Element> {
        self.elements
            .first()
            .ok_or_else(|| TantearError::empty_scope(property, self.description.clone()))
    }
}

impl NodeSet for HeadlessNodes {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn text(&self) -> TantearResult<String> {
        Ok(self.first("text")?.rendered_text())
    }

    fn value(&self) -> TantearResult<String> {
        Ok(self.first("value")?.value())
    }

    fn enabled(&self) -> TantearResult<bool> {
        Ok(!self.first("enabled")?.disabled())
    }

    fn attribute(&self, name: &str) -> TantearResult<Option<String>> {
        Ok(self.first("attribute")?.attribute(name))
    }

    fn click(&self) -> TantearResult<()> {
        for element in &self.elements {
            element.click();
        }
        debug!(nodes = self.elements.len(), scope = %self.description, "click");
        self.context.detect_changes();
        Ok(())
    }

    fn blur(&self) -> TantearResult<()> {
        for element in &self.elements {
            element.blur();
        }
        debug!(nodes = self.elements.len(), scope = %self.description, "blur");
        self.context.detect_changes();
        Ok(())
    }

    fn clear(&self) -> TantearResult<()> {
        for element in &self.elements {
            element.set_value("");
        }
        debug!(nodes = self.elements.len(), scope = %self.description, "clear");
        self.context.detect_changes();
        Ok(())
    }

    fn nth(&self, index: usize) -> Option<Self> {
        self.elements.get(index).map(|element| Self {
            context: self.context.clone(),
            elements: vec![element.clone()],
            description: format!("{}[{index}]", self.description),
        })
    }
}

impl fmt::Debug for HeadlessNodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessNodes")
            .field("description", &self.description)
            .field("len", &self.elements.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn form() -> (RenderContext, Rc<Cell<u32>>) {
        let clicks = Rc::new(Cell::new(0));
        let mut root = Element::builder("form").id("signup");
        for i in 0..3 {
            let counter = Rc::clone(&clicks);
            root = root.child(
                Element::builder("button")
                    .class("tab")
                    .text(format!("tab {i}"))
                    .on_click(move || counter.set(counter.get() + 1))
                    .build(),
            );
        }
        let field = Element::builder("input")
            .id("email")
            .value("old@example.com")
            .build();
        root = root.child(field);
        (RenderContext::new(root.build()), clicks)
    }

    fn nodes_for(ctx: &RenderContext, selector: &str) -> HeadlessNodes {
        use crate::driver::LocatorDriver;
        use crate::headless::driver::HeadlessDriver;
        HeadlessDriver::document(ctx)
            .get(selector)
            .unwrap()
            .nodes()
    }

    mod read_tests {
        use super::*;

        #[test]
        fn test_reads_use_first_node() {
            let (ctx, _clicks) = form();
            let tabs = nodes_for(&ctx, "button.tab");
            assert_eq!(tabs.len(), 3);
            assert_eq!(tabs.text().unwrap(), "tab 0");
            assert!(tabs.enabled().unwrap());
        }

        #[test]
        fn test_value_and_attribute() {
            let (ctx, _clicks) = form();
            let field = nodes_for(&ctx, "#email");
            assert_eq!(field.value().unwrap(), "old@example.com");
            assert_eq!(field.attribute("missing").unwrap(), None);
        }

        #[test]
        fn test_empty_scope_reads_error() {
            let (ctx, _clicks) = form();
            let none = nodes_for(&ctx, "table");
            let err = none.text().unwrap_err();
            assert!(matches!(err, TantearError::EmptyScope { ref property, .. } if property == "text"));
            assert!(err.to_string().contains("document table"));
            assert!(none.value().is_err());
            assert!(none.enabled().is_err());
            assert!(none.attribute("id").is_err());
        }

        #[test]
        fn test_disabled_maps_to_enabled_false() {
            let root = Element::builder("div")
                .child(Element::builder("button").disabled(true).build())
                .build();
            let ctx = RenderContext::new(root);
            assert!(!nodes_for(&ctx, "button").enabled().unwrap());
        }
    }

    mod interaction_tests {
        use super::*;

        #[test]
        fn test_click_hits_every_node_once() {
            let (ctx, clicks) = form();
            nodes_for(&ctx, "button.tab").click().unwrap();
            assert_eq!(clicks.get(), 3);
        }

        #[test]
        fn test_click_runs_exactly_one_pass() {
            let (ctx, _clicks) = form();
            nodes_for(&ctx, "button.tab").click().unwrap();
            assert_eq!(ctx.update_passes(), 1);
        }

        #[test]
        fn test_empty_set_click_still_runs_one_pass() {
            let (ctx, clicks) = form();
            nodes_for(&ctx, "table").click().unwrap();
            assert_eq!(clicks.get(), 0);
            assert_eq!(ctx.update_passes(), 1);
        }

        #[test]
        fn test_clear_empties_all_values() {
            let (ctx, _clicks) = form();
            let field = nodes_for(&ctx, "#email");
            field.clear().unwrap();
            assert_eq!(field.value().unwrap(), "");
            assert_eq!(ctx.update_passes(), 1);
        }

        #[test]
        fn test_blur_dispatches_and_renders() {
            let blurred = Rc::new(Cell::new(false));
            let flag = Rc::clone(&blurred);
            let root = Element::builder("div")
                .child(
                    Element::builder("input")
                        .on_blur(move || flag.set(true))
                        .build(),
                )
                .build();
            let ctx = RenderContext::new(root);
            nodes_for(&ctx, "input").blur().unwrap();
            assert!(blurred.get());
            assert_eq!(ctx.update_passes(), 1);
        }
    }

    mod subset_tests {
        use super::*;

        #[test]
        fn test_nth_narrows_to_single_node() {
            let (ctx, _clicks) = form();
            let tabs = nodes_for(&ctx, "button.tab");
            let second = tabs.nth(1).unwrap();
            assert_eq!(second.len(), 1);
            assert_eq!(second.text().unwrap(), "tab 1");
            assert!(tabs.nth(9).is_none());
        }

        #[test]
        fn test_to_array_splits_in_order() {
            let (ctx, _clicks) = form();
            let parts = nodes_for(&ctx, "button.tab").to_array();
            let texts: Vec<String> = parts.iter().map(|p| p.text().unwrap()).collect();
            assert_eq!(texts, ["tab 0", "tab 1", "tab 2"]);
        }

        #[test]
        fn test_iter_restarts_fresh() {
            let (ctx, _clicks) = form();
            let tabs = nodes_for(&ctx, "button.tab");
            let first_walk: usize = tabs.iter().count();
            let second_walk: usize = tabs.iter().count();
            assert_eq!(first_walk, 3);
            assert_eq!(second_walk, 3);
        }

        #[test]
        fn test_nth_description_indexes() {
            let (ctx, _clicks) = form();
            let tabs = nodes_for(&ctx, "button.tab");
            assert_eq!(tabs.nth(2).unwrap().description(), "document button.tab[2]");
        }
    }
}
