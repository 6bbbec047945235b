//! Headless view layer: mounts the todo list as an element tree.
//!
//! Handlers mutate the shared [`TodoList`]; bindings project state back
//! into the tree on each update pass. Nothing here paints eagerly: the
//! tree shows bound values only after the first pass, which widget
//! finders run on entry.

use crate::model::{TodoList, TodoResult};
use std::cell::RefCell;
use std::rc::Rc;
use tantear::{Element, HeadlessDriver, RenderContext};

/// A mounted todo application.
#[derive(Debug)]
pub struct TodoView {
    context: RenderContext,
    state: Rc<RefCell<TodoList>>,
    list_element: Element,
}

impl TodoView {
    /// Mount a todo app seeded with the given titles.
    ///
    /// # Errors
    ///
    /// Returns an error if any seed title is blank.
    pub fn mount(seed: &[&str]) -> TodoResult<Self> {
        let state = Rc::new(RefCell::new(TodoList::seeded(seed)?));

        let heading = Element::builder("h1").text("todos").build();
        let list_element = Element::builder("ul").class("todo-list").build();
        let count = Element::builder("span").class("todo-count").build();
        let clear_state = Rc::clone(&state);
        let clear = Element::builder("button")
            .class("clear-completed")
            .text("Clear completed")
            .on_click(move || {
                clear_state.borrow_mut().clear_completed();
            })
            .build();

        let root = Element::builder("main")
            .class("todo-app")
            .child(Element::builder("header").child(heading).build())
            .child(list_element.clone())
            .child(
                Element::builder("footer")
                    .class("footer")
                    .child(count.clone())
                    .child(clear.clone())
                    .build(),
            )
            .build();
        let context = RenderContext::new(root);

        let count_state = Rc::clone(&state);
        context.bind_text(&count, move || count_state.borrow().remaining_label());
        let disabled_state = Rc::clone(&state);
        context.bind_disabled(&clear, move || disabled_state.borrow().completed() == 0);

        let view = Self {
            context,
            state,
            list_element,
        };
        let seeded_ids: Vec<u64> = view.state.borrow().items().iter().map(|i| i.id).collect();
        for id in seeded_ids {
            view.mount_row(id);
        }
        Ok(view)
    }

    /// Add an item to the state and mount its row.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed title is empty.
    pub fn add(&self, title: &str) -> TodoResult<u64> {
        let id = self.state.borrow_mut().add(title)?;
        self.mount_row(id);
        Ok(id)
    }

    /// The render context behind the view.
    #[must_use]
    pub const fn context(&self) -> &RenderContext {
        &self.context
    }

    /// A driver rooted at the document.
    #[must_use]
    pub fn driver(&self) -> HeadlessDriver {
        HeadlessDriver::document(&self.context)
    }

    /// Shared handle to the underlying list state.
    #[must_use]
    pub fn state(&self) -> Rc<RefCell<TodoList>> {
        Rc::clone(&self.state)
    }

    /// Build one row: bound title, toggle and destroy buttons, plus a
    /// presence binding that hides the row once its item is gone.
    fn mount_row(&self, id: u64) {
        let title = Element::builder("span").class("title").build();

        let toggle_state = Rc::clone(&self.state);
        let toggle = Element::builder("button")
            .class("toggle")
            .text("toggle")
            .on_click(move || {
                let _ = toggle_state.borrow_mut().toggle(id);
            })
            .build();

        let destroy_state = Rc::clone(&self.state);
        let destroy = Element::builder("button")
            .class("destroy")
            .text("x")
            .on_click(move || {
                let _ = destroy_state.borrow_mut().remove(id);
            })
            .build();

        let row = Element::builder("li")
            .class("todo-item")
            .attr("data-id", id.to_string())
            .child(title.clone())
            .child(toggle)
            .child(destroy)
            .build();
        self.list_element.append_child(row.clone());

        let title_state = Rc::clone(&self.state);
        self.context.bind_text(&title, move || {
            title_state
                .borrow()
                .get(id)
                .map(|item| item.title.clone())
                .unwrap_or_default()
        });

        let mark_state = Rc::clone(&self.state);
        self.context.bind_attr(&row, "data-state", move || {
            mark_state.borrow().get(id).map(|item| {
                if item.done {
                    "done".to_string()
                } else {
                    "active".to_string()
                }
            })
        });

        let present_state = Rc::clone(&self.state);
        self.context
            .bind_present(&row, move || present_state.borrow().get(id).is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_buttons(row: &Element) -> (Element, Element) {
        let children = row.children();
        (children[1].clone(), children[2].clone())
    }

    #[test]
    fn test_mount_builds_one_row_per_seed() {
        let view = TodoView::mount(&["a", "b", "c"]).unwrap();
        assert_eq!(view.list_element.children().len(), 3);
        assert_eq!(view.context().update_passes(), 0);
    }

    #[test]
    fn test_first_pass_paints_titles_and_count() {
        let view = TodoView::mount(&["walk dog"]).unwrap();
        let row = view.list_element.children()[0].clone();
        assert_eq!(row.rendered_text(), "togglex");
        view.context().detect_changes();
        assert!(row.rendered_text().contains("walk dog"));
        assert_eq!(row.attribute("data-state"), Some("active".to_string()));
    }

    #[test]
    fn test_toggle_click_flips_state_and_marker() {
        let view = TodoView::mount(&["a"]).unwrap();
        view.context().detect_changes();
        let row = view.list_element.children()[0].clone();
        let (toggle, _destroy) = row_buttons(&row);

        toggle.click();
        view.context().detect_changes();
        assert_eq!(row.attribute("data-state"), Some("done".to_string()));
        assert_eq!(view.state().borrow().remaining(), 0);
    }

    #[test]
    fn test_destroy_click_hides_row() {
        let view = TodoView::mount(&["a", "b"]).unwrap();
        view.context().detect_changes();
        let row = view.list_element.children()[0].clone();
        let (_toggle, destroy) = row_buttons(&row);

        destroy.click();
        view.context().detect_changes();
        assert!(!row.is_present());
        assert_eq!(view.state().borrow().len(), 1);
        // One present row remains, with its three children.
        assert_eq!(view.list_element.descendants().len(), 4);
    }

    #[test]
    fn test_clear_completed_disabled_until_something_done() {
        let view = TodoView::mount(&["a"]).unwrap();
        view.context().detect_changes();
        let footer = view.context().root().children()[2].clone();
        let clear = footer.children()[1].clone();
        assert!(clear.disabled());

        let row = view.list_element.children()[0].clone();
        let (toggle, _destroy) = row_buttons(&row);
        toggle.click();
        view.context().detect_changes();
        assert!(!clear.disabled());
    }

    #[test]
    fn test_add_mounts_a_live_row() {
        let view = TodoView::mount(&[]).unwrap();
        view.add("later").unwrap();
        view.context().detect_changes();
        assert_eq!(view.list_element.children().len(), 1);
        assert!(view.list_element.rendered_text().contains("later"));
        assert!(view.add("   ").is_err());
    }
}
