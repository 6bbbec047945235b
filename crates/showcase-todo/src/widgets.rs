//! Widget objects for the todo UI.
//!
//! Both widgets use `#[derive(Widget)]`, so their fields double as the
//! locator map. Every accessor re-resolves against the live tree; a
//! widget handle obtained before an interaction stays valid after it.

use tantear::prelude::*;

/// The whole todo application.
#[derive(Debug, Widget)]
#[widget(selector = "main.todo-app")]
pub struct TodoAppWidget<D: LocatorDriver> {
    /// Footer label, e.g. "2 items left".
    #[widget(child = "span.todo-count")]
    count: ChildLocator<D>,
    /// Footer button that drops completed rows.
    #[widget(child = "button.clear-completed")]
    clear_completed: ChildLocator<D>,
    base: BaseWidget<D>,
}

impl<D: LocatorDriver> TodoAppWidget<D> {
    /// The footer's remaining-items label.
    ///
    /// # Errors
    ///
    /// Returns an error if the footer is missing from the tree.
    pub fn remaining_label(&self) -> TantearResult<String> {
        self.count.resolve()?.text()
    }

    /// Whether the clear-completed button is clickable.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing from the tree.
    pub fn can_clear_completed(&self) -> TantearResult<bool> {
        self.clear_completed.resolve()?.enabled()
    }

    /// Click the clear-completed button.
    ///
    /// # Errors
    ///
    /// Returns an error if the button is missing from the tree.
    pub fn clear_completed(&self) -> TantearResult<()> {
        self.clear_completed.resolve()?.click()
    }

    /// Every row currently present, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if row discovery fails.
    pub fn rows(&self) -> TantearResult<Vec<TodoItemWidget<D>>> {
        self.base.driver().find_widgets()
    }

    /// The first row whose title matches exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if no row carries that title.
    pub fn row_titled(&self, title: &str) -> TantearResult<TodoItemWidget<D>> {
        for row in self.rows()? {
            if row.title()? == title {
                return Ok(row);
            }
        }
        Err(TantearError::not_found(
            "TodoItemWidget",
            format!("li.todo-item with title `{title}`"),
        ))
    }

    /// Rows already marked done.
    ///
    /// # Errors
    ///
    /// Returns an error if row discovery fails.
    pub fn completed_rows(&self) -> TantearResult<Vec<TodoItemWidget<D>>> {
        self.base.driver().find_widgets_with("[data-state=done]")
    }
}

/// One todo row.
#[derive(Debug, Widget)]
#[widget(selector = "li.todo-item")]
pub struct TodoItemWidget<D: LocatorDriver> {
    #[widget(child = "span.title")]
    title: ChildLocator<D>,
    #[widget(child = "button.toggle")]
    toggle: ChildLocator<D>,
    #[widget(child = "button.destroy")]
    destroy: ChildLocator<D>,
    base: BaseWidget<D>,
}

impl<D: LocatorDriver> TodoItemWidget<D> {
    /// The row's title text.
    ///
    /// # Errors
    ///
    /// Returns an error if the row vanished from the tree.
    pub fn title(&self) -> TantearResult<String> {
        self.title.resolve()?.text()
    }

    /// Completion state, read from the row's `data-state` marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the row vanished from the tree.
    pub fn is_done(&self) -> TantearResult<bool> {
        Ok(self.base.root().attribute("data-state")? == Some("done".to_string()))
    }

    /// Click the row's toggle button.
    ///
    /// # Errors
    ///
    /// Returns an error if the row vanished from the tree.
    pub fn toggle(&self) -> TantearResult<()> {
        self.toggle.resolve()?.click()
    }

    /// Click the row's destroy button.
    ///
    /// # Errors
    ///
    /// Returns an error if the row vanished from the tree.
    pub fn destroy(&self) -> TantearResult<()> {
        self.destroy.resolve()?.click()
    }
}
