//! Showcase Todo - Widget-Object Testing Demo
//!
//! A small todo-list application mounted on Tantear's headless backend,
//! with its UI covered entirely through widget objects. The crate shows
//! the intended layering:
//!
//! - `model`: plain state, no rendering
//! - `view`: the element tree, its handlers, and its bindings
//! - `widgets`: derived widget objects the tests talk to
//!
//! # Example
//!
//! ```rust
//! use showcase_todo::prelude::*;
//! use tantear::prelude::*;
//!
//! let view = TodoView::mount(&["walk the dog"]).unwrap();
//! let finder = WidgetFinder::new(view.driver());
//! let app: TodoAppWidget<HeadlessDriver> = finder.find().unwrap();
//!
//! assert_eq!(app.remaining_label().unwrap(), "1 item left");
//! app.rows().unwrap()[0].toggle().unwrap();
//! assert_eq!(app.remaining_label().unwrap(), "0 items left");
//! ```

// Allow common test patterns in this showcase crate
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod model;
pub mod view;
pub mod widgets;


/// Prelude for convenient imports
pub mod prelude {
    pub use crate::model::{TodoError, TodoItem, TodoList, TodoResult};
    pub use crate::view::TodoView;
    pub use crate::widgets::{TodoAppWidget, TodoItemWidget};
}
