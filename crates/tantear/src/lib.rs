//! Tantear: Widget-Object Testing for Rendered UI Trees
//!
//! Tantear (Spanish: "to feel out/probe") layers typed widget objects
//! over a rendered UI tree, so tests talk to a `CounterWidget` or a
//! `TodoItemWidget` instead of raw selectors. Widgets resolve their
//! nodes lazily through an immutable [`LocatorDriver`], which means a
//! widget handle stays valid across re-renders and always reads the
//! current tree.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    TANTEAR Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Widget     │    │ Locator    │    │ Rendered   │            │
//! │   │ Objects    │───►│ Driver     │───►│ Tree       │            │
//! │   │ (typed)    │    │ (scoped)   │    │ (headless) │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use tantear::prelude::*;
//!
//! #[derive(Widget)]
//! #[widget(selector = ".counter")]
//! struct CounterWidget<D: LocatorDriver> {
//!     #[widget(child = ".count")]
//!     count: ChildLocator<D>,
//!     #[widget(child = "button.increment")]
//!     increment: ChildLocator<D>,
//!     base: BaseWidget<D>,
//! }
//!
//! let finder = WidgetFinder::new(HeadlessDriver::document(&ctx));
//! let counter: CounterWidget<_> = finder.find()?;
//! counter.increment.resolve()?.click()?;
//! assert_eq!(counter.count.resolve()?.text()?, "1");
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]
// Allow large stack arrays/frames in tests (e.g., fixture tree construction)
#![cfg_attr(test, allow(clippy::large_stack_arrays, clippy::large_stack_frames))]

/// Locator Driver Contract
///
/// Capability interface between widgets and whatever renders the tree.
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod driver;

/// Text Filters for Content-Based Narrowing
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn
)]
mod filter;

/// Widget Discovery Entry Points
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod finder;

/// Node-Set Handles
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod node_set;

mod result;

/// Selector Parsing and Matching
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod selector;

/// Widget Base Types
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
mod widget;

/// Headless Backend
///
/// In-process element tree with data bindings and an update-pass
/// counter; the reference implementation of the driver contract.
#[cfg(feature = "headless")]
#[allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::doc_markdown
)]
pub mod headless;

pub use driver::LocatorDriver;
pub use filter::TextFilter;
pub use finder::{WidgetFinder, WidgetQuery};
#[cfg(feature = "headless")]
pub use headless::{
    Element, ElementBuilder, HeadlessDriver, HeadlessNodes, RenderContext, TreeSnapshot,
};
pub use node_set::{NodeSet, NodeSetIter};
pub use result::{TantearError, TantearResult};
pub use selector::{Selector, SelectorTarget};
pub use widget::{BaseWidget, ChildLocator, Widget};

// Re-export the derive macro when the `derive` feature is enabled
#[cfg(feature = "derive")]
pub use tantear_derive::Widget;

/// Everything a widget-object test usually needs.
pub mod prelude {
    pub use super::driver::LocatorDriver;
    pub use super::filter::TextFilter;
    pub use super::finder::{WidgetFinder, WidgetQuery};
    #[cfg(feature = "headless")]
    pub use super::headless::{
        Element, ElementBuilder, HeadlessDriver, HeadlessNodes, RenderContext, TreeSnapshot,
    };
    pub use super::node_set::{NodeSet, NodeSetIter};
    pub use super::result::{TantearError, TantearResult};
    pub use super::selector::{Selector, SelectorTarget};
    pub use super::widget::{BaseWidget, ChildLocator, Widget};
    #[cfg(feature = "derive")]
    pub use tantear_derive::Widget;
}
