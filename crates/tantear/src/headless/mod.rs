//! Headless rendering backend.
//!
//! A complete in-process implementation of the driver contract: an
//! element tree built with [`ElementBuilder`], a [`RenderContext`] that
//! re-runs data bindings on demand, and a [`HeadlessDriver`] rooted at
//! the document. No browser, no event loop, no I/O; tests drive the
//! tree synchronously and assert on what widgets observe.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tantear::headless::{Element, HeadlessDriver, RenderContext};
//!
//! let root = Element::builder("div").class("app").build();
//! let ctx = RenderContext::new(root);
//! let driver = HeadlessDriver::document(&ctx);
//! assert_eq!(driver.description(), "document");
//! ```

pub mod context;
pub mod driver;
pub mod element;
pub mod nodes;

pub use context::{RenderContext, TreeSnapshot};
pub use driver::HeadlessDriver;
pub use element::{Element, ElementBuilder};
pub use nodes::HeadlessNodes;
