//! Widget objects: typed wrappers bound to a scope of the rendered tree.
//!
//! A widget object replaces raw selector lookups in tests with semantic
//! accessors. Concrete widget types embed a [`BaseWidget`] carrying their
//! root-scope driver and declare [`ChildLocator`]s for their sub-elements
//! at construction time; every accessor call re-resolves against the live
//! tree, so widgets stay correct across re-renders without any caching.

use crate::driver::LocatorDriver;
use crate::result::TantearResult;

/// A widget-object type: a named root selector plus a constructor from a
/// resolved root scope.
///
/// Implement by hand or with `#[derive(Widget)]` from the derive crate:
///
/// ```ignore
/// #[derive(Widget)]
/// #[widget(selector = ".counter")]
/// struct CounterWidget<D: LocatorDriver> {
///     base: BaseWidget<D>,
///     #[widget(child = ".count")]
///     count: ChildLocator<D>,
/// }
/// ```
///
/// The root selector is consulted by finders and by `find_widget`
/// composition, never by the constructed instance itself.
pub trait Widget<D: LocatorDriver>: Sized {
    /// Selector identifying which nodes this widget type attaches to.
    const ROOT_SELECTOR: &'static str;

    /// Construct the widget around its resolved root scope.
    fn from_base(base: BaseWidget<D>) -> Self;
}

/// The reusable core every widget object embeds: exactly one driver
/// representing the widget's root scope.
#[derive(Debug, Clone)]
pub struct BaseWidget<D: LocatorDriver> {
    driver: D,
}

impl<D: LocatorDriver> BaseWidget<D> {
    /// Wrap a driver already scoped to the widget's root node(s).
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The scoped driver, for `find_widget` composition and custom
    /// multi-step locator chains.
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// The widget's own root nodes (the scope itself, not descendants).
    pub fn root(&self) -> D::Nodes {
        self.driver.nodes()
    }

    /// Declare a child accessor for `selector`, resolved against the
    /// widget's current root scope on every call.
    pub fn child(&self, selector: impl Into<String>) -> ChildLocator<D> {
        ChildLocator {
            driver: self.driver.clone(),
            selector: selector.into(),
        }
    }
}

/// A declared child accessor: a selector bound to a widget's root driver.
///
/// `resolve` performs a fresh traversal on every invocation and never
/// memoizes, so a locator declared before an interaction observes the
/// post-render tree afterwards. Zero matches resolve to an empty node set;
/// the error surfaces only if a scalar is then read from it.
#[derive(Debug, Clone)]
pub struct ChildLocator<D: LocatorDriver> {
    driver: D,
    selector: String,
}

impl<D: LocatorDriver> ChildLocator<D> {
    /// Resolve the child selector against the current tree state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when the declared selector fails to
    /// parse.
    pub fn resolve(&self) -> TantearResult<D::Nodes> {
        Ok(self.driver.get(&self.selector)?.nodes())
    }

    /// Resolve to a driver instead of a node set, for further narrowing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when the declared selector fails to
    /// parse.
    pub fn scope(&self) -> TantearResult<D> {
        self.driver.get(&self.selector)
    }

    /// The declared child selector text.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }
}
