//! Locator-driver capability trait.
//!
//! A driver is a view over some scope of a rendered tree plus the operation
//! set for narrowing that scope and reaching its nodes. Backends implement
//! the parsed-selector primitives (`query`, `query_filtered`,
//! `query_parents`) and the trait provides the string-typed surface and
//! widget discovery on top.

use crate::filter::TextFilter;
use crate::node_set::NodeSet;
use crate::result::{TantearError, TantearResult};
use crate::selector::Selector;
use crate::widget::{BaseWidget, Widget};
use tracing::{debug, trace};

/// Capability for locating nodes within a rendered tree scope and handing
/// out interaction handles.
///
/// Drivers are immutable views: every narrowing operation returns a new
/// driver bound to the narrowed result and leaves `self` untouched. Zero
/// matches narrow to a valid empty scope rather than an error; failure
/// materializes later, at a scalar read (`EmptyScope`) or a required widget
/// lookup (`NotFound`).
///
/// # Example
///
/// ```ignore
/// let items = driver.get(".menu")?.get_by_text("li", "Save")?;
/// assert_eq!(items.nodes().len(), 1);
/// ```
pub trait LocatorDriver: Clone + Sized {
    /// Node-set handle type owned by this driver.
    type Nodes: NodeSet;

    /// New driver scoped to all descendants of the current scope matching
    /// `selector`. Each distinct scope node is visited once; its matches
    /// come out in document order, with the per-node groups concatenated
    /// in scope order.
    fn query(&self, selector: &Selector) -> Self;

    /// Like [`query`](Self::query), additionally filtered to nodes whose
    /// rendered text satisfies `filter`.
    fn query_filtered(&self, selector: &Selector, filter: &TextFilter) -> Self;

    /// New driver scoped to the nearest ancestor matching `selector` for
    /// each node in the current scope. Nodes with no matching ancestor
    /// contribute no entry, so the result can be shorter than the input;
    /// the outcome is deduplicated and in document order.
    fn query_parents(&self, selector: &Selector) -> Self;

    /// The node-set view of the current scope.
    fn nodes(&self) -> Self::Nodes;

    /// One single-node driver per node in the current scope, in order.
    fn scopes(&self) -> Vec<Self>;

    /// Flush pending state changes into the addressable tree.
    ///
    /// Synchronous backends run one update pass; backends over an
    /// asynchronous substrate must drive it to completion before
    /// returning.
    ///
    /// # Errors
    ///
    /// Backend-specific flush failures.
    fn stabilize(&self) -> TantearResult<()>;

    /// Human-readable description of how this scope was narrowed, used in
    /// error messages and trace events.
    fn description(&self) -> String;

    /// Narrow to descendants matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when `selector` fails to parse. Zero
    /// matches are not an error.
    fn get(&self, selector: &str) -> TantearResult<Self> {
        let parsed: Selector = selector.parse()?;
        trace!(selector = %parsed, scope = %self.description(), "get");
        Ok(self.query(&parsed))
    }

    /// Narrow to descendants matching `selector` whose rendered text
    /// contains `text` (case-sensitive substring).
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when `selector` fails to parse.
    fn get_by_text(&self, selector: &str, text: &str) -> TantearResult<Self> {
        let parsed: Selector = selector.parse()?;
        trace!(selector = %parsed, text, scope = %self.description(), "get_by_text");
        Ok(self.query_filtered(&parsed, &TextFilter::contains(text)))
    }

    /// Narrow to descendants matching `selector` whose rendered text
    /// satisfies an arbitrary [`TextFilter`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when `selector` fails to parse.
    fn get_filtered(&self, selector: &str, filter: &TextFilter) -> TantearResult<Self> {
        let parsed: Selector = selector.parse()?;
        trace!(selector = %parsed, filter = %filter, scope = %self.description(), "get_filtered");
        Ok(self.query_filtered(&parsed, filter))
    }

    /// Narrow to the nearest matching ancestor of each scope node.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when `selector` fails to parse. Nodes
    /// with no matching ancestor are dropped, not an error.
    fn parents(&self, selector: &str) -> TantearResult<Self> {
        let parsed: Selector = selector.parse()?;
        trace!(selector = %parsed, scope = %self.description(), "parents");
        Ok(self.query_parents(&parsed))
    }

    /// First widget of type `W` within the current scope.
    ///
    /// Matches `W::ROOT_SELECTOR` against descendants of this scope and
    /// binds `W` to the first match in document order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no descendant matches, `InvalidSelector`
    /// when `W::ROOT_SELECTOR` fails to parse.
    fn find_widget<W: Widget<Self>>(&self) -> TantearResult<W> {
        find_first::<Self, W>(self, None)
    }

    /// Like [`find_widget`](Self::find_widget), with the root selector
    /// intersected with an additional filter selector.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on zero matches, `InvalidSelector` when either
    /// selector fails to parse or the intersection is unsatisfiable.
    fn find_widget_with<W: Widget<Self>>(&self, selector: &str) -> TantearResult<W> {
        find_first::<Self, W>(self, Some(selector))
    }

    /// Every widget of type `W` within the current scope, in document
    /// order. Zero matches yield an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when `W::ROOT_SELECTOR` fails to parse.
    fn find_widgets<W: Widget<Self>>(&self) -> TantearResult<Vec<W>> {
        find_all::<Self, W>(self, None)
    }

    /// Like [`find_widgets`](Self::find_widgets), with an additional filter
    /// selector.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when either selector fails to parse or the
    /// intersection is unsatisfiable.
    fn find_widgets_with<W: Widget<Self>>(&self, selector: &str) -> TantearResult<Vec<W>> {
        find_all::<Self, W>(self, Some(selector))
    }
}

/// Short type name for error messages: `a::b::TodoWidget<D>` -> `TodoWidget`.
pub(crate) fn widget_name<W>() -> &'static str {
    let full = std::any::type_name::<W>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn widget_selector<D: LocatorDriver, W: Widget<D>>(extra: Option<&str>) -> TantearResult<Selector> {
    let root: Selector = W::ROOT_SELECTOR.parse()?;
    match extra {
        Some(extra) => root.intersect(&extra.parse()?),
        None => Ok(root),
    }
}

fn find_first<D: LocatorDriver, W: Widget<D>>(scope: &D, extra: Option<&str>) -> TantearResult<W> {
    let selector = widget_selector::<D, W>(extra)?;
    debug!(widget = widget_name::<W>(), selector = %selector, scope = %scope.description(), "find_widget");
    let matched = scope.query(&selector);
    let first = matched
        .scopes()
        .into_iter()
        .next()
        .ok_or_else(|| TantearError::not_found(widget_name::<W>(), selector.to_string()))?;
    Ok(W::from_base(BaseWidget::new(first)))
}

fn find_all<D: LocatorDriver, W: Widget<D>>(
    scope: &D,
    extra: Option<&str>,
) -> TantearResult<Vec<W>> {
    let selector = widget_selector::<D, W>(extra)?;
    debug!(widget = widget_name::<W>(), selector = %selector, scope = %scope.description(), "find_widgets");
    Ok(scope
        .query(&selector)
        .scopes()
        .into_iter()
        .map(|scope| W::from_base(BaseWidget::new(scope)))
        .collect())
}
