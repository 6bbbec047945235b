//! Widget discovery: resolve a widget type's root selector into constructed
//! widget objects.
//!
//! The finder is the designated synchronization point between "state
//! changed" and "tree is queryable": every entry point flushes pending
//! updates once (via [`LocatorDriver::stabilize`]) before looking anything
//! up, so lookups always observe a settled tree even when state was mutated
//! outside an interaction call.

use crate::driver::{widget_name, LocatorDriver};
use crate::filter::TextFilter;
use crate::result::{TantearError, TantearResult};
use crate::selector::Selector;
use crate::widget::{BaseWidget, Widget};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Entry point for locating widgets within a whole-tree scope.
///
/// Stateless apart from the root scope it was constructed with. Widgets
/// reach nested lookups through their own driver's `find_widget`
/// capability, so no widget holds a finder reference.
///
/// # Example
///
/// ```ignore
/// let finder = WidgetFinder::new(HeadlessDriver::document(&ctx));
/// let counter: CounterWidget<_> = finder.find()?;
/// let all: Vec<CounterWidget<_>> = finder.find_all()?;
/// ```
#[derive(Debug, Clone)]
pub struct WidgetFinder<D: LocatorDriver> {
    root: D,
}

impl<D: LocatorDriver> WidgetFinder<D> {
    /// Bind a finder to the whole-tree scope.
    pub const fn new(root: D) -> Self {
        Self { root }
    }

    /// The whole-tree scope this finder was constructed with.
    pub const fn root(&self) -> &D {
        &self.root
    }

    /// First widget of type `W` in document order.
    ///
    /// Multiple matches are allowed; the first wins. Zero matches fail.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no node matches `W::ROOT_SELECTOR`,
    /// `InvalidSelector` when that selector fails to parse.
    pub fn find<W: Widget<D>>(&self) -> TantearResult<W> {
        self.root.stabilize()?;
        self.root.find_widget()
    }

    /// First widget of type `W` within a given sub-scope.
    ///
    /// # Errors
    ///
    /// Same as [`find`](Self::find).
    pub fn find_in<W: Widget<D>>(&self, scope: &D) -> TantearResult<W> {
        self.root.stabilize()?;
        scope.find_widget()
    }

    /// First widget of type `W` whose root also matches `selector`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on zero matches, `InvalidSelector` when either
    /// selector fails to parse or the intersection is unsatisfiable.
    pub fn find_with<W: Widget<D>>(&self, selector: &str) -> TantearResult<W> {
        self.root.stabilize()?;
        self.root.find_widget_with(selector)
    }

    /// Every widget of type `W`, in document order. Zero matches yield an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when `W::ROOT_SELECTOR` fails to parse.
    pub fn find_all<W: Widget<D>>(&self) -> TantearResult<Vec<W>> {
        self.root.stabilize()?;
        self.root.find_widgets()
    }

    /// Every widget of type `W` within a given sub-scope.
    ///
    /// # Errors
    ///
    /// Same as [`find_all`](Self::find_all).
    pub fn find_all_in<W: Widget<D>>(&self, scope: &D) -> TantearResult<Vec<W>> {
        self.root.stabilize()?;
        scope.find_widgets()
    }

    /// Every widget of type `W` whose root also matches `selector`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` when either selector fails to parse or
    /// the intersection is unsatisfiable.
    pub fn find_all_with<W: Widget<D>>(&self, selector: &str) -> TantearResult<Vec<W>> {
        self.root.stabilize()?;
        self.root.find_widgets_with(selector)
    }

    /// Start a filtered widget query.
    pub fn query<W: Widget<D>>(&self) -> WidgetQuery<'_, D, W> {
        WidgetQuery {
            finder: self,
            scope: None,
            selector: None,
            text: None,
            _widget: PhantomData,
        }
    }
}

/// Builder for filtered widget discovery.
///
/// # Example
///
/// ```ignore
/// let save: ButtonWidget<_> = finder
///     .query()
///     .matching(".primary")
///     .with_text(TextFilter::contains("Save"))
///     .first()?;
/// ```
pub struct WidgetQuery<'a, D: LocatorDriver, W: Widget<D>> {
    finder: &'a WidgetFinder<D>,
    scope: Option<D>,
    selector: Option<String>,
    text: Option<TextFilter>,
    _widget: PhantomData<W>,
}

impl<D: LocatorDriver, W: Widget<D>> WidgetQuery<'_, D, W> {
    /// Restrict the query to a sub-scope instead of the whole tree.
    #[must_use]
    pub fn within(mut self, scope: &D) -> Self {
        self.scope = Some(scope.clone());
        self
    }

    /// Intersect the widget's root selector with an additional selector.
    #[must_use]
    pub fn matching(mut self, selector: &str) -> Self {
        self.selector = Some(selector.to_string());
        self
    }

    /// Keep only widgets whose rendered root text satisfies `filter`.
    #[must_use]
    pub fn with_text(mut self, filter: TextFilter) -> Self {
        self.text = Some(filter);
        self
    }

    /// All matching widgets, in document order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` for unparseable or unsatisfiable
    /// selectors. Zero matches yield an empty vector.
    pub fn all(self) -> TantearResult<Vec<W>> {
        self.finder.root().stabilize()?;
        let (_, scopes) = self.candidates()?;
        Ok(scopes
            .into_iter()
            .map(|scope| W::from_base(BaseWidget::new(scope)))
            .collect())
    }

    /// The first matching widget.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` on zero matches.
    pub fn first(self) -> TantearResult<W> {
        self.nth(0)
    }

    /// The matching widget at `index` in document order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when fewer than `index + 1` widgets match.
    pub fn nth(self, index: usize) -> TantearResult<W> {
        self.finder.root().stabilize()?;
        let (selector, mut scopes) = self.candidates()?;
        if index < scopes.len() {
            Ok(W::from_base(BaseWidget::new(scopes.swap_remove(index))))
        } else {
            Err(TantearError::not_found(
                widget_name::<W>(),
                selector.to_string(),
            ))
        }
    }

    fn candidates(&self) -> TantearResult<(Selector, Vec<D>)> {
        let root: Selector = W::ROOT_SELECTOR.parse()?;
        let selector = match &self.selector {
            Some(extra) => root.intersect(&extra.parse()?)?,
            None => root,
        };
        let scope = self.scope.as_ref().unwrap_or(self.finder.root());
        debug!(widget = widget_name::<W>(), selector = %selector, scope = %scope.description(), "query");
        let matched = match &self.text {
            Some(filter) => scope.query_filtered(&selector, filter),
            None => scope.query(&selector),
        };
        Ok((selector, matched.scopes()))
    }
}

impl<D: LocatorDriver, W: Widget<D>> fmt::Debug for WidgetQuery<'_, D, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetQuery")
            .field("widget", &widget_name::<W>())
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}
