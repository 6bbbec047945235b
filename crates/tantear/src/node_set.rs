//! Node-set handle: zero-or-more located nodes addressed as one unit.

use crate::result::TantearResult;

/// An ordered sequence of located rendered nodes, owned by a driver.
///
/// Scalar reads (`text`, `value`, `enabled`, `attribute`) are defined over
/// the first node and fail with `EmptyScope` when the sequence is empty.
/// Interactions (`click`, `blur`, `clear`) apply to every node in the
/// sequence and then trigger exactly one synchronous update pass on the
/// owning render context, so any later read through any handle derived
/// from the same context observes post-render state. Handles resolved
/// before an interaction go stale; re-resolve for fresh state.
pub trait NodeSet: Clone {
    /// Number of nodes in the set.
    fn len(&self) -> usize;

    /// True when the set holds no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rendered text of the first node's subtree.
    ///
    /// # Errors
    ///
    /// Returns `EmptyScope` when the set is empty.
    fn text(&self) -> TantearResult<String>;

    /// Input value of the first node.
    ///
    /// # Errors
    ///
    /// Returns `EmptyScope` when the set is empty.
    fn value(&self) -> TantearResult<String>;

    /// Whether the first node is enabled (not disabled).
    ///
    /// # Errors
    ///
    /// Returns `EmptyScope` when the set is empty.
    fn enabled(&self) -> TantearResult<bool>;

    /// Attribute of the first node; `Ok(None)` when the attribute is absent.
    ///
    /// # Errors
    ///
    /// Returns `EmptyScope` when the set is empty.
    fn attribute(&self, name: &str) -> TantearResult<Option<String>>;

    /// Click every node in the set, then run one update pass.
    ///
    /// # Errors
    ///
    /// Backend-specific dispatch failures.
    fn click(&self) -> TantearResult<()>;

    /// Blur every node in the set, then run one update pass.
    ///
    /// # Errors
    ///
    /// Backend-specific dispatch failures.
    fn blur(&self) -> TantearResult<()>;

    /// Clear the input value of every node in the set, then run one update
    /// pass.
    ///
    /// # Errors
    ///
    /// Backend-specific dispatch failures.
    fn clear(&self) -> TantearResult<()>;

    /// Single-node subset at `index`, or `None` past the end.
    fn nth(&self, index: usize) -> Option<Self>;

    /// Split into one single-node set per node, preserving order.
    fn to_array(&self) -> Vec<Self> {
        (0..self.len()).filter_map(|i| self.nth(i)).collect()
    }

    /// Lazy, restartable iteration over single-node sets, in order.
    ///
    /// # Example
    ///
    /// ```ignore
    /// for item in rows.iter() {
    ///     println!("{}", item.text()?);
    /// }
    /// ```
    fn iter(&self) -> NodeSetIter<'_, Self> {
        NodeSetIter {
            set: self,
            index: 0,
        }
    }
}

/// Iterator over single-node subsets of a [`NodeSet`].
///
/// Each call to [`NodeSet::iter`] starts a fresh pass; items are built on
/// demand, bounded by [`NodeSet::len`].
#[derive(Debug)]
pub struct NodeSetIter<'a, S: NodeSet> {
    set: &'a S,
    index: usize,
}

impl<S: NodeSet> Iterator for NodeSetIter<'_, S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.set.nth(self.index);
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<S: NodeSet> ExactSizeIterator for NodeSetIter<'_, S> {}
