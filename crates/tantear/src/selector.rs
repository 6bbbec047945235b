//! Selector parsing and matching for element queries.
//!
//! Selectors are parsed once into a structured form and matched against any
//! node type implementing [`SelectorTarget`]. The grammar is a small subset
//! of CSS: tag names, `#id`, `.class`, `[attr]` / `[attr=value]` predicates,
//! compound combinations of those, whitespace descendant combinators, and
//! `,`-separated alternatives.

use crate::result::{TantearError, TantearResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Node facts a selector can be matched against.
///
/// Implemented by each rendering backend's node handle. Matching never
/// mutates the target; `parent` is only consulted for descendant chains.
pub trait SelectorTarget {
    /// Element tag name.
    fn tag_name(&self) -> String;

    /// Element id, if any.
    fn id(&self) -> Option<String>;

    /// True when the element carries the given class.
    fn has_class(&self, class: &str) -> bool;

    /// Attribute value by name.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Parent element, if any.
    fn parent(&self) -> Option<Self>
    where
        Self: Sized;
}

/// One `[attr]` or `[attr=value]` predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AttrPredicate {
    name: String,
    value: Option<String>,
}

/// A compound selector: all constituents must match one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrPredicate>,
}

impl Compound {
    fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        if let Some(tag) = &self.tag {
            if target.tag_name() != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if target.id().as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| target.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|attr| match &attr.value {
            Some(expected) => target.attribute(&attr.name).as_deref() == Some(expected.as_str()),
            None => target.attribute(&attr.name).is_some(),
        })
    }

    /// Conjunction of two compounds. `None` when the pair is unsatisfiable
    /// (conflicting tags, ids, or attribute values).
    fn merge(&self, other: &Self) -> Option<Self> {
        let tag = match (&self.tag, &other.tag) {
            (Some(a), Some(b)) if a != b => return None,
            (Some(a), _) => Some(a.clone()),
            (None, b) => b.clone(),
        };
        let id = match (&self.id, &other.id) {
            (Some(a), Some(b)) if a != b => return None,
            (Some(a), _) => Some(a.clone()),
            (None, b) => b.clone(),
        };

        let mut classes = self.classes.clone();
        for class in &other.classes {
            if !classes.contains(class) {
                classes.push(class.clone());
            }
        }

        let mut attrs: BTreeMap<String, Option<String>> = BTreeMap::new();
        for attr in self.attrs.iter().chain(&other.attrs) {
            let existing = attrs.get(&attr.name).cloned();
            match existing {
                Some(Some(value)) => match &attr.value {
                    Some(incoming) if *incoming != value => return None,
                    _ => {}
                },
                Some(None) | None => {
                    attrs.insert(attr.name.clone(), attr.value.clone());
                }
            }
        }
        let attrs = attrs
            .into_iter()
            .map(|(name, value)| AttrPredicate { name, value })
            .collect();

        Some(Self {
            tag,
            id,
            classes,
            attrs,
        })
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
            wrote = true;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
            wrote = true;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
            wrote = true;
        }
        for attr in &self.attrs {
            match &attr.value {
                None => write!(f, "[{}]", attr.name)?,
                Some(value) if !value.is_empty() && value.chars().all(Parser::is_ident_char) => {
                    write!(f, "[{}={}]", attr.name, value)?;
                }
                Some(value) if !value.contains('"') => write!(f, "[{}=\"{}\"]", attr.name, value)?,
                Some(value) => write!(f, "[{}='{}']", attr.name, value)?,
            }
            wrote = true;
        }
        if !wrote {
            write!(f, "*")?;
        }
        Ok(())
    }
}

/// A descendant chain: the last compound matches the node itself, earlier
/// compounds must match ancestors in order (gaps allowed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Chain {
    parts: Vec<Compound>,
}

impl Chain {
    fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(target) {
            return false;
        }
        let mut remaining = ancestors;
        let mut cursor = target.parent();
        while let Some(node) = cursor {
            match remaining.split_last() {
                Some((nearest, rest)) => {
                    if nearest.matches(&node) {
                        remaining = rest;
                    }
                }
                None => break,
            }
            cursor = node.parent();
        }
        remaining.is_empty()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// A parsed selector: one or more descendant chains joined by `,`.
///
/// Invariant: a `Selector` always holds at least one chain; parsing and
/// intersection reject inputs that would leave nothing to match.
///
/// # Example
///
/// ```ignore
/// let selector: Selector = "ul.menu li.item, #fallback".parse()?;
/// assert!(selector.matches(&some_node));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    chains: Vec<Chain>,
}

impl Selector {
    /// Parse selector text.
    ///
    /// # Errors
    ///
    /// Returns [`TantearError::InvalidSelector`] naming the byte offset and
    /// reason when the text does not conform to the grammar.
    pub fn parse(input: &str) -> TantearResult<Self> {
        let mut parser = Parser { input, pos: 0 };
        parser.parse_selector()
    }

    /// Selector matching any element with the given tag name.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::single(Compound {
            tag: Some(name.into()),
            ..Compound::default()
        })
    }

    /// Selector matching the element with the given id.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::single(Compound {
            id: Some(id.into()),
            ..Compound::default()
        })
    }

    /// Selector matching any element carrying the given class.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::single(Compound {
            classes: vec![name.into()],
            ..Compound::default()
        })
    }

    /// Selector matching on an attribute, optionally with a required value.
    #[must_use]
    pub fn attribute(name: impl Into<String>, value: Option<&str>) -> Self {
        Self::single(Compound {
            attrs: vec![AttrPredicate {
                name: name.into(),
                value: value.map(ToString::to_string),
            }],
            ..Compound::default()
        })
    }

    /// Selector matching `[data-test-id=value]`.
    #[must_use]
    pub fn test_id(value: impl Into<String>) -> Self {
        Self::attribute("data-test-id", Some(&value.into()))
    }

    /// Selector matching every element.
    #[must_use]
    pub fn universal() -> Self {
        Self::single(Compound::default())
    }

    fn single(compound: Compound) -> Self {
        Self {
            chains: vec![Chain {
                parts: vec![compound],
            }],
        }
    }

    /// True when the selector matches the given node.
    ///
    /// Descendant chains consult the node's full ancestor path, so a scoped
    /// query can match against structure above its scope root, mirroring the
    /// usual `querySelectorAll` behavior.
    pub fn matches<T: SelectorTarget>(&self, target: &T) -> bool {
        self.chains.iter().any(|chain| chain.matches(target))
    }

    /// Conjunction of this selector with an additional filter.
    ///
    /// Used when a widget's root selector is combined with a caller-supplied
    /// filter. The filter must consist of simple compounds (no descendant
    /// combinators); each alternative of `self` is merged with each filter
    /// compound.
    ///
    /// # Errors
    ///
    /// Returns [`TantearError::InvalidSelector`] when the filter contains a
    /// descendant combinator, or when every merged pair is unsatisfiable
    /// (e.g. conflicting tag names).
    pub fn intersect(&self, filter: &Self) -> TantearResult<Self> {
        for chain in &filter.chains {
            if chain.parts.len() != 1 {
                return Err(TantearError::InvalidSelector {
                    input: filter.to_string(),
                    position: 0,
                    reason: "filter selector must not contain descendant combinators".to_string(),
                });
            }
        }

        let mut chains = Vec::new();
        for base in &self.chains {
            for chain in &filter.chains {
                let Some((last, ancestors)) = base.parts.split_last() else {
                    continue;
                };
                if let Some(merged) = last.merge(&chain.parts[0]) {
                    let mut parts = ancestors.to_vec();
                    parts.push(merged);
                    chains.push(Chain { parts });
                }
            }
        }

        if chains.is_empty() {
            return Err(TantearError::InvalidSelector {
                input: format!("{self}, {filter}"),
                position: 0,
                reason: "unsatisfiable intersection".to_string(),
            });
        }
        Ok(Self { chains })
    }
}

impl FromStr for Selector {
    type Err = TantearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.chains.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{chain}")?;
        }
        Ok(())
    }
}

/// Hand-rolled recursive-descent parser over the selector grammar.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
        self.pos - start
    }

    fn error(&self, reason: &str) -> TantearError {
        TantearError::InvalidSelector {
            input: self.input.to_string(),
            position: self.pos,
            reason: reason.to_string(),
        }
    }

    fn is_ident_char(c: char) -> bool {
        c.is_alphanumeric() || c == '-' || c == '_'
    }

    fn parse_ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if Self::is_ident_char(c)) {
            self.bump();
        }
        self.input[start..self.pos].to_string()
    }

    fn parse_attr_value(&mut self) -> TantearResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let start = self.pos;
                while matches!(self.peek(), Some(c) if c != quote) {
                    self.bump();
                }
                if self.peek() != Some(quote) {
                    return Err(self.error("unterminated quoted value"));
                }
                let value = self.input[start..self.pos].to_string();
                self.bump();
                Ok(value)
            }
            _ => {
                let value = self.parse_ident();
                if value.is_empty() {
                    return Err(self.error("empty attribute value"));
                }
                Ok(value)
            }
        }
    }

    fn parse_compound(&mut self) -> TantearResult<Compound> {
        let mut compound = Compound::default();
        let mut any = false;

        match self.peek() {
            Some('*') => {
                self.bump();
                any = true;
            }
            Some(c) if Self::is_ident_char(c) => {
                compound.tag = Some(self.parse_ident());
                any = true;
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    let id = self.parse_ident();
                    if id.is_empty() {
                        return Err(self.error("empty id"));
                    }
                    compound.id = Some(id);
                }
                Some('.') => {
                    self.bump();
                    let class = self.parse_ident();
                    if class.is_empty() {
                        return Err(self.error("empty class name"));
                    }
                    compound.classes.push(class);
                }
                Some('[') => {
                    self.bump();
                    self.skip_ws();
                    let name = self.parse_ident();
                    if name.is_empty() {
                        return Err(self.error("empty attribute name"));
                    }
                    self.skip_ws();
                    let value = if self.peek() == Some('=') {
                        self.bump();
                        self.skip_ws();
                        Some(self.parse_attr_value()?)
                    } else {
                        None
                    };
                    self.skip_ws();
                    if self.peek() != Some(']') {
                        return Err(self.error("unterminated attribute selector"));
                    }
                    self.bump();
                    compound.attrs.push(AttrPredicate { name, value });
                }
                _ => break,
            }
            any = true;
        }

        if !any {
            return Err(self.error("expected tag, `*`, `#id`, `.class`, or `[attr]`"));
        }
        Ok(compound)
    }

    fn parse_chain(&mut self) -> TantearResult<Chain> {
        let mut parts = vec![self.parse_compound()?];
        loop {
            let ws = self.skip_ws();
            match self.peek() {
                None | Some(',') => break,
                Some(c)
                    if ws > 0
                        && (Self::is_ident_char(c) || matches!(c, '*' | '#' | '.' | '[')) =>
                {
                    parts.push(self.parse_compound()?);
                }
                Some(_) => return Err(self.error("unexpected character")),
            }
        }
        Ok(Chain { parts })
    }

    fn parse_selector(&mut self) -> TantearResult<Selector> {
        self.skip_ws();
        if self.peek().is_none() {
            return Err(self.error("empty selector"));
        }
        let mut chains = vec![self.parse_chain()?];
        while self.peek() == Some(',') {
            self.bump();
            self.skip_ws();
            if self.peek().is_none() {
                return Err(self.error("trailing comma"));
            }
            chains.push(self.parse_chain()?);
        }
        Ok(Selector { chains })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    /// Minimal in-test node for exercising matching without a backend.
    #[derive(Clone)]
    struct FakeNode {
        tag: String,
        id: Option<String>,
        classes: Vec<String>,
        attrs: Vec<(String, String)>,
        parent: Option<Box<FakeNode>>,
    }

    impl FakeNode {
        fn new(tag: &str) -> Self {
            Self {
                tag: tag.to_string(),
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
                parent: None,
            }
        }

        fn with_class(mut self, class: &str) -> Self {
            self.classes.push(class.to_string());
            self
        }

        fn with_id(mut self, id: &str) -> Self {
            self.id = Some(id.to_string());
            self
        }

        fn with_attr(mut self, name: &str, value: &str) -> Self {
            self.attrs.push((name.to_string(), value.to_string()));
            self
        }

        fn under(mut self, parent: FakeNode) -> Self {
            self.parent = Some(Box::new(parent));
            self
        }
    }

    impl SelectorTarget for FakeNode {
        fn tag_name(&self) -> String {
            self.tag.clone()
        }

        fn id(&self) -> Option<String> {
            self.id.clone()
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.iter().any(|c| c == class)
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone())
        }

        fn parent(&self) -> Option<Self> {
            self.parent.as_deref().cloned()
        }
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn test_parse_tag() {
            let sel = Selector::parse("button").unwrap();
            assert_eq!(sel.to_string(), "button");
        }

        #[test]
        fn test_parse_id() {
            let sel = Selector::parse("#save").unwrap();
            assert_eq!(sel.to_string(), "#save");
        }

        #[test]
        fn test_parse_class() {
            let sel = Selector::parse(".primary").unwrap();
            assert_eq!(sel.to_string(), ".primary");
        }

        #[test]
        fn test_parse_compound() {
            let sel = Selector::parse("button.primary.large#save").unwrap();
            assert_eq!(sel.to_string(), "button#save.primary.large");
        }

        #[test]
        fn test_parse_bare_attribute() {
            let sel = Selector::parse("[disabled]").unwrap();
            assert_eq!(sel.to_string(), "[disabled]");
        }

        #[test]
        fn test_parse_attribute_value() {
            let sel = Selector::parse("[data-role=menu]").unwrap();
            assert_eq!(sel.to_string(), "[data-role=menu]");
        }

        #[test]
        fn test_parse_quoted_attribute_value() {
            let sel = Selector::parse("[title=\"hello world\"]").unwrap();
            assert_eq!(sel.to_string(), "[title=\"hello world\"]");
        }

        #[test]
        fn test_parse_descendant_chain() {
            let sel = Selector::parse("ul.menu  li.item").unwrap();
            assert_eq!(sel.to_string(), "ul.menu li.item");
        }

        #[test]
        fn test_parse_union() {
            let sel = Selector::parse(".a,.b , .c").unwrap();
            assert_eq!(sel.to_string(), ".a, .b, .c");
        }

        #[test]
        fn test_parse_universal() {
            let sel = Selector::parse("*").unwrap();
            assert_eq!(sel.to_string(), "*");
        }

        #[test]
        fn test_universal_with_class_normalizes() {
            let sel = Selector::parse("*.item").unwrap();
            assert_eq!(sel.to_string(), ".item");
        }

        #[test]
        fn test_parse_surrounding_whitespace() {
            let sel = Selector::parse("  .item  ").unwrap();
            assert_eq!(sel.to_string(), ".item");
        }

        #[test]
        fn test_reject_empty() {
            assert!(matches!(
                Selector::parse(""),
                Err(TantearError::InvalidSelector { .. })
            ));
            assert!(matches!(
                Selector::parse("   "),
                Err(TantearError::InvalidSelector { .. })
            ));
        }

        #[test]
        fn test_reject_empty_class() {
            assert!(Selector::parse("div.").is_err());
        }

        #[test]
        fn test_reject_empty_id() {
            assert!(Selector::parse("#").is_err());
        }

        #[test]
        fn test_reject_unterminated_attribute() {
            assert!(Selector::parse("[data-role").is_err());
            assert!(Selector::parse("[data-role=menu").is_err());
        }

        #[test]
        fn test_reject_unterminated_quote() {
            assert!(Selector::parse("[title=\"oops]").is_err());
        }

        #[test]
        fn test_reject_unsupported_combinator() {
            assert!(Selector::parse("div > span").is_err());
        }

        #[test]
        fn test_reject_trailing_comma() {
            assert!(Selector::parse(".a,").is_err());
        }

        #[test]
        fn test_error_carries_position() {
            let err = Selector::parse("div.").unwrap_err();
            match err {
                TantearError::InvalidSelector { position, .. } => assert_eq!(position, 4),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_display_reparses_to_same_selector() {
            for input in [
                "button",
                "#save",
                ".primary",
                "div#root.panel[data-role=menu]",
                "ul.menu li.item",
                ".a, .b",
                "*",
                "[title=\"hello world\"]",
            ] {
                let parsed = Selector::parse(input).unwrap();
                let reparsed = Selector::parse(&parsed.to_string()).unwrap();
                assert_eq!(parsed, reparsed, "round-trip failed for {input}");
            }
        }

        #[test]
        fn test_constructors_display() {
            assert_eq!(Selector::tag("button").to_string(), "button");
            assert_eq!(Selector::id("save").to_string(), "#save");
            assert_eq!(Selector::class("primary").to_string(), ".primary");
            assert_eq!(
                Selector::attribute("data-role", Some("menu")).to_string(),
                "[data-role=menu]"
            );
            assert_eq!(
                Selector::test_id("login").to_string(),
                "[data-test-id=login]"
            );
            assert_eq!(Selector::universal().to_string(), "*");
        }
    }

    mod match_tests {
        use super::*;

        #[test]
        fn test_tag_match() {
            let node = FakeNode::new("button");
            assert!(Selector::parse("button").unwrap().matches(&node));
            assert!(!Selector::parse("input").unwrap().matches(&node));
        }

        #[test]
        fn test_class_match() {
            let node = FakeNode::new("button").with_class("primary");
            assert!(Selector::parse(".primary").unwrap().matches(&node));
            assert!(!Selector::parse(".secondary").unwrap().matches(&node));
        }

        #[test]
        fn test_id_match() {
            let node = FakeNode::new("div").with_id("root");
            assert!(Selector::parse("#root").unwrap().matches(&node));
            assert!(!Selector::parse("#other").unwrap().matches(&node));
        }

        #[test]
        fn test_attribute_match() {
            let node = FakeNode::new("div").with_attr("data-role", "menu");
            assert!(Selector::parse("[data-role]").unwrap().matches(&node));
            assert!(Selector::parse("[data-role=menu]").unwrap().matches(&node));
            assert!(!Selector::parse("[data-role=nav]").unwrap().matches(&node));
            assert!(!Selector::parse("[missing]").unwrap().matches(&node));
        }

        #[test]
        fn test_compound_requires_all_parts() {
            let node = FakeNode::new("button").with_class("primary").with_id("go");
            assert!(Selector::parse("button#go.primary").unwrap().matches(&node));
            assert!(!Selector::parse("button#go.missing").unwrap().matches(&node));
        }

        #[test]
        fn test_descendant_chain_with_gap() {
            let root = FakeNode::new("div").with_class("menu");
            let middle = FakeNode::new("ul").under(root);
            let leaf = FakeNode::new("li").with_class("item").under(middle);
            assert!(Selector::parse(".menu li.item").unwrap().matches(&leaf));
            assert!(Selector::parse(".menu ul li").unwrap().matches(&leaf));
            assert!(!Selector::parse(".sidebar li.item").unwrap().matches(&leaf));
        }

        #[test]
        fn test_descendant_chain_order_matters() {
            let root = FakeNode::new("ul");
            let leaf = FakeNode::new("div").with_class("menu").under(root);
            // "ul" is an ancestor of ".menu", not the other way around
            assert!(Selector::parse("ul .menu").unwrap().matches(&leaf));
            assert!(!Selector::parse(".menu ul").unwrap().matches(&leaf));
        }

        #[test]
        fn test_union_matches_any_alternative() {
            let node = FakeNode::new("span").with_class("b");
            assert!(Selector::parse(".a, .b").unwrap().matches(&node));
        }

        #[test]
        fn test_universal_matches_everything() {
            assert!(Selector::universal().matches(&FakeNode::new("anything")));
        }
    }

    mod intersect_tests {
        use super::*;

        #[test]
        fn test_intersect_tag_and_class() {
            let base = Selector::parse("button").unwrap();
            let filter = Selector::parse(".primary").unwrap();
            let merged = base.intersect(&filter).unwrap();
            assert_eq!(merged.to_string(), "button.primary");

            let node = FakeNode::new("button").with_class("primary");
            assert!(merged.matches(&node));
            assert!(!merged.matches(&FakeNode::new("button")));
        }

        #[test]
        fn test_intersect_preserves_ancestors() {
            let base = Selector::parse(".menu li").unwrap();
            let filter = Selector::parse(".selected").unwrap();
            let merged = base.intersect(&filter).unwrap();
            assert_eq!(merged.to_string(), ".menu li.selected");
        }

        #[test]
        fn test_intersect_attribute_refinement() {
            let base = Selector::parse("[data-role]").unwrap();
            let filter = Selector::parse("[data-role=menu]").unwrap();
            let merged = base.intersect(&filter).unwrap();
            assert_eq!(merged.to_string(), "[data-role=menu]");
        }

        #[test]
        fn test_intersect_union_filter() {
            let base = Selector::parse("li").unwrap();
            let filter = Selector::parse(".a, .b").unwrap();
            let merged = base.intersect(&filter).unwrap();
            assert_eq!(merged.to_string(), "li.a, li.b");
        }

        #[test]
        fn test_intersect_conflicting_tags_fails() {
            let base = Selector::parse("button").unwrap();
            let filter = Selector::parse("input").unwrap();
            assert!(base.intersect(&filter).is_err());
        }

        #[test]
        fn test_intersect_rejects_descendant_filter() {
            let base = Selector::parse("button").unwrap();
            let filter = Selector::parse("div span").unwrap();
            assert!(base.intersect(&filter).is_err());
        }
    }
}
