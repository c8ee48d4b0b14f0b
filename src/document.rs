//! The document contract the manager renders into.
//!
//! DESIGN
//! ======
//! [`PageDocument`] is the narrow slice of the DOM this crate touches: root
//! attributes, lookups by id/selector/class, text, inline style, image source,
//! class toggling, and containment. The browser implementation lives in
//! `web::WebDocument`; [`MemoryDocument`] is a small element tree with just
//! enough selector support (`tag`, `#id`, `.class`, compounds, descendant
//! chains) for the selectors in `PageConfig`.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::BTreeMap;

/// DOM operations used by the preference manager and menu controller.
///
/// Lookups return `None`/empty for missing elements; callers skip them.
pub trait PageDocument {
    /// Handle to an element in this document.
    type Element: Clone;

    /// Attribute on the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&mut self, name: &str, value: &str);

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element matching a CSS selector, in document order.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Every element carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Element>;

    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Set an inline style property. An empty value removes the property.
    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    fn set_src(&mut self, element: &Self::Element, src: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&mut self, element: &Self::Element, class: &str, present: bool);

    /// Whether `node` is `container` or one of its descendants.
    fn contains(&self, container: &Self::Element, node: &Self::Element) -> bool;
}

/// Handle to an element of a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One element of a [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    pub style: BTreeMap<String, String>,
    pub src: Option<String>,
    pub parent: Option<NodeId>,
}

/// In-memory [`PageDocument`]. Elements are kept in insertion order, which is
/// treated as document order.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    root_attributes: BTreeMap<String, String>,
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element described by a compound selector such as
    /// `button#themeToggle.control-btn` under `parent` (or at top level).
    pub fn append(&mut self, parent: Option<NodeId>, markup: &str) -> NodeId {
        let parsed = Compound::parse(markup);
        let node = NodeId(self.elements.len());
        self.elements.push(MemoryElement {
            tag: parsed.tag.unwrap_or_else(|| "div".into()),
            id: parsed.id,
            classes: parsed.classes,
            parent,
            ..MemoryElement::default()
        });
        node
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&MemoryElement> {
        self.elements.get(node.0)
    }

    /// Text content of `node`, empty if the node does not exist.
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).map_or("", |el| el.text.as_str())
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)?.style.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn src(&self, node: NodeId) -> Option<&str> {
        self.element(node)?.src.as_deref()
    }

    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.element(node).and_then(|el| el.parent), |id| {
            self.element(*id).and_then(|el| el.parent)
        })
    }

    fn matches(&self, node: NodeId, chain: &[Compound]) -> bool {
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        let Some(el) = self.element(node) else {
            return false;
        };
        if !last.matches(el) {
            return false;
        }
        // Descendant combinators: each remaining compound must match some
        // ancestor, innermost first.
        let mut pending = rest.iter().rev().peekable();
        for ancestor in self.ancestors(node) {
            let Some(compound) = pending.peek() else {
                break;
            };
            if self.element(ancestor).is_some_and(|el| compound.matches(el)) {
                pending.next();
            }
        }
        pending.peek().is_none()
    }
}

impl PageDocument for MemoryDocument {
    type Element = NodeId;

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes.insert(name.to_owned(), value.to_owned());
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        let chain: Vec<Compound> = selector.split_whitespace().map(Compound::parse).collect();
        (0..self.elements.len())
            .map(NodeId)
            .find(|node| self.matches(*node, &chain))
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        if let Some(el) = self.elements.get_mut(element.0) {
            el.text = text.to_owned();
        }
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: &str) {
        let Some(el) = self.elements.get_mut(element.0) else {
            return;
        };
        if value.is_empty() {
            el.style.remove(property);
        } else {
            el.style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_src(&mut self, element: &NodeId, src: &str) {
        if let Some(el) = self.elements.get_mut(element.0) {
            el.src = Some(src.to_owned());
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.element(*element)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, element: &NodeId, class: &str, present: bool) {
        let Some(el) = self.elements.get_mut(element.0) else {
            return;
        };
        let has = el.classes.iter().any(|c| c == class);
        if present && !has {
            el.classes.push(class.to_owned());
        } else if !present && has {
            el.classes.retain(|c| c != class);
        }
    }

    fn contains(&self, container: &NodeId, node: &NodeId) -> bool {
        container == node || self.ancestors(*node).any(|a| a == *container)
    }
}

/// A compound selector: optional tag, optional id, any number of classes.
#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(raw: &str) -> Self {
        let mut out = Self::default();
        let mut kind = None;
        let mut current = String::new();
        for ch in raw.chars().chain(std::iter::once('.')) {
            if ch == '#' || ch == '.' {
                if !current.is_empty() {
                    match kind {
                        Some('#') => out.id = Some(std::mem::take(&mut current)),
                        Some(_) => out.classes.push(std::mem::take(&mut current)),
                        None => out.tag = Some(std::mem::take(&mut current).to_ascii_lowercase()),
                    }
                }
                kind = Some(ch);
            } else {
                current.push(ch);
            }
        }
        out
    }

    fn matches(&self, el: &MemoryElement) -> bool {
        self.tag.as_ref().is_none_or(|tag| el.tag.eq_ignore_ascii_case(tag))
            && self
                .id
                .as_ref()
                .is_none_or(|id| el.id.as_deref() == Some(id.as_str()))
            && self
                .classes
                .iter()
                .all(|class| el.classes.iter().any(|c| c == class))
    }
}
