//! Markup tree adapter over `scraper`.
//!
//! The engine never touches html5ever or the arena directly; it goes through
//! [`Document`] for navigation and mutation and through [`Matcher`] for
//! selector tests. Element identity is the arena [`ElementId`], which stays
//! valid after the node it names has been detached.

use ego_tree::{NodeRef, Tree};
use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, Namespace, QualName};
use scraper::{ElementRef, Html, HtmlTreeSink, Node, Selector};

use crate::error::{EngineError, Result};

/// Stable identity of a node for the lifetime of one [`Document`].
pub type ElementId = ego_tree::NodeId;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// A parsed HTML document owned by one `parse` call.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document.
    ///
    /// html5ever recovers from malformed input, so this never fails; text
    /// outside any element still ends up inside `<body>`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// The element the walk starts at: `<body>`, or the root element for
    /// documents without one.
    #[must_use]
    pub fn walk_root(&self) -> ElementId {
        let root = self.html.root_element();
        child_elements(root)
            .find(|el| el.value().name() == "body")
            .unwrap_or(root)
            .id()
    }

    /// Look up an element by id. Returns `None` for non-element nodes.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    /// Whether the node is still reachable from the document root.
    #[must_use]
    pub fn is_attached(&self, id: ElementId) -> bool {
        let root = self.html.tree.root().id();
        match self.html.tree.get(id) {
            Some(node) if node.id() == root => true,
            Some(node) => node.ancestors().last().is_some_and(|top| top.id() == root),
            None => false,
        }
    }

    /// Detach a node together with its subtree.
    pub fn remove(&mut self, id: ElementId) {
        if let Some(mut node) = self.html.tree.get_mut(id) {
            node.detach();
        }
    }

    /// Replace a node in place with freshly parsed markup.
    ///
    /// The markup is parsed with the target's parent as context element, so
    /// table rows, cells and foreign content keep their tags. Its top-level
    /// nodes take the target's position in order. Empty markup leaves
    /// nothing behind.
    pub fn replace_with_markup(&mut self, id: ElementId, markup: &str) {
        let fragment = self.parse_fragment_at(id, markup);
        for node in fragment.root_element().children() {
            let grafted = graft(&mut self.html.tree, node);
            if let Some(mut target) = self.html.tree.get_mut(id) {
                target.insert_id_before(grafted);
            }
        }
        self.remove(id);
    }

    /// Parse markup as children of the node's parent, falling back to a
    /// `<body>` context for nodes without an element parent.
    fn parse_fragment_at(&self, id: ElementId, markup: &str) -> Html {
        let parent = self
            .html
            .tree
            .get(id)
            .and_then(|node| node.parent())
            .and_then(ElementRef::wrap);

        let (context, attrs) = match parent {
            Some(parent) => {
                let element = parent.value();
                let attrs = element
                    .attrs
                    .iter()
                    .map(|(name, value)| Attribute {
                        name: name.clone(),
                        value: value.clone(),
                    })
                    .collect();
                (element.name.clone(), attrs)
            }
            None => {
                let body = QualName::new(None, Namespace::from(HTML_NAMESPACE), "body".into());
                (body, Vec::new())
            }
        };

        driver::parse_fragment(
            HtmlTreeSink::new(Html::new_fragment()),
            ParseOpts::default(),
            context,
            attrs,
        )
        .one(markup)
    }

    /// Serialize the whole document.
    #[must_use]
    pub fn html(&self) -> String {
        self.html.html()
    }

    /// Serialize the children of the walk root.
    #[must_use]
    pub fn body_html(&self) -> String {
        self.element(self.walk_root())
            .map(|body| body.inner_html())
            .unwrap_or_default()
    }
}

/// Copy a node from another tree into `tree` as a detached subtree.
fn graft(tree: &mut Tree<Node>, source: NodeRef<'_, Node>) -> ElementId {
    let id = tree.orphan(source.value().clone()).id();
    for child in source.children() {
        let child_id = graft(tree, child);
        if let Some(mut parent) = tree.get_mut(id) {
            parent.append_id(child_id);
        }
    }
    id
}

/// A compiled CSS selector together with its source text.
#[derive(Debug, Clone)]
pub struct Matcher {
    source: String,
    selector: Selector,
}

impl Matcher {
    /// Compile a selector string.
    ///
    /// # Errors
    /// Returns `InvalidSelector` if the string is not a valid CSS selector.
    pub fn compile(selector: &str) -> Result<Self> {
        let compiled = Selector::parse(selector).map_err(|e| EngineError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            source: selector.to_string(),
            selector: compiled,
        })
    }

    /// Test an element against the selector.
    #[must_use]
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        self.selector.matches(element)
    }

    /// The selector as it was registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Iterate the element children of an element, skipping text and comments.
pub fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Rendered text of an element: descendant text with whitespace collapsed.
#[must_use]
pub fn inner_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize an element's start tag, leaving out the named attributes.
#[must_use]
pub fn open_tag_without(element: ElementRef<'_>, skip: &[&str]) -> String {
    let value = element.value();
    let mut tag = format!("<{}", value.name());
    for (name, attr_value) in value.attrs() {
        if skip.contains(&name) {
            continue;
        }
        tag.push(' ');
        tag.push_str(name);
        tag.push_str("=\"");
        tag.push_str(&escape_attribute(attr_value));
        tag.push('"');
    }
    tag.push('>');
    tag
}

/// Serialize an element with the named attributes stripped from its own
/// start tag. Descendants are serialized unchanged.
#[must_use]
pub fn outer_html_without(element: ElementRef<'_>, skip: &[&str]) -> String {
    let name = element.value().name();
    let mut html = open_tag_without(element, skip);
    if VOID_ELEMENTS.contains(&name) {
        return html;
    }
    html.push_str(&element.inner_html());
    html.push_str("</");
    html.push_str(name);
    html.push('>');
    html
}

/// Escape a value for use inside a double-quoted attribute.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\u{a0}', "&nbsp;")
}
