//! Renderable display tree.
//!
//! A [`Node`] is what the help panel renderer produces and what a host UI
//! consumes. It can be written out as HTML through [`std::fmt::Display`] or
//! serialized to JSON with serde.

use serde::Serialize;
use std::fmt;

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// A fragment of UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text { text: String },
    Element(Element),
    Fragment { children: Vec<Node> },
}

/// A named element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn fragment(children: Vec<Node>) -> Self {
        Self::Fragment { children }
    }

    /// An empty fragment; renders to nothing.
    pub fn empty() -> Self {
        Self::fragment(Vec::new())
    }

    /// Returns true if this node renders no output at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Text { text } => text.is_empty(),
            Node::Element(_) => false,
            Node::Fragment { children } => children.iter().all(Node::is_empty),
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All elements with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(tag, &mut found);
        found
    }

    fn collect_elements<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        let children = match self {
            Node::Text { .. } => return,
            Node::Element(element) => {
                if element.tag == tag {
                    found.push(element);
                }
                &element.children
            }
            Node::Fragment { children } => children,
        };

        for child in children {
            child.collect_elements(tag, found);
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute. Attributes keep insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of the first attribute named `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { text } => f.write_str(&html_escape::encode_text(text)),
            Node::Element(element) => write!(f, "{element}"),
            Node::Fragment { children } => {
                for child in children {
                    write!(f, "{child}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for attribute in &self.attributes {
            write!(
                f,
                " {}=\"{}\"",
                attribute.name,
                html_escape::encode_double_quoted_attribute(&attribute.value)
            )?;
        }
        f.write_str(">")?;

        if self.is_void() {
            return Ok(());
        }

        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}
