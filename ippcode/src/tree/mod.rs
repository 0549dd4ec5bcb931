pub mod program;

use std::fmt;

pub use program::{ProgramSerializer, serialize};

const INDENT: &str = "\t";

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text content of direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        write!(f, "{}<{}", indent, self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, Escaped(value))?;
        }

        match self.children.as_slice() {
            [] => writeln!(f, "/>"),
            [Node::Text(text)] => writeln!(f, ">{}</{}>", Escaped(text), self.name),
            children => {
                writeln!(f, ">")?;
                for child in children {
                    match child {
                        Node::Element(element) => element.write_indented(f, depth + 1)?,
                        Node::Text(text) => writeln!(f, "{}{}{}", indent, INDENT, Escaped(text))?,
                    }
                }
                writeln!(f, "{}</{}>", indent, self.name)
            }
        }
    }
}

/// Builds a tree below a fixed root element.
#[derive(Debug)]
pub struct TreeBuilder {
    root: Element,
}

impl TreeBuilder {
    pub fn new(root: Element) -> Self {
        TreeBuilder { root }
    }

    pub fn append(&mut self, child: Element) -> &mut Self {
        self.root.push_child(child);
        self
    }

    pub fn finish(self) -> XmlDocument {
        XmlDocument { root: self.root }
    }
}

/// A complete document: declaration plus one root element.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root: Element,
}

/// UTF-8 declaration, tab indentation, trailing newline.
impl fmt::Display for XmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        self.root.write_indented(f, 0)
    }
}

/// Escapes markup characters in text and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{}", ch)?,
            }
        }
        Ok(())
    }
}
