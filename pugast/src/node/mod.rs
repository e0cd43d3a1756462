/// An ordered run of sibling nodes. The document root is a Block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub nodes: Vec<Node>,
}

impl Block {
    pub fn empty() -> Self {
        Block { nodes: Vec::new() }
    }
}

impl From<Vec<Node>> for Block {
    fn from(nodes: Vec<Node>) -> Self {
        Block { nodes }
    }
}

/// A single child of a Block.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A tag with its attributes and nested content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name as written in the template (`some-tag`, `template`, ...).
    pub name: String,
    /// Attributes in source order. Pug shorthands (`.class`, `#id`) arrive
    /// here as ordinary attributes with quoted values.
    pub attrs: Vec<Attribute>,
    pub block: Block,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attrs: Vec::new(),
            block: Block::empty(),
        }
    }

    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.block.nodes.push(child.into());
        self
    }

    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.with_child(Node::text(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

impl Attribute {
    /// An attribute with a literal value, quotes included as the parser kept them.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: AttrValue::Text(value.into()),
        }
    }

    /// A valueless attribute (`true`) or an explicitly disabled one (`false`).
    pub fn flag(name: impl Into<String>, on: bool) -> Self {
        Attribute {
            name: name.into(),
            value: AttrValue::Flag(on),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag(_) => None,
        }
    }
}
