// ── Attr ──────────────────────────────────────────────────────────────────

/// A single `name="value"` attribute, value unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// An element of the document tree.
///
/// ```svg
/// <g transform="translate(5,5)">
///     <circle cx="10" cy="10" r="4" fill="red"/>
/// </g>
/// ```
///
/// Only elements are kept; text, comments and processing instructions are
/// dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Local tag name without namespace prefix: `"svg"`, `"g"`, `"circle"`.
    pub tag: String,
    /// Attributes in document order.
    pub attrs: Vec<Attr>,
    /// Child elements in document order.
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Appends an attribute, keeping document order.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attr { name: name.into(), value: value.into() });
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Look up an attribute value by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|a| a.name == name).map(|a| a.value.as_str())
    }

    /// Attribute value, or `""` when absent.
    #[inline]
    pub fn attr_or_empty(&self, name: &str) -> &str {
        self.attr(name).unwrap_or("")
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// A loaded document; `root` is always an `<svg>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
}
