//! HTML node tree
//!
//! A node is either a leaf (raw text or a single element holding text) or a
//! container that owns an ordered list of children.

use indexmap::IndexMap;

/// Tag of the only leaf element allowed to carry no value
pub const IMAGE_TAG: &str = "img";

/// Tag used for hard line breaks inside inline content
pub const LINE_BREAK_TAG: &str = "br";

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node of the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Terminal node. Without a tag the value is emitted as raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },

    /// Element owning its children
    Container {
        tag: String,
        attrs: Attributes,
        children: Vec<HtmlNode>,
    },
}

impl HtmlNode {
    /// Create an untagged text leaf
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Create a tagged leaf, e.g. `<b>value</b>`
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// Create a tagged leaf with attributes
    pub fn leaf_with_attrs<K, V>(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: collect_attrs(attrs),
        }
    }

    /// Create an `<img>` leaf. It has no value; `src` precedes `alt`.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(IMAGE_TAG.to_string()),
            value: None,
            attrs: collect_attrs([("src", src.into()), ("alt", alt.into())]),
        }
    }

    /// Create a `<br></br>` leaf
    pub fn line_break() -> Self {
        HtmlNode::leaf(LINE_BREAK_TAG, "")
    }

    /// Create a container element without attributes
    pub fn container(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Container {
            tag: tag.into(),
            attrs: Attributes::new(),
            children,
        }
    }

    /// Create a container element with attributes
    pub fn container_with_attrs<K, V>(
        tag: impl Into<String>,
        attrs: impl IntoIterator<Item = (K, V)>,
        children: Vec<HtmlNode>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        HtmlNode::Container {
            tag: tag.into(),
            attrs: collect_attrs(attrs),
            children,
        }
    }

    /// Tag name, `None` for raw text leaves
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Container { tag, .. } => Some(tag),
        }
    }

    /// Leaf value; containers never carry one
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Container { .. } => None,
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Container { attrs, .. } => attrs,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs().get(name).map(String::as_str)
    }

    /// Children of a container, empty for leaves
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Container { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Check if this is an untagged leaf, i.e. text still open to splitting
    pub fn is_text(&self) -> bool {
        matches!(self, HtmlNode::Leaf { tag: None, .. })
    }

    /// Concatenated text of this node and its descendants, markup dropped
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { value, .. } => value.clone().unwrap_or_default(),
            HtmlNode::Container { children, .. } => {
                children.iter().map(HtmlNode::text_content).collect()
            }
        }
    }
}

fn collect_attrs<K, V>(attrs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    attrs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
