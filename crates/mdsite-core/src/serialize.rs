//! HTML serialization
//!
//! Converts an [`HtmlNode`] tree into markup text. Attribute values and text
//! are written as-is: no entity escaping is performed, so a `"` inside an
//! attribute value ends up verbatim in the output.

use crate::node::{Attributes, HtmlNode, IMAGE_TAG};
use crate::{NodeError, Result};

/// Serialize a node and its descendants to an HTML string
pub fn to_html(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(1024);
    serialize_node(node, &mut output)?;
    Ok(output)
}

impl HtmlNode {
    /// Serialize this node to an HTML string
    pub fn to_html(&self) -> Result<String> {
        to_html(self)
    }
}

fn serialize_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => {
            serialize_leaf(tag.as_deref(), value.as_deref(), attrs, out)
        }
        HtmlNode::Container {
            tag,
            attrs,
            children,
        } => {
            if tag.is_empty() {
                return Err(NodeError::MissingTag);
            }
            open_tag(tag, attrs, out);
            for child in children {
                serialize_node(child, out)?;
            }
            close_tag(tag, out);
            Ok(())
        }
    }
}

fn serialize_leaf(
    tag: Option<&str>,
    value: Option<&str>,
    attrs: &Attributes,
    out: &mut String,
) -> Result<()> {
    match (tag, value) {
        // Placeholder leaf renders as nothing
        (None, None) => {}
        (None, Some(text)) => out.push_str(text),
        (Some(IMAGE_TAG), _) => {
            out.push('<');
            out.push_str(IMAGE_TAG);
            push_attrs(attrs, out);
            out.push_str("/>");
        }
        (Some(tag), Some(text)) => {
            open_tag(tag, attrs, out);
            out.push_str(text);
            close_tag(tag, out);
        }
        (Some(tag), None) => {
            return Err(NodeError::MissingValue {
                tag: tag.to_string(),
            })
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attrs(attrs, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attrs(attrs: &Attributes, out: &mut String) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_paragraph() {
        let node = HtmlNode::leaf("p", "Hello, world!");
        assert_eq!(node.to_html().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let node = HtmlNode::text("a < b & \"c\"");
        assert_eq!(to_html(&node).unwrap(), "a < b & \"c\"");
    }

    #[test]
    fn test_leaf_with_attrs() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            "Click me!",
            [("href", "https://www.google.com"), ("target", "_blank")],
        );
        assert_eq!(
            to_html(&node).unwrap(),
            r#"<a href="https://www.google.com" target="_blank">Click me!</a>"#
        );
    }

    #[test]
    fn test_image_is_self_closing() {
        let node = HtmlNode::image("/cat.png", "A cat");
        assert_eq!(to_html(&node).unwrap(), r#"<img src="/cat.png" alt="A cat"/>"#);
    }

    #[test]
    fn test_line_break() {
        assert_eq!(to_html(&HtmlNode::line_break()).unwrap(), "<br></br>");
    }

    #[test]
    fn test_attribute_quotes_pass_through() {
        let node = HtmlNode::leaf_with_attrs("a", "x", [("title", "say \"hi\"")]);
        assert_eq!(to_html(&node).unwrap(), r#"<a title="say "hi"">x</a>"#);
    }

    #[test]
    fn test_placeholder_leaf_is_empty() {
        let node = HtmlNode::Leaf {
            tag: None,
            value: None,
            attrs: Attributes::new(),
        };
        assert_eq!(to_html(&node).unwrap(), "");
    }

    #[test]
    fn test_tagged_leaf_without_value_fails() {
        let node = HtmlNode::Leaf {
            tag: Some("b".to_string()),
            value: None,
            attrs: Attributes::new(),
        };
        assert_eq!(
            to_html(&node),
            Err(NodeError::MissingValue {
                tag: "b".to_string()
            })
        );
    }

    #[test]
    fn test_container_without_tag_fails() {
        let node = HtmlNode::container("", vec![HtmlNode::text("x")]);
        assert_eq!(to_html(&node), Err(NodeError::MissingTag));
    }

    #[test]
    fn test_error_in_nested_child_propagates() {
        let bad = HtmlNode::container("", vec![]);
        let node = HtmlNode::container("div", vec![HtmlNode::container("p", vec![bad])]);
        assert_eq!(to_html(&node), Err(NodeError::MissingTag));
    }

    #[test]
    fn test_container_with_children() {
        let node = HtmlNode::container("div", vec![HtmlNode::leaf("span", "child")]);
        assert_eq!(to_html(&node).unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn test_container_with_grandchildren() {
        let child = HtmlNode::container("span", vec![HtmlNode::leaf("b", "grandchild")]);
        let node = HtmlNode::container("div", vec![child]);
        assert_eq!(
            to_html(&node).unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_container_attrs_and_mixed_children() {
        let node = HtmlNode::container_with_attrs(
            "p",
            [("class", "lead")],
            vec![
                HtmlNode::leaf("b", "Bold"),
                HtmlNode::text(" normal "),
                HtmlNode::leaf("i", "italic"),
            ],
        );
        assert_eq!(
            to_html(&node).unwrap(),
            r#"<p class="lead"><b>Bold</b> normal <i>italic</i></p>"#
        );
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let node = HtmlNode::container(
            "div",
            vec![
                HtmlNode::container("h2", vec![HtmlNode::text("Title")]),
                HtmlNode::container("p", vec![HtmlNode::image("a.png", "a")]),
            ],
        );
        assert_eq!(to_html(&node).unwrap(), to_html(&node).unwrap());
    }
}
