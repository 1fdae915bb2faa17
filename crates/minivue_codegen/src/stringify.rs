//! Recursive, indentation-aware serializer producing the final platform
//! markup from a transformed template tree.
//!
//! Layout rules: CRLF line breaks; two spaces of indentation per nesting
//! level, applied only when a children set contains at least one element
//! (text-only containers stay on one line); closing tags indent at the
//! parent's level only when the element had element children.

use itertools::Itertools;
use minivue_core::{
    AttributeNode, DirectiveNode, ElementNode, ElementProp, Node, RootNode,
};

const LINE_BREAK: &str = "\r\n";
const TAB: &str = "  ";

/// Serializes the tree. The output is deterministic: serializing the same
/// tree twice yields byte-identical text.
pub fn stringify_template(root: &RootNode, prefix: &str) -> String {
    let mut out = String::new();
    write_children(&mut out, &root.children, 0, prefix);
    out
}

fn contains_elements(children: &[Node]) -> bool {
    children.iter().any(Node::is_element)
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(TAB);
    }
}

fn write_children(out: &mut String, children: &[Node], level: usize, prefix: &str) {
    let has_elements = contains_elements(children);
    let level = level + usize::from(has_elements);

    for node in children {
        match node {
            Node::Element(element) => {
                push_indent(out, level - 1);
                write_element(out, element, level, prefix);
            }
            Node::Text(text) => {
                if has_elements {
                    push_indent(out, level - 1);
                }
                out.push_str(&text.content);
                if has_elements {
                    out.push_str(LINE_BREAK);
                }
            }
            Node::Interpolation(interpolation) => {
                if has_elements {
                    push_indent(out, level - 1);
                }
                out.push_str("{{ ");
                out.push_str(&interpolation.content.to_string());
                out.push_str(" }}");
                if has_elements {
                    out.push_str(LINE_BREAK);
                }
            }
            Node::CompoundExpr(compound) => {
                if has_elements {
                    push_indent(out, level - 1);
                }
                out.push_str(&compound.to_string());
                if has_elements {
                    out.push_str(LINE_BREAK);
                }
            }
            // comments are dropped; a nested root never occurs
            Node::Comment(_) | Node::Root(_) => {}
        }
    }
}

fn write_element(out: &mut String, element: &ElementNode, level: usize, prefix: &str) {
    out.push('<');
    out.push_str(&element.tag);
    if !element.props.is_empty() {
        out.push(' ');
        let props = element
            .props
            .iter()
            .map(|prop| match prop {
                ElementProp::Attribute(attr) => stringify_attribute(attr),
                ElementProp::Directive(dir) => stringify_directive(dir, prefix),
            })
            .join(" ");
        out.push_str(&props);
    }

    let has_elements = contains_elements(&element.children);
    if element.is_self_closing {
        out.push_str("/>");
        out.push_str(LINE_BREAK);
    } else {
        out.push('>');
    }
    if has_elements {
        out.push_str(LINE_BREAK);
    }

    write_children(out, &element.children, level, prefix);

    if !element.is_self_closing {
        if has_elements {
            push_indent(out, level - 1);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
        out.push_str(LINE_BREAK);
    }
}

fn stringify_attribute(attr: &AttributeNode) -> String {
    match &attr.value {
        Some(value) => format!("{}=\"{}\"", attr.name, value.content),
        None => attr.name.to_string(),
    }
}

fn stringify_directive(dir: &DirectiveNode, prefix: &str) -> String {
    let arg = match &dir.argument {
        Some(argument) => argument.to_string(),
        None => dir.name.to_string(),
    };
    let Some(exp) = &dir.expression else {
        return arg;
    };

    let mut is_static = exp.is_static();
    // Platform key directives always serialize bare, even when the renamed
    // user expression was dynamic.
    if arg == format!("{prefix}:key") {
        is_static = true;
    }

    if is_static {
        format!("{arg}=\"{exp}\"")
    } else {
        format!("{arg}=\"{{{{{exp}}}}}\"")
    }
}

#[cfg(test)]
mod tests {
    use minivue_core::{
        mini_atom, ElementNode, Interpolation, Node, RootNode, SimpleExpression, TextNode,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn root_of(children: Vec<Node>) -> RootNode {
        RootNode {
            children,
            span: Default::default(),
        }
    }

    fn text(content: &str) -> Node {
        Node::Text(TextNode {
            content: mini_atom!(content),
            span: Default::default(),
        })
    }

    #[test]
    fn self_closing_elements_end_with_a_line_break() {
        let mut el = ElementNode::new("view");
        el.is_self_closing = true;
        let root = root_of(vec![Node::Element(el)]);
        assert_eq!(stringify_template(&root, "wx"), "<view/>\r\n");
    }

    #[test]
    fn text_only_containers_stay_on_one_line() {
        let mut el = ElementNode::new("view");
        el.children.push(text("True"));
        let root = root_of(vec![Node::Element(el)]);
        assert_eq!(stringify_template(&root, "wx"), "<view>True</view>\r\n");
    }

    #[test]
    fn element_children_are_indented() {
        let mut inner = ElementNode::new("view");
        inner.is_self_closing = true;
        let mut outer = ElementNode::new("page-meta");
        outer.children.push(Node::Element(inner));
        let root = root_of(vec![Node::Element(outer)]);
        assert_eq!(
            stringify_template(&root, "wx"),
            "<page-meta>\r\n  <view/>\r\n</page-meta>\r\n"
        );
    }

    #[test]
    fn interpolations_keep_their_braces() {
        let mut el = ElementNode::new("text");
        el.children.push(Node::Interpolation(Interpolation {
            content: SimpleExpression::dynamic("count").into(),
            span: Default::default(),
        }));
        let root = root_of(vec![Node::Element(el)]);
        assert_eq!(
            stringify_template(&root, "wx"),
            "<text>{{ count }}</text>\r\n"
        );
    }

    #[test]
    fn serialization_is_idempotent() {
        let mut inner = ElementNode::new("view");
        inner.children.push(text("hello"));
        let mut outer = ElementNode::new("view");
        outer.children.push(Node::Element(inner));
        let root = root_of(vec![Node::Element(outer)]);

        let first = stringify_template(&root, "wx");
        let second = stringify_template(&root, "wx");
        assert_eq!(first, second);
    }
}
