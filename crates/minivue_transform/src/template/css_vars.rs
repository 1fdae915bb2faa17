use itertools::Itertools;
use minivue_core::{
    atoms, AttributeNode, ElementNode, ElementProp, Expression, Node, RootNode,
    SimpleExpression, TextNode,
};

use super::TemplateTransformContext;

/// Injects the computed CSS custom-property string into the tree's single
/// container element, creating a synthesized container when none exists.
/// No-op when the file declares no CSS variables.
pub(super) fn inject_css_vars(root: &mut RootNode, ctx: &mut TemplateTransformContext) {
    if ctx.options.css_vars.is_empty() {
        return;
    }

    let id = &ctx.options.scope_id;
    let inline_css_vars = ctx
        .options
        .css_vars
        .iter()
        .map(|name| format!("--{id}-{name}: {{{{{name}}}}}"))
        .join("; ");

    let is_component = ctx.options.is_component;
    let prop_name: &str = if is_component { "style" } else { "page-style" };

    if let Some(container) = find_container(&mut root.children, is_component) {
        match container.find_prop_mut(prop_name) {
            // Static attribute: append space-joined, or set directly.
            Some(ElementProp::Attribute(attr)) => match attr.value.as_mut() {
                Some(value) => {
                    value.content =
                        format!("{} {}", value.content, inline_css_vars).into();
                }
                None => {
                    attr.value = Some(TextNode {
                        content: inline_css_vars.into(),
                        span: Default::default(),
                    });
                }
            },
            // Dynamic binding: concatenate onto the stringified expression.
            Some(ElementProp::Directive(dir)) => match dir.expression.as_mut() {
                Some(Expression::Simple(exp)) => {
                    exp.content = format!("{}{}", exp.content, inline_css_vars).into();
                }
                Some(expr @ Expression::Compound(_)) => {
                    let joined = format!("{expr}{inline_css_vars}");
                    *expr = Expression::Simple(SimpleExpression::new(joined, true));
                }
                None => {}
            },
            None => {
                container.props.push(ElementProp::Attribute(AttributeNode::new(
                    prop_name,
                    Some(inline_css_vars.as_str()),
                )));
            }
        }
        return;
    }

    // No eligible container: wrap the whole child list in a synthesized
    // element carrying the computed style.
    let tag = if is_component {
        atoms::VIEW.clone()
    } else {
        atoms::PAGE_META.clone()
    };
    let mut wrapper = ElementNode::new(tag);
    wrapper
        .props
        .push(ElementProp::Attribute(AttributeNode::new(
            prop_name,
            Some(inline_css_vars.as_str()),
        )));
    wrapper.children = std::mem::take(&mut root.children);
    root.children = vec![Node::Element(wrapper)];
}

/// Component-mode output requires exactly one top-level child; page-mode
/// output attaches to a leading `page-meta` element (assumed to be the
/// only node when used).
fn find_container(children: &mut [Node], is_component: bool) -> Option<&mut ElementNode> {
    if is_component {
        if children.len() != 1 {
            return None;
        }
        match children.first_mut() {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    } else {
        match children.first_mut() {
            Some(Node::Element(element)) if element.tag == *atoms::PAGE_META => Some(element),
            _ => None,
        }
    }
}
