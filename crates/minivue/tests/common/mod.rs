//! AST builders standing in for the container-format parser.

use minivue::{
    AttributeNode, DirectiveNode, ElementNode, ElementProp, Interpolation, MiniAtom, Node,
    RootNode, SimpleExpression, TemplateOptions, TextNode, TransformError,
};

pub fn element(tag: &str) -> ElementNode {
    ElementNode::new(tag)
}

pub fn self_closing(tag: &str) -> ElementNode {
    let mut el = element(tag);
    el.is_self_closing = true;
    el
}

pub fn directive(name: &str, arg: Option<&str>, exp: Option<&str>, modifiers: &[&str]) -> ElementProp {
    ElementProp::Directive(DirectiveNode {
        name: name.into(),
        argument: arg.map(|arg| SimpleExpression::new(arg, true).into()),
        expression: exp.map(|exp| SimpleExpression::dynamic(exp).into()),
        modifiers: modifiers.iter().map(|m| MiniAtom::from(*m)).collect(),
        span: Default::default(),
    })
}

pub fn attribute(name: &str, value: Option<&str>) -> ElementProp {
    ElementProp::Attribute(AttributeNode::new(name, value))
}

pub fn text(content: &str) -> Node {
    Node::Text(TextNode {
        content: content.into(),
        span: Default::default(),
    })
}

pub fn interpolation(exp: &str) -> Node {
    Node::Interpolation(Interpolation {
        content: SimpleExpression::dynamic(exp).into(),
        span: Default::default(),
    })
}

pub fn root(children: Vec<Node>) -> RootNode {
    RootNode {
        children,
        span: Default::default(),
    }
}

pub fn compile(root: &mut RootNode, options: &TemplateOptions) -> String {
    let mut errors: Vec<TransformError> = Vec::new();
    let result = minivue::compile_template(root, options, &mut errors);
    result.code
}
