//! The template AST rewrite pipeline.
//!
//! Passes run over a parsed template tree in a fixed order: per element,
//! CSS-module class resolution, then the directive rewrite rules, then
//! asset-URL rewriting; after the whole walk, the CSS custom-property
//! injection runs once against the root. The pipeline exclusively owns its
//! input tree for the duration of the call and mutates it in place.

mod asset_urls;
mod css_modules;
mod css_vars;
mod directives;

use minivue_core::{
    atoms, AssetImport, DirectiveNode, ElementNode, ElementProp, Node, RootNode,
    TemplateOptions, TextNode,
};

use crate::error::TransformError;

pub struct TemplateTransformContext<'o> {
    pub options: &'o TemplateOptions,
    /// Directive name prefix of the target platform.
    pub prefix: &'static str,
    /// Relative asset references registered for import-based resolution,
    /// in first-seen order.
    pub asset_imports: Vec<AssetImport>,
    pub errors: Vec<TransformError>,
}

impl<'o> TemplateTransformContext<'o> {
    pub fn new(options: &'o TemplateOptions) -> TemplateTransformContext<'o> {
        TemplateTransformContext {
            prefix: options.platform.directive_prefix(),
            options,
            asset_imports: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Applies all template passes to the tree behind `root`.
pub fn transform_template(root: &mut RootNode, ctx: &mut TemplateTransformContext) {
    transform_children(&mut root.children, ctx);
    css_vars::inject_css_vars(root, ctx);
}

fn transform_children(children: &mut Vec<Node>, ctx: &mut TemplateTransformContext) {
    for idx in 0..children.len() {
        let Node::Element(element) = &mut children[idx] else {
            continue;
        };

        css_modules::resolve_css_module_classes(element, ctx);
        let hoisted = directives::rewrite_directives(element, ctx);
        asset_urls::rewrite_asset_urls(element, ctx);

        transform_children(&mut element.children, ctx);

        if let Some(conditional) = hoisted {
            wrap_in_block(&mut children[idx], conditional);
        }
    }
}

/// Replaces the element with a synthesized `block` wrapper carrying only
/// the hoisted conditional directive; the element itself becomes the
/// wrapper's sole child and keeps everything else.
fn wrap_in_block(slot: &mut Node, conditional: DirectiveNode) {
    let inner = std::mem::replace(slot, Node::Text(TextNode::default()));
    let Node::Element(inner_element) = inner else {
        unreachable!("conditional hoisting only happens on elements");
    };

    let span = inner_element.span;
    let mut wrapper = ElementNode::new(atoms::BLOCK.clone());
    wrapper.props.push(ElementProp::Directive(conditional));
    wrapper.children.push(Node::Element(inner_element));
    wrapper.span = span;
    *slot = Node::Element(wrapper);
}

#[cfg(test)]
mod tests {
    use minivue_core::{
        mini_atom, DirectiveNode, ElementKind, Expression, SimpleExpression, TemplateOptions,
    };
    use smallvec::SmallVec;

    use super::*;

    fn directive(name: &str, arg: Option<&str>, exp: Option<&str>) -> ElementProp {
        ElementProp::Directive(DirectiveNode {
            name: mini_atom!(name),
            argument: arg.map(|arg| SimpleExpression::new(arg, true).into()),
            expression: exp.map(|exp| SimpleExpression::dynamic(exp).into()),
            modifiers: SmallVec::new(),
            span: Default::default(),
        })
    }

    fn transform(root: &mut RootNode, options: &TemplateOptions) -> Vec<TransformError> {
        let mut ctx = TemplateTransformContext::new(options);
        transform_template(root, &mut ctx);
        ctx.errors
    }

    fn single_element(root: &RootNode) -> &ElementNode {
        assert_eq!(root.children.len(), 1);
        let Node::Element(element) = &root.children[0] else {
            panic!("expected an element root");
        };
        element
    }

    fn directive_parts(prop: &ElementProp) -> (String, Option<String>) {
        let ElementProp::Directive(dir) = prop else {
            panic!("expected a directive");
        };
        (
            dir.argument.as_ref().expect("argument").to_string(),
            dir.expression.as_ref().map(Expression::to_string),
        )
    }

    #[test]
    fn loop_rewrite_synthesizes_companions() {
        let mut element = ElementNode::new("li");
        element
            .props
            .push(directive("for", None, Some("(item, index) in items")));
        let mut root = RootNode {
            children: vec![Node::Element(element)],
            span: Default::default(),
        };

        let errors = transform(&mut root, &TemplateOptions::default());
        assert!(errors.is_empty());

        let element = single_element(&root);
        let parts: Vec<_> = element.props.iter().map(directive_parts).collect();
        assert_eq!(
            parts,
            vec![
                ("wx:for".into(), Some("items".into())),
                ("wx:for-item".into(), Some("item".into())),
                ("wx:for-index".into(), Some("index".into())),
                ("wx:key".into(), Some("*this".into())),
            ]
        );
    }

    #[test]
    fn malformed_loop_expression_is_an_error() {
        let mut element = ElementNode::new("li");
        element.props.push(directive("for", None, Some("items")));
        let mut root = RootNode {
            children: vec![Node::Element(element)],
            span: Default::default(),
        };

        let errors = transform(&mut root, &TemplateOptions::default());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("malformed loop expression"));
    }

    #[test]
    fn conditional_with_loop_hoists_into_block() {
        let mut element = ElementNode::new("view");
        element.props.push(directive("if", None, Some("shown")));
        element
            .props
            .push(directive("for", None, Some("item in items")));
        let mut root = RootNode {
            children: vec![Node::Element(element)],
            span: Default::default(),
        };

        transform(&mut root, &TemplateOptions::default());

        let wrapper = single_element(&root);
        assert_eq!(wrapper.tag, "block");
        assert_eq!(wrapper.props.len(), 1);
        assert_eq!(
            directive_parts(&wrapper.props[0]),
            ("wx:if".into(), Some("shown".into()))
        );

        let Node::Element(inner) = &wrapper.children[0] else {
            panic!("expected the original element inside the block");
        };
        assert_eq!(inner.tag, "view");
        assert!(inner
            .props
            .iter()
            .any(|prop| directive_parts(prop).0 == "wx:for"));
    }

    #[test]
    fn default_slot_is_dropped_and_template_downgraded() {
        let mut element = ElementNode::new("template");
        element.kind = ElementKind::Template;
        element.props.push(directive("slot", None, None));
        let mut root = RootNode {
            children: vec![Node::Element(element)],
            span: Default::default(),
        };

        transform(&mut root, &TemplateOptions::default());

        let element = single_element(&root);
        assert_eq!(element.tag, "view");
        assert_eq!(element.kind, ElementKind::Element);
        assert!(element.props.is_empty());
    }

    #[test]
    fn named_slot_swaps_argument_into_expression() {
        let mut element = ElementNode::new("template");
        element.kind = ElementKind::Template;
        element.props.push(directive("slot", Some("header"), None));
        let mut root = RootNode {
            children: vec![Node::Element(element)],
            span: Default::default(),
        };

        transform(&mut root, &TemplateOptions::default());

        let element = single_element(&root);
        assert_eq!(
            directive_parts(&element.props[0]),
            ("slot".into(), Some("header".into()))
        );
    }

    #[test]
    fn css_module_classes_resolve_to_static_names() {
        let mut css_modules = fxhash::FxHashMap::default();
        let mut styles = fxhash::FxHashMap::default();
        styles.insert("btn".to_string(), "_btn_8ydhi".to_string());
        css_modules.insert("styles".to_string(), styles);
        let options = TemplateOptions {
            css_modules,
            ..Default::default()
        };

        let mut element = ElementNode::new("button");
        element
            .props
            .push(directive("bind", Some("class"), Some("styles.btn")));
        let mut root = RootNode {
            children: vec![Node::Element(element)],
            span: Default::default(),
        };

        transform(&mut root, &options);

        let element = single_element(&root);
        let ElementProp::Directive(dir) = &element.props[0] else {
            panic!("expected the class binding");
        };
        let exp = dir.expression.as_ref().unwrap().as_simple().unwrap();
        assert_eq!(exp.content, "_btn_8ydhi");
        assert!(exp.is_static);
    }

    #[test]
    fn asset_references_register_deduplicated_imports() {
        let mut image = ElementNode::new("image");
        image
            .props
            .push(ElementProp::Attribute(minivue_core::AttributeNode::new(
                "src",
                Some("../images/asset.png"),
            )));
        let mut again = ElementNode::new("image");
        again
            .props
            .push(ElementProp::Attribute(minivue_core::AttributeNode::new(
                "src",
                Some("../images/asset.png"),
            )));
        let mut root = RootNode {
            children: vec![Node::Element(image), Node::Element(again)],
            span: Default::default(),
        };

        let options = TemplateOptions::default();
        let mut ctx = TemplateTransformContext::new(&options);
        transform_template(&mut root, &mut ctx);

        assert_eq!(ctx.asset_imports.len(), 1);
        assert_eq!(ctx.asset_imports[0].path, "../images/asset.png");
        assert_eq!(ctx.asset_imports[0].ident, "_imports_0");
    }

    #[test]
    fn css_vars_wrap_a_multi_root_component() {
        let options = TemplateOptions {
            scope_id: "abcd123".into(),
            css_vars: vec!["color".into(), "bgColor".into()],
            is_component: true,
            ..Default::default()
        };

        let mut root = RootNode {
            children: vec![
                Node::Element(ElementNode::new("view")),
                Node::Element(ElementNode::new("view")),
            ],
            span: Default::default(),
        };

        transform(&mut root, &options);

        let wrapper = single_element(&root);
        assert_eq!(wrapper.tag, "view");
        assert_eq!(wrapper.children.len(), 2);
        let style = wrapper.find_attribute("style").expect("style attribute");
        assert_eq!(
            style.value.as_ref().unwrap().content,
            "--abcd123-color: {{color}}; --abcd123-bgColor: {{bgColor}}"
        );
    }
}
