use minivue_core::{DirectiveNode, ElementNode, ElementProp, Expression, SimpleExpression};

use crate::template::TemplateTransformContext;

/// Maps the conditional family onto the platform's if/elif/else directives;
/// `show` becomes the `hidden` attribute with a negated expression.
///
/// When the element also carries a loop directive, the conditional cannot
/// stay on the same tag (the platforms do not combine them), so it is
/// removed here and returned for hoisting onto a synthesized `block`
/// wrapper.
pub(super) fn transform_conditionals(
    element: &mut ElementNode,
    ctx: &mut TemplateTransformContext,
) -> Option<DirectiveNode> {
    let prefix = ctx.prefix;
    let mut first_conditional: Option<usize> = None;

    for (idx, prop) in element.props.iter_mut().enumerate() {
        let ElementProp::Directive(dir) = prop else {
            continue;
        };

        let mapped = match &*dir.name {
            "if" => format!("{prefix}:if"),
            "else-if" => format!("{prefix}:elif"),
            "else" => format!("{prefix}:else"),
            "show" => "hidden".to_string(),
            _ => continue,
        };

        if dir.name == "show" {
            if let Some(exp) = dir.expression.as_mut().and_then(Expression::as_simple_mut) {
                exp.content = format!("!({})", exp.content).into();
            }
        }
        dir.argument = Some(SimpleExpression::synthesized(mapped).into());

        first_conditional.get_or_insert(idx);
    }

    let idx = first_conditional?;
    if !element.has_directive("for") {
        return None;
    }

    let ElementProp::Directive(dir) = element.props.remove(idx) else {
        unreachable!("position was found on a directive");
    };
    Some(dir)
}
