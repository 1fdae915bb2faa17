use minivue_core::{
    DirectiveNode, ElementNode, ElementProp, Expression, SimpleExpression,
};

use crate::{
    error::{TemplateError, TemplateErrorKind, TransformError},
    template::TemplateTransformContext,
};

struct LoopExpression {
    item: String,
    index: Option<String>,
    iterable: String,
}

/// `v-for="(item, i) in list"` -> the platform's `for` directive over the
/// iterable, plus synthesized `for-item`/`for-index` companions and a
/// `key` directive (the identity sentinel unless an explicit dynamic key
/// exists, which is renamed instead).
pub(super) fn transform_for(element: &mut ElementNode, ctx: &mut TemplateTransformContext) {
    let prefix = ctx.prefix;

    let Some(for_idx) = element.props.iter().position(
        |prop| matches!(prop, ElementProp::Directive(dir) if dir.name == "for"),
    ) else {
        return;
    };

    let parsed = {
        let ElementProp::Directive(dir) = &mut element.props[for_idx] else {
            unreachable!("position was found on a directive");
        };

        let source = dir
            .expression
            .as_ref()
            .map(Expression::to_string)
            .unwrap_or_default();
        let Some(parsed) = parse_loop_expression(&source) else {
            ctx.errors.push(TransformError::Template(TemplateError {
                span: dir.span,
                kind: TemplateErrorKind::MalformedLoopExpression { expression: source },
            }));
            return;
        };

        dir.argument = Some(SimpleExpression::synthesized(format!("{prefix}:for")).into());
        dir.expression =
            Some(SimpleExpression::dynamic(parsed.iterable.as_str()).into());
        parsed
    };

    element.props.push(synthesized_companion(
        format!("{prefix}:for-item"),
        &parsed.item,
    ));
    if let Some(index) = &parsed.index {
        element.props.push(synthesized_companion(
            format!("{prefix}:for-index"),
            index,
        ));
    }

    // An explicit dynamic key is renamed in place; otherwise a key over the
    // identity sentinel is appended.
    if let Some(key_dir) = element.find_binding_mut("key") {
        if let Some(arg) = key_dir.argument.as_mut().and_then(Expression::as_simple_mut) {
            arg.content = format!("{prefix}:key").into();
        }
    } else {
        element
            .props
            .push(synthesized_companion(format!("{prefix}:key"), "*this"));
    }
}

fn synthesized_companion(name: String, value: &str) -> ElementProp {
    ElementProp::Directive(DirectiveNode::synthesized(
        name.as_str(),
        SimpleExpression::synthesized(name.as_str()),
        Some(SimpleExpression::synthesized(value)),
    ))
}

/// Parses `"<item-spec> (in|of) <iterable>"` where `<item-spec>` is a bare
/// identifier or a parenthesized `(item, index)` pair. The first delimiter
/// wins.
fn parse_loop_expression(source: &str) -> Option<LoopExpression> {
    let in_pos = source.find(" in ");
    let of_pos = source.find(" of ");
    let delim_pos = match (in_pos, of_pos) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let lhs = source[..delim_pos].trim();
    let iterable = source[delim_pos + 4..].trim();
    if lhs.is_empty() || iterable.is_empty() {
        return None;
    }

    if let Some(inner) = lhs
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut parts = inner.split(',').map(str::trim);
        let item = parts.next().filter(|item| !item.is_empty())?.to_string();
        let index = parts
            .next()
            .filter(|index| !index.is_empty())
            .map(str::to_string);
        return Some(LoopExpression {
            item,
            index,
            iterable: iterable.to_string(),
        });
    }

    Some(LoopExpression {
        item: lhs.to_string(),
        index: None,
        iterable: iterable.to_string(),
    })
}
