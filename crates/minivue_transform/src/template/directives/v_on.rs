use minivue_core::{ElementNode, ElementProp, Expression, MiniAtom};
use phf::phf_map;
use swc_core::common::Span;

use crate::{
    error::{TemplateError, TemplateErrorKind, TransformError},
    template::TemplateTransformContext,
};

/// Web event names that have a different native name on the platforms.
static EVENT_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "click" => "tap",
};

/// Single-modifier binding kinds.
static EVENT_MODIFIERS: phf::Map<&'static str, &'static str> = phf_map! {
    "stop" => "catch",
    "catch" => "catch",
    "mut" => "mut-bind",
    "capture" => "capture-bind",
};

/// `v-on:click.stop="fn"` -> `catch:tap="fn"`. The bound expression is
/// marked static so it serializes without interpolation braces.
pub(super) fn transform_on(element: &mut ElementNode, ctx: &mut TemplateTransformContext) {
    for prop in element.props.iter_mut() {
        let ElementProp::Directive(dir) = prop else {
            continue;
        };
        if dir.name != "on" {
            continue;
        }

        let kind = event_binding_kind(&dir.modifiers, dir.span, &mut ctx.errors);

        let Some(arg) = dir.argument.as_mut().and_then(Expression::as_simple_mut) else {
            continue;
        };
        let event: &str = &arg.content;
        let event = EVENT_ALIASES.get(event).copied().unwrap_or(event);
        arg.content = format!("{kind}:{event}").into();

        if let Some(exp) = dir.expression.as_mut().and_then(Expression::as_simple_mut) {
            exp.is_static = true;
        }
    }
}

/// Combines the modifier list into a binding-kind prefix. `capture`
/// together with `stop` or `catch` resolves to `capture-catch` no matter
/// the order the modifiers were written; unrecognized modifiers warn and
/// are otherwise ignored.
fn event_binding_kind(
    modifiers: &[MiniAtom],
    span: Span,
    errors: &mut Vec<TransformError>,
) -> &'static str {
    for modifier in modifiers {
        if !EVENT_MODIFIERS.contains_key(&**modifier) {
            errors.push(TransformError::Template(TemplateError {
                span,
                kind: TemplateErrorKind::UnknownEventModifier {
                    modifier: modifier.to_string(),
                },
            }));
        }
    }

    if modifiers.len() == 1 {
        if let Some(kind) = EVENT_MODIFIERS.get(&*modifiers[0]) {
            return kind;
        }
    }

    let has = |name: &str| modifiers.iter().any(|modifier| *modifier == name);
    if has("capture") && (has("stop") || has("catch")) {
        return "capture-catch";
    }

    "bind"
}
