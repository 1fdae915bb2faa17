use minivue_core::{
    atoms, ElementKind, ElementNode, ElementProp, Expression, SimpleExpression,
};

/// Slot handling for non-scoped slots: the unnamed/default slot marker is
/// simply dropped; a named slot swaps its argument into the expression and
/// gains a static `slot` argument, serializing as `slot="name"`.
///
/// A wrapping `template` tag is always downgraded to a plain `view`
/// container after this pass, whether or not a slot directive was present.
pub(super) fn transform_slot(element: &mut ElementNode) {
    let slot_idx = element.props.iter().position(
        |prop| matches!(prop, ElementProp::Directive(dir) if dir.name == "slot"),
    );

    if let Some(idx) = slot_idx {
        let ElementProp::Directive(dir) = &mut element.props[idx] else {
            unreachable!("position was found on a directive");
        };

        // TODO: scoped slots (a slot carrying a value expression) are not
        // transformed yet; those directives pass through as parsed.
        if dir.expression.is_none() {
            let is_default = match dir.argument.as_ref().and_then(Expression::as_simple) {
                None => true,
                Some(arg) => arg.content == *atoms::DEFAULT,
            };

            if is_default {
                element.props.remove(idx);
            } else {
                dir.expression = dir.argument.take();
                dir.argument = Some(SimpleExpression::synthesized("slot").into());
            }
        }
    }

    if element.kind == ElementKind::Template {
        element.tag = atoms::VIEW.clone();
        element.kind = ElementKind::Element;
    }
}
