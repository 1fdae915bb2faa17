use minivue_core::{ElementNode, ElementProp, Expression, SimpleExpression};

/// `v-model="x"` -> `model:value="{{x}}"`;
/// `v-model:checked="x"` -> `model:checked="{{x}}"`.
pub(super) fn transform_model(element: &mut ElementNode) {
    for prop in element.props.iter_mut() {
        let ElementProp::Directive(dir) = prop else {
            continue;
        };
        if dir.name != "model" {
            continue;
        }

        match dir.argument.as_mut().and_then(Expression::as_simple_mut) {
            Some(arg) => arg.content = format!("model:{}", arg.content).into(),
            None => {
                dir.argument = Some(SimpleExpression::synthesized("model:value").into());
            }
        }
    }
}
