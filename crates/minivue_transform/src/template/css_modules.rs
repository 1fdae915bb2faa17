use minivue_core::{ElementNode, Expression};

use super::TemplateTransformContext;

/// Substitutes a dynamic `class` binding of the exact form `alias.key`
/// with the hashed class name from the CSS-module map, marking it static.
/// No-op when no CSS modules were compiled for the file.
pub(super) fn resolve_css_module_classes(
    element: &mut ElementNode,
    ctx: &mut TemplateTransformContext,
) {
    if ctx.options.css_modules.is_empty() {
        return;
    }

    let css_modules = &ctx.options.css_modules;
    let Some(dir) = element.find_binding_mut("class") else {
        return;
    };
    let Some(exp) = dir.expression.as_mut().and_then(Expression::as_simple_mut) else {
        return;
    };

    let resolved = {
        let content: &str = &exp.content;
        let Some((alias, key)) = content.split_once('.') else {
            return;
        };
        if key.contains('.') {
            return;
        }
        css_modules.get(alias).and_then(|module| module.get(key)).cloned()
    };

    if let Some(hashed) = resolved {
        exp.content = hashed.into();
        exp.is_static = true;
    }
}
