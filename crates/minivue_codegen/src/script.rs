//! Script emission: the bundler-facing "pre" text and the platform-native
//! "post" text, both rendered from the file's deferred-edit buffer.

use itertools::Itertools;
use minivue_core::{as_options_export, span_range, ConfigMacro, TransformResult};
use swc_core::common::Spanned;
use swc_core::ecma::ast::{Expr, ObjectLit, Prop, PropName, PropOrSpread};

/// Identity-function stub keeping a macro call syntactically valid in the
/// bundler-facing module.
fn macro_stub(kind: ConfigMacro) -> String {
    format!("function {}(config) {{ return config }}\n", kind.name())
}

/// Pre phase: renders the buffer (component imports removed, aliased
/// sources rewritten) and appends stubs for every macro name in use, so
/// the produced text stays independently processable. Composition files
/// additionally export an object referencing all component bindings to
/// keep them alive through tree-shaking.
pub fn generate_pre(ret: &mut TransformResult) {
    let mut code = ret.s.render_all();
    code.push('\n');
    code.push_str(&macro_stub(ConfigMacro::PageConfig));

    if ret.is_setup {
        code.push_str(&macro_stub(ConfigMacro::Props));
        code.push_str(&macro_stub(ConfigMacro::Expose));
        code.push_str(&macro_stub(ConfigMacro::HookConfig));

        let bindings = ret.component_bindings.iter().join(", ");
        code.push_str(&format!("const COMP_r3m0v3 = {{ {bindings} }}\n"));
        code.push_str("export default COMP_r3m0v3\n");
    }

    ret.code = code;
}

/// Post phase for options-style components: macro statements disappear,
/// the `props` key of the definition object becomes `properties`, and the
/// `components` key (already merged into the configuration) is removed.
pub fn generate_post_options(ret: &mut TransformResult) {
    for span in ret.macro_stmt_spans.iter() {
        let range = span_range(*span);
        ret.s.remove(range.start, range.end);
    }

    let mut key_edits: Vec<(usize, usize, Option<&'static str>)> = Vec::new();
    for item in ret.module.body.iter() {
        let Some(call) = as_options_export(item) else {
            continue;
        };
        let Some(options_obj) = call.args.first().and_then(|arg| as_object(&arg.expr)) else {
            continue;
        };

        for prop in options_obj.props.iter() {
            let PropOrSpread::Prop(prop) = prop else {
                continue;
            };
            let Prop::KeyValue(kv) = prop.as_ref() else {
                continue;
            };
            let PropName::Ident(key) = &kv.key else {
                continue;
            };

            if key.sym == "props" {
                let range = span_range(key.span);
                key_edits.push((range.start, range.end, Some("properties")));
            } else if key.sym == "components" {
                let range = span_range(kv.span());
                // also eat the trailing comma, when there is one
                let end = match ret.source[range.end..].chars().next() {
                    Some(',') => range.end + 1,
                    _ => range.end,
                };
                key_edits.push((range.start, end, None));
            }
        }
    }
    for (start, end, replacement) in key_edits {
        match replacement {
            Some(text) => ret.s.overwrite(start, end, text),
            None => ret.s.remove(start, end),
        }
    }

    ret.code = ret.s.render_all();
}

/// Post phase for composition-style components: reconstructs the native
/// definition-object wrapper. Imports are hoisted before a synthesized
/// setup function (with the component-definition helper spliced into the
/// runtime import, or imported when absent); the remaining statements
/// become the setup body; the captured macro payloads become definition
/// fields, and the expose payload becomes the setup return value.
pub fn generate_post_setup(ret: &mut TransformResult, runtime_module: &str) {
    for span in ret.macro_stmt_spans.iter() {
        let range = span_range(*span);
        ret.s.remove(range.start, range.end);
    }

    if let Some(runtime) = &ret.runtime_import {
        if !runtime.has_define_component {
            ret.s
                .append_right(runtime.first_specifier_end, ", defineComponent");
        }
    }

    let imports = match ret.last_import_end {
        Some(end) => {
            let segment = ret.s.slice(0, end);
            ret.s.remove(0, end);
            if ret.runtime_import.is_some() {
                segment
            } else {
                format!("{segment}\nimport {{ defineComponent }} from \"{runtime_module}\"\n")
            }
        }
        None => format!("\nimport {{ defineComponent }} from \"{runtime_module}\"\n"),
    };

    let body = ret.s.render_all();

    let mut code = String::from("\n");
    code.push_str(&imports);
    code.push_str("\nexport default defineComponent({\n");
    if let Some(props) = &ret.macros.props {
        code.push_str(&format!("properties: {props},\n"));
    }
    code.push_str(&format!("setup() {{\n    {body}\n"));
    code.push_str(&format!(
        "return {}\n",
        ret.macros.expose.as_deref().unwrap_or("{}")
    ));
    code.push_str("}\n");
    match &ret.macros.hook {
        Some(hook) => code.push_str(&format!("}},\n{hook})")),
        None => code.push_str("})\n"),
    }

    ret.code = code;
}

fn as_object(expr: &Expr) -> Option<&ObjectLit> {
    match expr {
        Expr::Object(obj) => Some(obj),
        _ => None,
    }
}
