use minivue_core::{span_range, ConfigMacro, TransformResult};
use serde_json::{Map, Number, Value};
use swc_core::{
    common::{Span, Spanned},
    ecma::ast::{ArrayLit, Expr, Lit, ObjectLit, Prop, PropName, PropOrSpread},
};

use crate::error::{ScriptError, ScriptErrorKind, TransformError};

/// Records a recognized macro statement: the page-config payload is
/// evaluated as literal data, the composition payloads are captured
/// verbatim as source text. The statement span is kept for excision in
/// the post phase.
pub(super) fn extract_macro(
    kind: ConfigMacro,
    call: &swc_core::ecma::ast::CallExpr,
    stmt_span: Span,
    ret: &mut TransformResult,
    errors: &mut Vec<TransformError>,
) {
    ret.macro_stmt_spans.push(stmt_span);

    let Some(arg) = call.args.first() else {
        errors.push(TransformError::Script(ScriptError {
            span: call.span,
            kind: ScriptErrorKind::MissingMacroArgument { name: kind.name() },
        }));
        return;
    };

    match kind {
        ConfigMacro::PageConfig => match eval_literal(&arg.expr) {
            Some(Value::Object(config)) => ret.config = Some(config),
            _ => errors.push(TransformError::Script(ScriptError {
                span: call.span,
                kind: ScriptErrorKind::MalformedMacroArgument { name: kind.name() },
            })),
        },
        kind => {
            let range = span_range(arg.expr.span());
            let raw = ret.source[range].to_string();
            match kind {
                ConfigMacro::Props => ret.macros.props = Some(raw),
                ConfigMacro::Expose => ret.macros.expose = Some(raw),
                ConfigMacro::HookConfig => ret.macros.hook = Some(raw),
                ConfigMacro::PageConfig => unreachable!(),
            }
        }
    }
}

/// Evaluates an expression as literal data: booleans, strings, numbers and
/// `null` pass through; object expressions recurse key-by-key with spread
/// elements merging shallowly; array expressions concatenate, flattening
/// spreads. The identifier `undefined` and any non-literal shape evaluate
/// to `None` and are dropped silently.
pub fn eval_literal(expr: &Expr) -> Option<Value> {
    match expr {
        Expr::Lit(Lit::Bool(b)) => Some(Value::Bool(b.value)),
        Expr::Lit(Lit::Str(s)) => Some(Value::String(s.value.to_string())),
        Expr::Lit(Lit::Num(num)) => Some(Value::Number(number_from_f64(num.value)?)),
        Expr::Lit(Lit::Null(_)) => Some(Value::Null),
        Expr::Object(obj) => Some(Value::Object(eval_object(obj))),
        Expr::Array(arr) => Some(Value::Array(eval_array(arr))),
        _ => None,
    }
}

fn eval_object(obj: &ObjectLit) -> Map<String, Value> {
    let mut map = Map::new();
    for prop in obj.props.iter() {
        match prop {
            PropOrSpread::Spread(spread) => {
                if let Some(Value::Object(inner)) = eval_literal(&spread.expr) {
                    for (key, value) in inner {
                        map.insert(key, value);
                    }
                }
            }
            PropOrSpread::Prop(prop) => {
                let Prop::KeyValue(kv) = prop.as_ref() else {
                    continue; // methods, getters and shorthands are not literal data
                };
                let Some(key) = prop_key_name(&kv.key) else {
                    continue;
                };
                if let Some(value) = eval_literal(&kv.value) {
                    map.insert(key, value);
                }
            }
        }
    }
    map
}

fn eval_array(arr: &ArrayLit) -> Vec<Value> {
    let mut out = Vec::with_capacity(arr.elems.len());
    for elem in arr.elems.iter().flatten() {
        if elem.spread.is_some() {
            if let Some(Value::Array(inner)) = eval_literal(&elem.expr) {
                out.extend(inner);
            }
        } else if let Some(value) = eval_literal(&elem.expr) {
            out.push(value);
        }
    }
    out
}

fn prop_key_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => Some(s.value.to_string()),
        PropName::Num(num) => Some(
            number_from_f64(num.value)
                .map(|n| n.to_string())
                .unwrap_or_else(|| num.value.to_string()),
        ),
        PropName::Computed(_) | PropName::BigInt(_) => None,
    }
}

fn number_from_f64(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}
