//! The script extraction pass.
//!
//! A single walk over the module's top-level statements classifies import
//! declarations and recognizes configuration-macro calls, accumulating
//! everything into the file's [`TransformResult`]. Text changes are
//! recorded as deferred edits so every span keeps indexing the original
//! source.

mod imports;
mod macros;

pub use macros::eval_literal;

use minivue_core::{as_macro_call, ScriptOptions, TransformResult};
use swc_core::{
    common::{Spanned, DUMMY_SP},
    ecma::ast::{Module, ModuleDecl, ModuleItem},
};

use crate::error::TransformError;

pub fn extract_script(
    ret: &mut TransformResult,
    options: &ScriptOptions,
    errors: &mut Vec<TransformError>,
) {
    // The module is moved out for the duration of the walk so the
    // accumulator can be mutated freely.
    let module = std::mem::replace(
        &mut ret.module,
        Box::new(Module {
            span: DUMMY_SP,
            body: Vec::new(),
            shebang: None,
        }),
    );

    for item in module.body.iter() {
        if let ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) = item {
            imports::extract_import(decl, ret, options);
        } else if let Some((kind, call)) = as_macro_call(item) {
            macros::extract_macro(kind, call, item.span(), ret, errors);
        }
    }

    merge_using_components(ret);

    ret.module = module;
}

/// Discovered component aliases become the configuration's
/// `usingComponents` map; aliases shadow previously declared entries.
fn merge_using_components(ret: &mut TransformResult) {
    if ret.components.is_empty() {
        return;
    }
    let Some(config) = ret.config.as_mut() else {
        return;
    };

    let mut using = match config.get("usingComponents") {
        Some(serde_json::Value::Object(existing)) => existing.clone(),
        _ => serde_json::Map::new(),
    };
    for (name, path) in ret.components.iter() {
        using.insert(name.clone(), serde_json::Value::String(path.clone()));
    }
    config.insert(
        "usingComponents".to_string(),
        serde_json::Value::Object(using),
    );
}
