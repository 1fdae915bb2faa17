//! The main public crate of the `minivue` project.
//!
//! `minivue` compiles single-file components written in a Vue-compatible
//! dialect into native artifacts for a family of mini-program runtimes:
//! markup, script, stylesheet and JSON configuration, selectable per
//! target platform.
//!
//! The container-format parser, the style compiler and the bundler host
//! are external collaborators: this crate consumes their parsed template
//! tree and script module and hands back generated text plus structured
//! metadata.
//!
//! Compiling a template tree:
//!
//! ```
//! use minivue::{
//!     compile_template, DirectiveNode, ElementNode, ElementProp, Node, RootNode,
//!     SimpleExpression, TemplateOptions,
//! };
//!
//! let mut element = ElementNode::new("view");
//! element.is_self_closing = true;
//! element.props.push(ElementProp::Directive(DirectiveNode {
//!     name: "on".into(),
//!     argument: Some(SimpleExpression::new("click", true).into()),
//!     expression: Some(SimpleExpression::dynamic("handleTap").into()),
//!     ..Default::default()
//! }));
//! let mut root = RootNode {
//!     children: vec![Node::Element(element)],
//!     ..Default::default()
//! };
//!
//! let mut errors = Vec::new();
//! let result = compile_template(&mut root, &TemplateOptions::default(), &mut errors);
//! assert_eq!(result.code, "<view bind:tap=\"handleTap\"/>\r\n");
//! ```

mod errors;

pub use errors::CompileError;
pub use minivue_core::*;
pub use minivue_transform::error::{
    ScriptError, ScriptErrorKind, TemplateError, TemplateErrorKind, TransformError,
};

pub use minivue_codegen::stringify_template;

use minivue_codegen::{generate_post_options, generate_post_setup, generate_pre};
use minivue_transform::script::extract_script;
use minivue_transform::template::{transform_template, TemplateTransformContext};

/// Generated markup plus the asset references registered for import-based
/// resolution.
#[derive(Debug)]
pub struct TemplateCompileResult {
    pub code: String,
    pub asset_imports: Vec<AssetImport>,
}

/// Runs the template pipeline over the parsed tree and serializes it.
///
/// Diagnostics are appended to `errors`. When any of them carries error
/// severity the generated markup is emptied (warnings alone leave it
/// intact); script and style outputs of the same file are unaffected by
/// template failures.
pub fn compile_template(
    root: &mut RootNode,
    options: &TemplateOptions,
    errors: &mut Vec<TransformError>,
) -> TemplateCompileResult {
    let mut ctx = TemplateTransformContext::new(options);
    transform_template(root, &mut ctx);

    let degraded = ctx.errors.iter().any(|error| !error.is_warning());
    let asset_imports = ctx.asset_imports;
    errors.append(&mut ctx.errors);

    let code = if degraded {
        String::new()
    } else {
        stringify_template(root, options.platform.directive_prefix())
    };

    TemplateCompileResult {
        code,
        asset_imports,
    }
}

/// Advances the script compilation state machine by one phase.
///
/// `compile_script` is invoked twice per file with the same accumulating
/// [`TransformResult`]: the first call extracts imports and macros and
/// produces the bundler-facing module, the second produces the
/// platform-native component definition. Further calls are no-ops — the
/// result is immutable once the terminal phase has run. Both phases
/// always complete and leave generated text in `ret.code`.
pub fn compile_script(
    ret: &mut TransformResult,
    options: &ScriptOptions,
    errors: &mut Vec<TransformError>,
) {
    match ret.phase {
        CompilePhase::NotCompiled => {
            extract_script(ret, options, errors);
            generate_pre(ret);
            ret.phase = CompilePhase::PreTransformed;
        }
        CompilePhase::PreTransformed => {
            if ret.is_setup {
                generate_post_setup(ret, &options.runtime_module);
            } else {
                generate_post_options(ret);
            }
            ret.phase = CompilePhase::PostTransformed;
        }
        CompilePhase::PostTransformed => {}
    }
}
