use swc_core::ecma::ast::{
    Callee, CallExpr, Expr, Ident, ModuleDecl, ModuleItem, Stmt,
};

use crate::atoms;

/// A recognized configuration macro: a no-op-at-runtime call whose sole
/// purpose is to mark a payload for extraction at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMacro {
    /// `definePageConfig({...})` — literal configuration object.
    PageConfig,
    /// `defineProps({...})` — component properties (composition files).
    Props,
    /// `defineExpose({...})` — setup return payload (composition files).
    Expose,
    /// `defineHookConfig({...})` — runtime hook options (composition files).
    HookConfig,
}

impl ConfigMacro {
    pub fn from_callee(name: &str) -> Option<ConfigMacro> {
        if *atoms::DEFINE_PAGE_CONFIG == name {
            Some(ConfigMacro::PageConfig)
        } else if *atoms::DEFINE_PROPS == name {
            Some(ConfigMacro::Props)
        } else if *atoms::DEFINE_EXPOSE == name {
            Some(ConfigMacro::Expose)
        } else if *atoms::DEFINE_HOOK_CONFIG == name {
            Some(ConfigMacro::HookConfig)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigMacro::PageConfig => "definePageConfig",
            ConfigMacro::Props => "defineProps",
            ConfigMacro::Expose => "defineExpose",
            ConfigMacro::HookConfig => "defineHookConfig",
        }
    }
}

/// The identifier callee of a call expression, if it has one.
pub fn call_callee_ident(call: &CallExpr) -> Option<&Ident> {
    match &call.callee {
        Callee::Expr(expr) => match expr.as_ref() {
            Expr::Ident(ident) => Some(ident),
            _ => None,
        },
        _ => None,
    }
}

/// Matches a top-level `someMacro(...)` expression statement against the
/// recognized macro set.
pub fn as_macro_call(item: &ModuleItem) -> Option<(ConfigMacro, &CallExpr)> {
    let ModuleItem::Stmt(Stmt::Expr(expr_stmt)) = item else {
        return None;
    };
    let Expr::Call(call) = expr_stmt.expr.as_ref() else {
        return None;
    };
    let ident = call_callee_ident(call)?;
    let kind = ConfigMacro::from_callee(&ident.sym)?;
    Some((kind, call))
}

/// Matches `export default definePage({...})` / `defineComponent({...})`
/// and returns the definition call.
pub fn as_options_export(item: &ModuleItem) -> Option<&CallExpr> {
    let ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) = item else {
        return None;
    };
    let Expr::Call(call) = export.expr.as_ref() else {
        return None;
    };
    let ident = call_callee_ident(call)?;
    if ident.sym == *atoms::DEFINE_PAGE || ident.sym == *atoms::DEFINE_COMPONENT {
        Some(call)
    } else {
        None
    }
}
