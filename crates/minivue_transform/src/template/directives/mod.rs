//! Directive rewrite rules.
//!
//! Rule order is significant and fixed: `on`, the conditional family,
//! `for`, `model`, `slot`. The loop transform appends synthesized
//! directives already carrying platform names, so later rules never
//! re-process them as user directives; the conditional transform must run
//! before the loop transform decides whether the element gets wrapped.

mod conditional;
mod v_for;
mod v_model;
mod v_on;
mod v_slot;

use minivue_core::{DirectiveNode, ElementNode};

use super::TemplateTransformContext;

/// Rewrites every recognized directive of the element in place. Returns
/// the hoisted conditional directive when the element also carries a loop
/// and therefore needs a structural `block` wrap.
pub(super) fn rewrite_directives(
    element: &mut ElementNode,
    ctx: &mut TemplateTransformContext,
) -> Option<DirectiveNode> {
    v_on::transform_on(element, ctx);
    let hoisted = conditional::transform_conditionals(element, ctx);
    v_for::transform_for(element, ctx);
    v_model::transform_model(element);
    v_slot::transform_slot(element);
    hoisted
}
