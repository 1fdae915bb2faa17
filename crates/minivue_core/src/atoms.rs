//! Commonly used words as static interned symbols (`MiniAtom`).

use crate::{mini_atom, MiniAtom};

lazy_static! {
    // Configuration macro callees
    pub static ref DEFINE_PAGE_CONFIG: MiniAtom = mini_atom!("definePageConfig");
    pub static ref DEFINE_PROPS: MiniAtom = mini_atom!("defineProps");
    pub static ref DEFINE_EXPOSE: MiniAtom = mini_atom!("defineExpose");
    pub static ref DEFINE_HOOK_CONFIG: MiniAtom = mini_atom!("defineHookConfig");

    // Component definition callees
    pub static ref DEFINE_PAGE: MiniAtom = mini_atom!("definePage");
    pub static ref DEFINE_COMPONENT: MiniAtom = mini_atom!("defineComponent");

    // Synthesized template tags
    pub static ref BLOCK: MiniAtom = mini_atom!("block");
    pub static ref VIEW: MiniAtom = mini_atom!("view");
    pub static ref PAGE_META: MiniAtom = mini_atom!("page-meta");

    // The unnamed slot
    pub static ref DEFAULT: MiniAtom = mini_atom!("default");
}

/// Extension marking a component source file in import specifiers.
pub const COMPONENT_EXT: &str = ".vue";
