use std::path::PathBuf;

use fxhash::FxHashSet;
use indexmap::IndexMap;
use swc_core::{common::Span, ecma::ast::Module};

use crate::{MagicString, MiniAtom};

/// The extracted configuration object: plain nested literal data,
/// JSON-serializable for emission as the native config artifact.
pub type ConfigObject = serde_json::Map<String, serde_json::Value>;

/// Phase of the two-phase script compilation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompilePhase {
    #[default]
    NotCompiled,
    PreTransformed,
    /// Terminal: the configuration object and the generated output are
    /// immutable once this phase has run.
    PostTransformed,
}

/// Raw source text of the composition-style macro payloads, captured
/// verbatim at extraction time.
#[derive(Debug, Clone, Default)]
pub struct MacroPayloads {
    pub props: Option<String>,
    pub expose: Option<String>,
    pub hook: Option<String>,
}

/// Bookkeeping about the import of the runtime module, used when the
/// post phase synthesizes the component definition wrapper.
#[derive(Debug, Clone)]
pub struct RuntimeImport {
    /// Byte offset right after the first import specifier, where the
    /// component-definition helper can be spliced in.
    pub first_specifier_end: usize,
    pub has_define_component: bool,
}

/// Per-file accumulator for the script pipeline.
///
/// One `TransformResult` is created per source file per compile invocation,
/// mutated by the ordered pipeline phases, and discarded once its outputs
/// are consumed — it is never cached or reused across files. All spans
/// recorded here index into the *original* source text; the edit buffer
/// guarantees they stay valid until the final render.
#[derive(Debug)]
pub struct TransformResult {
    /// Project-root-relative path of the source file.
    pub filename: PathBuf,
    pub source: String,
    pub s: MagicString,
    pub module: Box<Module>,
    pub is_setup: bool,
    pub phase: CompilePhase,

    /// Literal payload of the configuration macro, if one was declared.
    pub config: Option<ConfigObject>,
    /// kebab-cased tag name -> module path, in source import order.
    pub components: IndexMap<String, String>,
    /// Original local binding names of component imports, in import order.
    pub component_bindings: Vec<MiniAtom>,
    /// Resolved same-project dependency paths.
    pub imports: FxHashSet<PathBuf>,
    /// Imported modules that are externalized (dependency-listed).
    pub external_modules: FxHashSet<String>,

    pub macros: MacroPayloads,
    /// Spans of recognized macro statements, excised in the post phase.
    pub macro_stmt_spans: Vec<Span>,
    pub runtime_import: Option<RuntimeImport>,
    /// End offset of the last import declaration, if any.
    pub last_import_end: Option<usize>,

    /// Output of the phase that ran last.
    pub code: String,
}

impl TransformResult {
    pub fn new(
        filename: impl Into<PathBuf>,
        source: impl Into<String>,
        module: Box<Module>,
        is_setup: bool,
    ) -> TransformResult {
        let source = source.into();
        TransformResult {
            filename: filename.into(),
            s: MagicString::new(source.as_str()),
            source,
            module,
            is_setup,
            phase: CompilePhase::default(),
            config: None,
            components: IndexMap::new(),
            component_bindings: Vec::new(),
            imports: FxHashSet::default(),
            external_modules: FxHashSet::default(),
            macros: MacroPayloads::default(),
            macro_stmt_spans: Vec::new(),
            runtime_import: None,
            last_import_end: None,
            code: String::new(),
        }
    }
}

/// A relative asset reference discovered in the template, registered for
/// import-based resolution by the bundler host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetImport {
    pub path: String,
    /// Synthesized stable identifier (`_imports_<n>`) the host wires to
    /// the emitted import.
    pub ident: MiniAtom,
    pub span: Span,
}

/// Append-only dependency sets shared across file-processing tasks.
///
/// Each file's pipeline fills its own `TransformResult`; the orchestrating
/// layer merges completed results into one collector. Merging is an
/// idempotent set union, so completion order does not matter.
#[derive(Debug, Clone, Default)]
pub struct DependencyCollector {
    pub assets: FxHashSet<String>,
    pub modules: FxHashSet<String>,
    pub project_files: FxHashSet<PathBuf>,
}

impl DependencyCollector {
    pub fn merge(&mut self, other: &DependencyCollector) {
        self.assets.extend(other.assets.iter().cloned());
        self.modules.extend(other.modules.iter().cloned());
        self.project_files.extend(other.project_files.iter().cloned());
    }

    pub fn collect_script(&mut self, result: &TransformResult) {
        self.modules.extend(result.external_modules.iter().cloned());
        self.project_files.extend(result.imports.iter().cloned());
    }

    pub fn collect_assets<'i>(&mut self, imports: impl IntoIterator<Item = &'i AssetImport>) {
        self.assets
            .extend(imports.into_iter().map(|import| import.path.clone()));
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn collector_merge_is_idempotent() {
        let mut a = DependencyCollector::default();
        a.modules.insert("miniprogram-api".into());
        a.assets.insert("./logo.png".into());

        let mut b = DependencyCollector::default();
        b.modules.insert("miniprogram-api".into());
        b.project_files.insert(PathBuf::from("/proj/src/util.ts"));

        let mut merged = DependencyCollector::default();
        merged.merge(&a);
        merged.merge(&b);
        let once = merged.clone();
        merged.merge(&b);
        merged.merge(&a);

        assert_eq!(merged.modules.len(), once.modules.len());
        assert_eq!(merged.assets.len(), once.assets.len());
        assert_eq!(merged.project_files.len(), once.project_files.len());
    }

    #[test]
    fn collector_gathers_per_file_results() {
        let module = Box::new(Module {
            span: Default::default(),
            body: Vec::new(),
            shebang: None,
        });
        let mut ret = TransformResult::new("src/app.vue", "", module, false);
        ret.external_modules.insert("miniprogram-api".into());
        ret.imports.insert(PathBuf::from("/proj/src/util.ts"));

        let asset = AssetImport {
            path: "../images/logo.png".into(),
            ident: crate::mini_atom!("_imports_0"),
            span: Default::default(),
        };

        let mut collector = DependencyCollector::default();
        collector.collect_script(&ret);
        collector.collect_assets([&asset]);

        assert!(collector.modules.contains("miniprogram-api"));
        assert!(collector.project_files.contains(Path::new("/proj/src/util.ts")));
        assert!(collector.assets.contains("../images/logo.png"));
    }
}
