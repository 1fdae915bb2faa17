use std::path::{Path, PathBuf};

use minivue_core::{
    atoms::COMPONENT_EXT, kebab_case, normalize_path, relative_slash_path, replace_rules,
    span_range, PathProbe, RuntimeImport, ScriptOptions, TransformResult,
};
use swc_core::ecma::ast::{Ident, ImportDecl, ImportSpecifier, ModuleExportName};

/// Probe order when resolving an import specifier to a project file.
const RESOLVE_EXTENSIONS: [&str; 2] = ["ts", "js"];

/// Classifies one import declaration.
///
/// - externalized modules are recorded and the statement stays untouched;
/// - component imports are recorded under their kebab-cased local name and
///   the declaration is excised from the output text (its JS-visible
///   effect is re-synthesized from the alias map later);
/// - other specifiers run through the alias rules and extension probing
///   before being recorded as a plain module dependency.
pub(super) fn extract_import(
    decl: &ImportDecl,
    ret: &mut TransformResult,
    options: &ScriptOptions,
) {
    track_import_positions(decl, ret, options);

    let source = decl.src.value.to_string();
    if options.externals.iter().any(|external| *external == source) {
        ret.external_modules.insert(source);
        return;
    }

    let dirname = parent_dir(&ret.filename);
    let dealiased = replace_rules(&source, &options.aliases);
    let spec = if dealiased != source {
        relative_slash_path(&dirname, &dealiased)
    } else {
        source.clone()
    };
    let spec = spec.replace('\\', "/");

    let joined = options.root.join(&dirname).join(&spec);
    let resolved = probe_with_extensions(normalize_path(&joined), options.probe);
    ret.imports.insert(resolved);

    if spec.ends_with(COMPONENT_EXT) {
        let Some(local) = first_specifier_local(decl) else {
            return;
        };
        if !ret.component_bindings.contains(&local.sym) {
            ret.component_bindings.push(local.sym.clone());
        }
        ret.components.insert(kebab_case(&local.sym), spec);
        let range = span_range(decl.span);
        ret.s.remove(range.start, range.end);
    } else if spec != source {
        let range = span_range(decl.src.span);
        ret.s.overwrite(range.start, range.end, format!("\"{spec}\""));
    }
}

fn track_import_positions(decl: &ImportDecl, ret: &mut TransformResult, options: &ScriptOptions) {
    ret.last_import_end = Some(span_range(decl.span).end);

    if ret.runtime_import.is_none() && decl.src.value == options.runtime_module.as_str() {
        if let Some(first) = decl.specifiers.first() {
            let has_define_component = decl.specifiers.iter().any(|specifier| {
                imported_name(specifier)
                    .map_or(false, |name| *name == *minivue_core::atoms::DEFINE_COMPONENT)
            });
            ret.runtime_import = Some(RuntimeImport {
                first_specifier_end: span_range(specifier_span(first)).end,
                has_define_component,
            });
        }
    }
}

fn specifier_span(specifier: &ImportSpecifier) -> swc_core::common::Span {
    match specifier {
        ImportSpecifier::Named(named) => named.span,
        ImportSpecifier::Default(default) => default.span,
        ImportSpecifier::Namespace(ns) => ns.span,
    }
}

fn imported_name(specifier: &ImportSpecifier) -> Option<&swc_core::ecma::atoms::Atom> {
    match specifier {
        ImportSpecifier::Named(named) => match named.imported.as_ref() {
            Some(ModuleExportName::Ident(ident)) => Some(&ident.sym),
            Some(ModuleExportName::Str(s)) => Some(&s.value),
            None => Some(&named.local.sym),
        },
        _ => None,
    }
}

fn first_specifier_local(decl: &ImportDecl) -> Option<&Ident> {
    decl.specifiers.first().map(|specifier| match specifier {
        ImportSpecifier::Named(named) => &named.local,
        ImportSpecifier::Default(default) => &default.local,
        ImportSpecifier::Namespace(ns) => &ns.local,
    })
}

fn parent_dir(filename: &Path) -> String {
    filename
        .parent()
        .map(|parent| parent.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default()
}

/// Probes the resolved path for existence: as-given, then `.ts`, `.js`,
/// `/index.ts`, `/index.js`. No hit keeps the path as-given.
fn probe_with_extensions(path: PathBuf, probe: &dyn PathProbe) -> PathBuf {
    if probe.exists(&path) {
        return path;
    }
    for ext in RESOLVE_EXTENSIONS {
        let mut with_ext = path.clone().into_os_string();
        with_ext.push(".");
        with_ext.push(ext);
        let with_ext = PathBuf::from(with_ext);
        if probe.exists(&with_ext) {
            return with_ext;
        }
    }
    for ext in RESOLVE_EXTENSIONS {
        let index = path.join(format!("index.{ext}"));
        if probe.exists(&index) {
            return index;
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    struct SetProbe(FxHashSet<PathBuf>);

    impl PathProbe for SetProbe {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }
    }

    fn probe_of(paths: &[&str]) -> SetProbe {
        SetProbe(paths.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn probes_extensions_in_order() {
        let probe = probe_of(&["/p/src/util.ts", "/p/src/util.js"]);
        assert_eq!(
            probe_with_extensions(PathBuf::from("/p/src/util"), &probe),
            PathBuf::from("/p/src/util.ts")
        );

        let probe = probe_of(&["/p/src/util/index.js"]);
        assert_eq!(
            probe_with_extensions(PathBuf::from("/p/src/util"), &probe),
            PathBuf::from("/p/src/util/index.js")
        );
    }

    #[test]
    fn as_given_wins_and_misses_stay_as_given() {
        let probe = probe_of(&["/p/src/util"]);
        assert_eq!(
            probe_with_extensions(PathBuf::from("/p/src/util"), &probe),
            PathBuf::from("/p/src/util")
        );

        let probe = probe_of(&[]);
        assert_eq!(
            probe_with_extensions(PathBuf::from("/p/src/missing.vue"), &probe),
            PathBuf::from("/p/src/missing.vue")
        );
    }
}
