use std::path::{Path, PathBuf};

use fxhash::FxHashMap;

use crate::{mini_atom, MiniAtom, MiniPlatform};

/// Per-call options for compiling one template block.
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    pub platform: MiniPlatform,
    /// Stable per-file id used to namespace injected CSS custom properties.
    pub scope_id: String,
    /// Declared CSS variable names to inject as inline custom properties.
    pub css_vars: Vec<String>,
    /// Component-mode output wraps/injects differently than page-mode.
    pub is_component: bool,
    /// CSS-module alias -> (class name -> hashed class name).
    pub css_modules: FxHashMap<String, FxHashMap<String, String>>,
    pub asset_urls: AssetUrlOptions,
}

impl Default for TemplateOptions {
    fn default() -> TemplateOptions {
        TemplateOptions {
            platform: MiniPlatform::default(),
            scope_id: String::new(),
            css_vars: Vec::new(),
            is_component: false,
            css_modules: FxHashMap::default(),
            asset_urls: AssetUrlOptions::default(),
        }
    }
}

/// Options of the asset-URL rewrite pass.
#[derive(Debug, Clone)]
pub struct AssetUrlOptions {
    /// When set, dot-relative asset references are rewritten in place to
    /// absolute URLs anchored here instead of being registered as imports.
    pub base: Option<String>,
    /// Also process syntactically absolute references.
    pub include_absolute: bool,
    /// Tag name -> attribute names eligible for rewriting. The `*` entry
    /// applies to every tag.
    pub tags: FxHashMap<MiniAtom, Vec<MiniAtom>>,
}

impl Default for AssetUrlOptions {
    fn default() -> AssetUrlOptions {
        let mut tags = FxHashMap::default();
        let src = || vec![mini_atom!("src")];
        tags.insert(mini_atom!("video"), vec![mini_atom!("src"), mini_atom!("poster")]);
        tags.insert(mini_atom!("live-player"), src());
        tags.insert(mini_atom!("audio"), src());
        tags.insert(mini_atom!("source"), src());
        tags.insert(mini_atom!("image"), src());
        tags.insert(mini_atom!("cover-image"), src());
        AssetUrlOptions {
            base: None,
            include_absolute: false,
            tags,
        }
    }
}

/// Per-call options for compiling one script block.
pub struct ScriptOptions<'o> {
    /// Project-root-relative path of the source file.
    pub filename: PathBuf,
    /// Absolute project root; resolved dependency paths are anchored here.
    pub root: PathBuf,
    /// Dependency-listed module names whose imports are externalized.
    pub externals: Vec<String>,
    /// Path-rewrite rules applied to import specifiers, in order.
    pub aliases: Vec<AliasRule>,
    /// The runtime module providing the component-definition helper.
    pub runtime_module: String,
    pub probe: &'o dyn PathProbe,
}

impl<'o> ScriptOptions<'o> {
    pub fn new(
        filename: impl Into<PathBuf>,
        root: impl Into<PathBuf>,
        probe: &'o dyn PathProbe,
    ) -> ScriptOptions<'o> {
        ScriptOptions {
            filename: filename.into(),
            root: root.into(),
            externals: Vec::new(),
            aliases: Vec::new(),
            runtime_module: "@vue-mini/wechat".into(),
            probe,
        }
    }
}

/// A single `pattern -> replacement` rewrite, each side carrying at most
/// one `*` wildcard (e.g. `@/*` -> `src/*`).
#[derive(Debug, Clone)]
pub struct AliasRule {
    pub pattern: String,
    pub replacement: String,
}

impl AliasRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> AliasRule {
        AliasRule {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Applies the rule if the whole path matches the pattern.
    pub fn apply(&self, path: &str) -> Option<String> {
        match self.pattern.split_once('*') {
            Some((prefix, suffix)) => {
                if path.len() >= prefix.len() + suffix.len()
                    && path.starts_with(prefix)
                    && path.ends_with(suffix)
                {
                    let middle = &path[prefix.len()..path.len() - suffix.len()];
                    Some(self.replacement.replacen('*', middle, 1))
                } else {
                    None
                }
            }
            None if path == self.pattern => Some(self.replacement.clone()),
            None => None,
        }
    }
}

/// Applies every matching rule in order, feeding each rewrite into the next.
pub fn replace_rules(path: &str, rules: &[AliasRule]) -> String {
    rules.iter().fold(path.to_string(), |path, rule| {
        rule.apply(&path).unwrap_or(path)
    })
}

/// Existence probing used when resolving import specifiers. The default
/// implementation asks the filesystem; tests inject predictable sets.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Filesystem-backed [`PathProbe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
