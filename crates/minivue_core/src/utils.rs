use std::ops::Range;
use std::path::{Component, Path, PathBuf};

use swc_core::common::Span;

/// Byte range of a span within the original source text.
pub fn span_range(span: Span) -> Range<usize> {
    span.lo.0 as usize..span.hi.0 as usize
}

/// Converts a camel/Pascal-cased component name to kebab-case, the form
/// used for markup tag names and configuration keys.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if idx > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Lexically resolves `.` and `..` components without touching the
/// filesystem. `..` segments that would climb above the first component of
/// a relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if out.as_os_str().is_empty() || out.ends_with("..") {
                    out.push("..");
                }
                // `..` directly above the root is dropped
            }
            Component::Normal(seg) => {
                out.push(seg);
                depth += 1;
            }
        }
    }
    out
}

/// Computes a `/`-separated path leading from directory `from_dir` to
/// `to`. Both inputs are project-root-relative slash paths.
pub fn relative_slash_path(from_dir: &str, to: &str) -> String {
    let from: Vec<&str> = split_segments(from_dir);
    let to: Vec<&str> = split_segments(to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out: Vec<&str> = Vec::new();
    for _ in common..from.len() {
        out.push("..");
    }
    out.extend(&to[common..]);
    out.join("/")
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect()
}

/// Joins `rel` onto the absolute posix path `base` and normalizes the
/// result; `..` segments that would climb above the root are dropped.
pub fn posix_resolve(base: &str, rel: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for seg in base.split('/').chain(rel.split('/')) {
        match seg {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            seg => stack.push(seg),
        }
    }
    let mut out = String::with_capacity(base.len() + rel.len());
    for seg in stack {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_cases_component_names() {
        assert_eq!(kebab_case("ComOne"), "com-one");
        assert_eq!(kebab_case("myWidget"), "my-widget");
        assert_eq!(kebab_case("nav"), "nav");
        assert_eq!(kebab_case("HTTPServer"), "h-t-t-p-server");
    }

    #[test]
    fn normalizes_dot_segments() {
        assert_eq!(
            normalize_path(Path::new("/root/src/./pages/../components/c.vue")),
            PathBuf::from("/root/src/components/c.vue")
        );
        assert_eq!(
            normalize_path(Path::new("/root/src/../../above")),
            PathBuf::from("/above")
        );
    }

    #[test]
    fn computes_relative_paths() {
        assert_eq!(
            relative_slash_path("src/pages", "src/components/comp.vue"),
            "../components/comp.vue"
        );
        assert_eq!(relative_slash_path("src", "src/app.ts"), "app.ts");
    }

    #[test]
    fn resolves_posix_paths_against_a_root() {
        assert_eq!(posix_resolve("/", "../images/a.png"), "/images/a.png");
        assert_eq!(posix_resolve("/assets", "./a.png"), "/assets/a.png");
        assert_eq!(posix_resolve("/a/b", "../c"), "/a/c");
    }
}
