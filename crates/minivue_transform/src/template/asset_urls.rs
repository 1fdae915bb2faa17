use std::fmt::Write;

use minivue_core::{mini_atom, posix_resolve, AssetImport, ElementNode, ElementProp, MiniAtom};
use url::Url;

use crate::{
    error::{TemplateError, TemplateErrorKind, TransformError},
    template::TemplateTransformContext,
};

lazy_static! {
    // `Url` cannot parse relative references on its own; everything is
    // joined onto a dummy base and the dummy is stripped again afterwards.
    static ref DUMMY_BASE: Url = "http://_".parse().expect("`http://_` is a valid `URL`");
}

/// Rewrites relative asset references of the configured attributes: with a
/// configured base URL, dot-relative values are rewritten in place to
/// absolute URLs; otherwise the path is registered as an import dependency
/// and the attribute text is left untouched (the bundler wires the
/// generated identifier separately).
pub(super) fn rewrite_asset_urls(element: &mut ElementNode, ctx: &mut TemplateTransformContext) {
    if element.props.is_empty() {
        return;
    }

    let options = ctx.options;
    let tags = &options.asset_urls.tags;
    let empty = Vec::new();
    let attrs = tags.get(&element.tag).unwrap_or(&empty);
    let wild_card_attrs = tags.get(&mini_atom!("*")).unwrap_or(&empty);
    if attrs.is_empty() && wild_card_attrs.is_empty() {
        return;
    }

    for prop in element.props.iter_mut() {
        let ElementProp::Attribute(attr) = prop else {
            continue;
        };
        if !attrs.contains(&attr.name) && !wild_card_attrs.contains(&attr.name) {
            continue;
        }
        let Some(value) = attr.value.as_mut() else {
            continue;
        };

        let url: &str = &value.content;
        if url.trim().is_empty()
            || is_external_url(url)
            || is_data_url(url)
            || url.starts_with('#')
            || (!options.asset_urls.include_absolute && !is_relative_url(url))
        {
            continue;
        }

        if let (Some(base), Some('.')) = (options.asset_urls.base.as_deref(), url.chars().next())
        {
            // Explicit base: rewrite relative urls into absolute urls
            // directly, avoiding extra imports.
            match rewrite_with_base(base, url) {
                Some(rewritten) => value.content = rewritten.into(),
                None => ctx.errors.push(TransformError::Template(TemplateError {
                    span: attr.span,
                    kind: TemplateErrorKind::AssetBaseUrlParseFailed {
                        base: base.to_string(),
                    },
                })),
            }
            continue;
        }

        let (path, _hash) = split_hash(strip_tilde(url));
        if path.is_empty() {
            continue;
        }
        let decoded = percent_encoding::percent_decode_str(path).decode_utf8();
        let Ok(path) = decoded else {
            ctx.errors.push(TransformError::Template(TemplateError {
                span: attr.span,
                kind: TemplateErrorKind::AssetUrlDecodeFailed {
                    url: path.to_string(),
                },
            }));
            continue;
        };

        if !ctx.asset_imports.iter().any(|import| import.path == path) {
            let ident: MiniAtom = format!("_imports_{}", ctx.asset_imports.len()).into();
            ctx.asset_imports.push(AssetImport {
                path: path.into_owned(),
                ident,
                span: attr.span,
            });
        }
    }
}

/// Anchors a dot-relative reference at the configured base: scheme/host
/// prefix (when the base carries one) plus the joined, normalized path,
/// with a preserved fragment.
fn rewrite_with_base(base: &str, value: &str) -> Option<String> {
    let base_url = DUMMY_BASE.clone().join(strip_tilde(base)).ok()?;

    let base_starts_with_double_slash = base.starts_with("//");
    let is_dummy = base_url.scheme() == "http"
        && !base.starts_with("http")
        && !base_starts_with_double_slash;

    let mut out = String::with_capacity(base.len() + value.len());
    if !is_dummy {
        if let Some(host) = base_url.host_str() {
            if base_starts_with_double_slash {
                out.push_str("//");
            } else {
                out.push_str(base_url.scheme());
                out.push_str("://");
            }
            out.push_str(host);
            if let Some(port) = base_url.port() {
                let _ = write!(out, ":{port}");
            }
        }
    }

    let (path, hash) = split_hash(strip_tilde(value));
    out.push_str(&posix_resolve(base_url.path(), path));
    out.push_str(hash);
    Some(out)
}

fn strip_tilde(url: &str) -> &str {
    match url.strip_prefix('~') {
        Some(stripped) => stripped.strip_prefix('/').unwrap_or(stripped),
        None => url,
    }
}

fn split_hash(url: &str) -> (&str, &str) {
    match url.find('#') {
        Some(pos) => (&url[..pos], &url[pos..]),
        None => (url, ""),
    }
}

fn is_relative_url(url: &str) -> bool {
    matches!(url.chars().next(), Some('.' | '~' | '@'))
}

fn is_external_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

fn is_data_url(url: &str) -> bool {
    url.trim_start().starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_host_and_normalized_path() {
        assert_eq!(
            rewrite_with_base("http://192.168.1.2:3000", "../images/asset.png").as_deref(),
            Some("http://192.168.1.2:3000/images/asset.png")
        );
    }

    #[test]
    fn path_only_base_keeps_no_host() {
        assert_eq!(
            rewrite_with_base("/static", "./logo.png").as_deref(),
            Some("/static/logo.png")
        );
    }

    #[test]
    fn fragment_is_preserved() {
        assert_eq!(
            rewrite_with_base("/icons", "./sprite.svg#arrow").as_deref(),
            Some("/icons/sprite.svg#arrow")
        );
    }

    #[test]
    fn recognizes_url_shapes() {
        assert!(is_external_url("https://cdn.example.com/a.png"));
        assert!(is_external_url("//cdn.example.com/a.png"));
        assert!(is_data_url(" data:image/png;base64,xyz"));
        assert!(is_relative_url("./a.png"));
        assert!(is_relative_url("~assets/a.png"));
        assert!(is_relative_url("@/assets/a.png"));
        assert!(!is_relative_url("/absolute/a.png"));
    }
}
