//! Source-Map URL Extractor — scans a bundled script's trailing magic
//! comment and resolves the absolute URL of its companion source map.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::HookError;

/// `//[#@] ?sourceMappingURL=<token>` anchored to end-of-line, multiline.
/// `<token>` excludes whitespace and quotes per spec.md §6.
static SOURCE_MAPPING_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)//[#@] ?sourceMappingURL=([^\s'\"]+)[ \t]*$").unwrap());

/// Finds the single `sourceMappingURL` comment in `bundle_text` and resolves
/// it against `bundle_url`'s directory. Zero matches and more-than-one
/// matches both fail this file, per spec.md §4.2.
pub fn extract_source_map_url(bundle_url: &str, bundle_text: &str) -> Result<Url, HookError> {
    let matches: Vec<_> = SOURCE_MAPPING_URL_RE
        .captures_iter(bundle_text)
        .map(|caps| caps.get(1).unwrap().as_str().to_string())
        .collect();

    match matches.len() {
        0 => Err(HookError::NoSourceMapUrl {
            url: bundle_url.to_string(),
        }),
        1 => resolve(bundle_url, &matches[0]),
        count => Err(HookError::AmbiguousSourceMapUrl {
            url: bundle_url.to_string(),
            count,
        }),
    }
}

fn resolve(bundle_url: &str, token: &str) -> Result<Url, HookError> {
    let base = Url::parse(bundle_url).map_err(|_| HookError::InvalidSourceMapUrl {
        token: token.to_string(),
    })?;
    base.join(token).map_err(|_| HookError::InvalidSourceMapUrl {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_token_resolves() {
        let text = "var x=1;\n//# sourceMappingURL=https://cdn.test/app.js.map\n";
        let url = extract_source_map_url("https://cdn.test/app.js", text).unwrap();
        assert_eq!(url.as_str(), "https://cdn.test/app.js.map");
    }

    #[test]
    fn relative_token_resolves_against_bundle_directory() {
        let text = "var x=1;\n//# sourceMappingURL=app.js.map";
        let url = extract_source_map_url("https://cdn.test/static/app.js", text).unwrap();
        assert_eq!(url.as_str(), "https://cdn.test/static/app.js.map");
    }

    #[test]
    fn at_sign_variant_also_matches() {
        let text = "var x=1;\n//@ sourceMappingURL=app.js.map";
        assert!(extract_source_map_url("https://cdn.test/app.js", text).is_ok());
    }

    #[test]
    fn zero_matches_is_an_error() {
        let text = "var x = 1;";
        assert!(matches!(
            extract_source_map_url("https://cdn.test/app.js", text),
            Err(HookError::NoSourceMapUrl { .. })
        ));
    }

    #[test]
    fn two_matches_is_ambiguous() {
        let text = "//# sourceMappingURL=a.map\n//# sourceMappingURL=b.map";
        assert!(matches!(
            extract_source_map_url("https://cdn.test/app.js", text),
            Err(HookError::AmbiguousSourceMapUrl { count: 2, .. })
        ));
    }
}
