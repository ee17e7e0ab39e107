//! Slug derivation
//!
//! The CMS stores slugs as `{ _type: "slug", current }`. When a record carries
//! no explicit slug, one is derived from its title.

/// Lowercase the title and collapse every whitespace run into a single `-`.
///
/// Leading and trailing whitespace are not trimmed; they become hyphens too.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_space = false;

    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            in_space = false;
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// Pick the explicit slug when it is non-empty, otherwise slugify the title.
///
/// Returns `None` when neither is available.
pub fn resolve_slug(explicit: Option<&str>, title: Option<&str>) -> Option<String> {
    match explicit {
        Some(slug) if !slug.is_empty() => Some(slug.to_string()),
        _ => title.map(slugify),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hydra Glow Cream"), "hydra-glow-cream");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Silk  \t Serum"), "silk-serum");
        assert_eq!(slugify(" Velvet Lip "), "-velvet-lip-");
    }

    #[test]
    fn test_slugify_keeps_non_ascii() {
        assert_eq!(slugify("Ночная Маска"), "ночная-маска");
        assert_eq!(slugify("SPF 30"), "spf-30");
    }

    #[test]
    fn test_resolve_slug_prefers_explicit() {
        assert_eq!(
            resolve_slug(Some("custom-slug"), Some("Hydra Glow")),
            Some("custom-slug".to_string())
        );
    }

    #[test]
    fn test_resolve_slug_falls_back_on_empty() {
        assert_eq!(
            resolve_slug(Some(""), Some("Hydra Glow")),
            Some("hydra-glow".to_string())
        );
        assert_eq!(resolve_slug(None, Some("Silk Serum")), Some("silk-serum".to_string()));
        assert_eq!(resolve_slug(None, None), None);
    }
}
