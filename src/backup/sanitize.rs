//! Filesystem-safe names

use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-. ]").expect("Invalid sanitize pattern"));

/// Replace every character outside `[A-Za-z0-9_-. ]` with `_`.
///
/// The character count is preserved. Distinct names may collide.
pub fn sanitize(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "_").into_owned()
}

/// Sanitize a name for use as a single path component.
///
/// On top of [`sanitize`], names made only of periods (`.`, `..`) have their
/// periods replaced and an empty name becomes `_`, so the component can never
/// point at itself or its parent.
pub fn safe_segment(name: &str) -> String {
    let clean = sanitize(name);
    if clean.is_empty() {
        "_".to_string()
    } else if clean.chars().all(|c| c == '.') {
        "_".repeat(clean.len())
    } else {
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Sales Overview",
        "Q1/Q2: Finance",
        "../../etc",
        "Ünïcödé 数据",
        "tabs\tand\nnewlines",
        "already_safe-name.v2",
        "",
        "..",
        "C:\\Reports",
        "a*b?c<d>e|f\"g",
    ];

    #[test]
    fn test_sanitize_replaces_unsafe_chars() {
        assert_eq!(sanitize("Q1/Q2: Finance"), "Q1_Q2_ Finance");
        assert_eq!(sanitize("C:\\Reports"), "C__Reports");
        assert_eq!(sanitize("already_safe-name.v2"), "already_safe-name.v2");
        assert_eq!(sanitize("Ünï"), "___");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for sample in SAMPLES {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "input {:?}", sample);
        }
    }

    #[test]
    fn test_sanitize_preserves_length() {
        for sample in SAMPLES {
            assert_eq!(
                sanitize(sample).chars().count(),
                sample.chars().count(),
                "input {:?}",
                sample
            );
        }
    }

    #[test]
    fn test_sanitize_output_alphabet() {
        for sample in SAMPLES {
            assert!(sanitize(sample)
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "_-. ".contains(c)));
        }
    }

    #[test]
    fn test_safe_segment_blocks_relative_components() {
        assert_eq!(safe_segment(".."), "__");
        assert_eq!(safe_segment("."), "_");
        assert_eq!(safe_segment(""), "_");
        assert_eq!(safe_segment("../x"), ".._x");
        assert_eq!(safe_segment("Reports"), "Reports");
    }

    #[test]
    fn test_safe_segment_is_idempotent() {
        for sample in SAMPLES {
            let once = safe_segment(sample);
            assert_eq!(safe_segment(&once), once, "input {:?}", sample);
        }
    }
}
