// crates/wilayah-core/src/text.rs
//! Text folding used for name matching and ordering.

use std::cmp::Ordering;

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// Transliterates Unicode to ASCII with `deunicode` and lowercases the
/// result, so `"Pulau Seribu Utara"`, `"pulau seribu utara"` and accented
/// spellings fold to the same key.
///
/// ```rust
/// use wilayah_core::text::fold_key;
///
/// assert_eq!(fold_key("Bojonegoro"), "bojonegoro");
/// assert_eq!(fold_key("Médan"), "medan");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// `true` when both strings are equal after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Sort key giving locale-style ordering: folded form first, then the raw
/// text with its case inverted, so lowercase sorts before uppercase
/// (`aceh`, `Aceh`, `ACEH`) and unaccented before accented.
pub fn sort_key(s: &str) -> (String, String) {
    (fold_key(s), swap_case(s))
}

/// Locale-style comparison of two display names (see [`sort_key`]).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding_ignores_case_and_accents() {
        assert!(equals_folded("KOTA BANDUNG", "kota bandung"));
        assert!(equals_folded("Sénen", "senen"));
        assert!(!equals_folded("Gambir", "Menteng"));
    }

    #[test]
    fn locale_order_is_case_insensitive() {
        assert_eq!(locale_cmp("bantul", "Sleman"), Ordering::Less);
        assert_eq!(locale_cmp("Sleman", "bantul"), Ordering::Greater);
        assert_eq!(locale_cmp("Aceh", "Aceh"), Ordering::Equal);
        // same folded form: lowercase first, then accents
        assert_eq!(locale_cmp("aceh", "Aceh"), Ordering::Less);
        assert_eq!(locale_cmp("Aceh", "ACEH"), Ordering::Less);
        assert_eq!(locale_cmp("Senen", "Sénen"), Ordering::Less);
    }
}
