// crates/wilayah-core/src/traits.rs
use crate::model::{District, Province, Regency, RegionRef, Village};
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
///
/// # Examples
/// ```rust
/// use wilayah_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Gondokusuman").is_named("GONDOKUSUMAN"));
/// assert!(Place("Kota Yogyakarta").name_contains("yogya"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_key(q))
    }

    /// Substring match against an already folded query.
    #[inline]
    fn name_contains_folded(&self, folded_query: &str) -> bool {
        fold_key(self.name_str()).contains(folded_query)
    }
}

impl NameMatch for Province {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Regency {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for District {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Village {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for RegionRef<'_> {
    fn name_str(&self) -> &str {
        self.name()
    }
}
