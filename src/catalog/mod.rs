//! Catalog
//!
//! Immutable flight and hotel listings attached to a trip plan, and the lookup rules every
//! consumer shares: an unknown id resolves to the first listing, a fresh plan starts from its
//! recommended listing.

pub mod flights;
pub mod hotels;

/// A catalog entry that can be selected by id.
pub trait Listing {
    /// Identifier used by the selection state.
    fn id(&self) -> &str;

    /// Whether the planning step flagged this entry as its recommendation.
    fn is_recommended(&self) -> bool;
}

/// Finds the listing with the given id, falling back to the first listing.
///
/// Returns `None` only when the catalog is empty.
pub fn resolve<'c, L: Listing>(listings: &'c [L], id: &str) -> Option<&'c L> {
    listings
        .iter()
        .find(|listing| listing.id() == id)
        .or_else(|| listings.first())
}

/// Returns the first recommended listing, or the first listing when none is recommended.
pub fn recommended_or_first<L: Listing>(listings: &[L]) -> Option<&L> {
    listings
        .iter()
        .find(|listing| listing.is_recommended())
        .or_else(|| listings.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        id: &'static str,
        recommended: bool,
    }

    impl Listing for Entry {
        fn id(&self) -> &str {
            self.id
        }

        fn is_recommended(&self) -> bool {
            self.recommended
        }
    }

    const ENTRIES: [Entry; 3] = [
        Entry {
            id: "a",
            recommended: false,
        },
        Entry {
            id: "b",
            recommended: true,
        },
        Entry {
            id: "c",
            recommended: true,
        },
    ];

    #[test]
    fn resolve_finds_matching_id() {
        assert_eq!(resolve(&ENTRIES, "c").map(Listing::id), Some("c"));
    }

    #[test]
    fn resolve_falls_back_to_first_entry() {
        assert_eq!(resolve(&ENTRIES, "missing").map(Listing::id), Some("a"));
    }

    #[test]
    fn resolve_on_empty_catalog_is_none() {
        let empty: [Entry; 0] = [];

        assert!(resolve(&empty, "a").is_none());
    }

    #[test]
    fn recommended_or_first_prefers_first_recommended() {
        assert_eq!(recommended_or_first(&ENTRIES).map(Listing::id), Some("b"));
    }

    #[test]
    fn recommended_or_first_without_recommendation_takes_first() {
        let entries = [
            Entry {
                id: "x",
                recommended: false,
            },
            Entry {
                id: "y",
                recommended: false,
            },
        ];

        assert_eq!(recommended_or_first(&entries).map(Listing::id), Some("x"));
    }
}
