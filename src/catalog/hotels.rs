//! Hotels

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::catalog::Listing;

/// A hotel offer in a trip plan's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel<'a> {
    /// Catalog identifier
    pub id: String,

    /// Hotel name
    pub name: String,

    /// Star rating
    pub stars: u8,

    /// Nightly rate
    pub price_per_night: Money<'a, Currency>,

    /// Price for the whole stay, already multiplied by the number of nights
    pub total_price: Money<'a, Currency>,

    /// Headline amenities
    pub amenities: SmallVec<[String; 5]>,

    /// Average guest rating
    pub rating: Decimal,

    /// Number of guest reviews behind the rating
    pub review_count: u32,

    /// Neighbourhood or area
    pub location: String,

    /// Property type (resort, boutique hotel, ...)
    pub kind: String,

    /// Flagged as the planner's recommendation
    pub recommended: bool,
}

impl Listing for Hotel<'_> {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_recommended(&self) -> bool {
        self.recommended
    }
}
