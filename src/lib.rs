//! Tripwise
//!
//! Tripwise keeps a trip plan's budget consistent with the traveller's flight and hotel
//! selection. Every selection change recomputes a full per-category breakdown against the
//! traveller's ceiling, classified as under, near or over budget.

pub mod budget;
pub mod catalog;
pub mod config;
pub mod destinations;
pub mod fixtures;
pub mod itinerary;
pub mod narrative;
pub mod observability;
pub mod plan;
pub mod preferences;
pub mod prelude;
pub mod pricing;
pub mod refinement;
pub mod session;
pub mod tiers;

#[cfg(test)]
mod test_support;
