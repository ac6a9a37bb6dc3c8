//! Tool catalog wiring.
//!
//! This module wraps the JSON catalog under `data/tools.json`. Types here
//! mirror the file's fields so the generators can work without ad-hoc JSON
//! handling; the validator reads the raw document instead.

pub mod donations;
pub mod identity;
pub mod model;

pub use donations::{DonationPlatforms, Donations, SponsorLink};
pub use identity::CategoryId;
pub use model::{
    Catalog, Category, DEFAULT_CATEGORY_ORDER, FALLBACK_CATEGORY, Tool, load_document,
};
