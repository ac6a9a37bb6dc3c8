//! Catalog validator.
//!
//! `schema` holds the declarative field tables, `engine` walks a parsed
//! document against them, and `report` carries the accumulated violations.

pub mod engine;
pub mod report;
pub mod schema;

pub use engine::{check_catalog, validate};
pub use report::{Subject, ValidationReport, Violation, ViolationKind};
pub use schema::{FieldSpec, Presence, Shape};
