//! Inventory domain module.
//!
//! This crate contains business rules for inventory items, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod draft;
pub mod item;
pub mod query;
pub mod report;
pub mod wire;

pub use draft::ItemDraft;
pub use item::{Item, ValidatedItem};
pub use query::ItemFilter;
pub use report::{CategoryRollup, Report};
pub use wire::{item_record, report_record, ItemRecord, ReportRecord, RollupRecord};
