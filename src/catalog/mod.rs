//! Equipment catalog for Lentille.
//!
//! Cameras and telescopes are read-only through the web surface; rows
//! are inserted by seeding.

mod repository;
mod seed;
mod types;

pub use repository::CatalogRepository;
pub use seed::{apply_seed, seed_catalog, CatalogSeed};
pub use types::{EquipmentItem, EquipmentKind, NewEquipmentItem};
