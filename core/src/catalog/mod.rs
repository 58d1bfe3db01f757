// orderdesk/src/catalog/mod.rs

//! The service -> package -> activity catalog.
//!
//! Catalog data is not persisted: it is seeded at startup and mutated in memory.

pub mod model;
pub mod store;

pub use model::{
  Activity, ActivityInput, ActivityPatch, CascadeReport, CatalogSeed, Package, PackageInput, PackagePatch,
  PackageTier, Service, ServiceInput, ServicePatch,
};
pub use store::{CatalogStore, CatalogView};
