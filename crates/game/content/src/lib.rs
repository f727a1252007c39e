//! Data-driven card content and loaders.
//!
//! This crate houses the static card sets and provides loaders for RON data
//! files. Content is consumed through the [`eclipse_core::CardCatalog`]
//! trait at match initialization and never appears in game state.
//!
//! All loaders deserialize directly into `eclipse-core` types via serde.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::StaticCatalog;

#[cfg(feature = "loaders")]
pub use loaders::CardLoader;
