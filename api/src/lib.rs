//! This crate contains the data model shared by the staking site front-ends.
//!
//! Nothing in here renders. Components in the `ui` crate receive these types
//! as props and only read them.

pub mod catalog;
pub mod epoch;
pub mod nav_item;
pub mod prefs;
pub mod provider_state;
pub mod resource;
pub mod stake_pool;
pub mod website_paths;

pub use catalog::CatalogError;
