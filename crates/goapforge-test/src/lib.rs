//! Shared test fixtures for GoapForge crates.
//!
//! This crate provides small planning problems as wire inputs. It only
//! depends on `goapforge-core`, so `goapforge-core` itself cannot use it.
//!
//! - [`needs`] - hunger, toggle, string and reference-argument problems
//! - [`routes`] - problems where cost decides between paths
//! - [`limits`] - problems that exhaust the search or never converge
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! goapforge-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use goapforge_test::needs::hunger;
//!
//! let (model, initial, goal) = hunger(3).build();
//! ```

pub mod limits;
pub mod needs;
pub mod routes;
pub mod scenario;

pub use scenario::Scenario;
