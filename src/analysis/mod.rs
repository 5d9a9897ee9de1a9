//! Derived views of the shared rainfall record.
//!
//! Each viewer polls the same record and derives its own facet from it.
//! The derivations live here so they can be tested without any UI.
//!
//! Submodules:
//! - `cities`: severity ordering and aggregates over affected cities.
//! - `statistics`: running average/max/min across polls.
//! - `history`: bounded sample buffer behind the rainfall chart.
//! - `outlook`: trend, duration, and regional-impact sentences.

pub mod cities;
pub mod history;
pub mod outlook;
pub mod statistics;
