//! Inbound record handling.
//!
//! Submodules:
//! - `normalize`: coerces loosely-shaped poll bodies into strict records.

pub mod normalize;
