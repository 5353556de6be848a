//! # pondplan core
//!
//! Transactional pond planning engine.
//!
//! This crate provides:
//! - A nested transaction engine with savepoint support
//! - Validated stock and dimensions stores routed through it
//! - Shape-dispatched volume calculation
//! - Stocking and equipment sizing calculators
//! - The [`PondPlanner`] facade tying them together
//!
//! All state is owned by one logical session and mutated synchronously;
//! catalogs are injected read-only via the `pondplan_catalog` traits.

mod config;
mod dimensions;
pub mod equipment;
mod error;
mod planner;
mod stock;
mod stocking;
mod transaction;
mod volume;

pub use config::StockLimits;
pub use dimensions::{validate_dimensions, Dimensions, DimensionsHolder};
pub use equipment::{
    filter_specs, pump_size, BioloadCategory, FilterRecommendation, PumpRecommendation,
    MECHANICAL_FILTER,
};
pub use error::{CoreError, CoreResult};
pub use planner::PondPlanner;
pub use stock::{StockManager, StockMap};
pub use stocking::StockingCalculator;
pub use transaction::TransactionEngine;
pub use volume::{VolumeCalculator, LITERS_PER_CUBIC_METER};
