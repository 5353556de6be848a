//! Proptest strategies for stock operation sequences.

use pondplan_core::{PondPlanner, StockMap};
use proptest::prelude::*;

/// One stock mutation, as applied to a planner.
#[derive(Debug, Clone)]
pub enum StockOp {
    /// Add a quantity of one species.
    Add(String, u32),
    /// Remove a quantity of one species.
    Remove(String, u32),
    /// Add a batch of species atomically.
    BulkAdd(Vec<(String, u32)>),
}

/// Strategy over species keys: mostly fixture species, occasionally an
/// unknown one so rejection paths are exercised.
pub fn species_key() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => prop_oneof![
            Just("goldfish".to_string()),
            Just("koi".to_string()),
            Just("shubunkin".to_string()),
            Just("orfe".to_string()),
            Just("tench".to_string()),
        ],
        1 => Just("unknown_species".to_string()),
    ]
}

/// Strategy over quantities, including zero so validation is exercised.
pub fn quantity() -> impl Strategy<Value = u32> {
    0u32..=20
}

/// Strategy over one stock operation.
pub fn stock_op() -> impl Strategy<Value = StockOp> {
    prop_oneof![
        4 => (species_key(), quantity()).prop_map(|(key, qty)| StockOp::Add(key, qty)),
        4 => (species_key(), quantity()).prop_map(|(key, qty)| StockOp::Remove(key, qty)),
        1 => prop::collection::vec((species_key(), quantity()), 1..4)
            .prop_map(StockOp::BulkAdd),
    ]
}

/// Strategy over operation sequences.
pub fn op_sequence(max_len: usize) -> impl Strategy<Value = Vec<StockOp>> {
    prop::collection::vec(stock_op(), 0..max_len)
}

/// Applies an operation to a planner, ignoring expected rejections.
pub fn apply_op(planner: &mut PondPlanner, op: &StockOp) {
    match op {
        StockOp::Add(key, qty) => {
            let _ = planner.add_fish(key, *qty);
        }
        StockOp::Remove(key, qty) => {
            let _ = planner.remove_fish(key, *qty);
        }
        StockOp::BulkAdd(entries) => {
            let batch: StockMap = entries.iter().cloned().collect();
            let _ = planner.add_fish_batch(&batch);
        }
    }
}
