//! Pump and filtration sizing from volume and bioload.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Fixed mechanical pre-filter recommendation.
pub const MECHANICAL_FILTER: &str = "Pre-filter with 50-100 micron capability";

/// Bioload intensity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BioloadCategory {
    /// Bioload of at most 5 points.
    Light,
    /// Bioload of more than 5 and at most 15 points.
    Medium,
    /// Bioload above 15 points.
    Heavy,
}

impl BioloadCategory {
    /// Classifies a bioload value.
    #[must_use]
    pub fn from_bioload(bioload: f64) -> Self {
        if bioload <= 5.0 {
            Self::Light
        } else if bioload <= 15.0 {
            Self::Medium
        } else {
            Self::Heavy
        }
    }
}

impl fmt::Display for BioloadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light bioload"),
            Self::Medium => write!(f, "Medium bioload"),
            Self::Heavy => write!(f, "Heavy bioload"),
        }
    }
}

/// Recommended circulation pump sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpRecommendation {
    /// Required flow rate in liters per hour.
    pub flow_lph: u64,
    /// Bioload classification driving the sizing.
    pub category: BioloadCategory,
}

/// Recommended filtration system sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRecommendation {
    /// Biological filter media volume in liters.
    pub bio_media_liters: u64,
    /// UV sterilizer wattage.
    pub uv_watts: u64,
    /// Mechanical pre-filter recommendation.
    pub mechanical: &'static str,
}

/// Calculates the required pump size.
///
/// The base flow assumes a complete water turnover every 2 hours, increased
/// by 10% per bioload point.
///
/// # Errors
///
/// Fails if the volume is not positive or the bioload is negative.
pub fn pump_size(volume_liters: f64, bioload: f64) -> CoreResult<PumpRecommendation> {
    check_inputs(volume_liters, bioload)?;

    let base_flow = volume_liters / 2.0;
    let bioload_multiplier = 1.0 + bioload / 10.0;
    let flow_lph = (base_flow * bioload_multiplier) as u64;

    Ok(PumpRecommendation {
        flow_lph,
        category: BioloadCategory::from_bioload(bioload),
    })
}

/// Calculates filtration system specifications.
///
/// The biological filter is sized at 5–15% of pond volume depending on
/// bioload; the UV sterilizer at 1 W per 285 L for light bioloads and
/// 1 W per 190 L above 10 points.
///
/// # Errors
///
/// Fails if the volume is not positive or the bioload is negative.
pub fn filter_specs(volume_liters: f64, bioload: f64) -> CoreResult<FilterRecommendation> {
    check_inputs(volume_liters, bioload)?;

    let bio_percent = (5.0 + bioload).min(15.0);
    let bio_media_liters = (volume_liters * bio_percent / 100.0) as u64;

    let uv_watts_per_liter = if bioload <= 10.0 { 1.0 / 285.0 } else { 1.0 / 190.0 };
    let uv_watts = (volume_liters * uv_watts_per_liter) as u64;

    Ok(FilterRecommendation {
        bio_media_liters,
        uv_watts,
        mechanical: MECHANICAL_FILTER,
    })
}

fn check_inputs(volume_liters: f64, bioload: f64) -> CoreResult<()> {
    if volume_liters <= 0.0 {
        return Err(CoreError::validation("pond volume must be positive"));
    }
    if bioload < 0.0 {
        return Err(CoreError::validation("bioload cannot be negative"));
    }
    Ok(())
}
