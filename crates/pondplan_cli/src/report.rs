//! Text report rendering.

use pondplan_core::{CoreResult, PondPlanner};
use std::fmt::Write;

/// Renders the full planning report for the planner's current state.
///
/// # Errors
///
/// Fails if dimensions are not set or any calculator fails; formatting
/// itself cannot fail.
pub fn render(planner: &PondPlanner) -> CoreResult<String> {
    let dimensions = planner
        .dimensions()
        .cloned()
        .ok_or_else(|| pondplan_core::CoreError::validation("pond dimensions not set"))?;

    let volume = planner.volume_liters()?;
    let required = planner.required_volume()?;
    let bioload = planner.bioload()?;
    let pump = planner.pump_size()?;
    let filter = planner.filter_specs()?;
    let recommendations = planner.stocking_recommendations()?;
    let stock = planner.stock();

    let mut report = String::new();

    // Writes into a String cannot fail.
    let _ = writeln!(report, "POND PLANNING REPORT");
    let _ = writeln!(report, "====================");
    let _ = writeln!(report);
    let _ = writeln!(report, "Pond Specifications:");
    let _ = writeln!(
        report,
        "- Dimensions: {}m x {}m x {}m",
        dimensions.length_m, dimensions.width_m, dimensions.avg_depth_m
    );
    let _ = writeln!(report, "- Shape: {}", title_case(&dimensions.shape));
    let _ = writeln!(report, "- Total Volume: {volume:.0} liters");
    let _ = writeln!(report);
    let _ = writeln!(report, "Current Fish Stock:");

    if stock.is_empty() {
        let _ = writeln!(report, "- No fish currently stocked");
    } else {
        let species = planner.species_catalog();
        for (key, quantity) in &stock {
            let display = species.get(key)?.name.clone();
            let _ = writeln!(report, "- {display}: {quantity} fish");
        }

        let status = if volume >= required {
            "Adequate"
        } else {
            "Overstocked"
        };
        let _ = writeln!(report);
        let _ = writeln!(report, "Stocking Analysis:");
        let _ = writeln!(report, "- Required Volume: {required:.0} liters");
        let _ = writeln!(report, "- Available Volume: {volume:.0} liters");
        let _ = writeln!(report, "- Status: {status}");
        let _ = writeln!(report, "- Total Bioload: {bioload:.1}");
    }

    let _ = writeln!(report);
    let _ = writeln!(report, "Equipment Recommendations:");
    let _ = writeln!(
        report,
        "- Pump Size: {} LPH ({})",
        pump.flow_lph, pump.category
    );
    let _ = writeln!(
        report,
        "- Biological Filter: {} liters filter media",
        filter.bio_media_liters
    );
    let _ = writeln!(report, "- UV Sterilizer: {} watts", filter.uv_watts);
    let _ = writeln!(report, "- Mechanical Filter: {}", filter.mechanical);
    let _ = writeln!(report);
    let _ = writeln!(report, "Maximum Stocking Recommendations:");
    for (name, max_count) in &recommendations {
        let _ = writeln!(report, "- {name}: {max_count} fish max");
    }

    Ok(report)
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
