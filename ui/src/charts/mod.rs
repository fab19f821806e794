//! SVG charts for the report sections.
//!
//! Each chart keeps its geometry in plain functions so the on-page component
//! and the share snapshot in [`snapshot`] draw from the same numbers.

pub mod aging_speed;
pub mod gauge;
pub mod labels;
pub mod radar;
pub mod risk_table;
pub mod snapshot;

pub use aging_speed::AgingSpeedPlot;
pub use gauge::GaugeChart;
pub use radar::DiseaseRisksPlot;
pub use risk_table::DiseaseRisksTable;

/// Coordinate text with at most three decimals and no trailing zeros.
pub(crate) fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_coord;

    #[test]
    fn coords_are_trimmed() {
        assert_eq!(fmt_coord(12.060000000000002), "12.06");
        assert_eq!(fmt_coord(30.0), "30");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(-4.25), "-4.25");
    }
}
