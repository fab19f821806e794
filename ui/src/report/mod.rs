//! The report page: lookup form, report display, commentary copy and sharing.

pub mod commentary;
pub mod display;
pub mod lookup_form;
pub mod share;

pub use display::ReportDisplay;
pub use lookup_form::LookupForm;

use crate::t;

/// The three shareable sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSection {
    BiologicalAge,
    AgingSpeed,
    DiseaseRisks,
}

impl ReportSection {
    pub const ALL: [ReportSection; 3] = [
        ReportSection::BiologicalAge,
        ReportSection::AgingSpeed,
        ReportSection::DiseaseRisks,
    ];

    /// Element id, also used as the in-page `#fragment`.
    pub fn anchor(self) -> &'static str {
        match self {
            ReportSection::BiologicalAge => "biological-age",
            ReportSection::AgingSpeed => "aging-speed",
            ReportSection::DiseaseRisks => "disease-risks",
        }
    }

    pub fn title(self) -> String {
        match self {
            ReportSection::BiologicalAge => t!("section-bio-age"),
            ReportSection::AgingSpeed => t!("section-aging-speed"),
            ReportSection::DiseaseRisks => t!("section-disease-risks"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique_fragments() {
        let anchors: Vec<_> = ReportSection::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["biological-age", "aging-speed", "disease-risks"]);
        for anchor in anchors {
            assert!(anchor.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }
}
