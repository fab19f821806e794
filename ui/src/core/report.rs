//! Report records as delivered by the data source, plus the two lookup
//! strategies used by the views.

use serde::{Deserialize, Serialize};
use time::Date;

use super::error::ReportError;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// One sample's raw report, exactly as stored in the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawReport {
    pub user_id: String,
    pub sample_id: String,
    #[serde(with = "iso_date")]
    pub collection_date: Date,
    #[serde(with = "iso_date")]
    pub report_date: Date,
    pub bio_age: f64,
    pub chro_age: f64,
    pub pace_value: f64,
    /// Share of the reference population ageing faster than this sample (0–100).
    pub pace_pr: f64,
}

impl RawReport {
    /// Check the record invariants the metrics calculator relies on.
    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.bio_age.is_finite() || !self.chro_age.is_finite() {
            return Err(ReportError::InvalidRecord(format!(
                "sample {} has non-finite ages",
                self.sample_id
            )));
        }
        if !(self.pace_value.is_finite() && self.pace_value > 0.0) {
            return Err(ReportError::InvalidRecord(format!(
                "sample {} has pace_value {} (must be > 0)",
                self.sample_id, self.pace_value
            )));
        }
        if !(0.0..=100.0).contains(&self.pace_pr) {
            return Err(ReportError::InvalidRecord(format!(
                "sample {} has pace_pr {} (must be within 0–100)",
                self.sample_id, self.pace_pr
            )));
        }
        Ok(())
    }

    pub fn info(&self) -> ReportInfo {
        ReportInfo {
            name: self.user_id.clone(),
            sample_id: self.sample_id.clone(),
            collection_date: self.collection_date,
            report_date: self.report_date,
        }
    }
}

/// Header block shown above the report sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInfo {
    pub name: String,
    pub sample_id: String,
    pub collection_date: Date,
    pub report_date: Date,
}

/// Envelope of the data file: `{ "reports": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportCollection {
    #[serde(default)]
    pub reports: Vec<RawReport>,
}

impl ReportCollection {
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Canonical lookup: exact string equality on `sample_id`.
    pub fn find_by_sample_id(&self, sample_id: &str) -> Option<&RawReport> {
        self.reports.iter().find(|r| r.sample_id == sample_id)
    }

    /// Positional lookup used by the original numeric report links.
    pub fn get(&self, index: usize) -> Option<&RawReport> {
        self.reports.get(index)
    }

    /// Resolve a `/report/:id` route parameter. Sample IDs win; a purely
    /// numeric parameter that matches no sample falls back to the record at
    /// that position so older shared links keep working.
    pub fn find_route(&self, param: &str) -> Option<&RawReport> {
        self.find_by_sample_id(param).or_else(|| {
            param
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|index| self.get(index))
        })
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_wire_format_with_iso_dates() {
        let payload = r#"{
            "reports": [{
                "user_id": "王小明",
                "sample_id": "LU0001",
                "collection_date": "2024-07-15",
                "report_date": "2024-08-01",
                "bio_age": 35.456,
                "chro_age": 37.0,
                "pace_value": 1.05,
                "pace_pr": 60
            }]
        }"#;
        let collection = ReportCollection::from_json(payload).unwrap();
        assert_eq!(collection.len(), 1);
        let record = &collection.reports[0];
        assert_eq!(record.collection_date, date!(2024 - 07 - 15));
        assert_eq!(record.pace_pr, 60.0);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = ReportCollection::from_json("{\"reports\": 3}").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn sample_lookup_is_exact() {
        let collection = collection();
        assert!(collection.find_by_sample_id("LU0002").is_some());
        assert!(collection.find_by_sample_id("lu0002").is_none());
        assert!(collection.find_by_sample_id("LU0002 ").is_none());
        assert!(collection.find_by_sample_id("LU9999").is_none());
    }

    #[test]
    fn route_lookup_prefers_sample_id_then_index() {
        let collection = collection();
        assert_eq!(collection.find_route("LU0003").unwrap().sample_id, "LU0003");
        assert_eq!(collection.find_route("1").unwrap().sample_id, "LU0002");
        assert!(collection.find_route("7").is_none());
        assert!(collection.find_route("unknown").is_none());
    }

    #[test]
    fn validation_rejects_broken_invariants() {
        assert!(report("A", 30.0, 30.0, 0.0, 50.0).validate().is_err());
        assert!(report("A", 30.0, 30.0, 1.0, 101.0).validate().is_err());
        assert!(report("A", f64::NAN, 30.0, 1.0, 50.0).validate().is_err());
        assert!(report("A", 30.0, 30.0, 1.0, 0.0).validate().is_ok());
    }
}
