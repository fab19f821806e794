//! Localized paragraphs chosen by the metrics calculator's buckets.

use crate::core::format::format_value;
use crate::core::metrics::{AgeCommentary, DerivedMetrics, PaceBand};
use crate::t;

pub fn age_paragraph(commentary: &AgeCommentary) -> String {
    match *commentary {
        AgeCommentary::Average { bio_age } => t!("bio-age-average", bio_age = format_value(bio_age)),
        AgeCommentary::Younger {
            bio_age,
            chro_age,
            diff_age,
        } => t!(
            "bio-age-younger",
            bio_age = format_value(bio_age),
            chro_age = format_value(chro_age),
            diff_age = format_value(diff_age)
        ),
        AgeCommentary::Older {
            bio_age,
            chro_age,
            diff_age,
        } => t!(
            "bio-age-older",
            bio_age = format_value(bio_age),
            chro_age = format_value(chro_age),
            diff_age = format_value(diff_age)
        ),
    }
}

/// Pace value and peer comparison, shown above the band paragraph.
pub fn pace_summary(metrics: &DerivedMetrics) -> String {
    t!(
        "pace-summary",
        pace_value = format_value(metrics.pace_value),
        pace_pr_inverse = format_value(metrics.pace_pr_inverse)
    )
}

pub fn pace_band_text(band: PaceBand) -> String {
    match band {
        PaceBand::NotablySlow => t!("pace-band-notably-slow"),
        PaceBand::SlightlySlow => t!("pace-band-slightly-slow"),
        PaceBand::Normal => t!("pace-band-normal"),
        PaceBand::SlightlyFast => t!("pace-band-slightly-fast"),
        PaceBand::NotablyFast => t!("pace-band-notably-fast"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::compute;
    use crate::core::report::fixtures::report;

    #[test]
    fn age_paragraphs_interpolate_rounded_values() {
        crate::i18n::init();
        let younger = compute(&report("LU0003", 28.04, 33.9, 0.78, 91.0));
        let text = age_paragraph(&younger.age_commentary);
        assert!(text.contains("28.04"), "{text}");
        assert!(text.contains("33.9"), "{text}");
        assert!(text.contains("5.86"), "{text}");

        let average = compute(&report("LU0001", 35.456, 37.0, 1.05, 60.0));
        let text = age_paragraph(&average.age_commentary);
        assert!(text.contains("35.46"), "{text}");
        assert!(!text.contains("1.54"), "{text}");
    }

    #[test]
    fn pace_summary_mentions_inverse_percentile() {
        crate::i18n::init();
        let metrics = compute(&report("LU0001", 35.456, 37.0, 1.05, 60.0));
        let text = pace_summary(&metrics);
        assert!(text.contains("1.05"), "{text}");
        assert!(text.contains("40%"), "{text}");
    }

    #[test]
    fn every_band_has_distinct_copy() {
        crate::i18n::init();
        let texts: Vec<_> = [
            PaceBand::NotablySlow,
            PaceBand::SlightlySlow,
            PaceBand::Normal,
            PaceBand::SlightlyFast,
            PaceBand::NotablyFast,
        ]
        .into_iter()
        .map(pace_band_text)
        .collect();
        for (i, a) in texts.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
