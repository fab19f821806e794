//! Lookup flow end to end against the bundled dataset.

use ui::config::BUNDLED_REPORTS;
use ui::core::error::ReportError;
use ui::core::fetch::{load_collection, DataSource};
use ui::core::lookup::{LookupState, MissCause, ReportLookup};

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime")
        .block_on(fut)
}

fn run(route_param: &str, source: DataSource) -> LookupState {
    let mut lookup = ReportLookup::new();
    let ticket = lookup.begin(route_param).expect("idle lookup accepts a load");
    let outcome = block_on(load_collection(&source, 2_000));
    lookup.complete(&ticket, outcome).clone()
}

#[test]
fn bundled_sample_is_found_with_metrics() {
    let state = run("LU0001", DataSource::Embedded(BUNDLED_REPORTS));
    let loaded = state.report().expect("LU0001 is bundled");
    assert_eq!(loaded.raw.sample_id, "LU0001");
    assert_eq!(loaded.metrics.bio_age, 35.46);
    assert_eq!(loaded.metrics.diff_age, 1.54);
    assert_eq!(loaded.metrics.pace_pr_inverse, 40.0);
}

#[test]
fn numeric_route_falls_back_to_position() {
    let state = run("2", DataSource::Embedded(BUNDLED_REPORTS));
    assert_eq!(state.report().unwrap().raw.sample_id, "LU0003");
}

#[test]
fn unknown_sample_is_a_plain_miss() {
    let state = run("LU9999", DataSource::Embedded(BUNDLED_REPORTS));
    assert_eq!(
        state,
        LookupState::NotFound {
            sample_id: "LU9999".into(),
            cause: MissCause::NoMatch,
        }
    );
}

#[test]
fn broken_source_is_reported_as_unavailable() {
    let state = run("LU0001", DataSource::File("/definitely/not/here.json".into()));
    match state {
        LookupState::NotFound {
            cause: MissCause::Unavailable(ReportError::Fetch(_)),
            ..
        } => {}
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn every_bundled_record_renders_metrics() {
    let collection = block_on(load_collection(&DataSource::Embedded(BUNDLED_REPORTS), 2_000)).unwrap();
    for raw in &collection.reports {
        let state = run(&raw.sample_id, DataSource::Embedded(BUNDLED_REPORTS));
        let loaded = state.report().expect("bundled records are valid");
        assert!(loaded.metrics.pace_pr_inverse >= 0.0);
    }
}
