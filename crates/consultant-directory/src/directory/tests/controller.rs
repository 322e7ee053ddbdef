use super::common::*;
use crate::directory::controller::{FilterState, FilterStateController};
use crate::directory::domain::InvalidRangeError;
use crate::directory::executor::QueryExecutor;

fn controller() -> FilterStateController {
    FilterStateController::new(rate_bounds())
}

#[test]
fn starts_from_the_unconstrained_state() {
    let controller = controller();

    assert_eq!(controller.state(), &FilterState::initial(rate_bounds()));
    assert_eq!(controller.current_query_spec(), identity_spec());
    assert_eq!(controller.revision(), 0);
}

#[test]
fn toggling_a_tag_twice_restores_the_previous_state() {
    let mut controller = controller();
    controller.set_text("coach");
    let before = controller.state().clone();

    controller.toggle_tag("Career Coaching");
    assert!(controller.state().selected_tags.contains("Career Coaching"));
    controller.toggle_tag("Career Coaching");

    assert_eq!(controller.state(), &before);
}

#[test]
fn toggling_never_accumulates_duplicates() {
    let mut controller = controller();
    controller.toggle_tag("Career Coaching");
    controller.toggle_tag("Workplace Culture");
    controller.toggle_tag("Career Coaching");
    controller.toggle_tag("Career Coaching");

    let tags: Vec<&str> = controller
        .state()
        .selected_tags
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(tags, vec!["Career Coaching", "Workplace Culture"]);
}

#[test]
fn inverted_rate_range_is_rejected_and_state_is_kept() {
    let mut controller = controller();
    controller
        .set_rate_range(20.0, 120.0)
        .expect("valid range accepted");
    let revision = controller.revision();

    let err = controller.set_rate_range(10.0, 5.0).unwrap_err();

    assert_eq!(
        err,
        InvalidRangeError {
            min: 10.0,
            max: 5.0
        }
    );
    assert_eq!(controller.state().rate_range.min(), 20.0);
    assert_eq!(controller.state().rate_range.max(), 120.0);
    assert_eq!(controller.revision(), revision);
}

#[test]
fn reset_returns_to_the_initial_state() {
    let mut controller = controller();
    controller.set_text("toronto");
    controller.toggle_tag("Workplace Culture");
    controller.set_remote_only(true);
    controller
        .set_rate_range(100.0, 150.0)
        .expect("valid range accepted");

    controller.reset();

    assert_eq!(controller.state(), &FilterState::initial(rate_bounds()));
    assert_eq!(controller.revision(), 5);
}

#[test]
fn query_spec_is_pulled_not_pushed() {
    let snapshot = seeded_snapshot();
    let mut controller = controller();

    let applied = controller.current_query_spec();
    controller.set_text("toronto");

    // results only change once the host pulls a fresh spec
    let stale = QueryExecutor.execute(&snapshot, &compile(&applied));
    assert_eq!(stale.len(), 5);

    let fresh = QueryExecutor.execute(&snapshot, &compile(&controller.current_query_spec()));
    assert_eq!(names(fresh.iter()), vec!["Jane Smith", "Emma Rodriguez"]);
}

#[test]
fn empty_text_projects_to_an_absent_term() {
    let mut controller = controller();
    controller.set_text("");
    assert_eq!(controller.current_query_spec().effective_text(), None);
}

#[test]
fn projected_spec_matches_one_built_through_functional_updates() {
    let mut controller = controller();
    controller.set_text("coach");
    controller.toggle_tag("Career Coaching");
    controller.set_remote_only(true);
    controller
        .set_rate_range(50.0, 150.0)
        .expect("valid range accepted");

    let expected = identity_spec()
        .with_text("coach")
        .with_tags(["Career Coaching"])
        .with_remote_only(true)
        .with_rate_range(50.0, 150.0)
        .expect("valid range");

    let spec = controller.current_query_spec();
    assert_eq!(spec, expected);
    assert_eq!(spec.rate_range().min(), 50.0);
    assert!(spec.required_tags().contains("Career Coaching"));
}
