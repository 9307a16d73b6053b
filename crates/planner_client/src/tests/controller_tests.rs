use super::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use shared::domain::{Activity, DayPlan};

use crate::{error::SUBMISSION_FAILED_MESSAGE, notify::Severity};

#[derive(Default)]
struct RecordingNotifier {
    received: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }
}

struct FakePlanner {
    calls: AtomicUsize,
    requests: Mutex<Vec<TripRequest>>,
    respond: fn() -> Result<Itinerary, SubmissionError>,
}

impl FakePlanner {
    fn new(respond: fn() -> Result<Itinerary, SubmissionError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            respond,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanningService for FakePlanner {
    async fn plan(&self, request: &TripRequest) -> Result<Itinerary, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        (self.respond)()
    }
}

fn lisbon_itinerary() -> Result<Itinerary, SubmissionError> {
    let mut itinerary = Itinerary::new();
    itinerary.insert(
        "Day 1",
        DayPlan {
            title: "Arrival".into(),
            activities: vec![Activity {
                name: "Check-in".into(),
                location: "Hotel".into(),
                ..Activity::default()
            }],
        },
    );
    Ok(itinerary)
}

fn server_error() -> Result<Itinerary, SubmissionError> {
    Err(SubmissionError::Status {
        status: 500,
        detail: "internal error".into(),
    })
}

fn filled_controller() -> FormController {
    let mut controller = FormController::new();
    controller.update_field(TripField::Age, "29");
    controller.update_field(TripField::Gender, "female");
    controller.update_field(TripField::Personality, "adventurous");
    controller.update_field(TripField::Days, "5");
    controller.update_field(TripField::Origin, "Boston");
    controller.update_field(TripField::Destination, "Lisbon");
    controller
}

#[test]
fn starts_idle_with_an_empty_request() {
    let controller = FormController::new();
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(!controller.is_loading());
    assert_eq!(controller.request(), Some(&TripRequest::default()));
    assert!(controller.itinerary().is_none());
}

#[test]
fn each_field_keeps_its_own_last_edit() {
    let mut controller = FormController::new();
    let edits = [
        (TripField::Origin, "Bos"),
        (TripField::Destination, "Lis"),
        (TripField::Origin, "Boston"),
        (TripField::Age, "2"),
        (TripField::Destination, "Lisbon"),
        (TripField::Age, "29"),
        (TripField::Personality, ""),
    ];
    for (field, value) in edits {
        controller.update_field(field, value);
    }

    let request = controller.request().expect("form mounted");
    assert_eq!(request.origin, "Boston");
    assert_eq!(request.destination, "Lisbon");
    assert_eq!(request.age, "29");
    assert_eq!(request.personality, "");
    assert_eq!(request.gender, "");
    assert_eq!(request.days, "");
}

#[test]
fn repeating_an_edit_changes_nothing() {
    let mut once = filled_controller();
    once.update_field(TripField::Gender, "male");

    let mut twice = filled_controller();
    twice.update_field(TripField::Gender, "male");
    twice.update_field(TripField::Gender, "male");

    assert_eq!(once.request(), twice.request());
    assert_eq!(once.phase(), twice.phase());
}

#[tokio::test]
async fn empty_field_blocks_the_request() {
    for field in TripField::ALL {
        let mut controller = filled_controller();
        controller.update_field(field, "");
        let planner = FakePlanner::new(lisbon_itinerary);
        let mut notifier = RecordingNotifier::default();

        let rejected = controller
            .submit(&planner, &mut notifier)
            .await
            .expect_err("missing field must be rejected");

        assert_eq!(rejected, SubmitRejected::MissingField(field));
        assert_eq!(rejected.field(), Some(field));
        assert_eq!(planner.calls(), 0);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(notifier.received.is_empty());
    }
}

#[test]
fn numeric_fields_follow_widget_constraints() {
    let mut controller = filled_controller();
    controller.update_field(TripField::Age, "twenty");
    assert_eq!(
        controller.begin_submit(),
        Err(SubmitRejected::NotANumber(TripField::Age))
    );

    controller.update_field(TripField::Age, "29");
    controller.update_field(TripField::Days, "0");
    assert_eq!(
        controller.begin_submit(),
        Err(SubmitRejected::BelowMinimum {
            field: TripField::Days,
            min: 1
        })
    );
    assert_eq!(controller.phase(), Phase::Idle);

    controller.update_field(TripField::Days, "1");
    assert!(controller.begin_submit().is_ok());
}

#[tokio::test]
async fn successful_submission_mounts_the_result_view() {
    let mut controller = filled_controller();
    let planner = FakePlanner::new(lisbon_itinerary);
    let mut notifier = RecordingNotifier::default();

    let phase = controller
        .submit(&planner, &mut notifier)
        .await
        .expect("submitted");

    assert_eq!(phase, Phase::ResultReady);
    assert_eq!(planner.calls(), 1);
    let sent = planner.requests.lock().expect("lock")[0].clone();
    assert_eq!(sent.destination, "Lisbon");
    assert_eq!(sent.days, "5");
    assert!(notifier.received.is_empty());
    assert!(controller.request().is_none());

    match controller.view() {
        PlannerView::Result(result) => {
            assert_eq!(result.destination, "Lisbon");
            assert_eq!(
                result.itinerary.get("Day 1").map(|day| day.title.as_str()),
                Some("Arrival")
            );
        }
        PlannerView::Form(_) => panic!("expected the result view"),
    }
}

#[tokio::test]
async fn failed_submission_returns_to_idle_with_one_notification() {
    let mut controller = filled_controller();
    let planner = FakePlanner::new(server_error);
    let mut notifier = RecordingNotifier::default();

    let phase = controller
        .submit(&planner, &mut notifier)
        .await
        .expect("submitted");

    assert_eq!(phase, Phase::Idle);
    assert!(!controller.is_loading());
    assert!(controller.itinerary().is_none());
    assert_eq!(planner.calls(), 1);
    assert_eq!(notifier.received.len(), 1);
    assert_eq!(notifier.received[0].severity, Severity::Error);
    assert_eq!(notifier.received[0].message, SUBMISSION_FAILED_MESSAGE);
    assert_eq!(
        controller.request().map(|request| request.origin.as_str()),
        Some("Boston")
    );
}

#[tokio::test]
async fn failure_leaves_the_form_retryable() {
    let mut controller = filled_controller();
    let mut notifier = RecordingNotifier::default();

    let failing = FakePlanner::new(server_error);
    controller
        .submit(&failing, &mut notifier)
        .await
        .expect("submitted");

    let working = FakePlanner::new(lisbon_itinerary);
    let phase = controller
        .submit(&working, &mut notifier)
        .await
        .expect("submitted");

    assert_eq!(phase, Phase::ResultReady);
    assert_eq!(notifier.received.len(), 1);
}

#[test]
fn second_submit_while_loading_is_refused() {
    let mut controller = filled_controller();
    controller.begin_submit().expect("first submit");
    assert_eq!(controller.phase(), Phase::Loading);

    assert_eq!(controller.begin_submit(), Err(SubmitRejected::InFlight));
    assert_eq!(controller.phase(), Phase::Loading);
}

#[test]
fn result_view_is_terminal() {
    let mut controller = filled_controller();
    let mut notifier = RecordingNotifier::default();
    controller.begin_submit().expect("submit");
    controller.finish_submit(lisbon_itinerary(), &mut notifier);

    assert_eq!(
        controller.begin_submit(),
        Err(SubmitRejected::AlreadyPlanned)
    );
    controller.update_field(TripField::Destination, "Madrid");
    assert_eq!(controller.phase(), Phase::ResultReady);
    match controller.view() {
        PlannerView::Result(result) => assert_eq!(result.destination, "Lisbon"),
        PlannerView::Form(_) => panic!("expected the result view"),
    }

    assert_eq!(
        controller.finish_submit(server_error(), &mut notifier),
        Phase::ResultReady
    );
    assert!(notifier.received.is_empty());
}

#[test]
fn outcome_without_a_request_in_flight_is_dropped() {
    let mut controller = filled_controller();
    let mut notifier = RecordingNotifier::default();

    assert_eq!(
        controller.finish_submit(server_error(), &mut notifier),
        Phase::Idle
    );
    assert!(notifier.received.is_empty());
    assert_eq!(
        controller.finish_submit(lisbon_itinerary(), &mut notifier),
        Phase::Idle
    );
    assert!(controller.itinerary().is_none());
}

#[test]
fn destination_edited_while_loading_labels_the_result() {
    let mut controller = filled_controller();
    let mut notifier = RecordingNotifier::default();
    let sent = controller.begin_submit().expect("submit");
    controller.update_field(TripField::Destination, "Lisbon, Portugal");
    controller.finish_submit(lisbon_itinerary(), &mut notifier);

    assert_eq!(sent.destination, "Lisbon");
    match controller.view() {
        PlannerView::Result(result) => assert_eq!(result.destination, "Lisbon, Portugal"),
        PlannerView::Form(_) => panic!("expected the result view"),
    }
}
