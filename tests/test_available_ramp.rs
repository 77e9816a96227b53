use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;

use ramp_availability::domain::ramp::{CargoType, Ramp};
use ramp_availability::domain::reservation::{ReservationStatus, ReservationWindow};
use ramp_availability::domain::resolver::AvailableRampResolver;
use ramp_availability::error::Error;
use ramp_availability::sources::mock::{MockRampCatalog, MockReservationSource};

const BRANCH_ID: i64 = 4;

fn ramp(id: i64, name: &str) -> Ramp {
    Ramp { id, name: name.to_string(), branch_id: BRANCH_ID, is_available: true, capabilities: CargoType::default_for_name(name) }
}

fn datetime(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn reservation(ramp_id: i64, status: ReservationStatus) -> ReservationWindow {
    ReservationWindow {
        ramp_id,
        branch_id: BRANCH_ID,
        start_time: datetime("2026-09-01 08:00:00"),
        end_time: datetime("2026-09-01 10:00:00"),
        status,
    }
}

fn resolver(catalog: Arc<MockRampCatalog>, reservations: Arc<MockReservationSource>) -> AvailableRampResolver {
    AvailableRampResolver::new(catalog, reservations, Duration::from_secs(2))
}

#[tokio::test]
async fn reserved_ramp_is_skipped_in_favor_of_the_free_one() {
    // Scenario: ramps [A, B], an active reservation references A.
    let catalog = Arc::new(MockRampCatalog::with_ramps(vec![ramp(1, "Rampa 1"), ramp(2, "Rampa 2")]));
    let reservations = Arc::new(MockReservationSource::with_reservations(vec![reservation(1, ReservationStatus::Confirmed)]));

    let free = resolver(catalog, reservations)
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 07:00:00"), datetime("2026-09-01 12:00:00"))
        .await
        .unwrap();

    assert_eq!(free.id, 2, "The reserved ramp must be skipped");
}

#[tokio::test]
async fn all_ramps_reserved_means_no_free_ramp() {
    let catalog = Arc::new(MockRampCatalog::with_ramps(vec![ramp(1, "Rampa 1"), ramp(2, "Rampa 2")]));
    let reservations = Arc::new(MockReservationSource::with_reservations(vec![
        reservation(1, ReservationStatus::Confirmed),
        reservation(2, ReservationStatus::Pending),
    ]));

    let err = resolver(catalog, reservations)
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 07:00:00"), datetime("2026-09-01 12:00:00"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoFreeRamp(_)), "Expected no-free-ramp, got: {err}");
    assert!(err.is_not_available());
}

#[tokio::test]
async fn empty_catalog_surfaces_the_same_no_free_ramp_condition() {
    let catalog = Arc::new(MockRampCatalog::with_ramps(Vec::new()));
    let reservations = Arc::new(MockReservationSource::default());

    let err = resolver(catalog, reservations)
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 07:00:00"), datetime("2026-09-01 12:00:00"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoFreeRamp(_)), "Empty catalog and all-conflicting are indistinguishable by design");
}

#[tokio::test]
async fn first_ramp_in_catalog_order_wins() {
    // Catalog order is not id order. No ranking is applied.
    let catalog = Arc::new(MockRampCatalog::with_ramps(vec![ramp(9, "Rampa 3"), ramp(2, "Rampa 2")]));
    let reservations = Arc::new(MockReservationSource::default());

    let free = resolver(catalog, reservations)
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 07:00:00"), datetime("2026-09-01 12:00:00"))
        .await
        .unwrap();

    assert_eq!(free.id, 9, "The first catalog entry must win, regardless of ramp id");
}

#[tokio::test]
async fn cancelled_reservations_do_not_block_a_ramp() {
    let catalog = Arc::new(MockRampCatalog::with_ramps(vec![ramp(1, "Rampa 1")]));
    let reservations = Arc::new(MockReservationSource::with_reservations(vec![reservation(1, ReservationStatus::Cancelled)]));

    let free = resolver(catalog, reservations)
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 07:00:00"), datetime("2026-09-01 12:00:00"))
        .await
        .unwrap();

    assert_eq!(free.id, 1);
}

#[tokio::test]
async fn unavailable_ramps_are_never_resolved() {
    let mut offline = ramp(1, "Rampa 1");
    offline.is_available = false;
    let catalog = Arc::new(MockRampCatalog::with_ramps(vec![offline, ramp(2, "Rampa 2")]));
    let reservations = Arc::new(MockReservationSource::default());

    let free = resolver(catalog, reservations)
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 07:00:00"), datetime("2026-09-01 12:00:00"))
        .await
        .unwrap();

    assert_eq!(free.id, 2);
}

#[tokio::test]
async fn inverted_range_is_rejected_before_any_fetch() {
    let catalog = Arc::new(MockRampCatalog::with_ramps(vec![ramp(1, "Rampa 1")]));
    let reservations = Arc::new(MockReservationSource::default());

    let err = resolver(catalog.clone(), reservations.clone())
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 12:00:00"), datetime("2026-09-01 07:00:00"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidDateRange { .. }));
    assert!(err.is_validation());
    assert_eq!(catalog.call_count(), 0, "Validation must short-circuit before the join point");
    assert_eq!(reservations.call_count(), 0);
}

#[tokio::test]
async fn failed_reservation_fetch_is_fatal_for_the_resolution() {
    let catalog = Arc::new(MockRampCatalog::with_ramps(vec![ramp(1, "Rampa 1")]));
    let mut failing = MockReservationSource::default();
    failing.fail = true;
    let reservations = Arc::new(failing);

    let err = resolver(catalog.clone(), reservations)
        .find_free_ramp(BRANCH_ID, datetime("2026-09-01 07:00:00"), datetime("2026-09-01 12:00:00"))
        .await
        .unwrap_err();

    assert!(err.is_upstream(), "Both fetches of the join point are required, got: {err}");
    assert_eq!(catalog.call_count(), 1, "The catalog fetch still runs; the join waits for both");
}
