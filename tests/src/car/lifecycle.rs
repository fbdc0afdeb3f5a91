#![cfg(test)]
use std::time::Duration;

use carlot_common::config::Config;
use carlot_core::{Car, CarError, DEFAULT_LOG_DELAY, create_car};
use carlot_integration_tests::recording_factory;

/// Walks a car through the full showroom scenario: greet, depreciate, greet again.
#[test]
fn showroom_greeting_tracks_depreciation() {
    let mut car: Car = create_car("bmw", "5", 40000.0);
    assert_eq!(car.say_hello(), "Hello bmw 5: $40000");

    car.depreciate();
    assert_eq!(car.say_hello(), "Hello bmw 5: $37500");
    assert!(car.has_flag("makebmw"));
}

#[test]
fn rejected_value_leaves_car_usable() -> anyhow::Result<()> {
    let mut car: Car = create_car("bmw", "5", 40000.0);

    let result = car.set_value(-0.5);
    assert!(matches!(result, Err(CarError::InvalidValue { .. })));
    assert_eq!(car.value(), 40000.0);

    car.set_value(12000.0)?;
    car.depreciate();
    assert_eq!(car.say_hello(), "Hello bmw 5: $9500");
    Ok(())
}

#[test]
fn depreciation_runs_past_zero() {
    let mut car: Car = create_car("trabant", "601", 5000.0);
    for _ in 0..4 {
        car.depreciate();
    }
    assert_eq!(car.value(), -5000.0);
}

#[tokio::test(start_paused = true)]
async fn deferred_name_log_respects_default_delay() {
    let (factory, mut rx) = recording_factory(Config::default());
    let car: Car = factory.create_car("bmw", "5", 40000.0);

    car.delay_log_name(None);
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(DEFAULT_LOG_DELAY - Duration::from_millis(1)).await;
    assert!(rx.try_recv().is_err(), "name logged before the default delay");

    let line = rx.recv().await;
    assert_eq!(line.as_deref(), Some("name bmw"));
}

#[tokio::test(start_paused = true)]
async fn deferred_name_logs_fire_after_their_own_delays() {
    let (factory, mut rx) = recording_factory(Config::default());
    let slow: Car = factory.create_car("volvo", "240", 1.0);
    let fast: Car = factory.create_car("mini", "cooper", 1.0);

    slow.delay_log_name(Some(Duration::from_millis(300)));
    fast.delay_log_name(Some(Duration::from_millis(10)));

    assert_eq!(rx.recv().await.as_deref(), Some("name mini"));
    assert_eq!(rx.recv().await.as_deref(), Some("name volvo"));
}
