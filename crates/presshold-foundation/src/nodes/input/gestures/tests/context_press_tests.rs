use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Emitted {
    Progress(f32, ActivationPhase),
    Activated,
}

fn recording_controller() -> (ContextGestureController, Rc<RefCell<Vec<Emitted>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut controller = ContextGestureController::new();
    controller.set_surface_size(Size::new(100.0, 40.0));
    {
        let log = Rc::clone(&log);
        controller.set_on_progress(move |progress, phase| {
            log.borrow_mut().push(Emitted::Progress(progress, phase));
        });
    }
    {
        let log = Rc::clone(&log);
        controller.set_on_activated(move |_| log.borrow_mut().push(Emitted::Activated));
    }
    (controller, log)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn transition_table_only_allows_the_documented_path() {
    use GestureState::*;
    use GestureTransition::*;
    assert_eq!(Idle.next(Begin), Some(Pending));
    assert_eq!(Pending.next(FirstTick), Some(Active));
    assert_eq!(Active.next(Complete), Some(Ended));
    assert_eq!(Ended.next(Reset), Some(Idle));
    for state in [Idle, Pending, Active, Ended] {
        assert_eq!(state.next(Cancel), Some(Idle));
    }
    assert_eq!(Idle.next(FirstTick), None);
    assert_eq!(Pending.next(Complete), None);
    assert_eq!(Active.next(Begin), None);
    assert_eq!(Idle.next(Reset), None);
}

#[test]
fn full_hold_emits_begin_updates_ended_then_activated() {
    let (mut controller, log) = recording_controller();
    assert!(controller.should_begin(Point::new(10.0, 10.0)));
    assert_eq!(controller.state(), GestureState::Pending);
    assert_eq!(controller.current_progress(), 0.0);

    for step in 1..=5 {
        controller.tick(ms(step * 100));
    }

    let log = log.borrow();
    assert_eq!(log.len(), 6, "{log:?}");
    match log[0] {
        Emitted::Progress(p, ActivationPhase::Begin) => assert!(approx(p, 0.2)),
        ref other => panic!("expected begin, got {other:?}"),
    }
    let mut last = 0.2;
    for entry in &log[1..4] {
        match entry {
            Emitted::Progress(p, ActivationPhase::Update) => {
                assert!(*p > last);
                last = *p;
            }
            other => panic!("expected update, got {other:?}"),
        }
    }
    match log[4] {
        Emitted::Progress(p, ActivationPhase::Ended { previous_progress }) => {
            assert_eq!(p, 1.0);
            assert!(approx(previous_progress, 0.8));
        }
        ref other => panic!("expected ended, got {other:?}"),
    }
    assert_eq!(log[5], Emitted::Activated);
    assert_eq!(controller.state(), GestureState::Idle);
    assert_eq!(controller.current_progress(), 0.0);
    assert!(approx(controller.previous_progress(), 0.8));
}

#[test]
fn release_halfway_cancels_silently() {
    let (mut controller, log) = recording_controller();
    assert!(controller.should_begin(Point::new(10.0, 10.0)));
    controller.tick(ms(100));
    controller.tick(ms(250));
    assert!(approx(controller.current_progress(), 0.5));
    let before = log.borrow().len();

    controller.pointer_up();
    controller.tick(ms(600));

    assert_eq!(log.borrow().len(), before);
    assert!(!log
        .borrow()
        .iter()
        .any(|e| matches!(e, Emitted::Activated | Emitted::Progress(_, ActivationPhase::Ended { .. }))));
    assert_eq!(controller.state(), GestureState::Idle);
    assert_eq!(controller.current_progress(), 0.0);
}

#[test]
fn zero_extent_surface_never_begins() {
    let (mut controller, log) = recording_controller();
    controller.set_surface_size(Size::new(0.0, 40.0));
    assert!(!controller.should_begin(Point::new(10.0, 10.0)));
    controller.set_surface_size(Size::new(100.0, 0.0));
    assert!(!controller.should_begin(Point::new(10.0, 10.0)));
    controller.tick(ms(600));
    assert_eq!(controller.state(), GestureState::Idle);
    assert!(log.borrow().is_empty());
}

#[test]
fn negative_or_nan_surface_never_begins() {
    let (mut controller, log) = recording_controller();
    for size in [
        Size::new(-100.0, 40.0),
        Size::new(100.0, -40.0),
        Size::new(f32::NAN, 40.0),
    ] {
        controller.set_surface_size(size);
        assert!(!controller.should_begin(Point::new(10.0, 10.0)), "{size:?}");
        assert_eq!(controller.state(), GestureState::Idle);
    }
    assert!(log.borrow().is_empty());
}

#[test]
fn gating_predicate_vetoes_by_origin() {
    let (mut controller, _log) = recording_controller();
    let asked = Rc::new(RefCell::new(Vec::new()));
    {
        let asked = Rc::clone(&asked);
        controller.set_gating_predicate(move |point| {
            asked.borrow_mut().push(point);
            point.x > 50.0
        });
    }
    assert!(!controller.should_begin(Point::new(10.0, 10.0)));
    assert_eq!(controller.state(), GestureState::Idle);
    assert!(controller.should_begin(Point::new(60.0, 10.0)));
    assert_eq!(controller.state(), GestureState::Pending);
    assert_eq!(asked.borrow().len(), 2, "consulted once per attempt");

    controller.clear_gating_predicate();
    controller.cancel();
    assert!(controller.should_begin(Point::new(10.0, 10.0)));
}

#[test]
fn disabled_controller_rejects_starts() {
    let (mut controller, log) = recording_controller();
    controller.set_enabled(false);
    assert!(!controller.should_begin(Point::new(10.0, 10.0)));
    assert!(log.borrow().is_empty());
    controller.set_enabled(true);
    assert!(controller.should_begin(Point::new(10.0, 10.0)));
}

#[test]
fn disabling_mid_gesture_does_not_cancel_it() {
    let (mut controller, log) = recording_controller();
    assert!(controller.should_begin(Point::new(10.0, 10.0)));
    controller.tick(ms(100));
    controller.set_enabled(false);
    assert_eq!(controller.state(), GestureState::Active);
    controller.tick(ms(500));
    assert_eq!(log.borrow().last(), Some(&Emitted::Activated));

    assert!(!controller.should_begin(Point::new(10.0, 10.0)));
    controller.set_enabled(true);
    assert!(controller.should_begin(Point::new(10.0, 10.0)));
}

#[test]
fn cancel_is_idempotent_in_every_state() {
    let (mut controller, log) = recording_controller();
    controller.cancel();
    assert_eq!(controller.state(), GestureState::Idle);

    assert!(controller.should_begin(Point::ZERO));
    controller.cancel();
    controller.cancel();
    assert_eq!(controller.state(), GestureState::Idle);

    assert!(controller.should_begin(Point::ZERO));
    controller.tick(ms(200));
    controller.cancel();
    assert_eq!(controller.state(), GestureState::Idle);
    assert_eq!(controller.current_progress(), 0.0);

    let emitted = log.borrow().len();
    controller.tick(ms(400));
    controller.tick(ms(800));
    assert_eq!(log.borrow().len(), emitted);
}

#[test]
fn movement_within_slop_survives_and_beyond_cancels() {
    let (mut controller, log) = recording_controller();
    assert!(controller.should_begin(Point::new(20.0, 20.0)));
    controller.tick(ms(100));
    controller.pointer_moved(Point::new(3.0, 0.0));
    controller.pointer_moved(Point::new(0.0, 4.0));
    assert_eq!(controller.state(), GestureState::Active);

    // Moving back toward the origin reduces the displacement.
    controller.pointer_moved(Point::new(-3.0, -4.0));
    controller.pointer_moved(Point::new(7.9, 0.0));
    assert_eq!(controller.state(), GestureState::Active);

    controller.pointer_moved(Point::new(0.5, 0.0));
    assert_eq!(controller.state(), GestureState::Idle);
    controller.tick(ms(600));
    assert!(!log.borrow().contains(&Emitted::Activated));
}

#[test]
fn progress_is_monotonic_even_if_time_goes_backwards() {
    let (mut controller, log) = recording_controller();
    assert!(controller.should_begin(Point::ZERO));
    controller.tick(ms(300));
    controller.tick(ms(100));
    controller.tick_seconds(-1.0);
    controller.tick_seconds(f32::NAN);
    let progresses: Vec<f32> = log
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Emitted::Progress(p, _) => Some(*p),
            Emitted::Activated => None,
        })
        .collect();
    assert!(progresses.windows(2).all(|w| w[1] >= w[0]), "{progresses:?}");
    assert!(approx(controller.current_progress(), 0.6));
}

#[test]
fn first_tick_past_window_begins_from_rest_then_completes() {
    let (mut controller, log) = recording_controller();
    assert!(controller.should_begin(Point::ZERO));
    controller.tick_seconds(f32::INFINITY);
    let log = log.borrow();
    assert_eq!(
        *log,
        vec![
            Emitted::Progress(0.0, ActivationPhase::Begin),
            Emitted::Progress(
                1.0,
                ActivationPhase::Ended {
                    previous_progress: 0.0
                }
            ),
            Emitted::Activated,
        ]
    );
}

#[test]
fn activation_without_handler_cancels() {
    let mut controller = ContextGestureController::new();
    controller.set_surface_size(Size::new(100.0, 100.0));
    assert!(controller.should_begin(Point::ZERO));
    controller.tick(ms(250));
    controller.tick(ms(500));
    assert_eq!(controller.state(), GestureState::Idle);
    assert_eq!(controller.previous_progress(), 0.0);
}

#[test]
fn activation_handler_may_cancel_and_disable_reentrantly() {
    let (mut controller, log) = recording_controller();
    let states = Rc::new(RefCell::new(Vec::new()));
    {
        let log = Rc::clone(&log);
        let states = Rc::clone(&states);
        controller.set_on_activated(move |gesture| {
            states.borrow_mut().push(gesture.state());
            log.borrow_mut().push(Emitted::Activated);
            gesture.cancel();
            gesture.set_enabled(false);
            gesture.tick(Duration::from_secs(5));
        });
    }
    assert!(controller.should_begin(Point::ZERO));
    controller.tick(ms(100));
    controller.tick(ms(500));

    assert_eq!(*states.borrow(), vec![GestureState::Ended]);
    let activations = log
        .borrow()
        .iter()
        .filter(|e| **e == Emitted::Activated)
        .count();
    assert_eq!(activations, 1);
    assert_eq!(controller.state(), GestureState::Idle);
    assert!(!controller.is_enabled());
}

#[test]
fn activation_handler_may_start_the_next_attempt() {
    let (mut controller, _log) = recording_controller();
    controller.set_on_activated(|gesture| {
        gesture.cancel();
        assert!(gesture.should_begin(Point::new(1.0, 1.0)));
    });
    assert!(controller.should_begin(Point::ZERO));
    let first = controller.attempt();
    controller.tick(ms(500));
    assert_eq!(controller.state(), GestureState::Pending);
    assert_eq!(controller.origin(), Point::new(1.0, 1.0));
    assert_ne!(controller.attempt(), first);
}

#[test]
fn activation_handler_that_clears_itself_stays_cleared() {
    let (mut controller, _log) = recording_controller();
    let calls = Rc::new(RefCell::new(0));
    {
        let calls = Rc::clone(&calls);
        controller.set_on_activated(move |gesture| {
            *calls.borrow_mut() += 1;
            gesture.clear_on_activated();
        });
    }
    for _ in 0..2 {
        assert!(controller.should_begin(Point::ZERO));
        controller.tick(ms(500));
    }
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn zero_extent_mid_gesture_suppresses_progress_but_still_activates() {
    let (mut controller, log) = recording_controller();
    assert!(controller.should_begin(Point::ZERO));
    controller.tick(ms(100));
    controller.set_surface_size(Size::ZERO);
    controller.tick(ms(300));
    controller.tick(ms(500));
    let log = log.borrow();
    assert_eq!(log.len(), 2, "{log:?}");
    assert!(matches!(log[0], Emitted::Progress(_, ActivationPhase::Begin)));
    assert_eq!(log[1], Emitted::Activated);
}

#[test]
fn second_press_while_in_flight_is_rejected() {
    let (mut controller, _log) = recording_controller();
    assert!(controller.should_begin(Point::ZERO));
    assert!(!controller.should_begin(Point::new(5.0, 5.0)));
    assert_eq!(controller.origin(), Point::ZERO);
}

#[test]
fn invalid_config_is_reported() {
    let config = GestureConfig::default().with_activation_duration(Duration::ZERO);
    assert_eq!(
        ContextGestureController::with_config(config).unwrap_err(),
        GestureConfigError::NonPositiveActivationDuration
    );
    let mut controller = ContextGestureController::new();
    assert!(controller.set_config(config).is_err());
    assert_eq!(controller.config(), &GestureConfig::default());
}

#[test]
fn eased_ramp_reaches_one_exactly_once() {
    let config = GestureConfig::default().with_easing(presshold_animation::Easing::EaseInOut);
    let mut controller = ContextGestureController::with_config(config).unwrap();
    controller.set_surface_size(Size::new(50.0, 50.0));
    let ones = Rc::new(RefCell::new(0));
    {
        let ones = Rc::clone(&ones);
        controller.set_on_progress(move |progress, _| {
            if progress >= 1.0 {
                *ones.borrow_mut() += 1;
            }
        });
    }
    controller.set_on_activated(|_| {});
    assert!(controller.should_begin(Point::ZERO));
    for frame in 1..=60 {
        controller.tick(Duration::from_micros(frame * 16_667));
    }
    assert_eq!(*ones.borrow(), 1);
    assert_eq!(controller.state(), GestureState::Idle);
}
