use super::*;
use crate::clock::VirtualClock;
use crate::scheduler::Task;
use crate::typewriter::TypewriterConfig;

fn machine(phrases: &[&str]) -> Typewriter {
    let config = TypewriterConfig::new(phrases.iter().copied()).with_intervals(100, 50, 2000);
    match Typewriter::new(config) {
        Ok(t) => t,
        Err(e) => panic!("test config should be valid: {e}"),
    }
}

fn recording_driver(clock: &VirtualClock, phrases: &[&str]) -> (TypewriterDriver<VirtualClock>, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let driver = TypewriterDriver::start(clock.clone(), machine(phrases), move |text| {
        sink.borrow_mut().push(text.to_owned());
    });
    (driver, seen)
}

/// Scheduler whose `cancel` does nothing, so stale timers still fire.
#[derive(Clone, Default)]
struct StubbornScheduler(VirtualClock);

impl Scheduler for StubbornScheduler {
    fn schedule_after(&self, delay_ms: u32, task: Task) -> TimerHandle {
        self.0.schedule_after(delay_ms, task)
    }

    fn cancel(&self, _handle: TimerHandle) {}
}

#[test]
fn start_schedules_one_step_without_running_it() {
    let clock = VirtualClock::new();
    let (driver, seen) = recording_driver(&clock, &["ab"]);
    assert!(driver.is_running());
    assert!(driver.has_pending_step());
    assert_eq!(clock.pending(), 1);
    assert!(seen.borrow().is_empty());
}

#[test]
fn steps_follow_configured_cadence() {
    let clock = VirtualClock::new();
    let (driver, seen) = recording_driver(&clock, &["ab", "c"]);

    clock.advance(100);
    assert_eq!(driver.text(), "a");
    clock.advance(100);
    assert_eq!(driver.text(), "ab");
    assert_eq!(driver.phase(), Phase::Holding);

    // Still holding just before the pause ends.
    clock.advance(1999);
    assert_eq!(driver.phase(), Phase::Holding);
    clock.advance(1);
    assert_eq!(driver.phase(), Phase::Shrinking);
    assert_eq!(driver.text(), "ab");

    clock.advance(50);
    assert_eq!(driver.text(), "a");
    clock.advance(50);
    assert_eq!(driver.text(), "");
    assert_eq!(driver.phrase_index(), 1);

    clock.advance(100);
    assert_eq!(driver.text(), "c");
    assert_eq!(*seen.borrow(), vec!["a", "ab", "a", "", "c"]);
}

#[test]
fn exactly_one_step_pending_at_all_times() {
    let clock = VirtualClock::new();
    let (_driver, _seen) = recording_driver(&clock, &["abc", "", "de"]);
    for _ in 0..50 {
        assert_eq!(clock.pending(), 1);
        assert!(clock.fire_next().is_some());
    }
    assert_eq!(clock.pending(), 1);
}

#[test]
fn full_cycle_wraps_to_first_phrase() {
    let clock = VirtualClock::new();
    let (driver, seen) = recording_driver(&clock, &["ab", "c"]);
    for _ in 0..9 {
        clock.fire_next();
    }
    assert_eq!(*seen.borrow(), vec!["a", "ab", "a", "", "c", "", "a"]);
    assert_eq!(driver.phrase_index(), 0);
}

#[test]
fn cancel_mid_growing_stops_all_mutation() {
    let clock = VirtualClock::new();
    let (driver, seen) = recording_driver(&clock, &["hello"]);
    clock.advance(200);
    assert_eq!(driver.text(), "he");

    driver.cancel();
    assert!(!driver.is_running());
    assert_eq!(clock.pending(), 0);

    clock.advance(10_000);
    assert_eq!(driver.text(), "he");
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn cancel_is_idempotent_in_every_phase() {
    for ticks in 0..8 {
        let clock = VirtualClock::new();
        let (driver, _seen) = recording_driver(&clock, &["ab"]);
        for _ in 0..ticks {
            clock.fire_next();
        }
        driver.cancel();
        driver.cancel();
        assert!(!driver.is_running());
        assert!(!driver.has_pending_step());
        assert_eq!(clock.pending(), 0);
    }
}

#[test]
fn stale_timer_after_cancel_is_ignored() {
    let scheduler = StubbornScheduler::default();
    let clock = scheduler.0.clone();
    let driver = TypewriterDriver::start(scheduler, machine(&["hello"]), |_| {});
    clock.advance(100);
    assert_eq!(driver.text(), "h");

    driver.cancel();
    // The stubborn scheduler kept the timer; it fires but must not mutate.
    assert_eq!(clock.advance(100), 1);
    assert_eq!(driver.text(), "h");
    assert_eq!(clock.pending(), 0);
}

#[test]
fn dropping_driver_cancels_pending_step() {
    let clock = VirtualClock::new();
    {
        let (_driver, _seen) = recording_driver(&clock, &["hello"]);
        clock.advance(100);
    }
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.advance(5_000), 0);
}

#[test]
fn stale_timer_after_drop_is_ignored() {
    let scheduler = StubbornScheduler::default();
    let clock = scheduler.0.clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let driver = TypewriterDriver::start(scheduler, machine(&["hello"]), move |t| sink.borrow_mut().push(t.to_owned()));
    drop(driver);
    assert_eq!(clock.advance(100), 1);
    assert!(seen.borrow().is_empty());
}

#[test]
fn sink_may_cancel_from_inside_a_step() {
    let clock = VirtualClock::new();
    let slot: Rc<RefCell<Option<Rc<TypewriterDriver<VirtualClock>>>>> = Rc::new(RefCell::new(None));
    let slot_sink = Rc::clone(&slot);
    let driver = Rc::new(TypewriterDriver::start(clock.clone(), machine(&["abc"]), move |text| {
        if text == "ab" {
            if let Some(driver) = slot_sink.borrow().as_ref() {
                driver.cancel();
            }
        }
    }));
    *slot.borrow_mut() = Some(Rc::clone(&driver));

    clock.advance(1_000);
    assert_eq!(driver.text(), "ab");
    assert!(!driver.is_running());
    assert_eq!(clock.pending(), 0);

    slot.borrow_mut().take();
}
