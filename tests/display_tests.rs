//! Integration tests for the display Multiplexer

mod common;
use common::*;

use bcd_clock::{
    BLANK, ClockTime, DEFAULT_TICKS_PER_SECOND, DigitSlot, HourFormat, Multiplexer, decode,
};

fn time(hour: u8, minute: u8, second: u8) -> ClockTime {
    ClockTime::from_hms(hour, minute, second, HourFormat::TwentyFourHour).unwrap()
}

#[test]
fn six_refreshes_visit_every_slot_once_in_scan_order() {
    let mut mux = Multiplexer::default();
    let mut clock = time(21, 43, 56);
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for _ in 0..DigitSlot::COUNT {
        mux.refresh(&mut clock, &mut port, &mut delay);
    }

    assert_eq!(
        port.lit_history(),
        &[
            (DigitSlot::SecondUnits, decode(6)),
            (DigitSlot::SecondTens, decode(5)),
            (DigitSlot::MinuteUnits, decode(3)),
            (DigitSlot::MinuteTens, decode(4)),
            (DigitSlot::HourUnits, decode(1)),
            (DigitSlot::HourTens, decode(2)),
        ]
    );
    assert_eq!(mux.cursor(), 0);
}

#[test]
fn exactly_one_digit_is_lit_after_each_refresh() {
    let mut mux = Multiplexer::default();
    let mut clock = time(10, 20, 30);
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for round in 0..3 {
        for slot in DigitSlot::SCAN_ORDER {
            let refresh = mux.refresh(&mut clock, &mut port, &mut delay);
            assert_eq!(refresh.slot, slot, "round {}", round);
            assert_eq!(port.enabled(), &[slot]);
            assert_eq!(port.segments(), refresh.pattern);
        }
    }
}

#[test]
fn every_refresh_clears_all_lines_first() {
    let mut mux = Multiplexer::default();
    let mut clock = ClockTime::new();
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for _ in 0..10 {
        mux.refresh(&mut clock, &mut port, &mut delay);
    }

    assert_eq!(port.clear_count(), 10);
}

#[test]
fn every_refresh_waits_the_settle_delay() {
    let mut mux = Multiplexer::default();
    let mut clock = ClockTime::new();
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for _ in 0..12 {
        mux.refresh(&mut clock, &mut port, &mut delay);
    }

    assert_eq!(delay.calls(), 12);
    assert_eq!(delay.total_ms(), 12);
    assert!(delay.history().iter().all(|&ms| ms == 1));
}

#[test]
fn default_threshold_advances_one_second_per_225_refreshes() {
    let mut mux = Multiplexer::default();
    let mut clock = ClockTime::new();
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for _ in 0..DEFAULT_TICKS_PER_SECOND - 1 {
        let refresh = mux.refresh(&mut clock, &mut port, &mut delay);
        assert!(!refresh.second_elapsed);
    }
    assert_eq!(clock.second(), 0);

    let refresh = mux.refresh(&mut clock, &mut port, &mut delay);
    assert!(refresh.second_elapsed);
    assert_eq!(clock.second(), 1);
}

#[test]
fn one_minute_of_refreshes_advances_one_minute() {
    let mut mux = Multiplexer::default();
    let mut clock = time(9, 59, 0);
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    let elapsed = (0..DEFAULT_TICKS_PER_SECOND * 60)
        .filter(|_| mux.refresh(&mut clock, &mut port, &mut delay).second_elapsed)
        .count();

    assert_eq!(elapsed, 60);
    assert_eq!(clock, time(10, 0, 0));
}

#[test]
fn custom_threshold_is_respected() {
    let mut mux = Multiplexer::new(10, 1);
    let mut clock = ClockTime::new();
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for _ in 0..30 {
        mux.refresh(&mut clock, &mut port, &mut delay);
    }

    assert_eq!(clock.second(), 3);
    assert_eq!(mux.ticks().threshold(), 10);
}

#[test]
fn second_rollover_is_visible_on_the_next_scan() {
    let mut mux = Multiplexer::new(DigitSlot::COUNT as u32, 1);
    let mut clock = time(0, 0, 8);
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for _ in 0..DigitSlot::COUNT {
        mux.refresh(&mut clock, &mut port, &mut delay);
    }
    assert_eq!(clock.second(), 9);

    port.reset_history();
    let refresh = mux.refresh(&mut clock, &mut port, &mut delay);
    assert_eq!(refresh.slot, DigitSlot::SecondUnits);
    assert_eq!(refresh.pattern, decode(9));
}

#[test]
fn hour_units_are_shown_modulo_ten() {
    let mut mux = Multiplexer::default();
    let mut clock = ClockTime::new();
    clock.set(0, 13, 0, 0, 0, 0);
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    for _ in 0..DigitSlot::COUNT {
        mux.refresh(&mut clock, &mut port, &mut delay);
    }

    let (_, pattern) = port.lit_history()[DigitSlot::HourUnits.index()];
    assert_eq!(pattern, decode(3));
}

#[test]
fn out_of_range_digit_renders_blank() {
    let mut mux = Multiplexer::default();
    let mut clock = ClockTime::new();
    clock.set(0, 0, 0, 0, 0, 11);
    let mut port = MockPort::new();
    let mut delay = MockDelay::new();

    let refresh = mux.refresh(&mut clock, &mut port, &mut delay);

    assert_eq!(refresh.digit, 11);
    assert_eq!(refresh.pattern, BLANK);
    assert_eq!(port.segments(), BLANK);
}
