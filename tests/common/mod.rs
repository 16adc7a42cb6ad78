//! Shared test infrastructure for bcd-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use bcd_clock::{Button, ButtonInput, Delay, DigitSlot, DisplayPort, SegmentPattern};
use heapless::Vec;

// ============================================================================
// Mock Display
// ============================================================================

/// Mock display that tracks line state and records every lit digit
pub struct MockPort {
    enabled: Vec<DigitSlot, 6>,
    segments: SegmentPattern,
    clears: u32,
    lit_history: Vec<(DigitSlot, SegmentPattern), 64>,
}

impl MockPort {
    pub fn new() -> Self {
        Self {
            enabled: Vec::new(),
            segments: 0,
            clears: 0,
            lit_history: Vec::new(),
        }
    }

    /// Digit-select lines currently active
    pub fn enabled(&self) -> &[DigitSlot] {
        &self.enabled
    }

    /// Segment lines currently driven
    pub fn segments(&self) -> SegmentPattern {
        self.segments
    }

    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// (slot, pattern) for each segment write, oldest first
    pub fn lit_history(&self) -> &[(DigitSlot, SegmentPattern)] {
        &self.lit_history
    }

    pub fn reset_history(&mut self) {
        self.lit_history.clear();
    }
}

impl DisplayPort for MockPort {
    fn clear(&mut self) {
        self.enabled.clear();
        self.segments = 0;
        self.clears += 1;
    }

    fn enable_digit(&mut self, slot: DigitSlot) {
        let _ = self.enabled.push(slot);
    }

    fn write_segments(&mut self, pattern: SegmentPattern) {
        self.segments = pattern;
        if let Some(&slot) = self.enabled.last() {
            let _ = self.lit_history.push((slot, pattern));
        }
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Mock buttons that can be pressed and released between steps
pub struct MockButtons {
    pressed: [bool; Button::COUNT],
    reads: u32,
}

impl MockButtons {
    pub fn new() -> Self {
        Self {
            pressed: [false; Button::COUNT],
            reads: 0,
        }
    }

    pub fn press(&mut self, button: Button) {
        self.pressed[button as usize] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.pressed[button as usize] = false;
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; Button::COUNT];
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl ButtonInput for MockButtons {
    fn is_asserted(&mut self, button: Button) -> bool {
        self.reads += 1;
        self.pressed[button as usize]
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requested durations instead of blocking
pub struct MockDelay {
    total_ms: u64,
    calls: u32,
    history: Vec<u32, 32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            total_ms: 0,
            calls: 0,
            history: Vec::new(),
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }

    /// First 32 requested delays, oldest first
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn reset(&mut self) {
        self.total_ms = 0;
        self.calls = 0;
        self.history.clear();
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms as u64;
        self.calls += 1;
        let _ = self.history.push(ms);
    }
}
