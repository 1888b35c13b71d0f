//! Shared test infrastructure for sparkle-leds integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use sparkle_leds::{Level, MillisDuration, MillisInstant, OutputSink, RandomSource, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<MillisInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(MillisInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: MillisDuration) {
        let current = self.current_time.get();
        self.current_time.set(MillisInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: MillisInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<MillisInstant> for MockTimeSource {
    fn now(&self) -> MillisInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Output Port
// ============================================================================

/// Records every configure and write call made through it
pub struct MockPort {
    configured: heapless::Vec<u8, 16>,
    writes: heapless::Vec<(u8, Level), 64>,
}

impl MockPort {
    pub fn new() -> Self {
        Self {
            configured: heapless::Vec::new(),
            writes: heapless::Vec::new(),
        }
    }

    pub fn configured(&self) -> &[u8] {
        &self.configured
    }

    pub fn writes(&self) -> &[(u8, Level)] {
        &self.writes
    }

    /// Last level written to the given pin
    pub fn level(&self, pin: u8) -> Option<Level> {
        self.writes
            .iter()
            .rev()
            .find(|(id, _)| *id == pin)
            .map(|(_, level)| *level)
    }

    pub fn clear(&mut self) {
        self.configured.clear();
        self.writes.clear();
    }
}

impl OutputSink for MockPort {
    type Id = u8;

    fn configure(&mut self, id: u8) {
        let _ = self.configured.push(id);
    }

    fn write(&mut self, id: u8, level: Level) {
        let _ = self.writes.push((id, level));
    }
}

// ============================================================================
// Mock Random Source
// ============================================================================

/// Random source that replays a fixed script.
///
/// `uniform` returns `min + offsets[i] % (max - min)`; coin flips replay `flips`.
pub struct ScriptedRandom {
    offsets: &'static [u64],
    flips: &'static [bool],
    next_offset: Cell<usize>,
    next_flip: Cell<usize>,
    requests: RefCell<heapless::Vec<(u64, u64), 32>>,
}

impl ScriptedRandom {
    pub fn new(offsets: &'static [u64], flips: &'static [bool]) -> Self {
        Self {
            offsets,
            flips,
            next_offset: Cell::new(0),
            next_flip: Cell::new(0),
            requests: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Bounds passed to `uniform`, in call order
    pub fn requests(&self) -> heapless::Vec<(u64, u64), 32> {
        self.requests.borrow().clone()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&self, min: u64, max: u64) -> u64 {
        let _ = self.requests.borrow_mut().push((min, max));

        if max <= min {
            return min;
        }

        let i = self.next_offset.get();
        self.next_offset.set(i + 1);
        let offset = self.offsets.get(i % self.offsets.len().max(1)).copied().unwrap_or(0);
        min + offset % (max - min)
    }

    fn coin_flip(&self) -> bool {
        let i = self.next_flip.get();
        self.next_flip.set(i + 1);
        self.flips.get(i % self.flips.len().max(1)).copied().unwrap_or(true)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn ms(millis: u64) -> MillisDuration {
    MillisDuration(millis)
}

pub fn at(millis: u64) -> MillisInstant {
    MillisInstant(millis)
}
