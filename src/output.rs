//! Digital output abstraction.
//!
//! Defines the [`OutputSink`] trait the channels write through, together with the
//! logic [`Level`] and wiring [`Polarity`] types.

use core::cell::RefCell;

/// Logic level of a digital output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Returns the opposite level.
    pub fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Which output level lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Driving the output HIGH lights the LED (common cathode).
    ActiveHigh,

    /// Driving the output LOW lights the LED (common anode).
    ActiveLow,
}

impl Polarity {
    /// Output level that produces the requested illumination state.
    #[inline]
    pub fn level(self, lit: bool) -> Level {
        let active = match self {
            Polarity::ActiveHigh => Level::High,
            Polarity::ActiveLow => Level::Low,
        };

        if lit { active } else { active.inverted() }
    }
}

/// Trait for abstracting digital output hardware.
///
/// Implement this for your GPIO port, shift register or pin wrapper. Writes
/// cannot fail; handle hardware errors inside the implementation.
pub trait OutputSink {
    /// Identifier of a physical output (pin number or similar).
    type Id: Copy;

    /// Prepares the output for digital writes.
    fn configure(&mut self, id: Self::Id);

    /// Drives the output to the given level.
    fn write(&mut self, id: Self::Id, level: Level);
}

/// Lets several channels share one port object from a single control loop.
impl<S: OutputSink + ?Sized> OutputSink for &RefCell<S> {
    type Id = S::Id;

    fn configure(&mut self, id: Self::Id) {
        self.borrow_mut().configure(id);
    }

    fn write(&mut self, id: Self::Id, level: Level) {
        self.borrow_mut().write(id, level);
    }
}

#[cfg(feature = "embedded-hal")]
pub use pin::PinSink;

#[cfg(feature = "embedded-hal")]
mod pin {
    use super::{Level, OutputSink};
    use embedded_hal::digital::OutputPin;

    /// Output sink over a single `embedded-hal` output pin.
    ///
    /// The pin is already in output mode by its HAL type state, so `configure`
    /// does nothing. Pin errors are discarded.
    pub struct PinSink<P: OutputPin> {
        pin: P,
    }

    impl<P: OutputPin> PinSink<P> {
        pub fn new(pin: P) -> Self {
            Self { pin }
        }

        /// Releases the wrapped pin.
        pub fn into_inner(self) -> P {
            self.pin
        }
    }

    impl<P: OutputPin> OutputSink for PinSink<P> {
        type Id = ();

        fn configure(&mut self, _id: ()) {}

        fn write(&mut self, _id: (), level: Level) {
            let _ = match level {
                Level::High => self.pin.set_high(),
                Level::Low => self.pin.set_low(),
            };
        }
    }
}
