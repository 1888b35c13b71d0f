//! Core types for channel wiring and display modes.

use crate::output::Polarity;
use crate::random::RandomSource;
use crate::time::TimeDuration;

/// Nominal color of a single-color LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    /// No particular color.
    #[default]
    Unspecified,
    Infrared,
    Red,
    Orange,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
    Ultraviolet,
    White,
}

impl core::fmt::Display for LedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            LedColor::Unspecified => "unspecified",
            LedColor::Infrared => "infrared",
            LedColor::Red => "red",
            LedColor::Orange => "orange",
            LedColor::Yellow => "yellow",
            LedColor::Green => "green",
            LedColor::Aqua => "aqua",
            LedColor::Blue => "blue",
            LedColor::Purple => "purple",
            LedColor::Ultraviolet => "ultraviolet",
            LedColor::White => "white",
        };
        f.write_str(name)
    }
}

/// What a channel does on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Never initialized. Ticks do nothing.
    #[default]
    Disabled,

    /// Steady on or off. Ticks do nothing.
    Manual,

    /// Fixed-period square wave.
    Blink,

    /// Each half-cycle lasts an independently drawn duration.
    RandomBlink,

    /// Lit until the timer runs out, then off and back to `Manual`.
    Timed,

    /// Reserved for intensity ramping on PWM outputs. Ticks do nothing.
    Fade,
}

impl core::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            DisplayMode::Disabled => "disabled",
            DisplayMode::Manual => "manual",
            DisplayMode::Blink => "blink",
            DisplayMode::RandomBlink => "random blink",
            DisplayMode::Timed => "timed",
            DisplayMode::Fade => "fade",
        };
        f.write_str(name)
    }
}

/// Immutable wiring of one LED: where it is, what color it is, and how it is switched.
///
/// Pin assignment tables can be written as `const` arrays of `Wiring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiring<Id> {
    /// Output identifier passed to the sink.
    pub id: Id,

    /// Nominal LED color.
    pub color: LedColor,

    /// Which level lights the LED.
    pub polarity: Polarity,
}

impl<Id> Wiring<Id> {
    /// Creates a wiring description.
    #[inline]
    pub const fn new(id: Id, color: LedColor, polarity: Polarity) -> Self {
        Self { id, color, polarity }
    }
}

#[inline]
fn is_positive<D: TimeDuration>(duration: D) -> bool {
    duration.as_millis() > 0
}

/// On and off durations of a fixed blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkTiming<D: TimeDuration> {
    /// How long the LED stays lit.
    pub on: D,

    /// How long the LED stays dark.
    pub off: D,
}

impl<D: TimeDuration> BlinkTiming<D> {
    /// Returns `None` unless both durations are positive.
    pub fn new(on: D, off: D) -> Option<Self> {
        (is_positive(on) && is_positive(off)).then_some(Self { on, off })
    }
}

/// Bounds for the half-cycle durations of a random blink.
///
/// Durations are drawn from the half-open ranges `[min_on, max_on)` and `[min_off, max_off)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RandomBlinkTiming<D: TimeDuration> {
    pub min_off: D,
    pub max_off: D,
    pub min_on: D,
    pub max_on: D,
}

impl<D: TimeDuration> RandomBlinkTiming<D> {
    /// Returns `None` unless all four bounds are positive.
    pub fn new(min_off: D, max_off: D, min_on: D, max_on: D) -> Option<Self> {
        let all_positive = is_positive(min_off)
            && is_positive(max_off)
            && is_positive(min_on)
            && is_positive(max_on);

        all_positive.then_some(Self {
            min_off,
            max_off,
            min_on,
            max_on,
        })
    }

    /// Draws how long the LED should hold the given state.
    pub fn sample<R: RandomSource + ?Sized>(&self, lit: bool, random: &R) -> D {
        let (min, max) = if lit {
            (self.min_on, self.max_on)
        } else {
            (self.min_off, self.max_off)
        };

        D::from_millis(random.uniform(min.as_millis(), max.as_millis()))
    }
}
