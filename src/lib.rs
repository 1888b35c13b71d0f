#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Channel`**: Drives one digital LED through steady, blink, random blink and timed modes
//! - **`Group`**: Fans operations and ticks out to an ordered set of channels
//! - **`Wiring`**: Immutable description of an LED (output id, color, polarity)
//! - **`DisplayMode`**: What a channel does on each tick
//! - **`OutputSink`**: Trait to implement for your GPIO hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`RandomSource`**: Trait to implement for your random number generator
//! - **`ChannelAction`**: Commands that can be sent to channels and groups
//!
//! Channels never report errors. Configuring a mode with a zero duration, or
//! starting a mode that was never configured, is silently ignored.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod time;
pub mod random;
pub mod output;
pub mod types;
pub mod colors;
pub mod channel;
pub mod group;
pub mod command;

pub use channel::Channel;
pub use command::{ChannelAction, ChannelCommand};
pub use group::{ChannelId, Group, GroupError};
pub use output::{Level, OutputSink, Polarity};
#[cfg(feature = "embedded-hal")]
pub use output::PinSink;
pub use random::{RandomSource, Xorshift32};
pub use time::{MillisDuration, MillisInstant, TimeDuration, TimeInstant, TimeSource};
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use types::{BlinkTiming, DisplayMode, LedColor, RandomBlinkTiming, Wiring};

/// Color reported for an unlit LED.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
