//! Command-based control for channels.

use crate::time::TimeDuration;

/// Actions for controlling a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelAction<D: TimeDuration> {
    /// Configure the output and turn the LED off.
    Initialize,
    /// Turn on, back to manual mode.
    TurnOn,
    /// Turn off, back to manual mode.
    TurnOff,
    /// Invert the LED, back to manual mode.
    Toggle,
    /// Store blink durations.
    ConfigureBlink { on: D, off: D },
    /// Start blinking.
    StartBlink,
    /// Store random blink bounds.
    ConfigureRandomBlink {
        min_off: D,
        max_off: D,
        min_on: D,
        max_on: D,
    },
    /// Start random blinking.
    StartRandomBlink,
    /// Store the auto-off duration.
    ConfigureTimer(D),
    /// Turn on until the timer runs out.
    StartTimer,
}

/// Command targeting a specific channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelCommand<Id, D: TimeDuration> {
    pub channel_id: Id,
    pub action: ChannelAction<D>,
}

impl<Id, D: TimeDuration> ChannelCommand<Id, D> {
    /// Creates command.
    pub fn new(channel_id: Id, action: ChannelAction<D>) -> Self {
        Self { channel_id, action }
    }
}
