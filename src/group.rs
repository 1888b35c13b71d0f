use crate::channel::Channel;
use crate::command::{ChannelAction, ChannelCommand};
use crate::output::OutputSink;
use crate::random::RandomSource;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{LedColor, Wiring};
use heapless::Vec;

/// Position of a channel within a [`Group`].
///
/// Assigned by [`Group::add_channel`] in insertion order, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub usize);

impl From<usize> for ChannelId {
    fn from(id: usize) -> Self {
        ChannelId(id)
    }
}

impl From<ChannelId> for usize {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

/// Errors that can occur during group operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupError {
    /// The specified channel ID does not exist in the group.
    InvalidChannelId(ChannelId),

    /// The group is full and cannot accept more channels.
    GroupFull { capacity: usize },
}

impl core::fmt::Display for GroupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GroupError::InvalidChannelId(id) => {
                write!(f, "channel ID {} does not exist in group", id.0)
            }
            GroupError::GroupFull { capacity } => {
                write!(f, "group is full, capacity is {} channels", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GroupError {}

/// Drives an ordered set of channels together.
///
/// Every fan-out visits members in insertion order. The group keeps no timing
/// state of its own; on a tick all members observe the same instant.
///
/// # Type Parameters
/// * `'t` - Lifetime of the shared time and random sources
/// * `I` - Time instant type
/// * `S` - Output sink type (same for all channels in the group)
/// * `T` - Time source implementation type
/// * `R` - Random source implementation type
/// * `MAX_CHANNELS` - Maximum number of channels this group can hold
pub struct Group<'t, I, S, T, R, const MAX_CHANNELS: usize>
where
    I: TimeInstant,
    S: OutputSink,
    T: TimeSource<I>,
    R: RandomSource,
{
    channels: Vec<Channel<'t, I, S, T, R>, MAX_CHANNELS>,
    time_source: &'t T,
    random: &'t R,
}

impl<'t, I, S, T, R, const MAX_CHANNELS: usize> Group<'t, I, S, T, R, MAX_CHANNELS>
where
    I: TimeInstant,
    S: OutputSink,
    T: TimeSource<I>,
    R: RandomSource,
{
    /// Creates an empty group.
    ///
    /// # Arguments
    /// * `time_source` - Time source shared by all channels
    /// * `random` - Random source shared by all channels
    pub fn new(time_source: &'t T, random: &'t R) -> Self {
        Self {
            channels: Vec::new(),
            time_source,
            random,
        }
    }

    /// Appends a channel built from `wiring` that writes through `sink`.
    ///
    /// The channel starts disabled; call [`initialize_all`](Self::initialize_all)
    /// once every channel is added.
    ///
    /// # Errors
    /// * `GroupFull` - The group already holds `MAX_CHANNELS` channels
    pub fn add_channel(&mut self, wiring: Wiring<S::Id>, sink: S) -> Result<ChannelId, GroupError> {
        let id = ChannelId(self.channels.len());
        let channel = Channel::new(wiring, sink, self.time_source, self.random);

        self.channels
            .push(channel)
            .map_err(|_| GroupError::GroupFull {
                capacity: MAX_CHANNELS,
            })?;

        Ok(id)
    }

    /// Initializes every channel.
    pub fn initialize_all(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.initialize();
        }
    }

    /// Turns every channel on.
    pub fn all_on(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.turn_on();
        }
    }

    /// Turns every channel off.
    pub fn all_off(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.turn_off();
        }
    }

    /// Turns on every channel of the given color. Others are left alone.
    pub fn set_color_on(&mut self, color: LedColor) {
        for channel in self.channels.iter_mut().filter(|c| c.color() == color) {
            channel.turn_on();
        }
    }

    /// Turns off every channel of the given color. Others are left alone.
    pub fn set_color_off(&mut self, color: LedColor) {
        for channel in self.channels.iter_mut().filter(|c| c.color() == color) {
            channel.turn_off();
        }
    }

    /// Advances every channel to the same instant.
    pub fn advance_all(&mut self, now: I) {
        for channel in self.channels.iter_mut() {
            channel.advance(now);
        }
    }

    /// Reads the time source once and advances every channel to that instant.
    pub fn service_all(&mut self) {
        let now = self.time_source.now();
        self.advance_all(now);
    }

    /// Returns how long the control loop may wait before the next output change.
    ///
    /// # Returns
    /// * `Some(duration)` - Shortest wait across all channels (`ZERO` if one is overdue)
    /// * `None` - No channel has a pending transition
    pub fn time_until_next(&self, now: I) -> Option<I::Duration> {
        self.channels
            .iter()
            .filter_map(|channel| channel.time_until_transition(now))
            .min_by_key(|duration| duration.as_millis())
    }

    /// Routes a command to the addressed channel.
    ///
    /// # Errors
    /// * `InvalidChannelId` - No channel has this ID
    pub fn handle_command(
        &mut self,
        command: ChannelCommand<ChannelId, I::Duration>,
    ) -> Result<(), GroupError> {
        self.handle_action(command.channel_id, command.action)
    }

    /// Routes an action to the specified channel.
    ///
    /// # Errors
    /// * `InvalidChannelId` - No channel has this ID
    pub fn handle_action(
        &mut self,
        id: ChannelId,
        action: ChannelAction<I::Duration>,
    ) -> Result<(), GroupError> {
        self.channel_mut(id)?.handle_action(action);
        Ok(())
    }

    /// Returns the channel with the given ID.
    ///
    /// # Errors
    /// Returns `InvalidChannelId` if the channel does not exist.
    pub fn channel(&self, id: ChannelId) -> Result<&Channel<'t, I, S, T, R>, GroupError> {
        self.channels
            .get(id.0)
            .ok_or(GroupError::InvalidChannelId(id))
    }

    /// Returns the channel with the given ID for direct control.
    ///
    /// # Errors
    /// Returns `InvalidChannelId` if the channel does not exist.
    pub fn channel_mut(
        &mut self,
        id: ChannelId,
    ) -> Result<&mut Channel<'t, I, S, T, R>, GroupError> {
        self.channels
            .get_mut(id.0)
            .ok_or(GroupError::InvalidChannelId(id))
    }

    /// Iterates over the channels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Channel<'t, I, S, T, R>> {
        self.channels.iter()
    }

    /// Returns the number of channels in the group.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if the group contains no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Returns the maximum number of channels.
    pub fn capacity(&self) -> usize {
        MAX_CHANNELS
    }
}
