//! Single LED channel with timed display modes.
//!
//! Provides [`Channel`], which owns the wiring of one digital LED output and
//! advances its display mode on every tick of the caller's control loop.

use crate::COLOR_OFF;
use crate::colors;
use crate::command::ChannelAction;
use crate::output::{OutputSink, Polarity};
use crate::random::RandomSource;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{BlinkTiming, DisplayMode, LedColor, RandomBlinkTiming, Wiring};
use palette::Srgb;

/// Controls one digital LED output.
///
/// A channel starts `Disabled` and unlit. [`initialize`](Self::initialize) puts it in
/// `Manual` mode; the `start_*` methods switch it into a timed mode, and
/// [`turn_on`](Self::turn_on) / [`turn_off`](Self::turn_off) /
/// [`toggle`](Self::toggle) always return it to `Manual`.
///
/// Invalid input never fails: configuring with a zero duration, or starting a
/// mode that was never configured, leaves the channel untouched.
///
/// # Type Parameters
/// * `'t` - Lifetime of the shared time and random sources
/// * `I` - Time instant type
/// * `S` - Output sink type
/// * `T` - Time source implementation type
/// * `R` - Random source implementation type
pub struct Channel<'t, I: TimeInstant, S: OutputSink, T: TimeSource<I>, R: RandomSource> {
    wiring: Wiring<S::Id>,
    sink: S,
    time_source: &'t T,
    random: &'t R,
    lit: bool,
    mode: DisplayMode,
    last_transition: I,
    blink: Option<BlinkTiming<I::Duration>>,
    random_blink: Option<RandomBlinkTiming<I::Duration>>,
    random_hold: I::Duration,
    timer: Option<I::Duration>,
}

impl<'t, I, S, T, R> Channel<'t, I, S, T, R>
where
    I: TimeInstant,
    S: OutputSink,
    T: TimeSource<I>,
    R: RandomSource,
{
    /// Creates a disabled, unlit channel. Does not touch the output.
    pub fn new(wiring: Wiring<S::Id>, sink: S, time_source: &'t T, random: &'t R) -> Self {
        Self {
            wiring,
            sink,
            time_source,
            random,
            lit: false,
            mode: DisplayMode::Disabled,
            last_transition: time_source.now(),
            blink: None,
            random_blink: None,
            random_hold: I::Duration::ZERO,
            timer: None,
        }
    }

    /// Configures the output and turns the LED off in `Manual` mode.
    pub fn initialize(&mut self) {
        self.sink.configure(self.wiring.id);
        self.turn_off();
    }

    /// Turns the LED on and returns to `Manual` mode.
    pub fn turn_on(&mut self) {
        self.set_lit(true);
        self.mode = DisplayMode::Manual;
    }

    /// Turns the LED off and returns to `Manual` mode.
    pub fn turn_off(&mut self) {
        self.set_lit(false);
        self.mode = DisplayMode::Manual;
    }

    /// Inverts the LED and returns to `Manual` mode.
    pub fn toggle(&mut self) {
        if self.lit {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }

    /// Stores blink durations if both are positive. Does not change the mode.
    pub fn configure_blink(&mut self, on: I::Duration, off: I::Duration) {
        if let Some(timing) = BlinkTiming::new(on, off) {
            self.blink = Some(timing);
        }
    }

    /// Turns the LED on and starts blinking, if blink durations are configured.
    pub fn start_blink(&mut self) {
        if self.blink.is_none() {
            return;
        }

        self.set_lit(true);
        self.enter(DisplayMode::Blink);
    }

    /// Stores random blink bounds if all four are positive. Does not change the mode.
    pub fn configure_random_blink(
        &mut self,
        min_off: I::Duration,
        max_off: I::Duration,
        min_on: I::Duration,
        max_on: I::Duration,
    ) {
        if let Some(timing) = RandomBlinkTiming::new(min_off, max_off, min_on, max_on) {
            self.random_blink = Some(timing);
        }
    }

    /// Starts random blinking, if random blink bounds are configured.
    ///
    /// The initial state is a coin flip; the first half-cycle duration is drawn
    /// from the bounds of that state.
    pub fn start_random_blink(&mut self) {
        let Some(timing) = self.random_blink else {
            return;
        };

        let lit = self.random.coin_flip();
        self.set_lit(lit);
        self.random_hold = timing.sample(lit, self.random);
        self.enter(DisplayMode::RandomBlink);
    }

    /// Stores the auto-off duration if positive. Does not change the mode.
    pub fn configure_timer(&mut self, duration: I::Duration) {
        if duration.as_millis() > 0 {
            self.timer = Some(duration);
        }
    }

    /// Turns the LED on until the timer runs out, if a timer duration is configured.
    pub fn start_timer(&mut self) {
        if self.timer.is_none() {
            return;
        }

        self.set_lit(true);
        self.enter(DisplayMode::Timed);
    }

    /// Advances the display mode to `now`.
    ///
    /// A deadline fires on the first call with `now >= last transition + hold`, so a
    /// late tick still produces exactly one transition.
    pub fn advance(&mut self, now: I) {
        match self.mode {
            DisplayMode::Disabled | DisplayMode::Manual | DisplayMode::Fade => {}
            DisplayMode::Blink => {
                let Some(timing) = self.blink else {
                    return;
                };

                let hold = if self.lit { timing.on } else { timing.off };
                if self.has_elapsed(now, hold) {
                    self.set_lit(!self.lit);
                    self.last_transition = now;
                }
            }
            DisplayMode::RandomBlink => {
                let Some(timing) = self.random_blink else {
                    return;
                };

                if self.has_elapsed(now, self.random_hold) {
                    self.set_lit(!self.lit);
                    self.last_transition = now;
                    self.random_hold = timing.sample(self.lit, self.random);
                }
            }
            DisplayMode::Timed => {
                let Some(duration) = self.timer else {
                    return;
                };

                if self.lit && self.has_elapsed(now, duration) {
                    self.set_lit(false);
                    self.mode = DisplayMode::Manual;
                    trace!("timer expired, back to {}", self.mode);
                }
            }
        }
    }

    /// Reads the time source and advances to the current instant.
    pub fn service(&mut self) {
        let now = self.time_source.now();
        self.advance(now);
    }

    /// Time left until the active mode next changes the output.
    ///
    /// # Returns
    /// * `Some(ZERO)` - A transition is due; the next tick will perform it
    /// * `Some(duration)` - Nothing changes before this much time has passed
    /// * `None` - The channel holds its state until commanded otherwise
    pub fn time_until_transition(&self, now: I) -> Option<I::Duration> {
        let hold = match self.mode {
            DisplayMode::Disabled | DisplayMode::Manual | DisplayMode::Fade => return None,
            DisplayMode::Blink => {
                let timing = self.blink?;
                if self.lit { timing.on } else { timing.off }
            }
            DisplayMode::RandomBlink => self.random_hold,
            DisplayMode::Timed if self.lit => self.timer?,
            DisplayMode::Timed => return None,
        };

        let elapsed = now.duration_since(self.last_transition).as_millis();
        Some(I::Duration::from_millis(hold.as_millis().saturating_sub(elapsed)))
    }

    /// Dispatches a command action.
    pub fn handle_action(&mut self, action: ChannelAction<I::Duration>) {
        match action {
            ChannelAction::Initialize => self.initialize(),
            ChannelAction::TurnOn => self.turn_on(),
            ChannelAction::TurnOff => self.turn_off(),
            ChannelAction::Toggle => self.toggle(),
            ChannelAction::ConfigureBlink { on, off } => self.configure_blink(on, off),
            ChannelAction::StartBlink => self.start_blink(),
            ChannelAction::ConfigureRandomBlink {
                min_off,
                max_off,
                min_on,
                max_on,
            } => self.configure_random_blink(min_off, max_off, min_on, max_on),
            ChannelAction::StartRandomBlink => self.start_random_blink(),
            ChannelAction::ConfigureTimer(duration) => self.configure_timer(duration),
            ChannelAction::StartTimer => self.start_timer(),
        }
    }

    /// Returns the output identifier.
    pub fn id(&self) -> S::Id {
        self.wiring.id
    }

    /// Returns the LED color.
    pub fn color(&self) -> LedColor {
        self.wiring.color
    }

    /// Returns the wiring polarity.
    pub fn polarity(&self) -> Polarity {
        self.wiring.polarity
    }

    /// Returns the full wiring description.
    pub fn wiring(&self) -> Wiring<S::Id> {
        self.wiring
    }

    /// Returns true if the LED is currently lit.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Returns the current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the configured blink durations, if any.
    pub fn blink_timing(&self) -> Option<BlinkTiming<I::Duration>> {
        self.blink
    }

    /// Returns the configured random blink bounds, if any.
    pub fn random_blink_timing(&self) -> Option<RandomBlinkTiming<I::Duration>> {
        self.random_blink
    }

    /// Returns the configured auto-off duration, if any.
    pub fn timer_duration(&self) -> Option<I::Duration> {
        self.timer
    }

    /// Approximate color the LED shows right now; black when unlit or invisible.
    pub fn preview_color(&self) -> Srgb {
        if !self.lit {
            return COLOR_OFF;
        }

        colors::preview(self.wiring.color).unwrap_or(COLOR_OFF)
    }

    fn set_lit(&mut self, lit: bool) {
        self.sink.write(self.wiring.id, self.wiring.polarity.level(lit));
        self.lit = lit;
    }

    fn enter(&mut self, mode: DisplayMode) {
        self.last_transition = self.time_source.now();
        self.mode = mode;
        trace!("entered {} mode, lit = {}", mode, self.lit);
    }

    fn has_elapsed(&self, now: I, hold: I::Duration) -> bool {
        now.duration_since(self.last_transition).as_millis() >= hold.as_millis()
    }
}
