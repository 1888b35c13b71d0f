//! Integration tests for Group

mod common;
use common::*;

use core::cell::RefCell;
use sparkle_leds::{
    ChannelAction, ChannelCommand, ChannelId, DisplayMode, Group, GroupError, LedColor, Level,
    MillisInstant, Polarity, Wiring, Xorshift32,
};

type TestGroup<'t, const N: usize> =
    Group<'t, MillisInstant, &'t RefCell<MockPort>, MockTimeSource, Xorshift32, N>;

const WIRING: [Wiring<u8>; 5] = [
    Wiring::new(2, LedColor::Red, Polarity::ActiveHigh),
    Wiring::new(3, LedColor::Green, Polarity::ActiveHigh),
    Wiring::new(4, LedColor::Green, Polarity::ActiveLow),
    Wiring::new(5, LedColor::Blue, Polarity::ActiveHigh),
    Wiring::new(6, LedColor::Infrared, Polarity::ActiveHigh),
];

fn populated<'t>(
    port: &'t RefCell<MockPort>,
    timer: &'t MockTimeSource,
    rng: &'t Xorshift32,
) -> TestGroup<'t, 8> {
    let mut group = TestGroup::<8>::new(timer, rng);
    for wiring in WIRING {
        group.add_channel(wiring, port).unwrap();
    }
    group
}

fn lit_states(group: &TestGroup<'_, 8>) -> heapless::Vec<bool, 8> {
    group.iter().map(|c| c.is_lit()).collect()
}

#[test]
fn initialize_all_visits_members_in_order() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);

    group.initialize_all();

    assert_eq!(port.borrow().configured(), &[2, 3, 4, 5, 6]);
    assert!(group.iter().all(|c| c.mode() == DisplayMode::Manual && !c.is_lit()));
    // Active-low member is held HIGH while off
    assert_eq!(port.borrow().level(4), Some(Level::High));
}

#[test]
fn all_on_and_all_off_reach_every_member() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);
    group.initialize_all();

    group.all_on();
    assert!(group.iter().all(|c| c.is_lit()));
    assert_eq!(port.borrow().level(4), Some(Level::Low));

    group.all_off();
    assert!(group.iter().all(|c| !c.is_lit()));
    assert!(group.iter().all(|c| c.mode() == DisplayMode::Manual));
}

#[test]
fn set_color_on_only_touches_matching_members() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);
    group.initialize_all();
    group.channel_mut(ChannelId(3)).unwrap().turn_on();

    group.set_color_on(LedColor::Green);

    assert_eq!(lit_states(&group).as_slice(), &[false, true, true, true, false]);
}

#[test]
fn set_color_off_only_touches_matching_members() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);
    group.initialize_all();
    group.all_on();

    group.set_color_off(LedColor::Green);

    assert_eq!(lit_states(&group).as_slice(), &[true, false, false, true, true]);
}

#[test]
fn color_with_no_members_is_a_no_op() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);
    group.initialize_all();
    port.borrow_mut().clear();

    group.set_color_on(LedColor::Ultraviolet);
    group.set_color_off(LedColor::Purple);

    assert!(port.borrow().writes().is_empty());
}

#[test]
fn advance_all_gives_every_member_the_same_instant() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);
    group.initialize_all();

    for index in 0..WIRING.len() {
        let channel = group.channel_mut(ChannelId(index)).unwrap();
        channel.configure_timer(ms(100));
        channel.start_timer();
    }

    group.advance_all(at(99));
    assert!(group.iter().all(|c| c.is_lit()));

    group.advance_all(at(100));
    assert!(group.iter().all(|c| !c.is_lit() && c.mode() == DisplayMode::Manual));
}

#[test]
fn service_all_reads_the_shared_clock() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);
    group.initialize_all();

    let blinker = group.channel_mut(ChannelId(0)).unwrap();
    blinker.configure_blink(ms(50), ms(50));
    blinker.start_blink();

    timer.advance(ms(49));
    group.service_all();
    assert!(group.channel(ChannelId(0)).unwrap().is_lit());

    timer.advance(ms(1));
    group.service_all();
    assert!(!group.channel(ChannelId(0)).unwrap().is_lit());
}

#[test]
fn time_until_next_reports_soonest_transition() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);
    group.initialize_all();
    assert_eq!(group.time_until_next(at(0)), None);

    group
        .handle_command(ChannelCommand::new(
            ChannelId(1),
            ChannelAction::ConfigureBlink {
                on: ms(80),
                off: ms(40),
            },
        ))
        .unwrap();
    group
        .handle_command(ChannelCommand::new(ChannelId(1), ChannelAction::StartBlink))
        .unwrap();
    group
        .handle_action(ChannelId(2), ChannelAction::ConfigureTimer(ms(30)))
        .unwrap();
    group
        .handle_action(ChannelId(2), ChannelAction::StartTimer)
        .unwrap();

    assert_eq!(group.time_until_next(at(10)), Some(ms(20)));

    group.advance_all(at(30));
    assert_eq!(group.time_until_next(at(30)), Some(ms(50)));
}

#[test]
fn capacity_is_fixed() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = TestGroup::<2>::new(&timer, &rng);

    assert_eq!(group.add_channel(WIRING[0], &port), Ok(ChannelId(0)));
    assert_eq!(group.add_channel(WIRING[1], &port), Ok(ChannelId(1)));
    assert_eq!(
        group.add_channel(WIRING[2], &port),
        Err(GroupError::GroupFull { capacity: 2 })
    );
    assert_eq!(group.len(), 2);
    assert_eq!(group.capacity(), 2);
}

#[test]
fn unknown_ids_are_rejected() {
    let port = RefCell::new(MockPort::new());
    let timer = MockTimeSource::new();
    let rng = Xorshift32::default();
    let mut group = populated(&port, &timer, &rng);

    assert!(matches!(
        group.channel(ChannelId(5)),
        Err(GroupError::InvalidChannelId(ChannelId(5)))
    ));
    assert_eq!(
        group.handle_action(ChannelId(9), ChannelAction::TurnOn),
        Err(GroupError::InvalidChannelId(ChannelId(9)))
    );
}

#[test]
fn error_messages_format_correctly_for_display() {
    assert_eq!(
        GroupError::InvalidChannelId(ChannelId(3)).to_string(),
        "channel ID 3 does not exist in group"
    );
    assert_eq!(
        GroupError::GroupFull { capacity: 4 }.to_string(),
        "group is full, capacity is 4 channels"
    );
}
