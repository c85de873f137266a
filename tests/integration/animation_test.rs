//! Integration tests for the animation engine on an in-memory surface

use marquee::animation::{AnimationConfig, Direction, Repeat, RunOutcome};
use marquee::input::{InputEvent, ScriptedInput};
use marquee::text::ColorHandle;

use crate::helpers::{block, engine};

#[test]
fn single_run_completes_and_stops_drawing() {
    let (block, _) = block(b"A\nB\nC");
    let mut engine = engine(&block, AnimationConfig::default(), ScriptedInput::idle(), 20, 6);

    assert_eq!(engine.run().unwrap(), RunOutcome::Completed);
    let frames = engine.surface().frames_presented();
    assert_eq!(frames as u64, engine.state().cycle_len());

    assert_eq!(engine.tick().unwrap(), Some(RunOutcome::Completed));
    assert_eq!(engine.surface().frames_presented(), frames);
}

#[test]
fn frame_snapshot_mid_scroll() {
    let (block, _) = block(b"\x1b[31mHI\x1b[0m\nthere");
    let mut engine = engine(&block, AnimationConfig::default(), ScriptedInput::idle(), 10, 4);

    // Positions 10 down to 3
    for _ in 0..8 {
        engine.tick().unwrap();
    }

    insta::assert_snapshot!(engine.surface().to_text(), @r"
    ..........
    ...HI.....
    ...there..
    ..........
    ");
    let red = engine.surface().cell(1, 3).unwrap().1;
    let plain = engine.surface().cell(2, 3).unwrap().1;
    assert_ne!(red, plain);
    assert_ne!(red, ColorHandle::DEFAULT);
}

#[test]
fn block_taller_than_screen_is_clipped() {
    let (block, _) = block(b"1\n2\n3\n4\n5");
    let config = AnimationConfig {
        direction: Direction::Right,
        ..AnimationConfig::default()
    };
    let mut engine = engine(&block, config, ScriptedInput::idle(), 3, 3);

    // -1, then 0
    engine.tick().unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.surface().to_text(), "2..\n3..\n4..");
}

#[test]
fn quit_key_ends_infinite_run() {
    let (block, _) = block(b"forever");
    let config = AnimationConfig {
        repeat: Repeat::Infinite,
        ..AnimationConfig::default()
    };
    let input = ScriptedInput::after(25, InputEvent::Key('q'));
    let mut engine = engine(&block, config, input, 10, 1);

    assert_eq!(engine.run().unwrap(), RunOutcome::Cancelled);
    assert_eq!(engine.ticks(), 25);
}

#[test]
fn interrupt_is_ignored_for_short_suppressed_run() {
    let (block, _) = block(b"oops");
    let config = AnimationConfig {
        repeat: Repeat::Finite(2),
        suppress_cancellation: true,
        ..AnimationConfig::default()
    };
    let input = ScriptedInput::after(3, InputEvent::Interrupt);
    let mut engine = engine(&block, config, input, 10, 1);

    assert_eq!(engine.run().unwrap(), RunOutcome::Completed);
    assert_eq!(engine.ticks(), 2 * engine.state().cycle_len());
}

#[test]
fn sleep_total_matches_tick_count() {
    let (block, _) = block(b"ab");
    let mut engine = engine(&block, AnimationConfig::default(), ScriptedInput::idle(), 5, 1);
    engine.run().unwrap();

    let expected = AnimationConfig::default().tick_delay * engine.ticks() as u32;
    assert_eq!(engine.clock().elapsed(), expected);
}
