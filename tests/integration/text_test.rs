//! Integration tests for parsing raw input into text blocks

use marquee::error::{MarqueeError, Resource};
use marquee::text::{build_block, CapacityPolicy, ColorPairRegistry, Limits};

use crate::helpers::{block, vte_visible_lines};

// ============================================================================
// Block Shape Tests
// ============================================================================

#[test]
fn three_single_character_lines() {
    let (block, _) = block(b"A\nB\nC");

    assert_eq!(block.line_count(), 3);
    assert_eq!(block.max_width(), 1);
    let texts: Vec<_> = block.lines().iter().map(|l| l.plain_text()).collect();
    assert_eq!(texts, vec![b"A".to_vec(), b"B".to_vec(), b"C".to_vec()]);
}

#[test]
fn max_width_ignores_escape_sequences() {
    let (block, _) = block(b"\x1b[1;31mshort\x1b[0m\n\x1b[38;5;200mmuch longer line\x1b[0m");
    assert_eq!(block.max_width(), "much longer line".len());
}

#[test]
fn red_text_is_one_red_segment() {
    let (block, mut registry) = block(b"\x1b[31mRED\x1b[0m");

    let line = &block.lines()[0];
    assert_eq!(line.segments().len(), 1);
    assert_eq!(line.segments()[0].text(), b"RED");
    assert_eq!(
        line.segments()[0].handle(),
        registry.lookup_or_create(1, -1)
    );
}

#[test]
fn blank_lines_collapse() {
    let (spaced, _) = block(b"\none\n\n\ntwo\n\n");
    let (tight, _) = block(b"one\ntwo");
    assert_eq!(spaced, tight);
    assert_eq!(spaced.line_count(), 2);
}

#[test]
fn newline_only_input_is_empty() {
    let (block, _) = block(b"\n");
    assert!(block.is_empty());
}

// ============================================================================
// Concatenation Law
// ============================================================================

#[test]
fn visible_text_matches_vte_decoding() {
    let inputs: &[&[u8]] = &[
        b"plain text",
        b"\x1b[31mred\x1b[32mgreen\x1b[0m and back",
        b"\x1b[1;4;38;5;208morange\x1b[0m\n\x1b[48;2;10;20;30mbg\x1b[49m tail",
        b"first\n\n\x1b[7mthird\x1b[27m\n",
        b"\x1b[2Kcleared \x1b[Hhome\x1b[0m",
    ];

    for raw in inputs {
        let (block, _) = block(raw);
        let expected = vte_visible_lines(raw);
        let actual: Vec<String> = block
            .lines()
            .iter()
            .map(|l| String::from_utf8_lossy(&l.plain_text()).into_owned())
            .collect();

        // Blank lines are skipped by the block builder
        let expected: Vec<String> = expected.into_iter().filter(|l| !l.is_empty()).collect();
        assert_eq!(actual, expected, "input {:?}", String::from_utf8_lossy(raw));
    }
}

// ============================================================================
// Capacity Tests
// ============================================================================

#[test]
fn extra_lines_are_truncated_by_default() {
    let raw = "x\n".repeat(300);
    let (block, _) = block(raw.as_bytes());
    assert_eq!(block.line_count(), 256);
}

#[test]
fn extra_lines_fail_in_strict_mode() {
    let raw = "x\n".repeat(300);
    let limits = Limits {
        policy: CapacityPolicy::Strict,
        ..Limits::default()
    };
    let mut registry = ColorPairRegistry::default();

    let err = build_block(raw.as_bytes(), &mut registry, &limits).unwrap_err();
    assert!(matches!(
        err,
        MarqueeError::CapacityExceeded {
            resource: Resource::Lines,
            limit: 256
        }
    ));
}

#[test]
fn registry_exhaustion_falls_back_to_default_handle() {
    // Slot 0 is reserved and the plain style takes slot 1
    let mut registry = ColorPairRegistry::new(3);
    let raw = b"\x1b[31ma\x1b[32mb\x1b[33mc";
    let block = build_block(raw, &mut registry, &Limits::default()).unwrap();

    let handles: Vec<u16> = block.lines()[0]
        .segments()
        .iter()
        .map(|s| s.handle().0)
        .collect();
    assert_eq!(handles, vec![2, 0, 0]);
    assert_eq!(block.lines()[0].plain_text(), b"abc");
}
