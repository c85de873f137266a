//! Shared helpers for integration tests

use marquee::animation::{AnimationConfig, AnimationEngine, ManualClock};
use marquee::input::ScriptedInput;
use marquee::render::GridSurface;
use marquee::text::{build_block, ColorPairRegistry, Limits, TextBlock};

/// Engine over an in-memory grid with a manual clock.
pub type TestEngine<'a> = AnimationEngine<'a, GridSurface, ScriptedInput, ManualClock>;

/// Build a block with default limits, returning the registry used.
pub fn block(raw: &[u8]) -> (TextBlock, ColorPairRegistry) {
    let mut registry = ColorPairRegistry::default();
    let block = build_block(raw, &mut registry, &Limits::default()).expect("build block");
    (block, registry)
}

pub fn engine<'a>(
    block: &'a TextBlock,
    config: AnimationConfig,
    input: ScriptedInput,
    width: u16,
    height: u16,
) -> TestEngine<'a> {
    AnimationEngine::new(
        block,
        config,
        GridSurface::new(width, height),
        input,
        ManualClock::default(),
    )
    .expect("create engine")
}

/// Visible characters of `raw`, one string per line, as decoded by `vte`.
pub fn vte_visible_lines(raw: &[u8]) -> Vec<String> {
    struct Collector {
        lines: Vec<String>,
    }

    impl vte::Perform for Collector {
        fn print(&mut self, c: char) {
            if let Some(line) = self.lines.last_mut() {
                line.push(c);
            }
        }

        fn execute(&mut self, byte: u8) {
            if byte == b'\n' {
                self.lines.push(String::new());
            }
        }
    }

    let mut collector = Collector {
        lines: vec![String::new()],
    };
    let mut parser = vte::Parser::new();
    parser.advance(&mut collector, raw);
    collector.lines
}
