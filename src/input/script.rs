//! Scripted input source for headless runs.

use std::collections::VecDeque;
use std::io;

use crate::input::{InputEvent, InputSource};

/// Replays a fixed list of events, tick by tick.
///
/// Each entry of the script holds the events delivered during one tick.
/// A tick ends when the source reports no more pending events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<VecDeque<InputEvent>>,
}

impl ScriptedInput {
    pub fn new<T, E>(script: T) -> Self
    where
        T: IntoIterator<Item = E>,
        E: IntoIterator<Item = InputEvent>,
    {
        Self {
            ticks: script
                .into_iter()
                .map(|tick| tick.into_iter().collect())
                .collect(),
        }
    }

    /// No input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Quiet for `ticks` ticks, then deliver `event`.
    pub fn after(ticks: usize, event: InputEvent) -> Self {
        let mut script = vec![Vec::new(); ticks];
        script.push(vec![event]);
        Self::new(script)
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        let Some(tick) = self.ticks.front_mut() else {
            return Ok(None);
        };
        match tick.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                self.ticks.pop_front();
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(input: &mut ScriptedInput) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Some(event) = input.poll_event().unwrap() {
            events.push(event);
        }
        events
    }

    #[test]
    fn delivers_one_tick_per_drain() {
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::Key('a'), InputEvent::Resize],
            vec![],
            vec![InputEvent::Key('q')],
        ]);
        assert_eq!(drain(&mut input), vec![InputEvent::Key('a'), InputEvent::Resize]);
        assert!(drain(&mut input).is_empty());
        assert_eq!(drain(&mut input), vec![InputEvent::Key('q')]);
        assert!(drain(&mut input).is_empty());
    }

    #[test]
    fn after_waits_the_given_ticks() {
        let mut input = ScriptedInput::after(2, InputEvent::Interrupt);
        assert!(drain(&mut input).is_empty());
        assert!(drain(&mut input).is_empty());
        assert_eq!(drain(&mut input), vec![InputEvent::Interrupt]);
    }

    #[test]
    fn idle_never_delivers() {
        let mut input = ScriptedInput::idle();
        assert!(drain(&mut input).is_empty());
    }
}
