//! Terminal audio: the bell is the only speaker a terminal has.

use std::io::{self, Write};

use crate::engine::AudioSink;
use crate::types::SoundEvent;

/// Rings the terminal bell for crashes and, optionally, coin pickups.
#[derive(Debug)]
pub struct TerminalBell {
    ring_on_coin: bool,
}

impl TerminalBell {
    pub fn new(ring_on_coin: bool) -> Self {
        Self { ring_on_coin }
    }

    /// Whether `event` makes a sound.
    pub fn rings_for(&self, event: SoundEvent) -> bool {
        match event {
            SoundEvent::Crash => true,
            SoundEvent::CoinCollected => self.ring_on_coin,
            SoundEvent::Jump => false,
        }
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, event: SoundEvent) {
        if self.rings_for(event) {
            // Fire-and-forget: a missing bell is not worth failing a frame over.
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_rings_for_crash_and_coins_by_default() {
        let bell = TerminalBell::default();
        assert!(bell.rings_for(SoundEvent::Crash));
        assert!(bell.rings_for(SoundEvent::CoinCollected));
        assert!(!bell.rings_for(SoundEvent::Jump));
    }

    #[test]
    fn test_coin_bell_can_be_muted() {
        let bell = TerminalBell::new(false);
        assert!(!bell.rings_for(SoundEvent::CoinCollected));
        assert!(bell.rings_for(SoundEvent::Crash));
    }
}
