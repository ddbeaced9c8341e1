//! Kept in its own test binary: it installs the process-wide logger.

use std::sync::Mutex;
use std::time::Duration;

use log::{Level, LevelFilter, Log, Metadata, Record};

use lane_runner::core::{GameConfig, GameState, ScriptedRng};
use lane_runner::engine::{FixedTimestep, GameLoop, NullAudio};

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn crash_is_logged_once_per_run() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let state = GameState::with_rng(GameConfig::default(), ScriptedRng::new());
    let mut game = GameLoop::new(state, FixedTimestep::from_millis(16, 5), NullAudio);
    let y = game.state().player().y();
    game.state_mut().spawn_obstacle_at(1, y);

    let report = game.advance(Duration::from_millis(80));
    assert!(report.crashed);

    let lines = LOGGER.lines.lock().unwrap();
    let crash_lines = lines.iter().filter(|l| l.contains("crashed")).count();
    assert_eq!(crash_lines, 1, "log lines: {:?}", *lines);
}
