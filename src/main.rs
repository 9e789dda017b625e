//! Maze Chase entry point
//!
//! Native builds run a headless attract-mode game: the autopilot plays
//! until the run ends or a tick cap is hit, then a JSON summary is printed.
//! Web builds export a small `WebGame` handle; the page owns the canvas and
//! event listeners and forwards them here.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use glam::Vec2;
    use wasm_bindgen::prelude::*;

    use maze_chase::audio::AudioCues;
    use maze_chase::platform::{InputState, TickClock};
    use maze_chase::sim::MazePool;
    use maze_chase::{HighScores, Session, SessionMode, Settings};

    /// Game instance driven by the page's animation frames
    #[wasm_bindgen]
    pub struct WebGame {
        session: Session,
        clock: TickClock,
        input: InputState,
        cues: AudioCues,
        scores: HighScores,
    }

    #[wasm_bindgen]
    impl WebGame {
        #[wasm_bindgen(constructor)]
        pub fn new(seed: u64) -> Result<WebGame, JsValue> {
            let settings = Settings::load();
            let scores = HighScores::load();
            let pool = MazePool::classic().map_err(|e| JsValue::from_str(&e.to_string()))?;
            let seed = settings.seed.unwrap_or(seed);
            log::info!("New game with seed {}", seed);
            Ok(Self {
                session: Session::new(pool, settings.engine, seed, scores.best()),
                clock: TickClock::new(settings.engine.tick_ms),
                input: InputState::new(),
                cues: AudioCues::new(settings.sound_enabled),
                scores,
            })
        }

        pub fn start(&mut self) -> Result<(), JsValue> {
            let events = self
                .session
                .start()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            self.cues.push_events(&events);
            self.input.clear();
            self.clock.reset();
            Ok(())
        }

        pub fn pause(&mut self) -> bool {
            self.session.pause()
        }

        pub fn resume(&mut self) -> bool {
            self.clock.reset();
            self.session.resume()
        }

        pub fn toggle_sound(&mut self) -> bool {
            self.cues.toggle()
        }

        pub fn key_down(&mut self, key: &str) -> bool {
            self.input.key_down(key)
        }

        pub fn key_up(&mut self, key: &str) -> bool {
            self.input.key_up(key)
        }

        pub fn touch_start(&mut self, x: f32, y: f32) {
            self.input.touch_start(Vec2::new(x, y));
        }

        pub fn touch_move(&mut self, x: f32, y: f32) {
            self.input.touch_move(Vec2::new(x, y));
        }

        pub fn touch_end(&mut self) {
            self.input.touch_end();
        }

        /// Animation frame; returns true when a tick ran
        pub fn frame(&mut self, now_ms: f64) -> bool {
            if self.session.mode() != SessionMode::Running || !self.clock.poll(now_ms) {
                return false;
            }
            let events = self.session.advance(&self.input.tick_input());
            self.cues.push_events(&events);
            if self.session.mode() == SessionMode::Ended {
                let timestamp = (unix_now_ms() / 1000.0) as u64;
                self.scores
                    .add_score(self.session.score(), self.session.level(), timestamp);
                self.scores.save();
            }
            true
        }

        /// Cue names queued since the last call, for the page's audio player
        pub fn drain_cues(&mut self) -> Vec<String> {
            self.cues.drain().map(|c| c.as_str().to_string()).collect()
        }

        pub fn score(&self) -> u64 {
            self.session.score()
        }

        pub fn high_score(&self) -> u64 {
            self.session.high_score()
        }

        pub fn lives(&self) -> u8 {
            self.session.lives()
        }

        pub fn level(&self) -> u32 {
            self.session.level()
        }

        /// Current snapshot for the renderer
        pub fn snapshot_json(&self) -> String {
            let Some(state) = self.session.snapshot() else {
                return "null".to_string();
            };
            serde_json::json!({
                "maze": state.maze().to_rows(),
                "player": state.player,
                "adversaries": state.adversaries,
                "modes": state.adversary_modes(),
                "collectibles": state.collectibles,
                "power": state.power,
                "mode": self.session.mode(),
            })
            .to_string()
        }
    }

    fn unix_now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.time_origin() + p.now())
            .unwrap_or(0.0)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Maze Chase (web) ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use serde::Serialize;

    use maze_chase::audio::AudioCues;
    use maze_chase::platform::TickClock;
    use maze_chase::sim::pilot::pilot_input;
    use maze_chase::sim::{AdversaryMode, MazePool};
    use maze_chase::{HighScores, Session, SessionMode, Settings};

    /// Upper bound on ticks for one headless run
    const MAX_TICKS: u64 = 20_000;
    /// Host frame interval (60 Hz display)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Arcade-style wave: scatter, then pursuit, repeating
    const SCATTER_TICKS: u64 = 140;
    const WAVE_TICKS: u64 = 540;

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        ticks: u64,
        frames: u64,
        skipped_intervals: u64,
        level: u32,
        score: u64,
        high_score: u64,
        lives: u8,
        ended: bool,
        rank: Option<usize>,
        sound_cues: u64,
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let mut settings = Settings::load();
        settings.apply_env()?;
        let realtime = std::env::var_os("MAZE_CHASE_REALTIME").is_some();
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Maze Chase (native) starting with seed {}", seed);

        let mut scores = HighScores::load_from(&settings.high_score_path);
        let pool = MazePool::classic()?;
        let mut session = Session::new(pool, settings.engine, seed, scores.best());
        let mut clock = TickClock::new(settings.engine.tick_ms);
        let mut cues = AudioCues::new(settings.sound_enabled);

        cues.push_events(&session.start()?);

        let mut now_ms = 0.0;
        let mut frames = 0u64;
        let mut ticks = 0u64;
        while session.mode() == SessionMode::Running && ticks < MAX_TICKS {
            frames += 1;
            now_ms += FRAME_MS;
            if realtime {
                std::thread::sleep(Duration::from_secs_f64(FRAME_MS / 1000.0));
            }
            if !clock.poll(now_ms) {
                continue;
            }

            let wave_tick = session.ticks() % WAVE_TICKS;
            session.set_adversary_mode(if wave_tick < SCATTER_TICKS {
                AdversaryMode::Scatter
            } else {
                AdversaryMode::Pursuit
            });

            let Some(state) = session.snapshot() else {
                break;
            };
            let input = pilot_input(state);
            let events = session.advance(&input);
            ticks += 1;
            cues.push_events(&events);
            for cue in cues.drain() {
                log::debug!("Cue: {}", cue.as_str());
            }
        }

        let ended = session.mode() == SessionMode::Ended;
        if !ended {
            log::info!("Tick cap reached on level {}", session.level());
            session.end();
        }

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let rank = scores.add_score(session.score(), session.level(), timestamp);
        if let Err(e) = scores.save_to(&settings.high_score_path) {
            log::warn!("Could not save high scores: {}", e);
        }

        let summary = RunSummary {
            seed,
            ticks,
            frames,
            skipped_intervals: clock.skipped(),
            level: session.level(),
            score: session.score(),
            high_score: session.high_score(),
            lives: session.lives(),
            ended,
            rank,
            sound_cues: cues.played(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        eprintln!("maze-chase: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
