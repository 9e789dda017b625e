//! Game session state machine
//!
//! Owns everything that outlives a single maze: mode, score, lives, level,
//! and the high score handed in by the host. The simulation itself is
//! stateless; the session keeps the current snapshot and feeds it to `tick`
//! once per `advance` while running.
//!
//! ```text
//! NotStarted --start--> Running <--pause/resume--> Paused
//!                         |
//!                       end / last life
//!                         v
//!                       Ended --start--> Running
//! ```

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FIRST_LEVEL;
use crate::settings::EngineConfig;
use crate::sim::{AdversaryMode, GameEvent, GameState, MazeError, MazePool, TickInput, tick};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    #[default]
    NotStarted,
    Running,
    Paused,
    Ended,
}

/// Errors raised by session transitions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot start level {level}")]
    CannotStartLevel {
        level: u32,
        #[source]
        source: MazeError,
    },
}

/// One player's run through the level pool
#[derive(Debug, Clone)]
pub struct Session {
    mode: SessionMode,
    score: u64,
    high_score: u64,
    lives: u8,
    level: u32,
    /// Committed snapshot, `None` until the first start
    state: Option<GameState>,
    pool: MazePool,
    config: EngineConfig,
    rng: Pcg32,
}

impl Session {
    pub fn new(pool: MazePool, config: EngineConfig, seed: u64, high_score: u64) -> Self {
        Self {
            mode: SessionMode::NotStarted,
            score: 0,
            high_score,
            lives: config.starting_lives,
            level: FIRST_LEVEL,
            state: None,
            pool,
            config,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the committed state for renderers
    pub fn snapshot(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Start (or restart) a run on the first level
    ///
    /// Only valid from `NotStarted` or `Ended`; otherwise nothing happens.
    /// If the pool cannot supply a maze the session is left as it was.
    pub fn start(&mut self) -> Result<Vec<GameEvent>, SessionError> {
        if !matches!(self.mode, SessionMode::NotStarted | SessionMode::Ended) {
            return Ok(Vec::new());
        }
        let maze = self
            .pool
            .for_level(FIRST_LEVEL)
            .map_err(|source| SessionError::CannotStartLevel {
                level: FIRST_LEVEL,
                source,
            })?;

        self.score = 0;
        self.lives = self.config.starting_lives;
        self.level = FIRST_LEVEL;
        self.state = Some(GameState::new(maze));
        self.mode = SessionMode::Running;
        log::info!(
            "Session started: {} lives, high score {}",
            self.lives,
            self.high_score
        );
        Ok(vec![
            GameEvent::GameStarted,
            GameEvent::LevelStarted { level: self.level },
        ])
    }

    pub fn pause(&mut self) -> bool {
        if self.mode != SessionMode::Running {
            return false;
        }
        self.mode = SessionMode::Paused;
        log::info!("Paused at tick {}", self.ticks());
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.mode != SessionMode::Paused {
            return false;
        }
        self.mode = SessionMode::Running;
        log::info!("Resumed");
        true
    }

    /// Finish the run and fold the score into the high score
    ///
    /// Returns the `GameOver` event when this call ended a live run.
    pub fn end(&mut self) -> Option<GameEvent> {
        if !matches!(self.mode, SessionMode::Running | SessionMode::Paused) {
            return None;
        }
        self.mode = SessionMode::Ended;
        self.high_score = self.high_score.max(self.score);
        log::info!(
            "Game over on level {}: score {}, high score {}",
            self.level,
            self.score,
            self.high_score
        );
        Some(GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
        })
    }

    /// Set the stored scatter/pursuit mode of every adversary
    ///
    /// Frightened is driven by the power-up and cannot be set here.
    pub fn set_adversary_mode(&mut self, mode: AdversaryMode) {
        if mode == AdversaryMode::Frightened {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            for adv in state.adversaries.iter_mut() {
                adv.mode = mode;
            }
        }
    }

    /// Run one tick if the session is running and apply its events
    pub fn advance(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if self.mode != SessionMode::Running {
            return Vec::new();
        }
        let Some(state) = self.state.as_ref() else {
            return Vec::new();
        };

        let outcome = tick(state, input, &self.config, &mut self.rng);
        let mut events = outcome.events;
        self.state = Some(outcome.state);
        self.score += events.iter().map(GameEvent::points).sum::<u64>();

        if events.contains(&GameEvent::LifeLost) {
            self.lives = self.lives.saturating_sub(1);
            log::info!("Life lost, {} left", self.lives);
            if self.lives == 0 {
                events.extend(self.end());
                return events;
            }
        }

        if events.contains(&GameEvent::LevelComplete) {
            self.level += 1;
            match self.pool.for_level(self.level) {
                Ok(maze) => {
                    self.state = Some(GameState::new(maze));
                    events.push(GameEvent::LevelStarted { level: self.level });
                }
                Err(e) => {
                    log::warn!("Cannot load level {}: {}", self.level, e);
                    events.extend(self.end());
                }
            }
        }

        events
    }

    /// Ticks run on the current maze
    pub fn ticks(&self) -> u64 {
        self.state.as_ref().map_or(0, |s| s.time_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;
    use glam::IVec2;

    /// Player walks into Blinky every tick; the rest are sealed away
    const AMBUSH: [&str; 5] = [
        "##########",
        "#P.1######",
        "##########",
        "#2#3#4#.##",
        "##########",
    ];

    /// A short corridor of collectibles with nothing hunting
    const CORRIDOR: [&str; 5] = [
        "#########",
        "#P..o...#",
        "#########",
        "#1#2#3#4#",
        "#########",
    ];

    /// Dot then power item, nothing else
    const QUICK: [&str; 5] = [
        "#########",
        "#P.o#####",
        "#########",
        "#1#2#3#4#",
        "#########",
    ];

    fn session(rows: &[&str], high_score: u64) -> Session {
        let pool = MazePool::from_layouts(&[rows]).unwrap();
        Session::new(pool, EngineConfig::default(), 1, high_score)
    }

    #[test]
    fn test_start_dot_scores_ten() {
        let mut session = session(&CORRIDOR, 0);
        assert_eq!(session.mode(), SessionMode::NotStarted);
        assert!(session.snapshot().is_none());

        let events = session.start().unwrap();
        assert_eq!(
            events,
            vec![GameEvent::GameStarted, GameEvent::LevelStarted { level: 1 }]
        );
        assert_eq!(session.mode(), SessionMode::Running);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.level(), 1);

        let events = session.advance(&TickInput::default());
        assert_eq!(
            events,
            vec![GameEvent::DotEaten {
                cell: IVec2::new(2, 1),
                points: 10
            }]
        );
        assert_eq!(session.score(), 10);
        assert_eq!(session.ticks(), 1);
        assert_eq!(session.snapshot().map(|s| s.player.cell), Some(IVec2::new(2, 1)));
    }

    #[test]
    fn test_start_fails_cleanly_on_empty_pool() {
        let mut session = Session::new(MazePool::default(), EngineConfig::default(), 1, 0);
        let err = session.start().unwrap_err();
        assert!(matches!(
            err,
            SessionError::CannotStartLevel {
                level: 1,
                source: MazeError::EmptyPool
            }
        ));
        assert_eq!(session.mode(), SessionMode::NotStarted);
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn test_pause_and_resume_only_from_their_modes() {
        let mut session = session(&CORRIDOR, 0);
        assert!(!session.pause());
        assert!(!session.resume());
        session.start().unwrap();
        assert!(!session.resume());
        assert!(session.pause());
        assert!(!session.pause());
        assert_eq!(session.mode(), SessionMode::Paused);

        // Paused sessions do not tick
        assert!(session.advance(&TickInput::default()).is_empty());
        assert_eq!(session.ticks(), 0);

        assert!(session.resume());
        assert_eq!(session.mode(), SessionMode::Running);
        // Start while running is ignored
        assert!(session.start().unwrap().is_empty());
        session.advance(&TickInput::default());
        assert_eq!(session.ticks(), 1);
    }

    #[test]
    fn test_last_life_ends_with_max_high_score() {
        for (prior, expected) in [(0, 10), (500, 500)] {
            let mut session = session(&AMBUSH, prior);
            session.start().unwrap();

            let mut all = Vec::new();
            for _ in 0..3 {
                all.extend(session.advance(&TickInput::default()));
            }
            assert_eq!(all.iter().filter(|e| **e == GameEvent::LifeLost).count(), 3);
            assert_eq!(session.lives(), 0);
            assert_eq!(session.mode(), SessionMode::Ended);
            assert_eq!(session.score(), 10);
            assert_eq!(session.high_score(), expected);
            assert_eq!(
                all.last(),
                Some(&GameEvent::GameOver {
                    score: 10,
                    high_score: expected
                })
            );

            // Ended sessions stay put
            assert!(session.advance(&TickInput::default()).is_empty());
        }
    }

    #[test]
    fn test_level_complete_loads_next_maze() {
        let mut session = session(&QUICK, 0);
        session.start().unwrap();
        session.advance(&TickInput::default());
        let events = session.advance(&TickInput::toward(Direction::Right));
        assert_eq!(
            events,
            vec![
                GameEvent::PowerItemEaten {
                    cell: IVec2::new(3, 1),
                    points: 50
                },
                GameEvent::LevelComplete,
                GameEvent::LevelStarted { level: 2 },
            ]
        );
        assert_eq!(session.level(), 2);
        assert_eq!(session.score(), 60);
        assert_eq!(session.lives(), 3);

        // Fresh maze: collectibles back, agents on spawn, power-up gone
        let state = session.snapshot().unwrap();
        assert_eq!(state.collectibles.remaining(), 2);
        assert_eq!(state.player.cell, IVec2::new(1, 1));
        assert!(!state.is_frightened());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_restart_after_end_keeps_high_score() {
        let mut session = session(&CORRIDOR, 0);
        assert_eq!(session.end(), None);
        session.start().unwrap();
        session.advance(&TickInput::default());
        assert_eq!(
            session.end(),
            Some(GameEvent::GameOver {
                score: 10,
                high_score: 10
            })
        );
        assert_eq!(session.end(), None);

        session.start().unwrap();
        assert_eq!(session.mode(), SessionMode::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 10);
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_adversary_mode_override() {
        let mut session = session(&CORRIDOR, 0);
        session.start().unwrap();
        session.set_adversary_mode(AdversaryMode::Pursuit);
        session.set_adversary_mode(AdversaryMode::Frightened);
        let state = session.snapshot().unwrap();
        assert!(
            state
                .adversaries
                .iter()
                .all(|a| a.mode == AdversaryMode::Pursuit)
        );
    }
}
