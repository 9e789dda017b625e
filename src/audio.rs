//! Audio boundary
//!
//! The simulation never plays sound. It reports events; this module maps
//! them to named cues and queues them for whatever backend the host wires up.
//! The sound toggle lives here too, so the core never sees it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// Session started
    Start,
    /// Dot eaten
    Chomp,
    /// Power item eaten
    PowerPellet,
    /// Frightened adversary captured
    EatGhost,
    /// Life lost
    Death,
    GameOver,
}

impl SoundCue {
    pub const ALL: [SoundCue; 6] = [
        SoundCue::Start,
        SoundCue::Chomp,
        SoundCue::PowerPellet,
        SoundCue::EatGhost,
        SoundCue::Death,
        SoundCue::GameOver,
    ];

    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::GameStarted => Some(SoundCue::Start),
            GameEvent::DotEaten { .. } => Some(SoundCue::Chomp),
            GameEvent::PowerItemEaten { .. } => Some(SoundCue::PowerPellet),
            GameEvent::AdversaryCaptured { .. } => Some(SoundCue::EatGhost),
            GameEvent::LifeLost => Some(SoundCue::Death),
            GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
            GameEvent::FrightenedEnded
            | GameEvent::LevelComplete
            | GameEvent::LevelStarted { .. } => None,
        }
    }

    /// Asset name a playback backend looks up
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Start => "start",
            SoundCue::Chomp => "chomp",
            SoundCue::PowerPellet => "power_pellet",
            SoundCue::EatGhost => "eat_ghost",
            SoundCue::Death => "death",
            SoundCue::GameOver => "game_over",
        }
    }
}

/// Pending cues plus the player's sound toggle
#[derive(Debug, Clone, Default)]
pub struct AudioCues {
    enabled: bool,
    pending: VecDeque<SoundCue>,
    /// Cues queued since creation, for run summaries
    played: u64,
}

impl AudioCues {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle sound; turning it off drops anything not yet played
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    /// Queue the cues for a batch of events, in order
    pub fn push_events(&mut self, events: &[GameEvent]) {
        if !self.enabled {
            return;
        }
        for cue in events.iter().filter_map(SoundCue::for_event) {
            self.pending.push_back(cue);
            self.played += 1;
        }
    }

    /// Hand every queued cue to the backend
    pub fn drain(&mut self) -> impl Iterator<Item = SoundCue> + '_ {
        self.pending.drain(..)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}
