//! Play state - accumulates score over timed rounds
//!
//! Fresh starts (from the menu) reset the score; starts carrying a `score`
//! (back from pause) resume where the previous round left off. After the
//! last round the state asks the engine to quit.

use super::{difficulty_multiplier, PAUSE};
use crate::settings::DemoSettings;
use tempo_runtime::{GameState, Result, StateControl, TempoError};

pub struct PlayState {
    control: StateControl,
    settings: DemoSettings,
    elapsed: f64,
    score: f64,
    round: i64,
    difficulty: String,
    multiplier: f64,
}

impl PlayState {
    pub fn new(settings: DemoSettings) -> Self {
        Self {
            control: StateControl::new(),
            difficulty: settings.difficulty.clone(),
            settings,
            elapsed: 0.0,
            score: 0.0,
            round: 0,
            multiplier: 1.0,
        }
    }

    fn publish(&mut self) {
        let out = &mut self.control.outgoing_transition_data;
        out.set("score", self.score);
        out.set("round", self.round);
        out.set("difficulty", self.difficulty.as_str());
    }
}

impl GameState for PlayState {
    fn name(&self) -> &str {
        super::PLAY
    }

    fn control(&self) -> &StateControl {
        &self.control
    }

    fn control_mut(&mut self) -> &mut StateControl {
        &mut self.control
    }

    fn start(&mut self) -> Result<()> {
        self.control.clear_requests();
        self.elapsed = 0.0;

        let incoming = &self.control.incoming_transition_data;
        self.score = incoming.get_float("score").unwrap_or(0.0);
        self.round = incoming.get_integer("round").unwrap_or(0);
        self.difficulty = incoming
            .get_str("difficulty")
            .unwrap_or(self.settings.difficulty.as_str())
            .to_string();
        self.multiplier = difficulty_multiplier(&self.difficulty).ok_or_else(|| {
            TempoError::state_hook(
                super::PLAY,
                format!("unknown difficulty '{}'", self.difficulty),
            )
        })?;

        log::info!(
            "Round {} of {} (score {:.0})",
            self.round + 1,
            self.settings.rounds,
            self.score
        );
        Ok(())
    }

    fn run(&mut self, delta: f64) -> Result<()> {
        self.elapsed += delta;
        self.score += self.settings.points_per_second * self.multiplier * delta;

        if self.elapsed >= self.settings.round_seconds {
            self.round += 1;
            self.publish();
            if self.round >= self.settings.rounds {
                self.control.request_quit();
            } else {
                self.control.request_transition(PAUSE);
            }
        }
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.publish();
        log::info!("Round {} over, score {:.0}", self.round, self.score);
        Ok(())
    }
}
