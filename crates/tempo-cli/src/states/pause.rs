//! Pause state - holds the play session's data, then hands it back

use super::PLAY;
use crate::settings::DemoSettings;
use tempo_runtime::{GameState, Result, StateControl};

pub struct PauseState {
    control: StateControl,
    settings: DemoSettings,
    elapsed: f64,
}

impl PauseState {
    pub fn new(settings: DemoSettings) -> Self {
        Self {
            control: StateControl::new(),
            settings,
            elapsed: 0.0,
        }
    }
}

impl GameState for PauseState {
    fn name(&self) -> &str {
        super::PAUSE
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
        self.control.outgoing_transition_data = self.control.incoming_transition_data.clone();
        log::info!("Paused");
        Ok(())
    }

    fn run(&mut self, delta: f64) -> Result<()> {
        self.elapsed += delta;
        if self.elapsed >= self.settings.pause_seconds {
            self.control.request_transition(PLAY);
        }
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        Ok(())
    }
}
