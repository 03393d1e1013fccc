//! Menu state - waits, then starts play with the chosen difficulty

use super::PLAY;
use crate::settings::DemoSettings;
use tempo_runtime::{GameState, Result, StateControl};

pub struct MenuState {
    control: StateControl,
    settings: DemoSettings,
    elapsed: f64,
}

impl MenuState {
    pub fn new(settings: DemoSettings) -> Self {
        Self {
            control: StateControl::new(),
            settings,
            elapsed: 0.0,
        }
    }
}

impl GameState for MenuState {
    fn name(&self) -> &str {
        super::MENU
    }

    fn control(&self) -> &StateControl {
        &self.control
    }

    fn control_mut(&mut self) -> &mut StateControl {
        &mut self.control
    }

    fn start(&mut self) -> Result<()> {
        self.control.clear_requests();
        self.control.outgoing_transition_data.clear();
        self.elapsed = 0.0;
        log::info!("Main menu (difficulty: {})", self.settings.difficulty);
        Ok(())
    }

    fn run(&mut self, delta: f64) -> Result<()> {
        self.elapsed += delta;
        if self.elapsed >= self.settings.menu_seconds {
            let out = &mut self.control.outgoing_transition_data;
            out.set("difficulty", self.settings.difficulty.as_str());
            self.control.request_transition(PLAY);
        }
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        Ok(())
    }
}
