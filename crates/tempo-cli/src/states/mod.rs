//! Demo game states: a menu, a scoring play loop, and a pause screen between rounds

mod menu;
mod pause;
mod play;

pub use menu::MenuState;
pub use pause::PauseState;
pub use play::PlayState;

use crate::settings::DemoSettings;
use tempo_runtime::{Result, StateLoader, StateRegistry};

pub const MENU: &str = "menu";
pub const PLAY: &str = "play";
pub const PAUSE: &str = "pause";

/// Registers every demo state
pub struct DemoStates {
    settings: DemoSettings,
}

impl DemoStates {
    pub fn new(settings: DemoSettings) -> Self {
        Self { settings }
    }
}

impl StateLoader for DemoStates {
    fn load_states(self, registry: &mut StateRegistry) -> Result<()> {
        registry.register(Box::new(MenuState::new(self.settings.clone())))?;
        registry.register(Box::new(PlayState::new(self.settings.clone())))?;
        registry.register(Box::new(PauseState::new(self.settings)))?;
        Ok(())
    }
}

/// Score multiplier for a difficulty name
pub fn difficulty_multiplier(difficulty: &str) -> Option<f64> {
    match difficulty {
        "easy" => Some(0.5),
        "normal" => Some(1.0),
        "hard" => Some(2.0),
        _ => None,
    }
}
