//! States command - lists the states the demo loader registers

use crate::settings::Settings;
use crate::states::DemoStates;
use anyhow::Result;
use tempo_runtime::{StateLoader, StateRegistry};

pub fn run(config: Option<&str>) -> Result<()> {
    let settings = Settings::load(config)?;

    let mut registry: StateRegistry = StateRegistry::new();
    DemoStates::new(settings.demo).load_states(&mut registry)?;

    println!("Registered states ({}):", registry.len());
    for name in registry.names() {
        let marker = if name == settings.game.initial_state {
            " (initial)"
        } else {
            ""
        };
        println!("  {}{}", name, marker);
    }

    Ok(())
}
