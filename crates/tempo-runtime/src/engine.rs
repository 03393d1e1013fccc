//! Engine - drives the active game state once per frame and performs transitions.
//!
//! Each frame the engine asks its [`TimeSource`] for elapsed time, clamps it to
//! [`EngineConfig::time_delta_min`], runs the active state, then checks the
//! state's request flags. Quit wins over a transition requested in the same
//! frame. A transition ends the current state, copies its outgoing data into
//! the next state and starts it.

use crate::clock::TimeSource;
use crate::config::EngineConfig;
use crate::event::{EngineEvent, EventLog};
use crate::registry::{StateLoader, StateRegistry};
use crate::state::GameState;
use tempo_core::{Result, TempoError, TransitionData};

/// Where the engine is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// States registered, none active yet
    Uninitialized,
    /// A state is active and receiving frames
    Active,
    /// Control is moving between states
    Transitioning,
    /// The loop stopped and the last state was ended
    Terminated,
}

/// What happened during a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Transitioned,
    Quit,
}

/// Returned once the loop stops; the caller decides how the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shutdown {
    /// State that was active when the loop stopped
    pub last_state: String,
    /// Frames run in total
    pub frames: u64,
    /// Transitions performed in total
    pub transitions: u64,
}

pub struct Engine<D = TransitionData> {
    time_source: Box<dyn TimeSource>,
    config: EngineConfig,
    time_delta_min: f64,
    registry: StateRegistry<D>,
    active_state: Option<String>,
    phase: EnginePhase,
    frame_count: u64,
    transition_count: u64,
    events: EventLog,
}

impl<D: Clone + Default> Engine<D> {
    /// Build an engine and populate its registry without activating anything.
    ///
    /// Fails if the config is invalid, the loader fails, or the loader
    /// registers no states.
    pub fn with_states<L>(
        time_source: impl TimeSource + 'static,
        config: EngineConfig,
        loader: L,
    ) -> Result<Self>
    where
        L: StateLoader<D>,
    {
        config.validate()?;

        let mut registry = StateRegistry::new();
        loader.load_states(&mut registry)?;
        if registry.is_empty() {
            return Err(TempoError::NoStatesRegistered);
        }

        Ok(Self {
            time_source: Box::new(time_source),
            time_delta_min: config.time_delta_min(),
            config,
            registry,
            active_state: None,
            phase: EnginePhase::Uninitialized,
            frame_count: 0,
            transition_count: 0,
            events: EventLog::new(),
        })
    }

    /// Build an engine, populate its registry and start `initial_state_name`.
    pub fn new<L>(
        time_source: impl TimeSource + 'static,
        initial_state_name: &str,
        config: EngineConfig,
        loader: L,
    ) -> Result<Self>
    where
        L: StateLoader<D>,
    {
        let mut engine = Self::with_states(time_source, config, loader)?;
        engine.set_initial_state(initial_state_name)?;
        Ok(engine)
    }

    /// Add a state before the loop starts.
    pub fn register(&mut self, state: Box<dyn GameState<D>>) -> Result<()> {
        self.registry.register(state)
    }

    /// Activate and start `name`. Only valid while no state is active.
    pub fn set_initial_state(&mut self, name: &str) -> Result<()> {
        if let Some(active) = &self.active_state {
            return Err(TempoError::AlreadyStarted(active.clone()));
        }

        let state = self.registry.get_mut(name)?;
        self.active_state = Some(name.to_string());
        self.phase = EnginePhase::Active;

        state.control_mut().running = true;
        state.start()?;

        log::debug!("Initial state: {}", name);
        self.events.push(EngineEvent::Activated(name.to_string()));
        Ok(())
    }

    /// Run frames until the active state asks to quit, then shut down.
    pub fn run(&mut self) -> Result<Shutdown> {
        while self.step()? != FrameOutcome::Quit {}
        self.shutdown()
    }

    /// Run a single frame.
    pub fn step(&mut self) -> Result<FrameOutcome> {
        let frame_time = self.time_source.tick(self.config.fps);
        let time_delta = (frame_time / 1000.0).min(self.time_delta_min);

        let Some(name) = self.active_state.as_deref() else {
            return Err(TempoError::NoActiveState);
        };
        let state = self.registry.get_mut(name)?;
        state.run(time_delta)?;
        self.frame_count += 1;

        let control = state.control();
        if control.time_to_quit_app {
            return Ok(FrameOutcome::Quit);
        }
        if control.time_to_transition {
            self.transition()?;
            return Ok(FrameOutcome::Transitioned);
        }
        Ok(FrameOutcome::Continue)
    }

    fn transition(&mut self) -> Result<()> {
        let from = self.active_state.clone().ok_or(TempoError::NoActiveState)?;

        let to = {
            let current = self.registry.get_mut(&from)?;
            let to = current.control().target_state_name.clone();
            log::info!("Transition: {} -> {}", from, to);
            current.control_mut().time_to_transition = false;
            to
        };
        if !self.registry.contains(&to) {
            return Err(TempoError::UnknownState(to));
        }
        self.phase = EnginePhase::Transitioning;

        let current = self.registry.get_mut(&from)?;
        current.end()?;
        current.control_mut().running = false;
        let outgoing = current.control().outgoing_transition_data.clone();

        self.active_state = Some(to.clone());
        let next = self.registry.get_mut(&to)?;
        let control = next.control_mut();
        control.incoming_transition_data = outgoing;
        control.running = true;
        next.start()?;

        self.phase = EnginePhase::Active;
        self.transition_count += 1;
        self.events.push(EngineEvent::Transition { from, to });
        Ok(())
    }

    /// End the active state and stop. The engine has no active state afterwards.
    pub fn shutdown(&mut self) -> Result<Shutdown> {
        let name = self.active_state.take().ok_or(TempoError::NoActiveState)?;
        let state = self.registry.get_mut(&name)?;
        state.end()?;
        state.control_mut().running = false;

        self.phase = EnginePhase::Terminated;
        log::debug!(
            "Shut down in state {} after {} frames, {} transitions",
            name,
            self.frame_count,
            self.transition_count
        );
        self.events.push(EngineEvent::ShutDown(name.clone()));
        Ok(Shutdown {
            last_state: name,
            frames: self.frame_count,
            transitions: self.transition_count,
        })
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn active_state_name(&self) -> Option<&str> {
        self.active_state.as_deref()
    }

    pub fn registry(&self) -> &StateRegistry<D> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StateRegistry<D> {
        &mut self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ceiling applied to each frame's delta, in seconds
    pub fn time_delta_min(&self) -> f64 {
        self.time_delta_min
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn transition_count(&self) -> u64 {
        self.transition_count
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain()
    }
}
