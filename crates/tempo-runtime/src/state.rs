//! Game state contract

use tempo_core::{Result, TransitionData};

/// Control fields and transition payloads shared between a state and the engine.
///
/// A state owns one of these and mutates it from its own hooks. The engine only
/// reads the request flags after `run` returns, and only writes `running`,
/// `time_to_transition` and `incoming_transition_data`.
#[derive(Debug, Clone, Default)]
pub struct StateControl<D = TransitionData> {
    /// True between `start` and `end`
    pub running: bool,
    /// Set during `run` to ask the engine for a transition
    pub time_to_transition: bool,
    /// Transition target; only meaningful while `time_to_transition` is set
    pub target_state_name: String,
    /// Set during `run` to stop the loop
    pub time_to_quit_app: bool,
    /// Data offered to the next state
    pub outgoing_transition_data: D,
    /// Copy of the previous state's outgoing data, set before `start`
    pub incoming_transition_data: D,
}

impl<D: Default> StateControl<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the engine to transition to `target` once this frame completes.
    pub fn request_transition(&mut self, target: impl Into<String>) {
        self.target_state_name = target.into();
        self.time_to_transition = true;
    }

    /// Ask the engine to stop the loop once this frame completes.
    pub fn request_quit(&mut self) {
        self.time_to_quit_app = true;
    }

    /// Drop requests left over from a previous activation. Call from `start`.
    pub fn clear_requests(&mut self) {
        self.time_to_transition = false;
        self.time_to_quit_app = false;
        self.target_state_name.clear();
    }
}

/// A named game mode driven by the engine
///
/// Hooks run synchronously on the loop thread. `start` is called once per
/// activation after incoming data is set, `run` once per frame while active,
/// and `end` once on deactivation or shutdown. States persist in the registry
/// and may be started again later.
pub trait GameState<D = TransitionData> {
    /// Unique name used as the registry key
    fn name(&self) -> &str;

    fn control(&self) -> &StateControl<D>;

    fn control_mut(&mut self) -> &mut StateControl<D>;

    /// Called on activation. Should clear stale requests (see [`StateControl::clear_requests`]).
    fn start(&mut self) -> Result<()>;

    /// Advance by `delta` seconds. Must not block.
    fn run(&mut self, delta: f64) -> Result<()>;

    /// Called on deactivation; outgoing data should be final afterwards.
    fn end(&mut self) -> Result<()>;
}
