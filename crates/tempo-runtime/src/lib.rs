//! Tempo Runtime - Game loop infrastructure
//!
//! Provides the building blocks for a state-driven game loop:
//! - `GameState` / `StateControl` - lifecycle contract every game mode implements
//! - `StateRegistry` / `StateLoader` - name-keyed registry populated once at startup
//! - `Engine` - frame loop that clamps time deltas and performs state transitions
//! - `TimeSource`, `FrameClock`, `ScriptedClock` - frame pacing
//! - `EngineConfig` - frame-rate settings loaded from TOML
//! - `EngineEvent` / `EventLog` - bounded record of lifecycle events

mod clock;
mod config;
mod engine;
mod event;
mod registry;
mod state;

pub use clock::{FrameClock, ScriptedClock, TimeSource};
pub use config::EngineConfig;
pub use engine::{Engine, EnginePhase, FrameOutcome, Shutdown};
pub use event::{EngineEvent, EventLog};
pub use registry::{StateLoader, StateRegistry};
pub use state::{GameState, StateControl};
pub use tempo_core::{Result, TempoError, TransitionData};
