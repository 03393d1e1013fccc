//! State registry - name-keyed storage for every game state the engine can activate.

use crate::state::GameState;
use std::collections::HashMap;
use tempo_core::{Result, TempoError, TransitionData};

/// Owns all registered states for the lifetime of the engine.
///
/// Names are unique. States are never removed; deactivated states stay here
/// until they are started again.
pub struct StateRegistry<D = TransitionData> {
    states: HashMap<String, Box<dyn GameState<D>>>,
    order: Vec<String>,
}

impl<D> StateRegistry<D> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a state under its own name. Fails if the name is taken, leaving
    /// the registry untouched.
    pub fn register(&mut self, state: Box<dyn GameState<D>>) -> Result<()> {
        let name = state.name().to_string();
        if self.states.contains_key(&name) {
            return Err(TempoError::DuplicateState(name));
        }
        log::debug!("Registered state {}", name);
        self.order.push(name.clone());
        self.states.insert(name, state);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Look up a state by name.
    pub fn get(&self, name: &str) -> Result<&dyn GameState<D>> {
        match self.states.get(name) {
            Some(state) => Ok(state.as_ref()),
            None => Err(TempoError::UnknownState(name.to_string())),
        }
    }

    /// Look up a state by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut (dyn GameState<D> + 'static)> {
        match self.states.get_mut(name) {
            Some(state) => Ok(state.as_mut()),
            None => Err(TempoError::UnknownState(name.to_string())),
        }
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<D> Default for StateRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Populates a registry before the engine activates its initial state.
///
/// Implemented for any `FnOnce(&mut StateRegistry<D>) -> Result<()>`, so a
/// closure is usually enough.
pub trait StateLoader<D = TransitionData> {
    fn load_states(self, registry: &mut StateRegistry<D>) -> Result<()>;
}

impl<D, F> StateLoader<D> for F
where
    F: FnOnce(&mut StateRegistry<D>) -> Result<()>,
{
    fn load_states(self, registry: &mut StateRegistry<D>) -> Result<()> {
        self(registry)
    }
}
