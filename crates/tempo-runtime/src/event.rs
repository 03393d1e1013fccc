//! Engine lifecycle events and the bounded log that records them

use std::collections::VecDeque;

/// Something the engine did to the active state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A state became active without a transition (initial state)
    Activated(String),
    /// Control passed from one state to another (possibly the same one)
    Transition { from: String, to: String },
    /// The loop stopped and this state was ended
    ShutDown(String),
}

/// Default number of events kept before the oldest are dropped
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// A bounded event queue the engine pushes to and callers drain
pub struct EventLog {
    events: VecDeque<EngineEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// A log holding at most `capacity` events (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Push an event, evicting the oldest when full
    pub fn push(&mut self, event: EngineEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Drain all events, oldest first
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EngineEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events evicted because the log was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &str, to: &str) -> EngineEvent {
        EngineEvent::Transition {
            from: from.into(),
            to: to.into(),
        }
    }

    #[test]
    fn test_push_and_drain() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(EngineEvent::Activated("menu".into()));
        log.push(transition("menu", "play"));
        assert_eq!(log.len(), 2);

        let events = log.drain();
        assert_eq!(events[1], transition("menu", "play"));
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_oldest_evicted_when_full() {
        let mut log = EventLog::with_capacity(2);
        log.push(transition("a", "b"));
        log.push(transition("b", "c"));
        log.push(transition("c", "a"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 1);
        let events: Vec<_> = log.iter().cloned().collect();
        assert_eq!(events, vec![transition("b", "c"), transition("c", "a")]);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut log = EventLog::with_capacity(0);
        log.push(EngineEvent::ShutDown("play".into()));
        assert_eq!(log.len(), 1);
    }
}
