use std::collections::VecDeque;

/// Events kept before the oldest are dropped.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Session event for traceability.
///
/// Structured text for now; `seq` orders events across actions and load
/// completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub seq: u64,
    pub kind: &'static str,
    pub message: String,
}

/// Bounded event log. Once `capacity` events are held, each new event
/// evicts the oldest; hosts that need the full history call [`EventBus::drain`].
#[derive(Debug)]
pub struct EventBus {
    next_seq: u64,
    capacity: usize,
    events: VecDeque<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            next_seq: 0,
            capacity,
            events: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    pub fn emit(&mut self, kind: &'static str, message: impl Into<String>) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(Event {
            seq: self.next_seq,
            kind,
            message: message.into(),
        });
        self.next_seq += 1;
    }

    pub fn events(&self) -> &VecDeque<Event> {
        &self.events
    }

    /// Takes the recorded events. Sequence numbers keep counting.
    pub fn drain(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }
}
