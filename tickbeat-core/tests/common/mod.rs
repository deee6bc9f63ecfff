//! Shared helpers for integration tests

#![allow(dead_code)]

use tickbeat_core::{BufferSink, Event, EventSink, PostError};

/// Sink that rejects every post, for exercising the best-effort policy
pub struct FailingSink;

impl EventSink for FailingSink {
    fn post(&self, _event: Event) -> Result<(), PostError> {
        Err(PostError::QueueFull)
    }
}

/// Drain a buffer sink into a vec, oldest first
pub fn drain<const N: usize>(sink: &BufferSink<N>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Some(event) = sink.pop() {
        events.push(event);
    }
    events
}
