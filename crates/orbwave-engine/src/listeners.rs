//! Listener registration records.
//!
//! Every input subscription the engine takes out is tracked as an ordered
//! (source, event) record. Teardown walks the records in registration order
//! and disarms each exactly once; a disarmed event's handler does nothing.

/// Input events the engine subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMove,
    TouchStart,
    TouchMove,
    Resize,
}

#[derive(Debug)]
struct Binding {
    source: &'static str,
    event: InputEvent,
    armed: bool,
}

/// Ordered set of listener registrations.
#[derive(Debug, Default)]
pub struct ListenerSet {
    bindings: Vec<Binding>,
}

impl ListenerSet {
    /// Record a registration against the named source and arm it.
    pub fn register(&mut self, source: &'static str, event: InputEvent) {
        self.bindings.push(Binding {
            source,
            event,
            armed: true,
        });
    }

    /// Whether any registration for this event is still armed.
    pub fn is_armed(&self, event: InputEvent) -> bool {
        self.bindings.iter().any(|b| b.event == event && b.armed)
    }

    /// Disarm every registration, in order, each exactly once. Returns the
    /// number disarmed by this call; a second call disarms nothing.
    pub fn unregister_all(&mut self) -> usize {
        let mut unbound = 0;
        for binding in &mut self.bindings {
            if binding.armed {
                binding.armed = false;
                unbound += 1;
                tracing::debug!("unbound {} listener on {}", name(binding.event), binding.source);
            }
        }
        unbound
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn name(event: InputEvent) -> &'static str {
    match event {
        InputEvent::PointerMove => "pointermove",
        InputEvent::TouchStart => "touchstart",
        InputEvent::TouchMove => "touchmove",
        InputEvent::Resize => "resize",
    }
}

// =============================================================================
// Tests
// =============================================================================
