//! The host interface the widget runs against.
//!
//! The widget does not own its parameters, its persistent state cells or the
//! channel its events go out on. A [`Host`] provides all three:
//!
//! - [`Host::parameters`] returns the resolved parameter set,
//! - [`Host::create_state`] hands out a shared `(get, set)` cell,
//! - [`Host::emit`] delivers widget events.
//!
//! [`MemoryHost`] is a self-contained implementation used by the demo and by
//! tests; embedders with their own runtime implement the trait themselves.
//!
//! ```rust
//! use countdown_widget::host::{Host, MemoryHost, WidgetEvent};
//! use countdown_widget::params::Parameters;
//!
//! let host = MemoryHost::new(Parameters::default());
//! let count = host.create_state(0u32);
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 1);
//!
//! host.emit(&WidgetEvent::Complete { duration: 60.0 });
//! assert_eq!(host.events().len(), 1);
//! ```

use std::sync::{Arc, Mutex, RwLock};

use serde_json::json;

use crate::params::Parameters;

/// A shared value cell with `get`/`set` semantics.
///
/// Clones refer to the same value. The widget only touches its cells from the
/// update loop; the lock exists so cells can move between threads with the
/// model.
#[derive(Debug, Default)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> State<T> {
    /// A new cell holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> T {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replaces the current value.
    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Mutates the current value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

/// An event emitted by the widget to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The countdown reached zero.
    Complete {
        /// The configured duration in seconds.
        duration: f64,
    },
}

impl WidgetEvent {
    /// The event name hosts subscribe to.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::Complete { .. } => "onComplete",
        }
    }

    /// The event payload as JSON.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            WidgetEvent::Complete { duration } => json!({ "duration": duration }),
        }
    }
}

/// Runtime services the widget depends on.
pub trait Host: Send + 'static {
    /// The current, resolved parameters.
    fn parameters(&self) -> Parameters;

    /// Creates a state cell seeded with `initial`.
    fn create_state<T: Clone + Send + Sync + 'static>(&self, initial: T) -> State<T>
    where
        Self: Sized,
    {
        State::new(initial)
    }

    /// Delivers an event to whoever embeds the widget.
    fn emit(&self, event: &WidgetEvent);
}

/// An in-process host that keeps parameters in memory and records events.
///
/// Clones share parameters and the event log, so a test can keep a handle
/// while the widget owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    params: State<Parameters>,
    events: Arc<Mutex<Vec<WidgetEvent>>>,
}

impl MemoryHost {
    /// A host serving `params`.
    pub fn new(params: Parameters) -> Self {
        Self {
            params: State::new(params),
            events: Arc::default(),
        }
    }

    /// Replaces the parameters the host serves.
    ///
    /// The widget picks them up on its next
    /// [`reload_parameters`](crate::widget::Model::reload_parameters).
    pub fn set_parameters(&self, params: Parameters) {
        self.params.set(params);
    }

    /// Every event emitted so far, oldest first.
    pub fn events(&self) -> Vec<WidgetEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Host for MemoryHost {
    fn parameters(&self) -> Parameters {
        self.params.get()
    }

    fn emit(&self, event: &WidgetEvent) {
        tracing::debug!(event = event.name(), payload = %event.payload(), "widget event");
        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clones_share_value() {
        let a = State::new(String::from("one"));
        let b = a.clone();
        b.set("two".to_string());
        assert_eq!(a.get(), "two");
    }

    #[test]
    fn test_complete_event_payload() {
        let event = WidgetEvent::Complete { duration: 90.0 };
        assert_eq!(event.name(), "onComplete");
        assert_eq!(event.payload(), json!({ "duration": 90.0 }));
    }

    #[test]
    fn test_memory_host_records_events() {
        let host = MemoryHost::new(Parameters::default());
        let handle = host.clone();

        host.emit(&WidgetEvent::Complete { duration: 5.0 });
        assert_eq!(handle.events(), vec![WidgetEvent::Complete { duration: 5.0 }]);
    }

    #[test]
    fn test_memory_host_serves_updated_parameters() {
        let host = MemoryHost::new(Parameters::default());
        host.set_parameters(Parameters {
            duration: 30.0,
            ..Parameters::default()
        });
        assert_eq!(host.parameters().duration, 30.0);
    }
}
