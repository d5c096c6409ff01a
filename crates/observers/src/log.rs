use tracing::Level;

use tabula_core::Observer;

use crate::traits::{HasError, HasEstimate};

/// Logs every event as a `tracing` event and never intervenes.
///
/// Fields are `iter`, `x`, `fx`, and `error` when the event has one. The
/// observer is generic over the action type, so it fits any method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingObserver {
    level: Level,
}

impl TracingObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

/// Emits one event at a runtime-selected level.
///
/// `tracing` macros need the level as a constant, hence the dispatch.
macro_rules! event_at {
    ($level:expr, $($rest:tt)+) => {{
        let level = $level;
        if level == Level::TRACE {
            tracing::trace!($($rest)+);
        } else if level == Level::DEBUG {
            tracing::debug!($($rest)+);
        } else if level == Level::INFO {
            tracing::info!($($rest)+);
        } else if level == Level::WARN {
            tracing::warn!($($rest)+);
        } else {
            tracing::error!($($rest)+);
        }
    }};
}

impl<E: HasEstimate + HasError, A> Observer<E, A> for TracingObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let (iter, x, fx) = (event.index(), event.estimate(), event.value());
        match event.error() {
            Some(error) => event_at!(self.level, iter, x, fx, error, "iteration"),
            None => event_at!(self.level, iter, x, fx, "iteration"),
        }
        None
    }
}
