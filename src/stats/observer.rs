//! Operator-facing signals emitted while fetching.
//!
//! The fetcher never logs directly. It reports through an [`Observer`], so the
//! binary can forward to `tracing` while tests capture every signal.

use std::sync::Mutex;

pub trait Observer {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards signals to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub level: SignalLevel,
    pub message: String,
}

/// Keeps every signal in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryObserver {
    signals: Mutex<Vec<Signal>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.signals
            .lock()
            .map(|signals| signals.clone())
            .unwrap_or_default()
    }

    /// Messages emitted at `level`, in order.
    pub fn messages(&self, level: SignalLevel) -> Vec<String> {
        self.signals()
            .into_iter()
            .filter(|signal| signal.level == level)
            .map(|signal| signal.message)
            .collect()
    }

    fn push(&self, level: SignalLevel, message: &str) {
        if let Ok(mut signals) = self.signals.lock() {
            signals.push(Signal {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl Observer for MemoryObserver {
    fn info(&self, message: &str) {
        self.push(SignalLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(SignalLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(SignalLevel::Error, message);
    }
}

impl<T: Observer + ?Sized> Observer for &T {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warning(&self, message: &str) {
        (**self).warning(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
