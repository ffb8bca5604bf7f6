use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::LoggingSinkError;
use crate::level::Level;

/// Destination for log records, shared by every channel it hands out.
pub trait LogSink: Send + Sync {
    fn emit(&self, channel: &str, level: Level, message: &str) -> Result<(), LoggingSinkError>;
}

/// Hands out named channels.
pub trait ChannelProvider {
    fn channel(&self, name: &str) -> Result<Channel, LoggingSinkError>;
}

/// A named, leveled handle onto a [`LogSink`].
#[derive(Clone)]
pub struct Channel {
    name: Arc<str>,
    sink: Arc<dyn LogSink>,
}

impl Channel {
    pub fn new(name: impl Into<Arc<str>>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emit(&self, level: Level, message: &str) -> Result<(), LoggingSinkError> {
        self.sink.emit(&self.name, level, message)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel").field("name", &self.name).finish()
    }
}

/// A record captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedRecord {
    pub channel: String,
    pub level: Level,
    pub message: String,
}

/// In-memory sink and provider; clones share their records.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<EmittedRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<EmittedRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, channel: &str, level: Level, message: &str) -> Result<(), LoggingSinkError> {
        self.records
            .lock()
            .map_err(|_| LoggingSinkError::Poisoned)?
            .push(EmittedRecord {
                channel: channel.to_string(),
                level,
                message: message.to_string(),
            });
        Ok(())
    }
}

impl ChannelProvider for MemorySink {
    fn channel(&self, name: &str) -> Result<Channel, LoggingSinkError> {
        Ok(Channel::new(name, Arc::new(self.clone())))
    }
}
