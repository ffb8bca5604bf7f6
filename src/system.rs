use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use log::{Log, Metadata, Record};
use log4rs::Logger;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::policy::compound::roll::Roll;
use log4rs::append::rolling_file::policy::compound::roll::delete::DeleteRoller;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::Trigger;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::trigger::time::{
    TimeTrigger, TimeTriggerConfig, TimeTriggerInterval,
};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::channel::{Channel, ChannelProvider, LogSink};
use crate::error::{ConfigurationError, LoggingSinkError, Result};
use crate::level::Level;

// `level` carries the full level name, which `{l}` cannot print for CRITICAL.
const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} - {t} - {K(level)}: {m}{n}";

/// What makes the log file roll over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollover {
    /// The file grows past this many bytes.
    Size(u64),
    Hours(u32),
    Days(u32),
    Weeks(u32),
}

/// When the log file rolls over and how many old files are kept.
///
/// Defaults to a new file every day with three backups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub rollover: Rollover,
    pub backups: u32,
}

impl RotationPolicy {
    pub fn daily(backups: u32) -> Self {
        Self {
            rollover: Rollover::Days(1),
            backups,
        }
    }

    pub fn size(max_bytes: u64, backups: u32) -> Self {
        Self {
            rollover: Rollover::Size(max_bytes),
            backups,
        }
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::daily(3)
    }
}

/// Output destinations for a [`LoggingSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub file: PathBuf,
    pub level: Level,
    pub rotation: RotationPolicy,
    /// Mirror records to stderr.
    pub console: bool,
}

impl LogSettings {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            level: Level::Info,
            rotation: RotationPolicy::default(),
            console: true,
        }
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }
}

enum State {
    Unconfigured,
    Running { settings: LogSettings, logger: Logger },
    ShutDown,
}

struct Shared {
    state: RwLock<State>,
}

/// Console plus rotated file logging, handed to whoever needs channels.
///
/// Nothing is installed as the process-wide `log` logger; records only reach
/// the outputs through channels obtained from this value.
///
/// ```
/// use callwrap::{ChannelProvider, Level, LogSettings, LoggingSystem};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let logging = LoggingSystem::new();
/// logging.configure(
///     LogSettings::new(dir.path().join("demo.log"))
///         .level(Level::Debug)
///         .console(false),
/// )?;
/// logging.channel("demo")?.emit(Level::Info, "ready")?;
/// logging.shutdown()?;
///
/// let written = std::fs::read_to_string(dir.path().join("demo.log"))?;
/// assert!(written.contains("demo - INFO: ready"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LoggingSystem {
    shared: Arc<Shared>,
}

impl LoggingSystem {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: RwLock::new(State::Unconfigured),
            }),
        }
    }

    /// Sets up the outputs.
    ///
    /// Calling again with equal settings does nothing. Different settings are
    /// rejected instead of replacing outputs someone else may be relying on.
    /// A system that was shut down can be configured afresh.
    pub fn configure(&self, settings: LogSettings) -> Result<()> {
        let mut state = self
            .shared
            .state
            .write()
            .map_err(|_| LoggingSinkError::Poisoned)?;

        match &*state {
            State::Running { settings: current, .. } if *current == settings => return Ok(()),
            State::Running { .. } => return Err(ConfigurationError::AlreadyConfigured.into()),
            State::Unconfigured | State::ShutDown => {}
        }

        let logger = build_logger(&settings)?;
        *state = State::Running { settings, logger };
        Ok(())
    }

    pub fn settings(&self) -> Option<LogSettings> {
        match &*self.shared.state.read().ok()? {
            State::Running { settings, .. } => Some(settings.clone()),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.settings().is_some()
    }

    /// Flushes the outputs. Channels fail with `ShutDown` afterwards.
    pub fn shutdown(&self) -> Result<()> {
        let mut state = self
            .shared
            .state
            .write()
            .map_err(|_| LoggingSinkError::Poisoned)?;
        if let State::Running { logger, .. } = &*state {
            logger.flush();
        }
        *state = State::ShutDown;
        Ok(())
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingSystem")
            .field("settings", &self.settings())
            .finish()
    }
}

impl ChannelProvider for LoggingSystem {
    fn channel(&self, name: &str) -> Result<Channel, LoggingSinkError> {
        let state = self
            .shared
            .state
            .read()
            .map_err(|_| LoggingSinkError::Poisoned)?;
        match &*state {
            State::Running { .. } => Ok(Channel::new(name, self.shared.clone())),
            State::Unconfigured => Err(LoggingSinkError::NotConfigured),
            State::ShutDown => Err(LoggingSinkError::ShutDown),
        }
    }
}

impl LogSink for Shared {
    fn emit(&self, channel: &str, level: Level, message: &str) -> Result<(), LoggingSinkError> {
        let state = self.state.read().map_err(|_| LoggingSinkError::Poisoned)?;
        let logger = match &*state {
            State::Running { logger, .. } => logger,
            State::Unconfigured => return Err(LoggingSinkError::NotConfigured),
            State::ShutDown => return Err(LoggingSinkError::ShutDown),
        };

        let metadata = Metadata::builder()
            .level(level.to_log())
            .target(channel)
            .build();
        if logger.enabled(&metadata) {
            logger.log(
                &Record::builder()
                    .metadata(metadata)
                    .args(format_args!("{message}"))
                    .key_values(&("level", level.as_str()))
                    .build(),
            );
        }
        Ok(())
    }
}

fn build_logger(settings: &LogSettings) -> Result<Logger, ConfigurationError> {
    let output = |e: &dyn fmt::Display| ConfigurationError::Output(e.to_string());

    let file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&settings.file, Box::new(rotation_policy(settings)?))
        .map_err(|e| output(&e))?;

    let mut builder = Config::builder().appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if settings.console {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    let config = builder
        .build(root.build(settings.level.to_filter()))
        .map_err(|e| output(&e))?;
    Ok(Logger::new(config))
}

fn rotation_policy(settings: &LogSettings) -> Result<CompoundPolicy, ConfigurationError> {
    let trigger: Box<dyn Trigger> = match settings.rotation.rollover {
        Rollover::Size(max_bytes) => Box::new(SizeTrigger::new(max_bytes)),
        Rollover::Hours(n) => time_trigger(TimeTriggerInterval::Hour(n.into())),
        Rollover::Days(n) => time_trigger(TimeTriggerInterval::Day(n.into())),
        Rollover::Weeks(n) => time_trigger(TimeTriggerInterval::Week(n.into())),
    };
    let roller: Box<dyn Roll> = match settings.rotation.backups {
        0 => Box::new(DeleteRoller::new()),
        backups => {
            let pattern = format!("{}.{{}}", settings.file.display());
            let roller = FixedWindowRoller::builder()
                .build(&pattern, backups)
                .map_err(|e| ConfigurationError::Output(e.to_string()))?;
            Box::new(roller)
        }
    };
    Ok(CompoundPolicy::new(trigger, roller))
}

fn time_trigger(interval: TimeTriggerInterval) -> Box<dyn Trigger> {
    Box::new(TimeTrigger::new(TimeTriggerConfig {
        interval,
        modulate: false,
        max_random_delay: 0,
    }))
}
