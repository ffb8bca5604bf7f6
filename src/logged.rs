use crate::channel::{Channel, ChannelProvider};
use crate::error::{ConfigurationError, Error, Result};
use crate::identity::Identity;
use crate::invocable::Invocable;
use crate::level::Level;

/// Settings for [`wrap_logging`].
///
/// `name` defaults to the target's module and `message` to the target's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub level: Level,
    pub name: Option<String>,
    pub message: Option<String>,
}

impl LogOptions {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            name: None,
            message: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ConfigurationError::EmptyName);
        }
        if self.message.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigurationError::EmptyMessage);
        }
        Ok(())
    }
}

impl From<Level> for LogOptions {
    fn from(level: Level) -> Self {
        Self::new(level)
    }
}

/// First stage of [`wrap_logging`]: options checked, no target yet.
///
/// One decorator can be attached to any number of targets.
#[derive(Debug)]
pub struct LoggingDecorator<'p, P: ?Sized> {
    provider: &'p P,
    options: LogOptions,
}

/// Builds a decorator that logs one record before each call of its target.
///
/// ```
/// use callwrap::{Invocable, Level, LogOptions, MemorySink, target, wrap_logging};
///
/// fn add(x: i32, y: i32) -> i32 {
///     x + y
/// }
///
/// # fn main() -> callwrap::Result<()> {
/// let sink = MemorySink::new();
/// let decorator = wrap_logging(&sink, LogOptions::new(Level::Debug).message("GO"))?;
/// let add = decorator.attach(target!(add))?;
/// assert_eq!(add.invoke((1, 3))?, 4);
///
/// let records = sink.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "GO");
/// assert_eq!(records[0].level, Level::Debug);
/// # Ok(())
/// # }
/// ```
pub fn wrap_logging<P>(
    provider: &P,
    options: impl Into<LogOptions>,
) -> Result<LoggingDecorator<'_, P>, ConfigurationError>
where
    P: ChannelProvider + ?Sized,
{
    let options = options.into();
    options.validate()?;
    Ok(LoggingDecorator { provider, options })
}

impl<P> LoggingDecorator<'_, P>
where
    P: ChannelProvider + ?Sized,
{
    pub fn options(&self) -> &LogOptions {
        &self.options
    }

    /// Resolves channel name and message for `target` and opens the channel.
    pub fn attach<T: Invocable>(&self, target: T) -> Result<Logged<T>> {
        let identity = target.identity();
        let name = match &self.options.name {
            Some(name) => name.clone(),
            None => identity.module().to_string(),
        };
        let message = match &self.options.message {
            Some(message) => message.clone(),
            None => identity.name().to_string(),
        };
        let channel = self.provider.channel(&name)?;

        Ok(Logged {
            target,
            channel,
            level: self.options.level,
            message,
        })
    }
}

/// Target wrapped by a [`LoggingDecorator`].
#[derive(Debug, Clone)]
pub struct Logged<T> {
    target: T,
    channel: Channel,
    level: Level,
    message: String,
}

impl<T> Logged<T> {
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T: Invocable> Invocable for Logged<T> {
    type Args = T::Args;
    type Output = T::Output;

    fn identity(&self) -> &Identity {
        self.target.identity()
    }

    fn invoke(&self, args: T::Args) -> Result<T::Output> {
        self.channel.emit(self.level, &self.message)?;
        self.target.invoke(args)
    }
}

/// Function-form logging decorator for `#[decorate(logged(&channel, level))]`.
///
/// Logs the function name, then runs it. The function must return a
/// `Result` whose error converts from [`Error`], so a failing sink surfaces
/// through the function's own error path.
pub fn logged<F, R, E>(channel: &Channel, level: Level, target: &Identity, f: F) -> Result<R, E>
where
    F: FnOnce() -> Result<R, E>,
    E: From<Error>,
{
    logged_with(channel, level, target.name(), target, f)
}

/// Like [`logged`] with a fixed message.
pub fn logged_with<F, R, E>(
    channel: &Channel,
    level: Level,
    message: &str,
    _target: &Identity,
    f: F,
) -> Result<R, E>
where
    F: FnOnce() -> Result<R, E>,
    E: From<Error>,
{
    channel
        .emit(level, message)
        .map_err(|e| E::from(Error::from(e)))?;
    f()
}
