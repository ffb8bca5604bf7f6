//! Wrap callables with timing and logging while keeping their identity and
//! call contract.
//!
//! Two surfaces share the same behavior:
//!
//! - value wrappers over [`Invocable`] targets: [`wrap_timing`],
//!   [`wrap_timing_stateful`], [`wrap_logging`] and
//!   [`wrap_logging_parameterized`];
//! - the [`decorate`] attribute, which runs function-form decorators such as
//!   [`timed`], [`logged`] and [`announced`] around a `fn` body.
//!
//! ```
//! use callwrap::{Invocable, target, wrap_timing};
//!
//! fn add(x: i32, y: i32) -> i32 {
//!     x + y
//! }
//!
//! # fn main() -> callwrap::Result<()> {
//! let add = wrap_timing(target!(add));
//! assert_eq!(add.invoke((1, 3))?, 4);
//! assert_eq!(add.identity().name(), "add");
//! # Ok(())
//! # }
//! ```

extern crate self as callwrap;

pub mod announce;
pub mod channel;
pub mod console;
pub mod error;
pub mod identity;
pub mod invocable;
pub mod level;
pub mod logged;
pub mod system;
pub mod timing;

pub use announce::{Announced, Announcer, announced, wrap_logging_parameterized};
pub use callwrap_macros::decorate;
pub use channel::{Channel, ChannelProvider, EmittedRecord, LogSink, MemorySink};
pub use console::{Buffer, Console, Stdout};
pub use error::{ConfigurationError, Error, LoggingSinkError, Result};
pub use identity::Identity;
pub use invocable::{Invocable, Target, TupleFn, Wrapped};
pub use level::Level;
pub use logged::{LogOptions, Logged, LoggingDecorator, logged, logged_with, wrap_logging};
pub use system::{LogSettings, LoggingSystem, Rollover, RotationPolicy};
pub use timing::{
    Timer, TimingReport, timed, timed_to, wrap_timing, wrap_timing_stateful, wrap_timing_to,
};
