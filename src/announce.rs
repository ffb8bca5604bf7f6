// Level announcements ahead of each call
use crate::console::{Console, Stdout};
use crate::error::Result;
use crate::identity::Identity;
use crate::invocable::Invocable;
use crate::level::Level;

fn announcement(level: Level, name: &str) -> String {
    format!("[{level}]: the function {name}() is running...")
}

/// Reusable decorator bound to a level. Attach it to as many targets as needed.
#[derive(Debug, Clone)]
pub struct Announcer<C = Stdout> {
    level: Level,
    console: C,
}

pub fn wrap_logging_parameterized(level: Level) -> Announcer {
    Announcer {
        level,
        console: Stdout,
    }
}

impl Default for Announcer {
    fn default() -> Self {
        wrap_logging_parameterized(Level::Info)
    }
}

impl<C> Announcer<C> {
    pub fn level(&self) -> Level {
        self.level
    }

    /// Sends announcements to `console` instead.
    pub fn to<D: Console>(self, console: D) -> Announcer<D> {
        Announcer {
            level: self.level,
            console,
        }
    }
}

impl<C: Console + Clone> Announcer<C> {
    pub fn attach<T: Invocable>(&self, target: T) -> Announced<T, C> {
        Announced {
            target,
            level: self.level,
            console: self.console.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Announced<T, C = Stdout> {
    target: T,
    level: Level,
    console: C,
}

impl<T, C> Invocable for Announced<T, C>
where
    T: Invocable,
    C: Console,
{
    type Args = T::Args;
    type Output = T::Output;

    fn identity(&self) -> &Identity {
        self.target.identity()
    }

    fn invoke(&self, args: T::Args) -> Result<T::Output> {
        self.console
            .write_line(&announcement(self.level, self.identity().name()));
        self.target.invoke(args)
    }
}

/// Function-form announcement for `#[decorate(announced(Level::Warning))]`.
pub fn announced<F, R>(level: Level, target: &Identity, f: F) -> R
where
    F: FnOnce() -> R,
{
    Stdout.write_line(&announcement(level, target.name()));
    f()
}
