// Timing decorators
use std::fmt;
use std::time::{Duration, Instant};

use crate::console::{Console, Stdout};
use crate::error::Result;
use crate::identity::Identity;
use crate::invocable::{Invocable, Wrapped};

/// One duration report: `function <name> cost time <secs> seconds`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    pub name: String,
    pub elapsed: Duration,
}

impl TimingReport {
    pub fn new(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            elapsed,
        }
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "function {} cost time {} seconds",
            self.name,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Wraps `target` so every successful call prints its duration to stdout.
pub fn wrap_timing<T>(target: T) -> Wrapped<impl Fn(T::Args) -> Result<T::Output>, T::Args>
where
    T: Invocable,
{
    wrap_timing_to(target, Stdout)
}

/// Like [`wrap_timing`], reporting to `console`.
///
/// A call that fails or panics inside the target writes no report.
pub fn wrap_timing_to<T, C>(
    target: T,
    console: C,
) -> Wrapped<impl Fn(T::Args) -> Result<T::Output>, T::Args>
where
    T: Invocable,
    C: Console,
{
    let identity = target.identity().clone();
    Wrapped::new(identity, move |args: T::Args| {
        let start = Instant::now();
        let output = target.invoke(args)?;
        let report = TimingReport::new(target.identity().name(), start.elapsed());
        console.write_line(&report.to_string());
        Ok(output)
    })
}

/// Timing wrapper kept as a named object holding its target.
///
/// Reports exactly like [`wrap_timing`]; useful where the wrapper type has
/// to be spelled out, e.g. as a struct field.
#[derive(Debug, Clone)]
pub struct Timer<T, C = Stdout> {
    target: T,
    console: C,
}

pub fn wrap_timing_stateful<T: Invocable>(target: T) -> Timer<T> {
    Timer {
        target,
        console: Stdout,
    }
}

impl<T, C> Timer<T, C> {
    pub fn with_console(target: T, console: C) -> Self {
        Self { target, console }
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T, C> Invocable for Timer<T, C>
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
        let start = Instant::now();
        let output = self.target.invoke(args)?;
        let report = TimingReport::new(self.identity().name(), start.elapsed());
        self.console.write_line(&report.to_string());
        Ok(output)
    }
}

/// Function-form timing decorator for `#[decorate(timed)]`.
pub fn timed<F, R>(target: &Identity, f: F) -> R
where
    F: FnOnce() -> R,
{
    timed_to(&Stdout, target, f)
}

/// Function-form timing decorator reporting to `console`, for
/// `#[decorate(timed_to(&console))]`.
pub fn timed_to<C, F, R>(console: &C, target: &Identity, f: F) -> R
where
    C: Console + ?Sized,
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    console.write_line(&TimingReport::new(target.name(), start.elapsed()).to_string());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Buffer;
    use crate::target;

    fn add(x: i32, y: i32) -> i32 {
        x + y
    }

    #[test]
    fn report_format() {
        let report = TimingReport::new("add", Duration::from_millis(1500));
        assert_eq!(report.to_string(), "function add cost time 1.5 seconds");
    }

    #[test]
    fn closure_and_stateful_forms_report_alike() {
        let first = Buffer::new();
        let second = Buffer::new();

        let closure = wrap_timing_to(target!(add), first.clone());
        let stateful = Timer::with_console(target!(add), second.clone());

        assert_eq!(closure.invoke((1, 3)).unwrap(), 4);
        assert_eq!(stateful.invoke((1, 3)).unwrap(), 4);

        for buffer in [first, second] {
            let lines = buffer.lines();
            assert_eq!(lines.len(), 1);
            assert!(lines[0].starts_with("function add cost time "));
        }
    }

    #[test]
    fn timed_reports_identity_name() {
        const ID: Identity = Identity::from_static("work", "tests", None);
        let buffer = Buffer::new();
        let value = timed_to(&buffer, &ID, || 7);
        assert_eq!(value, 7);
        assert!(buffer.lines()[0].starts_with("function work cost time "));
    }
}
