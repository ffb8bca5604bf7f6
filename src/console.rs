use std::sync::{Arc, Mutex, PoisonError};

/// Line-oriented output for timing reports and announcements.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Console for Buffer {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

impl<C: Console + ?Sized> Console for &C {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

impl<C: Console + ?Sized> Console for Arc<C> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}
