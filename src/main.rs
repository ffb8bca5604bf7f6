use std::thread;
use std::time::Duration;

use callwrap::{
    Channel, ChannelProvider, Invocable, Level, LogOptions, LogSettings, LoggingSystem,
    announced, decorate, logged, target, timed, wrap_logging, wrap_logging_parameterized,
    wrap_timing_stateful,
};

/// Adds two numbers, slowly.
#[decorate(timed)]
fn add(x: i32, y: i32) -> i32 {
    thread::sleep(Duration::from_millis(200));
    x + y
}

/// Divides, logging the call first.
#[decorate(announced(Level::Warning), logged(channel, Level::Debug))]
fn checked_div(channel: &Channel, x: i32, y: i32) -> callwrap::Result<Option<i32>> {
    Ok(x.checked_div(y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging = LoggingSystem::new();
    let file = std::env::temp_dir().join("callwrap_demo.log");
    logging.configure(LogSettings::new(file.clone()).level(Level::Debug))?;

    println!("{}", add(1, 3));

    let go = wrap_logging(&logging, LogOptions::new(Level::Debug).message("GO"))?;
    let logged_add = go.attach(target!(add))?;
    println!("{}", logged_add.invoke((1, 3))?);

    let stacked =
        wrap_logging_parameterized(Level::Warning).attach(wrap_timing_stateful(target!(add)));
    println!("{}", stacked.invoke((2, 2))?);

    let channel = logging.channel("demo")?;
    println!("{:?}", checked_div(&channel, 9, 3)?);
    println!("{:?}", checked_div(&channel, 9, 0)?);

    logging.shutdown()?;
    println!("log written to {}", file.display());
    Ok(())
}
