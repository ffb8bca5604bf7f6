use callwrap::{Channel, ChannelProvider, Level, MemorySink, decorate, logged, logged_with};

#[decorate(logged(channel, Level::Debug))]
fn add(channel: &Channel, x: i32, y: i32) -> callwrap::Result<i32> {
    Ok(x + y)
}

#[decorate(logged_with(channel, Level::Error, "GO"))]
fn parse(channel: &Channel, input: &str) -> callwrap::Result<Option<i32>> {
    Ok(input.parse().ok())
}

fn main() {
    let sink = MemorySink::new();
    let channel = sink.channel("math").unwrap();

    assert_eq!(add(&channel, 1, 3).unwrap(), 4);
    assert_eq!(parse(&channel, "x").unwrap(), None);

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message, "add");
    assert_eq!(records[0].level, Level::Debug);
    assert_eq!(records[1].message, "GO");
    assert_eq!(records[1].channel, "math");
}
