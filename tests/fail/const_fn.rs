use callwrap::decorate;

#[decorate(callwrap::timed)]
const fn constant_fn(x: i32) -> i32 {
    x + 1
}

fn main() {}
