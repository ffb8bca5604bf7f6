use callwrap::decorate;

#[decorate()]
fn undecorated(x: i32) -> i32 {
    x + 1
}

fn main() {}
