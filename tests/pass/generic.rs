use callwrap::{Identity, decorate};
use std::cell::RefCell;
use std::fmt::Debug;

thread_local! {
    static DECORATED: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

fn named<F, R>(target: &Identity, f: F) -> R
where
    F: FnOnce() -> R,
{
    DECORATED.with(|names| names.borrow_mut().push(target.name().to_string()));
    f()
}

#[decorate(named)]
fn identity<T>(x: T) -> T {
    x
}

#[decorate(named)]
fn print_and_return<T: Debug>(x: T) -> T {
    println!("Value: {:?}", x);
    x
}

#[decorate(named)]
fn combine<T, U>(t: T, u: U) -> String
where
    T: Debug,
    U: Debug,
{
    format!("{:?}{:?}", t, u)
}

fn main() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity("hello"), "hello");

    print_and_return(123);
    print_and_return("test");

    let result = combine(42, " is the answer");
    assert_eq!(result, "42\" is the answer\"");

    DECORATED.with(|names| {
        assert_eq!(
            &*names.borrow(),
            &[
                "identity",
                "identity",
                "print_and_return",
                "print_and_return",
                "combine"
            ]
        );
    });
}
