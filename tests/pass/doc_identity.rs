use callwrap::{Identity, decorate};
use std::cell::RefCell;

thread_local! {
    static SEEN: RefCell<Option<Identity>> = const { RefCell::new(None) };
}

fn capture<F, R>(target: &Identity, f: F) -> R
where
    F: FnOnce() -> R,
{
    SEEN.with(|seen| *seen.borrow_mut() = Some(target.clone()));
    f()
}

/// Squares a number.
///
/// Works for any i64.
#[decorate(capture)]
fn square(x: i64) -> i64 {
    x * x
}

fn main() {
    assert_eq!(square(9), 81);

    SEEN.with(|seen| {
        let seen = seen.borrow();
        let identity = seen.as_ref().expect("decorator ran");
        assert_eq!(identity.name(), "square");
        assert_eq!(identity.module(), module_path!());
        assert_eq!(identity.doc(), Some("Squares a number.\n\nWorks for any i64."));
    });
}
