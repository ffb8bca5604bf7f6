use callwrap::{Identity, decorate};

fn passthrough<F, R>(target: &Identity, f: F) -> R
where
    F: FnOnce() -> R,
{
    assert_eq!(target.name(), "normal_function");
    assert_eq!(target.module(), module_path!());
    assert_eq!(target.doc(), None);
    f()
}

#[decorate(passthrough)]
fn normal_function(x: i32) -> i32 {
    x + 1
}

fn main() {
    assert_eq!(normal_function(5), 6);
}
