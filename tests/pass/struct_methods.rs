use callwrap::{Identity, decorate};
use std::cell::RefCell;

thread_local! {
    static METHOD_CALLS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

fn trace_method<F, R>(target: &Identity, f: F) -> R
where
    F: FnOnce() -> R,
{
    METHOD_CALLS.with(|calls| calls.borrow_mut().push(target.name().to_string()));
    let result = f();
    METHOD_CALLS.with(|calls| calls.borrow_mut().push("end".to_string()));
    result
}

struct TestStruct {
    value: i32,
}

impl TestStruct {
    fn new(value: i32) -> Self {
        Self { value }
    }

    #[decorate(trace_method)]
    fn get_value(&self) -> i32 {
        self.value
    }

    #[decorate(trace_method)]
    fn set_value(&mut self, new_value: i32) {
        self.value = new_value;
    }

    #[decorate(trace_method)]
    fn compute<T>(&self, factor: T) -> T
    where
        T: std::ops::Mul<Output = T> + From<i32>,
    {
        T::from(self.value) * factor
    }
}

fn main() {
    let mut test = TestStruct::new(42);

    assert_eq!(test.get_value(), 42);
    test.set_value(10);
    assert_eq!(test.compute(5), 50);

    METHOD_CALLS.with(|calls| {
        assert_eq!(
            &*calls.borrow(),
            &["get_value", "end", "set_value", "end", "compute", "end"]
        );
    });
}
