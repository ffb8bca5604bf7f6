use std::fmt;
use std::marker::PhantomData;

use crate::error::Result;
use crate::identity::Identity;

/// A callable with a stable identity.
///
/// Plain targets and every wrapper implement this one trait, so wrappers can
/// be stacked in any order. `invoke` only fails for errors raised by the
/// decoration layer; whatever the target itself returns, `Err` values
/// included, comes back inside `Output` untouched.
pub trait Invocable {
    /// Arguments as a tuple, `()` for none.
    type Args;
    type Output;

    fn identity(&self) -> &Identity;

    fn invoke(&self, args: Self::Args) -> Result<Self::Output>;
}

/// Calls a function with its arguments packed into a tuple.
pub trait TupleFn<Args> {
    type Output;

    fn call_tuple(&self, args: Args) -> Self::Output;
}

macro_rules! impl_tuple_fn {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg,)*> TupleFn<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call_tuple(&self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_tuple_fn!();
impl_tuple_fn!(A);
impl_tuple_fn!(A, B);
impl_tuple_fn!(A, B, C);
impl_tuple_fn!(A, B, C, D);
impl_tuple_fn!(A, B, C, D, E);
impl_tuple_fn!(A, B, C, D, E, G);

/// An undecorated function paired with its identity.
pub struct Target<F, Args> {
    identity: Identity,
    func: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> Target<F, Args> {
    pub fn new(identity: Identity, func: F) -> Self {
        Self {
            identity,
            func,
            _args: PhantomData,
        }
    }
}

impl<F, Args> Invocable for Target<F, Args>
where
    F: TupleFn<Args>,
{
    type Args = Args;
    type Output = F::Output;

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn invoke(&self, args: Args) -> Result<Self::Output> {
        Ok(self.func.call_tuple(args))
    }
}

impl<F, Args> fmt::Debug for Target<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target").field("identity", &self.identity).finish()
    }
}

/// A wrapper built from a closure over its target.
///
/// The identity is copied from the target when the wrapper is built; the
/// closure receives the argument tuple and forwards it.
pub struct Wrapped<F, Args> {
    identity: Identity,
    call: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> Wrapped<F, Args> {
    pub fn new(identity: Identity, call: F) -> Self {
        Self {
            identity,
            call,
            _args: PhantomData,
        }
    }
}

impl<F, Args, R> Invocable for Wrapped<F, Args>
where
    F: Fn(Args) -> Result<R>,
{
    type Args = Args;
    type Output = R;

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn invoke(&self, args: Args) -> Result<R> {
        (self.call)(args)
    }
}

impl<F, Args> fmt::Debug for Wrapped<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped").field("identity", &self.identity).finish()
    }
}

/// Builds a [`Target`] named after a function, declared in the calling module.
///
/// `target!(add)` uses the function's own name; `target!("name", expr)`
/// accepts any function or closure under an explicit name.
#[macro_export]
macro_rules! target {
    ($func:ident) => {
        $crate::Target::new(
            $crate::Identity::new(::core::stringify!($func), ::core::module_path!()),
            $func,
        )
    };
    ($name:expr, $func:expr) => {
        $crate::Target::new(
            $crate::Identity::new($name, ::core::module_path!()),
            $func,
        )
    };
}
