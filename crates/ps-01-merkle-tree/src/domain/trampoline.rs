//! # Trampoline
//!
//! Stack-safe deferred computation.
//!
//! A computation is described as a [`Trampoline`] value instead of a chain
//! of native calls. [`Trampoline::run`] then evaluates it in a loop, keeping
//! pending continuations in a heap-allocated stack, so evaluation depth is
//! bounded by memory rather than by the thread's call stack.
//!
//! ## Variants
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Return` | Finished computation holding its value |
//! | `Suspend` | Thunk producing the next step when forced |
//! | `FlatMap` | Run the inner step, then feed its value to a continuation |

/// Deferred step producing the next trampoline.
pub type Thunk<'a, T> = Box<dyn FnOnce() -> Trampoline<'a, T> + 'a>;

/// Continuation consuming a finished value.
pub type Continuation<'a, T> = Box<dyn FnOnce(T) -> Trampoline<'a, T> + 'a>;

/// A stack-safe computation producing a `T`.
pub enum Trampoline<'a, T> {
    /// Completed computation.
    Return(T),
    /// Computation to resume later.
    Suspend(Thunk<'a, T>),
    /// Sequential composition.
    FlatMap(Box<Trampoline<'a, T>>, Continuation<'a, T>),
}

impl<'a, T: 'a> Trampoline<'a, T> {
    /// A finished computation.
    pub fn done(value: T) -> Self {
        Self::Return(value)
    }

    /// Defer `thunk` until the trampoline is run.
    pub fn suspend(thunk: impl FnOnce() -> Self + 'a) -> Self {
        Self::Suspend(Box::new(thunk))
    }

    /// Continue with `f` once this computation has produced its value.
    pub fn flat_map(self, f: impl FnOnce(T) -> Self + 'a) -> Self {
        Self::FlatMap(Box::new(self), Box::new(f))
    }

    /// Transform the produced value.
    pub fn map(self, f: impl FnOnce(T) -> T + 'a) -> Self {
        self.flat_map(move |value| Self::Return(f(value)))
    }

    /// Evaluate to completion without growing the native stack.
    pub fn run(self) -> T {
        let mut current = self;
        let mut continuations: Vec<Continuation<'a, T>> = Vec::new();

        loop {
            current = match current {
                Self::Return(value) => match continuations.pop() {
                    Some(continuation) => continuation(value),
                    None => return value,
                },
                Self::Suspend(thunk) => thunk(),
                Self::FlatMap(inner, continuation) => {
                    continuations.push(continuation);
                    *inner
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_down(n: u64) -> Trampoline<'static, u64> {
        if n == 0 {
            Trampoline::done(0)
        } else {
            Trampoline::suspend(move || count_down(n - 1)).map(|v| v + 1)
        }
    }

    fn sum_range(lo: u64, hi: u64) -> Trampoline<'static, u64> {
        Trampoline::suspend(move || {
            if hi - lo <= 1 {
                Trampoline::done(if hi > lo { lo } else { 0 })
            } else {
                let mid = lo + (hi - lo) / 2;
                sum_range(lo, mid).flat_map(move |left| sum_range(mid, hi).map(move |right| left + right))
            }
        })
    }

    #[test]
    fn test_return_runs_immediately() {
        assert_eq!(Trampoline::done(7).run(), 7);
    }

    #[test]
    fn test_suspend_is_lazy_until_run() {
        use std::cell::Cell;
        let forced = Cell::new(false);
        let t = Trampoline::suspend(|| {
            forced.set(true);
            Trampoline::done(1)
        });
        assert!(!forced.get());
        assert_eq!(t.run(), 1);
        assert!(forced.get());
    }

    #[test]
    fn test_flat_map_sequences_in_order() {
        let t = Trampoline::done(vec![1])
            .flat_map(|mut v| {
                v.push(2);
                Trampoline::done(v)
            })
            .map(|mut v| {
                v.push(3);
                v
            });
        assert_eq!(t.run(), vec![1, 2, 3]);
    }

    #[test]
    fn test_deep_linear_chain_is_stack_safe() {
        assert_eq!(count_down(1_000_000).run(), 1_000_000);
    }

    #[test]
    fn test_binary_recursion() {
        // Sum of 0..n
        let n = 100_000u64;
        assert_eq!(sum_range(0, n).run(), n * (n - 1) / 2);
    }
}
