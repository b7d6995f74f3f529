// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scope-bound deferred execution.

/// Runs a closure exactly once when dropped.
///
/// The guard is owned by the stack frame that declares it and cannot be
/// cloned, so the action fires exactly once, when that frame's scope ends.
/// The usual way to get one is the [`defer!`](crate::defer) macro.
#[must_use = "a guard that is not bound to a variable runs its action immediately"]
pub struct ScopeGuard<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    /// Wraps `action` to run when the guard goes out of scope.
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Schedules a block to run when the enclosing scope exits.
///
/// The block runs no matter how control leaves the scope, including early
/// `return` and unwind. Blocks declared later in the same scope run first,
/// following drop order. Captured state is borrowed by the closure, so the
/// borrow checker enforces that it outlives the deferred execution point.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use tarn_core::defer;
///
/// let released = Cell::new(false);
/// {
///     defer!(released.set(true));
///     assert!(!released.get());
/// }
/// assert!(released.get());
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::utils::defer::ScopeGuard::new(|| {
            $($body)*
        });
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_runs_exactly_once_on_scope_exit() {
        let count = Cell::new(0);
        {
            defer!(count.set(count.get() + 1));
            assert_eq!(count.get(), 0);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_runs_after_remaining_statements() {
        let order = RefCell::new(Vec::new());
        {
            defer!(order.borrow_mut().push("deferred"));
            order.borrow_mut().push("body");
        }
        assert_eq!(*order.borrow(), ["body", "deferred"]);
    }

    #[test]
    fn test_multiple_guards_run_in_reverse_order() {
        let order = RefCell::new(Vec::new());
        {
            defer!(order.borrow_mut().push(1));
            defer!(order.borrow_mut().push(2));
            defer!(order.borrow_mut().push(3));
        }
        assert_eq!(*order.borrow(), [3, 2, 1]);
    }

    fn with_early_return(take_shortcut: bool, ran: &Cell<bool>) -> &'static str {
        defer!(ran.set(true));
        if take_shortcut {
            return "shortcut";
        }
        "full path"
    }

    #[test]
    fn test_runs_on_early_return() {
        let ran = Cell::new(false);
        assert_eq!(with_early_return(true, &ran), "shortcut");
        assert!(ran.get());

        let ran = Cell::new(false);
        assert_eq!(with_early_return(false, &ran), "full path");
        assert!(ran.get());
    }

    #[test]
    fn test_runs_during_unwind() {
        let ran = Cell::new(false);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            defer!(ran.set(true));
            panic!("unwind");
        }));
        assert!(result.is_err());
        assert!(ran.get());
    }

    #[test]
    fn test_guard_runs_action_directly() {
        let ran = Cell::new(false);
        {
            let _guard = ScopeGuard::new(|| ran.set(true));
            assert!(!ran.get());
        }
        assert!(ran.get());
    }
}
