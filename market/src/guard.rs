multiversx_sc::imports!();

use common_errors::ERROR_REENTRANCY_DETECTED;

use crate::storage;

/// Held for the whole body of a state-changing endpoint.
///
/// Acquiring sets the `execution_lock` flag and dropping clears it, so every exit path of a
/// successful call releases the lock. A failed call reverts the flag together with the rest of
/// its writes.
pub struct ExecutionLock<'a, C>
where
    C: storage::Storage,
{
    sc_ref: &'a C,
}

impl<'a, C> ExecutionLock<'a, C>
where
    C: storage::Storage,
{
    fn new(sc_ref: &'a C) -> Self {
        sc_ref.execution_lock().set(true);
        ExecutionLock { sc_ref }
    }
}

impl<C> Drop for ExecutionLock<'_, C>
where
    C: storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref.execution_lock().clear();
    }
}

#[multiversx_sc::module]
pub trait GuardModule: storage::Storage {
    /// Fails when the market is already executing further up the call stack.
    fn lock_execution(&self) -> ExecutionLock<Self> {
        require!(!self.execution_lock().get(), ERROR_REENTRANCY_DETECTED);

        ExecutionLock::new(self)
    }

    #[view(isExecuting)]
    fn is_executing(&self) -> bool {
        self.execution_lock().get()
    }
}
