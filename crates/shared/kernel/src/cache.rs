use parking_lot::Mutex;

/// Single value behind a lock.
///
/// Every operation takes the lock for its whole duration, so reads and mutations
/// never interleave. Not reentrant: calling back into the same `Guarded` from a
/// closure passed to [`Guarded::mutate`] or [`Guarded::with`] deadlocks.
#[derive(Debug, Default)]
pub struct Guarded<V> {
    value: Mutex<V>,
}

impl<V> Guarded<V> {
    pub const fn new(value: V) -> Self {
        Self { value: Mutex::new(value) }
    }

    /// Snapshot of the current value.
    pub fn read(&self) -> V
    where
        V: Clone,
    {
        self.value.lock().clone()
    }

    /// Changes the value in place.
    pub fn mutate(&self, f: impl FnOnce(&mut V)) {
        f(&mut self.value.lock());
    }

    /// Runs `f` against the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.value.lock())
    }

    /// Swaps in `value` and returns the previous one.
    pub fn replace(&self, value: V) -> V {
        std::mem::replace(&mut *self.value.lock(), value)
    }

    pub fn into_inner(self) -> V {
        self.value.into_inner()
    }
}
