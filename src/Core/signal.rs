use crossbeam_utils::CachePadded;
use parking_lot::{Condvar, MutexGuard};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A condition variable paired with a count of the threads currently parked on it.
///
/// The counter is bumped while the caller still holds the associated mutex and
/// dropped again after the wait returns, so a non-zero reading means at least one
/// thread is parked (or about to recheck its predicate after a wakeup).
#[derive(Debug, Default)]
pub struct Signal {
    cond: Condvar,
    waiters: CachePadded<AtomicUsize>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks on this signal for as long as `condition` holds.
    ///
    /// The predicate is rechecked after every wakeup, spurious or not, and the
    /// mutex behind `guard` is released for the duration of each park.
    /// Returns the number of times the thread was parked.
    pub fn wait_while<T, F>(&self, guard: &mut MutexGuard<'_, T>, mut condition: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut parks = 0;
        while condition(&mut **guard) {
            self.waiters.fetch_add(1, Ordering::Release);
            self.cond.wait(guard);
            self.waiters.fetch_sub(1, Ordering::Release);
            parks += 1;
        }
        parks
    }

    /// Wakes at most one parked thread. Returns whether a thread was woken.
    #[inline]
    pub fn notify_one(&self) -> bool {
        self.cond.notify_one()
    }

    /// Number of threads currently parked on this signal.
    #[inline]
    pub fn waiters(&self) -> usize {
        self.waiters.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn wait_while_false_predicate_does_not_park() {
        let signal = Signal::new();
        let lock = Mutex::new(0u32);
        let mut guard = lock.lock();
        assert_eq!(signal.wait_while(&mut guard, |v| *v != 0), 0);
        assert_eq!(signal.waiters(), 0);
    }

    #[test]
    fn parked_thread_is_counted_and_released() {
        let shared = Arc::new((Mutex::new(false), Signal::new()));

        let waiter = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let (lock, signal) = &*shared;
                let mut ready = lock.lock();
                signal.wait_while(&mut ready, |ready| !*ready)
            })
        };

        let deadline = Instant::now() + Duration::from_secs(5);
        while shared.1.waiters() == 0 {
            assert!(Instant::now() < deadline, "waiter never parked");
            thread::yield_now();
        }

        {
            let (lock, signal) = &*shared;
            *lock.lock() = true;
            signal.notify_one();
        }

        let parks = waiter.join().unwrap();
        assert!(parks >= 1);
        assert_eq!(shared.1.waiters(), 0);
    }
}
