use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::lock_api::{self, GuardSend};

/// Busy-wait mutual exclusion for very short critical sections.
///
/// The facility only ever holds its lock long enough to push a string onto a
/// queue, where parking a thread would cost more than the work itself. Waiters
/// spin on a single flag with no backoff and no fairness, so a thread can
/// starve under sustained contention.
///
/// The lock is **not reentrant**: acquiring it twice from the same thread
/// spins forever.
///
/// # Examples
///
/// ```
/// # use spinlog::spinlock::RawSpinlock;
/// let lock = RawSpinlock::new();
/// lock.acquire();
/// assert!(!lock.try_acquire());
/// lock.release();
/// assert!(lock.try_acquire());
/// lock.release();
/// ```
pub struct RawSpinlock {
    locked: AtomicBool,
}

impl RawSpinlock {
    /// Creates an unlocked spinlock.
    pub const fn new() -> Self {
        Self { locked: AtomicBool::new(false) }
    }

    /// Spins until the flag moves from clear to set.
    #[inline]
    pub fn acquire(&self) {
        while self.locked.swap(true, Ordering::Acquire) {
            std::hint::spin_loop();
        }
    }

    /// Makes a single attempt to take the lock.
    ///
    /// Returns `true` if the caller now owns the lock.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        !self.locked.swap(true, Ordering::Acquire)
    }

    /// Clears the flag, publishing the critical section to the next owner.
    ///
    /// Must only be called by the current owner.
    #[inline]
    pub fn release(&self) {
        self.locked.store(false, Ordering::Release);
    }

    /// Returns whether some thread currently holds the lock.
    pub fn is_held(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

impl Default for RawSpinlock {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl lock_api::RawMutex for RawSpinlock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = RawSpinlock::new();

    type GuardMarker = GuardSend;

    fn lock(&self) {
        self.acquire();
    }

    fn try_lock(&self) -> bool {
        self.try_acquire()
    }

    unsafe fn unlock(&self) {
        self.release();
    }

    fn is_locked(&self) -> bool {
        self.is_held()
    }
}

/// A value guarded by a [`RawSpinlock`], released when the guard drops.
///
/// ```
/// # use spinlog::spinlock::Spinlock;
/// let counter = Spinlock::new(0);
/// *counter.lock() += 1;
/// assert_eq!(*counter.lock(), 1);
/// ```
pub type Spinlock<T> = lock_api::Mutex<RawSpinlock, T>;

/// RAII guard returned by [`Spinlock::lock`].
pub type SpinlockGuard<'a, T> = lock_api::MutexGuard<'a, RawSpinlock, T>;
