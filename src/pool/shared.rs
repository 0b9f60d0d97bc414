//! Exclusive critical section for concurrent callers.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::pool::Pool;
use crate::ledger::LedgerPort;

/// A cloneable handle serializing all access to one [`Pool`].
///
/// Each pool is a single critical section: at most one in-flight
/// mutating operation at any time, with the lock held for the full
/// duration **including the ledger port calls** — the port is untrusted
/// and must not be able to re-enter the pool mid-operation. Concurrent
/// callers simply queue on the lock; there is no partial-state path for
/// them to observe.
///
/// Read-only pricing (`quote_exact_in`/`quote_exact_out`) also goes
/// through the lock when called via this handle; callers that want truly
/// concurrent quoting can use the free functions in
/// [`engine`](crate::engine) against a reserves snapshot.
///
/// # Examples
///
/// ```
/// use hydra_pair::config::PoolConfig;
/// use hydra_pair::domain::{AccountId, AssetId, AssetPair, FeeTier};
/// use hydra_pair::ledger::InMemoryLedger;
/// use hydra_pair::pool::{Pool, SharedPool};
///
/// let pair = AssetPair::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
/// ).expect("distinct assets");
/// let config = PoolConfig::new(
///     pair,
///     FeeTier::TIER_0_30_PERCENT,
///     AccountId::from_bytes([100u8; 32]),
///     AccountId::from_bytes([101u8; 32]),
///     None,
/// ).expect("valid config");
/// let pool = Pool::new(&config, InMemoryLedger::new()).expect("valid pool");
///
/// let shared = SharedPool::new(pool);
/// let handle = shared.clone();
/// assert_eq!(handle.lock().total_shares().get(), 0);
/// ```
#[derive(Debug)]
pub struct SharedPool<L> {
    inner: Arc<Mutex<Pool<L>>>,
}

impl<L> Clone for SharedPool<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: LedgerPort> SharedPool<L> {
    /// Wraps a pool in a shared exclusive lock.
    #[must_use]
    pub fn new(pool: Pool<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Acquires the pool's critical section, blocking until it is free.
    ///
    /// Hold the returned guard for the entire operation; dropping it
    /// releases the pool to the next caller.
    pub fn lock(&self) -> MutexGuard<'_, Pool<L>> {
        self.inner.lock()
    }
}
