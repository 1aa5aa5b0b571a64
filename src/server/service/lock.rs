//! Per-car booking locks.
//!
//! Booking creation reads a car's bookings, decides availability and inserts the new row.
//! Holding the car's lock across those three steps keeps two requests for the same car
//! from both passing the check. Requests for different cars never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per car ID.
///
/// Cheap to clone; clones share the registry. Idle entries are pruned on the next
/// acquisition so the map only holds cars with an outstanding guard.
#[derive(Clone, Default)]
pub struct CarLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl CarLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `car_id`.
    ///
    /// The returned guard releases the car when dropped.
    pub async fn acquire(&self, car_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(car_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
