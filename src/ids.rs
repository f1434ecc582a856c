//! Identity service for pieces, requests and transactions.
//!
//! Ids come from an injected `IdGenerator` rather than a global counter so
//! tests can pin them. Every generator must hand out strictly increasing,
//! never-repeating values for the lifetime of the process.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> u64;
}

/// Plain counter. Starts at 1 unless told otherwise.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Counter that can also be shared by reference across threads.
#[derive(Debug)]
pub struct AtomicIds {
    next: AtomicU64,
}

impl Default for AtomicIds {
    fn default() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl AtomicIds {
    pub fn take(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl IdGenerator for AtomicIds {
    fn next_id(&mut self) -> u64 {
        self.take()
    }
}

/// One counter handed to several owners, e.g. every arbiter in a process.
impl IdGenerator for Arc<AtomicIds> {
    fn next_id(&mut self) -> u64 {
        self.take()
    }
}

macro_rules! id_newtype {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u64);

        impl $name {
            pub fn next(ids: &mut dyn IdGenerator) -> Self {
                Self(ids.next_id())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

id_newtype!(PieceId, "piece");
id_newtype!(RequestId, "request");
id_newtype!(TransactionId, "txn");

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn sequential_ids_are_monotonic() {
        let mut ids = SequentialIds::starting_at(40);
        let a = PieceId::next(&mut ids);
        let b = RequestId::next(&mut ids);
        let c = TransactionId::next(&mut ids);
        assert_eq!((a.0, b.0, c.0), (40, 41, 42));
        assert_eq!(a.to_string(), "piece#40");
    }

    #[test]
    fn atomic_ids_never_collide_across_threads() {
        let ids = Arc::new(AtomicIds::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.take()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().expect("worker should finish"))
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 1000);
    }
}
