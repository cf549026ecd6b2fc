//! ringq - Fixed-Capacity Byte Ring Queue
//!
//! Arsitektur:
//! - Caller-owned storage: queue meminjam `&mut [u8]`, tidak pernah alokasi
//! - Sentinel cursor: full/empty dibedakan tanpa counter tambahan
//! - Fixed atau variable record size, dipilih saat init
//! - Opsional: storage file-backed via mmap dengan snapshot cursor
//!
//! ```
//! use ringq::{QueueError, RingQueue};
//!
//! let mut buf = [0u8; 2];
//! let mut q = RingQueue::new(&mut buf, 1).unwrap();
//!
//! q.push(&[5]).unwrap();
//! q.push(&[6]).unwrap();
//! assert!(q.is_full());
//! assert!(matches!(q.push(&[7]), Err(QueueError::Overflow { .. })));
//!
//! let mut out = [0u8; 1];
//! q.pop(&mut out).unwrap();
//! assert_eq!(out, [5]);
//! ```

pub mod core;

pub use crate::core::{
    Cursors, InitError, MmapStorage, QueueConfig, QueueError, QueueState, RecordMode, RingQueue,
    EMPTY,
};
