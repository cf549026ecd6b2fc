//! Core module: Byte Ring Queue di atas storage milik caller
//!
//! Prinsip desain:
//! - No-Allocation: Storage disediakan caller, queue hanya memegang cursor
//! - All-or-Nothing: Push/pop gagal tanpa mengubah state
//! - Index-based: Cursor berupa offset integer ke slice datar

mod config;
mod error;
mod mmap_storage;
mod ring_queue;
mod typed;

pub use config::{QueueConfig, RecordMode};
pub use error::{InitError, QueueError};
pub use mmap_storage::{MmapStorage, HEADER_SIZE};
pub use ring_queue::{Cursors, QueueState, RingQueue, EMPTY};
