//! Error types untuk RingQueue
//!
//! Semua error dikembalikan sebagai `Result`, tidak pernah panic.
//! Queue tetap bisa dipakai setelah error apapun.

use thiserror::Error;

/// Error saat inisialisasi atau restore queue.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// Kapasitas tidak valid untuk storage/mode yang diberikan.
    #[error("Invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        /// Kapasitas yang diminta
        capacity: usize,
        /// Alasan penolakan
        reason: &'static str,
    },

    /// Ukuran record fixed bernilai nol.
    #[error("Record size must be greater than zero")]
    InvalidRecordSize,

    /// Snapshot cursor tidak cocok dengan konfigurasi queue.
    #[error("Invalid cursors (front {front}, rear {rear}) for capacity {capacity}")]
    InvalidCursors {
        /// Cursor baca
        front: usize,
        /// Cursor tulis
        rear: usize,
        /// Kapasitas queue
        capacity: usize,
    },
}

/// Error saat push/pop/peek.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Record tidak muat di ruang kosong. State queue tidak berubah.
    #[error("Queue overflow: {requested} bytes requested, {available} available")]
    Overflow {
        /// Panjang record
        requested: usize,
        /// Ruang kosong saat ini
        available: usize,
    },

    /// Data tersimpan kurang dari satu record penuh. State queue tidak berubah.
    #[error("Queue underflow: {requested} bytes requested, {stored} stored")]
    Underflow {
        /// Panjang record
        requested: usize,
        /// Bytes yang tersimpan saat ini
        stored: usize,
    },

    /// Panjang slice tidak sama dengan ukuran record mode fixed.
    #[error("Record size mismatch: expected {expected} bytes, got {actual}")]
    RecordSizeMismatch {
        /// Ukuran record queue
        expected: usize,
        /// Panjang slice dari caller
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QueueError::Overflow {
            requested: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Queue overflow: 2 bytes requested, 1 available"
        );

        let err = InitError::InvalidCapacity {
            capacity: 6,
            reason: "capacity is not a multiple of the record size",
        };
        assert_eq!(
            err.to_string(),
            "Invalid capacity 6: capacity is not a multiple of the record size"
        );
    }
}
