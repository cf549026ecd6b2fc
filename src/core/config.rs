//! Konfigurasi queue: kapasitas dan mode ukuran record
//!
//! Dipilih sekali saat inisialisasi, tidak bisa diubah setelahnya.

use super::error::InitError;
use super::ring_queue::{Cursors, EMPTY};

/// Mode ukuran record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    /// Semua record berukuran sama (bytes), ditentukan saat init
    Fixed(usize),
    /// Ukuran record diambil dari panjang slice di setiap push/pop/peek.
    /// Record heterogen berbagi satu ring.
    Variable,
}

/// Konfigurasi RingQueue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Kapasitas dalam bytes
    pub capacity: usize,
    /// Mode ukuran record
    pub mode: RecordMode,
}

impl QueueConfig {
    /// Queue dengan record berukuran tetap
    pub const fn fixed(capacity: usize, record_size: usize) -> Self {
        Self {
            capacity,
            mode: RecordMode::Fixed(record_size),
        }
    }

    /// Queue dengan ukuran record per-call
    pub const fn variable(capacity: usize) -> Self {
        Self {
            capacity,
            mode: RecordMode::Variable,
        }
    }

    /// Ukuran record untuk mode fixed
    #[inline]
    pub const fn record_size(&self) -> Option<usize> {
        match self.mode {
            RecordMode::Fixed(size) => Some(size),
            RecordMode::Variable => None,
        }
    }

    /// Validasi konfigurasi tanpa melihat storage.
    ///
    /// Kapasitas harus positif, bukan nilai sentinel EMPTY, dan (mode fixed)
    /// kelipatan ukuran record.
    pub fn validate(&self) -> Result<(), InitError> {
        if self.mode == RecordMode::Fixed(0) {
            return Err(InitError::InvalidRecordSize);
        }

        if self.capacity == 0 {
            return Err(InitError::InvalidCapacity {
                capacity: self.capacity,
                reason: "capacity must be positive",
            });
        }

        // Sentinel EMPTY tidak boleh bertabrakan dengan posisi cursor yang sah
        if self.capacity == EMPTY {
            return Err(InitError::InvalidCapacity {
                capacity: self.capacity,
                reason: "capacity collides with the empty sentinel",
            });
        }

        if let RecordMode::Fixed(size) = self.mode {
            if self.capacity % size != 0 {
                return Err(InitError::InvalidCapacity {
                    capacity: self.capacity,
                    reason: "capacity is not a multiple of the record size",
                });
            }
        }

        Ok(())
    }

    /// Cek apakah snapshot cursor sah untuk konfigurasi ini.
    ///
    /// Cursor harus di dalam kapasitas, dan untuk mode fixed selaras dengan
    /// batas record.
    pub fn check_cursors(&self, cursors: Cursors) -> Result<(), InitError> {
        self.validate()?;

        let Cursors { front, rear } = cursors;
        let in_bounds = rear < self.capacity && (front == EMPTY || front < self.capacity);
        let aligned = match self.mode {
            RecordMode::Fixed(size) => rear % size == 0 && (front == EMPTY || front % size == 0),
            RecordMode::Variable => true,
        };

        if in_bounds && aligned {
            Ok(())
        } else {
            Err(InitError::InvalidCursors {
                front,
                rear,
                capacity: self.capacity,
            })
        }
    }
}
