//! Byte Ring Queue di atas storage milik caller
//!
//! Queue tidak memiliki memori sendiri, hanya cursor (offset) ke dalam slice
//! yang dipinjam dari caller. Tidak ada alokasi, tidak ada I/O, setiap operasi
//! O(ukuran record).
//!
//! Full/empty dibedakan dengan sentinel: `front == EMPTY` berarti kosong,
//! `front == rear` (dengan front offset sah) berarti penuh.

use std::fmt;

use tracing::{debug, trace};

use super::config::{QueueConfig, RecordMode};
use super::error::{InitError, QueueError};

/// Sentinel untuk cursor front saat queue kosong
pub const EMPTY: usize = usize::MAX;

/// Snapshot posisi cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursors {
    /// Offset byte pertama yang belum dibaca, atau `EMPTY`
    pub front: usize,
    /// Offset tempat write berikutnya dimulai
    pub rear: usize,
}

/// State okupansi queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    Empty,
    PartiallyFilled,
    Full,
}

/// Fixed-capacity FIFO untuk record byte.
///
/// Storage dipinjam secara eksklusif selama queue hidup. Queue tidak
/// menyediakan sinkronisasi internal: `push`/`pop` butuh `&mut self`.
pub struct RingQueue<'a> {
    storage: &'a mut [u8],
    capacity: usize,
    mode: RecordMode,
    front: usize,
    rear: usize,
}

impl fmt::Debug for RingQueue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity)
            .field("mode", &self.mode)
            .field("front", &self.front)
            .field("rear", &self.rear)
            .finish()
    }
}

impl<'a> RingQueue<'a> {
    /// Queue mode fixed dengan seluruh slice sebagai kapasitas.
    pub fn new(storage: &'a mut [u8], record_size: usize) -> Result<Self, InitError> {
        let capacity = storage.len();
        Self::init(storage, QueueConfig::fixed(capacity, record_size))
    }

    /// Inisialisasi queue kosong di atas `storage`.
    ///
    /// Hanya `config.capacity` bytes pertama yang dipakai. Isi storage tidak
    /// disentuh.
    pub fn init(storage: &'a mut [u8], config: QueueConfig) -> Result<Self, InitError> {
        let storage = Self::checked_storage(storage, &config)?;

        debug!(
            capacity = config.capacity,
            mode = ?config.mode,
            "ring queue initialised"
        );

        Ok(Self {
            storage,
            capacity: config.capacity,
            mode: config.mode,
            front: EMPTY,
            rear: 0,
        })
    }

    /// Pasang kembali queue ke storage yang sudah berisi data, memakai
    /// snapshot cursor dari [`RingQueue::cursors`].
    pub fn restore(
        storage: &'a mut [u8],
        config: QueueConfig,
        cursors: Cursors,
    ) -> Result<Self, InitError> {
        let storage = Self::checked_storage(storage, &config)?;
        config.check_cursors(cursors)?;
        let Cursors { front, rear } = cursors;

        debug!(
            capacity = config.capacity,
            front, rear, "ring queue restored"
        );

        Ok(Self {
            storage,
            capacity: config.capacity,
            mode: config.mode,
            front,
            rear,
        })
    }

    fn checked_storage(
        storage: &'a mut [u8],
        config: &QueueConfig,
    ) -> Result<&'a mut [u8], InitError> {
        config.validate()?;

        if config.capacity > storage.len() {
            return Err(InitError::InvalidCapacity {
                capacity: config.capacity,
                reason: "capacity exceeds storage length",
            });
        }

        Ok(&mut storage[..config.capacity])
    }

    /// Cek apakah queue kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.front == EMPTY
    }

    /// Cek apakah queue penuh
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        // rear < capacity < EMPTY, jadi tidak pernah true saat kosong
        self.rear == self.front
    }

    /// State okupansi saat ini
    pub fn state(&self) -> QueueState {
        if self.is_empty() {
            QueueState::Empty
        } else if self.is_full() {
            QueueState::Full
        } else {
            QueueState::PartiallyFilled
        }
    }

    /// Jumlah bytes yang tersimpan
    #[inline]
    pub fn len(&self) -> usize {
        if self.front == EMPTY {
            0
        } else if self.rear > self.front {
            self.rear - self.front
        } else {
            self.capacity - self.front + self.rear
        }
    }

    /// Ruang kosong dalam bytes
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity - self.len()
    }

    /// Kapasitas dalam bytes
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub const fn mode(&self) -> RecordMode {
        self.mode
    }

    /// Ukuran record, `None` untuk mode variable
    #[inline]
    pub const fn record_size(&self) -> Option<usize> {
        match self.mode {
            RecordMode::Fixed(size) => Some(size),
            RecordMode::Variable => None,
        }
    }

    /// Jumlah record lengkap yang tersimpan (mode fixed saja)
    pub fn record_count(&self) -> Option<usize> {
        self.record_size().map(|size| self.len() / size)
    }

    /// Snapshot cursor untuk [`RingQueue::restore`]
    #[inline]
    pub const fn cursors(&self) -> Cursors {
        Cursors {
            front: self.front,
            rear: self.rear,
        }
    }

    /// Kosongkan queue. Isi storage dibiarkan.
    pub fn clear(&mut self) {
        self.front = EMPTY;
        self.rear = 0;
    }

    /// Push satu record ke rear queue.
    ///
    /// All-or-nothing: ruang kosong dicek untuk seluruh record sebelum byte
    /// pertama ditulis. Kalau tidak muat, `Overflow` dan state tidak berubah
    /// sama sekali, termasuk cursor front saat queue kosong. Versi byte-per-byte
    /// dengan rollback bisa meninggalkan queue kosong dalam state non-empty;
    /// perilaku itu sengaja tidak ditiru.
    pub fn push(&mut self, record: &[u8]) -> Result<(), QueueError> {
        self.check_record_len(record.len())?;

        let available = self.available();
        if self.is_full() || record.len() > available {
            trace!(requested = record.len(), available, "push rejected");
            return Err(QueueError::Overflow {
                requested: record.len(),
                available,
            });
        }

        if record.is_empty() {
            return Ok(());
        }

        // Unstash: write pertama ke queue kosong mengubah sentinel jadi offset
        if self.front == EMPTY {
            self.front = self.rear;
        }

        self.write_at(self.rear, record);
        self.rear = self.advance(self.rear, record.len());

        Ok(())
    }

    /// Pop satu record dari front queue ke `out`.
    ///
    /// Kalau data tersimpan kurang dari `out.len()`, `Underflow` dan state
    /// tidak berubah. Isi `out` tidak ditentukan saat error.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<(), QueueError> {
        self.peek(out)?;

        if out.is_empty() {
            return Ok(());
        }

        self.front = self.advance(self.front, out.len());

        // Stash: front menyusul rear berarti queue kosong
        if self.front == self.rear {
            self.front = EMPTY;
        }

        Ok(())
    }

    /// Baca record berikutnya tanpa mengubah cursor.
    pub fn peek(&self, out: &mut [u8]) -> Result<(), QueueError> {
        self.check_record_len(out.len())?;

        let stored = self.len();
        if self.is_empty() || out.len() > stored {
            trace!(requested = out.len(), stored, "read rejected");
            return Err(QueueError::Underflow {
                requested: out.len(),
                stored,
            });
        }

        self.read_at(self.front, out);
        Ok(())
    }

    #[inline]
    fn check_record_len(&self, len: usize) -> Result<(), QueueError> {
        match self.mode {
            RecordMode::Fixed(size) if size != len => Err(QueueError::RecordSizeMismatch {
                expected: size,
                actual: len,
            }),
            _ => Ok(()),
        }
    }

    /// Maju `n` bytes dari `at` dengan wraparound. Syarat: `n <= capacity`.
    #[inline(always)]
    fn advance(&self, at: usize, n: usize) -> usize {
        let until_end = self.capacity - at;
        if n < until_end {
            at + n
        } else {
            n - until_end
        }
    }

    #[inline]
    fn write_at(&mut self, at: usize, src: &[u8]) {
        // Handle wraparound: maksimal dua segmen
        let first = (self.capacity - at).min(src.len());
        self.storage[at..at + first].copy_from_slice(&src[..first]);

        let rest = src.len() - first;
        if rest > 0 {
            self.storage[..rest].copy_from_slice(&src[first..]);
        }
    }

    #[inline]
    fn read_at(&self, at: usize, dst: &mut [u8]) {
        let first = (self.capacity - at).min(dst.len());
        dst[..first].copy_from_slice(&self.storage[at..at + first]);

        let rest = dst.len() - first;
        if rest > 0 {
            dst[first..].copy_from_slice(&self.storage[..rest]);
        }
    }
}
