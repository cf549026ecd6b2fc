//! Memory-Mapped File Storage sebagai backing RingQueue
//!
//! File di-mmap langsung ke virtual memory:
//! - Queue membaca/menulis region data tanpa copy tambahan
//! - Header menyimpan snapshot cursor, queue bisa dipasang kembali setelah restart
//! - Kernel-managed paging: OS menangani flush ke disk

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use bytemuck::{Pod, Zeroable};
use memmap2::{MmapMut, MmapOptions};
use tracing::{debug, warn};

use super::config::QueueConfig;
use super::error::InitError;
use super::ring_queue::{Cursors, RingQueue, EMPTY};

/// Header di awal file - 64 bytes, tanpa padding
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct StorageHeader {
    magic: u64,         // Magic number untuk validasi
    version: u32,       // Versi format
    flags: u32,         // Bit 0: cursor tersimpan
    capacity: u64,      // Kapasitas region data dalam bytes
    front: u64,         // Cursor baca, u64::MAX = EMPTY
    rear: u64,          // Cursor tulis
    _reserved: [u64; 3],
}

const MAGIC: u64 = 0x5249_4E47_515F_5631; // "RINGQ_V1" in hex
const VERSION: u32 = 1;
const FLAG_CURSORS: u32 = 1;

/// Ukuran header dalam bytes, region data dimulai setelahnya
pub const HEADER_SIZE: usize = std::mem::size_of::<StorageHeader>();

/// Storage file-backed untuk RingQueue
pub struct MmapStorage {
    mmap: MmapMut,
    capacity: usize,
}

impl MmapStorage {
    /// Membuat atau membuka mmap storage
    ///
    /// # Arguments
    /// * `path` - Path ke file storage
    /// * `capacity` - Kapasitas region data dalam bytes
    ///
    /// Header dengan magic/versi/kapasitas berbeda diinisialisasi ulang dan
    /// snapshot cursor lama dibuang.
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> io::Result<Self> {
        if capacity == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "capacity must be positive",
            ));
        }

        let total_size = HEADER_SIZE + capacity;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.as_ref())?;

        file.set_len(total_size as u64)?;

        // SAFETY: File dibuka read/write dan tidak di-truncate selama mapping hidup
        let mmap = unsafe { MmapOptions::new().len(total_size).map_mut(&file)? };

        let mut storage = Self { mmap, capacity };
        let header = *storage.header()?;

        if header.magic != MAGIC || header.version != VERSION || header.capacity != capacity as u64
        {
            if header.magic == MAGIC {
                warn!(
                    path = %path.as_ref().display(),
                    stored_capacity = header.capacity,
                    capacity,
                    "storage header mismatch, reinitialising"
                );
            } else {
                debug!(path = %path.as_ref().display(), capacity, "new storage file");
            }

            *storage.header_mut()? = StorageHeader {
                magic: MAGIC,
                version: VERSION,
                capacity: capacity as u64,
                ..StorageHeader::zeroed()
            };
        }

        Ok(storage)
    }

    /// Kapasitas region data
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Region data, dipakai sebagai storage RingQueue
    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.mmap[HEADER_SIZE..]
    }

    /// Snapshot cursor terakhir yang disimpan, jika ada
    pub fn load_cursors(&self) -> Option<Cursors> {
        let header = self.header().ok()?;
        if header.flags & FLAG_CURSORS == 0 {
            return None;
        }

        let front = if header.front == u64::MAX {
            EMPTY
        } else {
            usize::try_from(header.front).ok()?
        };
        let rear = usize::try_from(header.rear).ok()?;

        Some(Cursors { front, rear })
    }

    /// Simpan snapshot cursor ke header (belum di-flush)
    pub fn store_cursors(&mut self, cursors: Cursors) -> io::Result<()> {
        let header = self.header_mut()?;
        header.front = if cursors.front == EMPTY {
            u64::MAX
        } else {
            cursors.front as u64
        };
        header.rear = cursors.rear as u64;
        header.flags |= FLAG_CURSORS;
        Ok(())
    }

    /// Flush perubahan data dan header ke disk
    pub fn flush(&self) -> io::Result<()> {
        self.mmap.flush()
    }

    /// Pasang RingQueue di region data.
    ///
    /// Memakai snapshot cursor tersimpan jika valid untuk `config`, selain itu
    /// mulai dengan queue kosong.
    pub fn attach(&mut self, config: QueueConfig) -> Result<RingQueue<'_>, InitError> {
        let saved = self.load_cursors();
        let data = &mut self.mmap[HEADER_SIZE..];

        match saved {
            Some(cursors) => match config.check_cursors(cursors) {
                Ok(()) => RingQueue::restore(data, config, cursors),
                Err(e) => {
                    warn!(?cursors, error = %e, "stored cursors rejected, starting empty");
                    RingQueue::init(data, config)
                }
            },
            None => RingQueue::init(data, config),
        }
    }

    fn header(&self) -> io::Result<&StorageHeader> {
        bytemuck::try_from_bytes(&self.mmap[..HEADER_SIZE])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    fn header_mut(&mut self) -> io::Result<&mut StorageHeader> {
        bytemuck::try_from_bytes_mut(&mut self.mmap[..HEADER_SIZE])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }
}
