//! Push/pop nilai POD langsung, tanpa encode manual ke byte array
//!
//! Bytes disalin apa adanya (representasi memori native). Tidak ada
//! interpretasi atau konversi endianness.

use bytemuck::Pod;

use super::error::QueueError;
use super::ring_queue::RingQueue;

impl RingQueue<'_> {
    /// Push `size_of::<T>()` bytes dari `value`
    #[inline]
    pub fn push_pod<T: Pod>(&mut self, value: &T) -> Result<(), QueueError> {
        self.push(bytemuck::bytes_of(value))
    }

    /// Pop satu record sebagai `T`
    #[inline]
    pub fn pop_pod<T: Pod>(&mut self) -> Result<T, QueueError> {
        let mut value = T::zeroed();
        self.pop(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Peek satu record sebagai `T`
    #[inline]
    pub fn peek_pod<T: Pod>(&self) -> Result<T, QueueError> {
        let mut value = T::zeroed();
        self.peek(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueueConfig;
    use bytemuck::Zeroable;

    #[repr(C)]
    #[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
    struct Sample {
        id: u32,
        flags: u16,
        level: u8,
        kind: u8,
        timestamp: u64,
    }

    #[test]
    fn test_struct_record() {
        let mut buf = [0u8; 64];
        let mut q = RingQueue::new(&mut buf, std::mem::size_of::<Sample>()).unwrap();

        let sample = Sample {
            id: 42,
            flags: 0x0F0F,
            level: 3,
            kind: 200,
            timestamp: 1_234_567_890,
        };
        q.push_pod(&sample).unwrap();

        assert_eq!(q.peek_pod::<Sample>().unwrap(), sample);
        assert_eq!(q.pop_pod::<Sample>().unwrap(), sample);
        assert!(q.is_empty());
    }

    #[test]
    fn test_heterogeneous_values() {
        let mut buf = [0u8; 15];
        let mut q = RingQueue::init(&mut buf, QueueConfig::variable(15)).unwrap();

        q.push_pod(&12345u64).unwrap();
        q.push_pod(&1234u32).unwrap();
        q.push_pod(&123u16).unwrap();
        q.push_pod(&12u8).unwrap();
        assert!(q.is_full());

        assert_eq!(q.pop_pod::<u64>().unwrap(), 12345);
        assert_eq!(q.pop_pod::<u32>().unwrap(), 1234);
        assert_eq!(q.pop_pod::<u16>().unwrap(), 123);
        assert_eq!(q.pop_pod::<u8>().unwrap(), 12);
        assert!(q.is_empty());
    }

    #[test]
    fn test_wrong_type_size_in_fixed_mode() {
        let mut buf = [0u8; 8];
        let mut q = RingQueue::new(&mut buf, 4).unwrap();

        assert!(matches!(
            q.push_pod(&1u16),
            Err(QueueError::RecordSizeMismatch {
                expected: 4,
                actual: 2
            })
        ));
        q.push_pod(&7u32).unwrap();
        assert!(q.pop_pod::<u64>().is_err());
        assert_eq!(q.pop_pod::<u32>().unwrap(), 7);
    }
}
