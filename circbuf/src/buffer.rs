use crate::general::{self, BufferError};
use log::{debug, trace};

/// Element is implemented for every type that can be stored in a RingBuffer: it must be
/// copyable, comparable, have a zero value (its Default) and be convertible to f64 for the mean.
pub trait Element: Copy + PartialOrd + Default + Into<f64> {}

impl<T: Copy + PartialOrd + Default + Into<f64>> Element for T {}

/// RingBuffer provides a buffer with a user-defined capacity. As soon as the capacity is reached,
/// the buffer overwrites old values when new values are pushed to it.
///
/// Two index spaces exist. A time index counts the valid elements from the oldest (0) to the
/// newest (len - 1). A storage index is the position in the underlying store. The valid
/// elements always occupy the storage slots 0..len, therefore the statistics operate on
/// storage indices and `time_to_storage_idx` / `storage_to_time_idx` convert between both.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    vals: Vec<T>,
    len: usize,
    head: usize,
}

/// Integer instantiation of the buffer.
pub type IntRingBuffer = RingBuffer<i32>;

/// Floating-point instantiation of the buffer.
pub type FloatRingBuffer = RingBuffer<f32>;

impl<T: Element> RingBuffer<T> {
    /// new creates an empty buffer whose store holds capacity zero-valued slots.
    pub fn new(capacity: usize) -> Result<RingBuffer<T>, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidArgument { capacity });
        }

        Ok(RingBuffer {
            vals: vec![T::default(); capacity],
            len: 0,
            head: 0,
        })
    }

    // GETTERS -------------------------------------------------------------------------------------
    pub fn capacity(&self) -> usize {
        self.vals.len()
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }
    /// head returns the storage index the next pushed value is written to.
    pub fn head(&self) -> usize {
        self.head
    }
    /// as_slice returns the valid elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.vals[..self.len]
    }

    /// oldest_idx returns the storage index of the oldest valid element.
    fn oldest_idx(&self) -> usize {
        (self.head + self.capacity() - self.len) % self.capacity()
    }

    // ADDING DATA ---------------------------------------------------------------------------------
    /// push writes val to the head position. Once the buffer is full the oldest value gets
    /// overwritten.
    pub fn push(&mut self, val: T) {
        if self.is_full() {
            trace!("Buffer full, evicting value at storage index {}", self.head);
        } else {
            self.len += 1;
        }

        self.vals[self.head] = val;
        self.head = (self.head + 1) % self.capacity();
    }

    /// clear drops all valid elements and resets the store to zero values. The capacity is kept.
    pub fn clear(&mut self) {
        debug!("Clearing buffer holding {} elements", self.len);
        self.vals.iter_mut().for_each(|val| *val = T::default());
        self.len = 0;
        self.head = 0;
    }

    // INDEXING ------------------------------------------------------------------------------------
    /// time_to_storage_idx converts a time index (0 is the oldest value) into the storage index
    /// of the same element.
    pub fn time_to_storage_idx(&self, time_idx: usize) -> Result<usize, BufferError> {
        self.check_idx(time_idx)?;
        Ok((self.oldest_idx() + time_idx) % self.capacity())
    }

    /// storage_to_time_idx converts a storage index into the time index of the same element.
    pub fn storage_to_time_idx(&self, storage_idx: usize) -> Result<usize, BufferError> {
        self.check_idx(storage_idx)?;
        Ok((storage_idx + self.capacity() - self.oldest_idx()) % self.capacity())
    }

    fn check_idx(&self, idx: usize) -> Result<(), BufferError> {
        if idx >= self.len {
            return Err(BufferError::IndexOutOfRange { idx, len: self.len });
        }
        Ok(())
    }

    /// get_at returns the value at the inserted time index.
    pub fn get_at(&self, time_idx: usize) -> Result<T, BufferError> {
        let storage_idx = self.time_to_storage_idx(time_idx)?;
        Ok(self.vals[storage_idx])
    }

    /// iter returns the valid elements from the oldest to the newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        let oldest_idx = self.oldest_idx();
        let capacity = self.capacity();
        (0..self.len).map(move |time_idx| self.vals[(oldest_idx + time_idx) % capacity])
    }

    /// to_vec returns a time ordered copy of the valid elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// straightened_copy returns a buffer of the same capacity that holds the oldest value at
    /// storage index 0 and the newest at index len - 1.
    pub fn straightened_copy(&self) -> RingBuffer<T> {
        let mut vals = vec![T::default(); self.capacity()];
        for (slot, val) in vals.iter_mut().zip(self.iter()) {
            *slot = val;
        }

        RingBuffer {
            vals,
            len: self.len,
            head: self.len % self.capacity(),
        }
    }

    // REMOVING DATA -------------------------------------------------------------------------------
    /// remove_at_time_idx removes the value at the inserted time index. The remaining values keep
    /// their time order and the freed slot is reused by the next push.
    pub fn remove_at_time_idx(&mut self, time_idx: usize) -> Result<T, BufferError> {
        self.check_idx(time_idx)?;

        // straighten the store in place such that the time index equals the storage index
        let oldest_idx = self.oldest_idx();
        if oldest_idx != 0 {
            debug!("Straightening store, oldest value was at storage index {}", oldest_idx);
            self.vals.rotate_left(oldest_idx);
        }

        // move the removed value behind the remaining ones and reset its slot
        let removed = self.vals[time_idx];
        self.vals[time_idx..self.len].rotate_left(1);
        self.len -= 1;
        self.vals[self.len] = T::default();
        self.head = self.len;

        debug!(
            "Removed value at time index {}, {} values left",
            time_idx, self.len
        );
        Ok(removed)
    }

    // STATISTICS ----------------------------------------------------------------------------------
    /// get_min returns the minimum value or None if the buffer is empty.
    pub fn get_min(&self) -> Option<T> {
        general::min(self.as_slice())
    }
    /// get_max returns the maximum value or None if the buffer is empty.
    pub fn get_max(&self) -> Option<T> {
        general::max(self.as_slice())
    }
    /// get_argmin returns the storage index of the first minimum value or None if the buffer is
    /// empty.
    pub fn get_argmin(&self) -> Option<usize> {
        general::argmin(self.as_slice())
    }
    /// get_argmax returns the storage index of the first maximum value or None if the buffer is
    /// empty.
    pub fn get_argmax(&self) -> Option<usize> {
        general::argmax(self.as_slice())
    }
    /// get_mean returns the arithmetic mean or None if the buffer is empty.
    pub fn get_mean(&self) -> Option<f64> {
        general::mean(self.as_slice())
    }

    // The following variants return zero for an empty buffer, callers that have to tell "no data"
    // apart from a real zero use the get_* methods above.
    pub fn min(&self) -> T {
        self.get_min().unwrap_or_default()
    }
    pub fn max(&self) -> T {
        self.get_max().unwrap_or_default()
    }
    pub fn argmin(&self) -> usize {
        self.get_argmin().unwrap_or(0)
    }
    pub fn argmax(&self) -> usize {
        self.get_argmax().unwrap_or(0)
    }
    pub fn mean(&self) -> f64 {
        self.get_mean().unwrap_or(0.0)
    }

    /// argmin_time_idx returns the time index of the minimum value (the first one in storage
    /// order if it occurs multiple times).
    pub fn argmin_time_idx(&self) -> Option<usize> {
        self.get_argmin()
            .and_then(|storage_idx| self.storage_to_time_idx(storage_idx).ok())
    }
    /// argmax_time_idx returns the time index of the maximum value (the first one in storage
    /// order if it occurs multiple times).
    pub fn argmax_time_idx(&self) -> Option<usize> {
        self.get_argmax()
            .and_then(|storage_idx| self.storage_to_time_idx(storage_idx).ok())
    }
}
