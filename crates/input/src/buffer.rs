//! Bounded FIFO of recently polled keys.

use arrayvec::ArrayVec;

use crate::types::{DEFAULT_INPUT_BUFFER_LIMIT, INPUT_BUFFER_STORAGE};

/// Input ring holding at most `limit + 1` keys.
///
/// Each push first evicts the oldest key if the ring already holds more than
/// `limit`, then appends the new key (if any). Consumption is front-to-back;
/// the exit scan is back-to-front over the whole ring.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    keys: ArrayVec<char, INPUT_BUFFER_STORAGE>,
    limit: usize,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_BUFFER_LIMIT)
    }
}

impl InputBuffer {
    /// `limit` is clamped so that `limit + 1` keys fit the fixed storage.
    pub fn new(limit: usize) -> Self {
        Self {
            keys: ArrayVec::new(),
            limit: limit.min(INPUT_BUFFER_STORAGE - 1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Largest number of keys the ring can hold.
    pub fn capacity(&self) -> usize {
        self.limit + 1
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.keys
    }

    /// Record one poll result. Returns the evicted key, if any.
    ///
    /// Eviction happens even when the poll produced nothing, so an idle
    /// player drains stale keys one per tick.
    pub fn push(&mut self, key: Option<char>) -> Option<char> {
        let evicted = if self.keys.len() > self.limit {
            Some(self.keys.remove(0))
        } else {
            None
        };
        if let Some(k) = key {
            let _ = self.keys.try_push(k);
        }
        evicted
    }

    /// Remove and return the oldest key.
    pub fn pop_front(&mut self) -> Option<char> {
        if self.keys.is_empty() {
            return None;
        }
        Some(self.keys.remove(0))
    }

    /// Scan newest to oldest for `key`.
    pub fn contains(&self, key: char) -> bool {
        self.keys.iter().rev().any(|&k| k == key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_empty_polls() {
        let mut buf = InputBuffer::new(3);
        buf.push(Some('a'));
        buf.push(None);
        buf.push(Some('b'));
        assert_eq!(buf.as_slice(), &['a', 'b']);
    }

    #[test]
    fn holds_limit_plus_one() {
        let mut buf = InputBuffer::new(2);
        for ch in ['a', 'b', 'c'] {
            assert_eq!(buf.push(Some(ch)), None);
        }
        assert_eq!(buf.len(), buf.capacity());

        assert_eq!(buf.push(Some('d')), Some('a'));
        assert_eq!(buf.as_slice(), &['b', 'c', 'd']);
    }

    #[test]
    fn idle_poll_still_evicts_when_full() {
        let mut buf = InputBuffer::new(1);
        buf.push(Some('a'));
        buf.push(Some('b'));
        assert_eq!(buf.push(None), Some('a'));
        assert_eq!(buf.as_slice(), &['b']);
        assert_eq!(buf.push(None), None);
    }

    #[test]
    fn pop_front_is_fifo() {
        let mut buf = InputBuffer::default();
        buf.push(Some('w'));
        buf.push(Some('a'));
        assert_eq!(buf.pop_front(), Some('w'));
        assert_eq!(buf.pop_front(), Some('a'));
        assert_eq!(buf.pop_front(), None);
    }

    #[test]
    fn contains_scans_whole_ring() {
        let mut buf = InputBuffer::default();
        for ch in ['q', 'w', 'a'] {
            buf.push(Some(ch));
        }
        assert!(buf.contains('q'));
        assert!(!buf.contains('x'));
    }

    #[test]
    fn limit_is_clamped_to_storage() {
        let buf = InputBuffer::new(usize::MAX);
        assert_eq!(buf.capacity(), INPUT_BUFFER_STORAGE);
        assert_eq!(InputBuffer::default().limit(), DEFAULT_INPUT_BUFFER_LIMIT);
    }
}
