//! Fixed-capacity log buffer
//!
//! Append-only, oldest lines fall off the front once the capacity is hit.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Push a line to the back, dropping from the front while over capacity
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newest line
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Lines in insertion order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &LogBuffer) -> Vec<&str> {
        buf.iter().collect()
    }

    #[test]
    fn test_append_under_capacity() {
        let mut buf = LogBuffer::new(8);
        buf.append("a");
        buf.append("b");
        assert_eq!(lines(&buf), vec!["a", "b"]);
        assert_eq!(buf.last(), Some("b"));
    }

    #[test]
    fn test_keeps_last_n_in_order() {
        let mut buf = LogBuffer::new(8);
        for i in 0..20 {
            buf.append(format!("line {i}"));
            assert!(buf.len() <= 8);
        }
        let expected: Vec<String> = (12..20).map(|i| format!("line {i}")).collect();
        assert_eq!(lines(&buf), expected);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut buf = LogBuffer::new(3);
        buf.append("same");
        buf.append("same");
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut buf = LogBuffer::new(0);
        buf.append("x");
        buf.append("y");
        assert_eq!(lines(&buf), vec!["y"]);
    }
}
