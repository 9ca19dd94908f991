//! Diagnostic line assembly
//!
//! Collects bytes drained from the receive ring into text lines. A line
//! ends at CR or LF; a CR LF pair therefore yields one line followed by an
//! empty terminator, which is skipped.

use heapless::String;

use crate::ring::RxConsumer;

/// Backspace and delete both erase the last character
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// A completed input line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line<const M: usize> {
    text: String<M>,
    truncated: bool,
}

impl<const M: usize> Line<M> {
    /// Line text without the terminator
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Line text with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if input was dropped because the line hit the length limit
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Accumulates received bytes into lines of at most `M` characters
///
/// Printable ASCII is kept, backspace/delete erase, other control bytes
/// are ignored.
#[derive(Debug)]
pub struct LineBuffer<const M: usize> {
    text: String<M>,
    limit: usize,
    truncated: bool,
}

impl<const M: usize> LineBuffer<M> {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            limit: M,
            truncated: false,
        }
    }

    /// Buffer keeping at most `limit` characters per line (capped at `M`)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.min(M),
            ..Self::new()
        }
    }

    /// Characters kept per line
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Feed one byte, returning a line when a terminator arrives
    pub fn push(&mut self, byte: u8) -> Option<Line<M>> {
        match byte {
            b'\r' | b'\n' => {
                if self.text.is_empty() && !self.truncated {
                    return None;
                }
                let line = Line {
                    text: core::mem::take(&mut self.text),
                    truncated: self.truncated,
                };
                self.truncated = false;
                Some(line)
            }
            BACKSPACE | DELETE => {
                self.text.pop();
                None
            }
            0x20..=0x7E => {
                if self.text.len() >= self.limit || self.text.push(byte as char).is_err() {
                    self.truncated = true;
                }
                None
            }
            _ => None,
        }
    }

    /// Drain the receive ring until a line completes or the ring is empty
    ///
    /// Bytes after the terminator stay in the ring for the next call.
    pub fn poll<const N: usize>(&mut self, rx: &mut RxConsumer<'_, N>) -> Option<Line<M>> {
        while let Some(byte) = rx.try_get_byte() {
            if let Some(line) = self.push(byte) {
                return Some(line);
            }
        }
        None
    }

    /// Number of characters buffered for the current line
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Discard the partial line
    pub fn clear(&mut self) {
        self.text.clear();
        self.truncated = false;
    }
}

impl<const M: usize> Default for LineBuffer<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RxRing;
    use std::vec::Vec;

    fn feed<const M: usize>(buf: &mut LineBuffer<M>, input: &[u8]) -> Vec<Line<M>> {
        input.iter().filter_map(|&b| buf.push(b)).collect()
    }

    #[test]
    fn test_line_on_lf() {
        let mut buf: LineBuffer<16> = LineBuffer::new();
        let lines = feed(&mut buf, b"status\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_str(), "status");
        assert!(!lines[0].is_truncated());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_crlf_yields_one_line() {
        let mut buf: LineBuffer<16> = LineBuffer::new();
        let lines = feed(&mut buf, b"help\r\nstatus\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_str(), "help");
        assert_eq!(lines[1].as_str(), "status");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut buf: LineBuffer<16> = LineBuffer::new();
        assert!(feed(&mut buf, b"\r\n\n\r").is_empty());
    }

    #[test]
    fn test_overlong_line_truncated() {
        let mut buf: LineBuffer<4> = LineBuffer::new();
        let lines = feed(&mut buf, b"abcdefgh\nok\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_str(), "abcd");
        assert!(lines[0].is_truncated());
        assert_eq!(lines[1].as_str(), "ok");
        assert!(!lines[1].is_truncated());
    }

    #[test]
    fn test_runtime_limit() {
        let mut buf: LineBuffer<16> = LineBuffer::with_limit(3);
        assert_eq!(buf.limit(), 3);
        let lines = feed(&mut buf, b"help\n");
        assert_eq!(lines[0].as_str(), "hel");
        assert!(lines[0].is_truncated());

        let buf: LineBuffer<16> = LineBuffer::with_limit(64);
        assert_eq!(buf.limit(), 16);
    }

    #[test]
    fn test_backspace_and_controls() {
        let mut buf: LineBuffer<16> = LineBuffer::new();
        let lines = feed(&mut buf, b"stx\x08at\x01us\x7F\x7Fus\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_str(), "status");
    }

    #[test]
    fn test_trimmed() {
        let mut buf: LineBuffer<16> = LineBuffer::new();
        let lines = feed(&mut buf, b"  help \n");
        assert_eq!(lines[0].trimmed(), "help");
    }

    #[test]
    fn test_clear() {
        let mut buf: LineBuffer<16> = LineBuffer::new();
        feed(&mut buf, b"partial");
        assert_eq!(buf.len(), 7);
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.push(b'\n').is_none());
    }

    #[test]
    fn test_poll_from_ring() {
        let ring: RxRing<16> = RxRing::new();
        let (mut tx, mut rx) = ring.split().unwrap();
        let mut buf: LineBuffer<16> = LineBuffer::new();

        for &b in b"he" {
            tx.on_byte_received(b);
        }
        assert!(buf.poll(&mut rx).is_none());

        for &b in b"lp\nst" {
            tx.on_byte_received(b);
        }
        let line = buf.poll(&mut rx).unwrap();
        assert_eq!(line.as_str(), "help");
        assert_eq!(rx.available(), 2);

        for &b in b"atus\r" {
            tx.on_byte_received(b);
        }
        assert_eq!(buf.poll(&mut rx).unwrap().as_str(), "status");
        assert!(rx.is_empty());
    }
}
