use std::{
    collections::VecDeque,
    io::{self, BufReader, Read},
};

use tracing::warn;

use crate::errors::errors::SourceError;

/// Decodes UTF-8 characters out of a byte reader so any `Read` can feed a
/// [`Lexer`](super::lexer::Lexer).
///
/// A malformed sequence decodes to `U+FFFD` for its first byte only and
/// decoding picks up again at the following byte. A read failure ends the
/// stream; the failure is kept for [`ReaderSource::take_error`].
pub struct ReaderSource<R: Read> {
    reader: BufReader<R>,
    /// Bytes read from the reader but not decoded yet
    pending: VecDeque<u8>,
    at_end: bool,
    error: Option<SourceError>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader: BufReader::new(reader),
            pending: VecDeque::with_capacity(4),
            at_end: false,
            error: None,
        }
    }

    pub fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<SourceError> {
        self.error.take()
    }

    /// Tops `pending` up to `len` bytes. Returns false when the reader ran
    /// dry (or failed) first.
    fn fill(&mut self, len: usize) -> bool {
        let mut byte = [0u8; 1];

        while self.pending.len() < len && !self.at_end {
            match self.reader.read(&mut byte) {
                Ok(0) => self.at_end = true,
                Ok(_) => self.pending.push_back(byte[0]),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!(target: "monkey::source", error = %err, "read failed, ending input");
                    self.error = Some(SourceError::Io(err));
                    self.at_end = true;
                }
            }
        }

        self.pending.len() >= len
    }
}

impl<R: Read> Iterator for ReaderSource<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if !self.fill(1) {
            return None;
        }

        let width = utf8_width(self.pending[0]);
        if width == 0 {
            self.pending.pop_front();
            return Some(char::REPLACEMENT_CHARACTER);
        }

        self.fill(width);
        let mut buf = [0u8; 4];
        let available = width.min(self.pending.len());
        for (slot, byte) in buf.iter_mut().zip(self.pending.iter()).take(available) {
            *slot = *byte;
        }

        match std::str::from_utf8(&buf[..available])
            .ok()
            .and_then(|s| s.chars().next())
        {
            Some(ch) => {
                self.pending.drain(..width);
                Some(ch)
            }
            None => {
                self.pending.pop_front();
                Some(char::REPLACEMENT_CHARACTER)
            }
        }
    }
}

/// Sequence length announced by a leading byte, 0 when the byte cannot
/// start a sequence.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader {
        data: &'static [u8],
        pos: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.data.len() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
            }
            let n = buf.len().min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_decodes_multi_byte_characters() {
        let source = ReaderSource::new("aé€😀".as_bytes());
        assert_eq!(source.collect::<String>(), "aé€😀");
    }

    #[test]
    fn test_invalid_byte_becomes_replacement() {
        let bytes: &[u8] = &[b'a', 0xFF, b'b'];
        let source = ReaderSource::new(bytes);
        assert_eq!(source.collect::<Vec<char>>(), vec!['a', '\u{FFFD}', 'b']);
    }

    #[test]
    fn test_truncated_sequence_resumes_at_next_byte() {
        // 0xE2 0x82 starts a three byte sequence that never completes
        let bytes: &[u8] = &[0xE2, 0x82, b'x'];
        let source = ReaderSource::new(bytes);
        assert_eq!(
            source.collect::<Vec<char>>(),
            vec!['\u{FFFD}', '\u{FFFD}', 'x']
        );
    }

    #[test]
    fn test_read_error_ends_stream_and_is_kept() {
        let mut source = ReaderSource::new(FailingReader {
            data: b"ok",
            pos: 0,
        });

        assert_eq!(source.next(), Some('o'));
        assert_eq!(source.next(), Some('k'));
        assert_eq!(source.next(), None);
        assert!(source.error().is_some());

        let err = source.take_error().unwrap();
        assert_eq!(err.get_error_name(), "Io");
        assert!(source.take_error().is_none());
        assert_eq!(source.next(), None);
    }
}
