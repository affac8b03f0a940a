//! Canonical framing: the single byte encoding used before hashing.
//!
//! **Exactly one place** produces hash input bytes in the kernel. All digest
//! flows route through [`CanonicalFrame`].
//!
//! # Framing rules
//!
//! 1. Every field starts with a one-byte type marker.
//! 2. Variable-length fields carry a `u64` little-endian length prefix.
//! 3. Sequences carry an element count, then each element as a text field.
//!
//! With markers and lengths on every field, two different field sequences can
//! never frame to the same bytes.

use std::fmt::Display;

use crate::proof::hash::{canonical_hash, ContentHash};

const MARK_TEXT: u8 = b'S';
const MARK_U64: u8 = b'U';
const MARK_SEQUENCE: u8 = b'L';
const MARK_ABSENT: u8 = b'N';

/// Append-only canonical byte buffer.
#[derive(Debug, Clone, Default)]
pub struct CanonicalFrame {
    buf: Vec<u8>,
}

impl CanonicalFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a length-prefixed UTF-8 string.
    pub fn text(&mut self, value: &str) -> &mut Self {
        self.buf.push(MARK_TEXT);
        self.write_len(value.len());
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    pub fn u64(&mut self, value: u64) -> &mut Self {
        self.buf.push(MARK_U64);
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an element count followed by each element's `Display` form.
    pub fn sequence<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let rendered: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
        self.buf.push(MARK_SEQUENCE);
        self.write_len(rendered.len());
        for item in &rendered {
            self.text(item);
        }
        self
    }

    /// Write either an absence marker or the sequence.
    pub fn optional_sequence<I>(&mut self, items: Option<I>) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        match items {
            Some(items) => self.sequence(items),
            None => {
                self.buf.push(MARK_ABSENT);
                self
            }
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Hash the framed bytes under `domain`.
    #[must_use]
    pub fn digest(&self, domain: &[u8]) -> ContentHash {
        canonical_hash(domain, self.as_bytes())
    }

    fn write_len(&mut self, len: usize) {
        // usize -> u64 is lossless on every supported target.
        self.buf.extend_from_slice(&(len as u64).to_le_bytes());
    }
}
