use std::fmt;
use std::io::{self, Read, Write};

use sha2::{Digest, Sha256};

/// SHA-256 digest of a plaintext byte stream.
///
/// Only ever compared for equality, to tell whether the editor changed
/// the file. Never persisted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    #[cfg(test)]
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Fingerprint everything `reader` yields until EOF.
    pub fn of_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut HashSink(&mut hasher))?;
        Ok(Self(hasher.finalize().into()))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short prefix is enough to tell two digests apart in test output.
        write!(f, "Fingerprint(")?;
        for b in &self.0[..6] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…)")
    }
}

struct HashSink<'a>(&'a mut Sha256);

impl Write for HashSink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that forwards every byte to `inner` and hashes exactly the bytes
/// `inner` accepted.
pub struct FingerprintWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> FingerprintWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    /// Flush the inner writer and return it with the final fingerprint.
    pub fn finish(mut self) -> io::Result<(W, Fingerprint)> {
        self.inner.flush()?;
        Ok((self.inner, Fingerprint(self.hasher.finalize().into())))
    }
}

impl<W: Write> Write for FingerprintWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
