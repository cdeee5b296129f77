//! Core utilities and shared types

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Adapts the minus pager to `std::io::Write`, so commands can print to it
/// the same way they print to stdout.
///
/// ```ignore
/// let pager = Pager::new();
/// let writer = PagerWriter::new(pager.clone());
/// let tracker = Tracker::new(Box::new(writer), BinaryIdentity::Marker);
/// tracker.diff(before, after, &PatchOptions::default())?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
