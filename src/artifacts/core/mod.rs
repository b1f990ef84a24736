//! Core utilities and shared types
//!
//! This module contains shared output plumbing used by the binary.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. A comparison
/// session can then write to the pager exactly as it writes to stdout.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let session = Session::new(options, Box::new(PagerWriter::new(pager.clone())));
/// session.compare(left, right)?;
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

/// Whether output should go through the pager: only for an interactive
/// stdout, and never when `NO_PAGER` is set.
pub fn use_pager() -> bool {
    use is_terminal::IsTerminal;

    std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal()
}
