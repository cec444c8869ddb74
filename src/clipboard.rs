// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Seam for the clipboard collaborator that receives copied snippets.

use std::io::Write;

use crate::error::Error;

/// Destination for snippets produced by the copy actions.
///
/// Implementations report failures through [`Error::Clipboard`]; the session
/// never retries and never changes state based on the outcome.
pub trait Clipboard {
    /// Stores `text` as the current clipboard contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when the text could not be stored.
    fn write_text(&mut self, text: &str) -> Result<(), Error>;
}

/// Clipboard that writes each snippet followed by a newline to a writer.
///
/// The CLI wraps standard output in it so copied snippets can be piped into
/// platform tools such as `pbcopy` or `wl-copy`.
#[derive(Debug)]
pub struct WriterClipboard<W> {
    writer: W
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for WriterClipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.writer, "{text}")
            .and_then(|()| self.writer.flush())
            .map_err(|source| Error::clipboard(source.to_string()))
    }
}
