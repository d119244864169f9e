//! crates/logging-sink/src/line_mode.rs
//! Newline policy for stream sinks.

/// Controls whether a [`WriterSink`](crate::WriterSink) terminates each rendered record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline unless the message already ends with one.
    #[default]
    WithNewline,
    /// Write the prefix and message exactly as given.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates records with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Returns the terminator needed after `message` under this mode.
    ///
    /// A message that already ends in `\n` never receives a second one.
    #[must_use]
    pub fn terminator(self, message: &str) -> &'static str {
        if self.append_newline() && !message.ends_with('\n') {
            "\n"
        } else {
            ""
        }
    }
}

impl From<bool> for LineMode {
    /// `true` maps to [`LineMode::WithNewline`], `false` to [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;
