use std::{fs, io, path::Path};

/// Maps byte offsets in the joined program text back to the original lines.
///
/// Every original line contributes one entry holding the offset at which its
/// stripped contents begin. Empty lines contribute an entry equal to the
/// start of the following line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMap {
    starts: Vec<usize>,
    len:    usize,
}

impl LineMap {
    /// Returns the 1-based original line number that contains `offset`.
    ///
    /// # Example
    /// ```
    /// use doorlang::interpreter::source::Source;
    ///
    /// let source = Source::from_text("{\n  x = 1;\n}");
    /// assert_eq!(source.text(), "{x = 1;}");
    /// assert_eq!(source.lines().line_of(0), 1);
    /// assert_eq!(source.lines().line_of(1), 2);
    /// assert_eq!(source.lines().line_of(7), 3);
    /// ```
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset).max(1)
    }

    /// Returns the offset one past the last byte of the original line that
    /// contains `offset`.
    #[must_use]
    pub fn line_end(&self, offset: usize) -> usize {
        let next = self.starts.partition_point(|&start| start <= offset);
        self.starts.get(next).copied().unwrap_or(self.len)
    }
}

/// Program text prepared for lexing.
///
/// Each line of the file is stripped of leading and trailing whitespace and
/// the results are concatenated without any separator. Tokens that straddle
/// a line break therefore merge, e.g. `ab` followed by a line holding `c`
/// lexes as the single identifier `abc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    text:  String,
    lines: LineMap,
}

impl Source {
    /// Builds a source from raw program text.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut starts = Vec::new();

        for line in raw.lines() {
            starts.push(text.len());
            text.push_str(line.trim());
        }

        let len = text.len();
        Self { text,
               lines: LineMap { starts, len } }
    }

    /// Reads and prepares the file at `path`.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "read source file");
        Ok(Self::from_text(&raw))
    }

    /// The joined program text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The offset-to-line mapping for [`Self::text`].
    #[must_use]
    pub const fn lines(&self) -> &LineMap {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strips_and_joins_lines() {
        let source = Source::from_text("  {  \n\tshow(1);\r\n\n}  ");
        assert_eq!(source.text(), "{show(1);}");
    }

    #[test]
    fn identifiers_merge_across_lines() {
        let source = Source::from_text("ab\nc = 1;");
        assert_eq!(source.text(), "abc = 1;");
    }

    #[test]
    fn empty_lines_map_to_the_following_line() {
        let source = Source::from_text("{\n\n\nx = 1;}");
        assert_eq!(source.lines().line_of(0), 1);
        assert_eq!(source.lines().line_of(1), 4);
        assert_eq!(source.lines().line_end(0), 1);
        assert_eq!(source.lines().line_end(1), source.text().len());
    }

    #[test]
    fn empty_source_has_no_text() {
        let source = Source::from_text("");
        assert_eq!(source.text(), "");
        assert_eq!(source.lines().line_of(0), 1);
        assert_eq!(source.lines().line_end(0), 0);
    }
}
