use crate::model::line::OutputLine;

/// Append-only list of revealed lines.
///
/// `clear` is the only operation that removes lines, apart from the
/// optional cap which drops the oldest lines once exceeded.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
    /// 0 = unlimited
    max_lines: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            lines: Vec::new(),
            max_lines,
        }
    }

    pub fn push(&mut self, line: impl Into<OutputLine>) {
        self.lines.push(line.into());
        if self.max_lines > 0 && self.lines.len() > self.max_lines {
            let excess = self.lines.len() - self.max_lines;
            self.lines.drain(..excess);
        }
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = OutputLine>,
    {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of every line, for matching.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(OutputLine::text).collect()
    }
}
