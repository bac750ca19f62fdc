//! Append-only narration stream.
//!
//! Front-ends keep a cursor into the stream and pull new lines with
//! [`Narration::since`]; the core never drops lines.

use super::types::{ReportAudience, Turn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrationLine {
    pub turn: Turn,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Narration {
    lines: Vec<NarrationLine>,
}

impl Narration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn, text: impl Into<String>) {
        self.lines.push(NarrationLine {
            turn,
            text: text.into(),
        });
    }

    /// Emits the variant of a report matching `audience`.
    ///
    /// `third_person` is built lazily and only when someone can observe it.
    pub fn report<F>(
        &mut self,
        turn: Turn,
        audience: ReportAudience,
        first_person: impl Into<String>,
        third_person: F,
    ) where
        F: FnOnce() -> Option<String>,
    {
        match audience {
            ReportAudience::Player => self.push(turn, first_person),
            ReportAudience::Observer => {
                if let Some(text) = third_person() {
                    self.push(turn, text);
                }
            }
            ReportAudience::Silent => {}
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines appended at or after `cursor`.
    pub fn since(&self, cursor: usize) -> &[NarrationLine] {
        self.lines.get(cursor..).unwrap_or(&[])
    }

    /// The last `limit` lines, oldest first.
    pub fn recent(&self, limit: usize) -> &[NarrationLine] {
        let start = self.lines.len().saturating_sub(limit);
        &self.lines[start..]
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|line| line.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NarrationLine> {
        self.lines.iter()
    }
}
