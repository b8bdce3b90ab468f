//! Mood selector state.

use crate::models::Mood;

/// Single-selection mood picker with a keyboard cursor.
///
/// The cursor only moves the highlight; a mood is selected by clicking or
/// by confirming the mood under the cursor.
#[derive(Debug, Clone, Default)]
pub struct MoodSelector {
    selected: Option<Mood>,
    cursor: usize,
}

impl MoodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [Mood] {
        &Mood::ALL
    }

    /// Replace any previous selection with `mood`.
    pub fn select(&mut self, mood: Mood) {
        if let Some(idx) = Mood::ALL.iter().position(|m| *m == mood) {
            self.cursor = idx;
        }
        self.selected = Some(mood);
        tracing::debug!(mood = mood.label(), "Mood selected");
    }

    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    pub fn is_selected(&self, mood: Mood) -> bool {
        self.selected == Some(mood)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < Mood::ALL.len() {
            self.cursor += 1;
        }
    }

    pub fn select_under_cursor(&mut self) -> Mood {
        let mood = Mood::ALL[self.cursor];
        self.select(mood);
        mood
    }
}
