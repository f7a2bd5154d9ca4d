//! Color palette regeneration with slot locking.
//!
//! The palette is an ordered sequence of five slots. A user may lock a slot
//! at its current color; locked slots are passed to the harmony generator as
//! fixed constraints while the rest are regenerated. Every successful
//! regeneration pushes the outgoing palette onto a history stack so the user
//! can step back.

use crate::generation::huemint::{
    HuemintClient, PaletteRequest, PALETTE_SIZE, UNCONSTRAINED_SLOT,
};
use crate::generation::GenerationError;

/// Step-local lock and history state for the color harmony step.
///
/// Discarded with the session; only the resulting colors are persisted.
#[derive(Debug, Clone, Default)]
pub struct PaletteBoard {
    current: Vec<String>,
    locks: Vec<(usize, String)>,
    previous_palettes: Vec<Vec<String>>,
}

impl PaletteBoard {
    /// Board seeded with an initial palette (usually the model suggestion).
    pub fn new(initial: Vec<String>) -> Self {
        Self {
            current: initial,
            locks: Vec::new(),
            previous_palettes: Vec::new(),
        }
    }

    /// The palette currently on display.
    pub fn current(&self) -> &[String] {
        &self.current
    }

    /// Replace the current palette without touching locks or history
    /// (used when a fresh suggestion arrives from the prompt model).
    pub fn set_palette(&mut self, palette: Vec<String>) {
        self.current = palette;
    }

    /// Whether stepping back is possible.
    pub fn has_previous(&self) -> bool {
        !self.previous_palettes.is_empty()
    }

    /// Lock a slot at a color. Locking an already-locked (index, color) pair
    /// is a no-op, as is an out-of-range index.
    pub fn lock(&mut self, index: usize, color: &str) {
        if index >= PALETTE_SIZE {
            return;
        }
        if !self.is_locked(index, color) {
            self.locks.push((index, color.to_string()));
        }
    }

    /// Unlock a slot. Unlocking a pair that is not locked is a no-op.
    pub fn unlock(&mut self, index: usize, color: &str) {
        self.locks
            .retain(|(i, c)| !(*i == index && c == color));
    }

    /// Whether the exact (index, color) pair is locked.
    pub fn is_locked(&self, index: usize, color: &str) -> bool {
        self.locks.iter().any(|(i, c)| *i == index && c == color)
    }

    /// Build the constraint slots for a regeneration call: locked indices
    /// carry their color, all others the unconstrained placeholder.
    pub fn constrained_slots(&self) -> Vec<String> {
        let mut slots = vec![UNCONSTRAINED_SLOT.to_string(); PALETTE_SIZE];
        for (index, color) in &self.locks {
            if *index < PALETTE_SIZE {
                slots[*index] = color.clone();
            }
        }
        slots
    }

    /// Adopt a freshly generated palette, pushing the outgoing one onto the
    /// history stack.
    pub fn adopt(&mut self, palette: Vec<String>) {
        self.previous_palettes.push(std::mem::take(&mut self.current));
        self.current = palette;
    }

    /// Restore the most recent previous palette. Empty history is a no-op.
    pub fn go_to_previous_palette(&mut self) {
        if let Some(previous) = self.previous_palettes.pop() {
            self.current = previous;
        }
    }

    /// Regenerate the palette through the harmony generator.
    ///
    /// The history push happens only after a successful response, so a
    /// failed call leaves both the current palette and the history stack
    /// untouched.
    pub async fn regenerate(
        &mut self,
        client: &HuemintClient,
    ) -> Result<&[String], GenerationError> {
        let request = PaletteRequest::constrained(self.constrained_slots());
        log::debug!("regenerating palette with constraints {:?}", request.palette);
        let palette = client.generate(&request).await?;
        self.adopt(palette);
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_palette() -> Vec<String> {
        vec![
            "#111111".to_string(),
            "#222222".to_string(),
            "#333333".to_string(),
            "#444444".to_string(),
            "#555555".to_string(),
        ]
    }

    #[test]
    fn test_lock_is_idempotent() {
        let mut board = PaletteBoard::new(sample_palette());
        board.lock(2, "#112233");
        board.lock(2, "#112233");
        assert_eq!(board.constrained_slots().iter().filter(|s| s.as_str() == "#112233").count(), 1);
        assert!(board.is_locked(2, "#112233"));
    }

    #[test]
    fn test_unlock_nonexistent_is_noop() {
        let mut board = PaletteBoard::new(sample_palette());
        board.unlock(2, "#112233");
        assert!(!board.is_locked(2, "#112233"));
    }

    #[test]
    fn test_out_of_range_lock_ignored() {
        let mut board = PaletteBoard::new(sample_palette());
        board.lock(9, "#112233");
        assert_eq!(board.constrained_slots(), vec!["-"; 5]);
    }

    #[test]
    fn test_constrained_slots_places_locks() {
        let mut board = PaletteBoard::new(sample_palette());
        board.lock(2, "#112233");
        let slots = board.constrained_slots();
        assert_eq!(slots, vec!["-", "-", "#112233", "-", "-"]);
    }

    #[test]
    fn test_constrained_slots_without_locks() {
        let board = PaletteBoard::new(sample_palette());
        assert_eq!(board.constrained_slots(), vec!["-"; 5]);
    }

    #[test]
    fn test_unlock_requires_matching_pair() {
        let mut board = PaletteBoard::new(sample_palette());
        board.lock(2, "#112233");
        // Same color at a different index does not release the lock.
        board.unlock(1, "#112233");
        assert!(board.is_locked(2, "#112233"));
        board.unlock(2, "#112233");
        assert!(!board.is_locked(2, "#112233"));
    }

    #[test]
    fn test_adopt_then_previous_restores_exactly() {
        let original = sample_palette();
        let mut board = PaletteBoard::new(original.clone());
        board.adopt(vec!["#aaaaaa".to_string(); 5]);
        assert_eq!(board.current()[0], "#aaaaaa");
        board.go_to_previous_palette();
        assert_eq!(board.current(), original.as_slice());
    }

    #[test]
    fn test_previous_with_empty_history_is_noop() {
        let mut board = PaletteBoard::new(sample_palette());
        board.go_to_previous_palette();
        assert_eq!(board.current(), sample_palette().as_slice());
        assert!(!board.has_previous());
    }

    #[test]
    fn test_history_is_a_stack() {
        let mut board = PaletteBoard::new(vec!["#000001".to_string(); 5]);
        board.adopt(vec!["#000002".to_string(); 5]);
        board.adopt(vec!["#000003".to_string(); 5]);
        board.go_to_previous_palette();
        assert_eq!(board.current()[0], "#000002");
        board.go_to_previous_palette();
        assert_eq!(board.current()[0], "#000001");
        assert!(!board.has_previous());
    }
}
