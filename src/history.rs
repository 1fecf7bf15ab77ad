//! Undo/redo history of completed strokes.

use crate::Stroke;

/// An undo/redo stack of completed strokes.
///
/// Strokes move between the two stacks by ownership transfer; a stroke is
/// on exactly one stack at any time, never both. Adding a new stroke
/// discards the redo stack.
#[derive(Clone, Debug, Default)]
pub struct StrokeHistory {
    undo: Vec<Stroke>,
    redo: Vec<Stroke>,
}

impl StrokeHistory {
    /// Create an empty history.
    pub fn new() -> StrokeHistory {
        StrokeHistory::default()
    }

    /// The number of currently visible strokes.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Whether there are no visible strokes.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Push a completed stroke, discarding any redoable strokes.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.redo.clear();
        self.undo.push(stroke);
    }

    /// Retire the most recent stroke.
    ///
    /// Returns `false` if there is nothing to undo; an empty-stack undo is
    /// a non-fatal no-op.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(stroke) => {
                self.redo.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently retired stroke.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(stroke) => {
                self.undo.push(stroke);
                true
            }
            None => false,
        }
    }

    /// The visible strokes, oldest first.
    ///
    /// This is the assembly order for document export.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.undo.iter()
    }
}
