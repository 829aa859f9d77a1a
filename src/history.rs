use crate::drawable::Drawable;

/// Ordered log of committed drawables with a linear redo buffer
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Drawables on the canvas, oldest first
    committed: Vec<Drawable>,
    /// Undone drawables; the last one is redone first
    redo_stack: Vec<Drawable>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished drawable. Any undone drawables are dropped for good.
    pub fn commit(&mut self, drawable: Drawable) -> bool {
        log::debug!("commit {}", drawable.kind());
        self.committed.push(drawable);
        self.redo_stack.clear();
        true
    }

    /// Move the newest drawable to the redo buffer. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Inverse of [`History::undo`]
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empty both the canvas and the redo buffer
    pub fn clear(&mut self) -> bool {
        self.committed.clear();
        self.redo_stack.clear();
        true
    }

    /// Committed drawables in commit order
    pub fn snapshot(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
