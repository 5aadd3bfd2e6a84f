/// Half-open character range `[start, end)`, always normalized so that
/// `start <= end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn contains(self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Selection state of a field.
///
/// "No selection" is its own variant; a range is never empty. A cursor at
/// offset 0 with nothing selected is `Selection::None`, not `(0, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Range(SelectionRange),
}

impl Selection {
    /// Selection spanning `a` and `b` in either order; `None` when they meet.
    pub fn between(a: usize, b: usize) -> Self {
        let range = SelectionRange::new(a, b);
        if range.is_empty() {
            Selection::None
        } else {
            Selection::Range(range)
        }
    }

    pub fn range(self) -> Option<SelectionRange> {
        match self {
            Selection::None => None,
            Selection::Range(r) => Some(r),
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Selection::Range(_))
    }

    /// The fixed end of the selection, given where the cursor is.
    ///
    /// With an active range the anchor is the endpoint the cursor is not on.
    /// Without one (or if the cursor drifted off both endpoints) the cursor
    /// itself is the anchor.
    pub fn anchor_for(self, cursor: usize) -> usize {
        match self {
            Selection::Range(r) if cursor == r.start => r.end,
            Selection::Range(r) if cursor == r.end => r.start,
            _ => cursor,
        }
    }

    /// Grow or shrink the selection as the cursor moves from `cursor` to
    /// `new_cursor`. Shared by keyboard extension, shift-click and drag.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_core::{Selection, SelectionRange};
    ///
    /// // Shift+Right from a collapsed cursor at 2.
    /// let sel = Selection::None.extend(2, 3);
    /// assert_eq!(sel, Selection::Range(SelectionRange { start: 2, end: 3 }));
    ///
    /// // Moving back over the anchor flips the range.
    /// let sel = sel.extend(3, 0);
    /// assert_eq!(sel, Selection::Range(SelectionRange { start: 0, end: 2 }));
    ///
    /// // Returning to the anchor clears it.
    /// assert_eq!(sel.extend(0, 2), Selection::None);
    /// ```
    pub fn extend(self, cursor: usize, new_cursor: usize) -> Selection {
        Selection::between(self.anchor_for(cursor), new_cursor)
    }

    /// Clamp both endpoints to `max`, dropping the range if it collapses.
    pub fn clamped(self, max: usize) -> Selection {
        match self {
            Selection::None => Selection::None,
            Selection::Range(r) => Selection::between(r.start.min(max), r.end.min(max)),
        }
    }
}
