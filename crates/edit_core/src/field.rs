//! Single-line editable text field: buffer, cursor, selection and IME state.
//!
//! All offsets are in characters. Every transition that changes what would
//! be drawn (text, cursor, selection, attachment) bumps [`TextField::revision`]
//! so layout caches can tell when to recompute.

use std::fmt;

use crate::buffer::TextBuffer;
use crate::config::FieldConfig;
use crate::delegate::{ImeDelegate, Verdict, consult};
use crate::event::{EditKey, Modifiers};
use crate::hit::offset_at_x;
use crate::selection::Selection;
use crate::text::{char_byte_range, char_count, truncate_at_newline};
use crate::word::{next_word_boundary, prev_word_boundary};

/// Result of an editing transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// State changed.
    Applied,
    /// Nothing to do (cursor already there, empty input, not attached...).
    Unchanged,
    /// The delegate vetoed the transition; no state changed.
    Rejected,
    /// A newline was typed. Any text before it was inserted first.
    Submitted,
    /// The field detached from the input method.
    Detached,
}

impl EditOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, EditOutcome::Unchanged | EditOutcome::Rejected)
    }
}

pub struct TextField {
    buffer: TextBuffer,
    cursor: usize,
    selection: Selection,
    delegate: Option<Box<dyn ImeDelegate>>,
    attached: bool,
    revision: u64,
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .field("selection", &self.selection)
            .field("has_delegate", &self.delegate.is_some())
            .field("attached", &self.attached)
            .field("revision", &self.revision)
            .finish()
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl TextField {
    pub fn new(config: FieldConfig) -> Self {
        let mut buffer = TextBuffer::new(config.placeholder);
        buffer.set_mask_glyph(config.mask_glyph);
        buffer.set_secure_entry(config.secure_entry);
        buffer.set_text(config.initial_text);
        let cursor = buffer.char_count();
        Self {
            buffer,
            cursor,
            selection: Selection::None,
            delegate: None,
            attached: false,
            revision: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Raw text, never masked.
    pub fn content_text(&self) -> &str {
        self.buffer.content()
    }

    /// Text to measure and draw: masked when secure, placeholder when empty.
    pub fn display_text(&self) -> &str {
        self.buffer.display()
    }

    pub fn showing_placeholder(&self) -> bool {
        self.buffer.showing_placeholder()
    }

    pub fn char_count(&self) -> usize {
        self.buffer.char_count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Raw text covered by the selection, or `""`.
    pub fn selected_text(&self) -> &str {
        match self.selection.range() {
            Some(r) => self.buffer.slice(r.start, r.end),
            None => "",
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Monotonic layout revision ("content dirty" counter).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Force the next layout pass to recompute.
    pub fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ---------------------------------------------------------------------
    // Configuration
    // ---------------------------------------------------------------------

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn ImeDelegate>>) {
        self.delegate = delegate;
    }

    /// Replace the whole text. The cursor moves to the end and any
    /// selection is dropped. Not routed through the delegate.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.cursor = self.buffer.char_count();
        self.selection = Selection::None;
        self.mark_dirty();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.buffer.set_placeholder(placeholder);
        if self.buffer.showing_placeholder() {
            self.mark_dirty();
        }
    }

    pub fn set_secure_entry(&mut self, secure: bool) {
        if self.buffer.set_secure_entry(secure) {
            self.mark_dirty();
        }
    }

    pub fn set_mask_glyph(&mut self, glyph: char) {
        self.buffer.set_mask_glyph(glyph);
        if self.buffer.is_secure_entry() {
            self.mark_dirty();
        }
    }

    // ---------------------------------------------------------------------
    // IME attachment
    // ---------------------------------------------------------------------

    /// Start receiving typed text. Clears any selection.
    pub fn attach_ime(&mut self) -> EditOutcome {
        if self.attached {
            return EditOutcome::Unchanged;
        }
        if consult(&mut self.delegate, |d| d.can_attach()) == Verdict::Reject {
            log::debug!(target: "edit_core.ime", "attach rejected by delegate");
            return EditOutcome::Rejected;
        }
        self.attached = true;
        self.selection = Selection::None;
        self.mark_dirty();
        log::debug!(target: "edit_core.ime", "attached");
        EditOutcome::Applied
    }

    /// Stop receiving typed text. Clears any selection.
    pub fn detach_ime(&mut self) -> EditOutcome {
        if !self.attached {
            return EditOutcome::Unchanged;
        }
        if consult(&mut self.delegate, |d| d.can_detach()) == Verdict::Reject {
            log::debug!(target: "edit_core.ime", "detach rejected by delegate");
            return EditOutcome::Rejected;
        }
        self.attached = false;
        self.selection = Selection::None;
        self.mark_dirty();
        log::debug!(target: "edit_core.ime", "detached");
        EditOutcome::Detached
    }

    /// Drop attachment without asking the delegate. Used by the store when
    /// another field already owns focus.
    pub(crate) fn release_ime(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.selection = Selection::None;
        self.mark_dirty();
        log::debug!(target: "edit_core.ime", "released");
    }

    // ---------------------------------------------------------------------
    // Content edits
    // ---------------------------------------------------------------------

    /// Insert `text` at the cursor, replacing the selection if any.
    ///
    /// Only the part before the first `'\n'` is inserted. A newline then
    /// asks the delegate whether to submit; accepting detaches the field.
    pub fn insert_text(&mut self, text: &str) -> EditOutcome {
        let (head, newline) = truncate_at_newline(text);

        if !head.is_empty() {
            if consult(&mut self.delegate, |d| d.will_insert(head)) == Verdict::Reject {
                log::debug!(target: "edit_core.field", "insert rejected: {head:?}");
                return EditOutcome::Rejected;
            }

            let (start, end) = match self.selection.range() {
                Some(r) => (r.start, r.end),
                None => (self.cursor, self.cursor),
            };
            self.buffer.replace_chars(start, end, head);
            self.cursor = start + char_count(head);
            self.selection = Selection::None;
            self.mark_dirty();
            log::trace!(
                target: "edit_core.field",
                "insert {head:?} at {start}..{end}, cursor={}",
                self.cursor
            );
        }

        if !newline {
            return if head.is_empty() {
                EditOutcome::Unchanged
            } else {
                EditOutcome::Applied
            };
        }

        let content = self.buffer.content();
        if consult(&mut self.delegate, |d| d.will_submit(content)) == Verdict::Accept {
            self.detach_ime();
        }
        log::debug!(target: "edit_core.field", "submit, attached={}", self.attached);
        EditOutcome::Submitted
    }

    /// Backspace: remove the selection, or the character before the cursor.
    pub fn delete_backward(&mut self) -> EditOutcome {
        let (start, end) = match self.selection.range() {
            Some(r) => (r.start, r.end),
            None if self.cursor == 0 => return EditOutcome::Unchanged,
            None => (self.cursor - 1, self.cursor),
        };
        let range = if self.selection.is_active() {
            char_byte_range(self.buffer.content(), start, end)
        } else {
            self.buffer.char_before(self.cursor)
        };

        let deleted = &self.buffer.content()[range.clone()];
        if consult(&mut self.delegate, |d| d.will_delete_backward(deleted)) == Verdict::Reject {
            log::debug!(target: "edit_core.field", "delete backward rejected");
            return EditOutcome::Rejected;
        }

        self.buffer.replace_bytes(range, "");
        self.cursor = start;
        self.selection = Selection::None;
        self.mark_dirty();
        log::trace!(target: "edit_core.field", "delete backward {start}..{end}");
        EditOutcome::Applied
    }

    /// Delete: remove the selection, or the character after the cursor.
    pub fn delete_forward(&mut self) -> EditOutcome {
        let (start, end) = match self.selection.range() {
            Some(r) => (r.start, r.end),
            None if self.cursor >= self.buffer.char_count() => return EditOutcome::Unchanged,
            None => (self.cursor, self.cursor + 1),
        };
        let range = if self.selection.is_active() {
            char_byte_range(self.buffer.content(), start, end)
        } else {
            self.buffer.char_at(self.cursor)
        };

        let deleted = &self.buffer.content()[range.clone()];
        if consult(&mut self.delegate, |d| d.will_delete_forward(deleted)) == Verdict::Reject {
            log::debug!(target: "edit_core.field", "delete forward rejected");
            return EditOutcome::Rejected;
        }

        self.buffer.replace_bytes(range, "");
        self.cursor = start;
        self.selection = Selection::None;
        self.mark_dirty();
        log::trace!(target: "edit_core.field", "delete forward {start}..{end}");
        EditOutcome::Applied
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Move one character (or to the previous word boundary) to the left.
    ///
    /// Without `extend`, a character move from an active selection
    /// collapses onto its left edge.
    pub fn move_cursor_backward(&mut self, word_break: bool, extend: bool) -> EditOutcome {
        let target = if word_break {
            // Word scan runs over the display text so masked input is one word.
            prev_word_boundary(self.buffer.display(), self.cursor)
        } else if !extend && let Some(r) = self.selection.range() {
            r.start
        } else {
            self.cursor.saturating_sub(1)
        };
        self.move_cursor_to(target, extend)
    }

    /// Move one character (or to the next word boundary) to the right.
    pub fn move_cursor_forward(&mut self, word_break: bool, extend: bool) -> EditOutcome {
        let target = if word_break {
            next_word_boundary(self.buffer.display(), self.cursor)
        } else if !extend && let Some(r) = self.selection.range() {
            r.end
        } else {
            self.cursor + 1
        };
        self.move_cursor_to(target, extend)
    }

    pub fn move_cursor_home(&mut self, extend: bool) -> EditOutcome {
        self.move_cursor_to(0, extend)
    }

    pub fn move_cursor_end(&mut self, extend: bool) -> EditOutcome {
        self.move_cursor_to(self.buffer.char_count(), extend)
    }

    /// Put the cursor at `target` (clamped), extending or collapsing the
    /// selection.
    pub fn move_cursor_to(&mut self, target: usize, extend: bool) -> EditOutcome {
        let target = target.min(self.buffer.char_count());
        let selection = if extend {
            self.selection.extend(self.cursor, target)
        } else {
            Selection::None
        };

        if target == self.cursor && selection == self.selection {
            return EditOutcome::Unchanged;
        }
        self.cursor = target;
        self.selection = selection;
        self.mark_dirty();
        log::trace!(
            target: "edit_core.field",
            "cursor={} selection={:?}",
            self.cursor,
            self.selection
        );
        EditOutcome::Applied
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Select characters `start..end`; `None` for `end` means end of text.
    ///
    /// Ignored when `start > end`. An empty span clears the selection and
    /// puts the cursor at `start`; otherwise the cursor goes to `end`.
    pub fn set_selection(&mut self, start: usize, end: Option<usize>) -> EditOutcome {
        let count = self.buffer.char_count();
        let end = end.unwrap_or(count).min(count);
        if start > end {
            log::debug!(target: "edit_core.field", "ignored inverted selection {start}..{end}");
            return EditOutcome::Unchanged;
        }

        self.selection = Selection::between(start, end);
        self.cursor = if self.selection.is_active() { end } else { start };
        self.mark_dirty();
        EditOutcome::Applied
    }

    pub fn select_all(&mut self) -> EditOutcome {
        self.set_selection(0, None)
    }

    // ---------------------------------------------------------------------
    // Pointer
    // ---------------------------------------------------------------------

    /// Press at text-space `x`. Collapses the cursor there, or extends the
    /// selection to it when `extend` (shift) is held.
    ///
    /// On an empty field there is nothing to hit; only a redraw is requested.
    pub fn pointer_down(
        &mut self,
        x: f32,
        extend: bool,
        measure_prefix: impl FnMut(&str) -> f32,
    ) -> EditOutcome {
        if self.buffer.is_empty() {
            self.mark_dirty();
            return EditOutcome::Unchanged;
        }
        let offset = offset_at_x(self.buffer.display(), x, measure_prefix);
        self.move_cursor_to(offset, extend)
    }

    /// Drag to text-space `x` with the button held.
    pub fn pointer_drag(&mut self, x: f32, measure_prefix: impl FnMut(&str) -> f32) -> EditOutcome {
        if self.buffer.is_empty() {
            return EditOutcome::Unchanged;
        }
        let offset = offset_at_x(self.buffer.display(), x, measure_prefix);
        self.move_cursor_to(offset, true)
    }

    pub fn double_click(&mut self) -> EditOutcome {
        if self.buffer.is_empty() {
            return EditOutcome::Unchanged;
        }
        self.select_all()
    }

    // ---------------------------------------------------------------------
    // Event entry points (require IME attachment)
    // ---------------------------------------------------------------------

    pub fn handle_key(&mut self, key: EditKey, mods: Modifiers) -> EditOutcome {
        if !self.attached {
            return EditOutcome::Unchanged;
        }
        match key {
            EditKey::Home => self.move_cursor_home(mods.shift),
            EditKey::End => self.move_cursor_end(mods.shift),
            EditKey::Left => self.move_cursor_backward(mods.ctrl, mods.shift),
            EditKey::Right => self.move_cursor_forward(mods.ctrl, mods.shift),
            EditKey::Backspace => self.delete_backward(),
            EditKey::Delete => self.delete_forward(),
            EditKey::Escape => self.detach_ime(),
            EditKey::Enter => self.insert_text("\n"),
            EditKey::SelectAll => self.select_all(),
        }
    }

    pub fn handle_text(&mut self, text: &str) -> EditOutcome {
        if !self.attached {
            return EditOutcome::Unchanged;
        }
        self.insert_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionRange;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn field(text: &str) -> TextField {
        TextField::new(FieldConfig {
            initial_text: text.to_string(),
            ..FieldConfig::default()
        })
    }

    fn ten_px(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[derive(Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        reject_deletes: bool,
        keep_attached_on_submit: bool,
    }

    impl ImeDelegate for Recorder {
        fn will_insert(&mut self, text: &str) -> Verdict {
            self.log.borrow_mut().push(format!("insert:{text}"));
            Verdict::Accept
        }

        fn will_delete_backward(&mut self, deleted: &str) -> Verdict {
            self.log.borrow_mut().push(format!("backspace:{deleted}"));
            if self.reject_deletes {
                Verdict::Reject
            } else {
                Verdict::Accept
            }
        }

        fn will_delete_forward(&mut self, deleted: &str) -> Verdict {
            self.log.borrow_mut().push(format!("delete:{deleted}"));
            if self.reject_deletes {
                Verdict::Reject
            } else {
                Verdict::Accept
            }
        }

        fn will_submit(&mut self, content: &str) -> Verdict {
            self.log.borrow_mut().push(format!("submit:{content}"));
            if self.keep_attached_on_submit {
                Verdict::Reject
            } else {
                Verdict::Accept
            }
        }
    }

    #[test]
    fn new_field_starts_at_end_without_selection() {
        let f = field("hello");
        assert_eq!(f.cursor(), 5);
        assert_eq!(f.selection(), Selection::None);
        assert!(!f.is_attached());
    }

    #[test]
    fn insert_at_cursor_advances_by_chars() {
        let mut f = field("ab");
        f.move_cursor_to(1, false);
        assert_eq!(f.insert_text("€€"), EditOutcome::Applied);
        assert_eq!(f.content_text(), "a€€b");
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn insert_replaces_selection() {
        let mut f = field("abc");
        f.set_selection(0, Some(2));
        f.insert_text("X");
        assert_eq!(f.content_text(), "Xc");
        assert_eq!(f.cursor(), 1);
        assert_eq!(f.selection(), Selection::None);
    }

    #[test]
    fn insert_truncates_at_newline_and_submits() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut f = field("");
        f.set_delegate(Some(Box::new(Recorder {
            log: log.clone(),
            ..Recorder::default()
        })));
        f.attach_ime();

        assert_eq!(f.insert_text("ok\nignored"), EditOutcome::Submitted);
        assert_eq!(f.content_text(), "ok");
        assert!(!f.is_attached());
        assert_eq!(*log.borrow(), vec!["insert:ok", "submit:ok"]);
    }

    #[test]
    fn rejected_submit_keeps_field_attached() {
        let mut f = field("x");
        f.set_delegate(Some(Box::new(Recorder {
            keep_attached_on_submit: true,
            ..Recorder::default()
        })));
        f.attach_ime();
        assert_eq!(f.handle_key(EditKey::Enter, Modifiers::NONE), EditOutcome::Submitted);
        assert!(f.is_attached());
        assert_eq!(f.content_text(), "x");
    }

    #[test]
    fn empty_insert_is_unchanged() {
        let mut f = field("a");
        let rev = f.revision();
        assert_eq!(f.insert_text(""), EditOutcome::Unchanged);
        assert_eq!(f.revision(), rev);
    }

    #[test]
    fn delete_backward_removes_whole_multibyte_char() {
        let mut f = field("a€");
        assert_eq!(f.delete_backward(), EditOutcome::Applied);
        assert_eq!(f.content_text(), "a");
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn delete_backward_at_start_is_noop() {
        let mut f = field("abc");
        f.move_cursor_home(false);
        let rev = f.revision();
        assert_eq!(f.delete_backward(), EditOutcome::Unchanged);
        assert_eq!(f.content_text(), "abc");
        assert_eq!(f.revision(), rev);
    }

    #[test]
    fn delete_forward_at_end_is_noop() {
        let mut f = field("abc");
        assert_eq!(f.delete_forward(), EditOutcome::Unchanged);
    }

    #[test]
    fn delete_forward_removes_next_char() {
        let mut f = field("a€b");
        f.move_cursor_to(1, false);
        f.delete_forward();
        assert_eq!(f.content_text(), "ab");
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn deletes_consume_selection() {
        let mut f = field("hello world");
        f.set_selection(5, None);
        f.delete_forward();
        assert_eq!(f.content_text(), "hello");
        assert_eq!(f.cursor(), 5);

        f.set_selection(1, Some(3));
        f.delete_backward();
        assert_eq!(f.content_text(), "hlo");
        assert_eq!(f.cursor(), 1);
        assert_eq!(f.selection(), Selection::None);
    }

    #[test]
    fn delegate_sees_deleted_text_and_can_veto() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut f = field("a€b");
        f.set_delegate(Some(Box::new(Recorder {
            log: log.clone(),
            reject_deletes: true,
            ..Recorder::default()
        })));
        f.move_cursor_to(2, false);
        let rev = f.revision();

        assert_eq!(f.delete_backward(), EditOutcome::Rejected);
        assert_eq!(f.delete_forward(), EditOutcome::Rejected);
        assert_eq!(f.content_text(), "a€b");
        assert_eq!(f.cursor(), 2);
        assert_eq!(f.revision(), rev);
        assert_eq!(*log.borrow(), vec!["backspace:€", "delete:b"]);
    }

    #[test]
    fn deleting_everything_shows_placeholder() {
        let mut f = TextField::new(FieldConfig {
            placeholder: "name".into(),
            ..FieldConfig::default()
        });
        f.insert_text("x");
        assert_eq!(f.display_text(), "x");
        f.delete_backward();
        assert!(f.showing_placeholder());
        assert_eq!(f.display_text(), "name");
    }

    #[test]
    fn char_move_collapses_selection_to_edge() {
        let mut f = field("abcdef");
        f.set_selection(1, Some(4));
        f.move_cursor_backward(false, false);
        assert_eq!(f.cursor(), 1);
        assert_eq!(f.selection(), Selection::None);

        f.set_selection(1, Some(4));
        f.move_cursor_forward(false, false);
        assert_eq!(f.cursor(), 4);
        assert_eq!(f.selection(), Selection::None);
    }

    #[test]
    fn extend_left_then_right_shrinks() {
        let mut f = field("abcdef");
        f.move_cursor_to(3, false);
        f.move_cursor_backward(false, true);
        f.move_cursor_backward(false, true);
        assert_eq!(f.selection().range(), Some(SelectionRange { start: 1, end: 3 }));
        assert_eq!(f.cursor(), 1);

        f.move_cursor_forward(false, true);
        assert_eq!(f.selection().range(), Some(SelectionRange { start: 2, end: 3 }));
        f.move_cursor_forward(false, true);
        assert_eq!(f.selection(), Selection::None);
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn navigation_clamps_at_bounds() {
        let mut f = field("ab");
        assert_eq!(f.move_cursor_forward(false, false), EditOutcome::Unchanged);
        f.move_cursor_home(false);
        assert_eq!(f.move_cursor_backward(false, false), EditOutcome::Unchanged);
        assert_eq!(f.move_cursor_backward(true, true), EditOutcome::Unchanged);
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn home_end_extend_from_cursor() {
        let mut f = field("hello");
        f.move_cursor_to(2, false);
        f.move_cursor_end(true);
        assert_eq!(f.selected_text(), "llo");
        f.move_cursor_home(true);
        assert_eq!(f.selected_text(), "he");
    }

    #[test]
    fn set_selection_semantics() {
        let mut f = field("hello");
        assert_eq!(f.set_selection(3, Some(1)), EditOutcome::Unchanged);
        assert_eq!(f.selection(), Selection::None);

        f.set_selection(1, None);
        assert_eq!(f.selected_text(), "ello");
        assert_eq!(f.cursor(), 5);

        f.set_selection(2, Some(2));
        assert_eq!(f.selection(), Selection::None);
        assert_eq!(f.cursor(), 2);

        f.set_selection(0, Some(99));
        assert_eq!(f.selected_text(), "hello");
    }

    #[test]
    fn select_all_on_empty_selects_nothing() {
        let mut f = field("");
        f.select_all();
        assert_eq!(f.selection(), Selection::None);
        assert_eq!(f.selected_text(), "");
    }

    #[test]
    fn selected_text_is_raw_even_when_masked() {
        let mut f = TextField::new(FieldConfig {
            initial_text: "pw".into(),
            ..FieldConfig::password("")
        });
        f.select_all();
        assert_eq!(f.selected_text(), "pw");
        assert_eq!(f.display_text(), "\u{2022}\u{2022}");
    }

    #[test]
    fn word_moves_over_masked_text_jump_to_ends() {
        let mut f = TextField::new(FieldConfig {
            initial_text: "two words".into(),
            ..FieldConfig::password("")
        });
        f.move_cursor_backward(true, false);
        assert_eq!(f.cursor(), 0);
        f.move_cursor_forward(true, false);
        assert_eq!(f.cursor(), 9);
    }

    #[test]
    fn pointer_down_hits_and_shift_extends() {
        let mut f = field("abcdef");
        f.pointer_down(21.0, false, ten_px);
        assert_eq!(f.cursor(), 2);
        f.pointer_down(48.0, true, ten_px);
        assert_eq!(f.selected_text(), "cde");
        f.pointer_drag(9.0, ten_px);
        assert_eq!(f.selected_text(), "b");
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn pointer_down_on_empty_field_only_marks_dirty() {
        let mut f = field("");
        let rev = f.revision();
        assert_eq!(f.pointer_down(30.0, false, ten_px), EditOutcome::Unchanged);
        assert_eq!(f.revision(), rev + 1);
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn double_click_selects_all() {
        let mut f = field("word");
        f.double_click();
        assert_eq!(f.selected_text(), "word");
        let mut empty = field("");
        assert_eq!(empty.double_click(), EditOutcome::Unchanged);
    }

    #[test]
    fn events_are_ignored_until_attached() {
        let mut f = field("a");
        assert_eq!(f.handle_text("b"), EditOutcome::Unchanged);
        assert_eq!(f.handle_key(EditKey::Backspace, Modifiers::NONE), EditOutcome::Unchanged);
        assert_eq!(f.content_text(), "a");

        f.attach_ime();
        f.handle_text("b");
        assert_eq!(f.content_text(), "ab");
        assert_eq!(f.handle_key(EditKey::Escape, Modifiers::NONE), EditOutcome::Detached);
        assert!(!f.is_attached());
    }

    #[test]
    fn attach_and_detach_clear_selection() {
        let mut f = field("abc");
        f.select_all();
        f.attach_ime();
        assert_eq!(f.selection(), Selection::None);
        f.select_all();
        f.detach_ime();
        assert_eq!(f.selection(), Selection::None);
    }

    #[test]
    fn delegate_can_refuse_attach() {
        struct Stubborn;
        impl ImeDelegate for Stubborn {
            fn can_attach(&mut self) -> Verdict {
                Verdict::Reject
            }
        }
        let mut f = field("");
        f.set_delegate(Some(Box::new(Stubborn)));
        assert_eq!(f.attach_ime(), EditOutcome::Rejected);
        assert!(!f.is_attached());
    }

    #[test]
    fn key_map_routes_modifiers() {
        let mut f = field("foo bar");
        f.attach_ime();
        f.handle_key(EditKey::Left, Modifiers::CTRL);
        assert_eq!(f.cursor(), 4);
        f.handle_key(EditKey::Home, Modifiers::SHIFT);
        assert_eq!(f.selected_text(), "foo ");
        f.handle_key(EditKey::SelectAll, Modifiers::NONE);
        assert_eq!(f.selected_text(), "foo bar");
        f.handle_key(EditKey::Delete, Modifiers::NONE);
        assert_eq!(f.content_text(), "");
    }

    #[test]
    fn set_secure_entry_marks_dirty_only_on_change() {
        let mut f = field("abc");
        let rev = f.revision();
        f.set_secure_entry(false);
        assert_eq!(f.revision(), rev);
        f.set_secure_entry(true);
        assert_eq!(f.revision(), rev + 1);
        assert_eq!(f.display_text(), "\u{2022}\u{2022}\u{2022}");
    }
}
