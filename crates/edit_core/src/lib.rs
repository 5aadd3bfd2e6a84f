//! # edit_core
//!
//! UI-agnostic editing core for single-line text fields.
//!
//! - [`TextField`]: buffer, cursor, selection and IME attachment state, with
//!   every editing transition (insert, delete, navigation, pointer).
//! - [`FieldStore`]: several fields keyed by [`FieldId`], at most one of them
//!   attached to the input method.
//! - [`ImeDelegate`]: optional hooks that can veto edits and IME transitions.
//! - Text metrics ([`char_count`], [`byte_offset_of_char`]), word boundaries
//!   and pointer hit testing ([`offset_at_x`]).
//!
//! ## Design Principles
//!
//! Offsets are logical characters, not bytes. This crate does no layout or
//! drawing and does not depend on any graphics framework: text measurement
//! is injected as a closure wherever a pixel coordinate must be mapped to a
//! character offset.
//!
//! ```
//! use edit_core::{FieldConfig, Selection, TextField};
//!
//! let mut field = TextField::new(FieldConfig {
//!     initial_text: "abc".into(),
//!     ..FieldConfig::default()
//! });
//! field.set_selection(0, Some(2));
//! field.insert_text("X");
//!
//! assert_eq!(field.content_text(), "Xc");
//! assert_eq!(field.cursor(), 1);
//! assert_eq!(field.selection(), Selection::None);
//! ```

mod blink;
mod buffer;
mod config;
mod delegate;
mod event;
mod field;
mod hit;
mod id;
mod selection;
mod store;
mod text;
mod word;

pub use blink::CursorBlink;
pub use buffer::TextBuffer;
pub use config::FieldConfig;
pub use delegate::{ImeDelegate, Verdict};
pub use event::{EditKey, Modifiers};
pub use field::{EditOutcome, TextField};
pub use hit::offset_at_x;
pub use id::FieldId;
pub use selection::{Selection, SelectionRange};
pub use store::{FieldStore, FocusError};
pub use text::{
    DEFAULT_MASK_GLYPH, byte_offset_of_char, char_byte_range, char_count, char_slice,
    char_start_offset, count_char_starts, mask_text, rebuild_char_starts, truncate_at_newline,
};
pub use word::{CharClass, next_word_boundary, prev_word_boundary};
