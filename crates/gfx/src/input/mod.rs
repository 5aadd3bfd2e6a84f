mod route;

use edit_core::CursorBlink;

pub use route::{FieldInputCtx, FieldInputResult, route_field_input};

/// Per-field pointer and blink state carried across frames.
#[derive(Clone, Debug, Default)]
pub struct FieldInteraction {
    /// Pointer was over the field last frame (the I-beam is pushed).
    pub hovered: bool,
    /// Primary button went down inside the field and is still held.
    pub dragging: bool,
    pub blink: CursorBlink,
}
