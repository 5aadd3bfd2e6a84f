//! Toolkit-neutral key vocabulary understood by [`TextField::handle_key`](crate::TextField::handle_key).

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKey {
    Home,
    End,
    Left,
    Right,
    Delete,
    Backspace,
    Escape,
    Enter,
    SelectAll,
}

/// Modifier state relevant to editing: `shift` extends the selection,
/// `ctrl` moves by word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}
