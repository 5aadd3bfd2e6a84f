#![no_main]

use edit_core::{
    EditKey, FieldConfig, Modifiers, Selection, TextField, char_count, mask_text,
};
use libfuzzer_sys::fuzz_target;

const KEYS: [EditKey; 9] = [
    EditKey::Home,
    EditKey::End,
    EditKey::Left,
    EditKey::Right,
    EditKey::Delete,
    EditKey::Backspace,
    EditKey::Escape,
    EditKey::Enter,
    EditKey::SelectAll,
];

const SNIPPETS: [&str; 6] = ["a", "héllo", "€", " ", "x\ny", "wörld !"];

fn check(field: &TextField) {
    let count = field.char_count();
    assert_eq!(count, char_count(field.content_text()));
    assert!(field.cursor() <= count);
    if let Selection::Range(r) = field.selection() {
        assert!(r.start < r.end && r.end <= count);
    }
    if field.buffer().is_secure_entry() && !field.showing_placeholder() {
        assert_eq!(field.display_text(), mask_text(count, field.buffer().mask_glyph()));
    }
}

fuzz_target!(|data: &[u8]| {
    let mut field = TextField::new(FieldConfig::default());
    let measure = |s: &str| s.chars().count() as f32 * 8.0;

    for chunk in data.chunks(2) {
        let op = chunk[0];
        let arg = chunk.get(1).copied().unwrap_or(0);
        let mods = Modifiers {
            shift: arg & 1 != 0,
            ctrl: arg & 2 != 0,
        };
        match op % 10 {
            0 => {
                field.attach_ime();
            }
            1 => {
                field.handle_text(SNIPPETS[arg as usize % SNIPPETS.len()]);
            }
            2 => {
                field.handle_key(KEYS[arg as usize % KEYS.len()], mods);
            }
            3 => {
                field.set_selection(arg as usize % 8, Some((arg as usize >> 3) % 8));
            }
            4 => {
                field.pointer_down(arg as f32, mods.shift, measure);
            }
            5 => {
                field.pointer_drag(arg as f32, measure);
            }
            6 => {
                field.double_click();
            }
            7 => {
                field.set_secure_entry(arg & 1 != 0);
            }
            8 => {
                field.move_cursor_to(arg as usize, mods.shift);
            }
            _ => {
                field.detach_ime();
            }
        }
        check(&field);
    }
});
