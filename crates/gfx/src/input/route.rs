use std::time::Duration;

use edit_core::{EditKey, EditOutcome, Modifiers, TextField};
use egui::{Event, Key, PointerButton, Rect, Ui};
use layout::{LayoutComposer, TextStyle, pointer_down_at, pointer_drag_to};

use super::FieldInteraction;
use crate::EguiTextMeasurer;
use crate::cursor::{CursorShape, CursorShapeStack};

pub struct FieldInputCtx<'a> {
    pub ui: &'a Ui,
    /// Screen rect of the field's content box.
    pub content_rect: Rect,
    pub field: &'a mut TextField,
    pub composer: &'a mut LayoutComposer,
    pub style: &'a TextStyle,
    pub measurer: &'a EguiTextMeasurer,
    pub cursor_shapes: &'a mut CursorShapeStack,
    pub interaction: &'a mut FieldInteraction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldInputResult {
    /// Text, cursor, selection or attachment changed this frame.
    pub changed: bool,
    /// A newline was typed.
    pub submitted: bool,
}

impl FieldInputResult {
    fn record(&mut self, outcome: EditOutcome) {
        self.changed |= outcome.changed();
        self.submitted |= outcome == EditOutcome::Submitted;
    }
}

fn edit_key(key: Key, modifiers: egui::Modifiers) -> Option<EditKey> {
    Some(match key {
        Key::Home => EditKey::Home,
        Key::End => EditKey::End,
        Key::ArrowLeft => EditKey::Left,
        Key::ArrowRight => EditKey::Right,
        Key::Delete => EditKey::Delete,
        Key::Backspace => EditKey::Backspace,
        Key::Escape => EditKey::Escape,
        Key::Enter => EditKey::Enter,
        Key::A if modifiers.command || modifiers.ctrl => EditKey::SelectAll,
        _ => return None,
    })
}

fn edit_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        // Word jumps: Ctrl on Windows/Linux, Option on macOS.
        ctrl: modifiers.ctrl || modifiers.alt,
    }
}

/// Feed one frame of egui input into `field`.
pub fn route_field_input(ctx: FieldInputCtx<'_>) -> FieldInputResult {
    let FieldInputCtx {
        ui,
        content_rect,
        field,
        composer,
        style,
        measurer,
        cursor_shapes,
        interaction,
    } = ctx;

    let mut result = FieldInputResult::default();

    // Hover: I-beam while over the field, cursor bar dropped on leave.
    let hovered = ui
        .input(|i| i.pointer.hover_pos())
        .is_some_and(|p| content_rect.contains(p));
    if hovered && !interaction.hovered {
        cursor_shapes.push(CursorShape::IBeam);
    } else if !hovered && interaction.hovered {
        if cursor_shapes.current() == CursorShape::IBeam {
            cursor_shapes.pop();
        }
        composer.drop_cursor();
    }
    interaction.hovered = hovered;
    cursor_shapes.refresh(ui.ctx());

    // Pointer down -> attach + place cursor, or detach when outside.
    let (pressed, press_pos, double, shift) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.interact_pos(),
            i.pointer.button_double_clicked(PointerButton::Primary),
            i.modifiers.shift,
        )
    });
    if pressed {
        match press_pos {
            Some(pos) if content_rect.contains(pos) => {
                result.record(field.attach_ime());
                let local_x = pos.x - content_rect.min.x;
                result.record(pointer_down_at(
                    field, composer, local_x, shift, style, measurer,
                ));
                interaction.dragging = true;
            }
            _ => {
                result.record(field.detach_ime());
                interaction.dragging = false;
            }
        }
    } else if interaction.dragging {
        let (down, pos) = ui.input(|i| (i.pointer.primary_down(), i.pointer.latest_pos()));
        if !down {
            interaction.dragging = false;
        } else if let Some(pos) = pos {
            let local_x = pos.x - content_rect.min.x;
            result.record(pointer_drag_to(field, composer, local_x, style, measurer));
        }
    }

    // egui reports a double click on the second release, after the press
    // above already placed the cursor.
    if double && hovered && field.is_attached() {
        result.record(field.double_click());
        interaction.dragging = false;
    }

    // Keys and text go to the field only while it is attached.
    if field.is_attached() {
        ui.input(|i| {
            // winit may report Enter both as a key and as "\n"/"\r" text.
            let saw_text_newline = i
                .events
                .iter()
                .any(|e| matches!(e, Event::Text(t) if t.contains(['\n', '\r'])));

            for evt in &i.events {
                match evt {
                    Event::Text(t) => {
                        let t = t.replace("\r\n", "\n").replace('\r', "\n");
                        result.record(field.handle_text(&t));
                    }
                    Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => {
                        if *key == Key::Enter && saw_text_newline {
                            continue;
                        }
                        if let Some(k) = edit_key(*key, *modifiers) {
                            result.record(field.handle_key(k, edit_modifiers(*modifiers)));
                        }
                    }
                    _ => {}
                }
            }
        });
    }

    // Blink: restart on change, otherwise advance by the frame time.
    if result.changed {
        interaction.blink.reset();
    } else {
        let dt = ui.input(|i| i.stable_dt).max(0.0);
        interaction.blink.tick(Duration::from_secs_f32(dt));
    }
    if field.is_attached() {
        ui.ctx().request_repaint_after(interaction.blink.interval());
    }

    if result.changed {
        log::trace!(
            target: "gfx.input",
            "field changed: cursor={} attached={}",
            field.cursor(),
            field.is_attached()
        );
    }
    result
}
