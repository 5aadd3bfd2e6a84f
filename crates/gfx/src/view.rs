use edit_core::TextField;
use egui::{Response, Sense, Ui, Vec2};
use layout::{
    LayoutComposer, LayoutOptions, Palette, Point, TextMeasurer, TextStyle, render_field,
};

use crate::EguiTextMeasurer;
use crate::cursor::CursorShapeStack;
use crate::input::{FieldInputCtx, FieldInputResult, FieldInteraction, route_field_input};
use crate::paint::PainterSink;

/// A text field placed in an egui layout: editing state, layout cache and
/// per-frame interaction state in one place.
#[derive(Debug, Default)]
pub struct TextFieldView {
    pub field: TextField,
    pub composer: LayoutComposer,
    pub style: TextStyle,
    pub options: LayoutOptions,
    pub palette: Palette,
    pub interaction: FieldInteraction,
}

pub struct FieldResponse {
    pub response: Response,
    pub input: FieldInputResult,
}

impl TextFieldView {
    pub fn new(field: TextField, options: LayoutOptions) -> Self {
        Self {
            field,
            options,
            ..Self::default()
        }
    }

    /// Allocate space, route this frame's input, then paint.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        measurer: &EguiTextMeasurer,
        cursor_shapes: &mut CursorShapeStack,
    ) -> FieldResponse {
        let size = self.allocation_size(measurer);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let input = route_field_input(FieldInputCtx {
            ui,
            content_rect: rect,
            field: &mut self.field,
            composer: &mut self.composer,
            style: &self.style,
            measurer,
            cursor_shapes,
            interaction: &mut self.interaction,
        });

        let mut sink = PainterSink::new(ui.painter());
        render_field(
            &self.field,
            &mut self.composer,
            &self.style,
            &self.options,
            &self.palette,
            measurer,
            Point::new(rect.min.x, rect.min.y),
            self.interaction.blink.is_visible(),
            &mut sink,
        );

        FieldResponse { response, input }
    }

    /// Viewport size, with auto-sized axes filled from the current text.
    fn allocation_size(&mut self, measurer: &EguiTextMeasurer) -> Vec2 {
        let viewport = self.options.viewport;
        if viewport.width > 0.0 && viewport.height > 0.0 {
            return Vec2::new(viewport.width, viewport.height);
        }
        let layout = self
            .composer
            .compose(&self.field, &self.style, &self.options, measurer);
        let height = if viewport.height > 0.0 {
            viewport.height
        } else {
            layout.content_size.height.max(measurer.line_height(&self.style))
        };
        Vec2::new(layout.content_size.width, height)
    }
}
