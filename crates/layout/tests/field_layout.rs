//! Editing plus layout: pointer input mapped through the composer's scroll.

use edit_core::{FieldConfig, TextField};
use layout::{
    LayoutComposer, LayoutOptions, MonospaceMeasurer, Palette, Point, Rectangle, Rgba,
    SpriteSink, TextStyle, pointer_down_at, pointer_drag_to, render_field,
};

fn setup(text: &str) -> (TextField, LayoutComposer, TextStyle, MonospaceMeasurer) {
    let mut field = TextField::new(FieldConfig {
        initial_text: text.into(),
        ..FieldConfig::default()
    });
    field.attach_ime();
    let style = TextStyle {
        font_px: 10.0,
        ..TextStyle::default()
    };
    let measurer = MonospaceMeasurer {
        advance_em: 1.0,
        line_height_em: 2.0,
    };
    (field, LayoutComposer::new(), style, measurer)
}

#[derive(Default)]
struct CountingSink {
    glyph_draws: usize,
    fills: Vec<(Rectangle, Rgba)>,
}

impl SpriteSink<String> for CountingSink {
    fn draw_glyphs(&mut self, _glyphs: &String, _origin: Point, _clip: Rectangle, _color: Rgba) {
        self.glyph_draws += 1;
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Rgba) {
        self.fills.push((rect, color));
    }
}

#[test]
fn click_in_scrolled_field_hits_text_space() {
    let (mut field, mut composer, style, measurer) = setup("0123456789");
    let opts = LayoutOptions::default().with_viewport(50.0, 20.0);
    composer.compose(&field, &style, &opts, &measurer);
    // Text scrolled by -51 (room for the cursor): local x 12 is text x 63.
    pointer_down_at(&mut field, &composer, 12.0, false, &style, &measurer);
    assert_eq!(field.cursor(), 6);

    composer.compose(&field, &style, &opts, &measurer);
    pointer_drag_to(&mut field, &composer, 48.0, &style, &measurer);
    assert_eq!(field.selected_text(), "6789");
}

#[test]
fn render_field_emits_selection_and_cursor() {
    let (mut field, mut composer, style, measurer) = setup("hello");
    field.set_selection(1, Some(3));
    let palette = Palette::default();
    let mut sink = CountingSink::default();

    render_field(
        &field,
        &mut composer,
        &style,
        &LayoutOptions::default(),
        &palette,
        &measurer,
        Point::new(5.0, 5.0),
        true,
        &mut sink,
    );

    assert_eq!(sink.glyph_draws, 2);
    assert_eq!(
        sink.fills,
        vec![
            (Rectangle::new(15.0, 5.0, 20.0, 20.0), palette.selection_fill),
            (Rectangle::new(35.0, 5.0, 1.0, 20.0), palette.cursor),
        ]
    );
}
