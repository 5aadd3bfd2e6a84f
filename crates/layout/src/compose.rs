//! Turns a [`TextField`] into draw geometry: text offset, selection
//! highlight and cursor rect.
//!
//! All rects are in field-local, y-down coordinates with the origin at the
//! top-left of the content box.

use std::ops::Range;

use edit_core::{TextField, char_slice, offset_at_x};

use crate::geometry::{Point, Rectangle, Size};
use crate::options::{HAlign, LayoutOptions, VAlign};
use crate::style::TextStyle;
use crate::text::TextMeasurer;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldLayout {
    /// Size of the content box (the viewport, or the text when auto-sized).
    pub content_size: Size,
    /// Measured size of the display text.
    pub text_size: Size,
    /// Where the text origin sits inside the content box. `x` goes negative
    /// once the text is scrolled left.
    pub text_offset: Point,
    /// Characters at least partly inside the content box.
    pub visible_chars: Range<usize>,
    /// Selection highlight, clipped to the content box.
    pub selection: Option<Rectangle>,
    /// Cursor bar. `None` while detached, hidden, or after pointer leave.
    pub cursor: Option<Rectangle>,
    pub showing_placeholder: bool,
}

impl FieldLayout {
    pub fn content_rect(&self) -> Rectangle {
        Rectangle::from_origin_size(Point::ZERO, self.content_size)
    }
}

/// Everything a layout depends on. If none of it changed, the cached
/// layout is reused.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LayoutKey {
    revision: u64,
    style: TextStyle,
    options: LayoutOptions,
}

/// Per-field layout state: the persisted horizontal scroll and the last
/// computed [`FieldLayout`].
#[derive(Clone, Debug, Default)]
pub struct LayoutComposer {
    scroll_x: f32,
    cached: Option<(LayoutKey, FieldLayout)>,
}

impl LayoutComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout for `field`, recomputed only when the field revision, style or
    /// options changed since the last call.
    pub fn compose(
        &mut self,
        field: &TextField,
        style: &TextStyle,
        options: &LayoutOptions,
        measurer: &dyn TextMeasurer,
    ) -> &FieldLayout {
        let key = LayoutKey {
            revision: field.revision(),
            style: *style,
            options: *options,
        };
        let layout = match self.cached.take() {
            Some((cached_key, layout)) if cached_key == key => layout,
            _ => self.recompute(field, style, options, measurer),
        };
        &self.cached.insert((key, layout)).1
    }

    pub fn is_stale(&self, field: &TextField, style: &TextStyle, options: &LayoutOptions) -> bool {
        !matches!(
            &self.cached,
            Some((key, _)) if key.revision == field.revision()
                && key.style == *style
                && key.options == *options
        )
    }

    /// Last computed layout, if any.
    pub fn layout(&self) -> Option<&FieldLayout> {
        self.cached.as_ref().map(|(_, layout)| layout)
    }

    /// Drop the cursor rect until the next recompute (pointer left the field).
    pub fn drop_cursor(&mut self) {
        if let Some((_, layout)) = &mut self.cached {
            layout.cursor = None;
        }
    }

    /// Force the next [`compose`](Self::compose) to recompute.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Current horizontal scroll (always `<= 0`).
    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    /// Convert a content-box x coordinate into text space for hit testing.
    pub fn field_x(&self, local_x: f32) -> f32 {
        let offset = self.layout().map_or(self.scroll_x, |l| l.text_offset.x);
        local_x - offset
    }

    fn recompute(
        &mut self,
        field: &TextField,
        style: &TextStyle,
        options: &LayoutOptions,
        measurer: &dyn TextMeasurer,
    ) -> FieldLayout {
        let text = field.display_text();
        let showing_placeholder = field.showing_placeholder();
        let line_h = measurer.line_height(style);
        let measure = |s: &str| measurer.measure(s, style).max(0.0);

        let text_size = Size::new(measure(text), line_h);
        let content_size = Size::new(
            if options.viewport.width > 0.0 {
                options.viewport.width
            } else {
                text_size.width + options.cursor_width
            },
            if options.viewport.height > 0.0 {
                options.viewport.height
            } else {
                text_size.height
            },
        );

        let cursor = if showing_placeholder { 0 } else { field.cursor() };
        let cursor_px = measure(char_slice(text, 0, cursor));

        // Horizontal: align when the text and a trailing cursor fit,
        // otherwise scroll just enough to keep the cursor inside the box.
        let cursor_w = options.cursor_width;
        let offset_x = if content_size.width >= text_size.width + cursor_w {
            self.scroll_x = 0.0;
            match options.h_align {
                HAlign::Left => 0.0,
                HAlign::Center => (content_size.width - text_size.width) * 0.5,
                HAlign::Right => content_size.width - text_size.width,
            }
        } else {
            let mut scroll = self.scroll_x;
            if cursor_px + scroll + cursor_w > content_size.width {
                scroll = content_size.width - cursor_w - cursor_px;
            } else if cursor_px + scroll < 0.0 {
                scroll = -cursor_px;
            }
            scroll = scroll.clamp(content_size.width - text_size.width - cursor_w, 0.0);
            self.scroll_x = scroll;
            scroll
        };

        let offset_y = match options.v_align {
            VAlign::Top => 0.0,
            VAlign::Center => (content_size.height - text_size.height) * 0.5,
            VAlign::Bottom => content_size.height - text_size.height,
        };
        let text_offset = Point::new(offset_x, offset_y);
        let content_rect = Rectangle::from_origin_size(Point::ZERO, content_size);

        let selection = if showing_placeholder {
            None
        } else {
            field.selection().range().and_then(|r| {
                let x0 = measure(char_slice(text, 0, r.start));
                let x1 = measure(char_slice(text, 0, r.end));
                Rectangle::new(offset_x + x0, offset_y, x1 - x0, text_size.height)
                    .intersect(&content_rect)
            })
        };

        let cursor_rect = (options.show_cursor && field.is_attached()).then(|| {
            let max_x = (content_size.width - options.cursor_width).max(0.0);
            let x = (offset_x + cursor_px).clamp(0.0, max_x);
            Rectangle::new(x, offset_y, options.cursor_width, text_size.height)
        });

        let visible_chars = if showing_placeholder {
            0..0
        } else {
            let first = offset_at_x(text, -offset_x, measure);
            let last = offset_at_x(text, content_size.width - offset_x, measure);
            // offset_at_x snaps to the nearest boundary; widen to partly
            // visible characters.
            first.saturating_sub(1)..(last + 1).min(field.char_count())
        };

        log::trace!(
            target: "layout.compose",
            "rev={} text_w={} offset=({}, {}) cursor_px={}",
            field.revision(),
            text_size.width,
            offset_x,
            offset_y,
            cursor_px
        );

        FieldLayout {
            content_size,
            text_size,
            text_offset,
            visible_chars,
            selection,
            cursor: cursor_rect,
            showing_placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMeasurer;
    use edit_core::FieldConfig;

    /// 10 px per character, 20 px line height.
    fn measurer() -> MonospaceMeasurer {
        MonospaceMeasurer {
            advance_em: 1.0,
            line_height_em: 2.0,
        }
    }

    fn style() -> TextStyle {
        TextStyle {
            font_px: 10.0,
            ..TextStyle::default()
        }
    }

    fn attached(text: &str) -> TextField {
        let mut f = TextField::new(FieldConfig {
            initial_text: text.into(),
            ..FieldConfig::default()
        });
        f.attach_ime();
        f
    }

    #[test]
    fn auto_size_fits_text_and_cursor() {
        let f = attached("abc");
        let mut c = LayoutComposer::new();
        let l = c.compose(&f, &style(), &LayoutOptions::default(), &measurer());
        assert_eq!(l.text_size, Size::new(30.0, 20.0));
        assert_eq!(l.content_size, Size::new(31.0, 20.0));
        assert_eq!(l.text_offset, Point::ZERO);
        assert_eq!(l.cursor, Some(Rectangle::new(30.0, 0.0, 1.0, 20.0)));
    }

    #[test]
    fn alignment_when_text_fits() {
        let f = attached("ab");
        let mut c = LayoutComposer::new();
        let base = LayoutOptions::default().with_viewport(100.0, 40.0);

        let l = c.compose(&f, &style(), &base.with_align(HAlign::Center, VAlign::Center), &measurer());
        assert_eq!(l.text_offset, Point::new(40.0, 10.0));

        let l = c.compose(&f, &style(), &base.with_align(HAlign::Right, VAlign::Bottom), &measurer());
        assert_eq!(l.text_offset, Point::new(80.0, 20.0));
    }

    #[test]
    fn overflow_scrolls_to_keep_cursor_visible() {
        let mut f = attached("0123456789");
        let mut c = LayoutComposer::new();
        let opts = LayoutOptions::default().with_viewport(50.0, 20.0);

        // Cursor at end (100 px): text shifts left by 51 so the 1 px cursor
        // sits after the last glyph instead of on top of it.
        let l = c.compose(&f, &style(), &opts, &measurer());
        assert_eq!(l.text_offset.x, -51.0);
        assert_eq!(l.cursor.map(|r| r.x), Some(49.0));
        let last_glyph_right = l.text_offset.x + 100.0;
        assert!(l.cursor.is_some_and(|r| r.x >= last_glyph_right));

        // Moving left inside the box keeps the scroll.
        f.move_cursor_to(7, false);
        let l = c.compose(&f, &style(), &opts, &measurer());
        assert_eq!(l.text_offset.x, -51.0);
        assert_eq!(l.cursor.map(|r| r.x), Some(19.0));

        // Moving past the left edge scrolls just far enough.
        f.move_cursor_to(2, false);
        let l = c.compose(&f, &style(), &opts, &measurer());
        assert_eq!(l.text_offset.x, -20.0);
        assert_eq!(l.cursor.map(|r| r.x), Some(0.0));
        assert_eq!(c.field_x(5.0), 25.0);
    }

    #[test]
    fn selection_rect_is_clipped_to_content() {
        let mut f = attached("0123456789");
        let mut c = LayoutComposer::new();
        let opts = LayoutOptions::default().with_viewport(50.0, 20.0);
        f.set_selection(2, None);
        let l = c.compose(&f, &style(), &opts, &measurer());
        // Scrolled by -51; selection 20..100 maps to -31..49, clipped to 0..49.
        assert_eq!(l.selection, Some(Rectangle::new(0.0, 0.0, 49.0, 20.0)));
    }

    #[test]
    fn placeholder_has_no_selection_and_cursor_at_start() {
        let mut f = TextField::new(FieldConfig {
            placeholder: "hint".into(),
            ..FieldConfig::default()
        });
        f.attach_ime();
        let mut c = LayoutComposer::new();
        let l = c.compose(&f, &style(), &LayoutOptions::default().with_viewport(100.0, 20.0), &measurer());
        assert!(l.showing_placeholder);
        assert_eq!(l.text_size.width, 40.0);
        assert_eq!(l.selection, None);
        assert_eq!(l.cursor.map(|r| r.x), Some(0.0));
    }

    #[test]
    fn empty_text_uses_line_height() {
        let f = attached("");
        let mut c = LayoutComposer::new();
        let l = c.compose(&f, &style(), &LayoutOptions::default(), &measurer());
        assert_eq!(l.text_size, Size::new(0.0, 20.0));
        assert_eq!(l.visible_chars, 0..0);
    }

    #[test]
    fn detached_field_has_no_cursor() {
        let f = TextField::new(FieldConfig {
            initial_text: "abc".into(),
            ..FieldConfig::default()
        });
        let mut c = LayoutComposer::new();
        let l = c.compose(&f, &style(), &LayoutOptions::default(), &measurer());
        assert_eq!(l.cursor, None);
    }

    #[test]
    fn recompute_only_when_stale() {
        let mut f = attached("abc");
        let mut c = LayoutComposer::new();
        let opts = LayoutOptions::default();
        assert!(c.is_stale(&f, &style(), &opts));
        c.compose(&f, &style(), &opts, &measurer());
        assert!(!c.is_stale(&f, &style(), &opts));

        c.drop_cursor();
        assert_eq!(c.compose(&f, &style(), &opts, &measurer()).cursor, None);

        f.move_cursor_home(false);
        assert!(c.is_stale(&f, &style(), &opts));
        assert!(c.compose(&f, &style(), &opts, &measurer()).cursor.is_some());
    }

    #[test]
    fn visible_chars_cover_scrolled_window() {
        let f = attached("0123456789");
        let mut c = LayoutComposer::new();
        let opts = LayoutOptions::default().with_viewport(35.0, 20.0);
        let l = c.compose(&f, &style(), &opts, &measurer());
        // Offset -66: 66..100 px is visible, i.e. chars 6..10.
        assert_eq!(l.text_offset.x, -66.0);
        assert_eq!(l.visible_chars, 6..10);
    }
}
