use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use egui::{Color32, Context, FontId, Galley};
use layout::{FontFamily, TextMeasurer, TextShaper, TextStyle};

/// `egui`-backed adapter for measuring and shaping field text.
pub struct EguiTextMeasurer {
    ctx: Context,
    space_width_cache: RefCell<HashMap<(u32, FontFamily), f32>>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            space_width_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    fn galley_width(&self, text: &str, font_id: FontId) -> f32 {
        // Color does not affect metrics.
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id, Color32::PLACEHOLDER)
                .rect
                .width()
        })
    }

    /// Width of one space, cached per font size and family.
    fn space_width(&self, style: &TextStyle) -> f32 {
        let key = (style.font_px.round().max(0.0) as u32, style.family);
        if let Some(w) = self.space_width_cache.borrow().get(&key).copied() {
            return w;
        }

        let font_id = font_id(style);

        // 1) NBSP is the most stable in egui
        let nbsp = "\u{00A0}";
        let w_nbsp = self.galley_width(nbsp, font_id.clone());

        let w = if w_nbsp.is_finite() && w_nbsp > 0.0 {
            w_nbsp
        } else {
            // 2) Difference method as fallback
            let w_with = self.galley_width(&format!("x{nbsp}x"), font_id.clone());
            let w_without = self.galley_width("xx", font_id);
            let w = (w_with - w_without).max(0.0);

            if w.is_finite() && w > 0.0 {
                w
            } else {
                // 3) Absolute fallback
                (style.font_px * 0.33).max(1.0)
            }
        };

        self.space_width_cache.borrow_mut().insert(key, w);
        w
    }
}

pub(crate) fn font_id(style: &TextStyle) -> FontId {
    match style.family {
        FontFamily::Proportional => FontId::proportional(style.font_px),
        FontFamily::Monospace => FontId::monospace(style.font_px),
    }
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        // Trailing spaces do not widen an egui galley, but the cursor after
        // them must still move.
        let body = text.trim_end_matches(' ');
        let trailing = text.len() - body.len();
        let trailing_w = if trailing > 0 {
            trailing as f32 * self.space_width(style)
        } else {
            0.0
        };

        if body.is_empty() {
            return trailing_w;
        }
        self.galley_width(body, font_id(style)) + trailing_w
    }

    fn line_height(&self, style: &TextStyle) -> f32 {
        style.font_px * 1.2
    }
}

impl TextShaper for EguiTextMeasurer {
    type Glyphs = Arc<Galley>;

    fn shape(&self, text: &str, style: &TextStyle) -> Arc<Galley> {
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id(style), Color32::PLACEHOLDER)
        })
    }
}
