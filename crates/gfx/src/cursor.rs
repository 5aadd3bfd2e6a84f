//! Pointer cursor shapes as a stack: the top entry is what the platform shows.

use egui::{Context, CursorIcon};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorShape {
    Arrow,
    Wait,
    Plus,
    ResizeVertical,
    ResizeHorizontal,
    ResizeAll,
    IBeam,
    ResizeNeSw,
    ResizeNwSe,
}

impl CursorShape {
    pub fn icon(self) -> CursorIcon {
        match self {
            CursorShape::Arrow => CursorIcon::Default,
            CursorShape::Wait => CursorIcon::Wait,
            CursorShape::Plus => CursorIcon::Crosshair,
            CursorShape::ResizeVertical => CursorIcon::ResizeVertical,
            CursorShape::ResizeHorizontal => CursorIcon::ResizeHorizontal,
            CursorShape::ResizeAll => CursorIcon::Move,
            CursorShape::IBeam => CursorIcon::Text,
            CursorShape::ResizeNeSw => CursorIcon::ResizeNeSw,
            CursorShape::ResizeNwSe => CursorIcon::ResizeNwSe,
        }
    }
}

/// Explicitly owned cursor-shape stack. The bottom entry is never popped.
#[derive(Clone, Debug)]
pub struct CursorShapeStack {
    shapes: Vec<CursorShape>,
}

impl Default for CursorShapeStack {
    fn default() -> Self {
        Self::new(CursorShape::Arrow)
    }
}

impl CursorShapeStack {
    pub fn new(base: CursorShape) -> Self {
        Self { shapes: vec![base] }
    }

    /// Push `shape` unless it is already somewhere on the stack.
    pub fn push(&mut self, shape: CursorShape) -> bool {
        if self.shapes.contains(&shape) {
            return false;
        }
        self.shapes.push(shape);
        log::trace!(target: "gfx.cursor", "push {shape:?}");
        true
    }

    /// Pop the top shape. The base shape stays.
    pub fn pop(&mut self) -> Option<CursorShape> {
        if self.shapes.len() <= 1 {
            return None;
        }
        let shape = self.shapes.pop();
        log::trace!(target: "gfx.cursor", "pop {shape:?}");
        shape
    }

    pub fn current(&self) -> CursorShape {
        self.shapes.last().copied().unwrap_or(CursorShape::Arrow)
    }

    pub fn depth(&self) -> usize {
        self.shapes.len()
    }

    /// Show the top shape for this frame.
    pub fn refresh(&self, ctx: &Context) {
        let icon = self.current().icon();
        ctx.output_mut(|o| o.cursor_icon = icon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_ignores_shapes_already_on_stack() {
        let mut stack = CursorShapeStack::default();
        assert!(stack.push(CursorShape::IBeam));
        assert!(!stack.push(CursorShape::IBeam));
        assert!(!stack.push(CursorShape::Arrow));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current(), CursorShape::IBeam);
    }

    #[test]
    fn pop_never_removes_base() {
        let mut stack = CursorShapeStack::default();
        stack.push(CursorShape::Wait);
        assert_eq!(stack.pop(), Some(CursorShape::Wait));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.current(), CursorShape::Arrow);
    }

    #[test]
    fn shapes_map_to_egui_icons() {
        assert_eq!(CursorShape::IBeam.icon(), CursorIcon::Text);
        assert_eq!(CursorShape::Arrow.icon(), CursorIcon::Default);
        assert_eq!(CursorShape::ResizeNwSe.icon(), CursorIcon::ResizeNwSe);
    }
}
