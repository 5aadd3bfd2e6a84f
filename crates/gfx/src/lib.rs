//! egui integration for text fields: measurement and shaping, painting,
//! input routing and the pointer cursor-shape stack.

pub mod cursor;
pub mod input;
pub mod paint;
pub mod text_measurer;
pub mod view;

pub use cursor::{CursorShape, CursorShapeStack};
pub use input::{FieldInputCtx, FieldInputResult, FieldInteraction, route_field_input};
pub use paint::PainterSink;
pub use text_measurer::EguiTextMeasurer;
pub use view::{FieldResponse, TextFieldView};
