//! Core types and traits for Stagecraft widgets.
//!
//! This crate provides the pieces every widget is built from:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Styling and drawing: [`Color`], [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Layout: [`Constraints`], [`LayoutState`]
//! - Input: [`PointerEvent`], [`PointerId`], and focus via [`FocusManager`]
//! - Capability traits: [`Measurable`], [`Drawable`], [`PointerTarget`], [`Widget`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod error;
mod event;
pub mod focus;
mod geometry;
mod layout;
pub mod widget;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use error::{WidgetError, WidgetResult};
pub use event::{MouseButton, PointerEvent, PointerId, PointerPhase};
pub use focus::{FocusManager, FocusTable, SharedFocus};
pub use geometry::{Point, Rect, Size};
pub use layout::LayoutState;
pub use widget::{Drawable, LayoutResult, Measurable, PointerTarget, Widget, WidgetId};
