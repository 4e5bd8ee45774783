//! Widget implementations for Stagecraft.
//!
//! The [`Slider`] is assembled from small parts that are usable on their own:
//! [`RangeModel`] for the value, [`pointer`] for pointer math and
//! [`ChangeNotifier`] for the listener slot.

pub mod config;
pub mod notifier;
pub mod pointer;
pub mod range;
pub mod slider;
pub mod style;

pub use config::{ConfigError, SliderConfig, StyleConfig};
pub use notifier::{ChangeNotifier, ValueChangedListener};
pub use pointer::{
    compute_slider_pos, position_to_value, try_position_to_value, value_to_position,
    PointerInteraction,
};
pub use range::RangeModel;
pub use slider::{DragState, Slider};
pub use style::SliderStyle;
