//! Stagecraft: widget toolkit core.
//!
//! Re-exports the core types at the crate root and the widget library as
//! [`widgets`].
//!
//! ```
//! use stagecraft::widgets::{RangeModel, Slider, SliderStyle};
//! use stagecraft::{FocusTable, Measurable};
//!
//! let range = RangeModel::new(0.0, 1.0, 0.0).expect("valid range");
//! let slider = Slider::new(200.0, range, SliderStyle::default(), FocusTable::shared())
//!     .expect("valid slider");
//! assert_eq!(slider.preferred_width(), 200.0);
//! ```

pub use stagecraft_core::*;
pub use stagecraft_widgets as widgets;
