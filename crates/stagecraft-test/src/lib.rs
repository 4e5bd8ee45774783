//! Testing tools for Stagecraft widgets.
//!
//! - [`Harness`]: places a widget on a simulated stage with its own focus
//!   table and replays pointer gestures in stage coordinates
//! - [`ValueRecorder`]: a listener that records every notification

mod harness;
mod recorder;

pub use harness::Harness;
pub use recorder::ValueRecorder;
