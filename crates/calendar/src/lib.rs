//! Headless date picker: calendar math, the open/closed state machine,
//! keyboard semantics and value formatting for the booking date field.
//!
//! Nothing in here touches the DOM. The view layer feeds key names,
//! layout measurements and "today" in through [`PickerEnv`], and receives
//! change notifications through a [`ChangeSink`].

pub mod bounds;
pub mod event;
pub mod format;
pub mod grid;
pub mod input;
pub mod keys;
pub mod labels;
pub mod picker;
pub mod placement;

pub use bounds::DateBounds;
pub use event::{ChangeEvent, ChangeSink, ChangeTarget, FnSink};
pub use format::{canonical, DateFormat, DateFormatError};
pub use grid::MonthGrid;
pub use input::RawDateInput;
pub use keys::PickerKey;
pub use picker::{DatePicker, PickerConfig, PickerEnv, Transition};
pub use placement::{Placement, PlacementPolicy, TriggerMetrics};
