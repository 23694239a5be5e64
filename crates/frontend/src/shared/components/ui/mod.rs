pub mod button;
pub mod input;

pub use button::{Button, ButtonVariant};
pub use input::Input;
