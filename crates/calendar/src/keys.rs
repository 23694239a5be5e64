/// Keys the picker reacts to, mapped from `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Other,
}

impl PickerKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowUp" | "Up" => PickerKey::ArrowUp,
            "ArrowDown" | "Down" => PickerKey::ArrowDown,
            "ArrowLeft" | "Left" => PickerKey::ArrowLeft,
            "ArrowRight" | "Right" => PickerKey::ArrowRight,
            "Enter" => PickerKey::Enter,
            " " | "Spacebar" => PickerKey::Space,
            "Escape" | "Esc" => PickerKey::Escape,
            _ => PickerKey::Other,
        }
    }

    /// Day offset of a focus move, if this key moves focus.
    pub fn focus_offset(&self) -> Option<i64> {
        match self {
            PickerKey::ArrowUp => Some(-7),
            PickerKey::ArrowDown => Some(7),
            PickerKey::ArrowLeft => Some(-1),
            PickerKey::ArrowRight => Some(1),
            _ => None,
        }
    }

    /// Keys that open a closed picker.
    pub fn opens(&self) -> bool {
        matches!(self, PickerKey::Enter | PickerKey::Space | PickerKey::ArrowDown)
    }

    pub fn activates(&self) -> bool {
        matches!(self, PickerKey::Enter | PickerKey::Space)
    }
}
