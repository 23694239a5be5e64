use serde::{Deserialize, Serialize};

/// Form-style change notification: `{ target: { name, value } }`.
///
/// `value` is either empty (cleared) or a canonical `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTarget {
    pub name: Option<String>,
    pub value: String,
}

impl ChangeEvent {
    pub fn new(name: Option<String>, value: impl Into<String>) -> Self {
        Self {
            target: ChangeTarget {
                name,
                value: value.into(),
            },
        }
    }

    pub fn cleared(name: Option<String>) -> Self {
        Self::new(name, String::new())
    }

    pub fn name(&self) -> Option<&str> {
        self.target.name.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.target.value
    }

    pub fn is_cleared(&self) -> bool {
        self.target.value.is_empty()
    }
}

/// Receiver of change notifications produced by the picker.
pub trait ChangeSink {
    fn emit(&mut self, event: ChangeEvent);
}

impl ChangeSink for Vec<ChangeEvent> {
    fn emit(&mut self, event: ChangeEvent) {
        self.push(event);
    }
}

/// Adapts a closure into a [`ChangeSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(ChangeEvent)> ChangeSink for FnSink<F> {
    fn emit(&mut self, event: ChangeEvent) {
        (self.0)(event)
    }
}
