//! Browser glue for the date picker: layout measurement, local "today" and
//! document-level listeners tied to a component's lifetime.

use crate::shared::date_utils::today_local;
use calendar::{PickerEnv, TriggerMetrics};
use chrono::NaiveDate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, Node};

/// Selector of the page landmark the popover must not overlap.
const FOOTER_SELECTOR: &str = "footer";

/// [`PickerEnv`] backed by the live DOM.
pub struct BrowserEnv {
    root: Option<Element>,
}

impl BrowserEnv {
    pub fn new(root: Option<Element>) -> Self {
        Self { root }
    }
}

impl PickerEnv for BrowserEnv {
    fn today(&self) -> NaiveDate {
        today_local()
    }

    fn measure(&self) -> Option<TriggerMetrics> {
        let root = self.root.as_ref()?;
        let window = window()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let rect = root.get_bounding_client_rect();

        let footer_top = window
            .document()
            .and_then(|doc| doc.query_selector(FOOTER_SELECTOR).ok().flatten())
            .map(|footer| footer.get_bounding_client_rect().top());

        Some(TriggerMetrics {
            trigger_bottom: rect.bottom(),
            viewport_height,
            footer_top,
        })
    }
}

/// Whether `event` originated inside `root`.
pub fn event_within(root: &Element, event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .map(|node| root.contains(Some(&node)))
        .unwrap_or(false)
}

/// A listener on `document` that is removed when the guard is dropped.
pub struct DocumentListener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl DocumentListener {
    pub fn attach(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let document = window()?.document()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        if let Err(e) =
            document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to attach document {} listener: {:?}", event, e);
            return None;
        }

        Some(Self { event, closure })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(document) = window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}
