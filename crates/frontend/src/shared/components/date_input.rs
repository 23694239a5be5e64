use crate::shared::browser::{event_within, BrowserEnv, DocumentListener};
use crate::shared::date_utils::today_local;
use crate::shared::icons::icon;
use calendar::labels::{cell_aria_label, month_title, DAY_NAMES, DAY_NAMES_SHORT};
use calendar::{
    ChangeEvent, DateFormat, DatePicker, PickerConfig, PickerKey, RawDateInput, Transition,
};
use chrono::{Datelike, NaiveDate};
use leptos::html::Div;
use leptos::prelude::*;

const DATE_INPUT_STYLES: &str = "
.date-input { position: relative; width: 100%; }
.date-input__label {
    position: absolute; left: 16px; top: 16px; z-index: 10;
    pointer-events: none; transition: all 0.2s ease;
    color: rgba(255, 255, 255, 0.5);
}
.date-input__label--floating { top: -8px; font-size: 0.75rem; color: var(--color-pink, #f4a7b9); background: var(--color-dark, #1a1a1a); padding: 0 4px; }
.date-input__trigger {
    display: flex; align-items: center; justify-content: space-between;
    height: 56px; padding: 0 16px; border-radius: 6px; cursor: pointer;
    border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(255, 255, 255, 0.05);
    transition: border-color 0.3s ease;
}
.date-input__trigger:hover { border-color: rgba(255, 255, 255, 0.3); }
.date-input__trigger--active { border-color: var(--color-pink, #f4a7b9); }
.date-input__trigger--disabled { opacity: 0.5; cursor: not-allowed; }
.date-input__value { display: flex; align-items: center; gap: 12px; min-width: 0; color: rgba(255, 255, 255, 0.5); }
.date-input__value--filled { color: #fff; }
.date-input__clear { background: none; border: none; padding: 4px; border-radius: 9999px; color: rgba(255, 255, 255, 0.5); cursor: pointer; }
.date-input__popover {
    position: absolute; left: 0; z-index: 100; min-width: min(100%, 300px);
    padding: 16px; border-radius: 12px; border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(23, 23, 23, 0.95); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    transition: all 0.3s ease-out; opacity: 0; pointer-events: none;
}
.date-input__popover--down { top: 100%; margin-top: 8px; transform: translateY(-8px) scale(0.95); transform-origin: top; }
.date-input__popover--up { bottom: 100%; margin-bottom: 8px; transform: translateY(8px) scale(0.95); transform-origin: bottom; }
.date-input__popover--open { opacity: 1; pointer-events: auto; transform: none; }
.date-input__nav { display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px; color: #fff; }
.date-input__nav button { background: none; border: none; padding: 6px; border-radius: 8px; color: rgba(255, 255, 255, 0.7); cursor: pointer; }
.date-input__weekdays, .date-input__grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; }
.date-input__weekday { text-align: center; padding: 4px 0; font-size: 0.75rem; color: rgba(255, 255, 255, 0.4); }
.date-input__weekday-short { display: none; }
@media (max-width: 640px) {
    .date-input__weekday-short { display: inline; }
    .date-input__weekday-long { display: none; }
}
.date-input__blank { height: 40px; }
.date-input__day {
    height: 40px; border: none; border-radius: 8px; background: none;
    font-size: 0.875rem; color: rgba(255, 255, 255, 0.7); cursor: pointer;
}
.date-input__day:hover { background: rgba(255, 255, 255, 0.1); color: #fff; }
.date-input__day--today { background: rgba(255, 255, 255, 0.1); color: var(--color-pink, #f4a7b9); }
.date-input__day--selected { background: var(--color-pink, #f4a7b9); color: #0a0a0a; font-weight: 700; }
.date-input__day--focused { box-shadow: 0 0 0 2px var(--color-pink, #f4a7b9); }
.date-input__day:disabled { color: rgba(255, 255, 255, 0.2); cursor: not-allowed; background: none; }
.date-input__today {
    width: 100%; margin-top: 12px; padding: 8px 16px; border: none; border-radius: 8px;
    background: rgba(255, 255, 255, 0.05); color: var(--color-pink, #f4a7b9); cursor: pointer;
}
";

/// Runs one picker interaction, then delivers any change events to the host
/// and moves keyboard focus back to the trigger when the transition asks
/// for it. Events are delivered after the signal update has finished.
fn dispatch(
    picker: RwSignal<DatePicker>,
    on_change: Callback<ChangeEvent>,
    trigger_ref: NodeRef<Div>,
    action: impl FnOnce(&mut DatePicker, &mut Vec<ChangeEvent>) -> Transition,
) -> Transition {
    let mut events = Vec::new();
    let transition = picker
        .try_update(|p| action(p, &mut events))
        .unwrap_or(Transition::None);

    for event in events {
        on_change.run(event);
    }
    if transition.returns_focus_to_trigger() {
        if let Some(trigger) = trigger_ref.get_untracked() {
            let _ = trigger.focus();
        }
    }
    transition
}

/// Calendar date picker bound to a form field
///
/// `value` is the host's field value (any parsable date string, empty for
/// none). Selections are reported through `on_change` as
/// `{ target: { name, value } }` with `value` in `YYYY-MM-DD` form, or `""`
/// when cleared.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<ChangeEvent>,
    #[prop(optional, into)]
    name: Option<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Earliest selectable date, inclusive
    #[prop(default = None)]
    min_date: Option<NaiveDate>,
    /// Latest selectable date, inclusive
    #[prop(default = None)]
    max_date: Option<NaiveDate>,
    #[prop(default = true)]
    show_clear_button: bool,
    #[prop(optional)]
    date_format: DateFormat,
    /// Approximate popover height used to decide whether to open upward
    #[prop(optional)]
    popover_height: Option<f64>,
) -> impl IntoView {
    let defaults = PickerConfig::default();
    let config = PickerConfig {
        name,
        placeholder: placeholder.unwrap_or(defaults.placeholder),
        label: label.get_untracked(),
        disabled: disabled.get_untracked().unwrap_or(false),
        min_date,
        max_date,
        show_clear_button,
        date_format,
        popover_height: popover_height.unwrap_or(defaults.popover_height),
    };
    let label_text = config.label.clone();
    let dialog_id = format!("calendar-dialog-{}", uuid::Uuid::new_v4().simple());
    let trigger_id = format!("{}-trigger", dialog_id);

    let root_ref = NodeRef::<Div>::new();
    let trigger_ref = NodeRef::<Div>::new();
    let picker = RwSignal::new(
        DatePicker::new(config, today_local())
            .with_value(&RawDateInput::from(value.get_untracked())),
    );
    let env = move || BrowserEnv::new(root_ref.get_untracked().map(web_sys::Element::from));

    // One-way sync from the host's value
    Effect::new(move |_| {
        let raw = RawDateInput::from(value.get());
        let next = raw.parse();
        if picker.with_untracked(|p| p.selected() != next) {
            picker.update(|p| {
                p.sync_value(&raw, &env());
            });
        }
    });

    Effect::new(move |_| {
        let is_disabled = disabled.get().unwrap_or(false);
        if picker.with_untracked(|p| p.is_disabled() != is_disabled) {
            picker.update(|p| p.set_disabled(is_disabled));
        }
    });

    // Close on pointer-down anywhere outside the widget, for as long as it is mounted
    let outside_listener = StoredValue::new_local(DocumentListener::attach(
        "mousedown",
        move |ev| {
            let inside = root_ref
                .get_untracked()
                .map(|root| event_within(&root, &ev))
                .unwrap_or(false);
            let active = picker.try_with_untracked(|p| p.is_active()).unwrap_or(false);
            if !inside && active {
                picker.try_update(|p| p.dismiss_outside());
            }
        },
    ));
    on_cleanup(move || outside_listener.dispose());

    let on_trigger_click = move |_| {
        dispatch(picker, on_change, trigger_ref, |p, _| p.toggle(&env()));
    };

    let on_trigger_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = PickerKey::from_key(&ev.key());
        let transition = dispatch(picker, on_change, trigger_ref, |p, sink| {
            p.handle_key(key, &env(), sink)
        });
        if transition.prevents_default() {
            ev.prevent_default();
        }
    };

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        dispatch(picker, on_change, trigger_ref, |p, sink| {
            if p.clear(sink) {
                Transition::Cleared
            } else {
                Transition::None
            }
        });
    };

    let trigger_class = move || {
        picker.with(|p| {
            let mut class = String::from("date-input__trigger");
            if p.is_active() {
                class.push_str(" date-input__trigger--active");
            }
            if p.is_disabled() {
                class.push_str(" date-input__trigger--disabled");
            }
            class
        })
    };

    let label_class = move || {
        if picker.with(|p| p.is_active() || p.has_value()) {
            "date-input__label date-input__label--floating"
        } else {
            "date-input__label"
        }
    };

    let value_class = move || {
        if picker.with(|p| p.has_value()) {
            "date-input__value date-input__value--filled"
        } else {
            "date-input__value"
        }
    };

    let popover_class = move || {
        picker.with(|p| {
            let direction = if p.placement().is_upward() {
                "date-input__popover--up"
            } else {
                "date-input__popover--down"
            };
            let open = if p.is_open() { " date-input__popover--open" } else { "" };
            format!("date-input__popover {}{}", direction, open)
        })
    };

    let cells = move || {
        let today = today_local();
        picker.with(|p| {
            p.grid()
                .cells()
                .into_iter()
                .map(|cell| {
                    let Some(date) = cell else {
                        return view! { <div class="date-input__blank" role="presentation"></div> }
                            .into_any();
                    };

                    let selected = p.is_selected(date);
                    let focused = p.is_focused(date);
                    let mut class = String::from("date-input__day");
                    if selected {
                        class.push_str(" date-input__day--selected");
                    } else if date == today {
                        class.push_str(" date-input__day--today");
                    }
                    if focused && !selected {
                        class.push_str(" date-input__day--focused");
                    }

                    view! {
                        <button
                            type="button"
                            class=class
                            role="gridcell"
                            disabled=p.is_date_disabled(date)
                            tabindex={if focused { "0" } else { "-1" }}
                            aria-label=cell_aria_label(date)
                            aria-selected=selected.to_string()
                            on:click=move |_| {
                                dispatch(picker, on_change, trigger_ref, |p, sink| p.select(date, sink));
                            }
                        >
                            {date.day()}
                        </button>
                    }
                    .into_any()
                })
                .collect_view()
        })
    };

    view! {
        <style>{DATE_INPUT_STYLES}</style>
        <div class="date-input" node_ref=root_ref>
            {label_text.map(|text| view! {
                <label class=label_class for=trigger_id.clone()>
                    {text}
                </label>
            })}

            <div
                node_ref=trigger_ref
                id=trigger_id.clone()
                class=trigger_class
                on:click=on_trigger_click
                on:keydown=on_trigger_keydown
                tabindex=move || { if picker.with(|p| p.is_disabled()) { "-1" } else { "0" } }
                role="combobox"
                aria-expanded=move || picker.with(|p| p.is_open()).to_string()
                aria-haspopup="dialog"
                aria-controls=dialog_id.clone()
                aria-disabled=move || picker.with(|p| p.is_disabled()).to_string()
            >
                <div class=value_class>
                    {icon("calendar")}
                    <span>{move || picker.with(|p| p.trigger_text())}</span>
                </div>

                <Show when=move || picker.with(|p| p.shows_clear_button())>
                    <button
                        type="button"
                        class="date-input__clear"
                        aria-label="Clear selected date"
                        on:click=on_clear
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>

            <div id=dialog_id class=popover_class role="dialog" aria-label="Calendar">
                <div class="date-input__nav">
                    <button
                        type="button"
                        aria-label="Previous month"
                        on:click=move |_| picker.update(|p| { p.navigate_month(-1); })
                    >
                        {icon("chevron-left")}
                    </button>
                    <h3 aria-live="polite">
                        {move || picker.with(|p| month_title(p.current_month()))}
                    </h3>
                    <button
                        type="button"
                        aria-label="Next month"
                        on:click=move |_| picker.update(|p| { p.navigate_month(1); })
                    >
                        {icon("chevron-right")}
                    </button>
                </div>

                <div class="date-input__weekdays" aria-hidden="true">
                    {DAY_NAMES
                        .iter()
                        .zip(DAY_NAMES_SHORT.iter())
                        .map(|(long, short)| view! {
                            <div class="date-input__weekday">
                                <span class="date-input__weekday-short">{*short}</span>
                                <span class="date-input__weekday-long">{*long}</span>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="date-input__grid" role="grid">
                    {cells}
                </div>

                <button
                    type="button"
                    class="date-input__today"
                    on:click=move |_| {
                        dispatch(picker, on_change, trigger_ref, |p, sink| p.select_today(&env(), sink));
                    }
                >
                    "Today"
                </button>
            </div>
        </div>
    }
}
