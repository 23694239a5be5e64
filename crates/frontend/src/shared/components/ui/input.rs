use leptos::prelude::*;

/// Text input with a floating label
///
/// The label sits inside the field until it is focused or filled, then
/// floats above the border.
#[component]
pub fn Input(
    /// Form field name
    #[prop(into)]
    name: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the new value
    on_input: Callback<String>,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Additional CSS classes on the wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let input_id = format!("field-{}", name);
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    let label_class = move || {
        if focused.get() || !value.with(String::is_empty) {
            "form__label form__label--floating"
        } else {
            "form__label"
        }
    };

    view! {
        <div class=move || format!("form__group {}", additional_class())>
            <label class=label_class for=input_id.clone()>
                {label}
            </label>
            <input
                id=input_id
                name=name
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                required=required
                autocomplete=input_autocomplete
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
