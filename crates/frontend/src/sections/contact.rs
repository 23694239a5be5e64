//! Contact / booking section: clinic details plus a request form with the
//! preferred-date picker.

use crate::shared::components::ui::{Button, Input};
use crate::shared::components::DateInput;
use crate::shared::config::use_site_config;
use crate::shared::date_utils::{format_long_str, today_local};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use calendar::ChangeEvent;
use leptos::prelude::*;
use serde::Serialize;

/// Field values of the booking request form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Preferred date, `YYYY-MM-DD` or empty.
    pub date: String,
}

impl ContactForm {
    /// Stores `value` under the field called `field`. Unknown names are ignored.
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "date" => self.date = value,
            other => log::warn!("contact form has no field `{}`", other),
        }
    }

    pub fn apply_change(&mut self, event: &ChangeEvent) {
        if let Some(field) = event.name() {
            self.set_field(field, event.value().to_string());
        }
    }

    pub fn confirmation_message(&self) -> String {
        let mut message =
            String::from("Thank you for your message! We will get back to you soon.");
        if !self.date.is_empty() {
            message.push_str(&format!(
                " We've noted your preferred date of {}.",
                format_long_str(&self.date)
            ));
        }
        message
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_site_config();
    let toast = use_toast();
    let form = RwSignal::new(ContactForm::default());

    let field = move |name: &'static str| {
        Callback::new(move |value: String| form.update(|f| f.set_field(name, value)))
    };
    let on_date_change = Callback::new(move |event: ChangeEvent| {
        form.update(|f| f.apply_change(&event));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.get_untracked();
        log::info!(
            "booking request submitted: {}",
            serde_json::to_string(&submitted).unwrap_or_default()
        );
        toast.success(submitted.confirmation_message());
        form.set(ContactForm::default());
    };

    let booking = config.booking.clone();
    let today = today_local();
    let clinic = config.clinic;

    let contact_items = vec![
        ("map-pin", "Address", clinic.address, None),
        ("phone", "Phone", clinic.phone, Some(clinic.phone_href)),
        (
            "mail",
            "Email",
            clinic.email.clone(),
            Some(format!("mailto:{}", clinic.email)),
        ),
        ("clock", "Hours", clinic.hours, None),
    ];

    view! {
        <section id="contact" class="contact">
            <div class="contact__grid">
                <div class="contact__info">
                    <h2 class="contact__title">"Get In Touch"</h2>
                    <p class="contact__lead">
                        "Ready to start your journey? Contact us today for a personalized consultation."
                    </p>
                    <ul class="contact__items">
                        {contact_items
                            .into_iter()
                            .map(|(icon_name, title, content, href)| view! {
                                <li class="contact__item">
                                    <div class="contact__item-icon">{icon(icon_name)}</div>
                                    <div>
                                        <div class="contact__item-title">{title}</div>
                                        {match href {
                                            Some(href) => view! {
                                                <a class="contact__item-content" href=href>{content}</a>
                                            }.into_any(),
                                            None => view! {
                                                <div class="contact__item-content">{content}</div>
                                            }.into_any(),
                                        }}
                                    </div>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <form class="contact__form" on:submit=on_submit>
                    <div class="contact__fields">
                        <Input
                            name="name"
                            label="Full Name"
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=field("name")
                            autocomplete="name"
                            required=true
                        />
                        <Input
                            name="email"
                            label="Email Address"
                            input_type="email"
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=field("email")
                            autocomplete="email"
                            required=true
                        />
                        <Input
                            name="phone"
                            label="Phone Number"
                            input_type="tel"
                            class="contact__field--wide"
                            value=Signal::derive(move || form.with(|f| f.phone.clone()))
                            on_input=field("phone")
                            autocomplete="tel"
                        />
                        <div class="contact__field--wide">
                            <DateInput
                                name="date"
                                value=Signal::derive(move || form.with(|f| f.date.clone()))
                                on_change=on_date_change
                                label=booking.label.clone()
                                placeholder=booking.placeholder.clone()
                                date_format=booking.date_format
                                show_clear_button=booking.show_clear_button
                                popover_height=booking.popover_height
                                min_date=booking.resolve_min_date(today)
                                max_date=booking.resolve_max_date(today)
                            />
                        </div>
                    </div>

                    <Button button_type="submit" class="contact__submit">
                        {icon("send")}
                        "Send Message"
                    </Button>
                </form>
            </div>
        </section>
    }
}
