use crate::shared::config::use_site_config;
use crate::shared::date_utils::{short_month_name, today_local};
use leptos::prelude::*;

const HEADLINE: [&str; 4] = ["Elevate", "Your", "Natural", "Beauty"];

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_site_config();
    let booking_badge = format!("Now booking {} consultations", short_month_name(today_local()));

    view! {
        <section id="hero" class="hero">
            <div class="hero__content">
                <span class="hero__badge">{booking_badge}</span>
                <h1 class="hero__title">
                    {HEADLINE
                        .iter()
                        .map(|word| view! { <span class="hero__word">{*word}" "</span> })
                        .collect_view()}
                </h1>
                <p class="hero__subtitle">
                    "Experience luxury aesthetic treatments tailored to enhance your unique features. "
                    {config.clinic.tagline}
                </p>
                <a class="button button--primary hero__cta" href="#contact">
                    "Book a Consultation"
                </a>
            </div>
        </section>
    }
}
