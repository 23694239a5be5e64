use crate::shared::components::ui::{Button, ButtonVariant};
use crate::shared::config::use_site_config;
use crate::shared::date_utils::today_local;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use chrono::Datelike;
use leptos::prelude::*;

const QUICK_LINKS: [(&str, &str); 2] = [("Home", "#hero"), ("Contact", "#contact")];

/// Page footer. Also the landmark the date picker measures against so its
/// popover never opens on top of it.
#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let toast = use_toast();
    let email = RwSignal::new(String::new());

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.with_untracked(|e| e.trim().is_empty()) {
            return;
        }
        log::info!("newsletter subscription: {}", email.get_untracked());
        toast.success("Thank you for subscribing!");
        email.set(String::new());
    };

    let year = today_local().year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div>
                    <a href="#hero" class="footer__brand">{config.clinic.name.clone()}</a>
                    <p class="footer__tagline">{config.clinic.tagline.clone()}</p>
                </div>

                <nav aria-label="Quick links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {QUICK_LINKS
                            .iter()
                            .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </nav>

                <div>
                    <h4>"Newsletter"</h4>
                    <form class="footer__subscribe" on:submit=on_subscribe>
                        <input
                            type="email"
                            placeholder="Your email"
                            aria-label="Your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Button button_type="submit" variant=ButtonVariant::Ghost>
                            {icon("send")}
                        </Button>
                    </form>
                </div>
            </div>

            <p class="footer__copyright">
                {format!("© {} {}. All rights reserved.", year, config.clinic.name)}
            </p>
        </footer>
    }
}
