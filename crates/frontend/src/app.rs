use crate::sections::{Contact, Footer, Hero};
use crate::shared::config::provide_site_config;
use crate::shared::toast::{ToastService, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Site configuration (clinic details, booking field settings) via context.
    let config = provide_site_config();
    log::debug!("mounting site for {}", config.clinic.name);

    // Toasts are pushed by sections and rendered once at the root.
    provide_context(ToastService::new());

    view! {
        <div class="site">
            <Toaster />
            <main>
                <Hero />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
