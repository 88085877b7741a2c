//! Contact section

use folio_core::Action;
use leptos::*;

use crate::components::{ButtonVariant, StarButton};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6 bg-gray-900 text-white">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">
                    "Ready to Drive Growth?"
                </h2>
                <p class="text-xl text-gray-300 mb-12 max-w-2xl mx-auto">
                    "Let's discuss how I can help your team achieve measurable results "
                    "through data-driven digital marketing strategies."
                </p>

                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <StarButton
                        variant=ButtonVariant::Secondary
                        action=Action::OpenExternal("https://calendly.com/dripsberry/15-mins-call")
                    >
                        <span class="flex items-center justify-center">"📞 Schedule a call"</span>
                    </StarButton>
                    <StarButton action=Action::OpenExternal("mailto:dripsberry@gmail.com")>
                        <span class="flex items-center justify-center">"✉️ Start a Conversation"</span>
                    </StarButton>
                    <StarButton
                        variant=ButtonVariant::Secondary
                        action=Action::OpenExternal("https://www.linkedin.com/in/gabrielberry/")
                    >
                        <span class="flex items-center justify-center">"Connect on LinkedIn"</span>
                    </StarButton>
                </div>

                <div class="mt-16 pt-8 border-t border-gray-700 text-gray-400">
                    <p>"© 2025 Ayorinde Gabriel. Built with Rust, and passion for growth."</p>
                </div>
            </div>
        </section>
    }
}
