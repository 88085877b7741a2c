//! Top navigation bar

use folio_core::Action;
use leptos::*;

use super::star_button::{ButtonVariant, StarButton};

const NAV_LINKS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Case Study", "#case-study"),
    ("Features", "#features"),
    ("Contact", "#contact"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full bg-white/90 backdrop-blur-md z-50 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    // Wordmark
                    <div class="text-2xl font-light tracking-widest">
                        <span class="font-thin">"Ayo "</span>
                        <span class="text-violet-400 mr-4 font-normal">"Gabriel"</span>
                    </div>

                    // Section links
                    <div class="hidden md:flex space-x-8">
                        {NAV_LINKS.into_iter().map(|(label, href)| view! {
                            <a href=href class="text-gray-600 hover:text-blue-600 transition-colors font-medium">
                                {label}
                            </a>
                        }).collect_view()}
                    </div>

                    <div class="flex space-x-4">
                        <StarButton
                            variant=ButtonVariant::Secondary
                            action=Action::OpenExternal("https://github.com/tallomania")
                        >
                            <span class="flex items-center justify-center">"GitHub"</span>
                        </StarButton>
                        <StarButton action=Action::OpenExternal("https://calendly.com/dripsberry/15-mins-call")>
                            <span class="flex items-center justify-center">"📞 Contact Me"</span>
                        </StarButton>
                    </div>
                </div>
            </div>
        </nav>
    }
}
