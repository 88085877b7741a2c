//! Hero section

use folio_core::Action;
use leptos::*;

use crate::components::{ButtonVariant, RotatingText, StarButton};

#[component]
pub fn HeroSection() -> impl IntoView {
    let titles = vec![
        "SEO Growth Strategist".to_string(),
        "Digital Marketing Expert".to_string(),
        "Data-Driven Optimizer".to_string(),
    ];

    view! {
        <section id="hero" class="pt-32 pb-10 px-6">
            <div class="max-w-7xl mx-auto text-center">
                <h1 class="text-4xl md:text-6xl font-normal mb-6 text-gray-800">
                    <RotatingText
                        texts=titles
                        class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent"
                    />
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 mb-12 max-w-4xl mx-auto leading-relaxed">
                    "Transforming struggling websites into search engine champions through "
                    "data-driven strategies, advanced analytics, and conversion optimization."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <StarButton action=Action::ScrollTo("case-study")>
                        <span class="flex items-center justify-center">"See My Work in Action ⌄"</span>
                    </StarButton>
                    <StarButton
                        variant=ButtonVariant::Secondary
                        action=Action::OpenExternal("https://drive.google.com/file/d/1JDfrJ3ucnWJ8Z9uzmYJSKuUXtDP6HhXJ/view?usp=sharing")
                    >
                        <span class="flex items-center justify-center">"View Resume ↗"</span>
                    </StarButton>
                </div>
            </div>
        </section>
    }
}
