//! Main application component

use leptos::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use crate::components::SiteNav;
use crate::sections::{
    AboutSection, CaseStudySection, ContactSection, FeaturesSection, HeroSection,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio-site.css"/>
        <Title text="Ayo Gabriel | SEO Growth Strategist"/>
        <div class="min-h-screen bg-gradient-to-br from-gray-50 via-blue-50 to-purple-50">
            <SiteNav/>
            <main>
                <HeroSection/>
                <AboutSection/>
                <CaseStudySection/>
                <FeaturesSection/>
                <ContactSection/>
            </main>
        </div>
    }
}
