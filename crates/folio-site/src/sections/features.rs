//! Features section

use leptos::*;

use crate::components::FeatureCard;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-800 mb-6">
                        "Advanced Marketing Intelligence"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Custom-built tools and frameworks that demonstrate deep technical "
                        "knowledge and strategic thinking in digital marketing."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-8">
                    <FeatureCard
                        title="SEO Audit Dashboard"
                        icon="🔍"
                        description="Comprehensive technical, on-page, and off-page analysis with real-time monitoring and issue detection."
                        metrics=vec![("92%", "Audit Accuracy"), ("40hrs", "Time Saved")]
                    />
                    <FeatureCard
                        title="Competitor Analysis"
                        icon="🎯"
                        description="Advanced gap analysis revealing content opportunities, keyword clusters, and competitive intelligence."
                        metrics=vec![("100+", "Data Points"), ("3x", "Faster Analysis")]
                    />
                    <FeatureCard
                        title="Growth Attribution"
                        icon="📊"
                        description="Multi-touch attribution modeling across all marketing channels with statistical significance testing."
                        metrics=vec![("85%", "Attribution Accuracy"), ("25%", "ROI Improvement")]
                    />
                </div>
            </div>
        </section>
    }
}
