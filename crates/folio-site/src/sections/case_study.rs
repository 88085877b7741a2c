//! Case study section

use leptos::*;

use crate::components::MetricCard;

#[component]
pub fn CaseStudySection() -> impl IntoView {
    view! {
        <section id="case-study" class="py-24 px-6 bg-blue-100">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-800 mb-6">
                        "Real Results, Real Impact"
                    </h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "How I took a local restaurant from page 5 to position #2 for \"Best "
                        "italian restaurant downtown seattle 2025\" in three (3) steps."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    <MetricCard title="Organic Traffic" value="342%" change="342" icon="🌐"/>
                    <MetricCard title="Keyword Rankings" value="#2" change="89" icon="🔍"/>
                    <MetricCard title="Conversion Rate" value="10%" change="156" icon="🎯"/>
                    <MetricCard title="Local Citations" value="89" change="234" icon="🏆"/>
                </div>

                <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-8 text-white">
                    <h3 class="flex items-center text-2xl font-bold mb-4">
                        "✅ Strategy Breakdown"
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <div>
                            <h4 class="font-semibold mb-2">"Step 1: Foundation"</h4>
                            <p class="text-blue-100">
                                "Technical audit, core web vitals optimization, schema markup implementation"
                            </p>
                        </div>
                        <div>
                            <h4 class="font-semibold mb-2">"Step 2: Content"</h4>
                            <p class="text-blue-100">
                                "Local-focused content creation, Google My Business optimization, citation building"
                            </p>
                        </div>
                        <div>
                            <h4 class="font-semibold mb-2">"Step 3: Authority"</h4>
                            <p class="text-blue-100">
                                "Local partnerships, review management system, strategic link building"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
