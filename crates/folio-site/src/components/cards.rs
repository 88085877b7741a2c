//! Card components for the portfolio sections

use leptos::*;

#[component]
pub fn MetricCard(
    title: &'static str,
    value: &'static str,
    change: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 shadow-lg hover:shadow-xl transition-all duration-300 border border-gray-100">
            <div class="flex items-center justify-between mb-4">
                <span class="text-2xl">{icon}</span>
                <span class="text-green-500 text-sm font-medium">"+"{change}"%"</span>
            </div>
            <h3 class="text-gray-600 text-sm font-medium mb-1">{title}</h3>
            <p class="text-2xl font-bold text-gray-800">{value}</p>
        </div>
    }
}

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    metrics: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-8 shadow-lg hover:shadow-xl transition-all duration-500 border hover:border-gray-400 border-gray-200 group">
            <div class="flex items-center mb-4">
                <div class="p-3 bg-blue-100 rounded-lg mr-4 group-hover:bg-blue-200 transition-colors">
                    <span class="text-2xl">{icon}</span>
                </div>
                <h3 class="text-xl font-bold text-gray-800">{title}</h3>
            </div>
            <p class="text-gray-600 mb-6 leading-relaxed">{description}</p>
            <div class="grid grid-cols-2 gap-4">
                {metrics.into_iter().map(|(value, label)| view! {
                    <div class="text-center p-3 bg-gray-100 rounded-lg">
                        <p class="text-2xl font-bold text-blue-600">{value}</p>
                        <p class="text-sm text-gray-600">{label}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn SkillCard(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    /// Gradient classes for the card background.
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("p-6 bg-gradient-to-br {accent} rounded-xl")>
            <div class="flex items-center mb-3">
                <span class="text-2xl mr-3">{icon}</span>
                <h3 class="font-bold text-gray-800">{title}</h3>
            </div>
            <p class="text-sm text-gray-600">{description}</p>
        </div>
    }
}
