//! About section

use leptos::*;

use crate::components::{ButtonVariant, SkillCard, StarButton};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6 bg-gray-200">
            <div class="max-w-6xl mx-auto">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-20 items-center">
                    // Profile circle with decorative orbiting icons
                    <div class="flex justify-center lg:justify-end">
                        <div class="relative">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-r from-blue-400 to-purple-500 animate-pulse opacity-20 scale-110"></div>
                            <div class="absolute inset-0 rounded-full bg-gradient-to-r from-purple-400 to-blue-500 animate-pulse opacity-30 scale-105"></div>
                            <div class="relative w-80 h-80 rounded-full bg-gradient-to-br from-blue-500 via-purple-600 to-indigo-700 flex items-center justify-center shadow-2xl">
                                <div class="w-72 h-72 rounded-full bg-white/10 backdrop-blur-sm flex items-center justify-center">
                                    <div class="relative">
                                        <span class="block text-8xl text-center">"📈"</span>
                                        <span class="absolute -top-8 -left-8 text-3xl animate-bounce" style="animation-delay: 0s;">"💻"</span>
                                        <span class="absolute -top-6 -right-10 text-3xl animate-bounce" style="animation-delay: 0.5s;">"📊"</span>
                                        <span class="absolute -bottom-8 -left-6 text-3xl animate-bounce" style="animation-delay: 1s;">"🔍"</span>
                                        <span class="absolute -bottom-6 -right-8 text-3xl animate-bounce" style="animation-delay: 1.5s;">"🎯"</span>
                                        <span class="absolute top-2 -right-12 text-2xl animate-pulse">"🧠"</span>
                                        <span class="absolute bottom-2 -left-12 text-2xl animate-pulse">"👥"</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    // About copy and skills
                    <div class="space-y-8 mt-6">
                        <div>
                            <StarButton variant=ButtonVariant::Secondary>
                                <span class="flex items-center justify-center text-2xl md:text-3xl font-bold text-gray-800">
                                    "About 📝"
                                </span>
                            </StarButton>
                            <p class="text-lg text-gray-600 leading-relaxed mt-6 mb-6">
                                "I'm a passionate digital marketing strategist with a unique blend of "
                                "technical expertise and business acumen. My journey began with a "
                                "fascination for data patterns and evolved into mastering the art of "
                                "digital growth."
                            </p>
                            <p class="text-lg text-gray-600 leading-relaxed mb-6">
                                "With hands-on experience in SEO, SEM, analytics, and conversion "
                                "optimization, I don't just analyze data, I transform it into "
                                "actionable strategies that drive measurable business results."
                            </p>
                        </div>

                        <div class="grid grid-cols-2 gap-6">
                            <SkillCard
                                title="SEO & Analytics"
                                icon="🔍"
                                accent="from-blue-100 to-indigo-200"
                                description="Advanced keyword research, technical SEO, Google Analytics 4, Search Console"
                            />
                            <SkillCard
                                title="Technical Skills"
                                icon="💻"
                                accent="from-purple-50 to-pink-100"
                                description="Web development, HTML, CSS, JavaScript"
                            />
                            <SkillCard
                                title="Growth Strategy"
                                icon="🎯"
                                accent="from-green-50 to-emerald-100"
                                description="Conversion optimization, A/B testing, funnel analysis, customer acquisition"
                            />
                            <SkillCard
                                title="Data Analysis"
                                icon="📊"
                                accent="from-orange-50 to-red-100"
                                description="Statistical modeling, predictive analytics, attribution modeling, reporting"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
