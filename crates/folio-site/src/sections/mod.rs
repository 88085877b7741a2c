//! Page sections, rendered top to bottom in a fixed order

mod about;
mod case_study;
mod contact;
mod features;
mod hero;

pub use about::AboutSection;
pub use case_study::CaseStudySection;
pub use contact::ContactSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
