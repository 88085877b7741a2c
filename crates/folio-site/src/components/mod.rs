//! Portfolio site components

mod cards;
mod nav;
mod rotating_text;
mod star_button;

pub use cards::*;
pub use nav::SiteNav;
pub use rotating_text::RotatingText;
pub use star_button::{ButtonVariant, StarButton};
