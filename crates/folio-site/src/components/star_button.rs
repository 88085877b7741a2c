//! Star-border button
//!
//! A clickable control that scatters pulsing star marks over itself while
//! hovered and dispatches its bound action on click.

use folio_core::{scatter, Action, MARK_COUNT};
use leptos::*;

use crate::dom::DomNavigator;

const BASE_CLASSES: &str =
    "relative px-6 py-3 rounded-lg font-medium transition-all duration-300 overflow-hidden group";

/// Visual variant of a [`StarButton`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    /// Fixed class string for this variant.
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:from-blue-700 hover:to-purple-700"
            }
            ButtonVariant::Secondary => {
                "bg-transparent border-2 border-gray-300 text-gray-700 hover:border-blue-500 hover:text-blue-600"
            }
        }
    }
}

#[component]
pub fn StarButton(
    /// Visual treatment of the control.
    #[prop(optional)] variant: ButtonVariant,
    /// Action dispatched on every click.
    #[prop(optional)] action: Action,
    children: Children,
) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(false);

    view! {
        <button
            class=format!("{} {}", BASE_CLASSES, variant.classes())
            on:click=move |_| action.dispatch(&DomNavigator)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            // Overlay children are rebuilt on each hover entry, so every
            // hover gets a fresh scatter.
            <Show when=move || hovered.get()>
                <div class="absolute inset-0">
                    {scatter(MARK_COUNT)
                        .into_iter()
                        .map(|mark| view! {
                            <span
                                class="absolute text-yellow-300 animate-pulse"
                                style=mark.style()
                            >
                                "★"
                            </span>
                        })
                        .collect_view()}
                </div>
            </Show>
            <span class="relative z-10">{children()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes_are_total_and_distinct() {
        let primary = ButtonVariant::Primary.classes();
        let secondary = ButtonVariant::Secondary.classes();
        assert!(!primary.is_empty());
        assert!(!secondary.is_empty());
        assert_ne!(primary, secondary);
    }

    #[test]
    fn test_default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
