//! Button Components
//!
//! - Mars: main forward actions, red-to-orange gradient
//! - Alien: secondary actions, neon outline
//! - Tab: header navigation pills

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary forward action
    #[default]
    Mars,
    /// Secondary / backward action
    Alien,
    /// Header navigation pill
    Tab,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Mars => "button-mars",
            ButtonVariant::Alien => "button-alien",
            ButtonVariant::Tab => "nav-tab",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Highlighted state (active tab)
    #[props(default = false)]
    pub active: bool,
    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Compose the class list for a button.
pub fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Mars,
///         onclick: move |_| step.set(Step::Photo),
///         "Begin Processing"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            title: props.title.as_deref().unwrap_or(""),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
