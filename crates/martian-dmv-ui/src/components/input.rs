//! Form Controls
//!
//! Text input, range slider, radio group and checkbox for the license
//! form. Every control is controlled: the caller owns the value and gets
//! change events back.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "designation".to_string(),
///         label: "Entity Designation (Name)".to_string(),
///         value: form.read().application.designation.clone(),
///         oninput: move |s| form.write().set_designation(s),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "input-mars",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the Slider component
#[derive(Clone, PartialEq, Props)]
pub struct SliderProps {
    pub value: u8,
    pub onchange: EventHandler<u8>,
    #[props(default = 0)]
    pub min: u8,
    #[props(default = 100)]
    pub max: u8,
    #[props(default)]
    pub label: Option<String>,
    /// Tick captions shown under the track
    #[props(default)]
    pub ticks: Vec<String>,
}

/// Parse a range input value, clamped to `min..=max`.
pub fn parse_slider_value(raw: &str, min: u8, max: u8) -> Option<u8> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .map(|v| v.round().clamp(f64::from(min), f64::from(max)) as u8)
}

/// Range slider with tick captions
#[component]
pub fn Slider(props: SliderProps) -> Element {
    let (min, max) = (props.min, props.max);
    let onchange = props.onchange;

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }
            input {
                class: "slider-mars",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{props.value}",
                oninput: move |e| {
                    if let Some(v) = parse_slider_value(&e.value(), min, max) {
                        onchange.call(v);
                    }
                },
            }
            if !props.ticks.is_empty() {
                div { class: "slider-ticks",
                    for tick in props.ticks.iter() {
                        span { key: "{tick}", "{tick}" }
                    }
                }
            }
        }
    }
}

/// One choice in a radio group.
#[derive(Clone, PartialEq, Debug)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the RadioGroup component
#[derive(Clone, PartialEq, Props)]
pub struct RadioGroupProps {
    /// Shared `name` attribute
    pub name: String,
    pub options: Vec<RadioOption>,
    /// Currently selected value
    pub selected: String,
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
}

/// Vertical list of radio buttons
#[component]
pub fn RadioGroup(props: RadioGroupProps) -> Element {
    let onchange = props.onchange;

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }
            div { class: "radio-group", role: "radiogroup",
                for option in props.options.iter().cloned() {
                    {
                        let id = format!("{}-{}", props.name, option.value);
                        let checked = option.value == props.selected;
                        let value = option.value.clone();
                        rsx! {
                            div { key: "{id}", class: "radio-item",
                                input {
                                    id: "{id}",
                                    r#type: "radio",
                                    name: "{props.name}",
                                    value: "{option.value}",
                                    checked: checked,
                                    onchange: move |_| onchange.call(value.clone()),
                                }
                                label { r#for: "{id}", "{option.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub id: String,
    pub checked: bool,
    pub onchange: EventHandler<bool>,
    pub label: String,
}

/// Checkbox with trailing label
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let checked = props.checked;
    let onchange = props.onchange;

    rsx! {
        div { class: "checkbox-row",
            input {
                id: "{props.id}",
                class: "checkbox-mars",
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| onchange.call(!checked),
            }
            label { r#for: "{props.id}", "{props.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_values_are_clamped() {
        assert_eq!(parse_slider_value("42", 0, 100), Some(42));
        assert_eq!(parse_slider_value(" 19.6 ", 0, 100), Some(20));
        assert_eq!(parse_slider_value("250", 0, 100), Some(100));
        assert_eq!(parse_slider_value("-3", 0, 100), Some(0));
        assert_eq!(parse_slider_value("heavy", 0, 100), None);
    }

    #[test]
    fn radio_option_builder() {
        let opt = RadioOption::new("void", "Cosmic Void");
        assert_eq!(opt.value, "void");
        assert_eq!(opt.label, "Cosmic Void");
    }
}
