use dioxus::prelude::*;

/// Small 3x3 grid of pulsing dots, shown inside a busy button.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span {
            class: "loader",
            role: "status",
            aria_label: "Loading",
            for i in 0..9 {
                span { key: "{i}", class: "loader-dot" }
            }
        }
    }
}
