//! One-shot confetti burst shown after a successful sign-up.

use dioxus::prelude::*;

const CONFETTI_CSS: Asset = asset!("/assets/styling/confetti.css");

const PIECES: usize = 48;
const COLORS: [&str; 6] = ["#635bff", "#00d4ff", "#ff5996", "#ffb800", "#2ecc71", "#a960ee"];

/// Full-screen falling particles. Renders nothing until `run` is set, then plays once.
#[component]
pub fn Confetti(run: bool) -> Element {
    if !run {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: CONFETTI_CSS }

        div {
            class: "confetti",
            aria_hidden: "true",
            for i in 0..PIECES {
                span {
                    key: "{i}",
                    class: "confetti-piece",
                    style: "{piece_style(i)}",
                }
            }
        }
    }
}

/// Spread pieces across the width with staggered delays, sizes, and colors.
fn piece_style(i: usize) -> String {
    let left = (i * 37) % 100;
    let delay_ms = (i * 53) % 900;
    let duration_ms = 2200 + (i * 71) % 1400;
    let size = 6 + (i * 7) % 6;
    let color = COLORS[i % COLORS.len()];
    format!(
        "left: {left}%; width: {size}px; height: {}px; background: {color}; animation-delay: {delay_ms}ms; animation-duration: {duration_ms}ms;",
        size * 2
    )
}
