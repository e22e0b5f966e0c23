#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn Code(code: String, #[props(default)] language: String) -> Element {
    let language = if language.is_empty() {
        String::new()
    } else {
        format!("language-{language}")
    };
    rsx! {
        pre { class: "font-mono whitespace-pre box-border",
            code { class: "{language}", "{code}" }
        }
    }
}
