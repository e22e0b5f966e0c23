#![allow(non_snake_case)]

//! Declarative page sections and their renderer.
//!
//! Lab pages are described as lists of [`Section`]s in JSON; [`Sections`]
//! turns such a list into nodes that can be handed to a tab panel.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::code;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Section {
    Heading {
        text: String,
        #[serde(default = "default_level")]
        level: u8,
    },
    Paragraph {
        text: String,
    },
    CodeBlock {
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        title: Option<String>,
        code: String,
    },
    Grid {
        #[serde(default = "default_columns")]
        columns: u8,
        items: Vec<Section>,
    },
    CardGrid {
        cards: Vec<Card>,
    },
    Alert {
        #[serde(default)]
        tone: Tone,
        #[serde(default)]
        title: Option<String>,
        text: String,
    },
    Exercise {
        title: String,
        steps: Vec<String>,
        #[serde(default)]
        hint: Option<String>,
    },
}

fn default_level() -> u8 {
    2
}

fn default_columns() -> u8 {
    2
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Info,
    Tip,
    Warning,
}

impl Tone {
    fn classes(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (Tone::Info, Theme::Light) => "border-sky-500 bg-sky-50 text-sky-900",
            (Tone::Info, Theme::Dark) => "border-sky-400 bg-sky-950 text-sky-100",
            (Tone::Tip, Theme::Light) => "border-emerald-500 bg-emerald-50 text-emerald-900",
            (Tone::Tip, Theme::Dark) => "border-emerald-400 bg-emerald-950 text-emerald-100",
            (Tone::Warning, Theme::Light) => "border-amber-500 bg-amber-50 text-amber-900",
            (Tone::Warning, Theme::Dark) => "border-amber-400 bg-amber-950 text-amber-100",
        }
    }
}

/// Tailwind has no arbitrary column counts, so clamp to the ones we ship.
fn grid_columns(columns: u8) -> &'static str {
    match columns {
        0 | 1 => "grid-cols-1",
        2 => "md:grid-cols-2",
        3 => "md:grid-cols-3",
        _ => "md:grid-cols-4",
    }
}

#[component]
pub fn Sections(sections: Vec<Section>, #[props(default)] theme: Theme) -> Element {
    rsx! {
        div { class: "flex flex-col gap-4",
            for (i , section) in sections.into_iter().enumerate() {
                SectionView { key: "{i}", section: section, theme: theme }
            }
        }
    }
}

#[component]
fn SectionView(section: Section, theme: Theme) -> Element {
    let p = theme.palette();
    match section {
        Section::Heading { text, level } => match level {
            0 | 1 => rsx! { h2 { class: "text-2xl font-bold", "{text}" } },
            2 => rsx! { h3 { class: "text-xl font-semibold", "{text}" } },
            _ => rsx! { h4 { class: "text-lg font-semibold", "{text}" } },
        },
        Section::Paragraph { text } => rsx! {
            p { class: "leading-relaxed", "{text}" }
        },
        Section::CodeBlock { language, title, code } => {
            let title = title.unwrap_or_default();
            rsx! {
                div { class: "rounded-lg overflow-hidden border {p.border}",
                    if !title.is_empty() {
                        div { class: "px-3 py-1 text-xs font-mono {p.chrome_bg} {p.chrome_text}", "{title}" }
                    }
                    div { class: "p-3 text-sm overflow-x-auto {p.terminal_bg} {p.terminal_text}",
                        code::Code { code: code, language: language.unwrap_or_default() }
                    }
                }
            }
        }
        Section::Grid { columns, items } => {
            let cols = grid_columns(columns);
            rsx! {
                div { class: "grid gap-4 {cols}",
                    for (i , item) in items.into_iter().enumerate() {
                        SectionView { key: "{i}", section: item, theme: theme }
                    }
                }
            }
        }
        Section::CardGrid { cards } => rsx! {
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                for card in cards {
                    div { class: "flex flex-col gap-1 rounded-lg border p-4 {p.border} {p.elevated_bg}",
                        {card.badge.map(|badge| rsx! {
                            span { class: "self-start rounded-full px-2 text-xs {p.muted_bg} {p.accent_text}", "{badge}" }
                        })}
                        h4 { class: "font-semibold", "{card.title}" }
                        p { class: "text-sm {p.muted_text}", "{card.text}" }
                    }
                }
            }
        },
        Section::Alert { tone, title, text } => {
            let tone = tone.classes(theme);
            rsx! {
                div { class: "rounded-md border-l-4 px-4 py-3 {tone}", role: "note",
                    {title.map(|title| rsx! {
                        p { class: "font-semibold", "{title}" }
                    })}
                    p { "{text}" }
                }
            }
        }
        Section::Exercise { title, steps, hint } => rsx! {
            div { class: "rounded-lg border-2 border-dashed p-4 {p.accent_border}",
                h4 { class: "mb-2 font-semibold {p.accent_text}", "Exercise: {title}" }
                ol { class: "list-decimal pl-5 space-y-1",
                    for step in steps {
                        li { "{step}" }
                    }
                }
                {hint.map(|hint| rsx! {
                    details { class: "mt-3 text-sm",
                        summary { class: "cursor-pointer {p.muted_text}", "Hint" }
                        p { class: "mt-1", "{hint}" }
                    }
                })}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_sections() {
        let _ = tracing_subscriber::fmt::try_init();

        let json = r#"[
            { "type": "heading", "text": "Locators" },
            { "type": "paragraph", "text": "Prefer role-based locators." },
            { "type": "codeBlock", "language": "python", "code": "driver.find_element(By.ID, \"q\")" },
            { "type": "grid", "columns": 3, "items": [ { "type": "paragraph", "text": "a" } ] },
            { "type": "cardGrid", "cards": [ { "title": "CSS", "text": "fast", "badge": "core" } ] },
            { "type": "alert", "tone": "warning", "text": "Avoid XPath on text." },
            { "type": "exercise", "title": "Find the button", "steps": ["open", "click"] }
        ]"#;
        let sections: Vec<Section> = serde_json::from_str(json).unwrap();
        assert_eq!(sections.len(), 7);
        assert_eq!(
            sections[0],
            Section::Heading {
                text: "Locators".to_string(),
                level: 2
            }
        );
        assert_eq!(
            sections[5],
            Section::Alert {
                tone: Tone::Warning,
                title: None,
                text: "Avoid XPath on text.".to_string()
            }
        );
        match &sections[3] {
            Section::Grid { columns, items } => {
                assert_eq!(*columns, 3);
                assert_eq!(items.len(), 1);
            }
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = serde_json::from_str::<Section>(r#"{ "type": "carousel" }"#).unwrap_err();
        assert!(err.to_string().contains("carousel"));
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(0), "grid-cols-1");
        assert_eq!(grid_columns(3), "md:grid-cols-3");
        assert_eq!(grid_columns(9), "md:grid-cols-4");
    }
}
