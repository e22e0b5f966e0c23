#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;

mod code;
mod lab_picker;
mod labs;
mod sections;
mod storage;
mod tabs;
mod theme;

use sections::{Section, Sections, Tone};
use tabs::{Size, TabDescriptor, Tabs, Variant};
use theme::Theme;

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("logger failed to init");

    launch(App);
}

#[component]
fn App() -> Element {
    let mut theme = use_signal(|| {
        Theme::detect().unwrap_or_else(|e| {
            tracing::warn!("could not read color scheme preference: {e:?}");
            Theme::default()
        })
    });
    let mut slug = use_signal(|| labs::slugs().next().unwrap_or_default().to_string());
    let catalogue = use_hook(labs::catalogue);
    let loaded = use_memo(move || labs::load(&slug.read()).map_err(|e| e.to_string()));

    let current = slug.read().clone();
    let t = *theme.read();
    let p = t.palette();

    // the lab strip is controlled: the picker and the strip both drive `slug`
    let strip: Vec<TabDescriptor> = catalogue
        .iter()
        .map(|(slug, title)| TabDescriptor::new(slug.clone(), title.clone()))
        .collect();

    let page = match loaded() {
        Ok(lab) => rsx! {
            labs::LabPage { key: "{current}", lab: lab, theme: t }
        },
        Err(e) => {
            tracing::error!("failed to load lab {current}: {e}");
            rsx! {
                div { class: "mx-auto max-w-5xl px-4 py-8",
                    Sections {
                        sections: vec![Section::Alert {
                            tone: Tone::Warning,
                            title: Some("This lab is unavailable".to_string()),
                            text: e,
                        }],
                        theme: t,
                    }
                }
            }
        }
    };

    rsx! {
        main { class: "min-h-screen w-full {p.page} {p.text}",
            nav { class: "flex items-center gap-4 border-b px-4 py-3 {p.border}",
                span { class: "font-bold", "QA Labs" }
                div { class: "flex-1",
                    Tabs {
                        tabs: strip,
                        variant: Variant::Pills,
                        size: Size::Sm,
                        theme: t,
                        active_tab: current.clone(),
                        on_change: EventHandler::new(move |s: String| slug.set(s)),
                    }
                }
                lab_picker::LabPicker {
                    labs: catalogue.clone(),
                    current: current.clone(),
                    onpick: move |s: String| slug.set(s),
                }
                button {
                    class: "h-10 rounded-md border px-3 {p.border}",
                    onclick: move |_| {
                        let next = theme.read().toggled();
                        tracing::info!("theme changed to {next:?}");
                        theme.set(next);
                    },
                    if t == Theme::Dark { "Light mode" } else { "Dark mode" }
                }
            }
            {page}
        }
    }
}
