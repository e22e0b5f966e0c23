#![allow(non_snake_case)]

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::code;
use crate::storage::LocalStorage;
use crate::theme::Theme;

pub mod content;
pub mod copy;
pub mod state;
pub mod style;

pub use content::RenderContent;
pub use style::{Size, Variant};

use content::Panel;
use copy::{CopyIndicator, COPIED_RESET};
use state::TabSelection;

/// One selectable tab. `id` must be unique within its tab set; it doubles as
/// the remembered value and the render key.
#[derive(Clone, PartialEq)]
pub struct TabDescriptor {
    pub id: String,
    pub label: String,
    pub icon: Element,
    pub content: Element,
    pub code: Option<String>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        TabDescriptor {
            id: id.into(),
            label: label.into(),
            icon: None,
            content: None,
            code: None,
        }
    }

    pub fn with_icon(mut self, icon: Element) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_content(mut self, content: Element) -> Self {
        self.content = content;
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[component]
fn TabHeader(
    id: String,
    label: String,
    icon: Element,
    class: String,
    active: bool,
    onselect: EventHandler<String>,
) -> Element {
    rsx! {
        button {
            class: "inline-flex items-center justify-center gap-2 {class}",
            role: "tab",
            "aria-selected": "{active}",
            onclick: move |_| onselect.call(id.clone()),
            {icon}
            span { "{label}" }
        }
    }
}

#[component]
pub fn Tabs(
    tabs: Vec<TabDescriptor>,
    #[props(default)] variant: Variant,
    #[props(default)] size: Size,
    #[props(default)] full_width: bool,
    #[props(default)] theme: Theme,
    storage_key: Option<String>,
    // caller-owned selection, wins over internal state while set
    active_tab: Option<String>,
    on_change: Option<EventHandler<String>>,
    render_content: Option<RenderContent>,
    // terminal header row
    title: Option<String>,
    description: Option<String>,
) -> Element {
    // selection lives outside the reactive graph so the controlled-id sync
    // below can run during render; `revision` is what triggers re-renders
    let selection = use_hook(|| {
        let ids: Vec<String> = tabs.iter().map(|t| t.id.clone()).collect();
        Rc::new(RefCell::new(TabSelection::mount(
            &ids,
            active_tab.as_deref(),
            storage_key.clone(),
            LocalStorage,
        )))
    });
    let mut revision = use_signal(|| 0u64);
    let mut copied = use_signal(CopyIndicator::default);
    let mut reset = use_signal(|| None::<Task>);

    let _ = revision.read();
    selection.borrow_mut().sync_controlled(active_tab.as_deref());
    let active = selection.borrow().active(active_tab.as_deref()).to_string();

    let frame = style::container(variant, full_width, theme);
    let headers = tabs.iter().map(|tab| {
        let is_active = tab.id == active;
        let class = style::resolve(variant, size, full_width, is_active, theme).button;
        let selection = selection.clone();
        rsx! {
            TabHeader {
                key: "{tab.id}",
                id: tab.id.clone(),
                label: tab.label.clone(),
                icon: tab.icon.clone(),
                class: class.to_string(),
                active: is_active,
                onselect: move |id: String| {
                    selection
                        .borrow_mut()
                        .select(
                            &id,
                            |_, id| {
                                if let Some(handler) = &on_change {
                                    handler.call(id.to_string());
                                }
                            },
                        );
                    revision += 1;
                }
            }
        }
    });

    let panel = match content::resolve(variant, &tabs, &active, render_content.as_ref()) {
        Panel::NoSelection => rsx! {
            div { class: "text-sm italic opacity-60", "No tab selected" }
        },
        Panel::Code(text) => rsx! {
            code::Code { code: text.to_string() }
        },
        Panel::Static(node) => node.clone(),
        Panel::Rendered(node) => node,
    };

    if variant != Variant::Terminal {
        return rsx! {
            div { class: "{frame.root}",
                div { class: "{frame.bar}", role: "tablist", {headers} }
                div { class: "{frame.panel}", role: "tabpanel", {panel} }
            }
        };
    }

    let active_code = tabs
        .iter()
        .find(|t| t.id == active)
        .and_then(|t| t.code.clone());
    let can_copy = active_code.is_some();
    let copy_active_code = move |_: MouseEvent| {
        let Some(text) = active_code.as_deref() else {
            return;
        };
        copy::copy_to_clipboard(text);
        let ticket = copied.write().mark();
        if let Some(task) = reset.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            TimeoutFuture::new(COPIED_RESET.as_millis() as u32).await;
            copied.write().expire(ticket);
        });
        reset.set(Some(task));
    };
    let copy_label = if copied.read().copied() { "Copied!" } else { "Copy" };
    let title = title.unwrap_or_default();
    let description = description.unwrap_or_default();
    let palette = theme.palette();

    rsx! {
        div { class: "{frame.root}",
            div { class: "{frame.bar}",
                div { class: "flex gap-1.5 pb-2 mr-2",
                    for dot in style::TRAFFIC_LIGHTS {
                        span { class: "w-3 h-3 rounded-full {dot}" }
                    }
                }
                if !title.is_empty() || !description.is_empty() {
                    div { class: "flex flex-col pb-2 mr-3 leading-tight",
                        if !title.is_empty() {
                            span { class: "text-xs font-semibold", "{title}" }
                        }
                        if !description.is_empty() {
                            span { class: "text-xs {palette.muted_text}", "{description}" }
                        }
                    }
                }
                div { class: "flex flex-1 gap-1", role: "tablist", {headers} }
                if can_copy {
                    button {
                        class: "mb-2 px-2 py-0.5 text-xs rounded border {palette.border}",
                        onclick: copy_active_code,
                        "{copy_label}"
                    }
                }
            }
            div { class: "{frame.panel}", role: "tabpanel", {panel} }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let _ = tracing_subscriber::fmt::try_init();

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    // label of the first header marked selected
    fn selected_label<'a>(html: &str, labels: &[&'a str]) -> Option<&'a str> {
        let rest = &html[html.find("aria-selected=\"true\"")?..];
        labels
            .iter()
            .filter_map(|l| rest.find(&format!("<span>{l}</span>")).map(|at| (at, *l)))
            .min()
            .map(|(_, l)| l)
    }

    fn sample() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("one", "One")
                .with_content(rsx! { "STATIC" })
                .with_code("echo hi"),
            TabDescriptor::new("two", "Two").with_content(rsx! { "SECOND" }),
        ]
    }

    #[test]
    fn test_empty_tabs_render_placeholder() {
        let html = render(|| rsx! { Tabs { tabs: vec![] } });
        assert!(html.contains("No tab selected"));
        assert!(!html.contains("role=\"tab\""));
    }

    #[test]
    fn test_unknown_controlled_id_renders_placeholder() {
        let html = render(|| rsx! { Tabs { tabs: sample(), active_tab: "zz" } });
        assert!(html.contains("No tab selected"));
        assert_eq!(selected_label(&html, &["One", "Two"]), None);
    }

    #[test]
    fn test_controlled_id_selects_header() {
        let html = render(|| rsx! { Tabs { tabs: sample(), active_tab: "two" } });
        assert_eq!(selected_label(&html, &["One", "Two"]), Some("Two"));
        assert!(html.contains("SECOND"));
        assert!(!html.contains("STATIC"));
    }

    #[test]
    fn test_variant_switch_keeps_active_tab() {
        let plain = render(|| rsx! { Tabs { tabs: sample() } });
        let terminal = render(|| rsx! { Tabs { tabs: sample(), variant: Variant::Terminal } });

        assert_eq!(selected_label(&plain, &["One", "Two"]), Some("One"));
        assert_eq!(selected_label(&terminal, &["One", "Two"]), Some("One"));

        assert!(plain.contains("STATIC"));
        assert!(!plain.contains("echo hi"));
        assert!(terminal.contains("echo hi"));
        assert!(!terminal.contains("STATIC"));
        assert!(terminal.contains("Copy"));
    }

    #[test]
    fn test_copy_button_needs_code() {
        let html = render(|| {
            rsx! {
                Tabs {
                    tabs: vec![TabDescriptor::new("notes", "Notes").with_content(rsx! { "text" })],
                    variant: Variant::Terminal,
                    title: "~/labs",
                }
            }
        });
        assert!(html.contains("~/labs"));
        assert!(!html.contains("Copy"));
        assert!(html.contains("<pre"));
    }
}
