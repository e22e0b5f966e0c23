#![allow(non_snake_case)]

//! Interactive lab catalogue.
//!
//! Each lab is a JSON file compiled into the binary. A lab is a list of tab
//! groups; every group is rendered through [`Tabs`] with the variant it asks for.

use std::collections::HashSet;

use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::sections::{Section, Sections};
use crate::tabs::{RenderContent, Size, TabDescriptor, Tabs, Variant};
use crate::theme::Theme;

macro_rules! bundled {
    ($($slug:expr),* $(,)?) => {
        [ $( ($slug, include_str!(concat!("../content/labs/", $slug, ".json"))) ),* ]
    };
}

const LABS: &[(&str, &str)] = &bundled!["selenium", "playwright", "api-testing"];

#[derive(Error, Debug)]
pub enum LabError {
    #[error("no lab named {0:?}")]
    NotFound(String),

    #[error("lab {slug} is malformed: {source}")]
    Parse {
        slug: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("lab {lab}: tab {id:?} appears twice in group {group}")]
    DuplicateTab { lab: String, group: String, id: String },
}

pub type Result<T> = std::result::Result<T, LabError>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lab {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub groups: Vec<TabGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabGroup {
    pub id: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub full_width: bool,
    pub tabs: Vec<LabTab>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabTab {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Lab {
    /// Tab ids must be unique within a group; they key both rendering and
    /// the remembered selection.
    pub fn validate(&self) -> Result<()> {
        for group in &self.groups {
            let mut seen = HashSet::new();
            for tab in &group.tabs {
                if !seen.insert(tab.id.as_str()) {
                    return Err(LabError::DuplicateTab {
                        lab: self.slug.clone(),
                        group: group.id.clone(),
                        id: tab.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl TabGroup {
    /// Local-storage key for the group's selection. Unique as long as lab
    /// slugs and group ids are.
    pub fn storage_key(&self, lab: &str) -> String {
        format!("lab:{lab}:{}", self.id)
    }
}

pub fn parse(slug: &str, json: &str) -> Result<Lab> {
    let lab: Lab = serde_json::from_str(json).map_err(|source| LabError::Parse {
        slug: slug.to_string(),
        source,
    })?;
    lab.validate()?;
    Ok(lab)
}

pub fn load(slug: &str) -> Result<Lab> {
    let (_, json) = LABS
        .iter()
        .find(|(s, _)| *s == slug)
        .ok_or_else(|| LabError::NotFound(slug.to_string()))?;
    parse(slug, json)
}

pub fn slugs() -> impl Iterator<Item = &'static str> {
    LABS.iter().map(|(slug, _)| *slug)
}

/// Every lab that loads. Broken labs are logged and left out.
pub fn all() -> Vec<Lab> {
    slugs()
        .filter_map(|slug| match load(slug) {
            Ok(lab) => Some(lab),
            Err(e) => {
                tracing::error!(slug, error = %e, "skipping lab");
                None
            }
        })
        .collect()
}

/// `(slug, title)` pairs for navigation.
pub fn catalogue() -> Vec<(String, String)> {
    all().into_iter().map(|lab| (lab.slug, lab.title)).collect()
}

fn descriptors(group: &TabGroup, theme: Theme) -> Vec<TabDescriptor> {
    group
        .tabs
        .iter()
        .map(|tab| {
            let mut descriptor = TabDescriptor::new(tab.id.clone(), tab.label.clone());
            if let Some(icon) = &tab.icon {
                descriptor = descriptor.with_icon(rsx! {
                    span { "aria-hidden": "true", "{icon}" }
                });
            }
            if let Some(code) = &tab.code {
                descriptor = descriptor.with_code(code.clone());
            }
            // labContent panels are built lazily by `render_content`
            if group.variant != Variant::LabContent && !tab.sections.is_empty() {
                descriptor = descriptor.with_content(rsx! {
                    Sections { sections: tab.sections.clone(), theme: theme }
                });
            }
            descriptor
        })
        .collect()
}

fn lazy_sections(tabs: Vec<LabTab>, theme: Theme) -> RenderContent {
    RenderContent::new(move |id| {
        let sections = tabs
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.sections.clone())
            .unwrap_or_default();
        rsx! {
            Sections { sections: sections, theme: theme }
        }
    })
}

#[component]
fn TabGroupView(lab: String, group: TabGroup, theme: Theme) -> Element {
    let tabs = descriptors(&group, theme);
    // one builder per theme, kept for the life of the view so `Tabs` sees
    // the same `RenderContent` across renders
    let (light, dark) = use_hook(|| {
        (
            lazy_sections(group.tabs.clone(), Theme::Light),
            lazy_sections(group.tabs.clone(), Theme::Dark),
        )
    });
    let render = match theme {
        Theme::Light => light,
        Theme::Dark => dark,
    };
    let heading = group.heading.clone().unwrap_or_default();
    rsx! {
        section { class: "flex flex-col gap-3",
            if !heading.is_empty() {
                h2 { class: "text-xl font-semibold", "{heading}" }
            }
            Tabs {
                tabs: tabs,
                variant: group.variant,
                size: group.size,
                full_width: group.full_width,
                theme: theme,
                storage_key: group.storage_key(&lab),
                render_content: render,
                title: group.title.clone().unwrap_or_default(),
                description: group.description.clone().unwrap_or_default(),
            }
        }
    }
}

#[component]
pub fn LabPage(lab: Lab, theme: Theme) -> Element {
    let p = theme.palette();
    rsx! {
        article { class: "mx-auto flex max-w-5xl flex-col gap-10 px-4 py-8",
            header {
                h1 { class: "text-3xl font-bold", "{lab.title}" }
                p { class: "mt-2 {p.muted_text}", "{lab.summary}" }
            }
            for group in lab.groups.iter() {
                TabGroupView {
                    key: "{lab.slug}-{group.id}",
                    lab: lab.slug.clone(),
                    group: group.clone(),
                    theme: theme,
                }
            }
        }
    }
}
