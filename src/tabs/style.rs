//! Class lists for tab headers and their surrounding chrome.
//!
//! Every slot is split into a layout half, decided by variant and size, and a
//! color half, taken from the theme palette. Switching themes only ever swaps
//! the color half.

use std::fmt;

use serde::Deserialize;

use crate::theme::{Palette, Theme};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Variant {
    #[default]
    Default,
    Underlined,
    Pills,
    Terminal,
    LabContent,
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        match s {
            "underlined" => Variant::Underlined,
            "pills" => Variant::Pills,
            "terminal" => Variant::Terminal,
            "labContent" | "lab-content" => Variant::LabContent,
            "default" => Variant::Default,
            other => {
                tracing::warn!(variant = other, "unknown tab variant, using default");
                Variant::Default
            }
        }
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Variant::from(s.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl From<&str> for Size {
    fn from(s: &str) -> Self {
        match s {
            "sm" => Size::Sm,
            "lg" => Size::Lg,
            _ => Size::Md,
        }
    }
}

impl From<String> for Size {
    fn from(s: String) -> Self {
        Size::from(s.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classes {
    pub layout: String,
    pub color: String,
}

impl Classes {
    fn new(layout: impl Into<String>, color: impl Into<String>) -> Self {
        Classes {
            layout: layout.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.layout.is_empty(), self.color.is_empty()) {
            (_, true) => write!(f, "{}", self.layout),
            (true, false) => write!(f, "{}", self.color),
            (false, false) => write!(f, "{} {}", self.layout, self.color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStyle {
    pub button: Classes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStyle {
    pub root: Classes,
    pub bar: Classes,
    pub panel: Classes,
}

fn padding(size: Size) -> &'static str {
    match size {
        Size::Sm => "px-2 py-1 text-xs",
        Size::Md => "px-3 py-1.5 text-sm",
        Size::Lg => "px-4 py-2 text-base",
    }
}

fn width(full_width: bool) -> &'static str {
    if full_width {
        "flex-1"
    } else {
        "flex-none"
    }
}

fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn resolve(variant: Variant, size: Size, full_width: bool, is_active: bool, theme: Theme) -> TabStyle {
    let p: &Palette = theme.palette();
    let button = match variant {
        Variant::Default => Classes::new(
            join(&["rounded-md font-medium transition-colors", padding(size), width(full_width)]),
            if is_active {
                join(&[p.elevated_bg, p.accent_text, p.shadow])
            } else {
                join(&[p.muted_text, p.hover])
            },
        ),
        Variant::Underlined => Classes::new(
            join(&["border-b-2 -mb-px font-medium transition-colors", padding(size), width(full_width)]),
            if is_active {
                join(&[p.accent_border, p.accent_text])
            } else {
                join(&["border-transparent", p.muted_text, p.hover])
            },
        ),
        Variant::Pills => Classes::new(
            join(&["rounded-full font-medium transition-all", padding(size), width(full_width)]),
            if is_active {
                join(&[p.elevated_bg, p.text, p.shadow])
            } else {
                join(&[p.muted_text, p.hover])
            },
        ),
        Variant::Terminal => Classes::new(
            join(&["px-3 py-1 font-mono text-xs rounded-t", width(full_width)]),
            if is_active {
                join(&[p.terminal_bg, p.terminal_text])
            } else {
                join(&[p.chrome_text, p.hover])
            },
        ),
        Variant::LabContent => Classes::new(
            "flex-1 px-2 py-2 text-sm font-medium text-center rounded-md transition-colors",
            if is_active {
                join(&[p.elevated_bg, p.accent_text, p.shadow])
            } else {
                join(&[p.muted_text, p.hover])
            },
        ),
    };
    TabStyle { button }
}

pub fn container(variant: Variant, full_width: bool, theme: Theme) -> ContainerStyle {
    let p: &Palette = theme.palette();
    match variant {
        Variant::Default => ContainerStyle {
            root: Classes::new("flex flex-col gap-2", ""),
            bar: Classes::new(
                join(&["inline-flex gap-1 rounded-lg p-1", if full_width { "w-full" } else { "" }]),
                p.muted_bg,
            ),
            panel: Classes::new("pt-2", p.text),
        },
        Variant::Underlined => ContainerStyle {
            root: Classes::new("flex flex-col", ""),
            bar: Classes::new(join(&["flex gap-4 border-b", if full_width { "w-full" } else { "" }]), p.border),
            panel: Classes::new("pt-4", p.text),
        },
        Variant::Pills => ContainerStyle {
            root: Classes::new("flex flex-col gap-3", ""),
            bar: Classes::new(join(&["flex flex-wrap gap-2", if full_width { "w-full" } else { "" }]), ""),
            panel: Classes::new("pt-1", p.text),
        },
        Variant::Terminal => ContainerStyle {
            root: Classes::new("flex flex-col rounded-lg overflow-hidden border", join(&[p.border, p.shadow])),
            bar: Classes::new("flex items-end gap-1 px-3 pt-2", join(&[p.chrome_bg, p.chrome_text])),
            panel: Classes::new("p-4 overflow-x-auto text-sm", join(&[p.terminal_bg, p.terminal_text])),
        },
        Variant::LabContent => ContainerStyle {
            root: Classes::new("flex flex-col gap-3", ""),
            bar: Classes::new("flex w-full justify-between gap-1 rounded-lg p-1", p.muted_bg),
            panel: Classes::new("p-4 rounded-lg border", join(&[p.border, p.elevated_bg, p.text])),
        },
    }
}

pub const TRAFFIC_LIGHTS: [&str; 3] = ["bg-red-500", "bg-yellow-400", "bg-green-500"];
