use wasm_bindgen::prelude::*;

/// Light/dark flag. Passed explicitly to anything that picks colors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads `prefers-color-scheme` from the browser.
    pub fn detect() -> Result<Theme, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let dark = window
            .match_media("(prefers-color-scheme: dark)")?
            .map(|q| q.matches())
            .unwrap_or(false);
        Ok(if dark { Theme::Dark } else { Theme::Light })
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Color tokens. Both themes define the same slots.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub muted_bg: &'static str,
    pub elevated_bg: &'static str,
    pub accent_text: &'static str,
    pub accent_border: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub shadow: &'static str,
    pub chrome_bg: &'static str,
    pub chrome_text: &'static str,
    pub terminal_bg: &'static str,
    pub terminal_text: &'static str,
}

const LIGHT: Palette = Palette {
    page: "bg-slate-100",
    text: "text-zinc-900",
    muted_text: "text-zinc-500",
    muted_bg: "bg-zinc-100",
    elevated_bg: "bg-white",
    accent_text: "text-emerald-600",
    accent_border: "border-emerald-600",
    border: "border-zinc-200",
    hover: "hover:text-zinc-900",
    shadow: "shadow-md shadow-zinc-300",
    chrome_bg: "bg-zinc-800",
    chrome_text: "text-zinc-100",
    terminal_bg: "bg-zinc-900",
    terminal_text: "text-emerald-300",
};

const DARK: Palette = Palette {
    page: "bg-zinc-950",
    text: "text-zinc-100",
    muted_text: "text-zinc-400",
    muted_bg: "bg-zinc-800",
    elevated_bg: "bg-zinc-900",
    accent_text: "text-emerald-400",
    accent_border: "border-emerald-400",
    border: "border-zinc-700",
    hover: "hover:text-zinc-100",
    shadow: "shadow-md shadow-black",
    chrome_bg: "bg-zinc-950",
    chrome_text: "text-zinc-300",
    terminal_bg: "bg-black",
    terminal_text: "text-emerald-400",
};

#[test]
fn test_toggle() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
}
