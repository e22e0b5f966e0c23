use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

use super::style::Variant;
use super::TabDescriptor;

/// Builds a panel on demand for the given tab id. Called on every render of
/// a `labContent` tab set, so expensive builders should memoize themselves.
#[derive(Clone)]
pub struct RenderContent(Rc<dyn Fn(&str) -> Element>);

impl RenderContent {
    pub fn new(f: impl Fn(&str) -> Element + 'static) -> Self {
        RenderContent(Rc::new(f))
    }

    pub fn call(&self, id: &str) -> Element {
        (self.0)(id)
    }
}

impl PartialEq for RenderContent {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RenderContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("RenderContent(..)")
    }
}

pub enum Panel<'a> {
    NoSelection,
    Code(&'a str),
    Static(&'a Element),
    Rendered(Element),
}

impl fmt::Debug for Panel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Panel::NoSelection => f.write_str("NoSelection"),
            Panel::Code(code) => f.debug_tuple("Code").field(code).finish(),
            Panel::Static(_) => f.write_str("Static(..)"),
            Panel::Rendered(_) => f.write_str("Rendered(..)"),
        }
    }
}

pub fn resolve<'a>(
    variant: Variant,
    tabs: &'a [TabDescriptor],
    active_id: &str,
    render_content: Option<&RenderContent>,
) -> Panel<'a> {
    let Some(tab) = tabs.iter().find(|t| t.id == active_id) else {
        return Panel::NoSelection;
    };
    match variant {
        Variant::Terminal => Panel::Code(tab.code.as_deref().unwrap_or_default()),
        Variant::LabContent => match render_content {
            Some(render) => Panel::Rendered(render.call(&tab.id)),
            None => Panel::Static(&tab.content),
        },
        Variant::Default | Variant::Underlined | Variant::Pills => Panel::Static(&tab.content),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn tab(id: &str, code: Option<&str>) -> TabDescriptor {
        TabDescriptor {
            id: id.to_string(),
            label: id.to_uppercase(),
            icon: None,
            content: None,
            code: code.map(str::to_string),
        }
    }

    #[test]
    fn test_no_match_is_placeholder() {
        let tabs = vec![tab("a", None)];
        assert!(matches!(resolve(Variant::Default, &tabs, "zzz", None), Panel::NoSelection));
        assert!(matches!(resolve(Variant::Terminal, &[], "", None), Panel::NoSelection));
    }

    #[test]
    fn test_terminal_uses_code() {
        let tabs = vec![tab("npm", Some("npm i -D @playwright/test")), tab("bare", None)];
        match resolve(Variant::Terminal, &tabs, "npm", None) {
            Panel::Code(code) => assert_eq!(code, "npm i -D @playwright/test"),
            other => panic!("unexpected panel {other:?}"),
        }
        assert!(matches!(resolve(Variant::Terminal, &tabs, "bare", None), Panel::Code("")));
    }

    #[test]
    fn test_other_variants_ignore_code() {
        let tabs = vec![tab("a", Some("echo hi"))];
        for variant in [Variant::Default, Variant::Underlined, Variant::Pills, Variant::LabContent] {
            assert!(matches!(resolve(variant, &tabs, "a", None), Panel::Static(_)));
        }
    }

    #[test]
    fn test_lab_content_renders_lazily() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let render = {
            let seen = seen.clone();
            RenderContent::new(move |id| {
                seen.borrow_mut().push(id.to_string());
                None
            })
        };
        let tabs = vec![tab("a", None), tab("b", None)];

        assert!(matches!(
            resolve(Variant::LabContent, &tabs, "b", Some(&render)),
            Panel::Rendered(_)
        ));
        // only labContent consults the callback
        assert!(matches!(
            resolve(Variant::Pills, &tabs, "a", Some(&render)),
            Panel::Static(_)
        ));
        // no caching: every resolve calls again
        let _ = resolve(Variant::LabContent, &tabs, "b", Some(&render));
        assert_eq!(*seen.borrow(), vec!["b".to_string(), "b".to_string()]);

        assert!(matches!(
            resolve(Variant::LabContent, &tabs, "missing", Some(&render)),
            Panel::NoSelection
        ));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_render_content_eq_by_identity() {
        let a = RenderContent::new(|_| None);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, RenderContent::new(|_| None));
    }
}
