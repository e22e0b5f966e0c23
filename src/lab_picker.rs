use dioxus::prelude::*;

// `(slug, title)` pairs, see `labs::catalogue`
#[component]
pub fn LabPicker(labs: Vec<(String, String)>, current: String, onpick: EventHandler<String>) -> Element {
    rsx! {
        select {
            id: "lab-picker",
            class: "h-10 rounded-md border px-2 bg-transparent",
            onchange: move |e: Event<FormData>| {
                let slug = e.data.value();
                tracing::info!("lab changed to: \"{}\"", slug);
                onpick.call(slug);
            },
            for (slug , title) in labs {
                option { key: "{slug}", value: "{slug}", selected: slug == current, "{title}" }
            }
        }
    }
}
