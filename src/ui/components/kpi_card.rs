use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "panel kpi",
            h3 { class: "label", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "muted small", "{desc}" }
            }
        }
    }
}
