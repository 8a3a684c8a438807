use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};
use crate::ui::theme;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "header-inner",
                    div {
                        h1 { class: "title", "🪐 {APP_NAME}" }
                        p { class: "muted small", "{version_label()}" }
                    }
                    nav { class: "nav",
                        NavButton {
                            active: matches!(current_route, Route::Setup {}),
                            onclick: move |_| { nav.push(Route::Setup {}); },
                            label: "Planet Setup",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "Trade Calculator",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
