use std::collections::VecDeque;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{notify, NoticeQueue, NoticeStack},
        pages::{CalculatorPage, SetupPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[layout(ShellLayout)]
    #[route("/")]
    Setup {},
    #[route("/calculator")]
    Calculator {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| {
                    st.apply_persisted(saved);
                    st.recalculate();
                });
            }
        }
    });
    use_context_provider(|| state.clone());

    let notices: NoticeQueue = use_signal(VecDeque::new);
    use_context_provider(|| notices);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        NoticeStack {}
    }
}

#[component]
fn ShellLayout() -> Element {
    rsx! {
        Shell { Outlet::<Route> {} }
    }
}

#[component]
fn Setup() -> Element {
    rsx! { SetupPage {} }
}

#[component]
fn Calculator() -> Element {
    rsx! { CalculatorPage {} }
}

/// Saves planets and settings; a failed save is reported through `notices`.
pub fn persist_user_state(state: &Signal<AppState>, notices: NoticeQueue) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        notify(notices, err);
    }
}
