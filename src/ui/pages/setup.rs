//! Planet setup: add, edit, remove and prioritise planets; import/export the setup.

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{export_planets_json, parse_planets_json, AppState, Planet, PlanetType},
    ui::{
        components::{
            priority_grid::{PriorityGrid, PriorityToggle},
            toast::{notify, Notice, NoticeQueue},
        },
        theme,
    },
    util::generate_id,
};

/// Raw form values; units stay text until submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetDraft {
    pub name: String,
    pub planet_type: PlanetType,
    pub units: String,
}

impl PlanetDraft {
    fn blank() -> Self {
        Self {
            name: String::new(),
            planet_type: PlanetType::Agro,
            units: "0".to_string(),
        }
    }

    fn of(planet: &Planet) -> Self {
        Self {
            name: planet.name.clone(),
            planet_type: planet.planet_type,
            units: planet.trading_units.to_string(),
        }
    }
}

#[component]
pub fn SetupPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let notices = use_context::<NoticeQueue>();

    let mut editing = use_signal(|| None::<String>);
    let mut import_json = use_signal(String::new);

    let planets = state.with(|st| st.planets.clone());
    let planet_rows = planets
        .iter()
        .map(|planet| {
            let priorities = planet
                .trade_priorities
                .iter()
                .map(|id| state.with(|st| st.planet_name(id)))
                .collect::<Vec<_>>()
                .join(", ");
            (planet.clone(), priorities)
        })
        .collect::<Vec<_>>();
    let edited_planet = editing().and_then(|id| state.with(|st| st.planet(&id).cloned()));

    let on_add = {
        let mut state = state;
        move |draft: PlanetDraft| {
            let units = match parse_units(&draft.units) {
                Ok(units) => units,
                Err(notice) => return notify(notices, notice),
            };
            let added = state.with_mut(|st| {
                st.add_planet(generate_id("planet"), &draft.name, draft.planet_type, units)
            });
            if !added {
                return notify(notices, Notice::MissingName);
            }
            commit(state, notices);
            notify(notices, Notice::PlanetAdded { name: draft.name.trim().to_string() });
        }
    };

    let on_save_edit = {
        let mut state = state;
        move |draft: PlanetDraft| {
            let Some(id) = editing() else {
                return;
            };
            let units = match parse_units(&draft.units) {
                Ok(units) => units,
                Err(notice) => return notify(notices, notice),
            };
            let updated = state
                .with_mut(|st| st.update_planet(&id, &draft.name, draft.planet_type, units));
            if !updated {
                return notify(notices, Notice::MissingName);
            }
            editing.set(None);
            commit(state, notices);
            notify(notices, Notice::PlanetUpdated { name: draft.name.trim().to_string() });
        }
    };

    let on_remove = {
        let mut state = state;
        move |id: String| {
            let name = state.with(|st| st.planet_name(&id));
            state.with_mut(|st| st.remove_planet(&id));
            if editing().as_deref() == Some(id.as_str()) {
                editing.set(None);
            }
            commit(state, notices);
            notify(notices, Notice::PlanetRemoved { name });
        }
    };

    let on_toggle = {
        let mut state = state;
        move |toggle: PriorityToggle| {
            state.with_mut(|st| {
                st.toggle_priority(&toggle.planet_id, &toggle.partner_id, toggle.enabled)
            });
            commit(state, notices);
        }
    };

    let on_import = {
        let mut state = state;
        move |_| match parse_planets_json(&import_json(), || generate_id("planet")) {
            Ok(planets) => {
                let count = planets.len();
                state.with_mut(|st| st.replace_planets(planets));
                editing.set(None);
                commit(state, notices);
                import_json.set(String::new());
                notify(notices, Notice::SetupImported { planets: count });
            }
            Err(err) => notify(notices, err),
        }
    };

    let on_export = move |_| match state.with(|st| export_planets_json(&st.planets)) {
        Ok(json) => import_json.set(json),
        Err(err) => notify(notices, err),
    };

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { class: "label", "Add Planet" }
                PlanetForm {
                    key: "new",
                    initial: PlanetDraft::blank(),
                    submit_label: "Add Planet",
                    reset_on_submit: true,
                    on_submit: on_add,
                }
            }

            if let Some(planet) = edited_planet {
                section { class: "panel",
                    h2 { class: "label", "Edit {planet.name}" }
                    PlanetForm {
                        key: "{planet.id}",
                        initial: PlanetDraft::of(&planet),
                        submit_label: "Save",
                        reset_on_submit: false,
                        on_submit: on_save_edit,
                        on_cancel: move |_| editing.set(None),
                    }
                }
            }

            section { class: "panel",
                h2 { class: "label", "Planets" }
                PlanetTable {
                    rows: planet_rows,
                    on_edit: move |id: String| editing.set(Some(id)),
                    on_remove,
                }
            }

            section { class: "panel",
                h2 { class: "label", "Trade Priorities" }
                p { class: "muted small",
                    "Select the planets each planet should prioritise. Selection order is priority order."
                }
                PriorityGrid { planets: planets.clone(), on_toggle }
            }

            section { class: "panel",
                h2 { class: "label", "Import / Export Setup" }
                p { class: "muted small",
                    "A JSON array of planets with name, type, tradingUnits and tradePriorities."
                }
                textarea {
                    class: "json-editor",
                    rows: "10",
                    value: import_json(),
                    oninput: move |evt| import_json.set(evt.value()),
                    placeholder: "Paste your JSON here...",
                }
                div { class: "button-row",
                    button { class: "btn btn-primary", onclick: on_import, "Import" }
                    button { class: "btn", onclick: on_export, "Export" }
                }
            }
        }
    }
}

#[component]
fn PlanetForm(
    initial: PlanetDraft,
    submit_label: &'static str,
    reset_on_submit: bool,
    on_submit: EventHandler<PlanetDraft>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut name = use_signal(|| initial.name.clone());
    let mut planet_type = use_signal(|| initial.planet_type);
    let mut units = use_signal(|| initial.units.clone());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(PlanetDraft {
            name: name(),
            planet_type: planet_type(),
            units: units(),
        });
        if reset_on_submit {
            name.set(String::new());
            units.set("0".to_string());
        }
    };

    rsx! {
        form { class: "form-row", onsubmit: submit,
            div { class: "field grow",
                label { "Name" }
                input {
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                    placeholder: "e.g. Ceres",
                }
            }
            div { class: "field",
                label { "Type" }
                select {
                    value: planet_type().name(),
                    onchange: move |evt| {
                        if let Some(kind) = PlanetType::parse(&evt.value()) {
                            planet_type.set(kind);
                        }
                    },
                    for kind in PlanetType::ALL {
                        option { value: kind.name(), selected: kind == planet_type(), "{kind.icon()} {kind}" }
                    }
                }
            }
            div { class: "field narrow",
                label { "Trading Units" }
                input {
                    inputmode: "numeric",
                    value: units(),
                    oninput: move |evt| units.set(evt.value()),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
            if let Some(cancel) = on_cancel {
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn PlanetTable(
    rows: Vec<(Planet, String)>,
    on_edit: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div { class: "table-container",
            table { class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { class: "right", "Trading Units" }
                        th { "Priorities" }
                        th {}
                    }
                }
                tbody {
                    for (planet, priorities) in rows {
                        tr {
                            td { "{planet.name}" }
                            td {
                                span { class: "{theme::type_badge(planet.planet_type)}",
                                    "{planet.planet_type.icon()} {planet.planet_type}"
                                }
                            }
                            td { class: "right", "{planet.trading_units}" }
                            td { class: "muted", "{priorities}" }
                            td { class: "right",
                                button {
                                    class: "btn",
                                    onclick: {
                                        let id = planet.id.clone();
                                        move |_| on_edit.call(id.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger",
                                    onclick: {
                                        let id = planet.id.clone();
                                        move |_| on_remove.call(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                    if is_empty {
                        tr {
                            td { class: "muted center", colspan: "5", "No planets yet." }
                        }
                    }
                }
            }
        }
    }
}

/// Recomputes the allocation and persists the setup after an edit.
fn commit(mut state: Signal<AppState>, notices: NoticeQueue) {
    state.with_mut(|st| st.recalculate());
    persist_user_state(&state, notices);
}

pub fn parse_units(raw: &str) -> Result<u32, Notice> {
    raw.trim().parse::<u32>().map_err(|_| Notice::InvalidUnits {
        raw: raw.trim().to_string(),
    })
}
