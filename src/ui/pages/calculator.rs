use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        export_trade_matrix_json, fair_share_rows, missed_trades, parse_trade_matrix_json,
        unused_units, utilization, AppState,
    },
    ui::{
        components::{
            analysis_panel::{AnalysisPanel, FairShareTable, FairShareView, MissedRow, UnusedRow},
            kpi_card::KpiCard,
            toast::{notify, Notice, NoticeQueue},
            trade_cards::TradeCards,
            trade_matrix_table::{MatrixHeader, TradeMatrixTable},
        },
        pages::setup::parse_units,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let notices = use_context::<NoticeQueue>();

    let initial_settings = state.with(|st| st.settings.clone());
    let mut global_input = use_signal(|| initial_settings.global_capacity.to_string());
    let mut editing = use_signal(|| None::<String>);
    let mut edit_units = use_signal(String::new);
    let mut matrix_json = use_signal(String::new);

    let snapshot = state.read().clone();
    let planets = snapshot.planets.clone();
    let matrix = snapshot.trade_matrix.clone();
    let capacity_of = |id: &str| snapshot.capacity_of(id);
    let unused_of = |id: &str| unused_units(&planets, &matrix, id, capacity_of);

    let capacities = planets
        .iter()
        .map(|planet| capacity_of(&planet.id))
        .collect::<Vec<_>>();
    let headers = planets
        .iter()
        .zip(capacities.iter())
        .map(|(planet, capacity)| MatrixHeader {
            planet: planet.clone(),
            capacity: *capacity,
        })
        .collect::<Vec<_>>();
    let unused_rows = utilization(&planets, &matrix, capacity_of)
        .into_iter()
        .zip(planets.iter())
        .map(|(row, planet)| UnusedRow {
            name: planet.name.clone(),
            planet_type: planet.planet_type,
            unused: row.unused,
        })
        .collect::<Vec<_>>();
    let missed_rows = missed_trades(&planets, &matrix, unused_of)
        .into_iter()
        .map(|missed| MissedRow {
            from: snapshot.planet_name(&missed.from),
            to: snapshot.planet_name(&missed.to),
            max_possible: missed.max_possible,
        })
        .collect::<Vec<_>>();
    let fair_share_views = fair_share_rows(&planets, &snapshot.fair_share)
        .into_iter()
        .filter_map(|row| {
            let planet = snapshot.planet(&row.planet_id)?;
            let partner = snapshot.planet(&row.partner_id)?;
            Some(FairShareView {
                planet: planet.name.clone(),
                planet_type: planet.planet_type,
                partner: partner.name.clone(),
                partner_type: partner.planet_type,
                units: row.units,
            })
        })
        .collect::<Vec<_>>();

    let total_units = planets
        .iter()
        .enumerate()
        .map(|(i, a)| {
            planets[i + 1..]
                .iter()
                .filter(|b| a.can_trade_with(b))
                .map(|b| u64::from(matrix.pair_units(&a.id, &b.id)))
                .sum::<u64>()
        })
        .sum::<u64>();
    let total_unused = unused_rows.iter().map(|row| row.unused.max(0)).sum::<i64>();
    let missed_count = missed_rows.len();
    let use_global = snapshot.settings.use_global_capacity;
    let editing_name = editing().map(|id| snapshot.planet_name(&id));

    let on_toggle_global = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| st.settings.use_global_capacity = !st.settings.use_global_capacity);
            persist_user_state(&state, notices);
        }
    };

    let on_calculate = {
        let mut state = state.clone();
        move |_| {
            if state.with(|st| st.settings.use_global_capacity) {
                match parse_units(&global_input()) {
                    Ok(units) => state.with_mut(|st| st.settings.global_capacity = units),
                    Err(notice) => return notify(notices, notice),
                }
            }
            state.with_mut(|st| st.recalculate());
            persist_user_state(&state, notices);
            let traded_units = state.with(|st| st.trade_matrix.total_units());
            notify(notices, Notice::Recalculated { traded_units });
        }
    };

    let on_edit = move |id: String| {
        let current = state.with(|st| st.capacity_of(&id));
        edit_units.set(current.to_string());
        editing.set(Some(id));
    };

    let on_save_edit = {
        let mut state = state.clone();
        move |_| {
            let Some(id) = editing() else {
                return;
            };
            match parse_units(&edit_units()) {
                Ok(units) => {
                    state.with_mut(|st| {
                        st.set_trading_units(&id, units);
                        st.recalculate();
                    });
                    persist_user_state(&state, notices);
                    editing.set(None);
                }
                Err(notice) => notify(notices, notice),
            }
        }
    };

    let on_import_matrix = {
        let mut state = state.clone();
        move |_| match parse_trade_matrix_json(&matrix_json()) {
            Ok(matrix) => {
                let rows = matrix.rows().count();
                state.with_mut(|st| st.trade_matrix = matrix);
                matrix_json.set(String::new());
                notify(notices, Notice::MatrixImported { rows });
            }
            Err(err) => notify(notices, err),
        }
    };

    let on_export_matrix = move |_| match state.with(|st| export_trade_matrix_json(&st.trade_matrix)) {
        Ok(json) => matrix_json.set(json),
        Err(err) => notify(notices, err),
    };

    rsx! {
        div { class: "page",
            section { class: "kpi-grid",
                KpiCard {
                    title: "Traded Units".to_string(),
                    value: total_units.to_string(),
                    description: Some("Sum over all trading pairs".to_string()),
                }
                KpiCard {
                    title: "Unused Units".to_string(),
                    value: total_unused.to_string(),
                    description: Some("Capacity left across all planets".to_string()),
                }
                KpiCard {
                    title: "Missed Trades".to_string(),
                    value: missed_count.to_string(),
                }
            }

            section { class: "panel form-row",
                label { class: "switch",
                    input {
                        r#type: "checkbox",
                        checked: use_global,
                        onchange: on_toggle_global,
                    }
                    " Use Global Max Units"
                }
                if use_global {
                    div { class: "field narrow",
                        label { "Max Units per Planet" }
                        input {
                            inputmode: "numeric",
                            value: global_input(),
                            oninput: move |evt| global_input.set(evt.value()),
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    title: "Fair share with priority partners first, then fill remaining units with any valid partner",
                    onclick: on_calculate,
                    "Calculate Optimal Trades"
                }
            }

            if let Some(name) = editing_name {
                section { class: "panel form-row",
                    div { class: "field narrow",
                        label { "Available Units for {name}" }
                        input {
                            inputmode: "numeric",
                            value: edit_units(),
                            oninput: move |evt| edit_units.set(evt.value()),
                        }
                    }
                    button { class: "btn btn-primary", onclick: on_save_edit, "Save" }
                    button { class: "btn", onclick: move |_| editing.set(None), "Cancel" }
                }
            }

            details { class: "panel",
                summary { "Planet Trade Cards" }
                TradeCards { planets: planets.clone(), matrix: matrix.clone(), capacities: capacities.clone() }
            }

            section { class: "split",
                div { class: "grow",
                    TradeMatrixTable { headers, matrix: matrix.clone(), on_edit }
                }
                AnalysisPanel { unused: unused_rows, missed: missed_rows }
            }

            FairShareTable { rows: fair_share_views }

            section { class: "panel",
                h2 { class: "label", "Import / Export Trade Structure" }
                p { class: "muted small",
                    "An object keyed by planet id, each mapping partner ids to traded units."
                }
                textarea {
                    class: "json-editor",
                    rows: "10",
                    value: matrix_json(),
                    oninput: move |evt| matrix_json.set(evt.value()),
                    placeholder: "Paste your JSON here...",
                }
                div { class: "button-row",
                    button { class: "btn btn-primary", onclick: on_import_matrix, "Import Trades" }
                    button { class: "btn", onclick: on_export_matrix, "Export" }
                }
            }
        }
    }
}
