use dioxus::prelude::*;

use crate::domain::PlanetType;
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct UnusedRow {
    pub name: String,
    pub planet_type: PlanetType,
    pub unused: i64,
}

#[derive(Clone, PartialEq)]
pub struct MissedRow {
    pub from: String,
    pub to: String,
    pub max_possible: i64,
}

#[derive(Clone, PartialEq)]
pub struct FairShareView {
    pub planet: String,
    pub planet_type: PlanetType,
    pub partner: String,
    pub partner_type: PlanetType,
    pub units: u32,
}

#[component]
pub fn AnalysisPanel(unused: Vec<UnusedRow>, missed: Vec<MissedRow>) -> Element {
    rsx! {
        div { class: "panel",
            h2 { class: "label", "Trade Analysis" }
            details { open: true,
                summary { "Unused Units" }
                ul {
                    for row in unused {
                        li {
                            span { class: "{theme::type_accent(row.planet_type)}", "{row.planet_type.icon()} {row.name}" }
                            ": "
                            span { class: "{theme::unused_class(row.unused)}", "{row.unused}" }
                        }
                    }
                }
            }
            details { open: true,
                summary { "Missed Trades" }
                ul {
                    if missed.is_empty() {
                        li { class: "muted", "No missed trades found!" }
                    }
                    for row in missed {
                        li { "{row.from} → {row.to}: {row.max_possible} units" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FairShareTable(rows: Vec<FairShareView>) -> Element {
    rsx! {
        div { class: "panel",
            h2 { class: "label", "Fair-Share Distribution (Priority Trades)" }
            table { class: "table compact",
                thead {
                    tr {
                        th { "Planet" }
                        th { "Priority Partner" }
                        th { class: "right", "Fair-Share Units" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "muted", colspan: "3", "No trade priorities configured." }
                        }
                    }
                    for row in rows {
                        tr {
                            td { "{row.planet_type.icon()} {row.planet}" }
                            td { "{row.partner_type.icon()} {row.partner}" }
                            td { class: "right", "{row.units}" }
                        }
                    }
                }
            }
        }
    }
}
