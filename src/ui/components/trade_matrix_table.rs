use dioxus::prelude::*;

use crate::domain::{Planet, TradeMatrix};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct MatrixHeader {
    pub planet: Planet,
    pub capacity: u32,
}

#[component]
pub fn TradeMatrixTable(
    headers: Vec<MatrixHeader>,
    matrix: TradeMatrix,
    on_edit: EventHandler<String>,
) -> Element {
    if headers.is_empty() {
        return rsx! {
            p { class: "muted", "Add planets on the setup page to build a trade matrix." }
        };
    }

    let planets: Vec<Planet> = headers.iter().map(|h| h.planet.clone()).collect();
    let rows = planets
        .iter()
        .map(|from| {
            let cells = planets
                .iter()
                .map(|to| {
                    if from.can_trade_with(to) {
                        matrix.get(&from.id, &to.id).to_string()
                    } else {
                        "-".to_string()
                    }
                })
                .collect::<Vec<_>>();
            (from.clone(), cells)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "table-container",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Planet" }
                        for header in headers {
                            th {
                                class: "center",
                                div { class: "stack",
                                    span { class: "{theme::type_accent(header.planet.planet_type)}",
                                        "{header.planet.planet_type.icon()} {header.planet.name}"
                                    }
                                    span { class: "muted small",
                                        "{header.capacity}"
                                        button {
                                            class: "btn-link",
                                            title: "Edit available units",
                                            onclick: {
                                                let id = header.planet.id.clone();
                                                move |_| on_edit.call(id.clone())
                                            },
                                            "✎"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (planet, cells) in rows {
                        tr {
                            th { class: "{theme::type_accent(planet.planet_type)}",
                                "{planet.planet_type.icon()} {planet.name}"
                            }
                            for cell in cells {
                                td { class: "center", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
