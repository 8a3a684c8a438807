use dioxus::prelude::*;

use crate::domain::Planet;
use crate::ui::theme;

#[derive(Clone, Debug, PartialEq)]
pub struct PriorityToggle {
    pub planet_id: String,
    pub partner_id: String,
    pub enabled: bool,
}

/// Checkbox grid: rows pick partners, selection order is rank order.
#[component]
pub fn PriorityGrid(planets: Vec<Planet>, on_toggle: EventHandler<PriorityToggle>) -> Element {
    let rows = planets
        .iter()
        .map(|planet| {
            let cells = planets
                .iter()
                .map(|partner| {
                    planet
                        .can_trade_with(partner)
                        .then(|| (partner.id.clone(), planet.priority_rank(&partner.id)))
                })
                .collect::<Vec<_>>();
            (planet.clone(), cells)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "table-container",
            table { class: "table",
                thead {
                    tr {
                        th { "Planet" }
                        for partner in planets.iter() {
                            th { class: "center", "{partner.name}" }
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
                                td { class: "center",
                                    {match cell {
                                        Some((partner_id, rank)) => {
                                            let planet_id = planet.id.clone();
                                            let checked = rank.is_some();
                                            rsx! {
                                                input {
                                                    r#type: "checkbox",
                                                    checked,
                                                    onchange: move |_| on_toggle.call(PriorityToggle {
                                                        planet_id: planet_id.clone(),
                                                        partner_id: partner_id.clone(),
                                                        enabled: !checked,
                                                    }),
                                                }
                                                if let Some(rank) = rank {
                                                    span { class: "muted small", " #{rank}" }
                                                }
                                            }
                                        }
                                        None => rsx! { span { class: "muted", "-" } },
                                    }}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
