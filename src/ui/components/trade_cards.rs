use dioxus::prelude::*;

use crate::domain::{trade_partners, Planet, TradeMatrix};
use crate::ui::theme;

/// One card per planet listing the partners it actually trades with.
#[component]
pub fn TradeCards(planets: Vec<Planet>, matrix: TradeMatrix, capacities: Vec<u32>) -> Element {
    let cards = planets
        .iter()
        .zip(capacities)
        .map(|(planet, capacity)| {
            let partners = trade_partners(&planets, &matrix, &planet.id)
                .into_iter()
                .filter_map(|trade| {
                    planets
                        .iter()
                        .find(|p| p.id == trade.partner_id)
                        .map(|partner| (partner.clone(), trade.units))
                })
                .collect::<Vec<_>>();
            (planet.clone(), capacity, partners)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "card-grid",
            for (planet, capacity, partners) in cards {
                div { class: "panel",
                    h3 { class: "{theme::type_accent(planet.planet_type)}",
                        "{planet.planet_type.icon()} {planet.name}"
                    }
                    p { class: "muted small", "{planet.planet_type} • Available: {capacity}" }
                    if partners.is_empty() {
                        p { class: "muted small", "No trades." }
                    } else {
                        table { class: "table compact",
                            tbody {
                                for (partner, units) in partners {
                                    tr {
                                        td { "{partner.planet_type.icon()} {partner.name}" }
                                        td { class: "right", "{units}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
