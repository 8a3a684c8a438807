//! Planet setup, trade allocation and the analytics derived from it.

pub mod allocation;
pub mod analytics;
pub mod app_state;
pub mod entities;
pub mod import;

pub use allocation::{allocate, compute_allocation, AllocationReport, CapacityPolicy};
pub use analytics::{
    fair_share_rows, missed_trades, mutual_used_units, trade_partners, unused_units, utilization,
    FairShareRow, MissedTrade, PartnerTrade, UtilizationRow, MISSED_TRADE_CANDIDATES,
};
pub use app_state::{AppState, CalculatorSettings, PersistedState};
pub use entities::{find_planet, Planet, PlanetId, PlanetType, TradeMatrix};
pub use import::{
    export_planets_json, export_trade_matrix_json, parse_planets_json, parse_trade_matrix_json,
    ImportError,
};
