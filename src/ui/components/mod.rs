pub mod analysis_panel;
pub mod kpi_card;
pub mod priority_grid;
pub mod toast;
pub mod trade_cards;
pub mod trade_matrix_table;
