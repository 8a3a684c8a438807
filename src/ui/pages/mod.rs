pub mod calculator;
pub mod setup;

pub use calculator::CalculatorPage;
pub use setup::SetupPage;
