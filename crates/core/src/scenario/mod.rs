//! Month-by-month decision simulations.

pub mod engine;
pub mod error;
pub mod types;


pub use engine::{HORIZON_MONTHS, ScenarioEngine};
pub use error::ScenarioError;
pub use types::{DecisionScenario, MonthProjection, SimulationBaseline};
