pub mod cycle;
pub mod evaluator;
pub mod model;
pub mod ports;
pub mod window;

pub use cycle::{CycleReport, MonitorCycle, list_jobs};
pub use model::{AlertEvent, Job, KeeperNetwork, WorkabilityOutcome};
pub use ports::{AlertPort, ChainPort, JobPort, RegistryPort};
pub use window::BlockWindow;

#[cfg(test)]
pub(crate) mod testing;
