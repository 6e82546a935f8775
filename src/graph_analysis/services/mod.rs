mod criticality_analyzer;
mod cycle_detector;
mod impact_simulator;
mod install_sequencer;
mod scc_finder;
pub mod traversal;

pub use criticality_analyzer::{CriticalityAnalyzer, CriticalityReport};
pub use cycle_detector::CycleDetector;
pub use impact_simulator::{DependencyQuery, ImpactSimulator};
pub use install_sequencer::InstallSequencer;
pub use scc_finder::SccFinder;
