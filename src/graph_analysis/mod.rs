/// Graph analysis core - domain model and pure analysis services
///
/// This module contains the engine of the tool: the dependency graph
/// aggregate and the analyzers that consume it read-only. Nothing in here
/// performs I/O.
pub mod domain;
pub mod services;
