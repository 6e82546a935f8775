/// Use cases - application workflows orchestrating the domain services
mod analyze_graph;

pub use analyze_graph::AnalyzeGraphUseCase;
