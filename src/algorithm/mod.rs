/// Arena of live strips with stable ids
pub mod collection;
/// Greedy merge loop and run configuration
pub mod engine;
/// Seam scoring between two strips
pub mod scoring;
