pub mod adjacency;
pub mod grouping;
pub mod slope;
pub mod merge;

pub use adjacency::*;
pub use grouping::*;
pub use slope::*;
pub use merge::*;
