pub mod matcher;
pub mod planner;
pub mod weights;

pub use matcher::{MatchOccurrence, PatternMatcher};
pub use planner::plan;
pub use weights::Weights;
