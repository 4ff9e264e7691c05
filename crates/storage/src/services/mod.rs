pub mod candidate;
pub mod partition;
pub mod scoring;
pub mod team_editing;
pub mod team_generation;
