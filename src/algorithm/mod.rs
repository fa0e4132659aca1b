/// Greedy grid assembly and run configuration
pub mod executor;
/// Border scoring and matching policies
pub mod matching;
/// Pools of unplaced tiles with consumption markers
pub mod pool;
/// Best-candidate selection from a pool
pub mod selection;
