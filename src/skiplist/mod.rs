//! Probabilistic linked hierarchy of subsequences.

mod set;

pub use self::set::{SkipSet, SkipSetIntoIter, SkipSetIter, DEFAULT_SEED, MAX_HEIGHT};
