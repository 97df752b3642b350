//! Hash collections used throughout the workspace.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
