//! Property tests of the inbound search.

mod determinism;
mod priority_key;
mod references;
mod strategies;
