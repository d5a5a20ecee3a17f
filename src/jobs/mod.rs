pub mod seed_unicorns;

pub use seed_unicorns::{insert_or_ignore, run_seed_unicorns, seed_and_release, seed_unicorns, LoadSummary};
