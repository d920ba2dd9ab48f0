pub mod startup;

pub use startup::{StartupContext, init_tracing, prepare_startup};
