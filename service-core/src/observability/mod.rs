pub mod logging;
pub mod timestamp;

pub use logging::init_tracing;
pub use timestamp::{format_ist, ist_now};
