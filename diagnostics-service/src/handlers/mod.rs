pub mod diagnostics;
pub mod health;
pub mod metrics;

pub use diagnostics::diagnose;
pub use health::{health_check, root};
pub use metrics::metrics;
