pub mod diagnostics;

pub use diagnostics::{DiagnosticRequest, DiagnosticResult};
