pub mod answer;
pub mod environment;
pub mod invocation;
pub mod step;

pub use answer::is_affirmative;
pub use environment::ProcessEnvironment;
pub use invocation::{CommandOutput, CommandStatus, Invocation};
pub use step::{BootstrapReport, DownloadOutcome, SkipReason, Step, VenvOutcome};
