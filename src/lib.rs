pub mod batch;
pub mod config;
pub mod error;
pub mod installer;
pub mod records;
pub mod scaffold;

// Re-export commonly used types
pub use batch::BatchReport;
pub use error::{FatalGenerationError, RecoverableInstallError};
pub use records::Record;
pub use scaffold::{Generator, HeroWordPool};
