// Infrastructure layer modules
pub mod clock;
pub mod config;
pub mod id_generator;
pub mod logging;
pub mod note_repository;

// Re-exports
pub use clock::{Clock, SystemClock};
pub use config::{DynamoDbConfig, DynamoDbConfigError};
pub use id_generator::{IdGenerator, UuidIdGenerator};
pub use logging::init_logging;
pub use note_repository::{DynamoNoteRepository, NoteRepository, NoteRepositoryError};
