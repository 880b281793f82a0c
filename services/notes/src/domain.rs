// Domain layer modules
pub mod note;
pub mod note_order;

// Re-exports
pub use note::{format_timestamp, CreateNoteRequest, Note, NoteList};
pub use note_order::sort_newest_first;
