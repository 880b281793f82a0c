// アプリケーション層モジュール
pub mod create_note_handler;
pub mod http_response;
pub mod list_notes_handler;
pub mod router;

// 再エクスポート
pub use create_note_handler::{CreateNoteError, CreateNoteHandler};
pub use http_response::error_response;
pub use list_notes_handler::{ListNotesError, ListNotesHandler};
pub use router::{NotesRouter, Route};
