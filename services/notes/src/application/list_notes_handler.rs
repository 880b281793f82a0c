/// ノート一覧ハンドラー
///
/// GET /notes でテーブル全体を読み込み、createdAt降順で返す。
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use thiserror::Error;
use tracing::{error, info};

use super::http_response::{error_response, json_response};
use crate::domain::{sort_newest_first, NoteList};
use crate::infrastructure::{NoteRepository, NoteRepositoryError};

/// ノート一覧ハンドラーのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListNotesError {
    /// リポジトリ操作エラー
    #[error("Repository error: {0}")]
    RepositoryError(#[from] NoteRepositoryError),
}

/// ノート一覧リクエストを処理するハンドラー
pub struct ListNotesHandler<NR>
where
    NR: NoteRepository,
{
    /// ノートリポジトリ
    note_repo: NR,
}

impl<NR> ListNotesHandler<NR>
where
    NR: NoteRepository,
{
    /// 新しいListNotesHandlerを作成
    pub fn new(note_repo: NR) -> Self {
        Self { note_repo }
    }

    /// 全ノートを取得して新しい順に並べる
    pub async fn list(&self) -> Result<NoteList, ListNotesError> {
        let mut notes = self.note_repo.scan().await?;
        sort_newest_first(&mut notes);
        Ok(NoteList::new(notes))
    }

    /// HTTPリクエストを処理してレスポンスを生成
    ///
    /// リクエストボディは参照しない。
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        info!(
            method = %request.method(),
            path = request.uri().path(),
            "ノート一覧リクエスト受信"
        );

        match self.list().await {
            Ok(list) => {
                info!(count = list.count, "ノート一覧取得完了");
                json_response(StatusCode::OK, &list)
            }
            Err(e) => {
                error!(error = %e, "ノート一覧取得失敗");
                error_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http_response::body_json;
    use crate::domain::Note;
    use crate::infrastructure::logging::init_test_logging;
    use crate::infrastructure::note_repository::tests::MockNoteRepository;
    use lambda_http::http::Request as HttpRequest;
    use serde_json::json;

    fn note(id: &str, created_at: &str) -> Note {
        Note {
            id: id.to_string(),
            title: Some(format!("title-{}", id)),
            content: Some(format!("content-{}", id)),
            created_at: Some(created_at.to_string()),
        }
    }

    fn get_request() -> Request {
        HttpRequest::builder()
            .method("GET")
            .uri("/notes")
            .body(Body::Empty)
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let handler = ListNotesHandler::new(MockNoteRepository::new());

        let list = handler.list().await.unwrap();

        assert!(list.notes.is_empty());
        assert_eq!(list.count, 0);
    }

    #[tokio::test]
    async fn test_list_sorted_newest_first() {
        let repo = MockNoteRepository::new();
        repo.insert(note("t2", "2024-01-02T00:00:00.000Z"));
        repo.insert(note("t1", "2024-01-01T00:00:00.000Z"));
        repo.insert(note("t3", "2024-01-03T00:00:00.000Z"));
        let handler = ListNotesHandler::new(repo);

        let list = handler.list().await.unwrap();

        let ids: Vec<&str> = list.notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t2", "t1"]);
        assert_eq!(list.count, 3);
    }

    #[tokio::test]
    async fn test_list_repository_error() {
        let repo = MockNoteRepository::new();
        repo.set_next_error(NoteRepositoryError::ReadError("timeout".to_string()));
        let handler = ListNotesHandler::new(repo);

        let result = handler.list().await;

        assert_eq!(
            result,
            Err(ListNotesError::RepositoryError(NoteRepositoryError::ReadError(
                "timeout".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_handle_empty_table_response() {
        init_test_logging();
        let handler = ListNotesHandler::new(MockNoteRepository::new());

        let response = handler.handle(&get_request()).await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(body_json(&response), json!({"notes": [], "count": 0}));
    }

    #[tokio::test]
    async fn test_handle_returns_notes_and_count() {
        init_test_logging();
        let repo = MockNoteRepository::new();
        repo.insert(note("a", "2024-01-01T00:00:00.000Z"));
        repo.insert(note("b", "2024-02-01T00:00:00.000Z"));
        let handler = ListNotesHandler::new(repo);

        let response = handler.handle(&get_request()).await;

        assert_eq!(response.status(), 200);
        assert_eq!(
            body_json(&response),
            json!({
                "notes": [
                    {
                        "id": "b",
                        "title": "title-b",
                        "content": "content-b",
                        "createdAt": "2024-02-01T00:00:00.000Z"
                    },
                    {
                        "id": "a",
                        "title": "title-a",
                        "content": "content-a",
                        "createdAt": "2024-01-01T00:00:00.000Z"
                    }
                ],
                "count": 2
            })
        );
    }

    /// リクエストボディは無視される
    #[tokio::test]
    async fn test_handle_ignores_body() {
        let handler = ListNotesHandler::new(MockNoteRepository::new());
        let request = HttpRequest::builder()
            .method("GET")
            .uri("/notes")
            .body(Body::Text("garbage".to_string()))
            .unwrap();

        let response = handler.handle(&request).await;

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_handle_repository_error_returns_500() {
        init_test_logging();
        let repo = MockNoteRepository::new();
        repo.set_next_error(NoteRepositoryError::ReadError("down".to_string()));
        let handler = ListNotesHandler::new(repo);

        let response = handler.handle(&get_request()).await;

        assert_eq!(response.status(), 500);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(body_json(&response), json!({"error": "Something went wrong"}));
    }
}
