/// ノート作成ハンドラー
///
/// POST /notes のリクエストボディからノートを作成し、テーブルに保存する。
use std::sync::Arc;

use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use thiserror::Error;
use tracing::{error, info};

use super::http_response::{error_response, json_response};
use crate::domain::{CreateNoteRequest, Note};
use crate::infrastructure::{
    Clock, IdGenerator, NoteRepository, NoteRepositoryError, SystemClock, UuidIdGenerator,
};

/// ノート作成ハンドラーのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreateNoteError {
    /// リクエストボディがノート作成用のJSONオブジェクトとして解釈できない
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// リポジトリ操作エラー
    #[error("Repository error: {0}")]
    RepositoryError(#[from] NoteRepositoryError),
}

/// ノート作成リクエストを処理するハンドラー
pub struct CreateNoteHandler<NR>
where
    NR: NoteRepository,
{
    /// ノートリポジトリ
    note_repo: NR,
    /// ノートID生成
    id_generator: Arc<dyn IdGenerator>,
    /// 作成時刻の取得元
    clock: Arc<dyn Clock>,
}

impl<NR> CreateNoteHandler<NR>
where
    NR: NoteRepository,
{
    /// UUID採番とシステム時計を使うハンドラーを作成
    pub fn new(note_repo: NR) -> Self {
        Self::with_sources(note_repo, Arc::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    /// ID生成と時計を指定してハンドラーを作成
    pub fn with_sources(
        note_repo: NR,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            note_repo,
            id_generator,
            clock,
        }
    }

    /// リクエストボディからノートを作成して保存
    ///
    /// # 処理フロー
    /// 1. ボディをJSONとしてパース（title/contentは検証しない）
    /// 2. IDと作成日時を採番してノートを構築
    /// 3. 1回のputで保存
    ///
    /// # 戻り値
    /// * 成功時は保存したノート
    /// * 失敗時は`Err(CreateNoteError)`
    pub async fn create(&self, body: &[u8]) -> Result<Note, CreateNoteError> {
        let request: CreateNoteRequest = serde_json::from_slice(body)
            .map_err(|e| CreateNoteError::MalformedBody(e.to_string()))?;

        let note = Note::new(self.id_generator.generate(), request, self.clock.now());

        self.note_repo.put(&note).await?;

        Ok(note)
    }

    /// HTTPリクエストを処理してレスポンスを生成
    ///
    /// 成功時は200と保存したノート、失敗時は種類を問わず500と汎用エラーを返す。
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        let body = request.body().as_ref();

        info!(
            method = %request.method(),
            path = request.uri().path(),
            body_size = body.len(),
            "ノート作成リクエスト受信"
        );

        match self.create(body).await {
            Ok(note) => {
                info!(note_id = %note.id, "ノート作成完了");
                json_response(StatusCode::OK, &note)
            }
            Err(e) => {
                error!(error = %e, "ノート作成失敗");
                error_response()
            }
        }
    }
}
