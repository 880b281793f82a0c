// ノートAPIのルーティング
//
// 単一のLambda関数で全ルートを受ける場合に使用する。
// - POST /notes    -> ノート作成
// - GET /notes     -> ノート一覧
// - OPTIONS (任意) -> CORSプリフライト
// パスは`/notes`か、リクエストのステージ名を先頭に付けた`/{stage}/notes`のみ受け付ける。
// 末尾スラッシュは無視する。

use lambda_http::http::Method;
use lambda_http::request::RequestContext;
use lambda_http::{Body, Request, RequestExt, Response};
use tracing::warn;

use super::create_note_handler::CreateNoteHandler;
use super::http_response::{not_found_response, preflight_response};
use super::list_notes_handler::ListNotesHandler;
use crate::infrastructure::NoteRepository;

/// ノートリソースのパスセグメント
const NOTES_SEGMENT: &str = "notes";

/// リクエストの振り分け先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// CORSプリフライト
    Preflight,
    /// ノート作成
    CreateNote,
    /// ノート一覧
    ListNotes,
    /// 未対応のルート
    NotFound,
}

impl Route {
    /// リクエストのメソッドとパスから振り分け先を決める
    ///
    /// ストアにはアクセスしないため、設定の読み込み前に呼び出せる。
    pub fn resolve(request: &Request) -> Self {
        let method = request.method();

        if *method == Method::OPTIONS {
            return Route::Preflight;
        }

        let stage = request_stage(request);
        if !is_notes_path(request.uri().path(), stage.as_deref()) {
            return Route::NotFound;
        }

        match method {
            &Method::POST => Route::CreateNote,
            &Method::GET => Route::ListNotes,
            _ => Route::NotFound,
        }
    }

    /// ストアを必要としないルートのレスポンス
    ///
    /// プリフライトと未対応ルートは`Some`、ハンドラーが必要なルートは`None`。
    pub fn static_response(self) -> Option<Response<Body>> {
        match self {
            Route::Preflight => Some(preflight_response()),
            Route::NotFound => Some(not_found_response()),
            Route::CreateNote | Route::ListNotes => None,
        }
    }
}

/// ノートAPIルーター
pub struct NotesRouter<NR>
where
    NR: NoteRepository,
{
    create_handler: CreateNoteHandler<NR>,
    list_handler: ListNotesHandler<NR>,
}

impl<NR> NotesRouter<NR>
where
    NR: NoteRepository + Clone,
{
    /// 同じリポジトリを共有するハンドラーでルーターを作成
    pub fn new(note_repo: NR) -> Self {
        Self::with_handlers(
            CreateNoteHandler::new(note_repo.clone()),
            ListNotesHandler::new(note_repo),
        )
    }
}

impl<NR> NotesRouter<NR>
where
    NR: NoteRepository,
{
    /// ハンドラーを指定してルーターを作成
    pub fn with_handlers(
        create_handler: CreateNoteHandler<NR>,
        list_handler: ListNotesHandler<NR>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
        }
    }

    /// リクエストを対応するハンドラーに振り分ける
    pub async fn route(&self, request: &Request) -> Response<Body> {
        self.dispatch(Route::resolve(request), request).await
    }

    /// 解決済みのルートでリクエストを処理する
    pub async fn dispatch(&self, route: Route, request: &Request) -> Response<Body> {
        match route {
            Route::CreateNote => self.create_handler.handle(request).await,
            Route::ListNotes => self.list_handler.handle(request).await,
            Route::Preflight => preflight_response(),
            Route::NotFound => {
                warn!(
                    method = %request.method(),
                    path = request.uri().path(),
                    "未対応のルート"
                );
                not_found_response()
            }
        }
    }
}

/// API Gatewayのリクエストコンテキストからステージ名を取得
fn request_stage(request: &Request) -> Option<String> {
    match request.request_context_ref()? {
        RequestContext::ApiGatewayV1(ctx) => ctx.stage.clone(),
        RequestContext::ApiGatewayV2(ctx) => ctx.stage.clone(),
        _ => None,
    }
}

/// ノートリソースのパスかどうか
///
/// `/notes`、またはステージ名が分かっている場合に限り`/{stage}/notes`を受け付ける。
fn is_notes_path(path: &str, stage: Option<&str>) -> bool {
    let segments: Vec<&str> = path.trim_end_matches('/').split('/').skip(1).collect();

    match segments.as_slice() {
        [resource] => *resource == NOTES_SEGMENT,
        [prefix, resource] => *resource == NOTES_SEGMENT && stage == Some(*prefix),
        _ => false,
    }
}
