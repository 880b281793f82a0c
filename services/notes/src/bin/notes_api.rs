/// ノートAPI Lambdaエントリポイント（単一関数構成）
///
/// POST /notes、GET /notes、OPTIONSプリフライトを1つのLambda関数で処理する。
/// ルートごとに関数を分ける構成ではcreate_note / list_notesを使う。
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use notes::application::{error_response, NotesRouter, Route};
use notes::infrastructure::{init_logging, DynamoDbConfig, DynamoDbConfigError, DynamoNoteRepository};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// NotesRouterの静的インスタンス（warm start時に再利用）
static ROUTER: OnceCell<NotesRouter<DynamoNoteRepository>> = OnceCell::const_new();

async fn get_router() -> Result<&'static NotesRouter<DynamoNoteRepository>, DynamoDbConfigError> {
    ROUTER
        .get_or_try_init(|| async {
            let config = DynamoDbConfig::from_env().await?;
            info!(table_name = config.table_name(), "DynamoDBクライアントを初期化");
            Ok(NotesRouter::new(DynamoNoteRepository::from_config(&config)))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    info!("ノートAPI Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// プリフライトと未対応ルートはDynamoDB設定に依存せずに応答する。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let route = Route::resolve(&request);
    if let Some(response) = route.static_response() {
        return Ok(response);
    }

    let router = match get_router().await {
        Ok(router) => router,
        Err(err) => {
            error!(error = %err, "DynamoDB設定の読み込みに失敗");
            return Ok(error_response());
        }
    };

    Ok(router.dispatch(route, &request).await)
}
