/// POST /notes Lambdaエントリポイント
///
/// API Gateway REST統合経由のリクエストからノートを作成し、DynamoDBに保存する。
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use notes::application::{error_response, CreateNoteHandler};
use notes::infrastructure::{init_logging, DynamoDbConfig, DynamoDbConfigError, DynamoNoteRepository};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// CreateNoteHandlerの静的インスタンス
///
/// Lambda warm start時にDynamoDBクライアントを再利用するため、
/// 初回呼び出しで初期化したハンドラーを保持する。
static CREATE_HANDLER: OnceCell<CreateNoteHandler<DynamoNoteRepository>> = OnceCell::const_new();

/// CreateNoteHandlerを取得（初期化されていなければ初期化）
async fn get_create_handler(
) -> Result<&'static CreateNoteHandler<DynamoNoteRepository>, DynamoDbConfigError> {
    CREATE_HANDLER
        .get_or_try_init(|| async {
            let config = DynamoDbConfig::from_env().await?;
            info!(table_name = config.table_name(), "DynamoDBクライアントを初期化");
            Ok(CreateNoteHandler::new(DynamoNoteRepository::from_config(&config)))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("ノート作成Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// 設定の読み込みに失敗した場合も500の汎用エラーレスポンスを返す。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let create_handler = match get_create_handler().await {
        Ok(handler) => handler,
        Err(err) => {
            error!(error = %err, "DynamoDB設定の読み込みに失敗");
            return Ok(error_response());
        }
    };

    Ok(create_handler.handle(&request).await)
}
