/// GET /notes Lambdaエントリポイント
///
/// DynamoDBのノートテーブル全体を読み込み、新しい順に返す。
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use notes::application::{error_response, ListNotesHandler};
use notes::infrastructure::{init_logging, DynamoDbConfig, DynamoDbConfigError, DynamoNoteRepository};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// ListNotesHandlerの静的インスタンス（warm start時に再利用）
static LIST_HANDLER: OnceCell<ListNotesHandler<DynamoNoteRepository>> = OnceCell::const_new();

async fn get_list_handler(
) -> Result<&'static ListNotesHandler<DynamoNoteRepository>, DynamoDbConfigError> {
    LIST_HANDLER
        .get_or_try_init(|| async {
            let config = DynamoDbConfig::from_env().await?;
            info!(table_name = config.table_name(), "DynamoDBクライアントを初期化");
            Ok(ListNotesHandler::new(DynamoNoteRepository::from_config(&config)))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    info!("ノート一覧Lambda関数を初期化");

    run(service_fn(handler)).await
}

async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let list_handler = match get_list_handler().await {
        Ok(handler) => handler,
        Err(err) => {
            error!(error = %err, "DynamoDB設定の読み込みに失敗");
            return Ok(error_response());
        }
    };

    Ok(list_handler.handle(&request).await)
}
