/// ログ基盤モジュール
///
/// CloudWatch Logsに1行1イベントのJSONを出力する。フィールドは最上位に展開されるため、
/// `note_id`などでLogs Insightsから直接絞り込める。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// `RUST_LOG`未設定時のログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

static INIT: Once = Once::new();

/// ノートAPI用のJSONログレイヤーを構築する
///
/// イベントのフィールドは`fields`の下ではなく最上位に出力し、
/// 発生元のファイル名と行番号を付与する。スパン情報は出力しない。
pub fn json_layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_writer(make_writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
}

/// `RUST_LOG`からフィルターを作る（未設定・不正な場合はinfo）
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Lambda関数のログを初期化する
///
/// 標準出力にJSONを書き出す。複数回呼び出しても最初の1回だけ初期化する。
/// テストなどで既にグローバルなサブスクライバーがある場合はそれを残す。
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(env_filter())
            .with(json_layer(std::io::stdout))
            .try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new("debug"))
            .with(fmt_layer)
            .try_init();
    });
}
