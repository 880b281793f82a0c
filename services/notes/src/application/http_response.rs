// HTTPレスポンス生成
//
// 全レスポンスにContent-Type: application/jsonと
// Access-Control-Allow-Origin: *を付与する。

use lambda_http::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use serde::Serialize;
use serde_json::json;
use tracing::error;

/// 失敗時にクライアントへ返すエラーメッセージ（失敗の種類は区別しない）
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// プリフライトで許可するメソッド
pub const PREFLIGHT_ALLOW_METHODS: &str = "OPTIONS,GET,PUT,POST,DELETE,PATCH,HEAD";

/// プリフライトで許可するヘッダー
pub const PREFLIGHT_ALLOW_HEADERS: &str = "Content-Type";

/// JSONレスポンス用の共通ヘッダーを生成
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers
}

/// 値をJSONボディとするレスポンスを生成
///
/// シリアライズに失敗した場合は500の汎用エラーレスポンスを返す。
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response<Body> {
    match serde_json::to_string(value) {
        Ok(json) => build_response(status, json_headers(), Body::Text(json)),
        Err(e) => {
            error!(error = %e, "レスポンスのシリアライズに失敗");
            error_response()
        }
    }
}

/// 500の汎用エラーレスポンスを生成
///
/// ボディは`{"error": "Something went wrong"}`固定。
pub fn error_response() -> Response<Body> {
    let body = json!({ "error": GENERIC_ERROR_MESSAGE }).to_string();
    build_response(StatusCode::INTERNAL_SERVER_ERROR, json_headers(), Body::Text(body))
}

/// 404レスポンスを生成
pub fn not_found_response() -> Response<Body> {
    let body = json!({ "error": "Not Found" }).to_string();
    build_response(StatusCode::NOT_FOUND, json_headers(), Body::Text(body))
}

/// CORSプリフライト（OPTIONS）へのレスポンスを生成
///
/// 全オリジン・全メソッド・Content-Typeヘッダーを許可する。
pub fn preflight_response() -> Response<Body> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(PREFLIGHT_ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(PREFLIGHT_ALLOW_HEADERS),
    );
    build_response(StatusCode::NO_CONTENT, headers, Body::Empty)
}

fn build_response(status: StatusCode, headers: HeaderMap, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// テスト用: レスポンスボディを文字列として取り出す
#[cfg(test)]
pub(crate) fn body_text(response: &Response<Body>) -> String {
    String::from_utf8(response.body().as_ref().to_vec()).unwrap()
}

/// テスト用: レスポンスボディをJSONとして取り出す
#[cfg(test)]
pub(crate) fn body_json(response: &Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response)).unwrap()
}
