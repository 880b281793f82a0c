/// ノートのドメインモデル
///
/// 永続化されるレコード（Note）と、作成リクエストのボディ（CreateNoteRequest）、
/// 一覧レスポンスのボディ（NoteList）を定義する。
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// ノート
///
/// テーブルに保存される唯一のエンティティ。`id`はパーティションキーで、
/// 作成後に変更されることはない。`title`と`content`は検証されず、
/// リクエストに含まれなかった場合は属性ごと省略される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// ノートID
    pub id: String,

    /// タイトル（リクエストボディの値をそのまま保持）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// 本文（リクエストボディの値をそのまま保持）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// 作成日時（ISO-8601、UTC、ミリ秒精度）
    ///
    /// ストアから読み込んだレコードでは欠落している可能性がある。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Note {
    /// 新しいノートを作成
    ///
    /// # Arguments
    /// * `id` - 採番済みのノートID
    /// * `request` - 作成リクエストのボディ
    /// * `created_at` - 作成時刻
    pub fn new(id: String, request: CreateNoteRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: request.title,
            content: request.content,
            created_at: Some(format_timestamp(created_at)),
        }
    }

    /// `createdAt`を日時としてパース
    ///
    /// 欠落している場合やISO-8601として解釈できない場合は`None`を返す。
    pub fn created_at_timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// ノート作成リクエストのボディ
///
/// 値の中身は検証しないが、型は文字列に限る。
/// - `title`/`content`は省略・nullどちらも`None`になる
/// - 数値や配列など文字列以外の値、オブジェクト以外のボディはパースエラー（500）
/// - 未知のフィールドは無視する
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// ノート一覧レスポンスのボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteList {
    /// createdAt降順のノート
    pub notes: Vec<Note>,
    /// ノート件数
    pub count: usize,
}

impl NoteList {
    pub fn new(notes: Vec<Note>) -> Self {
        let count = notes.len();
        Self { notes, count }
    }
}

/// 日時を`YYYY-MM-DDTHH:MM:SS.sssZ`形式にフォーマット
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
