/// DynamoDBでノートを管理するためのノートリポジトリ
use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;
use tracing::{debug, warn};

use super::DynamoDbConfig;
use crate::domain::Note;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoteRepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),
}

/// ノート永続化用トレイト
///
/// 実際のDynamoDB実装とテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// ノートを1件保存する
    ///
    /// 同じIDのノートが既にある場合は上書きされる。
    async fn put(&self, note: &Note) -> Result<(), NoteRepositoryError>;

    /// 全ノートを取得する（順序は保証しない）
    async fn scan(&self) -> Result<Vec<Note>, NoteRepositoryError>;
}

// DynamoDBの属性名
const ATTR_ID: &str = "id";
const ATTR_TITLE: &str = "title";
const ATTR_CONTENT: &str = "content";
const ATTR_CREATED_AT: &str = "createdAt";

/// NoteRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoNoteRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// ノートテーブル名
    table_name: String,
}

impl DynamoNoteRepository {
    /// 新しいDynamoNoteRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - ノートテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDB設定からリポジトリを作成
    ///
    /// クライアントは内部で接続を共有するため、複製しても新たな接続は作られない。
    pub fn from_config(config: &DynamoDbConfig) -> Self {
        Self::new(config.client().clone(), config.table_name().to_string())
    }

    /// ノートテーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// ノートをDynamoDBアイテムに変換
    ///
    /// 値の無いフィールドは属性ごと省略する。
    fn note_to_item(note: &Note) -> HashMap<String, AttributeValue> {
        let mut item = HashMap::new();
        item.insert(ATTR_ID.to_string(), AttributeValue::S(note.id.clone()));

        let optional_fields = [
            (ATTR_TITLE, &note.title),
            (ATTR_CONTENT, &note.content),
            (ATTR_CREATED_AT, &note.created_at),
        ];
        for (name, value) in optional_fields {
            if let Some(value) = value {
                item.insert(name.to_string(), AttributeValue::S(value.clone()));
            }
        }

        item
    }

    /// DynamoDBアイテムをノートに変換
    ///
    /// idが文字列でない場合は`None`。その他の属性は文字列以外なら欠落扱い。
    fn item_to_note(item: &HashMap<String, AttributeValue>) -> Option<Note> {
        let get_string = |name: &str| -> Option<String> {
            item.get(name).and_then(|v| v.as_s().ok()).cloned()
        };

        Some(Note {
            id: get_string(ATTR_ID)?,
            title: get_string(ATTR_TITLE),
            content: get_string(ATTR_CONTENT),
            created_at: get_string(ATTR_CREATED_AT),
        })
    }
}

#[async_trait]
impl NoteRepository for DynamoNoteRepository {
    async fn put(&self, note: &Note) -> Result<(), NoteRepositoryError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(Self::note_to_item(note)))
            .send()
            .await
            .map_err(|e| NoteRepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Note>, NoteRepositoryError> {
        collect_scan_pages(|start_key| self.scan_page(start_key)).await
    }
}

/// DynamoDBアイテム
type Item = HashMap<String, AttributeValue>;

/// スキャン1ページ分の結果
#[derive(Debug, Clone, Default, PartialEq)]
struct ScanPage {
    items: Vec<Item>,
    last_evaluated_key: Option<Item>,
}

impl DynamoNoteRepository {
    /// `exclusive_start_key`から1ページ分スキャン
    async fn scan_page(&self, exclusive_start_key: Option<Item>) -> Result<ScanPage, NoteRepositoryError> {
        let response = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(exclusive_start_key)
            .send()
            .await
            .map_err(|e| NoteRepositoryError::ReadError(e.into_service_error().to_string()))?;

        Ok(ScanPage {
            items: response.items.unwrap_or_default(),
            last_evaluated_key: response.last_evaluated_key,
        })
    }
}

/// LastEvaluatedKeyが返らなくなるまでページを辿り、全ノートを集める
///
/// idが文字列でないアイテムはスキップする。途中のページで失敗した場合はエラーを返す。
async fn collect_scan_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<Note>, NoteRepositoryError>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<ScanPage, NoteRepositoryError>>,
{
    let mut notes = Vec::new();
    let mut exclusive_start_key: Option<Item> = None;
    let mut page_number = 0u32;

    loop {
        page_number += 1;

        let page = fetch_page(exclusive_start_key.take()).await?;
        debug!(
            page_number = page_number,
            item_count = page.items.len(),
            "スキャンページ取得"
        );

        for item in &page.items {
            match DynamoNoteRepository::item_to_note(item) {
                Some(note) => notes.push(note),
                None => warn!(page_number = page_number, "idが文字列ではないアイテム、スキップ"),
            }
        }

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
            _ => break,
        }
    }

    Ok(notes)
}
