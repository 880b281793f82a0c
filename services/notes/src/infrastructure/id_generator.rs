/// ノートIDの採番
use uuid::Uuid;

/// ノートID生成トレイト
pub trait IdGenerator: Send + Sync {
    /// 新しいIDを生成する
    fn generate(&self) -> String;
}

/// UUID v4によるID生成
///
/// 乱数ベースのため、同時刻に作成されたノート同士でも衝突しない。
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_id_format() {
        let id = UuidIdGenerator.generate();

        assert_eq!(id.len(), 36);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_uuid_ids_do_not_repeat() {
        let generator = UuidIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
