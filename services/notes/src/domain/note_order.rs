// ノート一覧の並び順
//
// 一覧はcreatedAt降順（新しい順）で返す。
// createdAtが欠落・不正なレコードは有効なレコードの後ろに置き、
// それらの間ではスキャン順を保つ（安定ソート）。

use super::Note;

/// ノートをcreatedAt降順に並べ替える
pub fn sort_newest_first(notes: &mut [Note]) {
    // Reverse(None)はReverse(Some(_))より大きいため、無効なレコードは末尾に集まる
    notes.sort_by_cached_key(|note| std::cmp::Reverse(note.created_at_timestamp()));
}
