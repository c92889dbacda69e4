//! コレクション操作関数モジュール
//!
//! このモジュールは操作関数を機能別に整理しています:
//! - seq: シーケンスアクセサ（first, last, index-of, pluck）
//! - hof: 高階関数（each, map, filter, reject, reduce）
//! - predicates: 述語集約（every?, some?, contains?）
//! - set: 集合演算（uniq, intersection, difference）
//! - map: マップ合成（extend, defaults）
//! - transform: 構造変換（flatten, zip, sort-by, shuffle）
//! - wrap: 関数ラッパー（Once, Memoize, delay）
//!
//! 高階関数は`Apply`コールバックを受け取ります。引数スライスを受けて
//! 結果を返す契約で、呼び出し側の関数適用をそのまま注入できます。

pub mod hof;
pub mod macros;
pub mod map;
pub mod predicates;
pub mod seq;
pub mod set;
pub mod transform;
pub mod wrap;

use crate::error::KumiError;
use crate::i18n::{fmt_msg, MsgKey};
use crate::value::Value;

/// 関数適用コールバック
///
/// 高階関数が要素ごとに呼び出す関数。引数は`&[Value]`で渡される
/// （例: mapは`[要素]`、eachは`[要素, キー/インデックス, コレクション]`、
/// reduceは`[アキュムレータ, 要素]`）。
pub type Apply<'a> = dyn FnMut(&[Value]) -> Result<Value, KumiError> + 'a;

/// コールバック不要の操作関数の型
pub type NativeFn = fn(&[Value]) -> Result<Value, KumiError>;

/// 関数登録テーブルの型
pub type NativeFunctions = &'static [(&'static str, NativeFn)];

/// コールバック不要の全操作関数を名前付きで返す
///
/// 名前で動的にディスパッチしたい組み込み側（テストハーネス等）向け。
pub fn all_functions() -> Vec<(&'static str, NativeFn)> {
    let mut table: Vec<(&'static str, NativeFn)> = Vec::new();
    table.extend_from_slice(seq::FUNCTIONS);
    table.extend_from_slice(predicates::FUNCTIONS);
    table.extend_from_slice(set::FUNCTIONS);
    table.extend_from_slice(map::FUNCTIONS);
    table.extend_from_slice(transform::FUNCTIONS);
    #[cfg(feature = "std-rand")]
    table.extend_from_slice(transform::RAND_FUNCTIONS);
    table
}

/// コレクション（リストまたはマップ）を要素列に展開する共通ヘルパー
///
/// リストは並び順のまま、マップは値をキー昇順で返す
pub(crate) fn collection_values(op: &str, collection: &Value) -> Result<Vec<Value>, KumiError> {
    match collection {
        Value::List(items) => Ok(items.iter().cloned().collect()),
        Value::Map(m) => Ok(Value::sorted_keys(m)
            .iter()
            .filter_map(|k| m.get(k).cloned())
            .collect()),
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::TypeOnly,
            &[op, "lists or maps"],
        ))),
    }
}
