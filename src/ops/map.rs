//! マップ合成関数（extend, defaults）

use crate::error::KumiError;
use crate::i18n::{fmt_msg, MsgKey};
use crate::value::Value;
use crate::HashMap;

/// 引数をマップとして取り出す
fn as_map<'a>(op: &str, arg: &'a Value) -> Result<&'a HashMap<String, Value>, KumiError> {
    arg.as_map()
        .ok_or_else(|| KumiError::type_error(fmt_msg(MsgKey::TypeOnly, &[op, "maps"])))
}

/// extend - 複数のマップを合成（後勝ち）
///
/// すべてのマップのキーを集めた新しいマップを返す。同じキーは
/// 後のマップの値で上書きされる。入力は変更されない。
pub fn native_extend(args: &[Value]) -> Result<Value, KumiError> {
    if args.is_empty() {
        return Err(KumiError::arity(fmt_msg(
            MsgKey::NeedAtLeastNArgs,
            &["extend", "1"],
        )));
    }

    let mut result = crate::new_hashmap();
    for arg in args {
        for (k, v) in as_map("extend", arg)? {
            result.insert(k.clone(), v.clone());
        }
    }
    Ok(Value::Map(result))
}

/// defaults - 複数のマップを合成（先勝ち）
///
/// extendと同じ合成だが、すでに存在するキーは決して上書きしない。
/// 後のマップはまだ埋まっていないキーだけを補う。
pub fn native_defaults(args: &[Value]) -> Result<Value, KumiError> {
    if args.is_empty() {
        return Err(KumiError::arity(fmt_msg(
            MsgKey::NeedAtLeastNArgs,
            &["defaults", "1"],
        )));
    }

    let mut result = crate::new_hashmap();
    for arg in args {
        for (k, v) in as_map("defaults", arg)? {
            if !result.contains_key(k) {
                result.insert(k.clone(), v.clone());
            }
        }
    }
    Ok(Value::Map(result))
}

// ========================================
// 関数登録テーブル
// ========================================

/// 登録すべき関数のリスト
pub const FUNCTIONS: super::NativeFunctions = &[
    ("extend", native_extend),
    ("defaults", native_defaults),
];
