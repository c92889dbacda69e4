//! 述語集約関数

use super::{collection_values, Apply};
use crate::check_args;
use crate::error::KumiError;
use crate::value::Value;

/// every? - すべての要素が述語を満たすか
///
/// 空のコレクションはtrue（空虚な真）
pub fn native_every(args: &[Value], pred: &mut Apply) -> Result<Value, KumiError> {
    check_args!(args, 1, "every?");
    for item in collection_values("every?", &args[0])? {
        if !pred(std::slice::from_ref(&item))?.is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

/// some? - いずれかの要素が述語を満たすか
///
/// 述語を省略した場合は要素自体のtruthy判定（nil/falseのみfalsy）。
/// 空のコレクションはfalse。
pub fn native_some(args: &[Value], pred: Option<&mut Apply>) -> Result<Value, KumiError> {
    check_args!(args, 1, "some?");
    let mut pred = pred;
    for item in collection_values("some?", &args[0])? {
        let truthy = match pred.as_mut() {
            Some(f) => f(std::slice::from_ref(&item))?.is_truthy(),
            None => item.is_truthy(),
        };
        if truthy {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

/// contains? - 値等価で一致する要素があるか
///
/// リストは要素、マップは値を走査する
pub fn native_contains(args: &[Value]) -> Result<Value, KumiError> {
    check_args!(args, 2, "contains?");
    let items = collection_values("contains?", &args[0])?;
    Ok(Value::Bool(items.iter().any(|item| item == &args[1])))
}

// ========================================
// 関数登録テーブル
// ========================================

/// 登録すべき関数のリスト（コールバック不要な関数のみ）
pub const FUNCTIONS: super::NativeFunctions = &[("contains?", native_contains)];
