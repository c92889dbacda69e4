//! 高階関数

use super::{collection_values, Apply};
use crate::check_args;
use crate::error::KumiError;
use crate::i18n::{fmt_msg, MsgKey};
use crate::value::Value;

/// each - コレクションの各要素に副作用関数を適用
///
/// コールバックは `[要素, キー/インデックス, コレクション]` で呼ばれる。
/// リストは並び順（Integerインデックス）、マップはキー昇順（Stringキー）。
/// 戻り値は常にnil。
pub fn native_each(args: &[Value], f: &mut Apply) -> Result<Value, KumiError> {
    check_args!(args, 1, "each");
    match &args[0] {
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                f(&[item.clone(), Value::Integer(i as i64), args[0].clone()])?;
            }
            Ok(Value::Nil)
        }
        Value::Map(m) => {
            for key in Value::sorted_keys(m) {
                if let Some(value) = m.get(&key) {
                    f(&[value.clone(), Value::String(key.clone()), args[0].clone()])?;
                }
            }
            Ok(Value::Nil)
        }
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::TypeOnly,
            &["each", "lists or maps"],
        ))),
    }
}

/// map - リストの各要素に関数を適用
pub fn native_map(args: &[Value], f: &mut Apply) -> Result<Value, KumiError> {
    check_args!(args, 1, "map");
    match &args[0] {
        Value::List(items) => {
            let mut results = Vec::with_capacity(items.len());
            for item in items {
                results.push(f(std::slice::from_ref(item))?);
            }
            Ok(Value::list(results))
        }
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::TypeOnly,
            &["map", "lists"],
        ))),
    }
}

/// filter - リストから述語を満たす要素を抽出
pub fn native_filter(args: &[Value], pred: &mut Apply) -> Result<Value, KumiError> {
    check_args!(args, 1, "filter");
    match &args[0] {
        Value::List(items) => {
            let mut results = Vec::new();
            for item in items {
                if pred(std::slice::from_ref(item))?.is_truthy() {
                    results.push(item.clone());
                }
            }
            Ok(Value::list(results))
        }
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::TypeOnly,
            &["filter", "lists"],
        ))),
    }
}

/// reject - リストから述語を満たさない要素を抽出（filterの補集合）
pub fn native_reject(args: &[Value], pred: &mut Apply) -> Result<Value, KumiError> {
    check_args!(args, 1, "reject");
    match &args[0] {
        Value::List(items) => {
            let mut results = Vec::new();
            for item in items {
                if !pred(std::slice::from_ref(item))?.is_truthy() {
                    results.push(item.clone());
                }
            }
            Ok(Value::list(results))
        }
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::TypeOnly,
            &["reject", "lists"],
        ))),
    }
}

/// reduce - コレクションを左から畳み込み
///
/// コールバックは `[アキュムレータ, 要素]` で呼ばれる。
/// 初期値を省略した場合は最初の要素がアキュムレータとなり、
/// 2番目の要素から畳み込みを開始する。空のコレクションで初期値も
/// ない場合はnilを返す。マップは値をキー昇順で畳み込む。
pub fn native_reduce(args: &[Value], f: &mut Apply) -> Result<Value, KumiError> {
    if args.is_empty() || args.len() > 2 {
        return Err(KumiError::arity(fmt_msg(MsgKey::Need1Or2Args, &["reduce"])));
    }

    let items = collection_values("reduce", &args[0])?;
    let init = args.get(1).cloned();

    let (start_idx, mut acc) = match init {
        Some(initial) => (0, initial),
        None => {
            if items.is_empty() {
                return Ok(Value::Nil);
            }
            (1, items[0].clone())
        }
    };

    for item in &items[start_idx..] {
        acc = f(&[acc, item.clone()])?;
    }
    Ok(acc)
}
