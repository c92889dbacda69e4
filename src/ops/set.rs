//! 集合演算関数

use crate::check_args;
use crate::error::KumiError;
use crate::i18n::{fmt_msg, MsgKey};
use crate::value::Value;
use crate::{new_hashset, HashSet};
use im::Vector;

/// ハッシュ化できない値が含まれているかチェック
fn check_hashable(op: &str, items: &Vector<Value>) -> Result<(), KumiError> {
    for item in items {
        if item.contains_float() {
            return Err(KumiError::not_hashable(op, item.type_name()));
        }
    }
    Ok(())
}

/// 引数をリストとして取り出す
fn as_list<'a>(op: &str, arg: &'a Value) -> Result<&'a Vector<Value>, KumiError> {
    arg.as_seq().ok_or_else(|| {
        KumiError::type_error(fmt_msg(MsgKey::AllElementsMustBe, &[op, "lists"]))
    })
}

/// uniq - 重複を排除
///
/// 各値の最初の出現だけを残し、相対順序を保つ。
/// ハッシュセットで既出判定するため計算量はO(n)期待。
pub fn native_uniq(args: &[Value]) -> Result<Value, KumiError> {
    check_args!(args, 1, "uniq");
    let items = match args[0].as_seq() {
        Some(v) => v,
        None => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::TypeOnly,
                &["uniq", "lists"],
            )))
        }
    };
    check_hashable("uniq", items)?;

    let mut seen = new_hashset();
    let mut result = Vec::new();
    for item in items {
        if !seen.contains(item) {
            seen.insert(item.clone());
            result.push(item.clone());
        }
    }
    Ok(Value::list(result))
}

/// intersection - 積集合
///
/// すべての入力リストに存在する値を、最初のリストでの出現順に
/// 各1回ずつ返す
pub fn native_intersection(args: &[Value]) -> Result<Value, KumiError> {
    if args.len() < 2 {
        return Err(KumiError::arity(fmt_msg(
            MsgKey::NeedAtLeastNArgs,
            &["intersection", "2"],
        )));
    }

    let first = as_list("intersection", &args[0])?;
    check_hashable("intersection", first)?;
    let mut present: HashSet<Value> = first.iter().cloned().collect();

    // 他のリストとの積集合を取る
    for arg in &args[1..] {
        let items = as_list("intersection", arg)?;
        check_hashable("intersection", items)?;
        let set: HashSet<Value> = items.iter().cloned().collect();
        present = present.iter().filter(|v| set.contains(*v)).cloned().collect();
    }

    // 最初のリストの順序で復元（重複は1回だけ）
    let mut seen = new_hashset();
    let mut result = Vec::new();
    for item in first {
        if present.contains(item) && !seen.contains(item) {
            seen.insert(item.clone());
            result.push(item.clone());
        }
    }
    Ok(Value::list(result))
}

/// difference - 差集合（第1リストから第2リスト以降の値を除く）
///
/// 第1リストの順序を保つ（第1リスト内の重複はそのまま残る）
pub fn native_difference(args: &[Value]) -> Result<Value, KumiError> {
    if args.len() < 2 {
        return Err(KumiError::arity(fmt_msg(
            MsgKey::NeedAtLeastNArgs,
            &["difference", "2"],
        )));
    }

    let first = as_list("difference", &args[0])?;
    check_hashable("difference", first)?;

    let mut exclude = new_hashset();
    for arg in &args[1..] {
        let items = as_list("difference", arg)?;
        check_hashable("difference", items)?;
        for item in items {
            exclude.insert(item.clone());
        }
    }

    let result: Vec<Value> = first
        .iter()
        .filter(|v| !exclude.contains(*v))
        .cloned()
        .collect();
    Ok(Value::list(result))
}

// ========================================
// 関数登録テーブル
// ========================================

/// 登録すべき関数のリスト
pub const FUNCTIONS: super::NativeFunctions = &[
    ("uniq", native_uniq),
    ("intersection", native_intersection),
    ("difference", native_difference),
];
