//! 構造変換関数（flatten, zip, sort-by, shuffle）

use super::Apply;
use crate::check_args;
use crate::error::KumiError;
use crate::i18n::{fmt_msg, MsgKey};
use crate::value::Value;
use im::Vector;
use std::cmp::Ordering;

/// flatten - ネストしたリストを平坦化
///
/// 深さ優先・左から右の順でリスト以外の葉要素を集める。
/// 呼び出しスタックではなく明示的な作業スタックで降りるため、
/// どれだけ深いネストでもスタックオーバーフローしない。
pub fn native_flatten(args: &[Value]) -> Result<Value, KumiError> {
    check_args!(args, 1, "flatten");
    let top = match args[0].as_seq() {
        Some(v) => v.clone(),
        None => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::TypeOnly,
                &["flatten", "lists"],
            )))
        }
    };

    let mut result = Vec::new();
    let mut stack: Vec<(Vector<Value>, usize)> = vec![(top, 0)];

    loop {
        let item = match stack.last_mut() {
            None => break,
            Some((seq, idx)) => {
                if *idx >= seq.len() {
                    None
                } else {
                    let item = seq[*idx].clone();
                    *idx += 1;
                    Some(item)
                }
            }
        };
        match item {
            None => {
                stack.pop();
            }
            Some(Value::List(inner)) => stack.push((inner, 0)),
            Some(leaf) => result.push(leaf),
        }
    }

    Ok(Value::list(result))
}

/// zip - 複数のリストを位置ごとに組み合わせる
///
/// i番目の行は各リストのi番目の要素のリスト。結果の長さは
/// 最長の入力に合わせ、足りない位置はnilで埋める（黙って
/// 落とさない）。
pub fn native_zip(args: &[Value]) -> Result<Value, KumiError> {
    if args.len() < 2 {
        return Err(KumiError::arity(fmt_msg(
            MsgKey::NeedAtLeastNArgs,
            &["zip", "2"],
        )));
    }

    let mut seqs = Vec::with_capacity(args.len());
    for arg in args {
        match arg.as_seq() {
            Some(v) => seqs.push(v),
            None => {
                return Err(KumiError::type_error(fmt_msg(
                    MsgKey::AllElementsMustBe,
                    &["zip", "lists"],
                )))
            }
        }
    }

    let longest = seqs.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(longest);
    for i in 0..longest {
        let row: Vec<Value> = seqs
            .iter()
            .map(|s| s.get(i).cloned().unwrap_or(Value::Nil))
            .collect();
        rows.push(Value::list(row));
    }
    Ok(Value::list(rows))
}

// ========================================
// sort-by
// ========================================

/// ソートキーの型ランク（異なる型どうしの決定的な順序付け用）
fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Bool(_) => 0,
        Value::Integer(_) | Value::Float(_) => 1,
        Value::String(_) => 2,
        Value::List(_) => 3,
        Value::Map(_) => 4,
        // nil（キー欠損）は常に末尾
        Value::Nil => 5,
    }
}

/// ソートキーの比較
///
/// 数値（Integer/Float混在可）は数値順、文字列は辞書順、boolはfalse<true。
/// 型が異なる場合は型ランク順で、nilは常にすべての非nilキーの後ろ。
/// 比較できない同型キー（リスト等）はEqualを返し、安定ソートが
/// 元の相対順序を保つ。
fn key_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Integer(x), Value::Float(y)) => {
            (*x as f64).partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Value::Float(x), Value::Integer(y)) => {
            x.partial_cmp(&(*y as f64)).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// キー付きペアを安定ソートして値を返す
fn sort_pairs(mut keyed: Vec<(Value, Value)>) -> Value {
    // std::sort_byは安定ソート：同キーは元の相対順序を保持
    keyed.sort_by(|a, b| key_order(&a.0, &b.0));
    Value::list(keyed.into_iter().map(|(_, v)| v).collect())
}

/// sort-by - キー関数でソート
///
/// 導出したキーの昇順で新しいリストを返す（安定ソート）。
/// キーがnilの要素は末尾に、元の相対順序のままグループ化される。
pub fn native_sort_by(args: &[Value], key_fn: &mut Apply) -> Result<Value, KumiError> {
    check_args!(args, 1, "sort-by");
    match &args[0] {
        Value::List(items) => {
            // 各要素のキーを計算（容量事前確保）
            let mut keyed: Vec<(Value, Value)> = Vec::with_capacity(items.len());
            for item in items {
                let key = key_fn(std::slice::from_ref(item))?;
                keyed.push((key, item.clone()));
            }
            Ok(sort_pairs(keyed))
        }
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::MustBeList,
            &["sort-by", "collection"],
        ))),
    }
}

/// sort-by-key - マップ要素を名前付きキーの値でソート
///
/// 各要素（マップ）から指定キーの値を取り出して昇順に並べる。
/// キーを持たない要素・マップでない要素はキーnil扱いで末尾に
/// 回る（相対順序は保持）。
pub fn native_sort_by_key(args: &[Value]) -> Result<Value, KumiError> {
    check_args!(args, 2, "sort-by-key");
    let key = match &args[0] {
        Value::String(s) => s,
        _ => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::FirstArgMustBe,
                &["sort-by-key", "a string"],
            )))
        }
    };
    match &args[1] {
        Value::List(items) => {
            let mut keyed: Vec<(Value, Value)> = Vec::with_capacity(items.len());
            for item in items {
                let derived = match item {
                    Value::Map(m) => m.get(key).cloned().unwrap_or(Value::Nil),
                    _ => Value::Nil,
                };
                keyed.push((derived, item.clone()));
            }
            Ok(sort_pairs(keyed))
        }
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::SecondArgMustBe,
            &["sort-by-key", "a list"],
        ))),
    }
}

/// shuffle - リストをランダムにシャッフル
///
/// Fisher-Yatesで一様にシャッフルしたコピーを返す。元のリストは
/// 変更されない。
///
/// # 必須feature
/// `std-rand`
#[cfg(feature = "std-rand")]
pub fn native_shuffle(args: &[Value]) -> Result<Value, KumiError> {
    use rand::seq::SliceRandom;

    check_args!(args, 1, "shuffle");

    match &args[0] {
        Value::List(items) => {
            let mut shuffled: Vec<Value> = items.iter().cloned().collect();
            let mut rng = rand::rng();
            shuffled.shuffle(&mut rng);
            Ok(Value::list(shuffled))
        }
        _ => Err(KumiError::type_error(fmt_msg(
            MsgKey::TypeOnly,
            &["shuffle", "lists"],
        ))),
    }
}

// ========================================
// 関数登録テーブル
// ========================================

/// 登録すべき関数のリスト
pub const FUNCTIONS: super::NativeFunctions = &[
    ("flatten", native_flatten),
    ("zip", native_zip),
    ("sort-by-key", native_sort_by_key),
];

/// std-rand featureが必要な関数のリスト
#[cfg(feature = "std-rand")]
pub const RAND_FUNCTIONS: super::NativeFunctions = &[("shuffle", native_shuffle)];
