//! シーケンスアクセサ関数

use crate::check_args;
use crate::error::KumiError;
use crate::i18n::{fmt_msg, MsgKey};
use crate::value::Value;

/// first - リストの最初の要素、または先頭n個
///
/// 引数1個: 最初の要素を返す（空リストはnil）
/// 引数2個: 先頭 min(n, len) 個の新しいリストを返す（n <= 0 は空リスト）
pub fn native_first(args: &[Value]) -> Result<Value, KumiError> {
    if args.is_empty() || args.len() > 2 {
        return Err(KumiError::arity(fmt_msg(MsgKey::Need1Or2Args, &["first"])));
    }
    let seq = match args[0].as_seq() {
        Some(v) => v,
        None => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::TypeOnly,
                &["first", "lists"],
            )))
        }
    };
    match args.get(1) {
        None => Ok(seq.front().cloned().unwrap_or(Value::Nil)),
        Some(Value::Integer(n)) => {
            if *n <= 0 {
                return Ok(Value::list(vec![]));
            }
            let take = (*n as usize).min(seq.len());
            Ok(Value::List(seq.iter().take(take).cloned().collect()))
        }
        Some(_) => Err(KumiError::type_error(fmt_msg(
            MsgKey::SecondArgMustBe,
            &["first", "an integer"],
        ))),
    }
}

/// last - リストの最後の要素、または末尾n個
///
/// 引数1個: 最後の要素を返す（空リストはnil）
/// 引数2個: 末尾 min(n, len) 個を元の並び順のまま返す（n <= 0 は空リスト）
pub fn native_last(args: &[Value]) -> Result<Value, KumiError> {
    if args.is_empty() || args.len() > 2 {
        return Err(KumiError::arity(fmt_msg(MsgKey::Need1Or2Args, &["last"])));
    }
    let seq = match args[0].as_seq() {
        Some(v) => v,
        None => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::TypeOnly,
                &["last", "lists"],
            )))
        }
    };
    match args.get(1) {
        None => Ok(seq.back().cloned().unwrap_or(Value::Nil)),
        Some(Value::Integer(n)) => {
            if *n <= 0 {
                return Ok(Value::list(vec![]));
            }
            let take = (*n as usize).min(seq.len());
            Ok(Value::List(seq.iter().skip(seq.len() - take).cloned().collect()))
        }
        Some(_) => Err(KumiError::type_error(fmt_msg(
            MsgKey::SecondArgMustBe,
            &["last", "an integer"],
        ))),
    }
}

/// index-of - 値が最初に現れるインデックス
///
/// 値等価で比較し、見つからなければ-1を返す（空リストも-1）
pub fn native_index_of(args: &[Value]) -> Result<Value, KumiError> {
    check_args!(args, 2, "index-of");
    let seq = match args[0].as_seq() {
        Some(v) => v,
        None => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::TypeOnly,
                &["index-of", "lists"],
            )))
        }
    };
    match seq.iter().position(|item| item == &args[1]) {
        Some(i) => Ok(Value::Integer(i as i64)),
        None => Ok(Value::Integer(-1)),
    }
}

/// pluck - マップのリストから名前付きキーの値を射影
///
/// 各要素（マップ）から指定キーの値を集めた新しいリストを返す。
/// キーを持たない要素・マップでない要素はスキップされる。
pub fn native_pluck(args: &[Value]) -> Result<Value, KumiError> {
    check_args!(args, 2, "pluck");
    let seq = match args[0].as_seq() {
        Some(v) => v,
        None => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::TypeOnly,
                &["pluck", "lists"],
            )))
        }
    };
    let key = match &args[1] {
        Value::String(s) => s,
        _ => {
            return Err(KumiError::type_error(fmt_msg(
                MsgKey::SecondArgMustBe,
                &["pluck", "a string"],
            )))
        }
    };

    let mut result = Vec::new();
    for item in seq {
        if let Some(m) = item.as_map() {
            if let Some(value) = m.get(key) {
                result.push(value.clone());
            }
        }
    }
    Ok(Value::list(result))
}

// ========================================
// 関数登録テーブル
// ========================================

/// 登録すべき関数のリスト
pub const FUNCTIONS: super::NativeFunctions = &[
    ("first", native_first),
    ("last", native_last),
    ("index-of", native_index_of),
    ("pluck", native_pluck),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Value {
        Value::list(values.iter().map(|n| Value::Integer(*n)).collect())
    }

    #[test]
    fn test_first_single() {
        assert_eq!(native_first(&[ints(&[4, 5, 6])]).ok(), Some(Value::Integer(4)));
        assert_eq!(native_first(&[ints(&[])]).ok(), Some(Value::Nil));
    }

    #[test]
    fn test_first_n() {
        assert_eq!(
            native_first(&[ints(&[1, 2, 3]), Value::Integer(2)]).ok(),
            Some(ints(&[1, 2]))
        );
        // n <= 0 は空リスト
        assert_eq!(
            native_first(&[ints(&[1, 2, 3]), Value::Integer(0)]).ok(),
            Some(ints(&[]))
        );
        assert_eq!(
            native_first(&[ints(&[1, 2, 3]), Value::Integer(-4)]).ok(),
            Some(ints(&[]))
        );
        // n >= len は全体
        assert_eq!(
            native_first(&[ints(&[1, 2, 3]), Value::Integer(99)]).ok(),
            Some(ints(&[1, 2, 3]))
        );
        assert_eq!(
            native_first(&[ints(&[]), Value::Integer(5)]).ok(),
            Some(ints(&[]))
        );
    }

    #[test]
    fn test_last_single() {
        assert_eq!(native_last(&[ints(&[4, 5, 6])]).ok(), Some(Value::Integer(6)));
        assert_eq!(native_last(&[ints(&[])]).ok(), Some(Value::Nil));
    }

    #[test]
    fn test_last_n_keeps_order() {
        assert_eq!(
            native_last(&[ints(&[1, 2, 3, 4]), Value::Integer(2)]).ok(),
            Some(ints(&[3, 4]))
        );
        assert_eq!(
            native_last(&[ints(&[1, 2, 3]), Value::Integer(99)]).ok(),
            Some(ints(&[1, 2, 3]))
        );
        assert_eq!(
            native_last(&[ints(&[1, 2, 3]), Value::Integer(0)]).ok(),
            Some(ints(&[]))
        );
    }

    #[test]
    fn test_index_of() {
        assert_eq!(
            native_index_of(&[ints(&[7, 8, 9, 8]), Value::Integer(8)]).ok(),
            Some(Value::Integer(1))
        );
        assert_eq!(
            native_index_of(&[ints(&[7, 8, 9]), Value::Integer(42)]).ok(),
            Some(Value::Integer(-1))
        );
        assert_eq!(
            native_index_of(&[ints(&[]), Value::Integer(1)]).ok(),
            Some(Value::Integer(-1))
        );
    }

    #[test]
    fn test_pluck_projects_named_key() {
        fn person(name: &str, age: i64) -> Value {
            let mut m = crate::new_hashmap();
            m.insert("name".to_string(), Value::String(name.to_string()));
            m.insert("age".to_string(), Value::Integer(age));
            Value::Map(m)
        }
        let people = Value::list(vec![person("ann", 30), person("bob", 40)]);
        assert_eq!(
            native_pluck(&[people, Value::String("age".to_string())]).ok(),
            Some(ints(&[30, 40]))
        );
    }

    #[test]
    fn test_pluck_skips_elements_without_key() {
        let mut with_key = crate::new_hashmap();
        with_key.insert("k".to_string(), Value::Integer(1));
        let input = Value::list(vec![
            Value::Map(with_key),
            Value::Map(crate::new_hashmap()),
            Value::Integer(9),
        ]);
        assert_eq!(
            native_pluck(&[input, Value::String("k".to_string())]).ok(),
            Some(ints(&[1]))
        );
    }

    #[test]
    fn test_pluck_errors() {
        assert!(native_pluck(&[Value::Integer(1), Value::String("k".to_string())]).is_err());
        assert!(native_pluck(&[ints(&[1]), Value::Integer(2)]).is_err());
        assert!(native_pluck(&[ints(&[1])]).is_err());
    }

    #[test]
    fn test_type_and_arity_errors() {
        assert!(native_first(&[Value::Integer(1)]).is_err());
        assert!(native_first(&[]).is_err());
        assert!(native_first(&[ints(&[1]), Value::String("x".to_string())]).is_err());
        assert!(native_index_of(&[ints(&[1])]).is_err());
    }
}
