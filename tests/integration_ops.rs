//! コレクション操作の統合テスト
//!
//! 複数の操作を組み合わせた、ライブラリ利用者視点のシナリオ。

use kumi::ops::{hof, map, predicates, seq, set, transform, wrap};
use kumi::{KumiError, Value};

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().map(|n| Value::Integer(*n)).collect())
}

fn record(name: &str, age: i64) -> Value {
    let mut m = kumi::new_hashmap();
    m.insert("name".to_string(), Value::String(name.to_string()));
    m.insert("age".to_string(), Value::Integer(age));
    Value::Map(m)
}

#[test]
fn test_map_then_filter_pipeline() {
    let doubled = hof::native_map(&[ints(&[1, 2, 3, 4])], &mut |call: &[Value]| {
        match &call[0] {
            Value::Integer(n) => Ok(Value::Integer(n * 2)),
            other => Ok(other.clone()),
        }
    });
    assert_eq!(doubled.as_ref().ok(), Some(&ints(&[2, 4, 6, 8])));

    let doubled = match doubled {
        Ok(v) => v,
        Err(_) => Value::Nil,
    };
    let big = hof::native_filter(&[doubled], &mut |call: &[Value]| {
        match &call[0] {
            Value::Integer(n) => Ok(Value::Bool(*n > 4)),
            _ => Ok(Value::Bool(false)),
        }
    });
    assert_eq!(big.ok(), Some(ints(&[6, 8])));
}

#[test]
fn test_filter_reject_partition() {
    fn is_even(call: &[Value]) -> Result<Value, KumiError> {
        match &call[0] {
            Value::Integer(n) => Ok(Value::Bool(n % 2 == 0)),
            _ => Ok(Value::Bool(false)),
        }
    }
    let input = ints(&[1, 2, 3, 4, 5]);
    let kept = hof::native_filter(&[input.clone()], &mut is_even);
    let dropped = hof::native_reject(&[input], &mut is_even);
    assert_eq!(kept.ok(), Some(ints(&[2, 4])));
    assert_eq!(dropped.ok(), Some(ints(&[1, 3, 5])));
}

#[test]
fn test_reduce_sums_map_values_in_key_order() {
    let mut m = kumi::new_hashmap();
    m.insert("c".to_string(), Value::Integer(3));
    m.insert("a".to_string(), Value::Integer(1));
    m.insert("b".to_string(), Value::Integer(2));

    let mut order = Vec::new();
    let total = hof::native_reduce(
        &[Value::Map(m), Value::Integer(0)],
        &mut |call: &[Value]| {
            order.push(call[1].clone());
            match (&call[0], &call[1]) {
                (Value::Integer(acc), Value::Integer(n)) => Ok(Value::Integer(acc + n)),
                _ => Ok(call[0].clone()),
            }
        },
    );
    assert_eq!(total.ok(), Some(Value::Integer(6)));
    // マップの走査はキー昇順
    assert_eq!(
        order,
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
}

#[test]
fn test_each_visits_with_index_and_collection() {
    let input = ints(&[10, 20]);
    let mut seen = Vec::new();
    let result = hof::native_each(&[input.clone()], &mut |call: &[Value]| {
        seen.push((call[0].clone(), call[1].clone()));
        assert_eq!(call[2], input);
        Ok(Value::Nil)
    });
    assert_eq!(result.ok(), Some(Value::Nil));
    assert_eq!(
        seen,
        vec![
            (Value::Integer(10), Value::Integer(0)),
            (Value::Integer(20), Value::Integer(1)),
        ]
    );
}

#[test]
fn test_first_last_agree_on_singleton() {
    let single = ints(&[7]);
    assert_eq!(
        seq::native_first(&[single.clone()]).ok(),
        seq::native_last(&[single]).ok()
    );
    // 空リストはどちらもnil
    assert_eq!(seq::native_first(&[ints(&[])]).ok(), Some(Value::Nil));
    assert_eq!(seq::native_last(&[ints(&[])]).ok(), Some(Value::Nil));
}

#[test]
fn test_first_n_and_last_n_partition_roundtrip() {
    let input = ints(&[1, 2, 3, 4, 5]);
    let head = seq::native_first(&[input.clone(), Value::Integer(2)]).ok();
    let tail = seq::native_last(&[input, Value::Integer(3)]).ok();
    assert_eq!(head, Some(ints(&[1, 2])));
    assert_eq!(tail, Some(ints(&[3, 4, 5])));
}

#[test]
fn test_index_of_finds_structural_match() {
    let input = Value::list(vec![ints(&[1]), ints(&[2, 3])]);
    assert_eq!(
        seq::native_index_of(&[input.clone(), ints(&[2, 3])]).ok(),
        Some(Value::Integer(1))
    );
    assert_eq!(
        seq::native_index_of(&[input, ints(&[9])]).ok(),
        Some(Value::Integer(-1))
    );
}

#[test]
fn test_uniq_then_contains() {
    let deduped = set::native_uniq(&[ints(&[3, 1, 3, 2, 1])]);
    let deduped = match deduped {
        Ok(v) => v,
        Err(_) => Value::Nil,
    };
    assert_eq!(deduped, ints(&[3, 1, 2]));
    assert_eq!(
        predicates::native_contains(&[deduped.clone(), Value::Integer(2)]).ok(),
        Some(Value::Bool(true))
    );
    assert_eq!(
        predicates::native_contains(&[deduped, Value::Integer(9)]).ok(),
        Some(Value::Bool(false))
    );
}

#[test]
fn test_intersection_difference_complement() {
    let a = ints(&[1, 2, 3, 4]);
    let b = ints(&[2, 4, 6]);
    let inter = set::native_intersection(&[a.clone(), b.clone()]).ok();
    let diff = set::native_difference(&[a, b]).ok();
    assert_eq!(inter, Some(ints(&[2, 4])));
    assert_eq!(diff, Some(ints(&[1, 3])));
}

#[test]
fn test_flatten_then_sort() {
    let nested = Value::list(vec![
        ints(&[3, 1]),
        Value::list(vec![ints(&[2])]),
        Value::Integer(5),
    ]);
    let flat = match transform::native_flatten(&[nested]) {
        Ok(v) => v,
        Err(_) => Value::Nil,
    };
    assert_eq!(flat, ints(&[3, 1, 2, 5]));

    let sorted =
        transform::native_sort_by(&[flat], &mut |call: &[Value]| Ok(call[0].clone())).ok();
    assert_eq!(sorted, Some(ints(&[1, 2, 3, 5])));
}

#[test]
fn test_zip_rows_align_by_position() {
    let names = Value::list(vec![
        Value::String("ann".to_string()),
        Value::String("bob".to_string()),
    ]);
    let ages = ints(&[30, 40, 50]);
    let rows = transform::native_zip(&[names, ages]).ok();
    let expected = Value::list(vec![
        Value::list(vec![Value::String("ann".to_string()), Value::Integer(30)]),
        Value::list(vec![Value::String("bob".to_string()), Value::Integer(40)]),
        Value::list(vec![Value::Nil, Value::Integer(50)]),
    ]);
    assert_eq!(rows, Some(expected));
}

#[test]
fn test_sort_by_key_on_records() {
    let people = Value::list(vec![
        record("carol", 35),
        record("ann", 28),
        record("bob", 35),
    ]);
    let sorted =
        transform::native_sort_by_key(&[Value::String("age".to_string()), people]).ok();
    // 同キー（35）はもとの相対順序（carolがbobより先）
    let expected = Value::list(vec![
        record("ann", 28),
        record("carol", 35),
        record("bob", 35),
    ]);
    assert_eq!(sorted, Some(expected));
}

#[test]
fn test_pluck_after_sort() {
    let people = Value::list(vec![
        record("carol", 35),
        record("ann", 28),
        record("bob", 31),
    ]);
    let sorted = match transform::native_sort_by_key(&[Value::String("age".to_string()), people]) {
        Ok(v) => v,
        Err(_) => Value::Nil,
    };
    let names = seq::native_pluck(&[sorted, Value::String("name".to_string())]).ok();
    let expected = Value::list(vec![
        Value::String("ann".to_string()),
        Value::String("bob".to_string()),
        Value::String("carol".to_string()),
    ]);
    assert_eq!(names, Some(expected));
}

#[test]
fn test_extend_defaults_config_layering() {
    let mut base = kumi::new_hashmap();
    base.insert("host".to_string(), Value::String("localhost".to_string()));
    base.insert("port".to_string(), Value::Integer(8080));
    let mut overrides = kumi::new_hashmap();
    overrides.insert("port".to_string(), Value::Integer(9090));
    overrides.insert("debug".to_string(), Value::Bool(true));

    // extendは後勝ち
    let merged = map::native_extend(&[Value::Map(base.clone()), Value::Map(overrides.clone())]);
    let merged = match merged {
        Ok(Value::Map(m)) => m,
        _ => kumi::new_hashmap(),
    };
    assert_eq!(merged.get("port"), Some(&Value::Integer(9090)));
    assert_eq!(merged.get("host"), Some(&Value::String("localhost".to_string())));
    assert_eq!(merged.get("debug"), Some(&Value::Bool(true)));

    // defaultsは既存キーを守る
    let filled = map::native_defaults(&[Value::Map(base), Value::Map(overrides)]);
    let filled = match filled {
        Ok(Value::Map(m)) => m,
        _ => kumi::new_hashmap(),
    };
    assert_eq!(filled.get("port"), Some(&Value::Integer(8080)));
    assert_eq!(filled.get("debug"), Some(&Value::Bool(true)));
}

#[test]
fn test_every_some_on_map_values() {
    let mut m = kumi::new_hashmap();
    m.insert("x".to_string(), Value::Integer(1));
    m.insert("y".to_string(), Value::Integer(2));
    let collection = Value::Map(m);

    fn positive(call: &[Value]) -> Result<Value, KumiError> {
        match &call[0] {
            Value::Integer(n) => Ok(Value::Bool(*n > 0)),
            _ => Ok(Value::Bool(false)),
        }
    }
    assert_eq!(
        predicates::native_every(&[collection.clone()], &mut positive).ok(),
        Some(Value::Bool(true))
    );
    assert_eq!(
        predicates::native_some(&[collection], Some(&mut positive)).ok(),
        Some(Value::Bool(true))
    );
}

#[test]
fn test_callback_error_stops_iteration() {
    let mut visited = 0;
    let result = hof::native_map(&[ints(&[1, 2, 3])], &mut |call: &[Value]| {
        visited += 1;
        if call[0] == Value::Integer(2) {
            Err(KumiError::from("stop"))
        } else {
            Ok(call[0].clone())
        }
    });
    assert!(result.is_err());
    // エラー以降の要素には触れない
    assert_eq!(visited, 2);
}

#[test]
fn test_memoize_with_expensive_lookup() {
    let mut lookups = 0;
    let mut cached = wrap::Memoize::new(|arg: &Value| {
        lookups += 1;
        match arg {
            Value::Integer(n) => Ok(Value::Integer(n * n)),
            _ => Ok(Value::Nil),
        }
    });
    for _ in 0..3 {
        assert_eq!(cached.call(&Value::Integer(9)).ok(), Some(Value::Integer(81)));
    }
    drop(cached);
    assert_eq!(lookups, 1);
}

#[test]
fn test_delay_runs_after_wait() {
    let handle = wrap::delay(10, vec![ints(&[1, 2])], |args| {
        seq::native_first(args)
    });
    assert_eq!(handle.wait().ok(), Some(Value::Integer(1)));
}

#[cfg(feature = "std-rand")]
#[test]
fn test_shuffle_then_sort_restores_order() {
    let input = ints(&[5, 3, 1, 4, 2]);
    let shuffled = match transform::native_shuffle(&[input]) {
        Ok(v) => v,
        Err(_) => Value::Nil,
    };
    let sorted =
        transform::native_sort_by(&[shuffled], &mut |call: &[Value]| Ok(call[0].clone())).ok();
    assert_eq!(sorted, Some(ints(&[1, 2, 3, 4, 5])));
}
