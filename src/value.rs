//! kumiの値を表現する型
//!
//! コレクション操作はすべてこの動的な`Value`の上で動作します。
//! リストはim::Vector、マップはim::HashMap（構造共有で安価にclone可能）。

use crate::HashMap;
use im::Vector;
use std::fmt;
use std::hash::{Hash, Hasher};

/// kumiの値を表現する型
#[derive(Debug, Clone)]
pub enum Value {
    /// nil値
    Nil,
    /// bool値
    Bool(bool),
    /// 整数
    Integer(i64),
    /// 浮動小数点数
    Float(f64),
    /// 文字列
    String(String),
    /// リスト（順序付きシーケンス）
    List(Vector<Value>),
    /// マップ（文字列キー）
    Map(HashMap<String, Value>),
}

impl Value {
    /// 真偽値判定（nilとfalse以外はすべてtruthy）
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// 型名を取得（エラーメッセージ用）
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// リストの内部データ（im::Vector）への参照を返すヘルパー
    ///
    /// リストでない場合はNoneを返す
    pub fn as_seq(&self) -> Option<&Vector<Value>> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// マップの内部データへの参照を返すヘルパー
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Vec<Value>からリストを作成するヘルパー
    pub fn list(items: Vec<Value>) -> Value {
        Value::List(items.into())
    }

    /// Floatを含むかどうか（ネストしたリスト・マップも再帰的に確認）
    ///
    /// Floatはハッシュと等価性の整合が取れないため、ハッシュキーとして
    /// 使う前にこの判定で排除する
    pub fn contains_float(&self) -> bool {
        match self {
            Value::Float(_) => true,
            Value::List(items) => items.iter().any(Value::contains_float),
            Value::Map(m) => m.values().any(Value::contains_float),
            _ => false,
        }
    }

    /// マップのキーを昇順で返すヘルパー
    ///
    /// マップの走査順は常にキー昇順（呼び出し側から見て安定した順序）
    pub fn sorted_keys(map: &HashMap<String, Value>) -> Vec<String> {
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// ValueのPartialEq実装（構造的等価性）
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

// NOTE: FloatはNaNを含み得るため厳密には反射的でないが、
// ハッシュコンテナに入る値はcheck_hashableでFloatを排除している
impl Eq for Value {}

/// ValueのHash実装
///
/// Floatはto_bitsでハッシュ化する。-0.0/NaNの等価性とは一致しないため、
/// 集合演算・memoizeキーではFloatを事前に拒否する（check_hashable）。
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Bool(b) => b.hash(state),
            Value::Integer(n) => n.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::String(s) => s.hash(state),
            Value::List(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
            Value::Map(m) => {
                // マップの等価性は順序非依存なので、キー昇順でハッシュ化
                m.len().hash(state);
                for key in Value::sorted_keys(m) {
                    key.hash(state);
                    if let Some(v) = m.get(&key) {
                        v.hash(state);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, key) in Value::sorted_keys(m).iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match m.get(key) {
                        Some(v) => write!(f, "{}: {}", key, v)?,
                        None => write!(f, "{}: nil", key)?,
                    }
                }
                write!(f, "}}")
            }
        }
    }
}
