//! 関数ラッパー（once, memoize, delay）
//!
//! 呼び出し制御のラッパー。onceとmemoizeは呼び出し側の関数を包む
//! ジェネリック型、delayはワーカースレッドとチャネルで遅延実行する。

use crate::error::KumiError;
use crate::value::Value;
use crossbeam_channel::{bounded, Receiver};
use std::thread;
use std::time::Duration;

/// once - 最初の1回だけ実行し、以降は最初の結果を返すラッパー
///
/// 最初の成功結果をキャッシュし、2回目以降は内側の関数を呼ばずに
/// その値を返す。エラーはキャッシュされず、次の呼び出しで再実行する。
pub struct Once<F> {
    func: F,
    result: Option<Value>,
}

impl<F> Once<F>
where
    F: FnMut(&[Value]) -> Result<Value, KumiError>,
{
    pub fn new(func: F) -> Self {
        Once { func, result: None }
    }

    /// ラップした関数を呼び出す
    pub fn call(&mut self, args: &[Value]) -> Result<Value, KumiError> {
        if let Some(cached) = &self.result {
            return Ok(cached.clone());
        }
        let value = (self.func)(args)?;
        self.result = Some(value.clone());
        Ok(value)
    }

    /// すでに実行済みかどうか
    pub fn called(&self) -> bool {
        self.result.is_some()
    }
}

/// memoize - 引数の値ごとに結果をキャッシュするラッパー
///
/// 同じ引数値（構造的等価）での再呼び出しは内側の関数を実行せず
/// キャッシュを返す。falsyな結果（nil, false）もキャッシュ対象。
/// Floatを含む引数はハッシュキーにできないため拒否する。
pub struct Memoize<F> {
    func: F,
    cache: crate::HashMap<Value, Value>,
}

impl<F> Memoize<F>
where
    F: FnMut(&Value) -> Result<Value, KumiError>,
{
    pub fn new(func: F) -> Self {
        Memoize {
            func,
            cache: crate::new_hashmap(),
        }
    }

    /// ラップした関数を呼び出す
    pub fn call(&mut self, arg: &Value) -> Result<Value, KumiError> {
        if arg.contains_float() {
            return Err(KumiError::not_hashable("memoize", arg.type_name()));
        }
        if let Some(cached) = self.cache.get(arg) {
            return Ok(cached.clone());
        }
        let value = (self.func)(arg)?;
        self.cache.insert(arg.clone(), value.clone());
        Ok(value)
    }

    /// キャッシュ済みエントリ数
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

/// delayの結果を受け取るハンドル
pub struct Delayed {
    receiver: Receiver<Result<Value, KumiError>>,
}

impl Delayed {
    /// 結果が届くまでブロックして待つ
    pub fn wait(self) -> Result<Value, KumiError> {
        match self.receiver.recv() {
            Ok(result) => result,
            Err(_) => Err(KumiError::from("delay: worker dropped without result")),
        }
    }

    /// ブロックせずに結果を確認する（未完了ならNone）
    pub fn poll(&self) -> Option<Result<Value, KumiError>> {
        self.receiver.try_recv().ok()
    }
}

/// delay - 指定ミリ秒後にワーカースレッドで関数を実行する
///
/// 呼び出し側はブロックせずにすぐ`Delayed`ハンドルを受け取る。
/// 引数は起動時に確定し、待機中に呼び出し側が何をしても影響しない。
pub fn delay<F>(wait_ms: u64, args: Vec<Value>, func: F) -> Delayed
where
    F: FnOnce(&[Value]) -> Result<Value, KumiError> + Send + 'static,
{
    let (sender, receiver) = bounded(1);

    thread::spawn(move || {
        thread::sleep(Duration::from_millis(wait_ms));
        let result = func(&args);
        // 受信側がハンドルを捨てていたら送り先がないだけ
        let _ = sender.send(result);
    });

    Delayed { receiver }
}
