//! kumiエラー処理システム
//!
//! 構造化されたエラー情報を提供し、以下をサポート：
//! - エラーコードによる分類
//! - ヒント（help）と補足（note）
//! - 複数の出力形式（短縮/詳細）

use std::fmt;

/// エラーコード
///
/// Rustコンパイラ風の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 1xx: 型エラー
    E0101, // 型の不一致
    E0102, // ハッシュ化できない値

    // 2xx: 引数エラー
    E0201, // 引数の数が一致しない
    E0204, // 引数の値が不正

    // 9xx: 汎用エラー
    E9999, // 分類されていないエラー
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// 構造化されたエラー情報
#[derive(Debug, Clone)]
pub struct KumiError {
    /// エラーコード
    code: ErrorCode,
    /// メインメッセージ（1行）
    message: String,
    /// 詳細な説明（note）
    notes: Vec<String>,
    /// 解決のヒント（help）
    help: Vec<String>,
}

impl KumiError {
    /// 新しいエラーを作成
    pub fn new<S: Into<String>>(code: ErrorCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// noteを追加
    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.notes.push(note.into());
        self
    }

    /// helpを追加
    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help.push(help.into());
        self
    }

    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// シンプルなメッセージのみ取得（API応答用）
    pub fn message(&self) -> &str {
        &self.message
    }

    /// エラーコード + メッセージ（ログ用）
    pub fn short(&self) -> String {
        format!("error[{}]: {}", self.code, self.message)
    }

    /// 完全な詳細情報
    pub fn full(&self) -> String {
        let mut output = String::new();

        // 1行目：エラーコード + メッセージ
        output.push_str(&format!("error[{}]: {}\n", self.code, self.message));

        // 付加情報
        for note in &self.notes {
            output.push_str(&format!("  = note: {}\n", note));
        }
        for help_text in &self.help {
            output.push_str(&format!("  = help: {}\n", help_text));
        }

        output
    }
}

// Display実装
impl fmt::Display for KumiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full())
    }
}

// String -> KumiError（i18nメッセージをラップ）
impl From<String> for KumiError {
    fn from(msg: String) -> KumiError {
        KumiError::new(ErrorCode::E9999, msg)
    }
}

impl From<&str> for KumiError {
    fn from(msg: &str) -> KumiError {
        KumiError::new(ErrorCode::E9999, msg.to_string())
    }
}

// std::error::Error実装
impl std::error::Error for KumiError {}

// ========================================
// エラー構築ヘルパー関数
// ========================================

impl KumiError {
    /// 引数の数エラー
    pub fn arity<S: Into<String>>(message: S) -> Self {
        KumiError::new(ErrorCode::E0201, message)
    }

    /// 型エラー
    pub fn type_error<S: Into<String>>(message: S) -> Self {
        KumiError::new(ErrorCode::E0101, message)
    }

    /// 引数の値エラー
    pub fn invalid_arg<S: Into<String>>(message: S) -> Self {
        KumiError::new(ErrorCode::E0204, message)
    }

    /// ハッシュ化できない値のエラー
    pub fn not_hashable(op: &str, type_name: &str) -> Self {
        use crate::i18n::{fmt_msg, MsgKey};
        KumiError::new(ErrorCode::E0102, fmt_msg(MsgKey::NotHashable, &[op, type_name]))
    }
}
