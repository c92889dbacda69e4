/// 国際化メッセージ管理
///
/// 言語設定の優先順位:
/// 1. KUMI_LANG 環境変数（kumi専用の設定）
/// 2. LANG 環境変数（システムのロケール設定）
/// 3. デフォルト: en
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Lang {
    En = 0,
    Ja = 1,
}

impl Lang {
    /// 環境変数から言語を取得
    /// 優先順位: KUMI_LANG > LANG > デフォルト(en)
    pub fn from_env() -> Self {
        // KUMI_LANGが設定されていればそれを優先
        if let Ok(lang) = std::env::var("KUMI_LANG") {
            return Self::parse(&lang);
        }

        // LANGから言語コードを取得（ja_JP.UTF-8 -> ja）
        if let Ok(lang) = std::env::var("LANG") {
            let lang_code = lang.split('_').next().unwrap_or("");
            return Self::parse(lang_code);
        }

        // デフォルトは英語
        Lang::En
    }

    /// 言語コードをパース
    fn parse(code: &str) -> Self {
        match code {
            "ja" | "ja_JP" => Lang::Ja,
            "en" | "en_US" | "en_GB" => Lang::En,
            _ => Lang::En, // 未対応言語は英語にフォールバック
        }
    }
}

/// エラーメッセージキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum MsgKey {
    // 引数エラー（汎用）
    Need0Args,        // {0}には引数は不要
    Need1Arg,         // {0}には1つの引数が必要
    Need2Args,        // {0}には2つの引数が必要
    Need1Or2Args,     // {0}には1または2個の引数が必要
    NeedExactlyNArgs, // {0}には{1}個の引数が必要
    NeedAtLeastNArgs, // {0}には少なくとも{1}個の引数が必要

    // 型エラー（汎用）
    TypeOnly,          // {0}は{1}のみ受け付けます
    FirstArgMustBe,    // {0}の第1引数は{1}
    SecondArgMustBe,   // {0}の第2引数は{1}
    MustBeList,        // {0}: {1}はリスト
    AllElementsMustBe, // {0}: すべての要素は{1}
    NotHashable,       // {0}: {1}はハッシュキー不可
}

// ========================================
// メッセージ配列定義（高速アクセス用）
// ========================================

/// 英語エラーメッセージ配列
static EN_MSGS: [&str; 12] = [
    "{0} requires no arguments",               // Need0Args
    "{0} requires 1 argument",                 // Need1Arg
    "{0} requires 2 arguments",                // Need2Args
    "{0} requires 1 or 2 arguments",           // Need1Or2Args
    "{0} requires exactly {1} argument(s)",    // NeedExactlyNArgs
    "{0} requires at least {1} argument(s)",   // NeedAtLeastNArgs
    "{0} accepts {1} only",                    // TypeOnly
    "{0}'s first argument must be {1}",        // FirstArgMustBe
    "{0}'s second argument must be {1}",       // SecondArgMustBe
    "{0}: {1} must be a list",                 // MustBeList
    "{0}: all elements must be {1}",           // AllElementsMustBe
    "{0}: {1} cannot be used as a hash key",   // NotHashable
];

/// 日本語エラーメッセージ配列
static JA_MSGS: [&str; 12] = [
    "{0}には引数は不要です",                       // Need0Args
    "{0}には1つの引数が必要です",                  // Need1Arg
    "{0}には2つの引数が必要です",                  // Need2Args
    "{0}には1または2個の引数が必要です",           // Need1Or2Args
    "{0}には{1}個の引数が必要です",                // NeedExactlyNArgs
    "{0}には少なくとも{1}個の引数が必要です",      // NeedAtLeastNArgs
    "{0}は{1}のみ受け付けます",                    // TypeOnly
    "{0}の第1引数は{1}である必要があります",       // FirstArgMustBe
    "{0}の第2引数は{1}である必要があります",       // SecondArgMustBe
    "{0}: {1}はリストである必要があります",        // MustBeList
    "{0}: すべての要素は{1}である必要があります",  // AllElementsMustBe
    "{0}: {1}はハッシュキーとして使用できません",  // NotHashable
];

/// メッセージマネージャー（配列ベース、高速アクセス）
pub struct Messages {
    lang: Lang,
}

impl Messages {
    /// 言語設定でMessagesインスタンスを作成
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// メッセージを取得
    pub fn get(&self, key: MsgKey) -> &'static str {
        match self.lang {
            Lang::En => EN_MSGS[key as usize],
            Lang::Ja => JA_MSGS[key as usize],
        }
    }

    /// メッセージをフォーマット（プレースホルダー {0}, {1}, ... を置換）
    pub fn fmt(&self, key: MsgKey, args: &[&str]) -> String {
        let template = self.get(key);
        let mut result = template.to_string();

        for (i, arg) in args.iter().enumerate() {
            let placeholder = format!("{{{}}}", i);
            result = result.replace(&placeholder, arg);
        }

        result
    }
}

// ========================================
// グローバルインスタンス
// ========================================

static MESSAGES: OnceLock<Messages> = OnceLock::new();

/// グローバルなメッセージインスタンスを取得
pub fn messages() -> &'static Messages {
    MESSAGES.get_or_init(|| Messages::new(Lang::from_env()))
}

/// メッセージを取得してフォーマット
pub fn fmt_msg(key: MsgKey, args: &[&str]) -> String {
    messages().fmt(key, args)
}
