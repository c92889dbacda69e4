//! 操作関数用のユーティリティマクロ
//!
//! 引数チェックなど、操作関数で繰り返し使用されるパターンを
//! 統一するマクロを提供します。

/// 引数の個数をチェックするマクロ
///
/// # 使用例
///
/// ```ignore
/// // 引数が正確に2個必要な場合
/// check_args!(args, 2, "index-of");
///
/// // 引数が1個必要な場合
/// check_args!(args, 1, "uniq");
/// ```
#[macro_export]
macro_rules! check_args {
    // 引数が正確に0個
    ($args:expr, 0, $name:expr) => {
        if !$args.is_empty() {
            return Err($crate::error::KumiError::arity($crate::i18n::fmt_msg(
                $crate::i18n::MsgKey::Need0Args,
                &[$name],
            )));
        }
    };

    // 引数が正確に1個
    ($args:expr, 1, $name:expr) => {
        if $args.len() != 1 {
            return Err($crate::error::KumiError::arity($crate::i18n::fmt_msg(
                $crate::i18n::MsgKey::Need1Arg,
                &[$name],
            )));
        }
    };

    // 引数が正確に2個
    ($args:expr, 2, $name:expr) => {
        if $args.len() != 2 {
            return Err($crate::error::KumiError::arity($crate::i18n::fmt_msg(
                $crate::i18n::MsgKey::Need2Args,
                &[$name],
            )));
        }
    };

    // 引数が正確にN個（汎用）
    ($args:expr, $n:expr, $name:expr) => {
        if $args.len() != $n {
            return Err($crate::error::KumiError::arity($crate::i18n::fmt_msg(
                $crate::i18n::MsgKey::NeedExactlyNArgs,
                &[$name, &$n.to_string()],
            )));
        }
    };
}
