use std::fmt::Display;

use contracts::debug_requires;
use rand::{Rng, distr::Alphanumeric};

pub const DEFAULT_TOKEN_LEN: usize = 32;

/// Random `[A-Za-z0-9]` token drawn from the thread-local CSPRNG.
pub fn random_token(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// 拼接 URL 路径，去掉各段首尾多余的 `/`
///
/// ```
/// use orion_helpful::text::url_join;
///
/// assert_eq!(url_join(["/lol", "///lol", "/lol//"]), "/lol/lol/lol");
/// assert_eq!(url_join(["api", "v1"]), "/api/v1");
/// ```
pub fn url_join<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = parts
        .into_iter()
        .map(|x| x.to_string().trim_matches('/').to_string())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// 是否为合法的十六进制整数字面量
///
/// 允许首尾空白、正负号、`0x`/`0X` 前缀，以及数字之间的单个 `_`。
pub fn is_hex(value: &str) -> bool {
    let s = value.trim();
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let s = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => s,
    };
    s.split('_')
        .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_hexdigit()))
}

/// 非空且全部由十进制数字组成
pub fn is_int(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// `splitn` that pads the result with `None` up to `maxsplit + 1` items.
///
/// ```
/// use orion_helpful::text::padded_split;
///
/// assert_eq!(padded_split("text/html", ";", Some(1)), vec![Some("text/html"), None]);
/// assert_eq!(
///     padded_split("text/html;a=1;b=2", ";", Some(1)),
///     vec![Some("text/html"), Some("a=1;b=2")]
/// );
/// ```
#[debug_requires(!sep.is_empty(), "separator must not be empty")]
pub fn padded_split<'a>(value: &'a str, sep: &str, maxsplit: Option<usize>) -> Vec<Option<&'a str>> {
    let mut parts: Vec<Option<&'a str>> = match maxsplit {
        Some(n) => value.splitn(n + 1, sep).map(Some).collect(),
        None => value.split(sep).map(Some).collect(),
    };
    if let Some(n) = maxsplit {
        parts.resize(n + 1, None);
    }
    parts
}

/// 同 [`padded_split`]，缺失部分以 `pad` 填充
pub fn padded_split_with<'a>(
    value: &'a str,
    sep: &str,
    maxsplit: Option<usize>,
    pad: &'a str,
) -> Vec<&'a str> {
    padded_split(value, sep, maxsplit)
        .into_iter()
        .map(|x| x.unwrap_or(pad))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_random_token() {
        assert_eq!(random_token(DEFAULT_TOKEN_LEN).len(), 32);
        assert_eq!(random_token(6).len(), 6);
        assert!(random_token(0).is_empty());
        assert!(random_token(64).chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(random_token(32), random_token(32));
    }

    #[test]
    fn test_url_join() {
        assert_eq!(url_join(["/lol", "///lol", "/lol//"]), "/lol/lol/lol");
        assert_eq!(url_join(["users", "42"]), "/users/42");
        assert_eq!(url_join([1, 2]), "/1/2");
        assert_eq!(url_join(Vec::<String>::new()), "/");
    }

    #[rstest]
    #[case("abab", true)]
    #[case("ABCDEF09", true)]
    #[case("0x1f", true)]
    #[case(" -0Xff ", true)]
    #[case("de_ad_be_ef", true)]
    #[case("0x_ff", true)]
    #[case("gg", false)]
    #[case("", false)]
    #[case("0x", false)]
    #[case("a__b", false)]
    #[case("_ab", false)]
    #[case("ab_", false)]
    fn test_is_hex(#[case] value: &str, #[case] expect: bool) {
        assert_eq!(is_hex(value), expect, "is_hex({value:?})");
    }

    #[rstest]
    #[case("123", true)]
    #[case("007", true)]
    #[case("1.1", false)]
    #[case("-1", false)]
    #[case("", false)]
    #[case("12a", false)]
    fn test_is_int(#[case] value: &str, #[case] expect: bool) {
        assert_eq!(is_int(value), expect);
    }

    #[test]
    fn test_padded_split() {
        assert_eq!(
            padded_split("text/html", ";", Some(1)),
            vec![Some("text/html"), None]
        );
        assert_eq!(
            padded_split("text/html;q=1", ";", Some(1)),
            vec![Some("text/html"), Some("q=1")]
        );
        assert_eq!(
            padded_split("text/html;a=1;b=2", ";", Some(2)),
            vec![Some("text/html"), Some("a=1"), Some("b=2")]
        );
        assert_eq!(
            padded_split("text/html;a=1", ";", Some(2)),
            vec![Some("text/html"), Some("a=1"), None]
        );
        assert_eq!(
            padded_split("a;b;c", ";", None),
            vec![Some("a"), Some("b"), Some("c")]
        );
    }

    #[test]
    fn test_padded_split_with() {
        assert_eq!(
            padded_split_with("text/html", ";", Some(1), "q=1"),
            vec!["text/html", "q=1"]
        );
        assert_eq!(
            padded_split_with("k=v", "=", Some(3), ""),
            vec!["k", "v", "", ""]
        );
    }
}
