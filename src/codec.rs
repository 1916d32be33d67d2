// SPDX-License-Identifier: GPL-3.0-only

//! Token codec shared by the read and write paths of every setting
//!
//! Each enumerated setting declares a single static table pairing its
//! variants with their stored tokens. Encoding, decoding, the store key and
//! the missing-key default all hang off that one declaration, so the read
//! and write paths of a setting cannot disagree about which key they touch.

use crate::errors::{PrefsError, PrefsResult};

/// A closed enumeration persisted as a string token under a fixed key
pub trait PreferenceCodec: Copy + Eq + std::fmt::Debug + 'static {
    /// Store key for this setting
    const KEY: &'static str;

    /// Token assumed when the key is absent
    const DEFAULT_TOKEN: &'static str;

    /// Variant returned for tokens that are not in [`Self::TABLE`]
    const FALLBACK: Self;

    /// Every variant paired with its token
    ///
    /// Must be total over the enum and have no duplicate tokens.
    const TABLE: &'static [(Self, &'static str)];

    /// Token stored for this variant
    fn encode(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, token)| *token)
            .unwrap_or(Self::DEFAULT_TOKEN)
    }

    /// Variant for a token, if the token is known
    fn try_decode(token: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, candidate)| *candidate == token)
            .map(|(variant, _)| *variant)
    }

    /// Variant for a token, coercing unknown tokens to [`Self::FALLBACK`]
    fn decode(token: &str) -> Self {
        Self::try_decode(token).unwrap_or_else(|| {
            tracing::debug!(
                key = Self::KEY,
                token,
                fallback = ?Self::FALLBACK,
                "Unrecognized preference token"
            );
            Self::FALLBACK
        })
    }

    /// Strict decode for user input
    fn parse_token(token: &str) -> PrefsResult<Self> {
        Self::try_decode(token).ok_or_else(|| PrefsError::InvalidValue {
            key: Self::KEY,
            value: token.to_string(),
            expected: Self::expected_tokens(),
        })
    }

    /// Comma separated list of accepted tokens
    fn expected_tokens() -> String {
        Self::TABLE
            .iter()
            .map(|(_, token)| *token)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Toggle {
        Off,
        On,
    }

    impl PreferenceCodec for Toggle {
        const KEY: &'static str = "toggle";
        const DEFAULT_TOKEN: &'static str = "off";
        const FALLBACK: Self = Toggle::Off;
        const TABLE: &'static [(Self, &'static str)] = &[(Toggle::Off, "off"), (Toggle::On, "on")];
    }

    #[test]
    fn test_decode_known_token() {
        assert_eq!(Toggle::decode("on"), Toggle::On);
        assert_eq!(Toggle::decode("off"), Toggle::Off);
    }

    #[test]
    fn test_decode_unknown_token_falls_back() {
        assert_eq!(Toggle::decode("sideways"), Toggle::Off);
        assert_eq!(Toggle::decode(""), Toggle::Off);
        // Tokens are case sensitive
        assert_eq!(Toggle::decode("ON"), Toggle::Off);
    }

    #[test]
    fn test_parse_token_rejects_unknown() {
        let err = Toggle::parse_token("maybe").unwrap_err();
        assert!(err.is_user_error());
        assert!(err.to_string().contains("off, on"));
    }
}
