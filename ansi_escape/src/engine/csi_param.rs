// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Display, Formatter, Write};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{CSI_PARAM_SEPARATOR, ESC};

/// One parameter of an escape sequence. Most are numbers, but some sequences carry a
/// short token instead, eg: `?25` (DEC private mode) or `=13` (screen mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsiParam {
    Int(i64),
    Token(sizing::CsiToken),
}

pub mod sizing {
    use super::{CsiParam, SmallString, SmallVec};

    /// The longest parameter list in the catalogs is a truecolor one: `38;2;r;g;b`.
    pub const MAX_CSI_PARAMS: usize = 5;
    pub type InlineVecCsiParams = SmallVec<[CsiParam; MAX_CSI_PARAMS]>;

    /// Tokens are things like `?1049` or `=19`, so they fit inline.
    pub const DEFAULT_TOKEN_STORAGE_SIZE: usize = 8;
    pub type CsiToken = SmallString<[u8; DEFAULT_TOKEN_STORAGE_SIZE]>;
}

/// Builds a [`sizing::InlineVecCsiParams`] from anything that converts into a
/// [`CsiParam`]. Numbers and `&str` tokens can be mixed.
///
/// ```
/// use r3bl_ansi_escape::{CsiParam, csi_params};
///
/// let params = csi_params![38, 5, "=7"];
/// assert_eq!(params.len(), 3);
/// assert_eq!(params[2], CsiParam::from("=7"));
/// assert!(csi_params![].is_empty());
/// ```
#[macro_export]
macro_rules! csi_params {
    () => {
        $crate::InlineVecCsiParams::new()
    };
    ($($param:expr),+ $(,)?) => {
        [$($crate::CsiParam::from($param)),+]
            .into_iter()
            .collect::<$crate::InlineVecCsiParams>()
    };
}

mod csi_param_impl {
    use super::{CsiParam, Display, Formatter, fmt, sizing::CsiToken};

    impl CsiParam {
        /// Token made of a one character prefix and a number, eg: `?25`.
        #[must_use]
        pub fn prefixed(prefix: char, value: impl Display) -> Self {
            let mut token = CsiToken::new();
            token.push(prefix);
            // Writing into a `SmallString` can't fail.
            _ = fmt::Write::write_fmt(&mut token, format_args!("{value}"));
            CsiParam::Token(token)
        }
    }

    impl Display for CsiParam {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                CsiParam::Int(value) => write!(f, "{value}"),
                CsiParam::Token(token) => f.write_str(token),
            }
        }
    }

    impl From<i64> for CsiParam {
        fn from(value: i64) -> Self { CsiParam::Int(value) }
    }

    impl From<i32> for CsiParam {
        fn from(value: i32) -> Self { CsiParam::Int(i64::from(value)) }
    }

    impl From<u32> for CsiParam {
        fn from(value: u32) -> Self { CsiParam::Int(i64::from(value)) }
    }

    impl From<u16> for CsiParam {
        fn from(value: u16) -> Self { CsiParam::Int(i64::from(value)) }
    }

    impl From<u8> for CsiParam {
        fn from(value: u8) -> Self { CsiParam::Int(i64::from(value)) }
    }

    impl From<&str> for CsiParam {
        fn from(value: &str) -> Self { CsiParam::Token(CsiToken::from_str(value)) }
    }
}

/// The single serializer of escape sequences:
/// `ESC + start + (params joined by ';') + end`.
///
/// An empty parameter list yields `ESC + start + end`, with no separators. Nothing is
/// validated, `start` and `end` are written as given.
#[must_use]
pub fn format_sequence(params: &[CsiParam], start: &str, end: &str) -> String {
    let mut acc = String::with_capacity(1 + start.len() + params.len() * 4 + end.len());
    acc.push(ESC);
    acc.push_str(start);
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            acc.push(CSI_PARAM_SEPARATOR);
        }
        // Writing into a `String` can't fail.
        _ = write!(acc, "{param}");
    }
    acc.push_str(end);
    acc
}
