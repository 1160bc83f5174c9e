//! Capability tags for matrix specializations.
//!
//! Every `Matrix<T>` specialization declares, at compile time, whether it
//! carries numeric semantics. The answer comes from the element type's
//! `Contents` impl and is the same for every instance of that
//! specialization; it cannot be changed per matrix.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentsType {
    Generic,
    Numeric,
}

/// Declares the capability tag of `Matrix<Self>`.
///
/// The default is `ContentsType::Generic`, so a custom element type only
/// needs an empty impl:
///
/// ```
/// use simple_math::math::{Contents, ContentsType};
///
/// struct Label(String);
/// impl Contents for Label {}
///
/// assert_eq!(<Label as Contents>::CONTENTS_TYPE, ContentsType::Generic);
/// ```
pub trait Contents {
    const CONTENTS_TYPE: ContentsType = ContentsType::Generic;
}

macro_rules! numeric_contents {
    ($($t:ty),* $(,)?) => {
        $(impl Contents for $t {
            const CONTENTS_TYPE: ContentsType = ContentsType::Numeric;
        })*
    };
}

macro_rules! generic_contents {
    ($($t:ty),* $(,)?) => {
        $(impl Contents for $t {})*
    };
}

numeric_contents!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
generic_contents!(bool, char, String, &'static str);
