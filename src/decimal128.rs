//! [BSON Decimal128](https://github.com/mongodb/specifications/blob/master/source/bson-decimal128/decimal128.md) data type representation

use std::{fmt, str::FromStr};

use crate::error::{Decimal128ErrorKind, Error, Result};

const MAX_DIGITS: usize = 34;
const MAX_COEFFICIENT: u128 = 9_999_999_999_999_999_999_999_999_999_999_999; // 10^34 - 1
const EXPONENT_MIN: i32 = -6176;
const EXPONENT_MAX: i32 = 6111;
const EXPONENT_BIAS: i32 = 6176;

const SIGN_BIT: u128 = 1 << 127;
const INFINITY_BITS: u128 = 0b11110 << 122;
const NAN_BITS: u128 = 0b11111 << 122;
const COEFFICIENT_MASK: u128 = (1 << 113) - 1;

/// Struct representing a BSON Decimal128 type.
///
/// The value is held as a sign, an unscaled integer coefficient of at most 34 decimal digits and
/// a base-10 exponent, so `1.00` and `1.0` are distinct values with distinct text forms. Parsing
/// any string produced by [`Display`](fmt::Display) yields an equal value.
///
/// ```rust
/// use bson_extjson::Decimal128;
///
/// let d: Decimal128 = "1.00".parse()?;
/// assert_eq!(d.to_string(), "1.00");
/// assert_eq!("1.0E+10".parse::<Decimal128>()?.to_string(), "1.0E+10");
/// # Ok::<(), bson_extjson::error::Error>(())
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Decimal128 {
    inner: Repr,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Repr {
    Finite {
        negative: bool,
        coefficient: u128,
        exponent: i16,
    },
    Infinite {
        negative: bool,
    },
    NaN,
}

impl Decimal128 {
    /// Positive infinity.
    pub const INFINITY: Self = Self {
        inner: Repr::Infinite { negative: false },
    };

    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self {
        inner: Repr::Infinite { negative: true },
    };

    /// Not a number.
    pub const NAN: Self = Self { inner: Repr::NaN };

    /// Constructs a finite value equal to `coefficient * 10^exponent`, negated if `negative` is
    /// set. Fails if the coefficient has more than 34 digits or the exponent is outside
    /// `-6176..=6111`.
    pub fn from_parts(negative: bool, coefficient: u128, exponent: i32) -> Result<Self> {
        if coefficient > MAX_COEFFICIENT {
            return Err(Error::decimal128(Decimal128ErrorKind::InvalidCoefficient {
                message: format!("{coefficient} has more than {MAX_DIGITS} digits"),
            }));
        }
        if exponent > EXPONENT_MAX {
            return Err(Error::decimal128(Decimal128ErrorKind::Overflow));
        }
        if exponent < EXPONENT_MIN {
            return Err(Error::decimal128(Decimal128ErrorKind::Underflow));
        }
        Ok(Self::finite(negative, coefficient, exponent))
    }

    fn finite(negative: bool, coefficient: u128, exponent: i32) -> Self {
        Self {
            inner: Repr::Finite {
                negative,
                coefficient,
                exponent: exponent as i16,
            },
        }
    }

    /// The unscaled coefficient, or `None` for NaN and infinities.
    pub fn coefficient(&self) -> Option<u128> {
        match self.inner {
            Repr::Finite { coefficient, .. } => Some(coefficient),
            _ => None,
        }
    }

    /// The base-10 exponent, or `None` for NaN and infinities.
    pub fn exponent(&self) -> Option<i32> {
        match self.inner {
            Repr::Finite { exponent, .. } => Some(exponent.into()),
            _ => None,
        }
    }

    /// Whether the sign bit is set. NaN is never negative.
    pub fn is_sign_negative(&self) -> bool {
        match self.inner {
            Repr::Finite { negative, .. } | Repr::Infinite { negative } => negative,
            Repr::NaN => false,
        }
    }

    /// Check if value is `NaN`
    pub fn is_nan(&self) -> bool {
        matches!(self.inner, Repr::NaN)
    }

    /// Check if value is positive or negative infinity
    pub fn is_infinite(&self) -> bool {
        matches!(self.inner, Repr::Infinite { .. })
    }

    /// Check if value is 0
    pub fn is_zero(&self) -> bool {
        matches!(self.inner, Repr::Finite { coefficient: 0, .. })
    }

    /// Returns the IEEE 754-2008 BID interchange encoding, little-endian.
    pub fn bytes(&self) -> [u8; 16] {
        let bits = match self.inner {
            Repr::Finite {
                negative,
                coefficient,
                exponent,
            } => {
                let biased = (i32::from(exponent) + EXPONENT_BIAS) as u128;
                let sign = if negative { SIGN_BIT } else { 0 };
                sign | (biased << 113) | coefficient
            }
            Repr::Infinite { negative } => {
                let sign = if negative { SIGN_BIT } else { 0 };
                sign | INFINITY_BITS
            }
            Repr::NaN => NAN_BITS,
        };
        bits.to_le_bytes()
    }

    /// Decodes the IEEE 754-2008 BID interchange encoding, little-endian. Non-canonical
    /// coefficients decode as zero.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let bits = u128::from_le_bytes(bytes);
        let negative = bits & SIGN_BIT != 0;

        if bits & NAN_BITS == NAN_BITS {
            return Self::NAN;
        }
        if bits & NAN_BITS == INFINITY_BITS {
            return Self {
                inner: Repr::Infinite { negative },
            };
        }

        let (biased, coefficient) = if (bits >> 125) & 0b11 == 0b11 {
            // the implicit high bits push this form past 10^34 - 1
            (((bits >> 111) & 0x3FFF) as i32, 0)
        } else {
            (((bits >> 113) & 0x3FFF) as i32, bits & COEFFICIENT_MASK)
        };
        let coefficient = if coefficient > MAX_COEFFICIENT { 0 } else { coefficient };
        let exponent = (biased - EXPONENT_BIAS).clamp(EXPONENT_MIN, EXPONENT_MAX);

        Self::finite(negative, coefficient, exponent)
    }
}

impl fmt::Debug for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Decimal128(\"{self}\")")
    }
}

impl fmt::Display for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (negative, coefficient, exponent) = match self.inner {
            Repr::NaN => return f.write_str("NaN"),
            Repr::Infinite { negative: false } => return f.write_str("Infinity"),
            Repr::Infinite { negative: true } => return f.write_str("-Infinity"),
            Repr::Finite {
                negative,
                coefficient,
                exponent,
            } => (negative, coefficient, i32::from(exponent)),
        };

        if negative {
            f.write_str("-")?;
        }

        let digits = coefficient.to_string();
        let adjusted = exponent + (digits.len() as i32 - 1);

        if exponent <= 0 && adjusted >= -6 {
            if exponent == 0 {
                return f.write_str(&digits);
            }
            let point = digits.len() as i32 + exponent;
            if point > 0 {
                let (int, frac) = digits.split_at(point as usize);
                write!(f, "{int}.{frac}")
            } else {
                write!(f, "0.{}{digits}", "0".repeat((-point) as usize))
            }
        } else {
            let (lead, rest) = digits.split_at(1);
            f.write_str(lead)?;
            if !rest.is_empty() {
                write!(f, ".{rest}")?;
            }
            let sign = if adjusted >= 0 { '+' } else { '-' };
            write!(f, "E{sign}{}", adjusted.unsigned_abs())
        }
    }
}

impl FromStr for Decimal128 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        if unsigned.eq_ignore_ascii_case("nan") {
            return Ok(Self::NAN);
        }
        if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
            return Ok(Self {
                inner: Repr::Infinite { negative },
            });
        }

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(ix) => (&unsigned[..ix], Some(&unsigned[ix + 1..])),
            None => (unsigned, None),
        };

        let mut exponent: i64 = match exponent {
            None => 0,
            Some("") => return Err(Error::decimal128(Decimal128ErrorKind::EmptyExponent)),
            Some(e) => {
                let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
                if digits.is_empty() {
                    return Err(Error::decimal128(Decimal128ErrorKind::EmptyExponent));
                }
                if !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::decimal128(Decimal128ErrorKind::InvalidExponent {
                        message: format!("{e:?} is not an integer"),
                    }));
                }
                e.parse().map_err(|_| {
                    Error::decimal128(Decimal128ErrorKind::InvalidExponent {
                        message: format!("{e:?} is out of range"),
                    })
                })?
            }
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::decimal128(Decimal128ErrorKind::Unparseable));
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(Error::decimal128(Decimal128ErrorKind::Unparseable));
        }

        // Exponents saturate at the i64 bounds and are clamped or rejected below.
        exponent = exponent.saturating_sub_unsigned(frac_part.len() as u64);

        let all_digits: String = int_part.chars().chain(frac_part.chars()).collect();
        let mut significant = all_digits.trim_start_matches('0');

        // Digits beyond 34 are accepted only if they are zeros that can be folded into the
        // exponent.
        while significant.len() > MAX_DIGITS {
            match significant.strip_suffix('0') {
                Some(rest) => {
                    significant = rest;
                    exponent = exponent.saturating_add(1);
                }
                None => {
                    return Err(Error::decimal128(Decimal128ErrorKind::InvalidCoefficient {
                        message: format!("{all_digits} cannot be represented exactly"),
                    }));
                }
            }
        }

        let mut coefficient: u128 = if significant.is_empty() {
            0
        } else {
            significant.parse().map_err(|_| {
                Error::decimal128(Decimal128ErrorKind::InvalidCoefficient {
                    message: format!("{significant} is not a valid coefficient"),
                })
            })?
        };

        if coefficient == 0 {
            exponent = exponent.clamp(EXPONENT_MIN.into(), EXPONENT_MAX.into());
        }

        while exponent > i64::from(EXPONENT_MAX) {
            if coefficient.checked_mul(10).is_none_or(|c| c > MAX_COEFFICIENT) {
                return Err(Error::decimal128(Decimal128ErrorKind::Overflow));
            }
            coefficient *= 10;
            exponent -= 1;
        }

        while exponent < i64::from(EXPONENT_MIN) {
            if coefficient % 10 != 0 {
                return Err(Error::decimal128(Decimal128ErrorKind::Underflow));
            }
            coefficient /= 10;
            exponent += 1;
        }

        Ok(Self::finite(negative, coefficient, exponent as i32))
    }
}

impl From<i32> for Decimal128 {
    fn from(value: i32) -> Self {
        Self::finite(value < 0, value.unsigned_abs().into(), 0)
    }
}

impl From<i64> for Decimal128 {
    fn from(value: i64) -> Self {
        Self::finite(value < 0, value.unsigned_abs().into(), 0)
    }
}

impl Default for Decimal128 {
    fn default() -> Self {
        Self::finite(false, 0, 0)
    }
}
