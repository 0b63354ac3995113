use serde_json::Number;

use crate::{
    Bson,
    error::{Error, Result},
};

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Picks the narrowest BSON numeric type that holds `number` exactly: Int32, then Int64, then
/// Double. Fractional and non-finite values are always Double, and integral values beyond the
/// Int64 range fall back to Double.
pub(crate) fn classify(number: &Number) -> Result<Bson> {
    if let Some(i) = number.as_i64() {
        return Ok(match i32::try_from(i) {
            Ok(i) => Bson::Int32(i),
            Err(_) => Bson::Int64(i),
        });
    }

    let Some(f) = number.as_f64() else {
        return Err(Error::unsupported_number_shape(number));
    };

    if !f.is_finite() || f.fract() != 0.0 {
        return Ok(Bson::Double(f));
    }

    if f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
        Ok(Bson::Int32(f as i32))
    } else if (-TWO_POW_63..TWO_POW_63).contains(&f) {
        Ok(Bson::Int64(f as i64))
    } else {
        Ok(Bson::Double(f))
    }
}
