use std::fmt;

/// Number of characters used when rendering the seconds of a [`Dms`]
pub const SECONDS_WIDTH: usize = 6;

/// Transformation from the packed DDDMMSS.sss format, i.e. degrees·10000 +
/// minutes·100 + seconds stored in a single number, to degrees-with-decimals.
///
/// Degrees and minutes are truncated to integers one after the other, and the
/// seconds are whatever remains: 1395000 is 139°50'00", hence 139.8333...
/// No sanity check: minutes or seconds exceeding 59 pass through unnoticed.
pub fn packed_dms_to_dd(packed: f64) -> f64 {
    let d = (packed / 10000.).floor();
    let minute_remainder = packed - d * 10000.;
    let m = (minute_remainder / 100.).floor();
    let s = packed - d * 10000. - m * 100.;
    d + m / 60. + s / 3600.
}

/// Transformation from the packed DDDMMSS.sss format to radians
pub fn packed_dms_to_radians(packed: f64) -> f64 {
    packed_dms_to_dd(packed).to_radians()
}

/// Transformation from degrees-with-decimals to the packed DDDMMSS.sss format.
///
/// Computed from an integer number of microseconds of arc, so values decoded
/// by [`packed_dms_to_dd`] encode back to where they came from, rather than
/// drifting to e.g. 132°09'59.999999" for 132°10'.
pub fn dd_to_packed_dms(dd: f64) -> f64 {
    const MICRO_PER_DEGREE: f64 = 3_600_000_000.;
    let sign = if dd < 0. { -1. } else { 1. };
    let micro = (dd.abs() * MICRO_PER_DEGREE).round() as u64;
    let d = micro / 3_600_000_000;
    let m = (micro / 60_000_000) % 60;
    let s = (micro % 60_000_000) as f64 / 1e6;
    sign * (d as f64 * 10000. + m as f64 * 100. + s)
}

/// An angle split into degrees, minutes and seconds-with-decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dms {
    pub d: i32,
    pub m: u8,
    pub s: f64,
}

impl Dms {
    #[must_use]
    pub fn new(d: i32, m: u8, s: f64) -> Dms {
        Dms { d, m, s }
    }

    /// Split degrees-with-decimals into degrees, minutes and seconds.
    ///
    /// The degrees are truncated toward zero, the minutes are truncated from
    /// the remaining fraction, and the seconds are derived from what is left
    /// after subtracting the *truncated* minutes. Negative minutes and seconds
    /// are clamped to zero, so the sign lives in the degree component alone.
    #[must_use]
    pub fn from_degrees(dd: f64) -> Dms {
        let d = dd.trunc();
        let m = ((dd - d) * 60.).trunc().max(0.);
        let s = ((dd - d - m / 60.) * 3600.).max(0.);
        Dms {
            d: d as i32,
            m: m as u8,
            s,
        }
    }

    #[must_use]
    pub fn to_degrees(self) -> f64 {
        (self.s / 60. + f64::from(self.m)) / 60. + f64::from(self.d)
    }

    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.to_degrees().to_radians()
    }
}

/// Renders as e.g. `35°40'52.449"`
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}'{}\"", self.d, self.m, format_seconds(self.s))
    }
}

/// Render seconds in exactly [`SECONDS_WIDTH`] characters of plain decimal
/// notation, truncating surplus digits and padding with zeros.
///
/// The truncation is done on the number, in units of the last kept decimal,
/// and the result is written with a fixed precision, so tiny values come out
/// as `0.0000`, never in exponent notation.
pub fn format_seconds(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0. {
        seconds
    } else {
        0.
    };

    let mut decimals = SECONDS_WIDTH.saturating_sub(integer_digits(seconds) + 1);
    loop {
        let scale = 10_f64.powi(decimals as i32);
        // Rounding to micro-units first keeps e.g. 12.345 from truncating to 12.344
        let units = ((seconds * scale * 1e6).round() / 1e6).floor();
        let text = format!("{:.*}", decimals, units / scale);
        // Rounding up may add an integer digit, e.g. 9.99999999999 -> 10.0000
        if text.len() <= SECONDS_WIDTH || decimals == 0 {
            return text;
        }
        decimals -= 1;
    }
}

// Number of digits before the decimal point, at least one
fn integer_digits(value: f64) -> usize {
    let mut whole = value.trunc();
    let mut digits = 1;
    while whole >= 10. {
        whole = (whole / 10.).trunc();
        digits += 1;
    }
    digits
}

// ----- Tests ---------------------------------------------------------------------
