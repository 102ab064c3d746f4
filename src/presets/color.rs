//! Color normalization - converts CSS color literals to canonical `oklch(L C H)` strings.

use palette::{FromColor, Oklch, Srgb};

use crate::log_warn;

/// Chroma at or below this is treated as achromatic (hue rendered as `0`).
const ACHROMATIC_CHROMA: f64 = 5e-5;

/// Normalize a CSS color literal to `oklch(L C H)`.
///
/// Literals already in OKLCH form are returned unchanged. Literals that cannot
/// be parsed are logged and returned unchanged so generation can still complete.
pub fn to_oklch(value: &str) -> String {
    if is_oklch(value) {
        return value.to_string();
    }

    match parse_oklch(value) {
        Some(color) => format_oklch(&color),
        None => {
            log_warn!("Could not parse color \"{}\", passing through", value);
            value.to_string()
        }
    }
}

/// Whether a literal is already written in OKLCH syntax.
pub fn is_oklch(value: &str) -> bool {
    value
        .trim_start()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("oklch("))
}

/// Parse any CSS color literal into OKLCH, ignoring alpha.
pub fn parse_oklch(value: &str) -> Option<Oklch<f64>> {
    let parsed = csscolorparser::parse(value).ok()?;
    let srgb = Srgb::new(
        f64::from(parsed.r),
        f64::from(parsed.g),
        f64::from(parsed.b),
    );
    Some(Oklch::from_color(srgb))
}

/// Render an OKLCH color with the channel formatting rules of the generated stylesheet.
pub fn format_oklch(color: &Oklch<f64>) -> String {
    let (chroma, hue) = if color.chroma <= ACHROMATIC_CHROMA {
        (0.0, 0.0)
    } else {
        (color.chroma, color.hue.into_positive_degrees())
    };
    format!(
        "oklch({} {} {})",
        format_channel(color.l),
        format_channel(chroma),
        format_channel(hue)
    )
}

/// Format one channel: integers without decimals, everything else to 4 places.
///
/// Values are rounded first, so anything within rounding of an integer renders
/// as that integer. Non-finite values render as `0`.
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
pub fn format_channel(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded.fract() == 0.0 {
        // also folds -0 into 0
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.4}")
    }
}
