// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a position or duration in seconds as `M:SS`.
///
/// Minutes are not padded, seconds always use two digits. A value that is not
/// a finite number (an unknown duration) is shown as `0:00`.
///
/// # Arguments
///
/// * `seconds` - The time to format, fractional seconds are truncated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return String::from("0:00");
    }

    let total = seconds.max(0.0).floor() as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_unpadded_and_seconds_padded() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(125.5), "2:05");
    }

    #[test]
    fn unknown_values_show_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn matches_floor_formula_over_a_range() {
        for tenths in 0..40_000u32 {
            let s = f64::from(tenths) / 10.0;
            let expected = format!("{}:{:02}", (s / 60.0).floor(), (s % 60.0).floor());
            assert_eq!(format_time(s), expected, "seconds = {}", s);
        }
    }
}
