//! Display formatting for report values and the output file name.

use chrono::NaiveDate;

/// MIME type of the rendered document.
pub const REPORT_MIME: &str = "application/pdf";

/// Formats a weight in tons with three decimals.
pub fn tons(value: f64) -> String {
    format!("{value:.3}")
}

/// Formats a volume in cubic metres with two decimals.
pub fn cubic_meters(value: f64) -> String {
    format!("{value:.2}")
}

/// Rounds to the nearest integer and inserts thousands separators.
pub fn grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// File name offered for download: the print date with separators removed.
pub fn report_file_name(print_date: NaiveDate) -> String {
    format!("trip_report_{}.pdf", print_date.format("%d%m%Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tons_keeps_three_decimals() {
        assert_eq!(tons(15.0), "15.000");
        // 0.1235 is stored just below the midpoint, so it rounds down.
        assert_eq!(tons(0.1235), "0.123");
        assert_eq!(tons(0.12351), "0.124");
    }

    #[test]
    fn grouped_rounds_and_separates() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.4), "999");
        assert_eq!(grouped(1135.623), "1,136");
        assert_eq!(grouped(1703.4345), "1,703");
        assert_eq!(grouped(4725.0), "4,725");
        assert_eq!(grouped(1234567.89), "1,234,568");
        assert_eq!(grouped(-56781.2), "-56,781");
    }

    #[test]
    fn file_name_derives_from_the_print_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(report_file_name(date), "trip_report_25122024.pdf");

        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(report_file_name(date), "trip_report_02032025.pdf");
    }
}
