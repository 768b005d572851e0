//! Dinar amount formatting.

/// Suffix printed after dinar amounts.
pub const CURRENCY_SIGN: &str = "دج";

/// Format an integer amount with `,` thousands separators.
///
/// ```
/// assert_eq!(dada_i18n::format_amount(12400), "12,400");
/// assert_eq!(dada_i18n::format_amount(-1500), "-1,500");
/// ```
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount followed by the dinar sign, as shown on price tags.
pub fn format_price(amount: i64) -> String {
    format!("{} {}", format_amount(amount), CURRENCY_SIGN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(400), "400");
        assert_eq!(format_amount(8500), "8,500");
        assert_eq!(format_amount(1234567), "1,234,567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(17000), "17,000 دج");
    }
}
