//! Currency formatting helpers
//!
//! Pure functions; every view formats amounts through here. KRW values are
//! thousands-separated with the ₩ symbol, USDT display divides by the fixed
//! mock rate and keeps two decimals.

use crate::constants::KRW_PER_USDT;
use crate::models::CurrencyMode;

/// Thousands-separated digits ("1250000" -> "1,250,000")
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// "₩1,250,000" (sign before the symbol for negative values)
pub fn krw(value: i64) -> String {
    if value < 0 {
        format!("-₩{}", group_thousands(-value))
    } else {
        format!("₩{}", group_thousands(value))
    }
}

/// "925.93 USDT" for a KRW-denominated value
pub fn usdt(value: i64) -> String {
    format!("{:.2} USDT", value as f64 / KRW_PER_USDT)
}

/// Format a KRW-denominated value for the active display mode
pub fn currency(value: i64, mode: CurrencyMode) -> String {
    match mode {
        CurrencyMode::Krw => krw(value),
        CurrencyMode::Usdt => usdt(value),
    }
}

/// "€50" for whole amounts, "€15.50" otherwise
pub fn eur(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("€{}", amount as i64)
    } else {
        format!("€{:.2}", amount)
    }
}

/// Parse "₩500,000" back into 500000. Foreign-currency labels and other
/// text return None.
pub fn krw_display_value(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('₩')?;
    digits.replace(',', "").parse().ok()
}

/// Re-render a ledger display amount for the active currency mode. KRW
/// amounts convert; foreign-currency labels pass through unchanged.
pub fn ledger_amount(text: &str, mode: CurrencyMode) -> String {
    match krw_display_value(text) {
        Some(value) => currency(value, mode),
        None => text.to_string(),
    }
}

/// Exchange-rate line on the payment view
pub fn eur_rate(rate: f64, mode: CurrencyMode) -> String {
    match mode {
        CurrencyMode::Krw => format!("1 EUR = ₩{}", group_thousands(rate as i64)),
        CurrencyMode::Usdt => format!("1 EUR = {:.4} USDT", rate / KRW_PER_USDT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_250_000), "1,250,000");
        assert_eq!(group_thousands(-74_000), "-74,000");
    }

    #[test]
    fn test_krw_and_usdt_display() {
        assert_eq!(krw(100_000), "₩100,000");
        assert_eq!(krw(-74_000), "-₩74,000");
        assert_eq!(usdt(1_250_000), "925.93 USDT");
        assert_eq!(currency(500_000, CurrencyMode::Krw), "₩500,000");
        assert_eq!(currency(1_350_000, CurrencyMode::Usdt), "1000.00 USDT");
    }

    #[test]
    fn test_eur_display() {
        assert_eq!(eur(50.0), "€50");
        assert_eq!(eur(15.5), "€15.50");
    }

    #[test]
    fn test_krw_display_round_trip() {
        assert_eq!(krw_display_value("₩500,000"), Some(500_000));
        assert_eq!(krw_display_value("€15.50"), None);
        assert_eq!(krw_display_value(&krw(1_250_000)), Some(1_250_000));
    }

    #[test]
    fn test_ledger_amount_passthrough() {
        assert_eq!(ledger_amount("₩500,000", CurrencyMode::Usdt), "370.37 USDT");
        assert_eq!(ledger_amount("€15.50", CurrencyMode::Usdt), "€15.50");
        assert_eq!(ledger_amount("₩500,000", CurrencyMode::Krw), "₩500,000");
    }

    #[test]
    fn test_eur_rate_line() {
        assert_eq!(eur_rate(1480.0, CurrencyMode::Krw), "1 EUR = ₩1,480");
        assert_eq!(eur_rate(1480.0, CurrencyMode::Usdt), "1 EUR = 1.0963 USDT");
    }
}
