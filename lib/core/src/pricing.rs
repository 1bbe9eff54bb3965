//! Prices in whole Philippine pesos.

/// An amount of money in whole pesos.
pub type Money = i64;

/// Currency symbol shown next to every price.
pub const CURRENCY_SYMBOL: &str = "₱";

/// Formats an amount with the currency symbol and thousands separators,
/// e.g. `₱12,500`.
#[must_use]
pub fn format_price(amount: Money) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{CURRENCY_SYMBOL}{grouped}")
    }
}

/// Total for a room stay. `None` on overflow.
#[must_use]
pub fn room_total(price_per_night: Money, nights: u32) -> Option<Money> {
    price_per_night.checked_mul(Money::from(nights))
}

/// Total for an equipment rental. `None` on overflow.
#[must_use]
pub fn rental_total(price_per_day: Money, days: u32) -> Option<Money> {
    price_per_day.checked_mul(Money::from(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_price(0), "₱0");
        assert_eq!(format_price(950), "₱950");
        assert_eq!(format_price(1500), "₱1,500");
        assert_eq!(format_price(1_234_567), "₱1,234,567");
        assert_eq!(format_price(-2500), "-₱2,500");
    }

    #[test]
    fn totals_multiply_and_detect_overflow() {
        assert_eq!(room_total(2500, 3), Some(7500));
        assert_eq!(room_total(2500, 0), Some(0));
        assert_eq!(rental_total(450, 4), Some(1800));
        assert_eq!(rental_total(Money::MAX, 2), None);
    }
}
