//! Human-readable rendering of estimates.

/// Format an amount of whole currency units as Indonesian rupiah.
///
/// ```
/// use print_estimate::format_currency;
///
/// assert_eq!(format_currency(183_328), "Rp 183.328");
/// ```
#[must_use]
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {grouped}")
}

/// Format a duration in hours as hours and minutes.
///
/// Under an hour only minutes are shown; whole hours drop the minutes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(hours: f64) -> String {
    let hours = hours.max(0.0);
    let mut whole = hours.floor() as u64;
    let mut minutes = ((hours - hours.floor()) * 60.0).round() as u64;
    if minutes == 60 {
        whole += 1;
        minutes = 0;
    }

    match (whole, minutes) {
        (0, minutes) => format!("{minutes} min"),
        (whole, 0) => format!("{whole} h"),
        (whole, minutes) => format!("{whole} h {minutes} min"),
    }
}

/// Format a weight in grams, switching to kilograms at 1 kg.
#[must_use]
pub fn format_weight(grams: f64) -> String {
    if grams < 1000.0 {
        format!("{grams:.1} g")
    } else {
        format!("{:.2} kg", grams / 1000.0)
    }
}
