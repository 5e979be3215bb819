use chrono::NaiveDate;

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Format a float as Brazilian Reais: R$ 1.234,56
pub fn brl(val: f64) -> String {
    if !val.is_finite() {
        return "N/A".to_string();
    }
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let with_dots = group_thousands(int_part);

    // "-0,00" after rounding reads as zero
    if val < 0.0 && cents != "0.00" {
        format!("-R$ {with_dots},{dec_part}")
    } else {
        format!("R$ {with_dots},{dec_part}")
    }
}

pub fn count(n: usize) -> String {
    group_thousands(&n.to_string())
}

pub fn date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
