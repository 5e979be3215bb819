use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDate, NaiveDateTime};

/// Result of coercing one cell: the value to use and whether a non-empty
/// cell had to fall back to the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Coerced<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    fn fallback(value: T, had_content: bool) -> Self {
        Self {
            value,
            defaulted: had_content,
        }
    }
}

pub fn is_empty(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

pub fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(is_empty)
}

/// Numeric value of a cell; anything that is not a finite number becomes 0.
pub fn number_or_zero(cell: &Data) -> Coerced<f64> {
    let parsed = match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Coerced::parsed(v),
        _ => Coerced::fallback(0.0, !is_empty(cell)),
    }
}

/// Date part of a cell; times are dropped and unparseable content is absent.
pub fn date_or_none(cell: &Data) -> Coerced<Option<NaiveDate>> {
    let parsed = match cell {
        Data::DateTime(dt) => excel_date(dt),
        Data::DateTimeIso(s) | Data::String(s) => parse_date_text(s),
        _ => None,
    };
    match parsed {
        Some(d) => Coerced::parsed(Some(d)),
        None => Coerced::fallback(None, !is_empty(cell)),
    }
}

/// Trimmed display text of a cell, or None for empty/error cells.
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match excel_date(dt) {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => dt.as_f64().to_string(),
        },
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Date part of a date-formatted cell. calamine applies the workbook's
/// 1900 or 1904 epoch.
pub fn excel_date(dt: &ExcelDateTime) -> Option<NaiveDate> {
    let serial = dt.as_f64();
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    dt.as_datetime().map(|d| d.date())
}

pub fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%d/%m/%Y %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}
