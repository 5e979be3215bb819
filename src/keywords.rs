use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::models::PaidBill;

/// Expense terms looked up in bill descriptions.
pub const DEFAULT_KEYWORDS: [&str; 20] = [
    "uber", "iptu", "internet", "multa", "sítio", "manutenção", "manutencao", "encargos",
    "gasolina", "títulos", "titulo", "gás", "juros", "marketing", "frete", "passagem", "viagem",
    "aluguel", "condominio", "telefone",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub occurrences: usize,
    pub total: f64,
}

/// Uppercase the first letter, lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn matcher(keyword: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Count and sum paid amounts of bills whose description mentions each
/// keyword. Keywords without matches are left out; the rest are ordered by
/// total, largest first.
pub fn scan_keywords<S: AsRef<str>>(bills: &[PaidBill], keywords: &[S]) -> Vec<KeywordHit> {
    let mut hits = Vec::new();
    for keyword in keywords {
        let keyword = keyword.as_ref().trim();
        if keyword.is_empty() {
            continue;
        }
        let Some(re) = matcher(keyword) else {
            continue;
        };

        let mut occurrences = 0usize;
        let mut total = 0.0;
        for bill in bills {
            if bill.description.as_deref().is_some_and(|d| re.is_match(d)) {
                occurrences += 1;
                total += bill.amount_paid;
            }
        }
        if occurrences > 0 {
            hits.push(KeywordHit {
                keyword: capitalize(keyword),
                occurrences,
                total,
            });
        }
    }
    hits.sort_by(|a, b| b.total.total_cmp(&a.total));
    hits
}
