use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::keywords::{scan_keywords, KeywordHit};
use crate::models::{CashFlowRow, IncomeTable, IncomeTransaction, PaidBill};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub name: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Sum `value` per key, in order of each key's first appearance. Items
/// without a key are skipped.
fn group_totals<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&'a T) -> Option<&'a str>,
    value: impl Fn(&T) -> f64,
) -> Vec<GroupTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupTotal> = Vec::new();
    for item in items {
        let Some(name) = key(item) else { continue };
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push(GroupTotal {
                name: name.to_string(),
                total: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[slot].total += value(item);
        groups[slot].count += 1;
    }
    groups
}

/// Largest `n` groups by total. The sort is stable, so ties keep first-seen order.
fn top_by_total(mut groups: Vec<GroupTotal>, n: usize) -> Vec<GroupTotal> {
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    groups.truncate(n);
    groups
}

// ---------------------------------------------------------------------------
// Paid bills
// ---------------------------------------------------------------------------

/// Company / cost-center selection; `None` means all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillFilter {
    pub company: Option<String>,
    pub cost_center: Option<String>,
}

impl BillFilter {
    pub fn matches(&self, bill: &PaidBill) -> bool {
        let company_ok = self.company.as_deref().map_or(true, |c| bill.company == c);
        let center_ok = self
            .cost_center
            .as_deref()
            .map_or(true, |c| bill.cost_center.as_deref() == Some(c));
        company_ok && center_ok
    }
}

pub fn filter_bills(bills: &[PaidBill], filter: &BillFilter) -> Vec<PaidBill> {
    bills.iter().filter(|b| filter.matches(b)).cloned().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillFilterOptions {
    pub companies: Vec<String>,
    pub cost_centers: Vec<String>,
}

pub fn bill_filter_options(bills: &[PaidBill]) -> BillFilterOptions {
    let companies: BTreeSet<&str> = bills.iter().map(|b| b.company.as_str()).collect();
    let centers: BTreeSet<&str> = bills.iter().filter_map(|b| b.cost_center.as_deref()).collect();
    BillFilterOptions {
        companies: companies.into_iter().map(str::to_string).collect(),
        cost_centers: centers.into_iter().map(str::to_string).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaidBillsSummary {
    pub total_paid: f64,
    pub transactions: usize,
    pub mean_ticket: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaidBillsReport {
    pub summary: PaidBillsSummary,
    pub daily: Vec<DailyTotal>,
    pub keywords: Vec<KeywordHit>,
    pub top_vendors: Vec<GroupTotal>,
    pub cost_centers: Vec<GroupTotal>,
    pub payment_methods: Vec<GroupTotal>,
}

pub fn summarize_bills(bills: &[PaidBill]) -> Option<PaidBillsSummary> {
    if bills.is_empty() {
        return None;
    }
    let total_paid: f64 = bills.iter().map(|b| b.amount_paid).sum();
    Some(PaidBillsSummary {
        total_paid,
        transactions: bills.len(),
        mean_ticket: total_paid / bills.len() as f64,
    })
}

/// Paid amount per payment date, oldest first. Undated bills are left out.
pub fn daily_paid(bills: &[PaidBill]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for bill in bills {
        if let Some(date) = bill.payment_date {
            *by_date.entry(date).or_default() += bill.amount_paid;
        }
    }
    by_date
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

pub fn top_vendors(bills: &[PaidBill], n: usize) -> Vec<GroupTotal> {
    top_by_total(group_totals(bills, |b| b.vendor.as_deref(), |b| b.amount_paid), n)
}

pub fn paid_by_cost_center(bills: &[PaidBill], n: usize) -> Vec<GroupTotal> {
    top_by_total(group_totals(bills, |b| b.cost_center.as_deref(), |b| b.amount_paid), n)
}

pub fn paid_by_method(bills: &[PaidBill]) -> Vec<GroupTotal> {
    group_totals(bills, |b| b.payment_method.as_deref(), |b| b.amount_paid)
}

/// Everything shown for one company / cost-center selection, or `None`
/// when the selection matches no bills.
pub fn get_paid_bills_report<S: AsRef<str>>(
    bills: &[PaidBill],
    filter: &BillFilter,
    keywords: &[S],
    top_n: usize,
) -> Option<PaidBillsReport> {
    let filtered = filter_bills(bills, filter);
    let summary = summarize_bills(&filtered)?;
    Some(PaidBillsReport {
        summary,
        daily: daily_paid(&filtered),
        keywords: scan_keywords(&filtered, keywords),
        top_vendors: top_vendors(&filtered, top_n),
        cost_centers: paid_by_cost_center(&filtered, top_n),
        payment_methods: paid_by_method(&filtered),
    })
}

// ---------------------------------------------------------------------------
// Cash flow
// ---------------------------------------------------------------------------

pub const COMPUTED_TOTAL_LABEL: &str = "Total Calculado";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalsSource {
    /// Taken from the sheet's own "Total" row.
    Provided,
    /// Summed over the detail rows.
    Computed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Absolute,
    Relative,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStep {
    pub label: &'static str,
    pub value: f64,
    pub measure: Measure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowReport {
    pub totals: CashFlowRow,
    pub source: TotalsSource,
    pub details: Vec<CashFlowRow>,
}

impl CashFlowReport {
    pub fn prior_balance(&self) -> f64 {
        self.totals.prior_balance
    }

    pub fn inflow(&self) -> f64 {
        self.totals.inflow
    }

    pub fn outflow(&self) -> f64 {
        self.totals.outflow
    }

    pub fn final_balance(&self) -> f64 {
        self.totals.total
    }

    /// Prior balance, plus inflow, minus outflow, landing on the final balance.
    pub fn waterfall(&self) -> Vec<WaterfallStep> {
        vec![
            WaterfallStep {
                label: "Saldo Anterior",
                value: self.prior_balance(),
                measure: Measure::Absolute,
            },
            WaterfallStep {
                label: "Entradas",
                value: self.inflow(),
                measure: Measure::Relative,
            },
            WaterfallStep {
                label: "Saídas",
                value: -self.outflow(),
                measure: Measure::Relative,
            },
            WaterfallStep {
                label: "Saldo Final",
                value: self.final_balance(),
                measure: Measure::Total,
            },
        ]
    }
}

/// Split off the "Total" row, computing one from the details if the sheet has none.
pub fn get_cash_flow_report(rows: &[CashFlowRow]) -> CashFlowReport {
    let details: Vec<CashFlowRow> = rows.iter().filter(|r| !r.is_total()).cloned().collect();

    if let Some(provided) = rows.iter().find(|r| r.is_total()) {
        return CashFlowReport {
            totals: provided.clone(),
            source: TotalsSource::Provided,
            details,
        };
    }

    let mut totals = CashFlowRow {
        company: COMPUTED_TOTAL_LABEL.to_string(),
        prior_balance: 0.0,
        inflow: 0.0,
        outflow: 0.0,
        total: 0.0,
    };
    for row in &details {
        totals.prior_balance += row.prior_balance;
        totals.inflow += row.inflow;
        totals.outflow += row.outflow;
        totals.total += row.total;
    }
    CashFlowReport {
        totals,
        source: TotalsSource::Computed,
        details,
    }
}

// ---------------------------------------------------------------------------
// Income
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SourceSelection {
    #[default]
    All,
    Only(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomeFilter {
    pub sources: SourceSelection,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceTotal {
    pub source: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeReport {
    pub sources: Vec<String>,
    pub total: f64,
    pub active_days: usize,
    pub average_per_active_day: f64,
    pub peak_date: NaiveDate,
    pub peak_value: f64,
    pub best_source: String,
    /// Per-source totals, smallest first.
    pub ranking: Vec<SourceTotal>,
    /// Selected-source sum of every filtered row, in sheet order.
    pub daily: Vec<DailyTotal>,
    /// Filtered rows restricted to `sources`.
    pub rows: Vec<IncomeTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IncomeAnalysis {
    /// No source selected, or no transaction inside the date range.
    InsufficientSelection,
    Ready(IncomeReport),
}

/// Selected source names that exist in the table, with their column indices.
fn resolve_sources(table: &IncomeTable, selection: &SourceSelection) -> Vec<(String, usize)> {
    let names = match selection {
        SourceSelection::All => table.available_sources(),
        SourceSelection::Only(names) => names.clone(),
    };
    let mut resolved: Vec<(String, usize)> = Vec::new();
    for name in names {
        if resolved.iter().any(|(n, _)| *n == name) {
            continue;
        }
        match table.source_index(&name) {
            Some(idx) => resolved.push((name, idx)),
            None => tracing::debug!(source = %name, "unknown income source ignored"),
        }
    }
    resolved
}

pub fn analyze_income(table: &IncomeTable, filter: &IncomeFilter) -> IncomeAnalysis {
    let selected = resolve_sources(table, &filter.sources);
    let rows: Vec<IncomeTransaction> = table
        .rows
        .iter()
        .filter(|r| r.date >= filter.start && r.date <= filter.end)
        .map(|r| IncomeTransaction {
            date: r.date,
            amounts: selected
                .iter()
                .map(|(_, idx)| r.amounts.get(*idx).copied().unwrap_or(0.0))
                .collect(),
        })
        .collect();

    if selected.is_empty() || rows.is_empty() {
        return IncomeAnalysis::InsufficientSelection;
    }

    let daily: Vec<DailyTotal> = rows
        .iter()
        .map(|r| DailyTotal {
            date: r.date,
            total: r.amounts.iter().sum(),
        })
        .collect();
    let total: f64 = daily.iter().map(|d| d.total).sum();

    let active_days = daily
        .iter()
        .filter(|d| d.total > 0.0)
        .map(|d| d.date)
        .collect::<BTreeSet<_>>()
        .len();
    let average_per_active_day = if active_days > 0 {
        total / active_days as f64
    } else {
        0.0
    };

    // first occurrence wins on ties
    let mut peak = &daily[0];
    for day in &daily[1..] {
        if day.total > peak.total {
            peak = day;
        }
    }

    let per_source: Vec<SourceTotal> = selected
        .iter()
        .enumerate()
        .map(|(i, (name, _))| SourceTotal {
            source: name.clone(),
            total: rows.iter().map(|r| r.amounts[i]).sum(),
        })
        .collect();

    let mut best = &per_source[0];
    for candidate in &per_source[1..] {
        if candidate.total > best.total {
            best = candidate;
        }
    }
    let best_source = best.source.clone();

    let mut ranking = per_source;
    ranking.sort_by(|a, b| a.total.total_cmp(&b.total));

    IncomeAnalysis::Ready(IncomeReport {
        sources: selected.into_iter().map(|(name, _)| name).collect(),
        total,
        active_days,
        average_per_active_day,
        peak_date: peak.date,
        peak_value: peak.total,
        best_source,
        ranking,
        daily,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::DEFAULT_KEYWORDS;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(company: &str, center: &str, vendor: &str, method: &str, paid: f64, day: u32) -> PaidBill {
        PaidBill {
            company: company.to_string(),
            cost_center: Some(center.to_string()),
            vendor: Some(vendor.to_string()),
            description: Some(format!("pagamento {vendor}")),
            amount_due: paid,
            amount_paid: paid,
            interest: 0.0,
            due_date: None,
            payment_date: Some(ymd(2024, 1, day)),
            payment_method: Some(method.to_string()),
        }
    }

    fn sample_bills() -> Vec<PaidBill> {
        vec![
            bill("ACME", "ADM", "Posto", "PIX", 100.0, 2),
            bill("ACME", "OBRA", "Cimento SA", "Boleto", 500.0, 2),
            bill("Beta", "ADM", "Posto", "PIX", 50.0, 3),
            bill("Beta", "ADM", "Papelaria", "Cartão", 500.0, 5),
        ]
    }

    #[test]
    fn test_summary_and_filters() {
        let bills = sample_bills();
        let filter = BillFilter {
            company: Some("Beta".to_string()),
            cost_center: None,
        };
        let filtered = filter_bills(&bills, &filter);
        let summary = summarize_bills(&filtered).unwrap();
        assert_eq!(summary.total_paid, 550.0);
        assert_eq!(summary.transactions, 2);
        assert_eq!(summary.mean_ticket, 275.0);

        let both = BillFilter {
            company: Some("ACME".to_string()),
            cost_center: Some("ADM".to_string()),
        };
        assert_eq!(filter_bills(&bills, &both).len(), 1);
    }

    #[test]
    fn test_empty_selection_has_no_report() {
        let filter = BillFilter {
            company: Some("Gama".to_string()),
            cost_center: None,
        };
        assert!(get_paid_bills_report(&sample_bills(), &filter, &DEFAULT_KEYWORDS, 10).is_none());
    }

    #[test]
    fn test_filter_options_sorted_unique() {
        let options = bill_filter_options(&sample_bills());
        assert_eq!(options.companies, vec!["ACME", "Beta"]);
        assert_eq!(options.cost_centers, vec!["ADM", "OBRA"]);
    }

    #[test]
    fn test_daily_paid_groups_by_date() {
        let daily = daily_paid(&sample_bills());
        assert_eq!(
            daily,
            vec![
                DailyTotal { date: ymd(2024, 1, 2), total: 600.0 },
                DailyTotal { date: ymd(2024, 1, 3), total: 50.0 },
                DailyTotal { date: ymd(2024, 1, 5), total: 500.0 },
            ]
        );
    }

    #[test]
    fn test_top_vendors_ties_keep_first_seen() {
        let vendors = top_vendors(&sample_bills(), 10);
        let names: Vec<&str> = vendors.iter().map(|v| v.name.as_str()).collect();
        // Cimento SA and Papelaria tie at 500; Cimento SA appears first
        assert_eq!(names, vec!["Cimento SA", "Papelaria", "Posto"]);
        assert_eq!(vendors[2].total, 150.0);
        assert_eq!(vendors[2].count, 2);
        assert!(vendors.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_top_vendors_truncates() {
        let bills: Vec<PaidBill> = (1..=15)
            .map(|i| bill("ACME", "ADM", &format!("Fornecedor {i}"), "PIX", i as f64, 1))
            .collect();
        let vendors = top_vendors(&bills, 10);
        assert_eq!(vendors.len(), 10);
        assert_eq!(vendors[0].name, "Fornecedor 15");
        assert!(vendors.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_cost_center_and_method_totals() {
        let bills = sample_bills();
        let centers = paid_by_cost_center(&bills, 10);
        assert_eq!(centers[0].name, "ADM");
        assert_eq!(centers[0].total, 650.0);
        let methods = paid_by_method(&bills);
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["PIX", "Boleto", "Cartão"]);
        assert_eq!(methods[0].total, 150.0);
    }

    #[test]
    fn test_missing_group_keys_are_skipped() {
        let mut bills = sample_bills();
        bills[0].vendor = None;
        bills[1].payment_method = None;
        let vendor_count: usize = top_vendors(&bills, 10).iter().map(|v| v.count).sum();
        assert_eq!(vendor_count, 3);
        let method_total: f64 = paid_by_method(&bills).iter().map(|m| m.total).sum();
        assert_eq!(method_total, 650.0);
    }

    #[test]
    fn test_paid_bills_report_is_deterministic() {
        let bills = sample_bills();
        let filter = BillFilter::default();
        let first = get_paid_bills_report(&bills, &filter, &DEFAULT_KEYWORDS, 10);
        let second = get_paid_bills_report(&bills, &filter, &DEFAULT_KEYWORDS, 10);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    fn cf(company: &str, prior: f64, inflow: f64, outflow: f64, total: f64) -> CashFlowRow {
        CashFlowRow {
            company: company.to_string(),
            prior_balance: prior,
            inflow,
            outflow,
            total,
        }
    }

    #[test]
    fn test_cash_flow_prefers_total_row() {
        let rows = vec![
            cf("ACME", 60.0, 120.0, 100.0, 80.0),
            cf("Beta", 40.0, 80.0, 50.0, 70.0),
            cf("TOTAL", 100.0, 200.0, 150.0, 150.0),
        ];
        let report = get_cash_flow_report(&rows);
        assert_eq!(report.source, TotalsSource::Provided);
        assert_eq!(report.final_balance(), 150.0);
        assert_eq!(report.prior_balance(), 100.0);
        assert_eq!(report.details.len(), 2);
        assert!(report.details.iter().all(|r| !r.is_total()));
    }

    #[test]
    fn test_cash_flow_stated_total_wins_over_sum() {
        let rows = vec![cf("ACME", 10.0, 10.0, 10.0, 10.0), cf("total", 1.0, 2.0, 3.0, 999.0)];
        let report = get_cash_flow_report(&rows);
        assert_eq!(report.source, TotalsSource::Provided);
        assert_eq!(report.final_balance(), 999.0);
        assert_eq!(report.totals.company, "total");
    }

    #[test]
    fn test_cash_flow_computes_missing_total() {
        let rows = vec![cf("ACME", 60.0, 120.0, 100.0, 80.0), cf("Beta", 40.0, 80.0, 50.0, 70.0)];
        let report = get_cash_flow_report(&rows);
        assert_eq!(report.source, TotalsSource::Computed);
        assert_eq!(report.totals, cf(COMPUTED_TOTAL_LABEL, 100.0, 200.0, 150.0, 150.0));
        assert_eq!(report.details.len(), 2);
    }

    #[test]
    fn test_cash_flow_waterfall() {
        let report = get_cash_flow_report(&[cf("Total", 100.0, 200.0, 150.0, 150.0)]);
        let values: Vec<f64> = report.waterfall().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![100.0, 200.0, -150.0, 150.0]);
        assert_eq!(report.waterfall()[3].measure, Measure::Total);
    }

    fn income_table() -> IncomeTable {
        let row = |d: u32, a: [f64; 3]| IncomeTransaction {
            date: ymd(2024, 1, d),
            amounts: a.to_vec(),
        };
        IncomeTable {
            sources: vec!["Loja".to_string(), "Site".to_string(), "Total".to_string()],
            rows: vec![
                row(1, [10.0, 5.0, 15.0]),
                row(2, [0.0, 0.0, 0.0]),
                row(3, [20.0, 0.0, 20.0]),
                row(3, [0.0, 30.0, 30.0]),
                row(10, [0.0, 0.0, 0.0]),
            ],
        }
    }

    fn filter(sources: SourceSelection, start: u32, end: u32) -> IncomeFilter {
        IncomeFilter {
            sources,
            start: ymd(2024, 1, start),
            end: ymd(2024, 1, end),
        }
    }

    fn ready(analysis: IncomeAnalysis) -> IncomeReport {
        match analysis {
            IncomeAnalysis::Ready(report) => report,
            IncomeAnalysis::InsufficientSelection => panic!("expected a report"),
        }
    }

    #[test]
    fn test_income_all_sources_excludes_total_column() {
        let report = ready(analyze_income(&income_table(), &filter(SourceSelection::All, 1, 31)));
        assert_eq!(report.sources, vec!["Loja", "Site"]);
        assert_eq!(report.total, 65.0);
        // Jan 1 and Jan 3 (twice) are active
        assert_eq!(report.active_days, 2);
        assert_eq!(report.average_per_active_day, 32.5);
        assert_eq!(report.best_source, "Site");
        assert_eq!(report.daily.len(), 5);
    }

    #[test]
    fn test_income_peak_and_ranking() {
        let report = ready(analyze_income(&income_table(), &filter(SourceSelection::All, 1, 3)));
        assert_eq!(report.peak_date, ymd(2024, 1, 3));
        assert_eq!(report.peak_value, 30.0);
        let ranking: Vec<(&str, f64)> = report.ranking.iter().map(|r| (r.source.as_str(), r.total)).collect();
        assert_eq!(ranking, vec![("Loja", 30.0), ("Site", 35.0)]);
    }

    #[test]
    fn test_income_best_source_first_on_ties() {
        let only = SourceSelection::Only(vec!["Site".to_string(), "Loja".to_string()]);
        let report = ready(analyze_income(&income_table(), &filter(only, 1, 1)));
        // Site 5 vs Loja 10
        assert_eq!(report.best_source, "Loja");

        let tied = IncomeTable {
            sources: vec!["A".to_string(), "B".to_string()],
            rows: vec![IncomeTransaction {
                date: ymd(2024, 1, 1),
                amounts: vec![7.0, 7.0],
            }],
        };
        let report = ready(analyze_income(&tied, &filter(SourceSelection::All, 1, 1)));
        assert_eq!(report.best_source, "A");
    }

    #[test]
    fn test_income_no_active_days_averages_zero() {
        let report = ready(analyze_income(&income_table(), &filter(SourceSelection::All, 2, 2)));
        assert_eq!(report.active_days, 0);
        assert_eq!(report.average_per_active_day, 0.0);
        assert_eq!(report.peak_date, ymd(2024, 1, 2));
        assert_eq!(report.peak_value, 0.0);
    }

    #[test]
    fn test_income_insufficient_selection() {
        let table = income_table();
        let none = SourceSelection::Only(Vec::new());
        assert_eq!(analyze_income(&table, &filter(none, 1, 31)), IncomeAnalysis::InsufficientSelection);
        assert_eq!(
            analyze_income(&table, &filter(SourceSelection::All, 20, 31)),
            IncomeAnalysis::InsufficientSelection
        );
        let unknown = SourceSelection::Only(vec!["Balcão".to_string()]);
        assert_eq!(analyze_income(&table, &filter(unknown, 1, 31)), IncomeAnalysis::InsufficientSelection);
    }

    #[test]
    fn test_income_interval_is_inclusive() {
        let report = ready(analyze_income(&income_table(), &filter(SourceSelection::All, 3, 10)));
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].amounts, vec![20.0, 0.0]);
    }

    #[test]
    fn test_income_is_deterministic() {
        let table = income_table();
        let f = filter(SourceSelection::All, 1, 31);
        assert_eq!(analyze_income(&table, &f), analyze_income(&table, &f));
    }
}
