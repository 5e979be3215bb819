use chrono::NaiveDate;
use serde::Serialize;

/// One row of the "Contas pagas" sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaidBill {
    pub company: String,
    pub cost_center: Option<String>,
    pub vendor: Option<String>,
    pub description: Option<String>,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub interest: f64,
    pub due_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
}

/// One row of the "Entrada x  Saída" sheet, detail or total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowRow {
    pub company: String,
    pub prior_balance: f64,
    pub inflow: f64,
    pub outflow: f64,
    pub total: f64,
}

impl CashFlowRow {
    pub fn is_total(&self) -> bool {
        self.company.trim().eq_ignore_ascii_case("total")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeTransaction {
    pub date: NaiveDate,
    /// Aligned with [`IncomeTable::sources`].
    pub amounts: Vec<f64>,
}

/// Dated rows of the "Entradas" sheet with one amount column per income source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncomeTable {
    pub sources: Vec<String>,
    pub rows: Vec<IncomeTransaction>,
}

impl IncomeTable {
    pub fn source_index(&self, name: &str) -> Option<usize> {
        self.sources.iter().position(|s| s == name)
    }

    #[cfg(test)]
    pub fn amount(&self, row: &IncomeTransaction, source: &str) -> Option<f64> {
        self.source_index(source).and_then(|i| row.amounts.get(i).copied())
    }

    /// Source names offered for selection: sorted, without the sheet's own total column.
    pub fn available_sources(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .sources
            .iter()
            .filter(|s| s.as_str() != "Total")
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|r| r.date).min()?;
        let max = self.rows.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}

/// A month-summary line ("Entrada", "Saída", "Saldo") kept as display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncomeData {
    pub transactions: IncomeTable,
    /// Values aligned with `transactions.sources`.
    pub summary: Vec<SummaryRow>,
}
