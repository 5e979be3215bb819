use calamine::Data;

use crate::cells::{cell_text, date_or_none, is_blank_row, number_or_zero};
use crate::error::LoadError;
use crate::models::{CashFlowRow, IncomeData, IncomeTable, IncomeTransaction, PaidBill, SummaryRow};
use crate::workbook::{Grid, Workbook};

pub const PAID_BILLS_SHEET: &str = "Contas pagas";
pub const CASH_FLOW_SHEET: &str = "Entrada x  Saída";
pub const INCOME_SHEET: &str = "Entradas";

/// Sheets with a fixed layout carry two title rows above the header.
const HEADER_ROW: usize = 2;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn header_row<'a>(grid: &'a Grid, sheet: &str) -> Result<&'a [Data], LoadError> {
    grid.row(HEADER_ROW)
        .filter(|row| !row.is_empty())
        .ok_or_else(|| LoadError::UnexpectedLayout {
            sheet: sheet.to_string(),
            detail: format!("no header at row {}", HEADER_ROW + 1),
        })
}

fn report<T>(sheet: &str, result: Result<T, LoadError>) -> Result<T, LoadError> {
    if let Err(e) = &result {
        tracing::warn!(sheet, error = %e, "sheet could not be loaded");
    }
    result
}

// ---------------------------------------------------------------------------
// Paid bills ("Contas pagas")
// ---------------------------------------------------------------------------

/// Source positions, in order: company, cost center, vendor, description,
/// amount due, amount paid, interest, due date, payment date, payment method.
const PAID_BILLS_POSITIONS: [usize; 10] = [0, 1, 2, 5, 6, 7, 8, 9, 10, 11];

pub fn load_paid_bills(workbook: &Workbook) -> Result<Vec<PaidBill>, LoadError> {
    report(PAID_BILLS_SHEET, parse_paid_bills(workbook))
}

fn parse_paid_bills(workbook: &Workbook) -> Result<Vec<PaidBill>, LoadError> {
    let grid = workbook.sheet(PAID_BILLS_SHEET)?;
    header_row(grid, PAID_BILLS_SHEET)?;

    let needed = PAID_BILLS_POSITIONS[PAID_BILLS_POSITIONS.len() - 1] + 1;
    if grid.width() < needed {
        return Err(LoadError::UnexpectedLayout {
            sheet: PAID_BILLS_SHEET.to_string(),
            detail: format!("expected at least {needed} columns, found {}", grid.width()),
        });
    }

    let [company_col, cost_center_col, vendor_col, description_col, due_col, paid_col, interest_col, due_date_col, payment_date_col, method_col] =
        PAID_BILLS_POSITIONS;

    let mut defaulted = 0usize;
    let mut bills = Vec::new();
    for row in grid.rows().skip(HEADER_ROW + 1) {
        let Some(company) = cell_text(&row[company_col]) else {
            continue;
        };

        let amounts = [&row[due_col], &row[paid_col], &row[interest_col]].map(number_or_zero);
        let dates = [&row[due_date_col], &row[payment_date_col]].map(date_or_none);
        defaulted += amounts.iter().filter(|c| c.defaulted).count();
        defaulted += dates.iter().filter(|c| c.defaulted).count();

        bills.push(PaidBill {
            company,
            cost_center: cell_text(&row[cost_center_col]),
            vendor: cell_text(&row[vendor_col]),
            description: cell_text(&row[description_col]),
            amount_due: amounts[0].value,
            amount_paid: amounts[1].value,
            interest: amounts[2].value,
            due_date: dates[0].value,
            payment_date: dates[1].value,
            payment_method: cell_text(&row[method_col]),
        });
    }

    tracing::debug!(rows = bills.len(), defaulted, "paid bills loaded");
    Ok(bills)
}

// ---------------------------------------------------------------------------
// Cash flow ("Entrada x  Saída")
// ---------------------------------------------------------------------------

const CASH_FLOW_MARKER: &str = "EMPRESA";
const CASH_FLOW_COLUMNS: [&str; 5] = ["EMPRESA", "SALDO ANTERIOR", "ENTRADA", "SAÍDA", "TOTAL"];

pub fn load_cash_flow(workbook: &Workbook) -> Result<Vec<CashFlowRow>, LoadError> {
    report(CASH_FLOW_SHEET, parse_cash_flow(workbook))
}

/// Index of the first row with a cell containing `marker`.
fn find_header_row(grid: &Grid, marker: &str) -> Option<usize> {
    grid.rows()
        .position(|row| row.iter().any(|c| cell_text(c).is_some_and(|t| t.contains(marker))))
}

fn parse_cash_flow(workbook: &Workbook) -> Result<Vec<CashFlowRow>, LoadError> {
    let grid = workbook.sheet(CASH_FLOW_SHEET)?;
    let header_idx = find_header_row(grid, CASH_FLOW_MARKER).ok_or_else(|| LoadError::HeaderNotFound {
        sheet: CASH_FLOW_SHEET.to_string(),
        marker: CASH_FLOW_MARKER.to_string(),
    })?;
    tracing::debug!(row = header_idx + 1, "cash flow header located");

    let header: Vec<Option<String>> = grid
        .row(header_idx)
        .unwrap_or_default()
        .iter()
        .map(cell_text)
        .collect();

    let mut positions = [0usize; 5];
    for (slot, name) in positions.iter_mut().zip(CASH_FLOW_COLUMNS) {
        *slot = header
            .iter()
            .position(|h| h.as_deref() == Some(name))
            .ok_or_else(|| LoadError::MissingColumn {
                sheet: CASH_FLOW_SHEET.to_string(),
                column: name.to_string(),
            })?;
    }

    let ignored: Vec<&str> = header
        .iter()
        .enumerate()
        .filter(|(i, _)| !positions.contains(i))
        .filter_map(|(_, h)| h.as_deref())
        .collect();
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "cash flow columns ignored");
    }

    let [company_col, prior_col, inflow_col, outflow_col, total_col] = positions;
    let mut defaulted = 0usize;
    let mut rows = Vec::new();
    for row in grid.rows().skip(header_idx + 1) {
        if is_blank_row(row) {
            continue;
        }
        let Some(company) = cell_text(&row[company_col]) else {
            continue;
        };
        let values = [&row[prior_col], &row[inflow_col], &row[outflow_col], &row[total_col]].map(number_or_zero);
        defaulted += values.iter().filter(|c| c.defaulted).count();
        rows.push(CashFlowRow {
            company,
            prior_balance: values[0].value,
            inflow: values[1].value,
            outflow: values[2].value,
            total: values[3].value,
        });
    }

    tracing::debug!(rows = rows.len(), defaulted, "cash flow loaded");
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Income ("Entradas")
// ---------------------------------------------------------------------------

const SUMMARY_LABELS: [&str; 3] = ["entrada", "saída", "saldo"];
const SUMMARY_ROWS: usize = 3;

pub fn load_income(workbook: &Workbook) -> Result<IncomeData, LoadError> {
    report(INCOME_SHEET, parse_income(workbook))
}

/// Column names after the leading date column; blanks get a positional
/// name and repeats a numeric suffix so every source is addressable.
fn source_names(header: &[Data]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (i, cell) in header.iter().enumerate().skip(1) {
        let base = cell_text(cell).unwrap_or_else(|| format!("Coluna {}", i + 1));
        let mut name = base.clone();
        let mut n = 2;
        while names.contains(&name) {
            name = format!("{base} ({n})");
            n += 1;
        }
        names.push(name);
    }
    names
}

fn is_summary_label(text: &str) -> bool {
    let lower = text.to_lowercase();
    SUMMARY_LABELS.iter().any(|label| lower.contains(label))
}

fn parse_income(workbook: &Workbook) -> Result<IncomeData, LoadError> {
    let grid = workbook.sheet(INCOME_SHEET)?;
    let sources = source_names(header_row(grid, INCOME_SHEET)?);

    let mut defaulted = 0usize;
    let mut summary = Vec::new();
    let mut transactions = Vec::new();
    for row in grid.rows().skip(HEADER_ROW + 1) {
        if is_blank_row(row) {
            continue;
        }
        let Some((leading, rest)) = row.split_first() else {
            continue;
        };

        if let Some(label) = cell_text(leading).filter(|t| is_summary_label(t)) {
            summary.push(SummaryRow {
                label,
                values: rest.iter().map(|c| cell_text(c).unwrap_or_default()).collect(),
            });
            continue;
        }

        if let Some(date) = date_or_none(leading).value {
            let amounts: Vec<_> = rest.iter().map(number_or_zero).collect();
            defaulted += amounts.iter().filter(|c| c.defaulted).count();
            transactions.push(IncomeTransaction {
                date,
                amounts: amounts.into_iter().map(|c| c.value).collect(),
            });
        }
    }

    let summary = summary.split_off(summary.len().saturating_sub(SUMMARY_ROWS));
    tracing::debug!(rows = transactions.len(), summary = summary.len(), defaulted, "income loaded");

    Ok(IncomeData {
        transactions: IncomeTable {
            sources,
            rows: transactions,
        },
        summary,
    })
}
