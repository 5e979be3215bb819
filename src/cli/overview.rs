use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cache::LoadCache;
use crate::cli::{open_upload, sheet_error};
use crate::error::Result;
use crate::fmt::{brl, count};
use crate::loader::{CASH_FLOW_SHEET, INCOME_SHEET, PAID_BILLS_SHEET};
use crate::reports::{
    analyze_income, get_cash_flow_report, summarize_bills, IncomeAnalysis, IncomeFilter,
    SourceSelection,
};

/// One table of headline figures. A broken sheet gets its message and the
/// other sheets are still reported.
pub fn run(file: &str) -> Result<()> {
    let mut cache = LoadCache::new();
    let upload = open_upload(&mut cache, file)?;

    let mut table = Table::new();
    table.set_header(vec!["Aba", "Indicador", "Valor"]);
    let mut failures = Vec::new();

    match upload.paid_bills() {
        Ok(bills) => match summarize_bills(bills) {
            Some(s) => {
                table.add_row(vec![Cell::new(PAID_BILLS_SHEET), Cell::new("Valor Total Pago"), Cell::new(brl(s.total_paid))]);
                table.add_row(vec![Cell::new(""), Cell::new("Nº de Transações"), Cell::new(count(s.transactions))]);
            }
            None => {
                table.add_row(vec![Cell::new(PAID_BILLS_SHEET), Cell::new("Nº de Transações"), Cell::new("0")]);
            }
        },
        Err(e) => failures.push(sheet_error(PAID_BILLS_SHEET, &e)),
    }

    match upload.cash_flow() {
        Ok(rows) if !rows.is_empty() => {
            let report = get_cash_flow_report(rows);
            table.add_row(vec![Cell::new(CASH_FLOW_SHEET), Cell::new("Saldo Final"), Cell::new(brl(report.final_balance()))]);
        }
        Ok(_) => {
            table.add_row(vec![Cell::new(CASH_FLOW_SHEET), Cell::new("Saldo Final"), Cell::new("N/A")]);
        }
        Err(e) => failures.push(sheet_error(CASH_FLOW_SHEET, &e)),
    }

    match upload.income() {
        Ok(data) => {
            let report = data.transactions.date_bounds().and_then(|(start, end)| {
                let filter = IncomeFilter {
                    sources: SourceSelection::All,
                    start,
                    end,
                };
                match analyze_income(&data.transactions, &filter) {
                    IncomeAnalysis::Ready(r) => Some(r),
                    IncomeAnalysis::InsufficientSelection => None,
                }
            });
            match report {
                Some(r) => {
                    table.add_row(vec![Cell::new(INCOME_SHEET), Cell::new("Total de Entradas"), Cell::new(brl(r.total))]);
                    table.add_row(vec![Cell::new(""), Cell::new("Melhor Fonte"), Cell::new(&r.best_source)]);
                }
                None => {
                    table.add_row(vec![Cell::new(INCOME_SHEET), Cell::new("Total de Entradas"), Cell::new("N/A")]);
                }
            }
        }
        Err(e) => failures.push(sheet_error(INCOME_SHEET, &e)),
    }

    println!("Visão Geral\n{table}");
    for msg in &failures {
        println!("{}", msg.red());
    }
    Ok(())
}
