use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cache::LoadCache;
use crate::cli::{open_upload, sheet_error};
use crate::error::{PainelError, Result};
use crate::fmt::brl;
use crate::loader::CASH_FLOW_SHEET;
use crate::reports::{get_cash_flow_report, TotalsSource};

fn signed(val: f64) -> String {
    if val >= 0.0 {
        brl(val).green().to_string()
    } else {
        brl(val).red().to_string()
    }
}

pub fn run(file: &str, json: bool) -> Result<()> {
    let mut cache = LoadCache::new();
    let upload = open_upload(&mut cache, file)?;
    let rows = upload
        .cash_flow()
        .map_err(|e| PainelError::Other(sheet_error(CASH_FLOW_SHEET, &e)))?;

    if rows.is_empty() {
        println!("{}", "Nenhum dado válido foi encontrado na aba de Fluxo de Caixa.".yellow());
        return Ok(());
    }

    let report = get_cash_flow_report(rows);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut kpis = Table::new();
    kpis.set_header(vec!["Item", "Valor"]);
    kpis.add_row(vec![Cell::new("Saldo Anterior Total"), Cell::new(brl(report.prior_balance()))]);
    kpis.add_row(vec![Cell::new("Total de Entradas"), Cell::new(brl(report.inflow()).green().to_string())]);
    kpis.add_row(vec![Cell::new("Total de Saídas"), Cell::new(brl(report.outflow()).red().to_string())]);
    kpis.add_row(vec![
        Cell::new("Saldo Final".bold()),
        Cell::new(signed(report.final_balance())),
    ]);
    println!("Resumo Financeiro Total\n{kpis}");
    if report.source == TotalsSource::Computed {
        println!("{}", "Sem linha 'Total' na aba; totais calculados a partir das empresas.".cyan());
    }

    let mut steps = Table::new();
    steps.set_header(vec!["Etapa", "Valor"]);
    for step in report.waterfall() {
        steps.add_row(vec![Cell::new(step.label), Cell::new(signed(step.value))]);
    }
    println!("\nComposição do Saldo Final\n{steps}");

    let mut details = Table::new();
    details.set_header(vec!["Empresa", "Saldo Anterior", "Entrada", "Saída", "Total"]);
    for r in &report.details {
        details.add_row(vec![
            Cell::new(&r.company),
            Cell::new(brl(r.prior_balance)),
            Cell::new(brl(r.inflow)),
            Cell::new(brl(r.outflow)),
            Cell::new(signed(r.total)),
        ]);
    }
    println!("\nDetalhamento por Conta/Empresa\n{details}");
    Ok(())
}
