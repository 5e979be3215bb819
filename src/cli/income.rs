use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cache::LoadCache;
use crate::cli::{open_upload, parse_date_arg, sheet_error};
use crate::error::{PainelError, Result};
use crate::fmt::{brl, date_br};
use crate::loader::INCOME_SHEET;
use crate::models::IncomeData;
use crate::reports::{analyze_income, IncomeAnalysis, IncomeFilter, IncomeReport, SourceSelection};

pub fn run(
    file: &str,
    sources: Vec<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    json: bool,
) -> Result<()> {
    let mut cache = LoadCache::new();
    let upload = open_upload(&mut cache, file)?;
    let data = upload
        .income()
        .map_err(|e| PainelError::Other(sheet_error(INCOME_SHEET, &e)))?;

    let Some((first, last)) = data.transactions.date_bounds() else {
        println!("{}", "Nenhuma transação datada encontrada na aba 'Entradas'.".yellow());
        return Ok(());
    };
    let filter = IncomeFilter {
        sources: if sources.is_empty() {
            SourceSelection::All
        } else {
            SourceSelection::Only(sources)
        },
        start: from_date.as_deref().map(parse_date_arg).transpose()?.unwrap_or(first),
        end: to_date.as_deref().map(parse_date_arg).transpose()?.unwrap_or(last),
    };
    let analysis = analyze_income(&data.transactions, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_summary(data);
    println!(
        "\nPeríodo de Análise: {} a {}",
        date_br(filter.start),
        date_br(filter.end)
    );
    match &analysis {
        IncomeAnalysis::Ready(report) => print_report(report),
        IncomeAnalysis::InsufficientSelection => {
            println!("{}", "Selecione fontes e um período com dados para analisar.".yellow())
        }
    }
    Ok(())
}

fn print_summary(data: &IncomeData) {
    if data.summary.is_empty() {
        return;
    }
    let mut header = vec![String::new()];
    header.extend(data.transactions.sources.iter().cloned());
    let mut table = Table::new();
    table.set_header(header);
    for row in &data.summary {
        let mut cells = vec![Cell::new(&row.label)];
        cells.extend(row.values.iter().map(Cell::new));
        table.add_row(cells);
    }
    println!("Resumo do Mês\n{table}");
}

fn print_report(report: &IncomeReport) {
    let mut kpis = Table::new();
    kpis.set_header(vec!["Painel de Performance", ""]);
    kpis.add_row(vec![Cell::new("Total de Entradas (Filtro)".bold()), Cell::new(brl(report.total))]);
    kpis.add_row(vec![Cell::new("Dias com Entradas"), Cell::new(format!("{} dias", report.active_days))]);
    kpis.add_row(vec![Cell::new("Média por Dia Ativo"), Cell::new(brl(report.average_per_active_day))]);
    kpis.add_row(vec![Cell::new("Melhor Fonte"), Cell::new(&report.best_source)]);
    kpis.add_row(vec![Cell::new("Dia de Pico"), Cell::new(date_br(report.peak_date))]);
    kpis.add_row(vec![Cell::new("Valor do Pico"), Cell::new(brl(report.peak_value))]);
    println!("\n{kpis}");

    let mut ranking = Table::new();
    ranking.set_header(vec!["Fonte de Entrada", "Total Faturado"]);
    for r in &report.ranking {
        ranking.add_row(vec![Cell::new(&r.source), Cell::new(brl(r.total))]);
    }
    println!("\nRanking de Desempenho no Período\n{ranking}");

    let mut header = vec!["Data".to_string()];
    header.extend(report.sources.iter().cloned());
    header.push("Soma Diária Selecionada".to_string());
    let mut details = Table::new();
    details.set_header(header);
    for (row, day) in report.rows.iter().zip(&report.daily) {
        let mut cells = vec![Cell::new(date_br(row.date))];
        cells.extend(row.amounts.iter().map(|a| Cell::new(brl(*a))));
        cells.push(Cell::new(brl(day.total)));
        details.add_row(cells);
    }
    println!("\nDados Detalhados (Filtro Aplicado)\n{details}");
}
