use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cache::LoadCache;
use crate::cli::{open_upload, sheet_error};
use crate::error::{PainelError, Result};
use crate::fmt::{brl, count, date_br};
use crate::loader::PAID_BILLS_SHEET;
use crate::reports::{get_paid_bills_report, BillFilter, PaidBillsReport};
use crate::settings::Settings;

pub fn run(
    file: &str,
    company: Option<String>,
    cost_center: Option<String>,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let mut cache = LoadCache::new();
    let upload = open_upload(&mut cache, file)?;
    let bills = upload
        .paid_bills()
        .map_err(|e| PainelError::Other(sheet_error(PAID_BILLS_SHEET, &e)))?;

    let filter = BillFilter {
        company,
        cost_center,
    };
    let report = get_paid_bills_report(bills, &filter, settings.keywords.as_slice(), settings.top_n);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Resultados para: {} | {}",
            filter.company.as_deref().unwrap_or("TODAS"),
            filter.cost_center.as_deref().unwrap_or("TODAS")
        )
        .bold()
    );
    match report {
        Some(report) => print_report(&report),
        None => println!("{}", "Nenhum dado encontrado para os filtros selecionados.".yellow()),
    }
    Ok(())
}

fn print_report(report: &PaidBillsReport) {
    let mut kpis = Table::new();
    kpis.set_header(vec!["Valor Total Pago", "Nº de Transações", "Ticket Médio"]);
    kpis.add_row(vec![
        Cell::new(brl(report.summary.total_paid)),
        Cell::new(count(report.summary.transactions)),
        Cell::new(brl(report.summary.mean_ticket)),
    ]);
    println!("\n{kpis}");

    if !report.daily.is_empty() {
        let mut daily = Table::new();
        daily.set_header(vec!["Data", "Valor Pago"]);
        for day in &report.daily {
            daily.add_row(vec![Cell::new(date_br(day.date)), Cell::new(brl(day.total))]);
        }
        println!("\nEvolução dos Gastos Diários\n{daily}");
    }

    if report.keywords.is_empty() {
        println!("\n{}", "Nenhuma palavra-chave comum foi encontrada.".cyan());
    } else {
        let mut kw = Table::new();
        kw.set_header(vec!["Palavra-Chave", "Ocorrências", "Valor Total"]);
        for hit in &report.keywords {
            kw.add_row(vec![
                Cell::new(&hit.keyword),
                Cell::new(hit.occurrences),
                Cell::new(brl(hit.total)),
            ]);
        }
        println!("\nTop Gastos por Palavra-Chave\n{kw}");
    }

    if !report.top_vendors.is_empty() {
        let mut vendors = Table::new();
        vendors.set_header(vec!["Fornecedor", "Valor Pago", "Ocorrências"]);
        for v in &report.top_vendors {
            vendors.add_row(vec![Cell::new(&v.name), Cell::new(brl(v.total)), Cell::new(v.count)]);
        }
        println!("\nTop {} Fornecedores por Valor\n{vendors}", report.top_vendors.len());
    }

    if !report.cost_centers.is_empty() {
        let mut centers = Table::new();
        centers.set_header(vec!["Centro de Custo", "Valor Pago"]);
        for c in &report.cost_centers {
            centers.add_row(vec![Cell::new(&c.name), Cell::new(brl(c.total))]);
        }
        println!("\nGastos por Centro de Custo\n{centers}");
    }

    if !report.payment_methods.is_empty() {
        let total: f64 = report.payment_methods.iter().map(|m| m.total).sum();
        let mut methods = Table::new();
        methods.set_header(vec!["Forma de Pagamento", "Valor Pago", "%"]);
        for m in &report.payment_methods {
            let pct = if total != 0.0 { m.total / total * 100.0 } else { 0.0 };
            methods.add_row(vec![
                Cell::new(&m.name),
                Cell::new(brl(m.total)),
                Cell::new(format!("{pct:.1}%")),
            ]);
        }
        println!("\nGastos por Forma de Pagamento\n{methods}");
    }
}
