use colored::Colorize;

use crate::cache::LoadCache;
use crate::cli::{open_upload, sheet_error};
use crate::error::Result;
use crate::fmt::date_br;
use crate::loader::{INCOME_SHEET, PAID_BILLS_SHEET};
use crate::reports::bill_filter_options;

fn print_list<S: AsRef<str>>(title: &str, values: &[S]) {
    println!("{}", title.bold());
    if values.is_empty() {
        println!("  (nenhum)");
    }
    for v in values {
        println!("  {}", v.as_ref());
    }
}

pub fn run(file: &str) -> Result<()> {
    let mut cache = LoadCache::new();
    let upload = open_upload(&mut cache, file)?;

    println!("{} {}", "SHA-256:".bold(), upload.checksum());
    print_list("Abas", &upload.workbook().sheet_names());

    match upload.paid_bills() {
        Ok(bills) => {
            let options = bill_filter_options(bills);
            print_list("Empresas", &options.companies);
            print_list("Centros de Custo", &options.cost_centers);
        }
        Err(e) => println!("{}", sheet_error(PAID_BILLS_SHEET, &e).red()),
    }

    match upload.income() {
        Ok(data) => {
            print_list("Fontes de Entrada", &data.transactions.available_sources());
            if let Some((first, last)) = data.transactions.date_bounds() {
                println!("{} {} a {}", "Período:".bold(), date_br(first), date_br(last));
            }
        }
        Err(e) => println!("{}", sheet_error(INCOME_SHEET, &e).red()),
    }
    Ok(())
}
