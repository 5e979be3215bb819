pub mod bills;
pub mod cashflow;
pub mod filters;
pub mod income;
pub mod init;
pub mod overview;

use std::rc::Rc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::cache::{LoadCache, Upload};
use crate::error::{LoadError, PainelError, Result};

pub(crate) fn open_upload(cache: &mut LoadCache, file: &str) -> Result<Rc<Upload>> {
    let bytes = std::fs::read(file)?;
    Ok(cache.upload(&bytes)?)
}

pub(crate) fn parse_date_arg(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| PainelError::Other(format!("Invalid date '{raw}' (expected YYYY-MM-DD)")))
}

/// Message shown when a sheet cannot be analysed.
pub(crate) fn sheet_error(sheet: &str, err: &LoadError) -> String {
    format!("A aba '{sheet}' não foi encontrada ou está em um formato inesperado na planilha. ({err})")
}

#[derive(Parser)]
#[command(
    name = "painel",
    about = "Financial dashboard reports for spreadsheets with paid bills, cash flow and income sheets."
)]
pub struct Cli {
    /// Settings file (default: ~/.config/painel/settings.json)
    #[arg(long, global = true)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a settings file with the default keyword list.
    Init,
    /// Paid bills analysis ("Contas pagas" sheet).
    Bills {
        /// Path to the XLSX file
        file: String,
        /// Only bills of this company
        #[arg(long)]
        company: Option<String>,
        /// Only bills of this cost center
        #[arg(long = "cost-center")]
        cost_center: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cash flow position ("Entrada x  Saída" sheet).
    Cashflow {
        /// Path to the XLSX file
        file: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Income analysis ("Entradas" sheet).
    Income {
        /// Path to the XLSX file
        file: String,
        /// Comma-separated income sources (default: all)
        #[arg(long, value_delimiter = ',')]
        sources: Vec<String>,
        /// Start date: YYYY-MM-DD (default: first transaction)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (default: last transaction)
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the values available for filtering.
    Filters {
        /// Path to the XLSX file
        file: String,
    },
    /// Headline figures from all three sheets.
    Overview {
        /// Path to the XLSX file
        file: String,
    },
}
