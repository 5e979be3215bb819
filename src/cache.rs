use std::cell::OnceCell;
use std::collections::HashMap;
use std::rc::Rc;

use sha2::{Digest, Sha256};

use crate::error::LoadError;
use crate::loader::{load_cash_flow, load_income, load_paid_bills};
use crate::models::{CashFlowRow, IncomeData, PaidBill};
use crate::workbook::Workbook;

pub fn compute_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// A parsed upload. Each sheet is loaded at most once, on first request.
#[derive(Debug)]
pub struct Upload {
    checksum: String,
    workbook: Workbook,
    paid_bills: OnceCell<Result<Vec<PaidBill>, LoadError>>,
    cash_flow: OnceCell<Result<Vec<CashFlowRow>, LoadError>>,
    income: OnceCell<Result<IncomeData, LoadError>>,
}

impl Upload {
    fn new(checksum: String, workbook: Workbook) -> Self {
        Self {
            checksum,
            workbook,
            paid_bills: OnceCell::new(),
            cash_flow: OnceCell::new(),
            income: OnceCell::new(),
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    pub fn paid_bills(&self) -> Result<&[PaidBill], LoadError> {
        self.paid_bills
            .get_or_init(|| load_paid_bills(&self.workbook))
            .as_deref()
            .map_err(Clone::clone)
    }

    pub fn cash_flow(&self) -> Result<&[CashFlowRow], LoadError> {
        self.cash_flow
            .get_or_init(|| load_cash_flow(&self.workbook))
            .as_deref()
            .map_err(Clone::clone)
    }

    pub fn income(&self) -> Result<&IncomeData, LoadError> {
        self.income
            .get_or_init(|| load_income(&self.workbook))
            .as_ref()
            .map_err(Clone::clone)
    }
}

/// Parsed uploads keyed by the SHA-256 of their bytes, so switching between
/// analyses of the same file never parses it twice. A CLI run uploads once;
/// within it the per-sheet memoization in `Upload` does the work.
#[derive(Debug, Default)]
pub struct LoadCache {
    entries: HashMap<String, Rc<Upload>>,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload(&mut self, bytes: &[u8]) -> Result<Rc<Upload>, LoadError> {
        let checksum = compute_checksum(bytes);
        if let Some(hit) = self.entries.get(&checksum) {
            tracing::debug!(%checksum, "upload cache hit");
            return Ok(Rc::clone(hit));
        }

        tracing::debug!(%checksum, size = bytes.len(), "parsing upload");
        let workbook = Workbook::from_bytes(bytes)?;
        let upload = Rc::new(Upload::new(checksum.clone(), workbook));
        self.entries.insert(checksum, Rc::clone(&upload));
        Ok(upload)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
