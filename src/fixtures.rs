//! In-memory `.xlsx` images for tests.

use rust_xlsxwriter::{Format, Workbook as XlsxWriter};

/// Build a workbook; cells that parse as numbers are written as numbers,
/// blanks are left empty.
pub fn workbook_bytes(sheets: &[(&str, Vec<Vec<&str>>)]) -> Vec<u8> {
    let mut book = XlsxWriter::new();
    for (name, rows) in sheets {
        let sheet = book.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                match value.parse::<f64>() {
                    Ok(n) => sheet.write_number(r as u32, c as u16, n).unwrap(),
                    Err(_) => sheet.write_string(r as u32, c as u16, *value).unwrap(),
                };
            }
        }
    }
    book.save_to_buffer().unwrap()
}

pub fn sample_workbook_bytes() -> Vec<u8> {
    workbook_bytes(&[
        (
            "Contas pagas",
            vec![
                vec!["Relatório de Contas Pagas"],
                vec![],
                vec![
                    "Empresa", "Centro de Custo", "Fornecedor", "Doc", "Parcela", "Descrição", "Valor",
                    "Valor Pago", "Juros", "Vencimento", "Pagamento", "Forma",
                ],
                vec![
                    "ACME", "ADM", "Uber", "", "", "Uber aeroporto", "50", "50", "0", "2024-01-10",
                    "2024-01-10", "PIX",
                ],
                vec![
                    "ACME", "ADM", "Uber", "", "", "uber centro", "30", "30", "0", "2024-01-11",
                    "2024-01-11", "PIX",
                ],
                vec![
                    "Beta", "OBRA", "Cimento SA", "", "", "Material", "500", "520", "20", "2024-01-05",
                    "2024-01-12", "Boleto",
                ],
                vec!["", "", "", "", "", "sem empresa", "10", "10", "0", "", "", ""],
            ],
        ),
        (
            "Entrada x  Saída",
            vec![
                vec!["Fluxo de Caixa"],
                vec![],
                vec!["EMPRESA", "SALDO ANTERIOR", "ENTRADA", "SAÍDA", "TOTAL", "OBS"],
                vec!["ACME", "60", "120", "100", "80", "ok"],
                vec!["Beta", "40", "80", "50", "70", ""],
                vec!["Total", "100", "200", "150", "150", ""],
            ],
        ),
        (
            "Entradas",
            vec![
                vec!["Entradas Janeiro"],
                vec![],
                vec!["Data", "Loja", "Site", "Total"],
                vec!["2024-01-01", "10", "5", "15"],
                vec!["2024-01-02", "0", "0", "0"],
                vec!["2024-01-03", "20", "30", "50"],
                vec!["Entrada", "30", "35", "65"],
                vec!["Saída", "0", "0", "0"],
                vec!["Saldo", "30", "35", "65"],
            ],
        ),
    ])
}

/// Paid bills and income with dates stored the way Excel stores them: serial
/// numbers under a date format. 45292 is 2024-01-01.
pub fn dated_workbook_bytes() -> Vec<u8> {
    let date = Format::new().set_num_format("dd/mm/yyyy");
    let mut book = XlsxWriter::new();

    let bills = book.add_worksheet();
    bills.set_name("Contas pagas").unwrap();
    bills.write_string(0, 0, "Contas Pagas").unwrap();
    let header = [
        "Empresa", "Centro de Custo", "Fornecedor", "Doc", "Parcela", "Descrição", "Valor",
        "Valor Pago", "Juros", "Vencimento", "Pagamento", "Forma",
    ];
    for (c, h) in header.iter().enumerate() {
        bills.write_string(2, c as u16, *h).unwrap();
    }
    bills.write_string(3, 0, "ACME").unwrap();
    bills.write_string(3, 5, "Aluguel sala").unwrap();
    bills.write_number(3, 6, 900.0).unwrap();
    bills.write_number(3, 7, 900.0).unwrap();
    bills.write_number(3, 8, 0.0).unwrap();
    bills.write_number_with_format(3, 9, 45292.0, &date).unwrap();
    bills.write_number_with_format(3, 10, 45296.0, &date).unwrap();
    bills.write_string(3, 11, "PIX").unwrap();

    let income = book.add_worksheet();
    income.set_name("Entradas").unwrap();
    income.write_string(0, 0, "Entradas").unwrap();
    income.write_string(2, 0, "Data").unwrap();
    income.write_string(2, 1, "Loja").unwrap();
    for (r, (serial, amount)) in [(45292.0, 10.0), (45293.0, 25.0)].into_iter().enumerate() {
        let r = r as u32 + 3;
        income.write_number_with_format(r, 0, serial, &date).unwrap();
        income.write_number(r, 1, amount).unwrap();
    }

    book.save_to_buffer().unwrap()
}
