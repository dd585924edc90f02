//! Fixture workbooks shared by the integration tests

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::Path;

/// A fixture cell
pub enum Cell {
    Str(&'static str),
    Num(f64),
    Bool(bool),
    Date(u16, u8, u8),
    Blank,
}

/// Write a workbook with the given sheets, in the given storage order.
/// Row 0 of each sheet is the header.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Str(s) => {
                        worksheet.write_string(r, c, *s).unwrap();
                    }
                    Cell::Num(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).unwrap();
                    }
                    Cell::Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                        worksheet
                            .write_datetime_with_format(r, c, &date, &date_format)
                            .unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// The two-sheet scenario used across tests: `schema-yn` is stored before
/// `node-master`, plus one sheet that is never requested.
pub fn scenario_sheets() -> Vec<(&'static str, Vec<Vec<Cell>>)> {
    vec![
        (
            "schema-yn",
            vec![
                vec![Cell::Str("code"), Cell::Str("label")],
                vec![Cell::Str("Y"), Cell::Str("Yes")],
            ],
        ),
        (
            "node-master",
            vec![
                vec![Cell::Str("id"), Cell::Str("tags"), Cell::Str("note")],
                vec![Cell::Num(1.0), Cell::Str(r#"["a","b"]"#), Cell::Str("hello  ")],
            ],
        ),
        (
            "unused",
            vec![vec![Cell::Str("x")], vec![Cell::Num(9.0)]],
        ),
    ]
}

/// Snapshot text expected for [`scenario_sheets`] exported as
/// `[node-master, schema-yn]` for 2024
pub const SCENARIO_SNAPSHOT: &str = "const data2024 = {\n  \"node-master\": [\n    {\n      \"id\": 1,\n      \"tags\": [\n        \"a\",\n        \"b\"\n      ],\n      \"note\": \"hello  \"\n    }\n  ],\n  \"schema-yn\": [\n    {\n      \"code\": \"Y\",\n      \"label\": \"Yes\"\n    }\n  ]\n};";
