//! Extract table rows from a pdf2xml document and print them as grids.
//!
//! Usage: `cargo run --example extract_table -- <path-to-xml> <left:right>...`
//!
//! Each `left:right` pair defines one column by the horizontal range its
//! fragments start in.

use pdfxml::{Document, ParseOptions, TableExtractionRequest, TableSettings, range_classifier};

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| {
        eprintln!("Usage: extract_table <path-to-xml> <left:right>...");
        std::process::exit(1);
    });

    let ranges: Vec<(i64, i64)> = args
        .map(|arg| {
            let parsed = arg
                .split_once(':')
                .and_then(|(a, b)| Some((a.parse().ok()?, b.parse().ok()?)));
            parsed.unwrap_or_else(|| {
                eprintln!("Invalid column range '{arg}', expected LEFT:RIGHT");
                std::process::exit(1);
            })
        })
        .collect();

    let doc = Document::open_file(&path, &ParseOptions::default()).unwrap_or_else(|e| {
        eprintln!("Error opening document: {e}");
        std::process::exit(1);
    });

    let settings = TableSettings {
        columns: ranges.len().max(1),
        tolerance: 2,
        ..TableSettings::default()
    };
    let request = range_classifier(&ranges)
        .and_then(|classifier| TableExtractionRequest::new(settings, classifier))
        .unwrap_or_else(|e| {
            eprintln!("Invalid table settings: {e}");
            std::process::exit(1);
        });

    for table in doc.extract_tables(&request) {
        if table.rows.is_empty() {
            continue;
        }

        println!(
            "--- Page {} ({} row(s)) ---",
            table.page_number.map_or(table.index + 1, |n| n as usize),
            table.rows.len()
        );
        for row in &table.rows {
            let cells: Vec<&str> = row.texts().into_iter().map(|c| c.unwrap_or("")).collect();
            println!("    {:?}", cells);
        }
        println!();
    }
}
