use pdfxml::{
    AllOf, ColumnMatches, MinFilledCells, PageTable, RangeClassifier, RequiredColumns,
    TableEntry, TableExtractionRequest, TableSettings, variance_classifier,
};

use crate::cli::{OutputFormat, TablesArgs, UnicodeNormArg};
use crate::shared::{csv_escape, open_document, print_json, resolve_pages};

pub fn run(args: &TablesArgs) -> Result<(), i32> {
    let request = build_request(args).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    tracing::debug!(?request, "built table request");

    let doc = open_document(
        &args.file,
        args.unicode_norm.map(UnicodeNormArg::to_unicode_norm),
    )?;
    let page_indices = resolve_pages(args.pages.as_deref(), doc.page_count())?;

    let tables = doc
        .extract_tables_from(&page_indices, &request)
        .map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;

    let columns = request.settings().columns;
    match args.format {
        OutputFormat::Text => write_grid(&tables, columns),
        OutputFormat::Json => print_json(&tables),
        OutputFormat::Csv => write_csv(&tables, columns),
    }
}

/// Translate command-line flags into a validated extraction request.
fn build_request(args: &TablesArgs) -> Result<TableExtractionRequest, String> {
    if args.variance.is_some() && args.positions.is_empty() {
        return Err("--variance only applies to --positions".to_string());
    }
    let classifier = if args.positions.is_empty() {
        RangeClassifier::new(args.ranges.clone())
    } else {
        variance_classifier(&args.positions, args.variance.unwrap_or(0))
    }
    .map_err(|e| e.to_string())?;

    let columns = args.columns.unwrap_or(classifier.ranges().len());
    let settings = TableSettings {
        from: args.from.unwrap_or(i64::MIN),
        to: args.to.unwrap_or(i64::MAX),
        columns,
        tolerance: args.tolerance,
    };
    let request = TableExtractionRequest::new(settings, classifier).map_err(|e| e.to_string())?;

    Ok(match build_validator(args, columns)? {
        Some(validator) => request.with_validator(validator),
        None => request,
    })
}

fn build_validator(args: &TablesArgs, columns: usize) -> Result<Option<AllOf>, String> {
    let mut referenced = args
        .require
        .iter()
        .chain(args.patterns.iter().map(|p| &p.column));
    if let Some(&column) = referenced.find(|&&c| c >= columns) {
        return Err(format!(
            "column {column} is out of range (table has {columns} columns)"
        ));
    }

    let mut validator = AllOf::new();
    if let Some(min) = args.min_cells {
        validator = validator.and(MinFilledCells(min));
    }
    if !args.require.is_empty() {
        validator = validator.and(RequiredColumns(args.require.clone()));
    }
    for p in &args.patterns {
        let matcher = ColumnMatches::new(p.column, &p.pattern)
            .map_err(|e| format!("invalid pattern for column {}: {e}", p.column))?;
        validator = validator.and(matcher);
    }

    Ok((!validator.is_empty()).then_some(validator))
}

fn cell_texts(row: &TableEntry) -> Vec<&str> {
    row.cells
        .iter()
        .map(|cell| cell.as_ref().map_or("", |c| c.display_text()))
        .collect()
}

fn write_grid(tables: &[PageTable], columns: usize) -> Result<(), i32> {
    let mut printed = false;

    for table in tables {
        if table.rows.is_empty() {
            continue;
        }
        printed = true;

        println!(
            "--- Page {} ({} row(s)) ---",
            table.index + 1,
            table.rows.len()
        );

        let text_rows: Vec<Vec<&str>> = table.rows.iter().map(cell_texts).collect();

        // Column widths for aligned output, minimum 1
        let mut col_widths = vec![1usize; columns];
        for row in &text_rows {
            for (ci, text) in row.iter().enumerate() {
                col_widths[ci] = col_widths[ci].max(text.chars().count());
            }
        }

        for row in &text_rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&col_widths)
                .map(|(text, &width)| format!("{text:<width$}"))
                .collect();
            println!("| {} |", cells.join(" | "));
        }
        println!();
    }

    if !printed {
        println!("No rows found.");
    }

    Ok(())
}

fn write_csv(tables: &[PageTable], columns: usize) -> Result<(), i32> {
    let header: Vec<String> = (1..=columns).map(|c| format!("col{c}")).collect();
    println!("page,row,{}", header.join(","));

    for table in tables {
        for (ri, row) in table.rows.iter().enumerate() {
            let cells: Vec<String> = cell_texts(row).into_iter().map(csv_escape).collect();
            println!("{},{},{}", table.index + 1, ri + 1, cells.join(","));
        }
    }

    Ok(())
}
