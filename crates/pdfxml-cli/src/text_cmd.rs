use std::path::Path;

use pdfxml::{TextFragment, UnicodeNorm};

use crate::cli::OutputFormat;
use crate::shared::{ProgressReporter, csv_escape, open_document, print_json, resolve_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    format: &OutputFormat,
    unicode_norm: Option<UnicodeNorm>,
) -> Result<(), i32> {
    let doc = open_document(file, unicode_norm)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;
    let progress = ProgressReporter::new(page_indices.len());

    let mut json_rows = Vec::new();

    match format {
        OutputFormat::Text => println!("page\ttop\tleft\twidth\theight\ttext\tbold"),
        OutputFormat::Csv => println!("page,top,left,width,height,text,bold"),
        OutputFormat::Json => {}
    }

    for (i, &idx) in page_indices.iter().enumerate() {
        progress.report(i + 1);

        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;

        for fragment in &page.texts {
            match format {
                OutputFormat::Text => write_text_row(idx + 1, fragment),
                OutputFormat::Csv => write_csv_row(idx + 1, fragment),
                OutputFormat::Json => json_rows.push(fragment_json(idx + 1, fragment)),
            }
        }
    }

    progress.finish();

    if let OutputFormat::Json = format {
        print_json(&json_rows)?;
    }
    Ok(())
}

fn write_text_row(page: usize, f: &TextFragment) {
    println!(
        "{page}\t{}\t{}\t{}\t{}\t{}\t{}",
        f.top,
        f.left,
        f.width,
        f.height,
        f.text,
        f.bold.as_deref().unwrap_or("")
    );
}

fn write_csv_row(page: usize, f: &TextFragment) {
    println!(
        "{page},{},{},{},{},{},{}",
        f.top,
        f.left,
        f.width,
        f.height,
        csv_escape(&f.text),
        csv_escape(f.bold.as_deref().unwrap_or(""))
    );
}

fn fragment_json(page: usize, f: &TextFragment) -> serde_json::Value {
    serde_json::json!({
        "page": page,
        "top": f.top,
        "left": f.left,
        "width": f.width,
        "height": f.height,
        "text": f.text,
        "bold": f.bold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_json_includes_bold() {
        let f = TextFragment::new(10, 20, 30, 12, "").with_bold("Total");
        let value = fragment_json(2, &f);
        assert_eq!(value["page"], 2);
        assert_eq!(value["top"], 10);
        assert_eq!(value["text"], "");
        assert_eq!(value["bold"], "Total");
    }

    #[test]
    fn fragment_json_null_bold() {
        let value = fragment_json(1, &TextFragment::new(1, 2, 3, 4, "x"));
        assert!(value["bold"].is_null());
    }
}
