use std::path::Path;

use pdfxml::{Document, IntBox, Page};

use crate::cli::InfoFormat;
use crate::shared::{open_document, print_json};

pub fn run(file: &Path, format: &InfoFormat) -> Result<(), i32> {
    let doc = open_document(file, None)?;

    match format {
        InfoFormat::Text => write_text(&doc),
        InfoFormat::Json => print_json(&info_json(&doc)),
    }
}

fn dimension(value: Option<i64>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn format_box(bbox: Option<IntBox>) -> String {
    bbox.map_or_else(
        || "-".to_string(),
        |b| format!("[{}, {}, {}, {}]", b.left, b.top, b.right, b.bottom),
    )
}

fn box_json(bbox: Option<IntBox>) -> serde_json::Value {
    match bbox {
        Some(b) => serde_json::json!([b.left, b.top, b.right, b.bottom]),
        None => serde_json::Value::Null,
    }
}

fn write_text(doc: &Document) -> Result<(), i32> {
    println!("Producer: {}", doc.producer().unwrap_or("-"));
    println!("Version: {}", doc.version().unwrap_or("-"));
    println!("Pages: {}", doc.page_count());
    println!("Bookmarks: {}", doc.bookmarks().len());

    for (idx, page) in doc.pages().iter().enumerate() {
        println!();
        println!("Page {}:", idx + 1);
        if let Some(number) = page.number {
            println!("  Number: {number}");
        }
        println!(
            "  Dimensions: {} x {}",
            dimension(page.width),
            dimension(page.height)
        );
        println!("  BBox: {}", format_box(page.bbox()));
        println!("  Text extent: {}", format_box(page.text_extent()));
        println!("  Fontspecs: {}", page.font_specs.len());
        println!("  Text fragments: {}", page.texts.len());
    }

    Ok(())
}

fn page_json(idx: usize, page: &Page) -> serde_json::Value {
    serde_json::json!({
        "page": idx + 1,
        "number": page.number,
        "width": page.width,
        "height": page.height,
        "bbox": box_json(page.bbox()),
        "text_extent": box_json(page.text_extent()),
        "fontspecs": page.font_specs.len(),
        "texts": page.texts.len(),
    })
}

fn info_json(doc: &Document) -> serde_json::Value {
    let pages: Vec<serde_json::Value> = doc
        .pages()
        .iter()
        .enumerate()
        .map(|(idx, page)| page_json(idx, page))
        .collect();

    serde_json::json!({
        "producer": doc.producer(),
        "version": doc.version(),
        "page_count": doc.page_count(),
        "bookmarks": doc.bookmarks().len(),
        "pages": pages,
    })
}
