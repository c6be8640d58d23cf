use std::path::Path;

use pdfxml::Bookmark;

use crate::cli::InfoFormat;
use crate::shared::{open_document, print_json};

pub fn run(file: &Path, format: &InfoFormat) -> Result<(), i32> {
    let doc = open_document(file, None)?;
    let bookmarks = doc.bookmarks();

    match format {
        InfoFormat::Text => write_text(bookmarks),
        InfoFormat::Json => print_json(bookmarks),
    }
}

fn write_text(bookmarks: &[Bookmark]) -> Result<(), i32> {
    if bookmarks.is_empty() {
        println!("No bookmarks found.");
        return Ok(());
    }

    println!("level\tpage\ttitle");

    for bm in bookmarks {
        let indent = "  ".repeat(bm.level);
        let page_str = bm
            .page_number
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        println!("{}\t{}\t{}{}", bm.level, page_str, indent, bm.title);
    }

    Ok(())
}
