use crate::pairing::effective_page_count;
use crate::types::BookletStatistics;
use lopdf::Document;

/// Calculate statistics for a booklet conversion without performing it.
///
/// An empty document is a valid input and yields zero sheets.
pub fn calculate_statistics(document: &Document) -> BookletStatistics {
    let source_pages = document.get_pages().len();
    let effective = effective_page_count(source_pages);

    BookletStatistics {
        source_pages,
        output_sheets: effective / 2,
        blank_pages_added: effective - source_pages,
    }
}
