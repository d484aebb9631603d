use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid page count: {0}")]
    InvalidPageCount(i64),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// The two source pages carried by one output sheet.
///
/// `front` is the lower index, `back` the higher. Equality of the two only
/// occurs for a one-page document, where the pair is (0, 1) and index 1 is
/// the padded blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePair {
    /// Lower page index (closer to the start of the document)
    pub front: usize,
    /// Higher page index (closer to the end, possibly the padded blank)
    pub back: usize,
}

impl PagePair {
    pub fn new(front: usize, back: usize) -> Self {
        Self { front, back }
    }
}

/// Statistics about a booklet conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookletStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of output sheets (two source pages each)
    pub output_sheets: usize,
    /// Number of blank pages added to make the count even (0 or 1)
    pub blank_pages_added: usize,
}
