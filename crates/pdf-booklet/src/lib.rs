pub mod booklet;
mod constants;
mod embed;
pub mod layout;
mod options;
mod pairing;
mod stats;
mod types;

pub use booklet::{load_pdf, make_booklet, save_pdf};
pub use options::*;
pub use pairing::{compute_pairs, effective_page_count};
pub use stats::calculate_statistics;
pub use types::*;
