//! Input parsing

mod records;

pub use records::{
    parse_labeled, parse_records, read_records, read_records_from_path, ParseError,
};
