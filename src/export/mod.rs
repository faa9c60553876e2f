mod delimited;
mod records;

pub use delimited::{export_delimited, DelimitedOptions, TextEncoding};
pub use records::{export_records, RecordsOptions};
