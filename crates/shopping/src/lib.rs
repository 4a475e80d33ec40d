mod aggregation;
mod entry;
mod history;
mod root;

pub use aggregation::*;
pub use entry::{ShoppingEntry, decode_entries, encode_entries, ingredient_id};
pub use history::*;
pub use root::*;
