mod chain;
pub mod entry;
pub mod error;
pub mod hash;
pub mod table;
pub mod view;
pub use entry::Entry;
pub use error::{Result, TableError};
pub use hash::{CharSum, SlotHash};
pub use table::{ChainedTable, DEFAULT_CAPACITY};
pub use view::{SearchView, SlotView, TableView};
