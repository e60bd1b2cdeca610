use std::fmt;

const RULE: &str = "-------------------";

/// One occupied primary slot together with its overflow chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView<'a> {
    pub index: usize,
    pub key: &'a str,
    pub value: &'a str,
    pub overflow: Vec<(&'a str, &'a str)>,
}

/// Snapshot of a table, occupied slots only, in ascending index order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub slots: Vec<SlotView<'a>>,
}

/// Outcome of a single lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView<'a> {
    Found { key: &'a str, value: &'a str },
    Missing { key: &'a str },
}

impl fmt::Display for SlotView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index:{}, Key:{}, Value:{}", self.index, self.key, self.value)?;
        if !self.overflow.is_empty() {
            write!(f, " => Overflow Bucket => ")?;
            for (key, value) in &self.overflow {
                write!(f, "Key:{key}, Value:{value} ")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        for slot in &self.slots {
            writeln!(f, "{slot}")?;
        }
        write!(f, "{RULE}")
    }
}

impl fmt::Display for SearchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchView::Found { key, value } => write!(f, "Key:{key}, Value:{value}"),
            SearchView::Missing { key } => write!(f, "{key} does not exist"),
        }
    }
}
