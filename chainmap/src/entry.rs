/// An owned key/value pair, the unit of storage of a [`ChainedTable`](crate::ChainedTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn matches(&self, key: &str) -> bool {
        self.key == key
    }

    /// Replace the value in place, returning the previous one
    pub fn set_value(&mut self, value: impl Into<String>) -> String {
        std::mem::replace(&mut self.value, value.into())
    }

    pub fn into_value(self) -> String {
        self.value
    }

    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}
