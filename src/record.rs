/// A keyed record loaded once per run and shared, by reference, by every table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub tags: Vec<String>,
}

impl Record {
    pub fn new(id: u64, name: impl Into<String>, tags: Vec<String>) -> Self {
        Record {
            id,
            name: name.into(),
            tags,
        }
    }
}
