/// A target audience segment, e.g. kind `SCHOOL`, population `Wharton`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
pub struct Population {
    pub id: i64,
    pub kind: String,
    pub population: String,
}
