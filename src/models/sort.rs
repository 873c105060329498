use mongodb::bson::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Direction as the server encodes it: 1 or -1.
    pub fn as_i32(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }

    pub fn sort_document(self, field: &str) -> Document {
        let mut sort = Document::new();
        sort.insert(field, self.as_i32());
        sort
    }
}
