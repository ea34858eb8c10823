/// All errors that can occur while assembling or querying the catalog.
///
/// The query layer itself is total: unknown category ids yield empty result
/// sets and missing event ids contribute zero cost. Errors only arise when
/// the fixture tables violate a construction invariant, or when a selector
/// string fails to parse into its closed enum.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Two records in the same table share an id.
    #[error("duplicate {table} id: {id}")]
    DuplicateId { table: &'static str, id: String },

    /// An event references a category id that is not in the category table.
    #[error("event {event_id} references unknown category {category_id}")]
    UnknownEventCategory {
        event_id: String,
        category_id: String,
    },

    /// An FAQ references a category that is not in the FAQ category set.
    #[error("faq {faq_id} references unknown category {category}")]
    UnknownFaqCategory { faq_id: String, category: String },

    /// A selector string (sort key, points category, sponsor tier) did not
    /// match any variant of its enum.
    #[error("unrecognized selector: {0}")]
    Selector(#[from] strum::ParseError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
