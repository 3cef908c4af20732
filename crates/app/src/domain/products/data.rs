//! Products Data

/// Product Patch Data
///
/// A field is written only when it is `Some`. Empty strings and a zero price
/// are ordinary values, distinct from an omitted field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

impl ProductPatch {
    /// Returns `true` when no field was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }

    /// Number of supplied fields.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.name.is_some())
            + usize::from(self.description.is_some())
            + usize::from(self.price.is_some())
    }
}
