//! Partial product updates.
//!
//! A [`ProductPatch`] becomes a single parameterised `UPDATE` that assigns
//! only the supplied columns. Placeholders are allocated by [`QueryBuilder`]
//! as each value is bound, so `$n` numbering always matches bind order and the
//! `WHERE` placeholder always comes last.

use smallvec::SmallVec;
use sqlx::{PgExecutor, Postgres, QueryBuilder};

use crate::domain::products::{
    data::ProductPatch, errors::ProductsServiceError, records::ProductId,
};

const UPDATE_PRODUCT_PREFIX_SQL: &str = "UPDATE products SET ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum AssignedValue {
    Text(String),
    Integer(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment {
    column: &'static str,
    value: AssignedValue,
}

/// An `UPDATE products` statement for one row, holding at least one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdateStatement {
    product: ProductId,
    assignments: SmallVec<[Assignment; 3]>,
}

impl ProductUpdateStatement {
    /// Collect the supplied fields of `patch` in column order.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::EmptyPatch`] when no field is supplied.
    pub fn new(product: ProductId, patch: ProductPatch) -> Result<Self, ProductsServiceError> {
        let ProductPatch {
            name,
            description,
            price,
        } = patch;

        let mut assignments = SmallVec::new();

        if let Some(name) = name {
            assignments.push(Assignment {
                column: "name",
                value: AssignedValue::Text(name),
            });
        }

        if let Some(description) = description {
            assignments.push(Assignment {
                column: "description",
                value: AssignedValue::Text(description),
            });
        }

        if let Some(price) = price {
            assignments.push(Assignment {
                column: "price",
                value: AssignedValue::Integer(price),
            });
        }

        if assignments.is_empty() {
            return Err(ProductsServiceError::EmptyPatch);
        }

        Ok(Self {
            product,
            assignments,
        })
    }

    /// The row this statement targets.
    #[must_use]
    pub fn product(&self) -> ProductId {
        self.product
    }

    /// Assigned columns, in the order they appear in the statement.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assignments.iter().map(|assignment| assignment.column)
    }

    /// Render the statement with its bound values.
    #[must_use]
    pub fn into_query_builder(self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(UPDATE_PRODUCT_PREFIX_SQL);

        {
            let mut separated = builder.separated(", ");

            for Assignment { column, value } in self.assignments {
                separated.push(column).push_unseparated(" = ");

                match value {
                    AssignedValue::Text(text) => separated.push_bind_unseparated(text),
                    AssignedValue::Integer(integer) => separated.push_bind_unseparated(integer),
                };
            }
        }

        builder
            .push(" WHERE id = ")
            .push_bind(self.product.into_i64());

        builder
    }

    /// Run the statement, returning the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error when the statement fails to execute.
    pub async fn execute<'e, E>(self, executor: E) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let mut builder = self.into_query_builder();

        let rows_affected = builder.build().execute(executor).await?.rows_affected();

        Ok(rows_affected)
    }
}
