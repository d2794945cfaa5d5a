use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};

use crate::db::{DbPool, get_connection};
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::pagination::page_window;
use crate::repository::{
    AdvocateListQuery, AdvocateReader, AdvocateWriter, errors::RepositoryResult,
};

/// Diesel implementation of [`AdvocateReader`] and [`AdvocateWriter`].
pub struct DieselAdvocateRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselAdvocateRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl AdvocateReader for DieselAdvocateRepository<'_> {
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        use crate::models::advocate::Advocate as DbAdvocate;
        use crate::schema::advocates;

        let mut conn = get_connection(self.pool)?;

        let query_builder = || {
            let mut items = advocates::table.into_boxed::<diesel::sqlite::Sqlite>();

            // Prefix match (`term%`) OR-ed across the four text columns and
            // the text renderings of the two numeric columns. SQLite's LIKE
            // is already case-insensitive for ASCII.
            if let Some(term) = &query.search {
                let pattern = format!("{term}%");
                items = items.filter(
                    advocates::first_name
                        .like(pattern.clone())
                        .or(advocates::last_name.like(pattern.clone()))
                        .or(advocates::city.like(pattern.clone()))
                        .or(advocates::degree.like(pattern.clone()))
                        .or(sql::<Bool>("CAST(years_of_experience AS TEXT) LIKE ")
                            .bind::<Text, _>(pattern.clone()))
                        .or(sql::<Bool>("CAST(phone_number AS TEXT) LIKE ")
                            .bind::<Text, _>(pattern)),
                );
            }

            items
        };

        // Total count of matching rows, before the window is applied.
        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = query_builder().order(advocates::id.asc());

        if let Some(pagination) = &query.pagination {
            let (limit, offset) = page_window(pagination.page);
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbAdvocate>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Advocate>>();

        Ok((total, items))
    }
}

impl AdvocateWriter for DieselAdvocateRepository<'_> {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;
        use crate::schema::advocates;

        let mut conn = get_connection(self.pool)?;
        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
