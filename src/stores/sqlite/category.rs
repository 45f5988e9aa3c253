//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryId, CategoryName},
    stores::CategoryStore,
};

use super::lock;

/// Creates and retrieves categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    fn create(&self, name: CategoryName) -> Result<Category, Error> {
        let connection = lock(&self.connection)?;
        connection.execute("INSERT INTO category (name) VALUES (?1);", (name.as_ref(),))?;

        let id = connection.last_insert_rowid();

        Ok(Category { id, name })
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        lock(&self.connection)?
            .prepare("SELECT id, name FROM category ORDER BY id ASC;")?
            .query_map([], SQLiteCategoryStore::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    fn get(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        lock(&self.connection)?
            .prepare("SELECT id, name FROM category WHERE id = :id;")?
            .query_row(&[(":id", &id)], SQLiteCategoryStore::map_row)
            .optional()
            .map_err(|error| error.into())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Category>, Error> {
        lock(&self.connection)?
            .prepare("SELECT id, name FROM category WHERE name = :name ORDER BY id ASC LIMIT 1;")?
            .query_row(&[(":name", &name)], SQLiteCategoryStore::map_row)
            .optional()
            .map_err(|error| error.into())
    }

    fn exists_by_name(&self, name: &str) -> Result<bool, Error> {
        lock(&self.connection)?
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM category WHERE name = ?1);",
                (name,),
                |row| row.get(0),
            )
            .map_err(|error| error.into())
    }

    fn exists(&self, id: CategoryId) -> Result<bool, Error> {
        lock(&self.connection)?
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM category WHERE id = ?1);",
                (id,),
                |row| row.get(0),
            )
            .map_err(|error| error.into())
    }

    fn save(&self, category: &Category) -> Result<(), Error> {
        let rows_affected = lock(&self.connection)?.execute(
            "UPDATE category SET name = ?1 WHERE id = ?2",
            (category.name.as_ref(), category.id),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound(format!(
                "Category not found with id: {}",
                category.id
            )));
        }

        Ok(())
    }

    fn delete(&self, id: CategoryId) -> Result<(), Error> {
        lock(&self.connection)?.execute("DELETE FROM category WHERE id = ?1", (id,))?;

        Ok(())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // Names are not UNIQUE here, the category service checks for duplicates.
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_category_name ON category(name);",
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;

        let raw_name: String = row.get(offset + 1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        Ok(Self::ReturnType { id, name })
    }
}

#[cfg(test)]
mod category_store_tests {
    use std::collections::HashSet;

    use crate::{
        Error,
        models::{Category, CategoryName},
        stores::{CategoryStore, sqlite::get_test_connection},
    };

    use super::SQLiteCategoryStore;

    fn get_test_store() -> SQLiteCategoryStore {
        SQLiteCategoryStore::new(get_test_connection())
    }

    #[test]
    fn create_category_succeeds() {
        let store = get_test_store();
        let name = CategoryName::new("Categorically a category").unwrap();

        let category = store.create(name.clone()).unwrap();

        assert!(category.id > 0);
        assert_eq!(category.name, name);
    }

    #[test]
    fn get_category_succeeds() {
        let store = get_test_store();
        let inserted_category = store.create(CategoryName::new_unchecked("Foo")).unwrap();

        let selected_category = store.get(inserted_category.id);

        assert_eq!(Ok(Some(inserted_category)), selected_category);
    }

    #[test]
    fn get_category_with_invalid_id_returns_none() {
        let store = get_test_store();
        let inserted_category = store.create(CategoryName::new_unchecked("Foo")).unwrap();

        let selected_category = store.get(inserted_category.id + 123);

        assert_eq!(selected_category, Ok(None));
    }

    #[test]
    fn get_all_categories() {
        let store = get_test_store();

        let inserted_categories = HashSet::from([
            store.create(CategoryName::new_unchecked("Foo")).unwrap(),
            store.create(CategoryName::new_unchecked("Bar")).unwrap(),
        ]);

        let selected_categories = store.get_all().unwrap();
        let selected_categories = HashSet::from_iter(selected_categories);

        assert_eq!(inserted_categories, selected_categories);
    }

    #[test]
    fn get_by_name_is_case_sensitive() {
        let store = get_test_store();
        let food = store.create(CategoryName::new_unchecked("Food")).unwrap();

        assert_eq!(store.get_by_name("Food"), Ok(Some(food)));
        assert_eq!(store.get_by_name("food"), Ok(None));
    }

    #[test]
    fn exists_checks() {
        let store = get_test_store();
        let food = store.create(CategoryName::new_unchecked("Food")).unwrap();

        assert_eq!(store.exists(food.id), Ok(true));
        assert_eq!(store.exists(food.id + 1), Ok(false));
        assert_eq!(store.exists_by_name("Food"), Ok(true));
        assert_eq!(store.exists_by_name("Rent"), Ok(false));
    }

    #[test]
    fn save_renames_category() {
        let store = get_test_store();
        let category = store.create(CategoryName::new_unchecked("Original")).unwrap();
        let renamed = Category {
            id: category.id,
            name: CategoryName::new_unchecked("Updated"),
        };

        store.save(&renamed).unwrap();

        assert_eq!(store.get(category.id), Ok(Some(renamed)));
    }

    #[test]
    fn save_with_invalid_id_returns_not_found() {
        let store = get_test_store();
        let category = Category {
            id: 999999,
            name: CategoryName::new_unchecked("Updated"),
        };

        let result = store.save(&category);

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_removes_category() {
        let store = get_test_store();
        let category = store.create(CategoryName::new_unchecked("ToDelete")).unwrap();

        store.delete(category.id).unwrap();

        assert_eq!(store.get(category.id), Ok(None));
    }
}
