use chrono::{DateTime, Utc};
use common::gateway::{Products, ValidationError};
use common::model::{Category, LocalizedText, NewProduct, Product};
use rusqlite::{params, Connection, Row};

use super::{conversion_error, new_document_id, Repository};
use crate::error::ApiError;

impl Repository for Products {
    fn list(conn: &Connection) -> Result<Vec<Product>, ApiError> {
        let mut stmt = conn.prepare(
            "SELECT id, category, name, description, weight, price, image, is_new, created_at
             FROM products
             ORDER BY category ASC, created_at ASC, id ASC",
        )?;
        let products = stmt
            .query_map([], product_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    fn validate(draft: &NewProduct) -> Result<(), ValidationError> {
        draft.validate()
    }

    fn insert(conn: &Connection, draft: NewProduct) -> Result<String, ApiError> {
        let id = new_document_id();
        let created_at: DateTime<Utc> = Utc::now();
        let name = serde_json::to_string(&draft.name)?;
        let description = draft
            .description
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        conn.execute(
            "INSERT INTO products (id, category, name, description, weight, price, image, is_new, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                &id,
                draft.category.as_str(),
                name,
                description,
                &draft.weight,
                draft.price,
                &draft.image,
                draft.is_new,
                created_at,
            ],
        )?;
        Ok(id)
    }

    fn delete(conn: &Connection, id: &str) -> Result<bool, ApiError> {
        let removed = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    let category: String = row.get(1)?;
    let category: Category = category.parse().map_err(|e| conversion_error(1, e))?;
    let name: String = row.get(2)?;
    let name: LocalizedText = serde_json::from_str(&name).map_err(|e| conversion_error(2, e))?;
    let description: Option<String> = row.get(3)?;
    let description = description
        .map(|raw| serde_json::from_str::<LocalizedText>(&raw))
        .transpose()
        .map_err(|e| conversion_error(3, e))?;

    Ok(Product {
        id: row.get(0)?,
        category,
        name,
        description,
        weight: row.get(4)?,
        price: row.get(5)?,
        image: row.get(6)?,
        is_new: row.get(7)?,
        created_at: row.get(8)?,
    })
}
