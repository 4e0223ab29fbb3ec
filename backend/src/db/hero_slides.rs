use chrono::Utc;
use common::gateway::{HeroSlides, ValidationError};
use common::model::{HeroSlide, NewHeroSlide, SlideKind};
use rusqlite::{params, Connection, Row};

use super::{new_document_id, Repository};
use crate::error::ApiError;

impl Repository for HeroSlides {
    /// Slides come back in insertion order, tracked by the `seq` column.
    fn list(conn: &Connection) -> Result<Vec<HeroSlide>, ApiError> {
        let mut stmt =
            conn.prepare("SELECT id, url, created_at FROM hero_slides ORDER BY seq ASC")?;
        let slides = stmt
            .query_map([], slide_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(slides)
    }

    fn validate(draft: &NewHeroSlide) -> Result<(), ValidationError> {
        draft.validate()
    }

    fn insert(conn: &Connection, draft: NewHeroSlide) -> Result<String, ApiError> {
        let id = new_document_id();
        conn.execute(
            "INSERT INTO hero_slides (id, url, kind, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![&id, draft.url.trim(), draft.kind.as_str(), Utc::now()],
        )?;
        Ok(id)
    }

    fn delete(conn: &Connection, id: &str) -> Result<bool, ApiError> {
        let removed = conn.execute("DELETE FROM hero_slides WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

fn slide_from_row(row: &Row<'_>) -> rusqlite::Result<HeroSlide> {
    Ok(HeroSlide {
        id: row.get(0)?,
        url: row.get(1)?,
        kind: SlideKind::Video,
        created_at: row.get(2)?,
    })
}
