//! People repository.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::people_sea as people_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct People {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

pub async fn list_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<People>, DomainError> {
    let rows = people_adapter::list_people(conn).await?;
    Ok(rows.into_iter().map(People::from).collect())
}

pub async fn find_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    people_id: i64,
) -> Result<Option<People>, DomainError> {
    let people = people_adapter::find_people_by_id(conn, people_id).await?;
    Ok(people.map(People::from))
}

pub async fn require_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    people_id: i64,
) -> Result<People, DomainError> {
    find_people(conn, people_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::People, people_id))
}

pub async fn create_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    description: Option<&str>,
) -> Result<People, DomainError> {
    let mut dto = people_adapter::PeopleCreate::new(name);
    if let Some(description) = description {
        dto = dto.with_description(description);
    }
    let people = people_adapter::create_people(conn, dto).await?;
    Ok(People::from(people))
}

/// Deletes and returns the pre-delete view.
pub async fn delete_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    people_id: i64,
) -> Result<People, DomainError> {
    let people = require_people(conn, people_id).await?;
    people_adapter::delete_people(conn, people_id).await?;
    Ok(people)
}

impl From<crate::entities::people::Model> for People {
    fn from(model: crate::entities::people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}
