//! Planet repository.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::planets_sea as planets_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

pub async fn list_planets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Planet>, DomainError> {
    let rows = planets_adapter::list_planets(conn).await?;
    Ok(rows.into_iter().map(Planet::from).collect())
}

pub async fn find_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<Option<Planet>, DomainError> {
    let planet = planets_adapter::find_planet_by_id(conn, planet_id).await?;
    Ok(planet.map(Planet::from))
}

pub async fn require_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<Planet, DomainError> {
    find_planet(conn, planet_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::Planet, planet_id))
}

pub async fn create_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    climate: Option<&str>,
    terrain: Option<&str>,
) -> Result<Planet, DomainError> {
    let mut dto = planets_adapter::PlanetCreate::new(name);
    if let Some(climate) = climate {
        dto = dto.with_climate(climate);
    }
    if let Some(terrain) = terrain {
        dto = dto.with_terrain(terrain);
    }
    let planet = planets_adapter::create_planet(conn, dto).await?;
    Ok(Planet::from(planet))
}

/// Deletes and returns the pre-delete view. A planet still referenced by a
/// favorite is rejected by the foreign key (`Conflict(ForeignKey)`).
pub async fn delete_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<Planet, DomainError> {
    let planet = require_planet(conn, planet_id).await?;
    planets_adapter::delete_planet(conn, planet_id).await?;
    Ok(planet)
}

impl From<crate::entities::planets::Model> for Planet {
    fn from(model: crate::entities::planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
        }
    }
}
