//! Favorites repository. A favorite is rendered with its planet and person
//! resolved, so loading is batched: one query per table regardless of how
//! many favorites are involved.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::{favorites_sea, people_sea, planets_sea};
use crate::errors::domain::DomainError;
use crate::repos::people::{self, People};
use crate::repos::planets::{self, Planet};
use crate::repos::users;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet: Option<Planet>,
    pub people: Option<People>,
}

/// Favorites of every user in `user_ids`, grouped by user id.
pub async fn favorites_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_ids: &[i64],
) -> Result<HashMap<i64, Vec<Favorite>>, DomainError> {
    let rows = favorites_sea::find_by_user_ids(conn, user_ids).await?;

    let mut planet_ids: Vec<i64> = rows.iter().filter_map(|f| f.planet_id).collect();
    let mut people_ids: Vec<i64> = rows.iter().filter_map(|f| f.people_id).collect();
    planet_ids.sort_unstable();
    planet_ids.dedup();
    people_ids.sort_unstable();
    people_ids.dedup();

    let planets: HashMap<i64, Planet> = planets_sea::find_planets_by_ids(conn, &planet_ids)
        .await?
        .into_iter()
        .map(|m| (m.id, Planet::from(m)))
        .collect();
    let people: HashMap<i64, People> = people_sea::find_people_by_ids(conn, &people_ids)
        .await?
        .into_iter()
        .map(|m| (m.id, People::from(m)))
        .collect();

    let mut grouped: HashMap<i64, Vec<Favorite>> = HashMap::new();
    for row in rows {
        let favorite = Favorite {
            id: row.id,
            user_id: row.user_id,
            planet: row.planet_id.and_then(|id| planets.get(&id).cloned()),
            people: row.people_id.and_then(|id| people.get(&id).cloned()),
        };
        grouped.entry(row.user_id).or_default().push(favorite);
    }
    Ok(grouped)
}

/// Links a user to a person. Both must exist.
pub async fn add_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    people_id: i64,
) -> Result<Favorite, DomainError> {
    users::require_user_row(conn, user_id).await?;
    let person = people::require_people(conn, people_id).await?;

    let row =
        favorites_sea::create_favorite(conn, favorites_sea::FavoriteCreate::people(user_id, people_id))
            .await?;

    Ok(Favorite {
        id: row.id,
        user_id: row.user_id,
        planet: None,
        people: Some(person),
    })
}

/// Links a user to a planet. Both must exist.
pub async fn add_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    planet_id: i64,
) -> Result<Favorite, DomainError> {
    users::require_user_row(conn, user_id).await?;
    let planet = planets::require_planet(conn, planet_id).await?;

    let row =
        favorites_sea::create_favorite(conn, favorites_sea::FavoriteCreate::planet(user_id, planet_id))
            .await?;

    Ok(Favorite {
        id: row.id,
        user_id: row.user_id,
        planet: Some(planet),
        people: None,
    })
}
