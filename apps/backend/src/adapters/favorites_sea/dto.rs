//! DTOs for favorites_sea adapter.

/// A favorite points at a planet, a person, or both.
#[derive(Debug, Clone)]
pub struct FavoriteCreate {
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

impl FavoriteCreate {
    pub fn people(user_id: i64, people_id: i64) -> Self {
        Self {
            user_id,
            planet_id: None,
            people_id: Some(people_id),
        }
    }

    pub fn planet(user_id: i64, planet_id: i64) -> Self {
        Self {
            user_id,
            planet_id: Some(planet_id),
            people_id: None,
        }
    }
}
