//! DTOs for planets_sea adapter.

#[derive(Debug, Clone, Default)]
pub struct PlanetCreate {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl PlanetCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    pub fn with_terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }
}
