//! DTOs for people_sea adapter.

#[derive(Debug, Clone)]
pub struct PeopleCreate {
    pub name: String,
    pub description: Option<String>,
}

impl PeopleCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
