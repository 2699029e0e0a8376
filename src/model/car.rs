use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub price: f64,

    /// Owner id. Not checked against the people collection.
    pub person_id: String,
}

impl Car {
    pub fn new(
        id: impl Into<String>,
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        person_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            year,
            make: make.into(),
            model: model.into(),
            price,
            person_id: person_id.into(),
        }
    }

    /// Whether this car belongs to the person with `person_id`.
    pub fn is_owned_by(&self, person_id: &str) -> bool {
        self.person_id == person_id
    }
}
