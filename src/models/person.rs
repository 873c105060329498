use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The record the walkthrough stores. `_id` is left out when unset so the
/// driver assigns one on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub address: String,
}

impl Person {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Person {
            id: None,
            name: name.into(),
            address: address.into(),
        }
    }
}

/// The twelve people inserted in bulk by the walkthrough.
pub fn sample_people() -> Vec<Person> {
    [
        ("Amy", "Apple st 652"),
        ("Hannah", "Mountain 21"),
        ("Michael", "Valley 345"),
        ("Sandy", "Ocean blue 2"),
        ("Betty", "Green Grass 1"),
        ("Richard", "Sky red 331"),
        ("Susan", "One way 98"),
        ("Vicky", "Yellow Garden 2"),
        ("Ben", "Park Lane 38"),
        ("William", "Central road 954"),
        ("Chuck", "Main Road 989"),
        ("Viola", "Side way 1633"),
    ]
    .into_iter()
    .map(|(name, address)| Person::new(name, address))
    .collect()
}
