use serde::{Deserialize, Serialize};

/// A persisted student row. `id` is assigned by the store on insert.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
    /// Stored verbatim as imported. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password: String,
}

/// The insertable shape of a student, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub password: String,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn into_record(self, id: i64) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentOrder {
    /// Insertion order.
    Id,
    /// Bytewise ascending by name, ties broken by id.
    #[default]
    Name,
}
