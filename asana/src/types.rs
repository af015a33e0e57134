use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user reference as returned by `owner.name` / `assignee.name` opt fields.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserRef {
    pub name: String,
}

/// An Asana project, restricted to the fields the dashboard requests.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Project {
    pub gid: String,
    pub name: String,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub archived: bool,
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub notes: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// An Asana task, restricted to the fields the dashboard requests.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Task {
    pub gid: String,
    pub name: String,
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    pub assignee: Option<UserRef>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
}

// Asana wraps every collection response in a `data` array.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Vec<T>,
}
