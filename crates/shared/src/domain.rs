use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident, $default:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }
    };
}

id_newtype!(OwnerId, 1);

/// Identifier assigned by the remote store. Some collections hand out numbers,
/// others strings, so both are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl TodoId {
    /// True when the id cannot address a record (an empty string id).
    pub fn is_blank(&self) -> bool {
        match self {
            TodoId::Number(_) => false,
            TodoId::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(value) => write!(f, "{value}"),
            TodoId::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        TodoId::Number(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        TodoId::Text(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        TodoId::Text(value)
    }
}
