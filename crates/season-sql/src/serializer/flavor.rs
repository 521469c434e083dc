use super::Serializer;

use serde::{Deserialize, Deserializer, Serialize, Serializer as SerdeSerializer};
use std::fmt;

/// The SQL dialect a fragment is rendered for.
///
/// Resolution from a driver name never fails: names that are not recognized
/// map to [`Flavor::Ansi`], which uses the standard `EXTRACT` syntax.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Mysql,
    Postgresql,
    Sqlite,
    #[default]
    Ansi,
}

impl Flavor {
    /// Resolves a database driver name such as `mysql`, `pgsql` or
    /// `sqlite`.
    pub fn from_driver(name: &str) -> Flavor {
        match name.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Flavor::Mysql,
            "pgsql" | "postgres" | "postgresql" => Flavor::Postgresql,
            "sqlite" | "sqlite3" => Flavor::Sqlite,
            "ansi" => Flavor::Ansi,
            other => {
                log::debug!("unrecognized SQL dialect `{other}`; falling back to ANSI");
                Flavor::Ansi
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Mysql => "mysql",
            Flavor::Postgresql => "postgresql",
            Flavor::Sqlite => "sqlite",
            Flavor::Ansi => "ansi",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Flavor {
    fn serialize<S: SerdeSerializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Flavor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Flavor, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Flavor::from_driver(&name))
    }
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }

    pub fn ansi() -> Serializer {
        Serializer::new(Flavor::Ansi)
    }

    /// Serializer for the flavor a driver name resolves to.
    pub fn for_driver(name: &str) -> Serializer {
        Serializer::new(Flavor::from_driver(name))
    }
}
