use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which half of the globe the calendar is read from.
///
/// The hemisphere decides which calendar months belong to which season. It
/// defaults to northern.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl Hemisphere {
    pub const ALL: [Hemisphere; 2] = [Hemisphere::Northern, Hemisphere::Southern];

    pub fn as_str(self) -> &'static str {
        match self {
            Hemisphere::Northern => "northern",
            Hemisphere::Southern => "southern",
        }
    }

    pub fn is_northern(self) -> bool {
        matches!(self, Hemisphere::Northern)
    }

    pub fn is_southern(self) -> bool {
        matches!(self, Hemisphere::Southern)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Hemisphere> {
        match s.trim().to_ascii_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Hemisphere::Northern),
            "southern" | "south" | "s" => Ok(Hemisphere::Southern),
            _ => crate::bail!("unknown hemisphere `{s}`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("North".parse::<Hemisphere>().unwrap(), Hemisphere::Northern);
        assert_eq!(" s ".parse::<Hemisphere>().unwrap(), Hemisphere::Southern);
        assert_eq!(
            "equator".parse::<Hemisphere>().unwrap_err().to_string(),
            "unknown hemisphere `equator`"
        );
    }

    #[test]
    fn default_is_northern() {
        assert_eq!(Hemisphere::default(), Hemisphere::Northern);
    }
}
