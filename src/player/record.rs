use serde::{Deserialize, Serialize};

pub type PlayerId = u64;

/// A single roster entry as stored in the data file.
///
/// Field order matters: serde writes keys in declaration order, which keeps
/// the persisted layout `Player ID, Name, Country, Role, Team`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player ID")]
    pub id: PlayerId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Team")]
    pub team: String,
}

impl PlayerRecord {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        country: impl Into<String>,
        role: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        PlayerRecord {
            id,
            name: name.into(),
            country: country.into(),
            role: role.into(),
            team: team.into(),
        }
    }

    /// A record carrying only the name; country, role and team are blank.
    pub fn name_only(id: PlayerId, name: impl Into<String>) -> Self {
        PlayerRecord::new(id, name, "", "", "")
    }
}
