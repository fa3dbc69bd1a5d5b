use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of animal kinds the zoo keeps records for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    Lion,
    Elephant,
    Parrot,
    Giraffe,
    Penguin,
}

impl AnimalKind {
    /// All kinds in menu order
    pub const ALL: [AnimalKind; 5] = [
        AnimalKind::Lion,
        AnimalKind::Elephant,
        AnimalKind::Parrot,
        AnimalKind::Giraffe,
        AnimalKind::Penguin,
    ];

    /// Name used both for display and in the persisted `Type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalKind::Lion => "Lion",
            AnimalKind::Elephant => "Elephant",
            AnimalKind::Parrot => "Parrot",
            AnimalKind::Giraffe => "Giraffe",
            AnimalKind::Penguin => "Penguin",
        }
    }

    /// Menu selector code (1-5)
    pub fn menu_code(&self) -> u8 {
        match self {
            AnimalKind::Lion => 1,
            AnimalKind::Elephant => 2,
            AnimalKind::Parrot => 3,
            AnimalKind::Giraffe => 4,
            AnimalKind::Penguin => 5,
        }
    }

    /// Resolve a menu selector typed by the user
    pub fn from_menu_code(code: &str) -> Option<Self> {
        let code = code.trim().parse::<u8>().ok()?;
        Self::ALL.into_iter().find(|kind| kind.menu_code() == code)
    }

    /// Fixed phrase printed by the sounds menu
    pub fn sound(&self) -> &'static str {
        match self {
            AnimalKind::Lion => "Roar!",
            AnimalKind::Elephant => "Pawoo!",
            AnimalKind::Parrot => "Squawk!",
            AnimalKind::Giraffe => "Hmmm...",
            AnimalKind::Penguin => "Honk!",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalKind {
    type Err = String;

    /// Case-sensitive, matching the persisted `Type` column exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown animal kind: {}", s))
    }
}

/// Kind-specific payload of an animal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimalDetails {
    Lion,
    Elephant { trunk_length: f64 },
    Parrot { color: String },
    Giraffe { neck_length: f64 },
    Penguin { rank: String },
}

impl AnimalDetails {
    pub fn kind(&self) -> AnimalKind {
        match self {
            AnimalDetails::Lion => AnimalKind::Lion,
            AnimalDetails::Elephant { .. } => AnimalKind::Elephant,
            AnimalDetails::Parrot { .. } => AnimalKind::Parrot,
            AnimalDetails::Giraffe { .. } => AnimalKind::Giraffe,
            AnimalDetails::Penguin { .. } => AnimalKind::Penguin,
        }
    }

    /// Numeric property value, if this kind has one
    pub fn numeric_property(&self) -> Option<f64> {
        match self {
            AnimalDetails::Elephant { trunk_length } => Some(*trunk_length),
            AnimalDetails::Giraffe { neck_length } => Some(*neck_length),
            _ => None,
        }
    }

    /// Human-readable property suffix used by `AnimalRecord::describe`
    fn property_description(&self) -> String {
        match self {
            AnimalDetails::Lion => String::new(),
            AnimalDetails::Elephant { trunk_length } => format!(" Trunk: {}m", trunk_length),
            AnimalDetails::Parrot { color } => format!(" Color: {}", color),
            AnimalDetails::Giraffe { neck_length } => format!(" Neck: {}m", neck_length),
            AnimalDetails::Penguin { rank } => format!(" Rank: {}", rank),
        }
    }
}

/// One persisted animal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Assigned by the store on insert; 0 until then
    pub id: u32,
    pub name: String,
    /// Weight in kilograms, never negative
    pub weight: f64,
    pub details: AnimalDetails,
}

impl AnimalRecord {
    /// Build a record that has not been stored yet (placeholder id 0)
    pub fn new(name: impl Into<String>, weight: f64, details: AnimalDetails) -> Self {
        Self {
            id: 0,
            name: name.into(),
            weight,
            details,
        }
    }

    pub fn kind(&self) -> AnimalKind {
        self.details.kind()
    }

    /// Daily feeding requirement derived from kind and weight
    pub fn metric(&self) -> f64 {
        match self.details {
            AnimalDetails::Lion => self.weight * 0.05,
            AnimalDetails::Elephant { .. } => self.weight * 0.10,
            AnimalDetails::Parrot { .. } => 0.1,
            AnimalDetails::Giraffe { .. } => self.weight * 0.08,
            AnimalDetails::Penguin { .. } => self.weight * 0.15,
        }
    }

    /// e.g. `ID: 2 | Dumbo (Elephant) Trunk: 0.5m`
    pub fn describe(&self) -> String {
        format!(
            "ID: {} | {} ({}){}",
            self.id,
            self.name,
            self.kind(),
            self.details.property_description()
        )
    }

    pub fn sound_line(&self) -> String {
        format!("{} the {} says: {}", self.name, self.kind(), self.kind().sound())
    }
}

/// A login/password pair from the user store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    pub id: u32,
    pub login: String,
    pub password: String,
}

/// Aggregate figures over a non-empty animal collection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZooStatistics {
    pub count: usize,
    pub total_weight: f64,
    pub total_metric: f64,
    pub average_metric: f64,
}

impl ZooStatistics {
    /// Returns `None` for an empty collection
    pub fn from_animals(animals: &[AnimalRecord]) -> Option<Self> {
        if animals.is_empty() {
            return None;
        }

        let total_weight = animals.iter().map(|a| a.weight).sum::<f64>();
        let total_metric = animals.iter().map(AnimalRecord::metric).sum::<f64>();

        Some(Self {
            count: animals.len(),
            total_weight,
            total_metric,
            average_metric: total_metric / animals.len() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_metric_per_kind() {
        assert!(approx(AnimalRecord::new("Alex", 220.0, AnimalDetails::Lion).metric(), 11.0));
        assert!(approx(
            AnimalRecord::new("Dumbo", 200.0, AnimalDetails::Elephant { trunk_length: 0.5 }).metric(),
            20.0
        ));
        assert!(approx(
            AnimalRecord::new("Iago", 999.0, AnimalDetails::Parrot { color: "Red".into() }).metric(),
            0.1
        ));
        assert!(approx(
            AnimalRecord::new("Melman", 1200.0, AnimalDetails::Giraffe { neck_length: 2.8 }).metric(),
            96.0
        ));
        assert!(approx(
            AnimalRecord::new("Skipper", 15.0, AnimalDetails::Penguin { rank: "Captain".into() }).metric(),
            2.25
        ));
    }

    #[test]
    fn test_describe_includes_property() {
        let mut elephant = AnimalRecord::new("Dumbo", 200.0, AnimalDetails::Elephant { trunk_length: 0.5 });
        elephant.id = 2;
        assert_eq!(elephant.describe(), "ID: 2 | Dumbo (Elephant) Trunk: 0.5m");

        let mut lion = AnimalRecord::new("Alex", 220.0, AnimalDetails::Lion);
        lion.id = 1;
        assert_eq!(lion.describe(), "ID: 1 | Alex (Lion)");

        let penguin = AnimalRecord::new("Skipper", 15.0, AnimalDetails::Penguin { rank: "Captain".into() });
        assert_eq!(penguin.describe(), "ID: 0 | Skipper (Penguin) Rank: Captain");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Giraffe".parse::<AnimalKind>(), Ok(AnimalKind::Giraffe));
        assert!("giraffe".parse::<AnimalKind>().is_err());
        assert_eq!(AnimalKind::from_menu_code(" 3 "), Some(AnimalKind::Parrot));
        assert_eq!(AnimalKind::from_menu_code("6"), None);
        assert_eq!(AnimalKind::from_menu_code("x"), None);
    }

    #[test]
    fn test_statistics() {
        assert!(ZooStatistics::from_animals(&[]).is_none());

        let animals = vec![
            AnimalRecord::new("Alex", 220.0, AnimalDetails::Lion),
            AnimalRecord::new("Skipper", 15.0, AnimalDetails::Penguin { rank: "Captain".into() }),
        ];
        let stats = ZooStatistics::from_animals(&animals).unwrap();
        assert_eq!(stats.count, 2);
        assert!(approx(stats.total_weight, 235.0));
        assert!(approx(stats.total_metric, 13.25));
        assert!(approx(stats.average_metric, 6.625));
    }
}
