use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumString;

/// How a move becomes available to a species.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Tutor,
    Egg,
    /// Legacy method from the console spin-off era.
    StadiumSurfingPikachu,
    LightBallEgg,
    ColosseumPurification,
    XdShadow,
    XdPurification,
    FormChange,
    ZygardeCube,
    /// Anything upstream adds that is not known here.
    #[strum(default)]
    Other(String),
}

impl LearnMethod {
    pub fn as_str(&self) -> &str {
        match self {
            LearnMethod::LevelUp => "level-up",
            LearnMethod::Machine => "machine",
            LearnMethod::Tutor => "tutor",
            LearnMethod::Egg => "egg",
            LearnMethod::StadiumSurfingPikachu => "stadium-surfing-pikachu",
            LearnMethod::LightBallEgg => "light-ball-egg",
            LearnMethod::ColosseumPurification => "colosseum-purification",
            LearnMethod::XdShadow => "xd-shadow",
            LearnMethod::XdPurification => "xd-purification",
            LearnMethod::FormChange => "form-change",
            LearnMethod::ZygardeCube => "zygarde-cube",
            LearnMethod::Other(name) => name,
        }
    }

    /// Group order on a move page. Lower sorts first.
    pub fn display_priority(&self) -> u8 {
        match self {
            LearnMethod::LevelUp => 0,
            LearnMethod::Machine => 1,
            LearnMethod::Tutor => 2,
            LearnMethod::Egg => 3,
            LearnMethod::StadiumSurfingPikachu => 4,
            LearnMethod::Other(_) => 6,
            _ => 5,
        }
    }
}

impl From<String> for LearnMethod {
    fn from(value: String) -> Self {
        match LearnMethod::from_str(&value) {
            Ok(method) => method,
            Err(_) => LearnMethod::Other(value),
        }
    }
}

impl From<LearnMethod> for String {
    fn from(method: LearnMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for LearnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MachineKind {
    Tm,
    Hm,
    Tr,
}

/// Machine item ordinal, e.g. `tm01` or `hm05`. Orders TMs, then HMs, then TRs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MachineId {
    pub kind: MachineKind,
    pub number: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMachineName(pub String);

impl fmt::Display for InvalidMachineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid machine item name: {}", self.0)
    }
}

impl std::error::Error for InvalidMachineName {}

impl FromStr for MachineId {
    type Err = InvalidMachineName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let (kind, digits) = if let Some(rest) = lower.strip_prefix("tm") {
            (MachineKind::Tm, rest)
        } else if let Some(rest) = lower.strip_prefix("hm") {
            (MachineKind::Hm, rest)
        } else if let Some(rest) = lower.strip_prefix("tr") {
            (MachineKind::Tr, rest)
        } else {
            return Err(InvalidMachineName(s.to_string()));
        };

        let number = digits
            .parse::<u16>()
            .map_err(|_| InvalidMachineName(s.to_string()))?;
        Ok(MachineId { kind, number })
    }
}

impl TryFrom<String> for MachineId {
    type Error = InvalidMachineName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MachineId> for String {
    fn from(id: MachineId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            MachineKind::Tm => "tm",
            MachineKind::Hm => "hm",
            MachineKind::Tr => "tr",
        };
        write!(f, "{}{:02}", prefix, self.number)
    }
}

/// How a level value should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelGate {
    /// Learned on catch or hatch (upstream stores this as 0 or 1).
    Ungated,
    Level(u8),
}

/// One way a move is learnable in one version group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLearnEntry {
    #[serde(rename = "move")]
    pub move_name: String,
    pub method: LearnMethod,
    #[serde(default)]
    pub level: u8,
    pub version_group: String,
    #[serde(default)]
    pub machine: Option<MachineId>,
}

impl MoveLearnEntry {
    pub fn new(move_name: &str, method: LearnMethod, level: u8, version_group: &str) -> Self {
        Self {
            move_name: move_name.to_string(),
            method,
            level,
            version_group: version_group.to_string(),
            machine: None,
        }
    }

    pub fn with_machine(mut self, machine: MachineId) -> Self {
        self.machine = Some(machine);
        self
    }

    pub fn level_gate(&self) -> LevelGate {
        match self.level {
            0 | 1 => LevelGate::Ungated,
            level => LevelGate::Level(level),
        }
    }
}
