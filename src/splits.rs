//! Training Split Selector
//!
//! Picks one of four fixed weekly templates from the athlete's available
//! days, goal and experience level. The templates themselves are content:
//! they live in `content/split_templates.json` and are parsed once into a
//! [`SplitCatalog`].
//!
//! Decision order (first match wins):
//! - 3 days                -> Full Body
//! - 4 days                -> Upper/Lower
//! - 5 days + Hypertrophy  -> Bro Split
//! - anything else         -> Push/Pull/Legs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

const EMBEDDED_TEMPLATES: &str = include_str!("../content/split_templates.json");

// ---------------------------------------------------------------------------
/// Inputs: days, goal, level
// ---------------------------------------------------------------------------

/// Training days per week, restricted to the values the selector offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub const SUPPORTED: [u8; 4] = [3, 4, 5, 6];

    pub fn new(days: u8) -> Result<Self, SplitError> {
        if Self::SUPPORTED.contains(&days) {
            Ok(Self(days))
        } else {
            Err(SplitError::UnsupportedDays(days))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DaysPerWeek {
    type Error = SplitError;
    fn try_from(days: u8) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<DaysPerWeek> for u8 {
    fn from(days: DaysPerWeek) -> Self {
        days.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Mixed,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Strength, Goal::Hypertrophy, Goal::Mixed];
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Hypertrophy => write!(f, "hypertrophy"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Accepts the English names and the app's Spanish option labels
impl std::str::FromStr for Goal {
    type Err = SplitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "fuerza" => Ok(Self::Strength),
            "hypertrophy" | "hipertrofia" => Ok(Self::Hypertrophy),
            "mixed" | "mixto" => Ok(Self::Mixed),
            _ => Err(SplitError::UnknownGoal(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = SplitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "principiante" => Ok(Self::Beginner),
            "intermediate" | "intermedio" => Ok(Self::Intermediate),
            "advanced" | "avanzado" => Ok(Self::Advanced),
            _ => Err(SplitError::UnknownLevel(s.to_string())),
        }
    }
}

/// Form state as the selector screen holds it: every field may be unset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitRequest {
    pub days: Option<u8>,
    pub goal: Option<String>,
    pub level: Option<String>,
}

/// A fully validated selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSelectionInput {
    pub days_per_week: DaysPerWeek,
    pub goal: Goal,
    pub level: Level,
}

impl SplitRequest {
    pub fn validate(&self) -> Result<SplitSelectionInput, SplitError> {
        let (days, goal, level) = match (&self.days, &self.goal, &self.level) {
            (Some(d), Some(g), Some(l)) => (*d, g, l),
            _ => return Err(SplitError::Incomplete),
        };

        Ok(SplitSelectionInput {
            days_per_week: DaysPerWeek::new(days)?,
            goal: goal.parse()?,
            level: level.parse()?,
        })
    }
}

// ---------------------------------------------------------------------------
/// Templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    PushPullLegs,
    UpperLower,
    BroSplit,
    FullBody,
}

impl SplitKind {
    pub const ALL: [SplitKind; 4] = [
        SplitKind::PushPullLegs,
        SplitKind::UpperLower,
        SplitKind::BroSplit,
        SplitKind::FullBody,
    ];
}

impl std::fmt::Display for SplitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PushPullLegs => write!(f, "push_pull_legs"),
            Self::UpperLower => write!(f, "upper_lower"),
            Self::BroSplit => write!(f, "bro_split"),
            Self::FullBody => write!(f, "full_body"),
        }
    }
}

impl std::str::FromStr for SplitKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "push_pull_legs" => Ok(Self::PushPullLegs),
            "upper_lower" => Ok(Self::UpperLower),
            "bro_split" => Ok(Self::BroSplit),
            "full_body" => Ok(Self::FullBody),
            _ => Err(format!("Unknown split kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<String>,
    pub volume: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSplitTemplate {
    pub name: String,
    pub description: String,
    pub days_per_week: u8,
    pub level: String,
    pub goal: String,
    pub schedule: Vec<WorkoutDay>,
    pub rest_days: String,
    pub notes: Vec<String>,
}

// ---------------------------------------------------------------------------
/// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error("Select days, goal and level")]
    Incomplete,

    #[error("Unsupported training days per week: {0} (choose 3, 4, 5 or 6)")]
    UnsupportedDays(u8),

    #[error("Unknown goal: {0}")]
    UnknownGoal(String),

    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Split catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse split templates: {0}")]
    Parse(String),

    #[error("Split template missing from catalog: {0}")]
    MissingTemplate(SplitKind),

    #[error("Template {kind} declares {days} days but schedules {scheduled}")]
    ScheduleMismatch {
        kind: SplitKind,
        days: u8,
        scheduled: usize,
    },
}

impl serde::Serialize for SplitError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl serde::Serialize for CatalogError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ---------------------------------------------------------------------------
/// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SplitCatalog {
    templates: HashMap<SplitKind, TrainingSplitTemplate>,
}

impl SplitCatalog {
    /// Parse and validate a catalog document keyed by split kind
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, TrainingSplitTemplate> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut templates = HashMap::new();
        for (key, template) in raw {
            let kind = key.parse::<SplitKind>().map_err(CatalogError::Parse)?;
            templates.insert(kind, template);
        }

        for kind in SplitKind::ALL {
            let template = templates
                .get(&kind)
                .ok_or(CatalogError::MissingTemplate(kind))?;
            if template.schedule.len() != template.days_per_week as usize {
                return Err(CatalogError::ScheduleMismatch {
                    kind,
                    days: template.days_per_week,
                    scheduled: template.schedule.len(),
                });
            }
        }

        Ok(Self { templates })
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<&'static SplitCatalog, CatalogError> {
        static CATALOG: OnceLock<Result<SplitCatalog, CatalogError>> = OnceLock::new();
        CATALOG
            .get_or_init(|| {
                let catalog = SplitCatalog::from_json(EMBEDDED_TEMPLATES);
                match &catalog {
                    Ok(c) => tracing::debug!(templates = c.templates.len(), "split catalog loaded"),
                    Err(e) => tracing::warn!(error = %e, "split catalog failed to load"),
                }
                catalog
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn get(&self, kind: SplitKind) -> Result<&TrainingSplitTemplate, CatalogError> {
        self.templates
            .get(&kind)
            .ok_or(CatalogError::MissingTemplate(kind))
    }

    pub fn select(
        &self,
        days_per_week: DaysPerWeek,
        goal: Goal,
        level: Level,
    ) -> Result<&TrainingSplitTemplate, CatalogError> {
        self.get(select_split_kind(days_per_week, goal, level))
    }
}

// ---------------------------------------------------------------------------
/// Selection
// ---------------------------------------------------------------------------

/// Priority chain over days and goal. `level` is accepted but does not
/// change the outcome.
pub fn select_split_kind(days_per_week: DaysPerWeek, goal: Goal, level: Level) -> SplitKind {
    let kind = match (days_per_week.get(), goal) {
        (3, _) => SplitKind::FullBody,
        (4, _) => SplitKind::UpperLower,
        (5, Goal::Hypertrophy) => SplitKind::BroSplit,
        _ => SplitKind::PushPullLegs,
    };
    tracing::debug!(days = days_per_week.get(), %goal, %level, %kind, "split selected");
    kind
}

/// Select a template from the embedded catalog
pub fn select_split(
    days_per_week: DaysPerWeek,
    goal: Goal,
    level: Level,
) -> Result<&'static TrainingSplitTemplate, CatalogError> {
    SplitCatalog::embedded()?.select(days_per_week, goal, level)
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
