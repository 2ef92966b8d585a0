use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Longest car name the backend accepts.
pub const MAX_CAR_NAME_LEN: usize = 256;

/// Client-side validation failures, checked before a request is sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{field} is required")]
    Blank { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    #[error("invalid game id `{0}`")]
    InvalidGameId(String),
    #[error("invalid number `{value}` in {field}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("fill in exactly one filter or all of them")]
    FilterCombination,
}

fn ensure_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), CommandError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CommandError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

fn ensure_name(field: &'static str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::Blank { field });
    }
    if value.chars().count() > MAX_CAR_NAME_LEN {
        return Err(CommandError::TooLong {
            field,
            max: MAX_CAR_NAME_LEN,
        });
    }
    Ok(())
}

/// Check the name a map is uploaded under, which is also the name games on it get.
///
/// # Errors
/// Returns [`CommandError::Blank`] for an empty or whitespace-only name.
pub fn validate_map_name(name: &str) -> Result<(), CommandError> {
    if name.trim().is_empty() {
        Err(CommandError::Blank { field: "map name" })
    } else {
        Ok(())
    }
}

/// Parse the `:id` segment of a game route.
///
/// # Errors
/// Returns [`CommandError::InvalidGameId`] for anything but a positive integer.
pub fn parse_game_id(raw: &str) -> Result<i64, CommandError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(CommandError::InvalidGameId(raw.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarType {
    #[default]
    Racer,
    MonsterTruck,
    #[serde(other)]
    Unknown,
}

impl CarType {
    /// Types a new car can be created with.
    pub const SELECTABLE: [Self; 2] = [Self::Racer, Self::MonsterTruck];

    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Racer => "RACER",
            Self::MonsterTruck => "MONSTER_TRUCK",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Racer => "Racer",
            Self::MonsterTruck => "Monster truck",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "RACER" => Self::Racer,
            "MONSTER_TRUCK" => Self::MonsterTruck,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
    #[serde(other)]
    Unknown,
}

impl Direction {
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::North => "↑",
            Self::South => "↓",
            Self::East => "→",
            Self::West => "←",
            Self::Unknown => "?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Running,
    Completed,
    #[serde(other)]
    Unknown,
}

impl GameStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Completed => "Completed",
            Self::Unknown => "Unknown",
        }
    }
}

/// `status` query parameter of the games listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatusFilter {
    Running,
    Completed,
}

impl GameStatusFilter {
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
        }
    }

    /// Inverse of [`GameStatusFilter::as_query`]; anything else means "all games".
    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "RUNNING" => Some(Self::Running),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarMoveType {
    Forward,
    TurnLeft,
    TurnRight,
    #[serde(other)]
    Unknown,
}

impl CarMoveType {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::TurnLeft => "Turn left",
            Self::TurnRight => "Turn right",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarStatusDto {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub reverting_from_history_in_progress: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub name: String,
    #[serde(rename = "type", default)]
    pub car_type: CarType,
    #[serde(default)]
    pub crashed: Option<bool>,
    #[serde(default)]
    pub in_game: Option<bool>,
    #[serde(default)]
    pub current_status: Option<CarStatusDto>,
}

impl CarDto {
    #[must_use]
    pub fn is_crashed(&self) -> bool {
        self.crashed.unwrap_or(false)
    }

    #[must_use]
    pub fn is_in_game(&self) -> bool {
        self.in_game.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallDto {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMapDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub walls: Vec<WallDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarMoveEventDto {
    #[serde(default)]
    pub car_id: Option<i64>,
    #[serde(default)]
    pub car_name: Option<String>,
    #[serde(default)]
    pub car_type: Option<String>,
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub event_type: Option<CarMoveType>,
    #[serde(default)]
    pub event_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub map: Option<GameMapDto>,
    #[serde(default)]
    pub status: Option<GameStatus>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    #[serde(default)]
    pub car_movements: Option<Vec<CarMoveEventDto>>,
    #[serde(default)]
    pub cars: Option<Vec<CarDto>>,
}

impl GameDto {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == Some(GameStatus::Running)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunningGameDto {
    #[serde(default)]
    pub cars: Vec<CarDto>,
}

/// Body of `POST /api/cars`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCar {
    pub name: String,
    #[serde(rename = "type")]
    pub car_type: CarType,
}

impl NewCar {
    /// # Errors
    /// Returns [`CommandError`] for a blank or over-long name.
    pub fn validate(&self) -> Result<(), CommandError> {
        ensure_name("car name", &self.name)
    }
}

/// Body of `POST /api/games`. The backend names a game after the map it runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGame {
    pub name: String,
}

impl NewGame {
    /// # Errors
    /// Returns [`CommandError::Blank`] when no map name is given.
    pub fn validate(&self) -> Result<(), CommandError> {
        validate_map_name(&self.name)
    }
}

/// Body of `POST /api/games/{id}/cars`: place a car at a starting position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarInGame {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl CarInGame {
    /// # Errors
    /// Returns [`CommandError`] for a bad name or coordinates below 1.
    pub fn validate(&self) -> Result<(), CommandError> {
        ensure_name("car name", &self.name)?;
        ensure_range("x", i64::from(self.x), 1, i64::from(i32::MAX))?;
        ensure_range("y", i64::from(self.y), 1, i64::from(i32::MAX))
    }
}

/// Commands accepted by `POST /api/cars/{name}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarCommand {
    Forward { distance: u8 },
    TurnLeft,
    TurnRight,
    Back { game_id: i64, moves: u32 },
}

impl CarCommand {
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Forward { .. } => "forward",
            Self::TurnLeft => "left",
            Self::TurnRight => "right",
            Self::Back { .. } => "back",
        }
    }

    /// # Errors
    /// Forward distance must be 1 or 2; history rewinds need a positive game
    /// id and at least one move.
    pub fn validate(self) -> Result<(), CommandError> {
        match self {
            Self::Forward { distance } => ensure_range("distance", i64::from(distance), 1, 2),
            Self::TurnLeft | Self::TurnRight => Ok(()),
            Self::Back { game_id, moves } => {
                ensure_range("game id", game_id, 1, i64::MAX)?;
                ensure_range("number of moves", i64::from(moves), 1, i64::from(u32::MAX))
            }
        }
    }

    /// JSON body for the command, if it carries one.
    #[must_use]
    pub fn body(self) -> Option<Value> {
        match self {
            Self::Forward { distance } => Some(json!({ "distance": distance })),
            Self::TurnLeft | Self::TurnRight => None,
            Self::Back { game_id, moves } => Some(json!({
                "gameId": game_id,
                "numberOfMoves": moves,
            })),
        }
    }
}

/// Query of `GET /api/cars/movements`.
///
/// The backend accepts either exactly one criterion or all four of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarMovementsFilter {
    pub game_ids: Vec<i64>,
    pub map_names: Vec<String>,
    pub car_names: Vec<String>,
    pub movements_limit: Option<u32>,
}

impl CarMovementsFilter {
    /// Build a filter from comma separated form inputs.
    ///
    /// # Errors
    /// Returns [`CommandError`] for unparsable numbers, a zero limit, or a
    /// combination of criteria the backend rejects.
    pub fn from_inputs(
        game_ids: &str,
        map_names: &str,
        car_names: &str,
        limit: &str,
    ) -> Result<Self, CommandError> {
        let game_ids = split_list(game_ids)
            .into_iter()
            .map(|value| {
                value
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidNumber {
                        field: "game ids",
                        value,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let limit = limit.trim();
        let movements_limit = if limit.is_empty() {
            None
        } else {
            let parsed = limit
                .parse::<u32>()
                .map_err(|_| CommandError::InvalidNumber {
                    field: "limit",
                    value: limit.to_string(),
                })?;
            ensure_range("limit", i64::from(parsed), 1, i64::from(i32::MAX))?;
            Some(parsed)
        };
        let filter = Self {
            game_ids,
            map_names: split_list(map_names),
            car_names: split_list(car_names),
            movements_limit,
        };
        filter.validate()?;
        Ok(filter)
    }

    fn criteria_set(&self) -> usize {
        [
            !self.game_ids.is_empty(),
            !self.map_names.is_empty(),
            !self.car_names.is_empty(),
            self.movements_limit.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// # Errors
    /// Returns [`CommandError::FilterCombination`] unless exactly one or all
    /// four criteria are set.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self.criteria_set() {
            1 | 4 => Ok(()),
            _ => Err(CommandError::FilterCombination),
        }
    }

    /// Query pairs with repeated keys for multi-valued criteria.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        pairs.extend(self.game_ids.iter().map(|id| ("gameIDs", id.to_string())));
        pairs.extend(self.map_names.iter().map(|name| ("mapNames", name.clone())));
        pairs.extend(self.car_names.iter().map(|name| ("carNames", name.clone())));
        if let Some(limit) = self.movements_limit {
            pairs.push(("movementsLimit", limit.to_string()));
        }
        pairs
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
