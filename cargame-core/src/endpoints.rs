//! Backend endpoint catalogue.
//!
//! Every endpoint lives below `/api`. Segments are kept unencoded here; the
//! URL builder in [`crate::config::ApiConfig::url_for`] percent-encodes them.

use crate::models::{CarCommand, CarMovementsFilter, GameStatusFilter};

const API: &str = "api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Maps,
    Map { id: i64 },
    Cars,
    Car { name: String },
    CarRepair { name: String },
    CarCommand { name: String, command: CarCommand },
    CarMovements(CarMovementsFilter),
    Games { status: Option<GameStatusFilter> },
    Game { id: i64 },
    GameCars { id: i64 },
    GameCar { id: i64, name: String },
    RunningGame { id: i64 },
}

impl Endpoint {
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        let tail: Vec<String> = match self {
            Self::Maps => vec!["gamemaps".into()],
            Self::Map { id } => vec!["gamemaps".into(), id.to_string()],
            Self::Cars => vec!["cars".into()],
            Self::Car { name } => vec!["cars".into(), name.clone()],
            Self::CarRepair { name } => vec!["cars".into(), name.clone(), "repair".into()],
            Self::CarCommand { name, command } => {
                vec!["cars".into(), name.clone(), command.action().into()]
            }
            Self::CarMovements(_) => vec!["cars".into(), "movements".into()],
            Self::Games { .. } => vec!["games".into()],
            Self::Game { id } => vec!["games".into(), id.to_string()],
            Self::GameCars { id } => vec!["games".into(), id.to_string(), "cars".into()],
            Self::GameCar { id, name } => {
                vec!["games".into(), id.to_string(), "cars".into(), name.clone()]
            }
            Self::RunningGame { id } => vec!["run".into(), id.to_string()],
        };
        let mut segments = Vec::with_capacity(tail.len() + 1);
        segments.push(API.to_string());
        segments.extend(tail);
        segments
    }

    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::CarMovements(filter) => filter.query(),
            Self::Games {
                status: Some(status),
            } => vec![("status", status.as_query().to_string())],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn url(endpoint: &Endpoint) -> String {
        ApiConfig::new("http://localhost:8080")
            .unwrap()
            .url_for(endpoint)
            .to_string()
    }

    #[test]
    fn resource_paths_follow_backend_layout() {
        assert_eq!(url(&Endpoint::Maps), "http://localhost:8080/api/gamemaps");
        assert_eq!(
            url(&Endpoint::Map { id: 5 }),
            "http://localhost:8080/api/gamemaps/5"
        );
        assert_eq!(
            url(&Endpoint::GameCar {
                id: 3,
                name: "red".into()
            }),
            "http://localhost:8080/api/games/3/cars/red"
        );
        assert_eq!(
            url(&Endpoint::RunningGame { id: 7 }),
            "http://localhost:8080/api/run/7"
        );
        assert_eq!(
            url(&Endpoint::CarRepair { name: "red".into() }),
            "http://localhost:8080/api/cars/red/repair"
        );
    }

    #[test]
    fn car_names_are_percent_encoded() {
        assert_eq!(
            url(&Endpoint::CarCommand {
                name: "big red/1".into(),
                command: CarCommand::TurnLeft,
            }),
            "http://localhost:8080/api/cars/big%20red%2F1/left"
        );
    }

    #[test]
    fn games_status_filter_becomes_query() {
        assert_eq!(
            url(&Endpoint::Games { status: None }),
            "http://localhost:8080/api/games"
        );
        assert_eq!(
            url(&Endpoint::Games {
                status: Some(GameStatusFilter::Running)
            }),
            "http://localhost:8080/api/games?status=RUNNING"
        );
    }

    #[test]
    fn movements_filter_becomes_repeated_query() {
        let filter = CarMovementsFilter {
            game_ids: vec![1, 2],
            map_names: vec!["oval".into()],
            car_names: vec!["red".into()],
            movements_limit: Some(5),
        };
        assert_eq!(
            url(&Endpoint::CarMovements(filter)),
            "http://localhost:8080/api/cars/movements?gameIDs=1&gameIDs=2&mapNames=oval&carNames=red&movementsLimit=5"
        );
    }
}
