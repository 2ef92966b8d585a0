//! Car Game Core
//!
//! Platform-agnostic pieces of the car game front-end: backend endpoint
//! configuration, the wire model served by the backend, and the error
//! reporting contract shared by every view. Nothing in this crate touches the
//! browser, so all of it is testable natively.

pub mod config;
pub mod endpoints;
pub mod errors;
pub mod format;
pub mod models;
pub mod response;

pub use config::{ApiConfig, ConfigError, configured_base_url};
pub use endpoints::Endpoint;
pub use errors::{ErrorList, ErrorReporter, FALLBACK_ERROR};
pub use format::format_date;
pub use models::{
    CarCommand, CarDto, CarInGame, CarMoveEventDto, CarMoveType, CarMovementsFilter, CarStatusDto,
    CarType, CommandError, Direction, GameDto, GameMapDto, GameStatus, GameStatusFilter, NewCar,
    NewGame, RunningGameDto, WallDto, parse_game_id, validate_map_name,
};
pub use response::{ApiError, ApiResponse, Envelope, ErrorDto};
