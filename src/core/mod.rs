//! Core module containing the player model, validation and search engine

pub mod error;
pub mod filter;
pub mod level;
pub mod player;
pub mod query;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{ErrorResponse, InvalidField, PlayerError, PlayerResult};
pub use filter::{PlayerCriteria, PlayerFilter};
pub use level::Progress;
pub use player::{NewPlayer, Player, PlayerOrder, PlayerPayload, Profession, Race};
pub use query::{PageRequest, PlayerQuery};
pub use service::PlayerService;
pub use store::PlayerStore;
