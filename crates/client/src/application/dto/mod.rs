mod requests;

pub use requests::{CharacterListResponse, CharacterPayload, HomeInfo, LevelUpRequest};
