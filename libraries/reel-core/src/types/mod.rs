mod credential;
mod ids;
mod playlist;

pub use credential::Credential;
pub use ids::{PlaylistId, UserId, VideoId};
pub use playlist::{Playlist, VideoStatus, Visibility};
