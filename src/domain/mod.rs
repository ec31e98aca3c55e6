pub mod detail;
pub mod error;
pub mod genre;
pub mod track;

pub use detail::DetailLevel;
pub use error::{ParseLabelError, TrackError};
pub use genre::Genre;
pub use track::{AlbumInfo, ArtistInfo, Track};
