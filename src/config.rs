use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::domain::{DetailLevel, Genre, Track, TrackError};

/// A track description file
#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub output: OutputConfig,
    pub track: TrackSection,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read track file {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse track file TOML")
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub detail_level: DetailLevel,
}

/// Every field is optional here so that a missing key reaches the
/// domain as an absent argument instead of a parse error.
#[derive(Debug, Deserialize, Default)]
pub struct TrackSection {
    pub id: Option<String>,
    pub title: Option<String>,
    pub release_year: Option<String>,
    pub media_url: Option<String>,
    pub genre: Option<Genre>,
    pub artist: Option<ArtistSection>,
    pub album: Option<AlbumSection>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ArtistSection {
    pub name: Option<String>,
    pub alias: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AlbumSection {
    pub name: Option<String>,
    pub cover_url: Option<String>,
}

impl TrackSection {
    pub fn build(self) -> Result<Track, TrackError> {
        let mut track = Track::create(self.id, self.title, self.release_year, self.media_url)?;
        if let Some(genre) = self.genre {
            track.set_genre(Some(genre))?;
        }
        if let Some(artist) = self.artist {
            track.set_artist(artist.name, artist.alias, artist.image_url)?;
        }
        if let Some(album) = self.album {
            track.set_album(album.name, album.cover_url)?;
        }
        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_TRACK: &str = r#"
version = 1

[output]
detail_level = "WITH_ARTIST"

[track]
id = "1"
title = "My Song"
release_year = "2024"
media_url = "http://example.com/song.mp3"
genre = "POP"

[track.artist]
name = "John Doe"
alias = "JD"
image_url = "http://example.com/jd.jpg"

[track.album]
name = "First Album"
cover_url = "http://example.com/album.jpg"
"#;

    #[test]
    fn test_parse_track_toml() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str(FULL_TRACK)?;

        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.output.detail_level, DetailLevel::WithArtist);
        assert_eq!(cfg.track.genre, Some(Genre::Pop));

        let track = cfg.track.build()?;
        assert_eq!(track.title(), "My Song");
        assert_eq!(track.artist().map(|a| a.alias()), Some("JD"));
        assert_eq!(
            track.album().map(|a| a.cover_url()),
            Some("http://example.com/album.jpg")
        );

        Ok(())
    }

    #[test]
    fn test_minimal_track_toml() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[track]
id = ""
title = "Untitled"
release_year = ""
media_url = ""
"#;

        let cfg: Config = toml::from_str(toml_str)?;
        assert_eq!(cfg.output.detail_level, DetailLevel::FullDetails);

        let track = cfg.track.build()?;
        assert_eq!(track.genre(), Genre::Undefined);
        assert!(track.artist().is_none());
        assert!(track.album().is_none());

        Ok(())
    }

    #[test]
    fn test_missing_field_is_invalid_argument() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[track]
id = "1"
title = "My Song"
release_year = "2024"
media_url = "song.mp3"

[track.artist]
name = "John Doe"
image_url = "jd.jpg"
"#;

        let cfg: Config = toml::from_str(toml_str)?;
        let err = cfg.track.build().unwrap_err();

        assert!(matches!(err, TrackError::InvalidArgument("artist alias")));
        Ok(())
    }

    #[test]
    fn test_unknown_genre_fails_to_parse() {
        let toml_str = r#"
version = 1

[track]
genre = "POLKA"
"#;

        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(FULL_TRACK.as_bytes())?;

        let cfg = Config::load(file.path())?;

        assert_eq!(cfg.track.id.as_deref(), Some("1"));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();

        assert!(err.to_string().starts_with("Failed to read track file"));
    }
}
