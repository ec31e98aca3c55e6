use std::io::Write;

use log::debug;

use super::{
    detail::DetailLevel,
    error::{TrackError, required},
    genre::Genre,
};

/// Represent a music track.
///
/// Identity fields are fixed at construction. Genre, artist and album
/// can be replaced any number of times afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: String,
    title: String,
    release_year: String,
    media_url: String,
    genre: Genre,
    artist: Option<ArtistInfo>,
    album: Option<AlbumInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInfo {
    name: String,
    alias: String,
    image_url: String,
}

impl ArtistInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumInfo {
    name: String,
    cover_url: String,
}

impl AlbumInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cover_url(&self) -> &str {
        &self.cover_url
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Track {
    /// Creates a track with no genre, artist or album.
    ///
    /// `None` for any argument is rejected; empty strings are fine.
    pub fn create<S: Into<String>>(
        id: Option<S>,
        title: Option<S>,
        release_year: Option<S>,
        media_url: Option<S>,
    ) -> Result<Self, TrackError> {
        let track = Self {
            id: required(id, "id")?,
            title: required(title, "title")?,
            release_year: required(release_year, "release year")?,
            media_url: required(media_url, "media url")?,
            genre: Genre::Undefined,
            artist: None,
            album: None,
        };
        debug!("created track {} ({})", track.id, track.title);
        Ok(track)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> &str {
        &self.release_year
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn artist(&self) -> Option<&ArtistInfo> {
        self.artist.as_ref()
    }

    pub fn album(&self) -> Option<&AlbumInfo> {
        self.album.as_ref()
    }

    pub fn set_genre(&mut self, genre: Option<Genre>) -> Result<(), TrackError> {
        let genre = genre.ok_or(TrackError::InvalidArgument("genre"))?;
        debug!("track {}: genre {} -> {}", self.id, self.genre, genre);
        self.genre = genre;
        Ok(())
    }

    /// Replaces the artist info. Nothing changes unless all three are present.
    pub fn set_artist<S: Into<String>>(
        &mut self,
        name: Option<S>,
        alias: Option<S>,
        image_url: Option<S>,
    ) -> Result<(), TrackError> {
        let artist = ArtistInfo {
            name: required(name, "artist name")?,
            alias: required(alias, "artist alias")?,
            image_url: required(image_url, "artist image url")?,
        };
        debug!("track {}: artist set to {:?}", self.id, artist.name);
        self.artist = Some(artist);
        Ok(())
    }

    /// Replaces the album info. Nothing changes unless both are present.
    pub fn set_album<S: Into<String>>(
        &mut self,
        name: Option<S>,
        cover_url: Option<S>,
    ) -> Result<(), TrackError> {
        let album = AlbumInfo {
            name: required(name, "album name")?,
            cover_url: required(cover_url, "album cover url")?,
        };
        debug!("track {}: album set to {:?}", self.id, album.name);
        self.album = Some(album);
        Ok(())
    }

    /// Formats the track as text lines for the given detail level
    pub fn lines(&self, level: DetailLevel) -> Vec<String> {
        let mut lines = vec![
            format!("song title: {}", self.title),
            format!("release year: {}", self.release_year),
        ];
        if self.genre.is_defined() {
            lines.push(format!("genre: {}", self.genre));
        }

        if level.includes_artist() {
            if let Some(artist) = &self.artist {
                if !is_blank(&artist.name) {
                    lines.push(format!("artist name: {}", artist.name));
                }
                if !is_blank(&artist.alias) {
                    lines.push(format!("artist also known as: {}", artist.alias));
                }
            }
        }

        if level.includes_album() {
            if let Some(album) = self.album.as_ref().filter(|a| !is_blank(&a.name)) {
                lines.push(format!("album title: {}", album.name));
            }
        }

        lines
    }

    /// Writes the formatted lines to `out`, one per line, then flushes it
    pub fn render<W: Write>(
        &self,
        level: Option<DetailLevel>,
        out: &mut W,
    ) -> Result<(), TrackError> {
        let level = level.ok_or(TrackError::InvalidArgument("detail level"))?;
        for line in self.lines(level) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}
