use std::{fmt::Display, str::FromStr};

use serde::Deserialize;

use super::error::{ParseLabelError, normalize_label};

/// How much of a track's metadata gets rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailLevel {
    SongOnly,
    WithArtist,
    WithAlbum,
    #[default]
    FullDetails,
}

impl DetailLevel {
    pub const ALL: [DetailLevel; 4] = [
        DetailLevel::SongOnly,
        DetailLevel::WithArtist,
        DetailLevel::WithAlbum,
        DetailLevel::FullDetails,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailLevel::SongOnly => "SONG_ONLY",
            DetailLevel::WithArtist => "WITH_ARTIST",
            DetailLevel::WithAlbum => "WITH_ALBUM",
            DetailLevel::FullDetails => "FULL_DETAILS",
        }
    }

    pub fn includes_artist(&self) -> bool {
        matches!(self, DetailLevel::WithArtist | DetailLevel::FullDetails)
    }

    pub fn includes_album(&self) -> bool {
        matches!(self, DetailLevel::WithAlbum | DetailLevel::FullDetails)
    }
}

impl Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DetailLevel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        DetailLevel::ALL
            .into_iter()
            .find(|l| l.label() == normalized)
            .ok_or_else(|| ParseLabelError {
                kind: "detail level",
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_selection() {
        let blocks: Vec<(bool, bool)> = DetailLevel::ALL
            .iter()
            .map(|l| (l.includes_artist(), l.includes_album()))
            .collect();

        assert_eq!(
            blocks,
            vec![(false, false), (true, false), (false, true), (true, true)]
        );
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("full-details".parse::<DetailLevel>(), Ok(DetailLevel::FullDetails));
        assert_eq!("SONG_ONLY".parse::<DetailLevel>(), Ok(DetailLevel::SongOnly));
        assert!("everything".parse::<DetailLevel>().is_err());
    }
}
