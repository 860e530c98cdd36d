use std::{convert::Infallible, fmt, slice, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::merge::Merge;

/// A field that accepts either a single value or a list of values.
///
/// Generation always treats the field as a list; a bare value behaves like a
/// one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
  Many(Vec<T>),
  One(T),
}

impl<T> OneOrMany<T> {
  /// View the value as a list.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    match self {
      Self::One(item) => slice::from_ref(item),
      Self::Many(items) => items.as_slice(),
    }
  }

  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.as_slice().len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.as_slice().is_empty()
  }
}

impl<T> Default for OneOrMany<T> {
  fn default() -> Self {
    Self::Many(Vec::new())
  }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
  type IntoIter = slice::Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> From<T> for OneOrMany<T> {
  fn from(item: T) -> Self {
    Self::One(item)
  }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
  fn from(items: Vec<T>) -> Self {
    Self::Many(items)
  }
}

impl From<&str> for OneOrMany<String> {
  fn from(item: &str) -> Self {
    Self::One(item.to_owned())
  }
}

impl From<Vec<&str>> for OneOrMany<String> {
  fn from(items: Vec<&str>) -> Self {
    Self::Many(items.into_iter().map(str::to_owned).collect())
  }
}

impl<T: FromStr> FromStr for OneOrMany<T> {
  type Err = T::Err;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse().map(Self::One)
  }
}

impl<T: Merge> Merge for OneOrMany<T> {
  fn merge(&mut self, other: Self) {
    match (self, other) {
      (Self::One(current), Self::One(incoming)) => current.merge(incoming),
      // Lists are replaced, never combined element-wise
      (current, incoming) => *current = incoming,
    }
  }
}

/// A media reference given either as a bare URL or as a structured object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Media<T> {
  Url(String),
  Object(T),
}

impl<T> From<&str> for Media<T> {
  fn from(url: &str) -> Self {
    Self::Url(url.to_owned())
  }
}

impl<T> From<String> for Media<T> {
  fn from(url: String) -> Self {
    Self::Url(url)
  }
}

impl<T> FromStr for Media<T> {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::Url(s.to_owned()))
  }
}

impl<T: Merge> Merge for Media<T> {
  fn merge(&mut self, other: Self) {
    match (self, other) {
      (Self::Object(current), Self::Object(incoming)) => {
        current.merge(incoming);
      },
      (current, incoming) => *current = incoming,
    }
  }
}

/// Declares a string-backed enumeration of well-known values.
///
/// Unknown strings are kept in an `Other` variant so that configuration is
/// never rejected for an unexpected value.
macro_rules! string_enum {
  (
    $(#[$meta:meta])*
    $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(from = "String", into = "String")]
    pub enum $name {
      $( $(#[$vmeta])* $variant, )+
      /// A value outside the known set, emitted as-is.
      Other(String),
    }

    impl $name {
      #[must_use]
      pub fn as_str(&self) -> &str {
        match self {
          $( Self::$variant => $value, )+
          Self::Other(value) => value,
        }
      }
    }

    impl From<String> for $name {
      fn from(value: String) -> Self {
        match value.as_str() {
          $( $value => Self::$variant, )+
          _ => Self::Other(value),
        }
      }
    }

    impl From<&str> for $name {
      fn from(value: &str) -> Self {
        Self::from(value.to_owned())
      }
    }

    impl From<$name> for String {
      fn from(value: $name) -> Self {
        match value {
          $name::Other(other) => other,
          known => known.as_str().to_owned(),
        }
      }
    }

    impl FromStr for $name {
      type Err = Infallible;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl Merge for $name {
      fn merge(&mut self, other: Self) {
        *self = other;
      }
    }
  };
}

string_enum! {
  /// Open Graph object type (`og:type`).
  OgType {
    Website => "website",
    Article => "article",
    Book => "book",
    Profile => "profile",
    MusicSong => "music.song",
    MusicAlbum => "music.album",
    MusicPlaylist => "music.playlist",
    MusicRadioStation => "music.radio_station",
    VideoMovie => "video.movie",
    VideoEpisode => "video.episode",
    VideoTvShow => "video.tv_show",
    VideoOther => "video.other",
  }
}

string_enum! {
  /// Word that appears before the title in a sentence (`og:determiner`).
  Determiner {
    A => "a",
    An => "an",
    The => "the",
    Auto => "auto",
    /// Explicitly empty; produces no tag.
    Blank => "",
  }
}

string_enum! {
  /// Twitter card layout.
  TwitterCard {
    Summary => "summary",
    SummaryLargeImage => "summary_large_image",
    App => "app",
    Player => "player",
  }
}

string_enum! {
  /// Largest image preview a crawler may show.
  MaxImagePreview {
    None => "none",
    Standard => "standard",
    Large => "large",
  }
}
