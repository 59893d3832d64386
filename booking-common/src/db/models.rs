//! Database models
//!
//! Plain records returned by the repository functions. `*Fields` structs hold
//! the editable attributes used for create and full-overwrite update.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFields {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueFields {
    /// Attach a stored id
    pub fn with_id(self, id: i64) -> Venue {
        Venue {
            id,
            name: self.name,
            genres: self.genres,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}

impl From<Venue> for VenueFields {
    fn from(v: Venue) -> Self {
        Self {
            name: v.name,
            genres: v.genres,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            website: v.website,
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFields {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl ArtistFields {
    /// Attach a stored id
    pub fn with_id(self, id: i64) -> Artist {
        Artist {
            id,
            name: self.name,
            genres: self.genres,
            city: self.city,
            state: self.state,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}

impl From<Artist> for ArtistFields {
    fn from(a: Artist) -> Self {
        Self {
            name: a.name,
            genres: a.genres,
            city: a.city,
            state: a.state,
            phone: a.phone,
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            website: a.website,
            seeking_talent: a.seeking_talent,
            seeking_description: a.seeking_description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show seen from one side (venue or artist), joined to the other side.
///
/// `counterpart_name` is `None` when the join found no row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterpartShowRow {
    pub show_id: i64,
    pub start_time: NaiveDateTime,
    pub counterpart_id: i64,
    pub counterpart_name: Option<String>,
    pub counterpart_image_link: Option<String>,
}

/// A show joined to both its venue and its artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListingRow {
    pub show_id: i64,
    pub start_time: NaiveDateTime,
    pub venue_id: i64,
    pub venue_name: Option<String>,
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
}
