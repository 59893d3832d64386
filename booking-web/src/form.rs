//! Form decoding
//!
//! Bodies are decoded into ordered `(name, value)` pairs so repeated fields
//! (multi-select genres) survive. Validation is presence-only.

use booking_common::db::models::{ArtistFields, NewShow, VenueFields};
use booking_common::time::parse_start_time;
use booking_common::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FormFields {
    /// First value for `name`, untouched
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed value, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Trimmed value that must be present and non-blank
    pub fn require(&self, name: &str) -> Result<String> {
        let value = self.text(name);
        if value.is_empty() {
            return Err(Error::InvalidInput(format!("{} is required", name)));
        }
        Ok(value)
    }

    /// Every non-blank value for a repeated field
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checkbox semantics: present and not blank, "false" or "off"
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name).map(|v| v.trim().to_ascii_lowercase()) {
            Some(value) => !matches!(value.as_str(), "" | "false" | "off"),
            None => false,
        }
    }

    fn id(&self, name: &str) -> Result<i64> {
        let raw = self.require(name)?;
        raw.parse::<i64>()
            .map_err(|_| Error::InvalidInput(format!("{} must be a number, got {:?}", name, raw)))
    }
}

pub fn venue_fields(form: &FormFields) -> Result<VenueFields> {
    Ok(VenueFields {
        name: form.require("name")?,
        genres: form.all("genres"),
        city: form.require("city")?,
        state: form.require("state")?,
        address: form.require("address")?,
        phone: form.text("phone"),
        image_link: form.text("image_link"),
        facebook_link: form.text("facebook_link"),
        website: form.text("website"),
        seeking_talent: form.flag("seeking_talent"),
        seeking_description: form.text("seeking_description"),
    })
}

pub fn artist_fields(form: &FormFields) -> Result<ArtistFields> {
    Ok(ArtistFields {
        name: form.require("name")?,
        genres: form.all("genres"),
        city: form.require("city")?,
        state: form.require("state")?,
        phone: form.text("phone"),
        image_link: form.text("image_link"),
        facebook_link: form.text("facebook_link"),
        website: form.text("website"),
        seeking_talent: form.flag("seeking_talent"),
        seeking_description: form.text("seeking_description"),
    })
}

pub fn new_show(form: &FormFields) -> Result<NewShow> {
    let raw_time = form.require("start_time")?;
    let start_time = parse_start_time(&raw_time)
        .ok_or_else(|| Error::InvalidInput(format!("start_time {:?} is not a timestamp", raw_time)))?;

    Ok(NewShow {
        venue_id: form.id("venue_id")?,
        artist_id: form.id("artist_id")?,
        start_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_venue_form_with_repeated_genres() {
        let fields = venue_fields(&form(&[
            ("name", " The Musical Hop "),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("genres", ""),
            ("seeking_talent", "y"),
        ]))
        .unwrap();

        assert_eq!(fields.name, "The Musical Hop");
        assert_eq!(fields.genres, vec!["Jazz", "Reggae"]);
        assert!(fields.seeking_talent);
        assert_eq!(fields.phone, "");
    }

    #[test]
    fn test_missing_required_field() {
        let err = venue_fields(&form(&[("name", "X"), ("city", "Y"), ("state", "CA")])).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
        assert!(err.to_string().contains("address"));

        let err = artist_fields(&form(&[("name", "   "), ("city", "Y"), ("state", "CA")])).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_checkbox_values() {
        assert!(!form(&[]).flag("seeking_talent"));
        assert!(!form(&[("seeking_talent", "off")]).flag("seeking_talent"));
        assert!(!form(&[("seeking_talent", "False")]).flag("seeking_talent"));
        assert!(form(&[("seeking_talent", "on")]).flag("seeking_talent"));
        assert!(form(&[("seeking_talent", "true")]).flag("seeking_talent"));
        assert!(!form(&[("seeking_talent", " OFF ")]).flag("seeking_talent"));
        assert!(!form(&[("seeking_talent", "")]).flag("seeking_talent"));
        assert!(form(&[("seeking_talent", "y")]).flag("seeking_talent"));
        assert!(form(&[("seeking_talent", "no")]).flag("seeking_talent"));
    }

    #[test]
    fn test_new_show_parsing() {
        let show = new_show(&form(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01T20:00"),
        ]))
        .unwrap();

        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time.to_string(), "2035-04-01 20:00:00");
    }

    #[test]
    fn test_new_show_rejects_bad_values() {
        let err = new_show(&form(&[
            ("artist_id", "four"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("artist_id"));

        let err = new_show(&form(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "next friday"),
        ]))
        .unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let f = form(&[("search_term", " Hop")]);
        assert_eq!(f.get("search_term"), Some(" Hop"));
        assert_eq!(f.text("search_term"), "Hop");
    }
}
