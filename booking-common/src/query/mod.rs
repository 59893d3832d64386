//! Query/aggregation layer
//!
//! Pure functions over rows already loaded from the record store. Anything
//! time-dependent takes `now` explicitly.

pub mod areas;
pub mod detail;
pub mod search;
pub mod shows;

pub use areas::{group_venues_by_area, Area, AreaVenue};
pub use detail::{artist_detail, venue_detail, ArtistDetail, VenueDetail};
pub use search::{search_artists, search_venues, SearchMatch, SearchResults};
pub use shows::{
    count_upcoming, is_upcoming, partition_artist_shows, partition_venue_shows, resolve_listings,
    ShowListingView, ShowSplit, ShowSummary,
};
