use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single customer review as decoded from a storefront feed, before
/// country tagging.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub date: DateTime<FixedOffset>,
    pub user_name: String,
    pub review: String,
    pub rating: u8,
}

impl Review {
    /// Tags the review with the storefront it was fetched from.
    pub fn tag(self, country: &str) -> ReviewRow {
        ReviewRow {
            date: self.date,
            user_name: self.user_name,
            review: self.review,
            rating: self.rating,
            country: country.to_owned(),
        }
    }
}

/// A country-tagged review, the unit of export.
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    #[serde(serialize_with = "serialize_rfc3339")]
    pub date: DateTime<FixedOffset>,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub review: String,
    pub rating: u8,
    pub country: String,
}

// Matches the XLSX writer, which formats dates with `to_rfc3339` (zero
// offsets render as `+00:00`, not `Z`).
fn serialize_rfc3339<S: serde::Serializer>(
    date: &DateTime<FixedOffset>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339())
}

// Feed shapes. The RSS feed wraps every scalar in `{"label": ...}` and
// serves `entry` as absent, a single object or an array depending on how
// many reviews the storefront has.

#[derive(Debug, Deserialize)]
struct FeedDocument {
    feed: Feed,
}

#[derive(Debug, Deserialize)]
struct Feed {
    entry: Option<Entries>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entries {
    Many(Vec<Entry>),
    One(Box<Entry>),
}

#[derive(Debug, Deserialize)]
struct Entry {
    author: Option<Author>,
    updated: Option<Label>,
    #[serde(rename = "im:rating")]
    rating: Option<Label>,
    content: Option<Label>,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: Label,
}

#[derive(Debug, Deserialize)]
struct Label {
    label: String,
}

/// Decodes one page of the customer-reviews feed.
///
/// Entries without an `im:rating` key are app-metadata entries, not reviews,
/// and are skipped. A review entry missing a required field, or carrying a
/// date that isn't RFC 3339, fails the decode. Review dates are normalized
/// to timezone-aware timestamps here so that sorting compares instants.
pub fn decode_feed_page(body: &str) -> Result<Vec<Review>> {
    let doc: FeedDocument = serde_json::from_str(body)?;
    let entries = match doc.feed.entry {
        Some(Entries::Many(entries)) => entries,
        Some(Entries::One(entry)) => vec![*entry],
        None => Vec::new(),
    };

    let mut reviews = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(rating) = entry.rating else {
            continue;
        };
        let rating = rating
            .label
            .parse::<u8>()
            .map_err(|_| Error::FeedField("im:rating"))?;
        let updated = entry.updated.ok_or(Error::FeedField("updated"))?;
        let date = DateTime::parse_from_rfc3339(&updated.label)?;
        let user_name = entry.author.ok_or(Error::FeedField("author"))?.name.label;
        let review = entry.content.ok_or(Error::FeedField("content"))?.label;

        reviews.push(Review {
            date,
            user_name,
            review,
            rating,
        });
    }
    Ok(reviews)
}
