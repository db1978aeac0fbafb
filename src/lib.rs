//! Scrapes App Store customer reviews for the AZAL booking app across a
//! fixed set of storefronts, tags every review with its storefront code and
//! writes the combined set, newest first, to a CSV file and an XLSX workbook.

mod error;
pub mod export;
pub mod fetch;
mod macros;
pub mod process;
pub mod review;

pub use error::{Error, Result};

/// Apple two-letter storefront codes, in scrape order.
pub const COUNTRIES: &[&str] = &[
    // Europe
    "at", "by", "bg", "cz", "fr", "de", "gr", "it", "md", "me", "ro", "ch", "gb",
    // Asia
    "af", "bh", "cn", "in", "ir", "iq", "il", "kz", "kw", "kg", "mv", "pk", "qa", "sa", "tj",
    "tr", "tm", "uz", "ae",
    // CIS
    "ru",
    // Azerbaijan (home country)
    "az",
];

const APP_ID: &str = "1451475994";
const APP_NAME: &str = "azal-book-flight-ticket";
/// How many reviews to request per storefront.
const REVIEWS_PER_COUNTRY: usize = 100;

const CSV_PATH: &str = "azerbaijan_airlines_app_store_reviews.csv";
const XLSX_PATH: &str = "azerbaijan_airlines_app_store_reviews.xlsx";
