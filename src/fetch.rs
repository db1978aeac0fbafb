use async_trait::async_trait;
use reqwest::{header, Client};

use crate::review::{decode_feed_page, Review};
use crate::Result;

/// The feed serves at most 10 pages per storefront.
const FEED_PAGE_LIMIT: usize = 10;

/// Boundary for pulling reviews out of a storefront. The pipeline only
/// depends on this trait, so tests can swap in an in-memory source.
#[async_trait]
pub trait ReviewFetcher {
    /// Fetches up to `limit` of the most recent reviews for a storefront.
    /// Returning fewer than `limit` reviews is not an error.
    async fn fetch_reviews(&self, country: &str, limit: usize) -> Result<Vec<Review>>;
}

/// Fetches reviews from the public iTunes customer-reviews RSS feed.
pub struct AppStoreFetcher {
    client: Client,
    app_id: String,
    app_name: String,
}

impl AppStoreFetcher {
    pub fn new(app_id: &str, app_name: &str) -> Self {
        Self {
            client: Client::new(),
            app_id: app_id.to_owned(),
            app_name: app_name.to_owned(),
        }
    }

    fn feed_url(&self, country: &str, page: usize) -> String {
        format!(
            "https://itunes.apple.com/{country}/rss/customerreviews/page={page}/id={}/sortby=mostrecent/json",
            self.app_id
        )
    }

    /// The app's storefront page, sent as the referer on every feed request.
    fn store_page_url(&self, country: &str) -> String {
        format!(
            "https://apps.apple.com/{country}/app/{}/id{}",
            self.app_name, self.app_id
        )
    }
}

#[async_trait]
impl ReviewFetcher for AppStoreFetcher {
    async fn fetch_reviews(&self, country: &str, limit: usize) -> Result<Vec<Review>> {
        let mut reviews = Vec::with_capacity(limit);

        for page in 1..=FEED_PAGE_LIMIT {
            if reviews.len() >= limit {
                break;
            }
            let body = self
                .client
                .get(self.feed_url(country, page))
                .header(header::REFERER, self.store_page_url(country))
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            let page_reviews = decode_feed_page(&body)?;
            if page_reviews.is_empty() {
                break;
            }
            reviews.extend(page_reviews);
        }

        reviews.truncate(limit);
        Ok(reviews)
    }
}
