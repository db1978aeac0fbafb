use std::path::Path;

use chrono::Local;

use crate::export::{write_csv, write_xlsx};
use crate::fetch::{AppStoreFetcher, ReviewFetcher};
use crate::review::ReviewRow;
use crate::{
    info_time, Result, APP_ID, APP_NAME, COUNTRIES, CSV_PATH, REVIEWS_PER_COUNTRY, XLSX_PATH,
};

/// Scrapes every configured storefront and writes both output files.
pub async fn run() -> Result<()> {
    let fetcher = AppStoreFetcher::new(APP_ID, APP_NAME);
    run_pipeline(
        &fetcher,
        COUNTRIES,
        Path::new(CSV_PATH),
        Path::new(XLSX_PATH),
    )
    .await
}

/// Fetch → tag → sort → export.
/// Nothing is written unless every storefront fetch succeeded.
pub async fn run_pipeline<F: ReviewFetcher>(
    fetcher: &F,
    countries: &[&str],
    csv_path: &Path,
    xlsx_path: &Path,
) -> Result<()> {
    let start_time = Local::now();
    let rows = scrape_all(fetcher, countries).await?;
    let rows = sort_newest_first(rows);
    info_time!(start_time, "Scraped {} storefronts", countries.len());

    let write_time = Local::now();
    write_csv(csv_path, &rows)?;
    write_xlsx(xlsx_path, &rows)?;
    info_time!(
        write_time,
        "Wrote {} and {}",
        csv_path.display(),
        xlsx_path.display()
    );

    println!("Total reviews scraped: {}", rows.len());
    Ok(())
}

/// Walks the storefronts in order, tagging every fetched review with the
/// storefront it came from.
async fn scrape_all<F: ReviewFetcher>(fetcher: &F, countries: &[&str]) -> Result<Vec<ReviewRow>> {
    let mut all_reviews = Vec::with_capacity(countries.len() * REVIEWS_PER_COUNTRY);

    for &country in countries {
        println!("Scraping country: {country}");
        let reviews = fetcher.fetch_reviews(country, REVIEWS_PER_COUNTRY).await?;
        all_reviews.extend(reviews.into_iter().map(|r| r.tag(country)));
    }
    Ok(all_reviews)
}

/// Descending by date. The sort is stable, so same-instant reviews keep
/// their fetch order.
fn sort_newest_first(mut rows: Vec<ReviewRow>) -> Vec<ReviewRow> {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn tagged(date: &str, user: &str, country: &str) -> ReviewRow {
        ReviewRow {
            date: DateTime::parse_from_rfc3339(date).unwrap(),
            user_name: user.to_owned(),
            review: String::new(),
            rating: 3,
            country: country.to_owned(),
        }
    }

    #[test]
    fn sorts_newest_first() {
        let rows = vec![
            tagged("2023-01-03T00:00:00+00:00", "a", "az"),
            tagged("2023-01-01T00:00:00+00:00", "b", "az"),
            tagged("2023-01-02T00:00:00+00:00", "c", "az"),
        ];

        let sorted = sort_newest_first(rows);
        let users: Vec<&str> = sorted.iter().map(|r| r.user_name.as_str()).collect();
        assert_eq!(users, ["a", "c", "b"]);
    }

    #[test]
    fn sort_compares_instants_across_offsets() {
        // 10:00+00:00 is a later instant than 09:00-03:00 (= 12:00 UTC).
        let rows = vec![
            tagged("2023-01-01T10:00:00+00:00", "utc", "az"),
            tagged("2023-01-01T09:00:00-03:00", "offset", "tr"),
        ];

        let sorted = sort_newest_first(rows);
        assert_eq!(sorted[0].user_name, "offset");
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let rows = vec![
            tagged("2023-01-01T00:00:00+00:00", "first", "az"),
            tagged("2023-01-01T00:00:00+00:00", "second", "tr"),
        ];

        let sorted = sort_newest_first(rows);
        let users: Vec<&str> = sorted.iter().map(|r| r.user_name.as_str()).collect();
        assert_eq!(users, ["first", "second"]);
    }
}
