//! Single-page search for plain keywords

use super::error::SearchError;
use super::models::ResultPage;
use crate::catalog::CatalogClient;
use tracing::debug;

/// Fetch exactly one remote page and project it
pub async fn execute(
    catalog: &dyn CatalogClient,
    keyword: &str,
    page: u32,
) -> Result<ResultPage, SearchError> {
    let remote = catalog.fetch_page(keyword, page).await?;

    if remote.total < 1 {
        debug!("No catalog results for '{}'", keyword);
        return Ok(ResultPage::empty());
    }

    Ok(ResultPage::from_records(remote.page_count(), remote.records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{numbered_books, StaticCatalog};

    #[tokio::test]
    async fn test_single_fetch_and_page_count() {
        let catalog =
            StaticCatalog::new().with_books("programming", numbered_books("Programming", 25));

        let result = execute(&catalog, "programming", 1).await.unwrap();
        assert_eq!(result.total_page, 3);
        assert_eq!(result.books.len(), 10);
        assert_eq!(result.books[0].title, "Programming 1");
        assert_eq!(catalog.calls(), vec![("programming".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_requested_page_is_forwarded() {
        let catalog =
            StaticCatalog::new().with_books("programming", numbered_books("Programming", 25));

        let result = execute(&catalog, "programming", 3).await.unwrap();
        assert_eq!(result.total_page, 3);
        let titles: Vec<_> = result.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Programming 21",
                "Programming 22",
                "Programming 23",
                "Programming 24",
                "Programming 25"
            ]
        );
        assert_eq!(catalog.requested_pages(), vec![3]);
    }

    #[tokio::test]
    async fn test_no_results() {
        let catalog = StaticCatalog::new();

        let result = execute(&catalog, "nothing", 1).await.unwrap();
        assert_eq!(result, ResultPage::empty());
        assert_eq!(catalog.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let catalog = StaticCatalog::new()
            .with_books("rust", numbered_books("Rust", 5))
            .failing_page(1);

        let err = execute(&catalog, "rust", 1).await.unwrap_err();
        assert!(matches!(err, SearchError::Upstream(_)));
    }
}
