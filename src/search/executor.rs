//! Search execution and orchestration

use super::error::SearchError;
use super::models::{ResultPage, SearchQuery};
use super::{exclusion, plain};
use crate::catalog::CatalogClient;
use crate::query::KeywordExpression;
use crate::DEFAULT_MAX_REMOTE_PAGES;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Entry point for book searches. Holds no per-request state.
#[derive(Clone)]
pub struct Search {
    /// Remote catalog the searches run against
    catalog: Arc<dyn CatalogClient>,
    /// Most remote pages one exclusion search may fetch
    max_pages: u32,
}

impl Search {
    /// Create a new search executor
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            catalog,
            max_pages: DEFAULT_MAX_REMOTE_PAGES,
        }
    }

    /// Set the remote page cap for exclusion searches
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Validate raw caller input and run the search
    pub async fn search(
        &self,
        raw_keyword: &str,
        raw_page: &str,
    ) -> Result<ResultPage, SearchError> {
        let query = SearchQuery::new(raw_keyword, raw_page)?;
        let expression = KeywordExpression::parse(&query.raw_keyword)?;

        self.execute(&expression, query.page).await
    }

    /// Run an already parsed expression for a page
    pub async fn execute(
        &self,
        expression: &KeywordExpression,
        page: u32,
    ) -> Result<ResultPage, SearchError> {
        let start = Instant::now();
        let catalog = self.catalog.as_ref();

        let term = expression.search_term();

        let result = match expression.exclude_term() {
            None => plain::execute(catalog, term, page).await,
            Some(exclude) => {
                exclusion::execute(catalog, term, exclude, page, self.max_pages).await
            }
        };

        match &result {
            Ok(found) => info!(
                "Search '{}' page {} returned {} books of {} pages in {:?}",
                expression,
                page,
                found.books.len(),
                found.total_page,
                start.elapsed()
            ),
            Err(SearchError::Upstream(e)) => {
                warn!("Search '{}' page {} failed upstream: {}", expression, page, e)
            }
            Err(e) => warn!("Search '{}' page {} failed: {}", expression, page, e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::{numbered_books, StaticCatalog};
    use crate::catalog::CatalogRecord;
    use crate::query::QueryError;

    fn search_over(catalog: StaticCatalog) -> (Search, Arc<StaticCatalog>) {
        let catalog = Arc::new(catalog);
        (Search::new(catalog.clone()), catalog)
    }

    #[tokio::test]
    async fn test_plain_search() {
        let (search, catalog) = search_over(
            StaticCatalog::new().with_books("programming", numbered_books("Programming", 25)),
        );

        let result = search.search("programming", "1").await.unwrap();
        assert_eq!(result.total_page, 3);
        assert!(result.books.len() <= 10);
        assert_eq!(catalog.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_exclusion_search() {
        let mut books = numbered_books("Java", 12);
        books[0].title = "Spring in Action".to_string();
        books[6].subtitle = "Reactive spring".to_string();
        books[11] = CatalogRecord::new("Java 12", "SPRING Boot");
        let (search, catalog) = search_over(StaticCatalog::new().with_books("java", books));

        let result = search.search("java-spring", "1").await.unwrap();
        assert_eq!(result.total_page, 1);
        assert_eq!(result.books.len(), 9);
        assert_eq!(catalog.requested_pages(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_query() {
        let (search, catalog) = search_over(StaticCatalog::new());

        assert!(matches!(search.search("", "1").await, Err(SearchError::EmptyQuery)));
        assert!(matches!(search.search("rust", "").await, Err(SearchError::EmptyQuery)));
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_query_makes_no_calls() {
        let (search, catalog) = search_over(StaticCatalog::new());

        assert!(matches!(
            search.search("a|b-c", "1").await,
            Err(SearchError::InvalidQuery(QueryError::TooManyOperators(2)))
        ));
        assert!(matches!(
            search.search("c++", "1").await,
            Err(SearchError::InvalidQuery(QueryError::DisallowedCharacter('+')))
        ));
        assert!(matches!(
            search.search("rust", "page").await,
            Err(SearchError::InvalidQuery(QueryError::InvalidPage(_)))
        ));
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error() {
        let (search, _) = search_over(StaticCatalog::new().failing_page(1));

        let err = search.search("rust", "1").await.unwrap_err();
        assert!(matches!(err, SearchError::Upstream(_)));
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "catalog search failed");
    }

    #[tokio::test]
    async fn test_page_cap_applies_to_exclusion_only() {
        let catalog = StaticCatalog::new().with_books("java", numbered_books("Java", 30));
        let catalog = Arc::new(catalog);
        let search = Search::new(catalog.clone()).with_max_pages(2);

        let err = search.search("java-spring", "1").await.unwrap_err();
        assert!(matches!(err, SearchError::Upstream(_)));

        let result = search.search("java", "3").await.unwrap();
        assert_eq!(result.total_page, 3);
    }

    #[tokio::test]
    async fn test_repeated_search_is_identical() {
        let (search, _) =
            search_over(StaticCatalog::new().with_books("java", numbered_books("Java", 27)));

        let first = search.search("java-9", "2").await.unwrap();
        let second = search.search("java-9", "2").await.unwrap();
        assert_eq!(first, second);
    }
}
