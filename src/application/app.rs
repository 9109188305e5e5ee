use crate::application::{
    CategoriesPage, CategoryPage, Config, LeaderboardPage, Listing, NavLink, OverviewPage,
    OverviewSection, PageError, Response, SearchPage,
};
use crate::domain::{
    CalendarUnit, DateRange, PeriodCalendar, PeriodError, ProductCategory, RawComponents,
    SearchParams, Submission, SubmissionError, SubmissionForm, parse_page,
};
use crate::infrastructure::{MockCatalog, ProductQuery, ProductSource};
use anyhow::Context;
use chrono::{DateTime, Utc};
use log::{debug, info};

pub const OVERVIEW_SIZE: usize = 7;

/// Builds every page of the site from a calendar, a product source and the
/// current instant. Holds no per-request state.
pub struct LeaderboardApp {
    config: Config,
    calendar: PeriodCalendar,
    source: Box<dyn ProductSource>,
}

impl LeaderboardApp {
    pub fn new(config: Config, source: Box<dyn ProductSource>) -> Self {
        let calendar = config.calendar();
        Self {
            config,
            calendar,
            source,
        }
    }

    /// Configuration from the environment, products from the mock catalog
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env()?;
        Ok(Self::new(config, Box::new(MockCatalog::new())))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn calendar(&self) -> &PeriodCalendar {
        &self.calendar
    }

    /// `GET {base}/{period}`: send the visitor to the current board
    pub fn redirect(&self, period_name: &str, now: DateTime<Utc>) -> Response<()> {
        match self.calendar.resolve_current(period_name, now) {
            Ok(location) => {
                info!("Redirecting {} to {}", period_name, location);
                Response::redirect(location)
            }
            Err(e) => e.into(),
        }
    }

    /// `GET {base}/{period}/{components..}?page=N`
    pub fn leaderboard<S: AsRef<str>>(
        &self,
        unit: CalendarUnit,
        segments: &[S],
        page: Option<&str>,
        now: DateTime<Utc>,
    ) -> Response<LeaderboardPage> {
        Response::from_result(self.build_leaderboard(unit, segments, page, now))
    }

    fn build_leaderboard<S: AsRef<str>>(
        &self,
        unit: CalendarUnit,
        segments: &[S],
        page: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<LeaderboardPage, PageError> {
        let raw = RawComponents::from_segments(unit, segments)?;
        let period = self.calendar.validate(unit, &raw, now)?;
        let page = parse_page(page)?;
        let navigation = self.calendar.navigate(&period, now)?;

        debug!(
            "Building {} leaderboard for {} (page {})",
            unit, navigation.current, page
        );

        let products = self
            .source
            .products(&ProductQuery::in_range(navigation.range))
            .context("Failed to load leaderboard products")?;

        let next = navigation
            .next
            .as_ref()
            .filter(|_| !navigation.is_current)
            .map(NavLink::from);

        Ok(LeaderboardPage {
            unit,
            title: LeaderboardPage::title_for(unit, &navigation.display_label),
            meta_title: format!("The best products of {}", navigation.current),
            previous: navigation.previous.as_ref().map(NavLink::from),
            next,
            products: Listing::paginate(&products, page, self.config.page_size),
            navigation,
        })
    }

    /// `GET {base}`: a short board for each unit
    pub fn overview(&self, now: DateTime<Utc>) -> Response<OverviewPage> {
        Response::from_result(self.build_overview(now))
    }

    fn build_overview(&self, now: DateTime<Utc>) -> Result<OverviewPage, PageError> {
        let today = self.calendar.today(now);
        let mut sections = Vec::with_capacity(CalendarUnit::ALL.len());

        for unit in CalendarUnit::ALL {
            let range = DateRange::containing(unit, today).ok_or(PeriodError::InvalidDate)?;
            let mut products = self
                .source
                .products(&ProductQuery::in_range(range))
                .context("Failed to load overview products")?;
            products.truncate(OVERVIEW_SIZE);

            let adjective = match unit {
                CalendarUnit::Day => "Daily",
                CalendarUnit::Week => "Weekly",
                CalendarUnit::Month => "Monthly",
                CalendarUnit::Year => "Yearly",
            };

            sections.push(OverviewSection {
                unit,
                title: format!("{} Leaderboard", adjective),
                description: format!("The most popular products by {}.", unit),
                products,
                explore_path: format!(
                    "{}/{}",
                    self.calendar.base_path().trim_end_matches('/'),
                    unit.period_name()
                ),
            });
        }

        Ok(OverviewPage {
            title: "Leaderboards".to_string(),
            subtitle: "The most popular products".to_string(),
            sections,
        })
    }

    /// `GET /products/search?query=..&page=..`
    pub fn search(&self, query: Option<&str>, page: Option<&str>) -> Response<SearchPage> {
        Response::from_result(self.build_search(query, page))
    }

    fn build_search(
        &self,
        query: Option<&str>,
        page: Option<&str>,
    ) -> Result<SearchPage, PageError> {
        let params = SearchParams::parse(query, page)?;
        let products = self
            .source
            .products(&ProductQuery::matching(params.query.clone()))
            .context("Failed to search products")?;

        debug!("Search for {:?} matched {} products", params.query, products.len());

        Ok(SearchPage {
            results: Listing::paginate(&products, params.page, self.config.page_size),
            query: params.query,
        })
    }

    /// `GET /products/categories?page=..`
    pub fn categories(&self, page: Option<&str>) -> Response<CategoriesPage> {
        Response::from_result(self.build_categories(page))
    }

    fn build_categories(&self, page: Option<&str>) -> Result<CategoriesPage, PageError> {
        let page = parse_page(page)?;
        let categories = self
            .source
            .categories()
            .context("Failed to load categories")?;

        Ok(CategoriesPage {
            categories: Listing::paginate(&categories, page, self.config.page_size),
        })
    }

    /// `GET /products/categories/{id}?page=..`
    pub fn category(&self, id: &str, page: Option<&str>) -> Response<CategoryPage> {
        Response::from_result(self.build_category(id, page))
    }

    fn build_category(&self, id: &str, page: Option<&str>) -> Result<CategoryPage, PageError> {
        let category = ProductCategory::from_value(id).ok_or(PeriodError::InvalidParams)?;
        let page = parse_page(page)?;
        let products = self
            .source
            .products(&ProductQuery::in_category(category))
            .context("Failed to load category products")?;

        Ok(CategoryPage {
            category,
            title: category.label().to_string(),
            products: Listing::paginate(&products, page, self.config.page_size),
        })
    }

    /// `POST /products/submit`. Accepted submissions are returned, not stored.
    pub fn submit(&self, form: &SubmissionForm) -> Result<Submission, Vec<SubmissionError>> {
        let result = form.validate();
        match &result {
            Ok(submission) => info!("Accepted submission for {}", submission.name),
            Err(errors) => debug!("Rejected submission with {} errors", errors.len()),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, PageLink, Product};
    use anyhow::{Result, anyhow};
    use chrono::TimeZone;

    fn app() -> LeaderboardApp {
        LeaderboardApp::new(Config::default(), Box::new(MockCatalog::new()))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap()
    }

    struct BrokenSource;

    impl ProductSource for BrokenSource {
        fn products(&self, _query: &ProductQuery) -> Result<Vec<Product>> {
            Err(anyhow!("connection refused"))
        }

        fn categories(&self) -> Result<Vec<Category>> {
            Err(anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_daily_leaderboard() {
        let page = app()
            .leaderboard(CalendarUnit::Day, &["2024", "3", "14"], None, now())
            .into_body()
            .unwrap();

        assert_eq!(page.title, "The best products of Mar 14, 2024");
        assert_eq!(page.meta_title, "The best products of 2024-3-14");
        assert_eq!(
            page.previous,
            Some(NavLink {
                path: "/products/leaderboards/daily/2024/3/13".to_string(),
                label: "3/13/2024".to_string(),
            })
        );
        assert_eq!(
            page.next,
            Some(NavLink {
                path: "/products/leaderboards/daily/2024/3/15".to_string(),
                label: "3/15/2024".to_string(),
            })
        );
        assert_eq!(page.products.items.len(), 11);
        assert_eq!(page.products.links.current(), Some(1));
    }

    #[test]
    fn test_current_board_hides_next_link() {
        let page = app()
            .leaderboard(CalendarUnit::Week, &["2024", "11"], Some("2"), now())
            .into_body()
            .unwrap();

        assert!(page.navigation.is_current);
        assert!(page.next.is_none());
        assert_eq!(page.title, "Best of week 3/11/2024 - 3/17/2024");
        assert_eq!(page.products.links.previous(), Some(1));
    }

    #[test]
    fn test_first_board_has_no_previous_link() {
        let page = app()
            .leaderboard(CalendarUnit::Year, &["1"], None, now())
            .into_body()
            .unwrap();

        assert_eq!(page.previous, None);
        assert_eq!(
            page.next.map(|link| link.path),
            Some("/products/leaderboards/yearly/2".to_string())
        );
    }

    #[test]
    fn test_leaderboard_rejections() {
        let app = app();
        let cases = [
            (CalendarUnit::Day, vec!["2024", "3", "16"], None, "future_date"),
            (CalendarUnit::Week, vec!["2024", "54"], None, "invalid_date"),
            (CalendarUnit::Month, vec!["2024", "march"], None, "invalid_params"),
            (CalendarUnit::Year, vec!["2023"], Some("zero"), "invalid_params"),
        ];

        for (unit, segments, page, code) in cases {
            match app.leaderboard(unit, &segments, page, now()) {
                Response::Error {
                    status,
                    payload: Some(payload),
                } => {
                    assert_eq!(status, 400);
                    assert_eq!(payload.error_code, code);
                }
                other => panic!("expected {code}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_redirects() {
        let app = app();
        assert_eq!(
            app.redirect("monthly", now()),
            Response::redirect("/products/leaderboards/monthly/2024/3")
        );
        assert_eq!(
            app.redirect("biweekly", now()),
            Response::Error {
                status: 400,
                payload: None
            }
        );
    }

    #[test]
    fn test_source_failure_is_unknown_error() {
        let app = LeaderboardApp::new(Config::default(), Box::new(BrokenSource));
        let response = app.leaderboard(CalendarUnit::Year, &["2023"], None, now());
        assert_eq!(response.status(), 500);
        assert!(app.categories(None).is_error());
    }

    #[test]
    fn test_overview() {
        let overview = app().overview(now()).into_body().unwrap();
        assert_eq!(overview.sections.len(), 4);
        assert!(overview.sections.iter().all(|s| s.products.len() == OVERVIEW_SIZE));
        assert_eq!(overview.sections[1].title, "Weekly Leaderboard");
        assert_eq!(overview.sections[3].explore_path, "/products/leaderboards/yearly");
    }

    #[test]
    fn test_search() {
        let app = app();
        let page = app.search(Some("Inkwell"), None).into_body().unwrap();
        assert_eq!(page.query, "Inkwell");
        assert_eq!(page.results.items.len(), 11);
        assert_eq!(page.results.state.total_pages, 1);
        assert_eq!(page.results.links.links, vec![PageLink::Page { page: 1, is_current: true }]);

        let everything = app.search(None, Some("3")).into_body().unwrap();
        assert_eq!(everything.results.state.total_pages, 10);
        assert!(everything.results.links.has_ellipsis());

        assert!(app.search(None, Some("abc")).is_error());
    }

    #[test]
    fn test_categories() {
        let app = app();
        let page = app.categories(None).into_body().unwrap();
        assert_eq!(page.categories.items.len(), 5);

        let tools = app.category("design-tools", None).into_body().unwrap();
        assert_eq!(tools.title, "Design Tools");
        assert_eq!(tools.products.state.total_pages, 2);

        assert_eq!(app.category("games", None).status(), 400);
    }

    #[test]
    fn test_submit() {
        let form = SubmissionForm {
            name: Some("Inkwell".to_string()),
            description: Some("Notes".to_string()),
            url: Some("https://inkwell.example".to_string()),
            category: Some("other".to_string()),
        };
        assert!(app().submit(&form).is_ok());
        assert!(app().submit(&SubmissionForm::default()).is_err());
    }
}
