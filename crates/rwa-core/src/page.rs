//! Page identifiers and history routes.
//!
//! `PageId` is the closed set of pages the dashboard knows about. `Route` is
//! what the navigation history actually stores: navigation does not validate
//! its target, so an arbitrary string can end up on the stack and is only
//! resolved (to a fallback) when a page unit is selected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Identifier of one of the fixed dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Home,
    Assets,
    Portfolio,
    Wallets,
    Profile,
    Fractional,
    Wholesome,
    PriceProjections,
    Rewards,
    Farming,
    ReferAndEarn,
    TransactionHistory,
    Support,
    Details,
    /// Legacy design-import alias.
    Frame,
    /// Legacy design-import alias.
    Main,
}

impl PageId {
    /// Every page, in registry order.
    pub const ALL: [PageId; 16] = [
        PageId::Home,
        PageId::Assets,
        PageId::Portfolio,
        PageId::Wallets,
        PageId::Profile,
        PageId::Fractional,
        PageId::Wholesome,
        PageId::PriceProjections,
        PageId::Rewards,
        PageId::Farming,
        PageId::ReferAndEarn,
        PageId::TransactionHistory,
        PageId::Support,
        PageId::Details,
        PageId::Frame,
        PageId::Main,
    ];

    /// Canonical kebab-case id.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Assets => "assets",
            PageId::Portfolio => "portfolio",
            PageId::Wallets => "wallets",
            PageId::Profile => "profile",
            PageId::Fractional => "fractional",
            PageId::Wholesome => "wholesome",
            PageId::PriceProjections => "price-projections",
            PageId::Rewards => "rewards",
            PageId::Farming => "farming",
            PageId::ReferAndEarn => "refer-and-earn",
            PageId::TransactionHistory => "transaction-history",
            PageId::Support => "support",
            PageId::Details => "details",
            PageId::Frame => "frame",
            PageId::Main => "main",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .iter()
            .copied()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| ShellError::UnknownPage(s.to_string()))
    }
}

/// An entry in the navigation history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Route {
    /// A page from the closed set.
    Page(PageId),
    /// Any other id. Kept verbatim; renders the fallback page.
    Unknown(String),
}

impl Route {
    /// The page this route names, if it is a known one.
    #[must_use]
    pub fn page(&self) -> Option<PageId> {
        match self {
            Route::Page(page) => Some(*page),
            Route::Unknown(_) => None,
        }
    }

    /// The id as it was navigated to.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Route::Page(page) => page.as_str(),
            Route::Unknown(id) => id,
        }
    }

    /// Whether this route is exactly `page`.
    #[must_use]
    pub fn is(&self, page: PageId) -> bool {
        self.page() == Some(page)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        Route::Page(page)
    }
}

impl From<&str> for Route {
    fn from(id: &str) -> Self {
        id.parse::<PageId>()
            .map_or_else(|_| Route::Unknown(id.to_string()), Route::Page)
    }
}

impl From<String> for Route {
    fn from(id: String) -> Self {
        match id.parse::<PageId>() {
            Ok(page) => Route::Page(page),
            Err(_) => Route::Unknown(id),
        }
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        match route {
            Route::Page(page) => page.as_str().to_string(),
            Route::Unknown(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>().unwrap(), page);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = PageId::ALL.iter().map(|p| p.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PageId::ALL.len());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = "nonexistent-id".parse::<PageId>().unwrap_err();
        assert_eq!(err, ShellError::UnknownPage("nonexistent-id".into()));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Assets".parse::<PageId>().is_err());
    }

    #[test]
    fn serde_matches_display() {
        for page in PageId::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{page}\""));
        }
    }

    #[test]
    fn route_from_known_and_unknown() {
        assert_eq!(Route::from("price-projections"), Route::Page(PageId::PriceProjections));
        assert_eq!(
            Route::from("nonexistent-id"),
            Route::Unknown("nonexistent-id".into())
        );
        assert_eq!(Route::from(String::from("main")), Route::Page(PageId::Main));
    }

    #[test]
    fn route_accessors() {
        let route = Route::from(PageId::Wallets);
        assert_eq!(route.page(), Some(PageId::Wallets));
        assert!(route.is(PageId::Wallets));
        assert_eq!(route.as_str(), "wallets");

        let unknown = Route::from("zzz");
        assert_eq!(unknown.page(), None);
        assert!(!unknown.is(PageId::Home));
        assert_eq!(unknown.to_string(), "zzz");
    }

    #[test]
    fn route_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![Route::from(PageId::Home), Route::from("x")]).unwrap();
        assert_eq!(json, r#"["home","x"]"#);
        let back: Vec<Route> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], Route::Page(PageId::Home));
        assert_eq!(back[1], Route::Unknown("x".into()));
    }
}
