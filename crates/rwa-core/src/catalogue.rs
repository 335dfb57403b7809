//! Static navigation catalogue.
//!
//! The items rendered by every piece of chrome, and the fixed category
//! buckets the mobile menu groups the secondary items into.

use serde::Serialize;

use crate::page::{PageId, Route};

/// Symbolic icon, rendered as a single glyph by the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Briefcase,
    PieChart,
    Wallet,
    User,
    Percent,
    Heart,
    TrendingUp,
    Gift,
    Sprout,
    Users,
    History,
    HelpCircle,
    FileText,
    Building,
    Settings,
    MoreHorizontal,
    Search,
    Bell,
    Menu,
    Close,
    ChevronRight,
    ChevronLeft,
}

impl Icon {
    /// Terminal glyph for this icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Briefcase => "▣",
            Icon::PieChart => "◔",
            Icon::Wallet => "▭",
            Icon::User => "☺",
            Icon::Percent => "%",
            Icon::Heart => "♥",
            Icon::TrendingUp => "↗",
            Icon::Gift => "✦",
            Icon::Sprout => "♣",
            Icon::Users => "☻",
            Icon::History => "↺",
            Icon::HelpCircle => "?",
            Icon::FileText => "≡",
            Icon::Building => "▥",
            Icon::Settings => "⚙",
            Icon::MoreHorizontal => "…",
            Icon::Search => "⌕",
            Icon::Bell => "♪",
            Icon::Menu => "☰",
            Icon::Close => "×",
            Icon::ChevronRight => "›",
            Icon::ChevronLeft => "‹",
        }
    }
}

/// Category of a navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Main,
    Invest,
    Analytics,
    Earn,
    Account,
    Detail,
}

/// Static descriptor of one navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub id: PageId,
    pub label: &'static str,
    pub icon: Icon,
    /// Primary items make up the mobile bottom navigation.
    pub primary: bool,
    pub category: Category,
}

const fn item(
    id: PageId,
    label: &'static str,
    icon: Icon,
    primary: bool,
    category: Category,
) -> NavigationItem {
    NavigationItem {
        id,
        label,
        icon,
        primary,
        category,
    }
}

/// Every navigation item, primary ones first.
pub const NAVIGATION_ITEMS: [NavigationItem; 14] = [
    item(PageId::Home, "Home", Icon::Home, true, Category::Main),
    item(PageId::Assets, "Assets", Icon::Briefcase, true, Category::Main),
    item(PageId::Portfolio, "Portfolio", Icon::PieChart, true, Category::Main),
    item(PageId::Wallets, "Wallets", Icon::Wallet, true, Category::Main),
    item(PageId::Profile, "Profile", Icon::User, true, Category::Main),
    item(PageId::Fractional, "Fractional Assets", Icon::Percent, false, Category::Invest),
    item(PageId::Wholesome, "Wholesome Assets", Icon::Heart, false, Category::Invest),
    item(PageId::PriceProjections, "Price Projections", Icon::TrendingUp, false, Category::Analytics),
    item(PageId::Rewards, "Rewards", Icon::Gift, false, Category::Earn),
    item(PageId::Farming, "Farming", Icon::Sprout, false, Category::Earn),
    item(PageId::ReferAndEarn, "Refer & Earn", Icon::Users, false, Category::Earn),
    item(PageId::TransactionHistory, "Transactions", Icon::History, false, Category::Account),
    item(PageId::Support, "Support", Icon::HelpCircle, false, Category::Account),
    item(PageId::Details, "Details", Icon::FileText, false, Category::Detail),
];

/// All navigation items.
#[must_use]
pub fn navigation_items() -> &'static [NavigationItem] {
    &NAVIGATION_ITEMS
}

/// Items shown in the mobile bottom navigation.
pub fn primary_items() -> impl Iterator<Item = &'static NavigationItem> {
    NAVIGATION_ITEMS.iter().filter(|item| item.primary)
}

/// Items reachable only through the menu on mobile.
pub fn secondary_items() -> impl Iterator<Item = &'static NavigationItem> {
    NAVIGATION_ITEMS.iter().filter(|item| !item.primary)
}

/// Item describing `route`, if any. Aliases and unknown ids have none.
#[must_use]
pub fn find_item(route: &Route) -> Option<&'static NavigationItem> {
    let page = route.page()?;
    NAVIGATION_ITEMS.iter().find(|item| item.id == page)
}

/// The six fixed buckets of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuBucket {
    Invest,
    Analytics,
    Earn,
    Account,
    Detail,
    Other,
}

impl MenuBucket {
    /// Buckets in display order.
    pub const ALL: [MenuBucket; 6] = [
        MenuBucket::Invest,
        MenuBucket::Analytics,
        MenuBucket::Earn,
        MenuBucket::Account,
        MenuBucket::Detail,
        MenuBucket::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuBucket::Invest => "Investment Options",
            MenuBucket::Analytics => "Analytics & Research",
            MenuBucket::Earn => "Earn Rewards",
            MenuBucket::Account => "Account Management",
            MenuBucket::Detail => "Details & Information",
            MenuBucket::Other => "Other",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            MenuBucket::Invest => Icon::Building,
            MenuBucket::Analytics => Icon::TrendingUp,
            MenuBucket::Earn => Icon::Gift,
            MenuBucket::Account => Icon::Settings,
            MenuBucket::Detail => Icon::FileText,
            MenuBucket::Other => Icon::MoreHorizontal,
        }
    }

    /// Bucket a category lands in. `Main` has no bucket of its own.
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Invest => MenuBucket::Invest,
            Category::Analytics => MenuBucket::Analytics,
            Category::Earn => MenuBucket::Earn,
            Category::Account => MenuBucket::Account,
            Category::Detail => MenuBucket::Detail,
            Category::Main => MenuBucket::Other,
        }
    }
}

/// One bucket of the mobile menu and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub bucket: MenuBucket,
    pub items: Vec<&'static NavigationItem>,
}

/// Group the secondary items into all six buckets, in display order.
///
/// Buckets without members are still returned, with an empty item list.
#[must_use]
pub fn group_secondary_items() -> Vec<MenuGroup> {
    MenuBucket::ALL
        .iter()
        .map(|&bucket| MenuGroup {
            bucket,
            items: secondary_items()
                .filter(|item| MenuBucket::for_category(item.category) == bucket)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_primary_items_in_order() {
        let ids: Vec<PageId> = primary_items().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec![
                PageId::Home,
                PageId::Assets,
                PageId::Portfolio,
                PageId::Wallets,
                PageId::Profile
            ]
        );
    }

    #[test]
    fn primary_items_are_main_category() {
        assert!(primary_items().all(|i| i.category == Category::Main));
        assert!(secondary_items().all(|i| i.category != Category::Main));
    }

    #[test]
    fn aliases_have_no_item() {
        assert!(find_item(&Route::from(PageId::Frame)).is_none());
        assert!(find_item(&Route::from(PageId::Main)).is_none());
        assert!(find_item(&Route::from("nonexistent-id")).is_none());
    }

    #[test]
    fn find_item_by_route() {
        let item = find_item(&Route::from(PageId::TransactionHistory)).unwrap();
        assert_eq!(item.label, "Transactions");
        assert_eq!(item.icon, Icon::History);
    }

    #[test]
    fn six_buckets_in_fixed_order() {
        let groups = group_secondary_items();
        let buckets: Vec<MenuBucket> = groups.iter().map(|g| g.bucket).collect();
        assert_eq!(buckets, MenuBucket::ALL.to_vec());
    }

    #[test]
    fn bucket_membership() {
        let groups = group_secondary_items();
        let ids = |bucket: MenuBucket| -> Vec<PageId> {
            groups
                .iter()
                .find(|g| g.bucket == bucket)
                .unwrap()
                .items
                .iter()
                .map(|i| i.id)
                .collect()
        };
        assert_eq!(ids(MenuBucket::Invest), vec![PageId::Fractional, PageId::Wholesome]);
        assert_eq!(ids(MenuBucket::Analytics), vec![PageId::PriceProjections]);
        assert_eq!(
            ids(MenuBucket::Earn),
            vec![PageId::Rewards, PageId::Farming, PageId::ReferAndEarn]
        );
        assert_eq!(
            ids(MenuBucket::Account),
            vec![PageId::TransactionHistory, PageId::Support]
        );
        assert_eq!(ids(MenuBucket::Detail), vec![PageId::Details]);
        assert!(ids(MenuBucket::Other).is_empty());
    }

    #[test]
    fn grouping_covers_every_secondary_item_once() {
        let total: usize = group_secondary_items().iter().map(|g| g.items.len()).sum();
        assert_eq!(total, secondary_items().count());
    }

    #[test]
    fn bucket_labels_and_icons() {
        assert_eq!(MenuBucket::Earn.label(), "Earn Rewards");
        assert_eq!(MenuBucket::Other.icon(), Icon::MoreHorizontal);
        assert_eq!(MenuBucket::for_category(Category::Main), MenuBucket::Other);
    }

    #[test]
    fn glyphs_are_single_width_symbols() {
        for item in navigation_items() {
            assert_eq!(item.icon.glyph().chars().count(), 1);
        }
    }
}
