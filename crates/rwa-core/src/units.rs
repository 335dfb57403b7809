//! Page units: the renderable views the registry chooses between.
//!
//! Each unit carries static mock content: a title, a summary, a few figures
//! and a list of affordances (buttons and links). Native units declare where
//! each affordance leads. Wrapped design imports do not; their affordances
//! are plain text that goes through the click-to-navigate adapter.

use serde::Serialize;

use crate::click_map;
use crate::page::PageId;

/// A button or link inside a page unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub label: &'static str,
    /// Declared target on native units. Always `None` on imports.
    pub target: Option<PageId>,
}

const fn link(label: &'static str, target: PageId) -> Affordance {
    Affordance {
        label,
        target: Some(target),
    }
}

const fn inert(label: &'static str) -> Affordance {
    Affordance {
        label,
        target: None,
    }
}

/// One renderable page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageUnit {
    MobileHome,
    /// Desktop home, a wrapped design import. Also the fallback unit.
    AuthenticatedHome,
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
    /// Wrapped design import behind the `frame` alias.
    FrameImport,
    /// Wrapped design import behind the `main` alias.
    MainDashboardImport,
}

impl PageUnit {
    /// Whether this unit is imported markup wrapped with the click adapter.
    #[must_use]
    pub fn is_imported(self) -> bool {
        matches!(
            self,
            PageUnit::AuthenticatedHome | PageUnit::FrameImport | PageUnit::MainDashboardImport
        )
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PageUnit::MobileHome => "Dashboard",
            PageUnit::AuthenticatedHome => "Home",
            PageUnit::Assets => "Assets",
            PageUnit::Portfolio => "Portfolio",
            PageUnit::Wallets => "My Wallets",
            PageUnit::Profile => "My Profile",
            PageUnit::Fractional => "Fractional Assets",
            PageUnit::Wholesome => "Wholesome Assets",
            PageUnit::PriceProjections => "Price Projections",
            PageUnit::Rewards => "Rewards",
            PageUnit::Farming => "Farming",
            PageUnit::ReferAndEarn => "Refer & Earn",
            PageUnit::TransactionHistory => "Transaction History",
            PageUnit::Support => "Support",
            PageUnit::Details => "Details",
            PageUnit::FrameImport => "Frame",
            PageUnit::MainDashboardImport => "Main Dashboard",
        }
    }

    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            PageUnit::MobileHome => "Your real world asset portfolio at a glance.",
            PageUnit::AuthenticatedHome => "Welcome back. Markets are open.",
            PageUnit::Assets => "Browse tokenized real estate, commodities and art.",
            PageUnit::Portfolio => "Allocation and performance of your holdings.",
            PageUnit::Wallets => "Connected wallets and balances.",
            PageUnit::Profile => "Account details and preferences.",
            PageUnit::Fractional => "Own a share of premium assets from small amounts.",
            PageUnit::Wholesome => "Whole-asset offerings for qualified investors.",
            PageUnit::PriceProjections => "Projected asset prices over the next quarters.",
            PageUnit::Rewards => "Points and bonuses earned on the platform.",
            PageUnit::Farming => "Stake asset tokens to earn yield.",
            PageUnit::ReferAndEarn => "Invite friends and earn a share of their fees.",
            PageUnit::TransactionHistory => "Every deposit, purchase and payout.",
            PageUnit::Support => "Help center and contact options.",
            PageUnit::Details => "Asset documentation and key facts.",
            PageUnit::FrameImport => "Discover the Real World Asset marketplace.",
            PageUnit::MainDashboardImport => "Overview of platform activity.",
        }
    }

    /// Mock key figures shown by the unit.
    #[must_use]
    pub fn figures(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PageUnit::MobileHome | PageUnit::AuthenticatedHome => &[
                ("Portfolio value", "$124,580.32"),
                ("24h change", "+2.4%"),
            ],
            PageUnit::Assets => &[("Listed assets", "48"), ("Avg. yield", "7.2%")],
            PageUnit::Portfolio => &[("Holdings", "12"), ("Unrealized P/L", "+$8,214.90")],
            PageUnit::Wallets => &[("Wallets", "3"), ("Total balance", "$42,100.00")],
            PageUnit::Profile => &[("Member", "John Doe"), ("Tier", "Premium Member")],
            PageUnit::Fractional => &[("Min. ticket", "$50"), ("Offerings", "31")],
            PageUnit::Wholesome => &[("Min. ticket", "$250,000"), ("Offerings", "9")],
            PageUnit::PriceProjections => &[("Horizon", "12 months"), ("Confidence", "80%")],
            PageUnit::Rewards => &[("Points", "12,450"), ("Next tier", "2,550 pts")],
            PageUnit::Farming => &[("Staked", "$6,000.00"), ("APY", "11.5%")],
            PageUnit::ReferAndEarn => &[("Referrals", "7"), ("Earned", "$310.00")],
            PageUnit::TransactionHistory => &[("This month", "23"), ("Pending", "1")],
            PageUnit::Support => &[("Open tickets", "0"), ("Response time", "< 2h")],
            PageUnit::Details => &[("Asset", "Harbor Tower, Unit 12"), ("Valuation", "$1.2M")],
            PageUnit::FrameImport => &[],
            PageUnit::MainDashboardImport => &[("Active users", "18,204"), ("TVL", "$92M")],
        }
    }

    /// Buttons and links rendered by the unit.
    #[must_use]
    pub fn affordances(self) -> &'static [Affordance] {
        match self {
            PageUnit::MobileHome => const { &[
                link("Buy Now", PageId::Assets),
                link("View Portfolio", PageId::Portfolio),
                link("My Wallets", PageId::Wallets),
                link("Rewards", PageId::Rewards),
            ] },
            PageUnit::AuthenticatedHome => const { &[
                inert("Assets"),
                inert("Portfolio"),
                inert("Buy Now"),
                inert("Explore"),
                inert("My Wallets"),
                inert("Connect Wallet"),
            ] },
            PageUnit::Assets => const { &[
                link("Fractional Assets", PageId::Fractional),
                link("Wholesome Assets", PageId::Wholesome),
                link("View Details", PageId::Details),
                link("Price Projections", PageId::PriceProjections),
            ] },
            PageUnit::Portfolio => const { &[
                link("Transactions", PageId::TransactionHistory),
                link("Browse Assets", PageId::Assets),
                inert("Export Report"),
            ] },
            PageUnit::Wallets => const { &[
                link("Transaction History", PageId::TransactionHistory),
                inert("Add Wallet"),
            ] },
            PageUnit::Profile => const { &[
                link("Support", PageId::Support),
                link("Refer & Earn", PageId::ReferAndEarn),
                inert("Sign Out"),
            ] },
            PageUnit::Fractional | PageUnit::Wholesome => const { &[
                link("View Details", PageId::Details),
                link("Back to Assets", PageId::Assets),
            ] },
            PageUnit::PriceProjections => const { &[link("Explore Assets", PageId::Assets)] },
            PageUnit::Rewards => const { &[
                link("Farming", PageId::Farming),
                link("Refer & Earn", PageId::ReferAndEarn),
                inert("Claim Rewards"),
            ] },
            PageUnit::Farming => const { &[link("Rewards", PageId::Rewards), inert("Stake")] },
            PageUnit::ReferAndEarn => const { &[
                inert("Copy Referral Link"),
                link("Rewards", PageId::Rewards),
            ] },
            PageUnit::TransactionHistory => const { &[
                link("Wallets", PageId::Wallets),
                inert("Download CSV"),
            ] },
            PageUnit::Support => const { &[inert("Contact Support"), link("My Profile", PageId::Profile)] },
            PageUnit::Details => const { &[
                link("Buy Now", PageId::Assets),
                link("Price Projections", PageId::PriceProjections),
            ] },
            PageUnit::FrameImport => const { &[
                inert("Home"),
                inert("Learn more"),
                inert("View"),
                inert("Get Started"),
            ] },
            PageUnit::MainDashboardImport => const { &[
                inert("Portfolio"),
                inert("Transactions"),
                inert("Refer & Earn"),
                inert("Wholesome"),
                inert("Fractional"),
                inert("Notifications"),
            ] },
        }
    }

    /// Where activating `affordance` leads, if anywhere.
    #[must_use]
    pub fn resolve(self, affordance: &Affordance) -> Option<PageId> {
        if self.is_imported() {
            click_map::resolve(affordance.label)
        } else {
            affordance.target
        }
    }

    /// Resolve the affordance at `index`. Out-of-range indices lead nowhere.
    #[must_use]
    pub fn activate(self, index: usize) -> Option<PageId> {
        self.affordances()
            .get(index)
            .and_then(|affordance| self.resolve(affordance))
    }
}
