//! Static configuration for every section of the guide page.
//!
//! Card sections render once from a single directory; the food and
//! nightlife list sections aggregate several directories, carry the
//! grouped-list strategy, and stay toggleable afterwards. Sub-grouping
//! bucket names are configuration data here, not code branches in the
//! renderer.

use crate::store::{ContentKind, DirSource};

/// Which optional fields a category-card row shows, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTemplate {
    /// Name plus "Best for: {bestFor} • {vibe}".
    Neighborhood,
    /// Name plus the known-for blurb.
    Blurb,
    /// Name plus the survival rule.
    Rule,
    /// Name, linked address, price range, blurb.
    Venue,
    /// Name, linked address, blurb. Clubs don't list prices.
    VenueNoPrice,
}

/// Which items a bucket collects.
#[derive(Debug, Clone, Copy)]
pub enum BucketFilter {
    /// Items whose `category` field matches one of these values.
    Categories(&'static [&'static str]),
    /// Items matched by no `Categories` bucket in the same table.
    Rest,
}

/// One named sub-group inside a category card. Empty buckets are omitted
/// from the rendered card entirely.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub heading: &'static str,
    pub filter: BucketFilter,
}

/// Card rendering strategy for a section.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Single container card holding all items, optionally bucketed.
    CategoryCard {
        template: RowTemplate,
        buckets: &'static [Bucket],
    },
    /// One self-contained card per item (walks, museums, day trips).
    IndividualCard,
}

/// A card section: mount point `#{id} .cards-grid`, one data directory.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub id: &'static str,
    pub data_path: &'static str,
    pub strategy: Strategy,
}

const RESTAURANT_BUCKETS: &[Bucket] = &[
    Bucket {
        heading: "Top Picks (Book These)",
        filter: BucketFilter::Categories(&["Top Pick"]),
    },
    Bucket {
        heading: "Great Spanish Food",
        filter: BucketFilter::Categories(&["Great Spanish Food"]),
    },
    Bucket {
        heading: "Something Different",
        filter: BucketFilter::Categories(&["Something Different"]),
    },
];

const BAR_BUCKETS: &[Bucket] = &[
    Bucket {
        heading: "Cocktails (Before Club)",
        filter: BucketFilter::Categories(&["Cocktails", "Cocktail Bar"]),
    },
    Bucket {
        heading: "Bars",
        filter: BucketFilter::Rest,
    },
];

const CLUB_BUCKETS: &[Bucket] = &[
    Bucket {
        heading: "Big / Commercial",
        filter: BucketFilter::Categories(&["Big / Commercial"]),
    },
    Bucket {
        heading: "Indie / Alternative",
        filter: BucketFilter::Categories(&["Indie / Alternative"]),
    },
    Bucket {
        heading: "Fun / Chaos / University",
        filter: BucketFilter::Categories(&["Fun / Chaos / University"]),
    },
];

pub const CARD_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "neighborhoods",
        data_path: "data/neighborhoods",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Neighborhood,
            buckets: &[],
        },
    },
    SectionSpec {
        id: "restaurants",
        data_path: "data/food-recs/restaurants",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Venue,
            buckets: RESTAURANT_BUCKETS,
        },
    },
    SectionSpec {
        id: "brunch",
        data_path: "data/food-recs/brunch",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Venue,
            buckets: &[],
        },
    },
    SectionSpec {
        id: "coffee",
        data_path: "data/food-recs/coffee",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Venue,
            buckets: &[],
        },
    },
    SectionSpec {
        id: "burgers",
        data_path: "data/food-recs/burgers",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Venue,
            buckets: &[],
        },
    },
    SectionSpec {
        id: "pizza",
        data_path: "data/food-recs/pizza",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Venue,
            buckets: &[],
        },
    },
    SectionSpec {
        id: "sweets",
        data_path: "data/food-recs/sweets",
        strategy: Strategy::IndividualCard,
    },
    SectionSpec {
        id: "bars",
        data_path: "data/bars",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Venue,
            buckets: BAR_BUCKETS,
        },
    },
    SectionSpec {
        id: "clubs",
        data_path: "data/nightlife",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::VenueNoPrice,
            buckets: CLUB_BUCKETS,
        },
    },
    SectionSpec {
        id: "walks",
        data_path: "data/walks",
        strategy: Strategy::IndividualCard,
    },
    SectionSpec {
        id: "museums",
        data_path: "data/museums",
        strategy: Strategy::IndividualCard,
    },
    SectionSpec {
        id: "day-trips",
        data_path: "data/day-trips",
        strategy: Strategy::IndividualCard,
    },
    SectionSpec {
        id: "must-try",
        data_path: "data/must-try",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Blurb,
            buckets: &[],
        },
    },
    SectionSpec {
        id: "tips",
        data_path: "data/survival-rules",
        strategy: Strategy::CategoryCard {
            template: RowTemplate::Rule,
            buckets: &[],
        },
    },
];

/// A toggle-enabled list section: grouped-list strategy over cached,
/// multi-directory content.
#[derive(Debug, Clone, Copy)]
pub struct ListSectionSpec {
    pub id: &'static str,
    pub selector: &'static str,
    pub kind: ContentKind,
}

pub const LIST_SECTIONS: &[ListSectionSpec] = &[
    ListSectionSpec {
        id: "food",
        selector: "#food .list-grid",
        kind: ContentKind::Food,
    },
    ListSectionSpec {
        id: "nightlife",
        selector: "#nightlife .list-grid",
        kind: ContentKind::Nightlife,
    },
];

const FOOD_SOURCES: &[DirSource] = &[
    DirSource {
        path: "data/food-recs/tapas",
        label: "Tapas",
    },
    DirSource {
        path: "data/food-recs/restaurants",
        label: "Restaurants",
    },
    DirSource {
        path: "data/food-recs/brunch",
        label: "Brunch",
    },
    DirSource {
        path: "data/food-recs/coffee",
        label: "Coffee",
    },
    DirSource {
        path: "data/food-recs/burgers",
        label: "Burgers",
    },
    DirSource {
        path: "data/food-recs/pizza",
        label: "Pizza",
    },
];

const NIGHTLIFE_SOURCES: &[DirSource] = &[
    DirSource {
        path: "data/bars",
        label: "Bars",
    },
    DirSource {
        path: "data/nightlife",
        label: "Clubs",
    },
];

pub fn sources_for(kind: ContentKind) -> &'static [DirSource] {
    match kind {
        ContentKind::Food => FOOD_SOURCES,
        ContentKind::Nightlife => NIGHTLIFE_SOURCES,
    }
}

// ── Standalone sections with their own renderers ────────────

pub const INTRO_SELECTOR: &str = ".intro__content";
pub const INTRO_PATH: &str = "data/intro.txt";

pub const SIGHTSEEING_SELECTOR: &str = "#sightseeing .sightseeing-content";
pub const SIGHTSEEING_PATH: &str = "data/sightseeing.json";

pub const MUST_TRY_SELECTOR: &str = "#must-try .must-try-list";
pub const MUST_TRY_PATH: &str = "data/must-try";

pub const DONT_MISS_SELECTOR: &str = "#dont-miss .dont-miss-list";
pub const DONT_MISS_PATH: &str = "data/dont-miss";

pub const NEIGHBORHOODS_SELECTOR: &str = "#neighborhoods .neighborhoods-list";
pub const NEIGHBORHOODS_PATH: &str = "data/neighborhoods";
