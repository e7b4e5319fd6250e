// src/domain/filter.rs

use crate::domain::listing::NormalizedRecord;
use std::fmt;
use std::str::FromStr;

/// Label the UI shows for "nothing picked yet", shared by both selectors.
pub const UNSELECTED_LABEL: &str = "以下から選択してください";

/// Number of train lines serving the nearest station.
/// Buckets are assigned upstream; here they are just tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitBucket {
    #[default]
    Unselected,
    Low,
    Mid,
    High,
}

impl TransitBucket {
    pub const ALL: [TransitBucket; 4] = [
        TransitBucket::Unselected,
        TransitBucket::Low,
        TransitBucket::Mid,
        TransitBucket::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransitBucket::Unselected => UNSELECTED_LABEL,
            TransitBucket::Low => "やや多い(8～9本)",
            TransitBucket::Mid => "多い(10～14本)",
            TransitBucket::High => "とても多い(15本～)",
        }
    }
}

/// Monthly cost tier, fees included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBucket {
    #[default]
    Unselected,
    Tier1,
    Tier2,
    Tier3,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 4] = [
        PriceBucket::Unselected,
        PriceBucket::Tier1,
        PriceBucket::Tier2,
        PriceBucket::Tier3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::Unselected => UNSELECTED_LABEL,
            PriceBucket::Tier1 => "15万円以内",
            PriceBucket::Tier2 => "20万円以内",
            PriceBucket::Tier3 => "25万円以内",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBucket(pub String);

impl fmt::Display for UnknownBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown bucket label '{}'", self.0)
    }
}

impl std::error::Error for UnknownBucket {}

impl FromStr for TransitBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransitBucket::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

impl FromStr for PriceBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceBucket::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

/// The two radio selections, as picked in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorPair {
    pub transit: TransitBucket,
    pub price: PriceBucket,
}

impl SelectorPair {
    pub fn new(transit: TransitBucket, price: PriceBucket) -> Self {
        Self { transit, price }
    }

    pub fn is_complete(&self) -> bool {
        self.transit != TransitBucket::Unselected && self.price != PriceBucket::Unselected
    }
}

/// "No selection yet" and "selected, nothing matched" must stay distinct.
#[derive(Debug, PartialEq)]
pub enum FilterOutcome<'a> {
    Inactive,
    Active(Vec<&'a NormalizedRecord>),
}

impl<'a> FilterOutcome<'a> {
    pub fn records(&self) -> &[&'a NormalizedRecord] {
        match self {
            FilterOutcome::Inactive => &[],
            FilterOutcome::Active(records) => records,
        }
    }
}

/// Exact label match on both axes. Order of the input is kept.
pub fn filter<'a>(records: &'a [NormalizedRecord], selectors: &SelectorPair) -> FilterOutcome<'a> {
    if !selectors.is_complete() {
        return FilterOutcome::Inactive;
    }

    let transit = selectors.transit.label();
    let price = selectors.price.label();

    FilterOutcome::Active(
        records
            .iter()
            .filter(|r| r.transit_bucket == transit && r.price_bucket == price)
            .collect(),
    )
}
