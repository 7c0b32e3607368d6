//! # Filter/Sort Pipeline
//!
//! Derives the ordered view shown in printer listings from the store's list.
//!
//! The criteria in [`FilterState`] are applied one after another, in a fixed
//! order, each step working on the output of the previous one:
//!
//! 1. `brand`: sort by `"{brand} {model}"`
//! 2. `position`: sort by `"{building}-{floor}"`
//! 3. `paper_count`: sort by paper quantity
//! 4. `status`: keep only printers with that exact status
//!
//! Each sort is a full, stable re-sort, so when several sort criteria are set
//! the last one in this order decides the final ordering. Earlier keys only
//! survive as tie-breakers. Setting `brand` and `paper_count` together orders
//! by paper count, not by brand-then-paper.
//!
//! String keys compare by code point (case-sensitive, no locale collation).

use crate::model::{PrinterRecord, PrinterStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn order<T: Ord>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction '{}' (expected asc or desc)", other)),
        }
    }
}

/// The columns a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Brand,
    Position,
    PaperCount,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Brand => write!(f, "brand"),
            SortKey::Position => write!(f, "position"),
            SortKey::PaperCount => write!(f, "paper"),
        }
    }
}

/// Active listing criteria. `None` means the criterion is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub brand: Option<SortDirection>,
    pub position: Option<SortDirection>,
    pub paper_count: Option<SortDirection>,
    pub status: Option<PrinterStatus>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The sort that ends up deciding the order: the last one set, in
    /// pipeline order.
    pub fn effective_sort(&self) -> Option<(SortKey, SortDirection)> {
        [
            (SortKey::PaperCount, self.paper_count),
            (SortKey::Position, self.position),
            (SortKey::Brand, self.brand),
        ]
        .into_iter()
        .find_map(|(key, dir)| dir.map(|d| (key, d)))
    }

    /// Fills every unset criterion from `fallback`.
    pub fn or(self, fallback: FilterState) -> FilterState {
        FilterState {
            brand: self.brand.or(fallback.brand),
            position: self.position.or(fallback.position),
            paper_count: self.paper_count.or(fallback.paper_count),
            status: self.status.or(fallback.status),
        }
    }
}

/// Runs the pipeline over `printers`, returning a new vector.
pub fn apply(printers: &[PrinterRecord], state: &FilterState) -> Vec<PrinterRecord> {
    let mut view = printers.to_vec();

    if let Some(dir) = state.brand {
        view.sort_by(|a, b| dir.order(&a.brand_key(), &b.brand_key()));
    }

    if let Some(dir) = state.position {
        view.sort_by(|a, b| dir.order(&a.position_key(), &b.position_key()));
    }

    if let Some(dir) = state.paper_count {
        view.sort_by(|a, b| dir.order(&a.fields.paper_quantity, &b.fields.paper_quantity));
    }

    if let Some(status) = state.status {
        view.retain(|p| p.fields.status == status);
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> Vec<PrinterRecord> {
        StoreFixture::new()
            .with_printer("HP", "LaserJet", ("H1", "201"), 500, PrinterStatus::Active)
            .with_printer("Canon", "LBP", ("B4", "105"), 20, PrinterStatus::Maintenance)
            .with_printer("Epson", "L805", ("A2", "310"), 300, PrinterStatus::Active)
            .with_printer("Brother", "HL", ("H1", "102"), 20, PrinterStatus::Inactive)
            .store
            .list()
            .to_vec()
    }

    fn brands(view: &[PrinterRecord]) -> Vec<&str> {
        view.iter().map(|p| p.fields.brand.as_str()).collect()
    }

    #[test]
    fn empty_state_is_identity() {
        let printers = fixture();
        assert_eq!(apply(&printers, &FilterState::default()), printers);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let state = FilterState {
            brand: Some(SortDirection::Asc),
            status: Some(PrinterStatus::Active),
            ..Default::default()
        };
        assert!(apply(&[], &state).is_empty());
    }

    #[test]
    fn sorts_by_brand_and_model() {
        let printers = fixture();
        let asc = FilterState {
            brand: Some(SortDirection::Asc),
            ..Default::default()
        };
        let desc = FilterState {
            brand: Some(SortDirection::Desc),
            ..Default::default()
        };
        assert_eq!(brands(&apply(&printers, &asc)), ["Brother", "Canon", "Epson", "HP"]);
        assert_eq!(brands(&apply(&printers, &desc)), ["HP", "Epson", "Canon", "Brother"]);
    }

    #[test]
    fn brand_sort_is_case_sensitive() {
        let printers = StoreFixture::new()
            .with_printer("apple", "x", ("A1", "100"), 1, PrinterStatus::Active)
            .with_printer("Zebra", "x", ("A1", "100"), 1, PrinterStatus::Active)
            .store
            .list()
            .to_vec();
        let state = FilterState {
            brand: Some(SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(brands(&apply(&printers, &state)), ["Zebra", "apple"]);
    }

    #[test]
    fn sorts_by_position() {
        let state = FilterState {
            position: Some(SortDirection::Asc),
            ..Default::default()
        };
        let view = apply(&fixture(), &state);
        let positions: Vec<_> = view.iter().map(|p| p.position_key()).collect();
        assert_eq!(positions, ["A2-310", "B4-105", "H1-102", "H1-201"]);
    }

    #[test]
    fn later_sort_key_wins() {
        let printers = fixture();
        let combined = FilterState {
            brand: Some(SortDirection::Asc),
            paper_count: Some(SortDirection::Desc),
            ..Default::default()
        };
        let paper_only = FilterState {
            paper_count: Some(SortDirection::Desc),
            ..Default::default()
        };
        let view = apply(&printers, &combined);
        let quantities: Vec<_> = view.iter().map(|p| p.fields.paper_quantity).collect();
        assert_eq!(quantities, [500, 300, 20, 20]);
        assert_eq!(view[0].fields.brand, "HP");
        assert_eq!(
            apply(&printers, &paper_only)
                .iter()
                .map(|p| p.fields.paper_quantity)
                .collect::<Vec<_>>(),
            quantities
        );
        assert_eq!(
            combined.effective_sort(),
            Some((SortKey::PaperCount, SortDirection::Desc))
        );
    }

    #[test]
    fn earlier_sort_breaks_ties() {
        // Canon and Brother both have 20 sheets; brand desc left Canon first.
        let state = FilterState {
            brand: Some(SortDirection::Desc),
            paper_count: Some(SortDirection::Asc),
            ..Default::default()
        };
        assert_eq!(brands(&apply(&fixture(), &state))[..2], ["Canon", "Brother"]);
    }

    #[test]
    fn status_filter_keeps_prior_order() {
        let state = FilterState {
            paper_count: Some(SortDirection::Asc),
            status: Some(PrinterStatus::Active),
            ..Default::default()
        };
        let view = apply(&fixture(), &state);
        assert!(view.iter().all(|p| p.fields.status == PrinterStatus::Active));
        assert_eq!(brands(&view), ["Epson", "HP"]);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let printers = fixture();
        let states = [
            FilterState {
                brand: Some(SortDirection::Desc),
                ..Default::default()
            },
            FilterState {
                position: Some(SortDirection::Asc),
                paper_count: Some(SortDirection::Desc),
                status: Some(PrinterStatus::Active),
                ..Default::default()
            },
        ];
        for state in states {
            let once = apply(&printers, &state);
            assert_eq!(apply(&once, &state), once);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let printers = fixture();
        let before = printers.clone();
        let _ = apply(
            &printers,
            &FilterState {
                brand: Some(SortDirection::Desc),
                ..Default::default()
            },
        );
        assert_eq!(printers, before);
    }

    #[test]
    fn or_fills_unset_criteria() {
        let explicit = FilterState {
            brand: Some(SortDirection::Asc),
            ..Default::default()
        };
        let fallback = FilterState {
            brand: Some(SortDirection::Desc),
            status: Some(PrinterStatus::Maintenance),
            ..Default::default()
        };
        let merged = explicit.or(fallback);
        assert_eq!(merged.brand, Some(SortDirection::Asc));
        assert_eq!(merged.status, Some(PrinterStatus::Maintenance));
    }

    #[test]
    fn direction_parses() {
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
