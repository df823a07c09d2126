//! Cycle baskets — curated long and short holdings for the current cycle.

use chrono::NaiveDate;
use serde::Serialize;
use signaldesk_core::{to_records, CellFormat, ColumnSpec, Record, RecordError};

#[derive(Debug, Clone, Serialize)]
pub struct CycleOutlook {
    pub phase: CyclePhase,
    pub confidence: u8,
    pub duration: String,
    pub next_review: NaiveDate,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Long,
    Short,
}

impl CyclePhase {
    pub fn label(self) -> &'static str {
        match self {
            CyclePhase::Long => "LONG",
            CyclePhase::Short => "SHORT",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Basket {
    pub name: String,
    pub phase: CyclePhase,
    pub status: BasketStatus,
    pub last_updated: NaiveDate,
    pub avg_performance: f64,
    pub description: String,
    pub holdings: Vec<Holding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BasketStatus {
    Active,
    Standby,
}

#[derive(Debug, Clone, Serialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub entry_price: f64,
    pub current_price: f64,
    pub call_date: NaiveDate,
    pub performance_pct: f64,
    pub weight_pct: f64,
    pub rationale: String,
    pub desk_note: String,
}

/// Column schema for basket holdings tables.
pub fn holding_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec { id: "symbol", label: "Token", path: "symbol", sortable: true, searchable: true, width: 6, format: CellFormat::Plain },
        ColumnSpec { id: "name", label: "Name", path: "name", sortable: false, searchable: true, width: 12, format: CellFormat::Plain },
        ColumnSpec { id: "entry", label: "Entry", path: "entry_price", sortable: true, searchable: false, width: 11, format: CellFormat::Currency },
        ColumnSpec { id: "current", label: "Current", path: "current_price", sortable: true, searchable: false, width: 11, format: CellFormat::Currency },
        ColumnSpec { id: "called", label: "Called", path: "call_date", sortable: true, searchable: false, width: 10, format: CellFormat::Plain },
        ColumnSpec { id: "perf", label: "Perf%", path: "performance_pct", sortable: true, searchable: false, width: 8, format: CellFormat::SignedPercent },
        ColumnSpec { id: "weight", label: "Weight", path: "weight_pct", sortable: true, searchable: false, width: 6, format: CellFormat::Percent },
    ]
}

pub fn holding_records(basket: &Basket) -> Result<Vec<Record>, RecordError> {
    to_records(&basket.holdings)
}

pub fn cycle_outlook() -> CycleOutlook {
    CycleOutlook {
        phase: CyclePhase::Long,
        confidence: 91,
        duration: "47 days".to_string(),
        next_review: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
        reasoning: "DXY weakness + BTC institutional flows + Seoul market leadership point to \
                    a sustained bull leg."
            .to_string(),
    }
}

pub fn long_basket() -> Basket {
    Basket {
        name: "Desk Long Basket".to_string(),
        phase: CyclePhase::Long,
        status: BasketStatus::Active,
        last_updated: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
        avg_performance: 147.3,
        description: "Bull-cycle basket: L1s, Seoul-flow tokens, institutional adoption plays."
            .to_string(),
        holdings: vec![
            Holding {
                symbol: "SOL".to_string(),
                name: "Solana".to_string(),
                entry_price: 89.50,
                current_price: 198.75,
                call_date: NaiveDate::from_ymd_opt(2024, 12, 12).unwrap(),
                performance_pct: 122.1,
                weight_pct: 20.0,
                rationale: "Seoul institutional adoption + DEX dominance".to_string(),
                desk_note: "Perfect execution on the overnight-flow thesis".to_string(),
            },
            Holding {
                symbol: "AVAX".to_string(),
                name: "Avalanche".to_string(),
                entry_price: 24.80,
                current_price: 47.30,
                call_date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
                performance_pct: 90.7,
                weight_pct: 15.0,
                rationale: "L1 rotation + institutional partnerships".to_string(),
                desk_note: "Gaming-sector catalyst expected Q2".to_string(),
            },
            Holding {
                symbol: "NEAR".to_string(),
                name: "Near Protocol".to_string(),
                entry_price: 3.45,
                current_price: 8.90,
                call_date: NaiveDate::from_ymd_opt(2024, 12, 18).unwrap(),
                performance_pct: 158.0,
                weight_pct: 12.0,
                rationale: "AI narrative + developer activity surge".to_string(),
                desk_note: "Undervalued L1 with strong fundamentals".to_string(),
            },
            Holding {
                symbol: "PEPE".to_string(),
                name: "Pepe".to_string(),
                entry_price: 0.0000087,
                current_price: 0.0000234,
                call_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                performance_pct: 169.0,
                weight_pct: 10.0,
                rationale: "Seoul meme season + listing catalyst".to_string(),
                desk_note: "Timed the retail FOMO window exactly".to_string(),
            },
            Holding {
                symbol: "WIF".to_string(),
                name: "dogwifhat".to_string(),
                entry_price: 1.24,
                current_price: 2.87,
                call_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
                performance_pct: 131.5,
                weight_pct: 8.0,
                rationale: "Second-leg meme rotation behind PEPE".to_string(),
                desk_note: "Cut to half weight if PEPE stalls".to_string(),
            },
        ],
    }
}

pub fn short_basket() -> Basket {
    Basket {
        name: "Desk Short Basket".to_string(),
        phase: CyclePhase::Short,
        status: BasketStatus::Standby,
        last_updated: NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
        avg_performance: 38.4,
        description: "Bear-cycle basket: overextended L2s and weak-narrative alts. Armed only \
                      when the cycle flips."
            .to_string(),
        holdings: vec![
            Holding {
                symbol: "MATIC".to_string(),
                name: "Polygon".to_string(),
                entry_price: 1.12,
                current_price: 0.87,
                call_date: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(),
                performance_pct: 22.3,
                weight_pct: 25.0,
                rationale: "L2 fee compression + narrative fatigue".to_string(),
                desk_note: "Working even in a risk-on tape".to_string(),
            },
            Holding {
                symbol: "DOT".to_string(),
                name: "Polkadot".to_string(),
                entry_price: 9.40,
                current_price: 6.85,
                call_date: NaiveDate::from_ymd_opt(2024, 11, 22).unwrap(),
                performance_pct: 27.1,
                weight_pct: 20.0,
                rationale: "Parachain activity bleeding to rivals".to_string(),
                desk_note: "Cover a third into the 6.50 shelf".to_string(),
            },
            Holding {
                symbol: "ATOM".to_string(),
                name: "Cosmos".to_string(),
                entry_price: 11.90,
                current_price: 8.20,
                call_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                performance_pct: 31.1,
                weight_pct: 15.0,
                rationale: "Token-unlock overhang into thin demand".to_string(),
                desk_note: "Unlock calendar clears mid-February".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signaldesk_core::TableSchema;

    #[test]
    fn weights_stay_under_full_allocation() {
        for basket in [long_basket(), short_basket()] {
            let total: f64 = basket.holdings.iter().map(|h| h.weight_pct).sum();
            assert!(total <= 100.0, "{} over-allocated", basket.name);
        }
    }

    #[test]
    fn call_dates_serialize_sortable_iso() {
        let records = holding_records(&long_basket()).unwrap();
        let schema = TableSchema::new(&holding_columns()).unwrap();
        let called = schema.column("called").unwrap();
        // ISO dates sort correctly as text.
        assert_eq!(called.render(&records[0]), "2024-12-12");
    }

    #[test]
    fn long_basket_performance_matches_prices() {
        for holding in long_basket().holdings {
            let implied = (holding.current_price / holding.entry_price - 1.0) * 100.0;
            assert!(
                (implied - holding.performance_pct).abs() < 1.0,
                "{} performance drifted from prices",
                holding.symbol
            );
        }
    }
}
