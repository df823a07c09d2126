//! Application state — single-owner, main-thread only.
//!
//! The catalog is loaded once at startup; every interactive table keeps its
//! records and a `TableView` side by side and recomputes the visible rows
//! from the full list on each render.

use anyhow::Result;
use signaldesk_core::{Criterion, FieldPath, Record, TableSchema, TableView};
use signaldesk_data::baskets::{self, Basket, CycleOutlook, CyclePhase};
use signaldesk_data::feed::{self, Alert, UpdateEntry};
use signaldesk_data::intel::{self, IntelFeed};
use signaldesk_data::macro_board::{self, MacroBoard};
use signaldesk_data::market::{self, MarketStatus};
use signaldesk_data::performance::{self, DeskPerformance};
use signaldesk_data::scanner;
use signaldesk_data::setups::{self, SetupStatus};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Dashboard,
    Setups,
    Scanner,
    Intel,
    Baskets,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Dashboard => 0,
            Panel::Setups => 1,
            Panel::Scanner => 2,
            Panel::Intel => 3,
            Panel::Baskets => 4,
            Panel::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Dashboard),
            1 => Some(Panel::Setups),
            2 => Some(Panel::Scanner),
            3 => Some(Panel::Intel),
            4 => Some(Panel::Baskets),
            5 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Setups => "Setups",
            Panel::Scanner => "Scanner",
            Panel::Intel => "Intel",
            Panel::Baskets => "Baskets",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 6).unwrap_or(Panel::Dashboard)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 5) % 6).unwrap_or(Panel::Dashboard)
    }
}

/// Modal overlays drawn on top of the active panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Free-text search editor for the setups explorer.
    Search,
    /// Token dossier for the given symbol.
    Detail(String),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Confidence band filter for the setups explorer, cycled with `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    All,
    /// 90 and up.
    High,
    /// 80 to 89.
    Medium,
    /// Below 80.
    Low,
}

impl ConfidenceBand {
    pub fn next(self) -> Self {
        match self {
            ConfidenceBand::All => ConfidenceBand::High,
            ConfidenceBand::High => ConfidenceBand::Medium,
            ConfidenceBand::Medium => ConfidenceBand::Low,
            ConfidenceBand::Low => ConfidenceBand::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceBand::All => "all",
            ConfidenceBand::High => "90+",
            ConfidenceBand::Medium => "80-89",
            ConfidenceBand::Low => "<80",
        }
    }

    fn criterion(self, path: &FieldPath) -> Option<Criterion> {
        let (min, max) = match self {
            ConfidenceBand::All => return None,
            ConfidenceBand::High => (90.0, None),
            ConfidenceBand::Medium => (80.0, Some(90.0)),
            ConfidenceBand::Low => (0.0, Some(80.0)),
        };
        Some(Criterion::Range { path: path.clone(), min, max })
    }
}

/// Records plus view state plus cursors for one interactive table.
#[derive(Debug)]
pub struct TablePanelState {
    pub records: Vec<Record>,
    pub view: TableView,
    /// Row cursor into the *visible* sequence.
    pub cursor: usize,
    /// Column cursor into the schema, for sort selection.
    pub col_cursor: usize,
}

impl TablePanelState {
    pub fn new(records: Vec<Record>, view: TableView) -> Self {
        Self { records, view, cursor: 0, col_cursor: 0 }
    }

    pub fn visible(&self) -> Vec<&Record> {
        self.view.apply(&self.records)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    pub fn selected(&self) -> Option<Record> {
        self.visible().get(self.cursor).map(|r| (*r).clone())
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible_len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Keep the row cursor inside the visible range after a filter change.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn col_left(&mut self) {
        self.col_cursor = self.col_cursor.saturating_sub(1);
    }

    pub fn col_right(&mut self) {
        let count = self.view.schema().columns().len();
        if count > 0 && self.col_cursor + 1 < count {
            self.col_cursor += 1;
        }
    }

    /// Toggle the sort on the column under the cursor. Returns the column id
    /// when the sort changed.
    pub fn toggle_sort_at_cursor(&mut self) -> Option<&'static str> {
        let id = self.view.schema().columns().get(self.col_cursor)?.id();
        self.view.toggle_sort(id).then_some(id)
    }
}

/// Scanner minimum-confidence gate, cycled with `m`.
const SCANNER_THRESHOLDS: [Option<f64>; 4] = [None, Some(70.0), Some(80.0), Some(90.0)];

pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,

    // Static catalog
    pub market: MarketStatus,
    pub performance: DeskPerformance,
    pub updates: Vec<UpdateEntry>,
    pub alerts: Vec<Alert>,
    pub intel: IntelFeed,
    pub macro_board: MacroBoard,
    pub outlook: CycleOutlook,
    pub long_basket: Basket,
    pub short_basket: Basket,

    // Interactive tables
    pub setups: TablePanelState,
    pub scanner: TablePanelState,
    pub holdings: TablePanelState,

    // Top setups for the dashboard, confidence-descending.
    pub top_setups: Vec<Record>,

    // Setups explorer filter cycles
    pub status_filter: Option<SetupStatus>,
    pub confidence_band: ConfidenceBand,
    confidence_path: FieldPath,
    status_path: FieldPath,

    // Scanner threshold cycle
    pub scanner_threshold_idx: usize,
    scanner_conf_path: FieldPath,

    // Which basket the holdings table shows
    pub basket_phase: CyclePhase,

    // Overlay editing buffer
    pub search_input: String,

    // Intel panel scroll
    pub intel_scroll: usize,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let setup_records = setups::setup_records()?;
        let setup_schema = TableSchema::new(&setups::setup_columns())?;
        let setups_table = TablePanelState::new(setup_records, TableView::new(setup_schema));

        let scanner_records = scanner::scanner_records()?;
        let scanner_schema = TableSchema::new(&scanner::scanner_columns())?;
        let mut scanner_table =
            TablePanelState::new(scanner_records, TableView::new(scanner_schema));
        // Hot names first by default.
        scanner_table.view.toggle_sort("heat");
        scanner_table.view.toggle_sort("heat");

        let long_basket = baskets::long_basket();
        let short_basket = baskets::short_basket();
        let holding_schema = TableSchema::new(&baskets::holding_columns())?;
        let holdings =
            TablePanelState::new(baskets::holding_records(&long_basket)?, TableView::new(holding_schema));

        let top_setups = {
            let mut view = TableView::new(TableSchema::new(&setups::setup_columns())?);
            view.toggle_sort("conf");
            view.toggle_sort("conf");
            view.apply(&setups_table.records)
                .into_iter()
                .take(3)
                .cloned()
                .collect()
        };

        Ok(Self {
            running: true,
            active_panel: Panel::Dashboard,
            overlay: Overlay::None,
            status_message: None,
            market: market::market_status(),
            performance: performance::desk_performance(),
            updates: feed::live_updates(),
            alerts: feed::alerts(),
            intel: intel::intel_feed(),
            macro_board: macro_board::macro_board(),
            outlook: baskets::cycle_outlook(),
            long_basket,
            short_basket,
            setups: setups_table,
            scanner: scanner_table,
            holdings,
            top_setups,
            status_filter: None,
            confidence_band: ConfidenceBand::All,
            confidence_path: FieldPath::parse("confidence")?,
            status_path: FieldPath::parse("status")?,
            scanner_threshold_idx: 0,
            scanner_conf_path: FieldPath::parse("confidence")?,
            basket_phase: CyclePhase::Long,
            search_input: String::new(),
            intel_scroll: 0,
        })
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Warning));
    }

    /// Advance the setups status filter: all → each status → all.
    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(SetupStatus::ALL[0]),
            Some(current) => {
                let idx = SetupStatus::ALL.iter().position(|s| *s == current);
                match idx {
                    Some(i) if i + 1 < SetupStatus::ALL.len() => Some(SetupStatus::ALL[i + 1]),
                    _ => None,
                }
            }
        };
        match self.status_filter {
            Some(status) => {
                self.setups.view.set_criterion(
                    "status",
                    Criterion::Equals {
                        path: self.status_path.clone(),
                        expected: status.as_str().to_string(),
                    },
                );
                self.set_status(format!("Status filter: {}", status.label()));
            }
            None => {
                self.setups.view.remove_criterion("status");
                self.set_status("Status filter cleared");
            }
        }
        self.setups.clamp_cursor();
    }

    /// Advance the setups confidence band filter.
    pub fn cycle_confidence_band(&mut self) {
        self.confidence_band = self.confidence_band.next();
        match self.confidence_band.criterion(&self.confidence_path) {
            Some(criterion) => self.setups.view.set_criterion("confidence", criterion),
            None => self.setups.view.remove_criterion("confidence"),
        }
        self.set_status(format!("Confidence filter: {}", self.confidence_band.label()));
        self.setups.clamp_cursor();
    }

    /// Advance the scanner minimum-confidence gate.
    pub fn cycle_scanner_threshold(&mut self) {
        self.scanner_threshold_idx = (self.scanner_threshold_idx + 1) % SCANNER_THRESHOLDS.len();
        match SCANNER_THRESHOLDS[self.scanner_threshold_idx] {
            Some(min) => {
                self.scanner.view.set_criterion(
                    "confidence",
                    Criterion::Range {
                        path: self.scanner_conf_path.clone(),
                        min,
                        max: None,
                    },
                );
                self.set_status(format!("Scanner: confidence >= {min:.0}"));
            }
            None => {
                self.scanner.view.remove_criterion("confidence");
                self.set_status("Scanner: all confidence levels");
            }
        }
        self.scanner.clamp_cursor();
    }

    pub fn scanner_threshold(&self) -> Option<f64> {
        SCANNER_THRESHOLDS[self.scanner_threshold_idx]
    }

    /// Reset the setups explorer: search, filters, sort.
    pub fn reset_setups_view(&mut self) {
        self.setups.view.reset();
        self.status_filter = None;
        self.confidence_band = ConfidenceBand::All;
        self.setups.cursor = 0;
        self.set_status("Setups view reset");
    }

    /// Swap the holdings table between the long and short basket.
    pub fn toggle_basket(&mut self) -> Result<()> {
        self.basket_phase = match self.basket_phase {
            CyclePhase::Long => CyclePhase::Short,
            CyclePhase::Short => CyclePhase::Long,
        };
        let records = baskets::holding_records(self.current_basket())?;
        self.holdings.records = records;
        self.holdings.cursor = 0;
        self.holdings.clamp_cursor();
        Ok(())
    }

    pub fn current_basket(&self) -> &Basket {
        match self.basket_phase {
            CyclePhase::Long => &self.long_basket,
            CyclePhase::Short => &self.short_basket,
        }
    }

    /// Apply the search overlay buffer to the setups view.
    pub fn apply_search(&mut self) {
        let text = self.search_input.trim().to_string();
        if text.is_empty() {
            self.setups.view.clear_search();
            self.set_status("Search cleared");
        } else {
            self.set_status(format!("Search: {text}"));
            self.setups.view.set_search(text);
        }
        self.search_input.clear();
        self.overlay = Overlay::None;
        self.setups.clamp_cursor();
    }

    /// Open the dossier overlay for the row under the setups cursor.
    pub fn open_selected_dossier(&mut self) {
        let Some(record) = self.setups.selected() else {
            return;
        };
        let symbol = record.as_value()["token"].as_str().unwrap_or_default().to_string();
        if symbol.is_empty() {
            return;
        }
        self.overlay = Overlay::Detail(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_cycle_wraps() {
        assert_eq!(Panel::Help.next(), Panel::Dashboard);
        assert_eq!(Panel::Dashboard.prev(), Panel::Help);
        assert_eq!(Panel::Dashboard.next(), Panel::Setups);
    }

    #[test]
    fn app_state_builds_from_catalog() {
        let app = AppState::new().unwrap();
        assert_eq!(app.setups.records.len(), 6);
        assert_eq!(app.top_setups.len(), 3);
        assert!(app.running);
    }

    #[test]
    fn top_setups_are_confidence_descending() {
        let app = AppState::new().unwrap();
        let confs: Vec<f64> = app
            .top_setups
            .iter()
            .map(|r| r.as_value()["confidence"].as_f64().unwrap())
            .collect();
        assert!(confs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn status_filter_cycles_back_to_all() {
        let mut app = AppState::new().unwrap();
        let total = app.setups.visible_len();
        for _ in 0..SetupStatus::ALL.len() {
            app.cycle_status_filter();
            assert!(app.status_filter.is_some());
        }
        app.cycle_status_filter();
        assert!(app.status_filter.is_none());
        assert_eq!(app.setups.visible_len(), total);
    }

    #[test]
    fn confidence_band_narrows_and_restores() {
        let mut app = AppState::new().unwrap();
        let total = app.setups.visible_len();
        app.cycle_confidence_band(); // 90+
        assert!(app.setups.visible_len() < total);
        app.cycle_confidence_band(); // 80-89
        app.cycle_confidence_band(); // <80
        assert_eq!(app.setups.visible_len(), 0);
        app.cycle_confidence_band(); // all
        assert_eq!(app.setups.visible_len(), total);
    }

    #[test]
    fn scanner_threshold_gates_rows() {
        let mut app = AppState::new().unwrap();
        let total = app.scanner.visible_len();
        app.cycle_scanner_threshold(); // 70
        assert_eq!(app.scanner_threshold(), Some(70.0));
        app.cycle_scanner_threshold(); // 80
        app.cycle_scanner_threshold(); // 90
        assert_eq!(app.scanner.visible_len(), 1);
        app.cycle_scanner_threshold(); // all
        assert_eq!(app.scanner.visible_len(), total);
    }

    #[test]
    fn basket_toggle_swaps_holdings() {
        let mut app = AppState::new().unwrap();
        let long_rows = app.holdings.records.len();
        app.toggle_basket().unwrap();
        assert_eq!(app.basket_phase, CyclePhase::Short);
        assert_ne!(app.holdings.records.len(), long_rows);
        app.toggle_basket().unwrap();
        assert_eq!(app.holdings.records.len(), long_rows);
    }

    #[test]
    fn sort_toggle_at_cursor_flips_direction() {
        let mut app = AppState::new().unwrap();
        // Column 0 is status, sortable.
        let id = app.setups.toggle_sort_at_cursor().unwrap();
        assert_eq!(id, "status");
        assert!(app.setups.view.sort_direction_for("status").is_some());
    }

    #[test]
    fn search_apply_and_clear_round_trip() {
        let mut app = AppState::new().unwrap();
        app.search_input = "pep".to_string();
        app.apply_search();
        assert_eq!(app.setups.visible_len(), 1);
        app.search_input.clear();
        app.apply_search();
        assert_eq!(app.setups.visible_len(), 6);
    }

    #[test]
    fn dossier_opens_for_selected_row() {
        let mut app = AppState::new().unwrap();
        app.open_selected_dossier();
        assert!(matches!(app.overlay, Overlay::Detail(_)));
    }

    #[test]
    fn empty_filter_result_keeps_cursor_at_zero() {
        let mut app = AppState::new().unwrap();
        app.setups.cursor = 4;
        app.cycle_confidence_band();
        app.cycle_confidence_band();
        app.cycle_confidence_band(); // <80 matches nothing
        assert_eq!(app.setups.visible_len(), 0);
        assert_eq!(app.setups.cursor, 0);
    }
}
