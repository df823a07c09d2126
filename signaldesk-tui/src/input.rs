//! Keyboard input dispatch — overlays first, then global keys, then the
//! active panel's handler.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Search => {
            handle_search_overlay(app, key);
            return;
        }
        Overlay::Detail(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Dashboard; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Setups; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Scanner; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Intel; return; }
        KeyCode::Char('5') => { app.active_panel = Panel::Baskets; return; }
        KeyCode::Char('6') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Dashboard => {} // display only
        Panel::Setups => handle_setups_key(app, key),
        Panel::Scanner => handle_scanner_key(app, key),
        Panel::Intel => handle_intel_key(app, key),
        Panel::Baskets => handle_baskets_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.overlay = Overlay::None;
        }
        KeyCode::Enter => app.apply_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

fn handle_setups_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') => {
            app.search_input = app.setups.view.search().to_string();
            app.overlay = Overlay::Search;
        }
        KeyCode::Char('f') => app.cycle_status_filter(),
        KeyCode::Char('g') => app.cycle_confidence_band(),
        KeyCode::Char('x') => app.reset_setups_view(),
        KeyCode::Char('j') | KeyCode::Down => app.setups.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.setups.cursor_up(),
        KeyCode::Char('h') | KeyCode::Left => app.setups.col_left(),
        KeyCode::Char('l') | KeyCode::Right => app.setups.col_right(),
        KeyCode::Char('s') => {
            if let Some(id) = app.setups.toggle_sort_at_cursor() {
                app.set_status(format!("Sorting by {id}"));
            }
        }
        KeyCode::Enter => app.open_selected_dossier(),
        _ => {}
    }
}

fn handle_scanner_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('m') => app.cycle_scanner_threshold(),
        KeyCode::Char('j') | KeyCode::Down => app.scanner.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scanner.cursor_up(),
        KeyCode::Char('h') | KeyCode::Left => app.scanner.col_left(),
        KeyCode::Char('l') | KeyCode::Right => app.scanner.col_right(),
        KeyCode::Char('s') => {
            if let Some(id) = app.scanner.toggle_sort_at_cursor() {
                app.set_status(format!("Sorting by {id}"));
            }
        }
        _ => {}
    }
}

fn handle_intel_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.intel_scroll += 1,
        KeyCode::Char('k') | KeyCode::Up => app.intel_scroll = app.intel_scroll.saturating_sub(1),
        _ => {}
    }
}

fn handle_baskets_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('b') => {
            if app.toggle_basket().is_err() {
                app.set_warning("Failed to load basket holdings");
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.holdings.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.holdings.cursor_up(),
        KeyCode::Char('h') | KeyCode::Left => app.holdings.col_left(),
        KeyCode::Char('l') | KeyCode::Right => app.holdings.col_right(),
        KeyCode::Char('s') => {
            if let Some(id) = app.holdings.toggle_sort_at_cursor() {
                app.set_status(format!("Sorting by {id}"));
            }
        }
        _ => {}
    }
}

/// Key bindings shown on the Help panel.
pub fn key_bindings() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("1-6", "Jump to panel"),
        ("Tab / Shift+Tab", "Next / previous panel"),
        ("j/k or arrows", "Move row cursor"),
        ("h/l or arrows", "Move column cursor"),
        ("s", "Sort by selected column (again to flip)"),
        ("/", "Search setups (Enter apply, Esc cancel)"),
        ("f", "Cycle status filter (setups)"),
        ("g", "Cycle confidence band (setups)"),
        ("x", "Reset setups view"),
        ("m", "Cycle scanner confidence gate"),
        ("b", "Toggle long/short basket"),
        ("Enter", "Open token dossier (setups)"),
        ("Esc", "Close overlay"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use signaldesk_core::SortDirection;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn quit_on_q() {
        let mut app = AppState::new().unwrap();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn quit_on_ctrl_c() {
        let mut app = AppState::new().unwrap();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn number_keys_jump_panels() {
        let mut app = AppState::new().unwrap();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_panel, Panel::Scanner);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_panel, Panel::Dashboard);
    }

    #[test]
    fn tab_cycles_panels() {
        let mut app = AppState::new().unwrap();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Setups);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.active_panel, Panel::Dashboard);
    }

    #[test]
    fn vim_row_navigation_on_setups() {
        let mut app = AppState::new().unwrap();
        app.active_panel = Panel::Setups;
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.setups.cursor, 2);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.setups.cursor, 1);
    }

    #[test]
    fn sort_key_toggles_direction_on_repeat() {
        let mut app = AppState::new().unwrap();
        app.active_panel = Panel::Setups;
        // Move to the confidence column and sort twice.
        for _ in 0..6 {
            handle_key(&mut app, press(KeyCode::Char('l')));
        }
        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(
            app.setups.view.sort_direction_for("conf"),
            Some(SortDirection::Ascending)
        );
        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(
            app.setups.view.sort_direction_for("conf"),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn search_overlay_edits_and_applies() {
        let mut app = AppState::new().unwrap();
        app.active_panel = Panel::Setups;
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.overlay, Overlay::Search);
        for c in "pep".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.setups.visible_len(), 1);
    }

    #[test]
    fn search_overlay_escape_cancels() {
        let mut app = AppState::new().unwrap();
        app.active_panel = Panel::Setups;
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('z')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.setups.visible_len(), 6);
    }

    #[test]
    fn global_keys_are_inert_while_searching() {
        let mut app = AppState::new().unwrap();
        app.active_panel = Panel::Setups;
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        // 'q' went into the search buffer, not quit.
        assert!(app.running);
        assert_eq!(app.search_input, "q");
    }

    #[test]
    fn enter_opens_dossier_and_esc_closes() {
        let mut app = AppState::new().unwrap();
        app.active_panel = Panel::Setups;
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(app.overlay, Overlay::Detail(_)));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn basket_toggle_key() {
        let mut app = AppState::new().unwrap();
        app.active_panel = Panel::Baskets;
        let before = app.holdings.records.len();
        handle_key(&mut app, press(KeyCode::Char('b')));
        assert_ne!(app.holdings.records.len(), before);
    }

    #[test]
    fn help_listing_is_complete_enough() {
        let bindings = key_bindings();
        assert!(bindings.iter().any(|(k, _)| *k == "/"));
        assert!(bindings.len() >= 10);
    }
}
