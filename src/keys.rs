use crate::app::{App, MenuItem};
use crate::state::app_state::{MatchupField, RankingsMode};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    // Ctrl-C always quits, even mid-edit.
    if let (Char('c'), KeyModifiers::CONTROL) = (key_event.code, key_event.modifiers) {
        crate::cleanup_terminal();
        std::process::exit(0);
    }

    // Text-entry modes swallow every key until Enter or Esc.
    if guard.state.editing() {
        handle_editor_key(key_event, guard, network_requests).await;
        return;
    }

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Rankings),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Schedule),
        (_, Char('3'), _) => guard.update_tab(MenuItem::Deadlines),
        (_, Char('4'), _) => guard.update_tab(MenuItem::Rules),
        (_, Char('5'), _) => guard.update_tab(MenuItem::Draft),
        (_, Char('6'), _) => guard.update_tab(MenuItem::History),
        (_, Char('7'), _) => guard.update_tab(MenuItem::Punishments),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Rankings — list navigation also moves an open grab's target
        (MenuItem::Rankings, Char('j') | KeyCode::Down, _) => guard.state.rankings.select_down(),
        (MenuItem::Rankings, Char('k') | KeyCode::Up, _) => guard.state.rankings.select_up(),
        (MenuItem::Rankings, Char('g'), _) => guard.state.rankings.begin_grab(),
        (MenuItem::Rankings, KeyCode::Enter, _) => {
            if matches!(guard.state.rankings.mode, RankingsMode::Grab { .. })
                && let Some(changes) = guard.rankings_drop()
            {
                drop(guard);
                let _ = network_requests
                    .send(NetworkRequest::SaveRanks { changes })
                    .await;
            }
        }
        (MenuItem::Rankings, KeyCode::Esc, _) => guard.state.rankings.cancel_mode(),
        (MenuItem::Rankings, Char('#'), _) => guard.state.rankings.begin_rank_entry(),
        (MenuItem::Rankings, Char('e'), _) => guard.state.rankings.begin_writeup_edit(),
        (MenuItem::Rankings, Char('s'), _) => guard.export_standings(),

        // Schedule
        (MenuItem::Schedule, Char('j') | KeyCode::Down, _) => guard.state.schedule.select_down(),
        (MenuItem::Schedule, Char('k') | KeyCode::Up, _) => guard.state.schedule.select_up(),
        (MenuItem::Schedule, KeyCode::Enter, _) => guard.state.schedule.toggle_selected_week(),
        (MenuItem::Schedule, Char('e'), _) => guard.schedule_begin_edit(MatchupField::Writeup),
        (MenuItem::Schedule, Char('p'), _) => guard.schedule_begin_edit(MatchupField::Prediction),

        // Deadlines
        (MenuItem::Deadlines, Char('j') | KeyCode::Down, _) => guard.state.deadlines.select_down(),
        (MenuItem::Deadlines, Char('k') | KeyCode::Up, _) => guard.state.deadlines.select_up(),
        (MenuItem::Deadlines, Char('e'), _) => guard.state.deadlines.begin_edit(),

        // Rules
        (MenuItem::Rules, Char('/'), _) => guard.state.rules.begin_search(),
        (MenuItem::Rules, Char('j') | KeyCode::Down, _) => {
            guard.state.rules.scroll = guard.state.rules.scroll.saturating_add(1);
        }
        (MenuItem::Rules, Char('k') | KeyCode::Up, _) => {
            guard.state.rules.scroll = guard.state.rules.scroll.saturating_sub(1);
        }
        (MenuItem::Rules, KeyCode::Esc, _) => guard.state.rules.clear_search(),

        // Draft
        (MenuItem::Draft, Char('l') | KeyCode::Right, _) => guard.state.draft.next_round(),
        (MenuItem::Draft, Char('h') | KeyCode::Left, _) => guard.state.draft.prev_round(),

        // History
        (MenuItem::History, Char('j') | KeyCode::Down, _) => {
            guard.state.history.scroll = guard.state.history.scroll.saturating_add(1);
        }
        (MenuItem::History, Char('k') | KeyCode::Up, _) => {
            guard.state.history.scroll = guard.state.history.scroll.saturating_sub(1);
        }

        // Punishments
        (MenuItem::Punishments, KeyCode::Tab | KeyCode::Enter, _) => {
            guard.state.punishments.show_sackos = !guard.state.punishments.show_sackos;
        }

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}

/// Keys while a text buffer is open: rank entry, write-up, matchup and
/// deadline editors, rules search.
async fn handle_editor_key(
    key_event: KeyEvent,
    mut guard: tokio::sync::MutexGuard<'_, App>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    if guard.state.rules.searching {
        match key_event.code {
            KeyCode::Enter => guard.state.rules.end_search(),
            KeyCode::Esc => guard.state.rules.clear_search(),
            KeyCode::Backspace => guard.state.rules.pop_char(),
            Char(c) => guard.state.rules.push_char(c),
            _ => {}
        }
        return;
    }

    if guard.state.deadlines.editor.is_some() {
        match key_event.code {
            KeyCode::Enter => {
                if let Some(deadline) = guard.deadline_submit_edit() {
                    drop(guard);
                    let _ = network_requests
                        .send(NetworkRequest::SaveDeadline { deadline })
                        .await;
                }
            }
            KeyCode::Esc => guard.state.deadlines.cancel_edit(),
            KeyCode::Backspace => guard.state.deadlines.pop_char(),
            Char(c) => guard.state.deadlines.push_char(c),
            _ => {}
        }
        return;
    }

    if guard.state.schedule.editor.is_some() {
        match key_event.code {
            KeyCode::Enter => {
                if let Some(matchup) = guard.schedule_submit_edit() {
                    drop(guard);
                    let _ = network_requests
                        .send(NetworkRequest::SaveMatchup { matchup })
                        .await;
                }
            }
            KeyCode::Esc => guard.state.schedule.cancel_edit(),
            KeyCode::Backspace => guard.state.schedule.pop_char(),
            Char(c) => guard.state.schedule.push_char(c),
            _ => {}
        }
        return;
    }

    if matches!(guard.state.rankings.mode, RankingsMode::RankEntry { .. }) {
        match key_event.code {
            KeyCode::Enter => {
                if let Some(changes) = guard.rankings_submit_rank() {
                    drop(guard);
                    let _ = network_requests
                        .send(NetworkRequest::SaveRanks { changes })
                        .await;
                }
            }
            KeyCode::Esc => guard.state.rankings.cancel_mode(),
            KeyCode::Backspace => guard.state.rankings.pop_char(),
            Char(c) => guard.state.rankings.push_char(c),
            _ => {}
        }
        return;
    }

    if matches!(guard.state.rankings.mode, RankingsMode::EditWriteup { .. }) {
        match key_event.code {
            KeyCode::Enter => {
                if let Some((id, writeup)) = guard.rankings_submit_writeup() {
                    drop(guard);
                    let _ = network_requests
                        .send(NetworkRequest::SaveWriteup { id, writeup })
                        .await;
                }
            }
            KeyCode::Esc => guard.state.rankings.cancel_mode(),
            KeyCode::Backspace => guard.state.rankings.pop_char(),
            Char(c) => guard.state.rankings.push_char(c),
            _ => {}
        }
    }
}
