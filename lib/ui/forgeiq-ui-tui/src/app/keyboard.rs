use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use forgeiq_domain::ViewKind;

use super::App;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.prev_view(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.next_view(),
            KeyCode::PageDown => self.scroll_down(),
            KeyCode::PageUp => self.scroll_up(),
            KeyCode::Char('t') => self.cycle_range(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('a') => self.apply_schedules(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.select_view(ViewKind::from_index(index));
            }
            _ => {}
        }
    }

    fn apply_schedules(&mut self) {
        match self.dashboard.apply_all_schedules() {
            Ok(0) => self.status = Some("No schedule changes eligible for auto-adjust".into()),
            Ok(applied) => {
                tracing::info!(applied, "applied schedule changes");
                self.status = Some(format!("Applied {applied} schedule change(s)"));
                self.refresh();
            }
            Err(err) => self.status = Some(format!("Apply failed: {err:#}")),
        }
    }
}
