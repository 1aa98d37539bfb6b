use std::time::{Duration, Instant};

use chrono::Utc;

use forgeiq_application::Dashboard;

use super::App;

const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let mut app = Self {
            dashboard,
            report: None,
            error: None,
            status: None,
            scroll: 0,
            now: Utc::now(),
            should_quit: false,
            last_refresh: Instant::now(),
        };
        app.refresh();
        app
    }

    /// Rebuilds the active report from the ports.
    pub fn refresh(&mut self) {
        self.now = Utc::now();
        self.last_refresh = Instant::now();
        match self.dashboard.current_report() {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "report refresh failed");
                self.report = None;
                self.error = Some(format!("{err:#}"));
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.last_refresh.elapsed() >= REFRESH_INTERVAL {
            self.refresh();
        }
    }
}
