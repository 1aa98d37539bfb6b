use ratatui::Frame;
use ratatui::layout::{Constraint, Direction};

use crate::app::App;
use crate::panels::{render_main, render_sidebar};

pub(crate) const SIDEBAR_WIDTH: u16 = 26;

pub(crate) fn render(frame: &mut Frame, app: &App) {
    let columns = crate::ui_layout_split!(
        Direction::Horizontal,
        [Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)],
        frame.area()
    );
    render_sidebar(frame, columns[0], app);
    render_main(frame, columns[1], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use forgeiq_adapter_fixtures::FixtureAnalytics;
    use forgeiq_application::Dashboard;
    use forgeiq_domain::{ForgeConfig, ViewKind};
    use forgeiq_ports::PortSet;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn fixture_app() -> App {
        let ports = PortSet::new(Arc::new(FixtureAnalytics::sample()));
        App::new(Dashboard::new_with_ports(&ForgeConfig::default(), ports))
    }

    #[test]
    fn renders_sidebar_and_analytics_view() {
        let text = screen(&fixture_app());
        assert!(text.contains("ForgeIQ"));
        assert!(text.contains("Adaptive Scheduling"));
        assert!(text.contains("Analytics Dashboard"));
        assert!(text.contains("Total Tests"));
        assert!(text.contains("Failure Heatmap"));
    }

    #[test]
    fn renders_selected_view_title() {
        let mut app = fixture_app();
        app.select_view(ViewKind::Business);
        let text = screen(&app);
        assert!(text.contains("Business Impact Dashboard"));
        assert!(text.contains("$435K"));
    }

    #[test]
    fn renders_empty_ports_without_panicking() {
        let app = App::new(Dashboard::new(&ForgeConfig::default()));
        let text = screen(&app);
        assert!(text.contains("Analytics Dashboard"));
        assert!(text.contains("Total Tests"));
    }
}
