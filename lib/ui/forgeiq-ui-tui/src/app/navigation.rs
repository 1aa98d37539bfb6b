use forgeiq_domain::ViewKind;

use super::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewKind,
    pub hotkey: char,
    pub label: &'static str,
}

pub fn nav_items() -> [NavItem; 6] {
    ViewKind::ALL.map(|view| NavItem {
        view,
        hotkey: char::from(b'1' + view.index() as u8),
        label: view.label(),
    })
}

impl App {
    pub fn active_view(&self) -> ViewKind {
        self.dashboard.state().view
    }

    pub fn select_view(&mut self, view: ViewKind) {
        if view == self.active_view() {
            return;
        }
        self.dashboard.select_view(view);
        self.scroll = 0;
        self.status = None;
        self.refresh();
    }

    pub fn next_view(&mut self) {
        self.select_view(self.active_view().next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.active_view().prev());
    }

    pub fn cycle_range(&mut self) {
        self.dashboard.cycle_range();
        self.status = Some(format!("Time range: last {}", self.dashboard.state().range));
        self.refresh();
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_follow_view_order() {
        let items = nav_items();
        assert_eq!(items[0].hotkey, '1');
        assert_eq!(items[5].hotkey, '6');
        assert_eq!(items[5].view, ViewKind::Business);
    }
}
