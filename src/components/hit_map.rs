// ABOUTME: Click targets recorded while rendering, used to resolve mouse clicks to app events

use ratatui::layout::Rect;

use crate::app::AppEvent;

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, AppEvent)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register `event` for clicks inside `area`. Later registrations sit on top of earlier ones.
    pub fn register(&mut self, area: Rect, event: AppEvent) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, event));
        }
    }

    pub fn event_at(&self, column: u16, row: u16) -> Option<&AppEvent> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, event)| event)
    }

    /// Area registered for `event`, topmost first.
    pub fn area_of(&self, event: &AppEvent) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, e)| e == event)
            .map(|(area, _)| *area)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && column < area.x.saturating_add(area.width)
        && row < area.y.saturating_add(area.height)
}
