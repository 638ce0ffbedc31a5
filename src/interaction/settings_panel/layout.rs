use bevy::math::{Rect, Vec2};

pub const PANEL_WIDTH: f32 = 500.0;
pub const PANEL_HEIGHT: f32 = 400.0;
pub const VOLUME_HANDLE_RADIUS: f32 = 10.0;

/// Pixel rectangles for every interactive region, recomputed from the
/// window size. Same coordinate space as pointer events: origin top-left,
/// y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub panel: Rect,
    pub close_button: Rect,
    pub rate_field: Rect,
    pub sound_checkbox: Rect,
    pub volume_track: Rect,
    pub settings_button: Rect,
}

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

impl PanelLayout {
    pub fn for_window(width: f32, height: f32) -> Self {
        let panel = rect(
            (width - PANEL_WIDTH) * 0.5,
            (height - PANEL_HEIGHT) * 0.5,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        );
        Self {
            panel,
            close_button: rect(panel.max.x - 40.0, panel.min.y + 10.0, 30.0, 30.0),
            rate_field: rect(panel.min.x + 50.0, panel.min.y + 115.0, 150.0, 40.0),
            sound_checkbox: rect(panel.min.x + 50.0, panel.min.y + 180.0, 30.0, 30.0),
            volume_track: rect(panel.min.x + 50.0, panel.min.y + 250.0, 200.0, 20.0),
            settings_button: rect(width - 70.0, height - 70.0, 50.0, 50.0),
        }
    }

    /// Track position mapped to a 0..=1 volume, clamped at the ends.
    pub fn volume_at(&self, x: f32) -> f32 {
        ((x - self.volume_track.min.x) / self.volume_track.width()).clamp(0.0, 1.0)
    }

    pub fn volume_handle_center(&self, volume: f32) -> Vec2 {
        Vec2::new(
            self.volume_track.min.x + volume.clamp(0.0, 1.0) * self.volume_track.width(),
            self.volume_track.min.y + self.volume_track.height() * 0.5,
        )
    }

    /// Grab area is the track grown by the handle radius so the handle is
    /// draggable even when it overhangs the track ends.
    pub fn volume_hit(&self, pos: Vec2) -> bool {
        self.volume_track.inflate(VOLUME_HANDLE_RADIUS).contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_centers_in_window() {
        let l = PanelLayout::for_window(800.0, 600.0);
        assert_eq!(l.panel.min, Vec2::new(150.0, 100.0));
        assert_eq!(l.panel.max, Vec2::new(650.0, 500.0));
        assert_eq!(l.settings_button.min, Vec2::new(730.0, 530.0));
    }

    #[test]
    fn widgets_sit_inside_the_panel() {
        let l = PanelLayout::for_window(1280.0, 720.0);
        for r in [l.close_button, l.rate_field, l.sound_checkbox, l.volume_track] {
            assert!(l.panel.contains(r.min), "{r:?} escapes panel");
            assert!(l.panel.contains(r.max), "{r:?} escapes panel");
        }
    }

    #[test]
    fn volume_maps_track_ends_and_clamps() {
        let l = PanelLayout::for_window(800.0, 600.0);
        assert_eq!(l.volume_at(l.volume_track.min.x), 0.0);
        assert_eq!(l.volume_at(l.volume_track.max.x), 1.0);
        assert_eq!(l.volume_at(l.volume_track.min.x + 100.0), 0.5);
        assert_eq!(l.volume_at(-500.0), 0.0);
        assert_eq!(l.volume_at(5_000.0), 1.0);
    }

    #[test]
    fn handle_center_tracks_volume() {
        let l = PanelLayout::for_window(800.0, 600.0);
        let c = l.volume_handle_center(0.25);
        assert_eq!(c.x, l.volume_track.min.x + 50.0);
        assert!(l.volume_hit(c));
    }
}
