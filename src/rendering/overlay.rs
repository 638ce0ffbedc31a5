use bevy::prelude::*;

use crate::app::state::UiState;
use crate::core::settings::Settings;
use crate::interaction::settings_panel::layout::VOLUME_HANDLE_RADIUS;
use crate::interaction::settings_panel::SettingsController;

#[derive(Component)]
struct OverlayRoot;

/// Widget boxes whose pixel rects mirror the controller layout. One sync
/// system owns all positioning, so visuals and hit-testing can never
/// disagree about where a widget is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutSlot {
    Panel,
    CloseButton,
    RateField,
    SoundCheckbox,
    VolumeTrack,
    VolumeHandle,
}

#[derive(Component)]
struct RateText;

#[derive(Component)]
struct CheckMark;

#[derive(Component)]
struct VolumeLabel;

#[derive(Resource)]
struct CursorBlink {
    timer: Timer,
    visible: bool,
}
impl Default for CursorBlink {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            visible: true,
        }
    }
}

// Real rects arrive via sync_slot_rects on the first open frame.
fn slot_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn spawn_overlay(mut commands: Commands) {
    let root = commands
        .spawn((
            OverlayRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
        ))
        .id();

    commands.entity(root).with_children(|p| {
        p.spawn((
            LayoutSlot::Panel,
            slot_node(),
            BackgroundColor(Color::srgb(0.13, 0.14, 0.18)),
        ))
        .with_children(|panel| {
            for (label, x, y) in [
                ("Settings", 20.0, 15.0),
                ("Units per day", 50.0, 85.0),
                ("Sound", 90.0, 183.0),
                ("Volume", 50.0, 220.0),
            ] {
                panel.spawn((
                    Text::new(label),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(x),
                        top: Val::Px(y),
                        ..default()
                    },
                ));
            }
        });

        p.spawn((
            LayoutSlot::CloseButton,
            slot_node(),
            BackgroundColor(Color::srgb(0.45, 0.16, 0.16)),
        ))
        .with_children(|b| {
            b.spawn(Text::new("X"));
        });

        p.spawn((
            LayoutSlot::RateField,
            slot_node(),
            BackgroundColor(Color::srgb(0.07, 0.07, 0.09)),
        ))
        .with_children(|f| {
            f.spawn((RateText, Text::new("")));
        });

        p.spawn((
            LayoutSlot::SoundCheckbox,
            slot_node(),
            BackgroundColor(Color::srgb(0.07, 0.07, 0.09)),
        ))
        .with_children(|c| {
            c.spawn((CheckMark, Text::new("X")));
        });

        p.spawn((
            LayoutSlot::VolumeTrack,
            slot_node(),
            BackgroundColor(Color::srgb(0.07, 0.07, 0.09)),
        ));

        p.spawn((
            LayoutSlot::VolumeHandle,
            slot_node(),
            BackgroundColor(Color::srgb(0.75, 0.65, 0.2)),
            BorderRadius::MAX,
        ));

        p.spawn((VolumeLabel, Text::new(""), slot_node()));
    });
}

fn despawn_overlay(mut commands: Commands, roots: Query<Entity, With<OverlayRoot>>) {
    for e in &roots {
        commands.entity(e).despawn();
    }
}

fn sync_slot_rects(
    controller: Res<SettingsController>,
    settings: Res<Settings>,
    mut slots: Query<(&LayoutSlot, &mut Node), Without<VolumeLabel>>,
    mut labels: Query<&mut Node, With<VolumeLabel>>,
) {
    if !controller.is_changed() && !settings.is_changed() {
        return;
    }
    let layout = &controller.layout;
    for (slot, mut node) in slots.iter_mut() {
        let rect = match slot {
            LayoutSlot::Panel => layout.panel,
            LayoutSlot::CloseButton => layout.close_button,
            LayoutSlot::RateField => layout.rate_field,
            LayoutSlot::SoundCheckbox => layout.sound_checkbox,
            LayoutSlot::VolumeTrack => layout.volume_track,
            LayoutSlot::VolumeHandle => Rect::from_center_size(
                layout.volume_handle_center(settings.clamped_volume()),
                Vec2::splat(VOLUME_HANDLE_RADIUS * 2.0),
            ),
        };
        apply_rect(&mut node, rect);
    }
    // Percentage readout sits just right of the track.
    if let Ok(mut node) = labels.single_mut() {
        let track = layout.volume_track;
        apply_rect(
            &mut node,
            Rect::new(track.max.x + 12.0, track.min.y - 3.0, track.max.x + 80.0, track.max.y + 3.0),
        );
    }
}

fn apply_rect(node: &mut Node, rect: Rect) {
    node.left = Val::Px(rect.min.x);
    node.top = Val::Px(rect.min.y);
    node.width = Val::Px(rect.width());
    node.height = Val::Px(rect.height());
}

fn tick_cursor_blink(time: Res<Time>, mut blink: ResMut<CursorBlink>) {
    if blink.timer.tick(time.delta()).just_finished() {
        blink.visible = !blink.visible;
    }
}

fn update_rate_text(
    controller: Res<SettingsController>,
    blink: Res<CursorBlink>,
    mut texts: Query<&mut Text, With<RateText>>,
) {
    let Ok(mut text) = texts.single_mut() else {
        return;
    };
    let edit = &controller.edit;
    let s = if edit.is_active() && blink.visible {
        let mut t = edit.text().to_string();
        t.insert(edit.cursor(), '|');
        t
    } else {
        edit.text().to_string()
    };
    if text.as_str() != s {
        *text = Text::new(s);
    }
}

fn update_check_mark(settings: Res<Settings>, mut marks: Query<&mut Visibility, With<CheckMark>>) {
    let Ok(mut visibility) = marks.single_mut() else {
        return;
    };
    let want = if settings.sound_enabled {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    if *visibility != want {
        *visibility = want;
    }
}

fn update_volume_label(settings: Res<Settings>, mut labels: Query<&mut Text, With<VolumeLabel>>) {
    let Ok(mut text) = labels.single_mut() else {
        return;
    };
    let s = format!("{:.0}%", settings.clamped_volume() * 100.0);
    if text.as_str() != s {
        *text = Text::new(s);
    }
}

pub struct OverlayPlugin;
impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorBlink>()
            .add_systems(OnEnter(UiState::SettingsOpen), spawn_overlay)
            .add_systems(
                Update,
                (
                    sync_slot_rects,
                    tick_cursor_blink,
                    update_rate_text,
                    update_check_mark,
                    update_volume_label,
                )
                    .run_if(in_state(UiState::SettingsOpen)),
            )
            .add_systems(OnExit(UiState::SettingsOpen), despawn_overlay);
    }
}
