use bevy::color::ColorToPacked;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts, EguiPlugin, EguiPrimaryContextPass,
    egui::{self},
};
use wd_core::{BodyPart, DragInput, Step, Studio, StudioCommand, TrackMetrics, YawOwner};
use wd_sound::MusicState;

const PANEL_WIDTH: f32 = 260.0;
const SWATCH_SIZE: f32 = 30.0;
const TRACK_HEIGHT: f32 = 18.0;
const HANDLE_WIDTH: f32 = 56.0;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, customizer_ui)
            .add_systems(Update, keyboard_shortcuts)
            .add_plugins(EguiPlugin::default())
            .add_event::<StudioCommand>()
            .init_resource::<PanelState>();
    }
}

#[derive(Resource, Default)]
pub struct PanelState {
    /// Sections start hidden behind a cover until clicked.
    pub revealed: [bool; BodyPart::CUSTOMIZABLE.len()],
    /// Set on the frame the handle is grabbed, cleared when any button is
    /// released. Tracked here so a press and release in the same frame cannot
    /// leave the studio dragging.
    pub pointer_captured: bool,
    pub last_track: Option<TrackMetrics>,
}

fn customizer_ui(
    mut contexts: EguiContexts,
    studio: Res<Studio>,
    music: Option<Res<MusicState>>,
    mut panel: ResMut<PanelState>,
    mut writer: EventWriter<StudioCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let mut out = Vec::new();
    let active = studio.carousel().active();

    egui::SidePanel::right("customizer")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.heading("Customize");
            if active.is_none() {
                ui.label("Loading models...");
            }

            for (row, &part) in BodyPart::CUSTOMIZABLE.iter().enumerate() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(part.label()).strong());
                if !panel.revealed[row] {
                    if draw_cover(ui, part).clicked() {
                        panel.revealed[row] = true;
                    }
                    continue;
                }
                let selected = active.and_then(|variant| variant.choice(part));
                ui.horizontal_wrapped(|ui| {
                    for (index, &color) in studio.palette().colors(part).iter().enumerate() {
                        if draw_swatch(ui, color, selected == Some(index)).clicked() {
                            out.push(StudioCommand::ApplyColor { part, index });
                        }
                    }
                });
            }

            ui.add_space(12.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    out.push(StudioCommand::ResetAll);
                }
                if ui.button("Screenshot").clicked() {
                    out.push(StudioCommand::Capture);
                }
                let playing = music.as_ref().is_some_and(|m| m.playing);
                let label = if playing { "Music: on" } else { "Music: off" };
                if ui.button(label).clicked() {
                    out.push(StudioCommand::ToggleMusic);
                }
            });
        });

    egui::TopBottomPanel::bottom("carousel")
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_black_alpha(170))
                .inner_margin(egui::Margin::same(10)),
        )
        .show(ctx, |ui| {
            let idle = studio.carousel().owner() == YawOwner::Idle;
            ui.horizontal(|ui| {
                if ui.add_enabled(idle, egui::Button::new("<")).clicked() {
                    out.push(StudioCommand::Navigate(Step::Previous));
                }
                let name = active.map(|variant| variant.id().label()).unwrap_or("-");
                ui.label(egui::RichText::new(name).color(egui::Color32::WHITE));
                if active.is_some_and(|variant| variant.animated()) {
                    ui.label(
                        egui::RichText::new("animated")
                            .small()
                            .color(egui::Color32::from_gray(160)),
                    );
                }
                if ui.add_enabled(idle, egui::Button::new(">")).clicked() {
                    out.push(StudioCommand::Navigate(Step::Next));
                }
            });
            ui.add_space(6.0);
            draw_scroll_track(ui, &studio, &mut panel, &mut out);
        });

    for command in out {
        writer.write(command);
    }
}

fn draw_cover(ui: &mut egui::Ui, part: BodyPart) -> egui::Response {
    let text = format!("Tap to customize {}", part.label().to_lowercase());
    ui.add(egui::Button::new(text).min_size(egui::vec2(ui.available_width(), SWATCH_SIZE)))
}

fn draw_swatch(ui: &mut egui::Ui, color: Color, selected: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::Vec2::splat(SWATCH_SIZE), egui::Sense::click());
    let stroke = if selected {
        egui::Stroke::new(2.0, egui::Color32::WHITE)
    } else if response.hovered() {
        egui::Stroke::new(1.5, egui::Color32::from_gray(200))
    } else {
        egui::Stroke::new(1.0, egui::Color32::from_gray(90))
    };
    ui.painter()
        .rect(rect, 4.0, to_color32(color), stroke, egui::StrokeKind::Outside);
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn draw_scroll_track(
    ui: &mut egui::Ui,
    studio: &Studio,
    panel: &mut PanelState,
    out: &mut Vec<StudioCommand>,
) {
    let (track, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), TRACK_HEIGHT),
        egui::Sense::hover(),
    );
    let metrics = TrackMetrics::new(track.width(), HANDLE_WIDTH);
    if panel.last_track != Some(metrics) {
        panel.last_track = Some(metrics);
        out.push(StudioCommand::Drag(DragInput::Resize(metrics)));
    }

    let offset = studio.drag().offset().min(metrics.max_offset());
    let handle = egui::Rect::from_min_size(
        track.min + egui::vec2(offset, 0.0),
        egui::vec2(HANDLE_WIDTH.min(track.width()), TRACK_HEIGHT),
    );
    let response = ui.interact(handle, ui.id().with("scroll_handle"), egui::Sense::drag());

    let painter = ui.painter();
    painter.rect_filled(track, 6.0, egui::Color32::from_gray(60));
    let handle_fill = if panel.pointer_captured {
        egui::Color32::from_gray(235)
    } else {
        egui::Color32::from_gray(170)
    };
    painter.rect_filled(handle, 6.0, handle_fill);

    let sample = ui.ctx().input(|i| PointerSample {
        drag_started: response.drag_started(),
        press_x: i.pointer.press_origin().map(|pos| pos.x),
        pointer_x: i.pointer.latest_pos().map(|pos| pos.x),
        moved: i.pointer.delta() != egui::Vec2::ZERO,
        released: i.pointer.any_released(),
    });
    let hovered = response.hovered();
    out.extend(
        pointer_to_drag(&mut panel.pointer_captured, sample)
            .into_iter()
            .map(StudioCommand::Drag),
    );

    if panel.pointer_captured {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if hovered {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
}

/// Pointer input seen by the scroll handle in one frame.
#[derive(Debug, Clone, Copy, Default)]
struct PointerSample {
    drag_started: bool,
    press_x: Option<f32>,
    pointer_x: Option<f32>,
    moved: bool,
    released: bool,
}

/// Turns one frame of pointer input into drag events. egui only reports a
/// drag after some travel, so the press is anchored at the pointer-down X.
fn pointer_to_drag(captured: &mut bool, sample: PointerSample) -> Vec<DragInput> {
    let mut inputs = Vec::new();
    if sample.drag_started
        && let Some(x) = sample.press_x.or(sample.pointer_x)
    {
        *captured = true;
        inputs.push(DragInput::Press { x });
    }
    if !*captured {
        return inputs;
    }
    if sample.moved
        && let Some(x) = sample.pointer_x
    {
        inputs.push(DragInput::Move { x });
    }
    if sample.released {
        *captured = false;
        inputs.push(DragInput::Release);
    }
    inputs
}

pub fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, _] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgb(r, g, b)
}

/// Arrow keys navigate; R, P and M mirror the panel buttons.
pub fn shortcut(key: KeyCode) -> Option<StudioCommand> {
    match key {
        KeyCode::ArrowLeft => Some(StudioCommand::Navigate(Step::Previous)),
        KeyCode::ArrowRight => Some(StudioCommand::Navigate(Step::Next)),
        KeyCode::KeyR => Some(StudioCommand::ResetAll),
        KeyCode::KeyP => Some(StudioCommand::Capture),
        KeyCode::KeyM => Some(StudioCommand::ToggleMusic),
        _ => None,
    }
}

fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut writer: EventWriter<StudioCommand>) {
    for &key in keys.get_just_pressed() {
        if let Some(command) = shortcut(key) {
            writer.write(command);
        }
    }
}
