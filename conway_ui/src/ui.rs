// ui.rs - egui side of the game: key mapping and board painting

use conway::config::{ColorScheme, MIN_CELL_SIZE};
use conway::{Cursor, Display, Flow, Grid, KeyEvent, Viewport};
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::{debug, trace};

use crate::GameOfLife;

/// Arrows move, A toggles, S starts, Q or Escape quits, R restarts.
fn map_key(key: egui::Key) -> KeyEvent {
    match key {
        egui::Key::ArrowUp => KeyEvent::Up,
        egui::Key::ArrowDown => KeyEvent::Down,
        egui::Key::ArrowLeft => KeyEvent::Left,
        egui::Key::ArrowRight => KeyEvent::Right,
        egui::Key::A => KeyEvent::Toggle,
        egui::Key::S => KeyEvent::Confirm,
        egui::Key::Q | egui::Key::Escape => KeyEvent::Quit,
        egui::Key::R => KeyEvent::Restart,
        _ => KeyEvent::Other,
    }
}

/// Available panel area in character cells. Board cells are two characters
/// wide, as on a terminal.
fn viewport_for(available: Vec2, cell_size: f32) -> Viewport {
    let cell_size = cell_size.max(MIN_CELL_SIZE);
    let char_width = cell_size / 2.0;
    Viewport::new(
        (available.y.max(0.0) / cell_size) as usize,
        (available.x.max(0.0) / char_width) as usize,
    )
}

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Draws one frame of the session into the central panel.
struct PanelDisplay<'a> {
    ui: &'a mut egui::Ui,
    colors: ColorScheme,
    cell_size: f32,
}

impl Display for PanelDisplay<'_> {
    fn render(&mut self, grid: &Grid, cursor: Option<Cursor>) -> anyhow::Result<()> {
        let box_size = self.cell_size;
        let spacing = 0.5;
        let total_size = Vec2::new(
            (box_size + spacing) * grid.cols() as f32 - spacing,
            (box_size + spacing) * grid.rows() as f32 - spacing,
        );

        let (response, painter) = self.ui.allocate_painter(total_size, egui::Sense::hover());
        let start_pos = response.rect.min;
        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for (row, cells) in grid.iter_rows().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                let x = start_pos.x + col as f32 * (box_size + spacing);
                let y = start_pos.y + row as f32 * (box_size + spacing);
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let is_cursor = cursor == Some(Cursor { row, col });
                let cell_color = match (is_cursor, alive) {
                    (true, _) => color(self.colors.cursor),
                    (false, true) => color(self.colors.live),
                    (false, false) => color(self.colors.dead),
                };
                painter.rect_filled(rect, 1.0, cell_color);

                // Keep a live cell visible under the cursor
                if is_cursor && alive {
                    painter.rect_stroke(rect.shrink(2.0), 1.0, Stroke::new(2.0, color(self.colors.live)));
                } else {
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }
        }
        Ok(())
    }

    fn show_message(&mut self, text: &str) -> anyhow::Result<()> {
        self.ui.label(egui::RichText::new(text).monospace());
        Ok(())
    }

    fn show_status(&mut self, generation: u64, population: usize) -> anyhow::Result<()> {
        self.ui.horizontal(|ui| {
            ui.label(format!("Generation: {generation}"));
            ui.separator();
            ui.label(format!("Live cells: {population}"));
        });
        Ok(())
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.session.set_viewport(viewport_for(ui.available_size(), self.config.cell_size));

            let keys: Vec<egui::Key> = ctx.input(|i| {
                i.events
                    .iter()
                    .filter_map(|event| match event {
                        egui::Event::Key { key, pressed: true, .. } => Some(*key),
                        _ => None,
                    })
                    .collect()
            });

            for key in keys {
                let event = map_key(key);
                trace!("{key:?} -> {event:?}");
                if self.session.handle_key(event) == Flow::Exit {
                    debug!("closing window");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    return;
                }
            }

            let mut display = PanelDisplay {
                ui,
                colors: self.config.colors,
                cell_size: self.config.cell_size,
            };
            if let Err(err) = self.session.present(&mut display) {
                log::error!("failed to draw: {err:#}");
            }
        });
    }
}
