//! Result view: the rendered itinerary, one card per day.

use eframe::egui;
use planner_client::{DaySection, ItineraryView};

use crate::ui::theme;

pub fn show_result_view(ctx: &egui::Context, view: &ItineraryView) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(860.0);
                        ui.add_space(32.0);
                        ui.label(
                            egui::RichText::new(&view.heading)
                                .size(36.0)
                                .color(theme::HEADING),
                        );
                        ui.label(egui::RichText::new(&view.summary).color(theme::MUTED));
                        ui.add_space(24.0);

                        if view.days.is_empty() {
                            ui.label(
                                egui::RichText::new("The planner returned an empty itinerary.")
                                    .color(theme::MUTED),
                            );
                        }
                        for day in &view.days {
                            day_card(ui, day);
                            ui.add_space(16.0);
                        }
                    });
                });
        });
}

fn day_card(ui: &mut egui::Ui, day: &DaySection) {
    egui::Frame::NONE
        .fill(theme::CARD.gamma_multiply(0.95))
        .corner_radius(theme::CARD_RADIUS)
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.label(
                    egui::RichText::new(day.header())
                        .size(24.0)
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.add_space(8.0);

                if day.activities.is_empty() {
                    ui.label(egui::RichText::new("No activities planned.").color(theme::MUTED));
                    return;
                }
                for activity in &day.activities {
                    ui.label(
                        egui::RichText::new(format!("{}. {}", activity.position, activity.name))
                            .size(18.0)
                            .strong()
                            .color(theme::HEADING),
                    );
                    for detail in &activity.details {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                egui::RichText::new(format!("{}:", detail.label))
                                    .strong()
                                    .color(theme::LABEL),
                            );
                            ui.label(egui::RichText::new(&detail.text).color(theme::LABEL));
                        });
                    }
                    ui.add_space(10.0);
                }
            });
        });
}
