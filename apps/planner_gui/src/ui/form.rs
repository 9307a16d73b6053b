//! Trip form: six labelled inputs, the submit button, and the loading overlay.

use eframe::egui;
use planner_client::SubmitRejected;
use shared::domain::{InputKind, TripField, TripRequest};

use crate::ui::theme;

pub const SUBMIT_LABEL: &str = "✨ Plan My Perfect Trip";
pub const SUBMIT_LOADING_LABEL: &str = "Planning your trip...";

const ROWS: [&[TripField]; 3] = [
    &[TripField::Age, TripField::Gender],
    &[TripField::Personality],
    &[TripField::Days, TripField::Origin, TripField::Destination],
];

/// What the form view read from a frame.
#[derive(Debug, Default)]
pub struct FormOutput {
    pub edits: Vec<(TripField, String)>,
    pub submit: bool,
}

pub struct FormProps<'a> {
    pub request: &'a TripRequest,
    pub loading: bool,
    pub rejection: Option<SubmitRejected>,
    pub focus: Option<TripField>,
    pub status: &'a str,
}

pub fn show_form_view(ctx: &egui::Context, props: FormProps<'_>) -> FormOutput {
    let mut output = FormOutput::default();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(860.0);
                        ui.add_space(32.0);
                        ui.label(egui::RichText::new("✈").size(40.0).color(theme::ACCENT));
                        ui.add_space(12.0);
                        for line in ["Your Personal", "Travel Planner"] {
                            ui.label(
                                egui::RichText::new(line)
                                    .size(36.0)
                                    .family(egui::FontFamily::Proportional)
                                    .color(theme::HEADING),
                            );
                        }
                        ui.add_space(24.0);

                        egui::Frame::NONE
                            .fill(theme::CARD.gamma_multiply(0.95))
                            .corner_radius(theme::CARD_RADIUS)
                            .inner_margin(egui::Margin::same(40))
                            .shadow(egui::Shadow {
                                offset: [0, 8],
                                blur: 24,
                                spread: 0,
                                color: egui::Color32::from_black_alpha(40),
                            })
                            .show(ui, |ui| {
                                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                    form_body(ui, &props, &mut output);
                                });
                            });

                        if !props.status.is_empty() {
                            ui.add_space(12.0);
                            ui.label(egui::RichText::new(props.status).color(theme::MUTED));
                        }
                        ui.add_space(32.0);
                    });
                });
        });

    if props.loading {
        show_loading_overlay(ctx);
    }
    output
}

fn form_body(ui: &mut egui::Ui, props: &FormProps<'_>, output: &mut FormOutput) {
    for row in ROWS {
        ui.columns(row.len(), |columns| {
            for (column, &field) in columns.iter_mut().zip(row.iter()) {
                field_input(column, field, props, output);
            }
        });
        ui.add_space(20.0);
    }

    let label = if props.loading {
        SUBMIT_LOADING_LABEL
    } else {
        SUBMIT_LABEL
    };
    let button = egui::Button::new(
        egui::RichText::new(label)
            .size(18.0)
            .color(egui::Color32::WHITE),
    )
    .fill(theme::ACCENT)
    .corner_radius(10.0)
    .min_size(egui::vec2(ui.available_width(), 56.0));

    ui.horizontal(|ui| {
        if ui.add_enabled(!props.loading, button).clicked() {
            output.submit = true;
        }
    });
}

fn field_input(
    ui: &mut egui::Ui,
    field: TripField,
    props: &FormProps<'_>,
    output: &mut FormOutput,
) {
    ui.label(
        egui::RichText::new(field.label())
            .size(17.0)
            .color(theme::LABEL),
    );

    let mut buffer = props.request.get(field).to_string();
    let kind = field.input_kind();
    let mut edit = match kind {
        InputKind::MultiLine => egui::TextEdit::multiline(&mut buffer).desired_rows(6),
        InputKind::Numeric { .. } | InputKind::SingleLine => {
            egui::TextEdit::singleline(&mut buffer).min_size(egui::vec2(0.0, 40.0))
        }
    }
    .id_salt(field.name())
    .desired_width(f32::INFINITY)
    .margin(egui::Margin::symmetric(10, 8));
    if let Some(hint) = field.placeholder() {
        edit = edit.hint_text(hint);
    }

    let response = ui.add(edit);
    if props.focus == Some(field) {
        response.request_focus();
    }
    if response.changed() {
        let value = match kind {
            InputKind::Numeric { .. } => numeric_edit(props.request.get(field), buffer),
            InputKind::SingleLine | InputKind::MultiLine => buffer,
        };
        output.edits.push((field, value));
    }
    // Enter in a single-line input submits, like a browser form.
    if kind != InputKind::MultiLine
        && response.lost_focus()
        && ui.input(|input| input.key_pressed(egui::Key::Enter))
    {
        output.submit = true;
    }

    if let Some(rejection) = props.rejection.filter(|r| r.field() == Some(field)) {
        ui.label(
            egui::RichText::new(rejection.to_string())
                .small()
                .color(theme::INVALID),
        );
    }
}

/// Applies an edit to a number input. Text made of characters a number
/// input accepts is kept verbatim; `validate_request` decides whether it is
/// a usable integer. Any other edit is refused and `previous` stays.
pub fn numeric_edit(previous: &str, edited: String) -> String {
    let accepted = edited
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'));
    if accepted {
        edited
    } else {
        previous.to_string()
    }
}

pub fn show_loading_overlay(ctx: &egui::Context) {
    let screen = ctx.screen_rect();
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("loading_scrim"),
    ))
    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(128));

    egui::Area::new(egui::Id::new("loading_overlay"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .interactable(true)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(theme::CARD)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(32))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Spinner::new().size(48.0).color(theme::ACCENT));
                        ui.add_space(16.0);
                        ui.label(
                            egui::RichText::new("Planning your perfect trip...")
                                .size(20.0)
                                .strong()
                                .color(theme::HEADING),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("This may take a few moments")
                                .color(theme::MUTED),
                        );
                    });
                });
        });
}
