//! Transient notifications drawn over the top-right corner.

use std::time::{Duration, Instant};

use eframe::egui;
use planner_client::{Notification, Notifier, Severity};

use crate::ui::theme;

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct ToastQueue {
    lifetime: Duration,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            notification,
            expires_at: now + self.lifetime,
        });
        id
    }

    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = Vec::new();
        egui::Area::new(egui::Id::new("toast_stack"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                for toast in self.visible() {
                    let (fill, stroke) = match toast.notification.severity {
                        Severity::Info => (theme::TOAST_INFO_FILL, theme::TOAST_INFO_STROKE),
                        Severity::Error => (theme::TOAST_ERROR_FILL, theme::TOAST_ERROR_STROKE),
                    };
                    egui::Frame::NONE
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(&toast.notification.title)
                                        .strong()
                                        .color(egui::Color32::WHITE),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("Dismiss").clicked() {
                                            dismissed.push(toast.id);
                                        }
                                    },
                                );
                            });
                            ui.label(
                                egui::RichText::new(&toast.notification.message)
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(8.0);
                }
            });

        for id in dismissed {
            self.dismiss(id);
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.push_at(Notification::error("Error", "boom"), start);
        queue.push_at(
            Notification::new(Severity::Info, "Saved", "ok"),
            start + Duration::from_secs(3),
        );

        queue.expire(start + Duration::from_secs(4));
        assert_eq!(queue.visible().len(), 2);

        queue.expire(start + Duration::from_secs(5));
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].notification.title, "Saved");

        queue.expire(start + Duration::from_secs(9));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        let first = queue.push_at(Notification::error("Error", "first"), now);
        let second = queue.push_at(Notification::error("Error", "second"), now);
        assert_ne!(first, second);

        queue.dismiss(first);

        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].id, second);
    }

    #[test]
    fn notifier_pushes_a_toast() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.notify(Notification::error("Error", "Failed to generate trip plan. Please try again."));

        let shown = &queue.visible()[0].notification;
        assert_eq!(shown.title, "Error");
        assert_eq!(shown.severity, Severity::Error);
    }
}
