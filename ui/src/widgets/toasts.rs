//! Transient notifications in the top-right corner.

use std::time::Duration;

use backoffice_business::PageEvent;
use egui::{Align2, Area, Color32, Context, Frame, Id, Margin, RichText, Stroke};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

const MAX_VISIBLE: usize = 5;
const TOAST_WIDTH: f32 = 320.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn color(self) -> Color32 {
        match self {
            Self::Info => Color32::LIGHT_BLUE,
            Self::Success => COLOR_GREEN,
            Self::Warning => COLOR_AMBER,
            Self::Error => COLOR_RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub duration: Duration,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
            duration: Duration::from_secs(3),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            ..Self::info(message)
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Warning,
            ..Self::info(message)
        }
    }

    /// Errors stay up longer.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
            duration: Duration::from_secs(6),
        }
    }

    /// The toast to show for a page event, if any. Successful loads are quiet.
    pub fn from_event(event: &PageEvent) -> Option<Self> {
        match event {
            PageEvent::Loaded { .. } => None,
            PageEvent::Failed(message) | PageEvent::ActionFailed(message) => {
                Some(Self::error(message.as_str()))
            }
            PageEvent::ActionSucceeded(message) => Some(Self::success(message.as_str())),
        }
    }
}

struct Entry {
    toast: Toast,
    /// egui time the toast was first drawn.
    shown_at: Option<f64>,
}

#[derive(Default)]
pub struct Toasts {
    entries: Vec<Entry>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) {
        log::debug!("Toast ({:?}): {}", toast.level, toast.message);
        self.entries.push(Entry {
            toast,
            shown_at: None,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.toast.message.as_str())
    }

    /// Drops expired toasts and draws the rest, newest on top.
    pub fn show(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.entries.retain(|entry| {
            entry
                .shown_at
                .is_none_or(|at| now - at < entry.toast.duration.as_secs_f64())
        });
        if self.entries.is_empty() {
            return;
        }

        Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_TOP, [-12.0, 40.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(TOAST_WIDTH);
                for entry in self.entries.iter_mut().rev().take(MAX_VISIBLE) {
                    entry.shown_at.get_or_insert(now);
                    let color = entry.toast.level.color();
                    Frame::popup(ui.style())
                        .stroke(Stroke::new(1.0, color))
                        .inner_margin(Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&entry.toast.message).color(color));
                        });
                    ui.add_space(4.0);
                }
            });

        let next_expiry = self
            .entries
            .iter()
            .filter_map(|e| e.shown_at.map(|at| at + e.toast.duration.as_secs_f64() - now))
            .fold(f64::INFINITY, f64::min);
        if next_expiry.is_finite() {
            ctx.request_repaint_after(Duration::from_secs_f64(next_expiry.max(0.0)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_map_to_toasts() {
        assert_eq!(Toast::from_event(&PageEvent::Loaded { count: 3 }), None);
        let toast = Toast::from_event(&PageEvent::Failed("Failed to load invoices".to_owned()));
        assert_eq!(toast.map(|t| t.level), Some(ToastLevel::Error));
        let toast = Toast::from_event(&PageEvent::ActionSucceeded("Budi verified".to_owned()));
        assert_eq!(toast.map(|t| t.level), Some(ToastLevel::Success));
    }

    #[test]
    fn test_toast_is_drawn_then_expires() {
        let ctx = Context::default();
        let mut toasts = Toasts::default();
        toasts.push(Toast::info("Saved"));

        let mut input = egui::RawInput {
            time: Some(0.0),
            ..Default::default()
        };
        let _ = ctx.run(input.clone(), |ctx| toasts.show(ctx));
        assert_eq!(toasts.len(), 1);

        input.time = Some(10.0);
        let _ = ctx.run(input, |ctx| toasts.show(ctx));
        assert!(toasts.is_empty());
    }
}
