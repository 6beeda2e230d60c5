//! Toast notification queue and presentation presets.
//!
//! DESIGN
//! ======
//! Toasts are kept oldest-first in insertion order. The toaster asks for the
//! display order explicitly: newest first by default, oldest first when
//! `reverse_order` is set. Styling is fixed per kind so callers only choose
//! success or error.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Identifier of a queued toast, unique for the lifetime of a `ToastState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Inline style applied to a toast and its icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastStyle {
    pub border: &'static str,
    pub padding: &'static str,
    pub color: &'static str,
    pub icon_primary: &'static str,
    pub icon_secondary: &'static str,
}

pub const SUCCESS_STYLE: ToastStyle = ToastStyle {
    border: "1px solid #10B981",
    padding: "16px",
    color: "#10B981",
    icon_primary: "#10B981",
    icon_secondary: "#FFFAEE",
};

pub const ERROR_STYLE: ToastStyle = ToastStyle {
    border: "1px solid #EF4444",
    padding: "16px",
    color: "#EF4444",
    icon_primary: "#EF4444",
    icon_secondary: "#FFFAEE",
};

impl ToastStyle {
    /// CSS declarations for the toast body.
    #[must_use]
    pub fn body_css(&self) -> String {
        format!("border: {}; padding: {}; color: {};", self.border, self.padding, self.color)
    }

    /// CSS declarations for the round status icon.
    #[must_use]
    pub fn icon_css(&self) -> String {
        format!("background: {}; color: {};", self.icon_primary, self.icon_secondary)
    }
}

impl ToastKind {
    #[must_use]
    pub fn style(self) -> ToastStyle {
        match self {
            Self::Success => SUCCESS_STYLE,
            Self::Error => ERROR_STYLE,
        }
    }

    /// How long the toast stays on screen before auto-dismissal.
    #[must_use]
    pub fn duration_ms(self) -> u64 {
        match self {
            Self::Success => 2_000,
            Self::Error => 4_000,
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2715}",
        }
    }

    /// ARIA live-region politeness for screen readers.
    #[must_use]
    pub fn aria_live(self) -> &'static str {
        match self {
            Self::Success => "polite",
            Self::Error => "assertive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Screen corner/edge the toaster is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::TopLeft => "toaster toaster--top-left",
            Self::TopCenter => "toaster toaster--top-center",
            Self::TopRight => "toaster toaster--top-right",
            Self::BottomLeft => "toaster toaster--bottom-left",
            Self::BottomCenter => "toaster toaster--bottom-center",
            Self::BottomRight => "toaster toaster--bottom-right",
        }
    }
}

/// Toaster placement and ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToasterOptions {
    pub position: ToastPosition,
    pub reverse_order: bool,
}

/// Queue of toasts currently on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Toasts in display order: newest first unless `reverse_order`.
    #[must_use]
    pub fn ordered(&self, reverse_order: bool) -> Vec<Toast> {
        if reverse_order {
            self.toasts.clone()
        } else {
            self.toasts.iter().rev().cloned().collect()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
