use serde::{Deserialize, Serialize};

/// Delay between a modal becoming visible and it reaching the settled
/// `Open` phase (transition styling window).
pub const OPEN_SETTLE_DELAY_MS: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Project,
    Blog,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// What the session must do right after a successful `open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEffects {
    /// Focus target to move to (the close control, or the modal's
    /// preferred initial control).
    pub focus: Option<String>,
}

/// What the session must do while a modal closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEffects {
    /// The element focused before the modal opened, to be refocused now.
    pub restore_focus: Option<String>,
}

/// One accessible dialog: phase machine, focus capture/restoration and a
/// Tab trap over the dialog's ordered focusable targets.
///
/// Each dialog instance is independent; nothing prevents two of them
/// being visible at once. Escape then closes each one that reports
/// itself visible (known edge case, kept as-is).
#[derive(Debug)]
pub struct ModalController {
    kind: ModalKind,
    phase: ModalPhase,
    restore_focus: Option<String>,
    focusables: Vec<String>,
    focus_index: Option<usize>,
    trap_installed: bool,
}

impl ModalController {
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            phase: ModalPhase::Closed,
            restore_focus: None,
            focusables: Vec::new(),
            focus_index: None,
            trap_installed: false,
        }
    }

    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Visible to the visitor (and to Escape handling): the dialog is
    /// shown from the moment `open` runs, before it settles.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    pub fn trap_installed(&self) -> bool {
        self.trap_installed
    }

    /// Show the dialog: capture the origin focus, install the trap over
    /// `focusables`, and move focus to `initial_focus`. Re-opening while
    /// visible re-renders in place; the trap is replaced, never stacked.
    pub fn open(
        &mut self,
        focusables: Vec<String>,
        initial_focus: &str,
        focus_origin: Option<String>,
    ) -> OpenEffects {
        self.restore_focus = focus_origin;
        self.focus_index = focusables
            .iter()
            .position(|t| t.as_str() == initial_focus)
            .or(if focusables.is_empty() { None } else { Some(0) });
        self.focusables = focusables;
        self.trap_installed = !self.focusables.is_empty();
        self.phase = ModalPhase::Opening;

        OpenEffects {
            focus: self
                .focus_index
                .map(|i| self.focusables[i].clone()),
        }
    }

    /// Settle the opening transition.
    pub fn settle_open(&mut self) {
        if self.phase == ModalPhase::Opening {
            self.phase = ModalPhase::Open;
        }
    }

    /// Tab / Shift+Tab within the trap: wraps at either end, advances one
    /// target in between. Returns the new focus target while trapped.
    pub fn tab(&mut self, shift: bool) -> Option<String> {
        if !self.trap_installed || !self.is_visible() {
            return None;
        }
        let len = self.focusables.len();
        let current = self.focus_index?;
        let next = if shift {
            if current == 0 { len - 1 } else { current - 1 }
        } else {
            if current == len - 1 { 0 } else { current + 1 }
        };
        self.focus_index = Some(next);
        Some(self.focusables[next].clone())
    }

    /// Hide the dialog. The trap is removed on every close, and closing a
    /// dialog that is not visible is a no-op.
    pub fn close(&mut self) -> Option<CloseEffects> {
        if !self.is_visible() {
            return None;
        }
        self.trap_installed = false;
        self.focusables.clear();
        self.focus_index = None;
        self.phase = ModalPhase::Closing;

        Some(CloseEffects {
            restore_focus: self.restore_focus.take(),
        })
    }

    /// Settle the closing transition.
    pub fn settle_close(&mut self) {
        if self.phase == ModalPhase::Closing {
            self.phase = ModalPhase::Closed;
        }
    }
}
