use std::time::{Duration, Instant};

use crate::enhance::EnhancementResult;
use crate::ui::editor::Editor;
use crate::ui::theme::Theme;

/// Inline message shown when submit is pressed on empty/whitespace input.
pub const VALIDATION_MESSAGE: &str = "الرجاء إدخال نص أولاً.";

/// How long the per-panel "copied" indicator stays visible.
pub const COPIED_INDICATOR_TTL: Duration = Duration::from_secs(2);

/// One of the three result panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Corrected,
    Improved,
    Literary,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Corrected, Panel::Improved, Panel::Literary];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Corrected => "نص مصحح",
            Panel::Improved => "نص محسن",
            Panel::Literary => "نص أدبي",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Panel::Corrected => 0,
            Panel::Improved => 1,
            Panel::Literary => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Editor,
    Results(Panel),
}

pub struct App {
    pub editor: Editor,
    pub loading: bool,
    pub result: Option<EnhancementResult>,
    pub error: Option<String>,
    pub focus: FocusPane,
    pub copied_at: [Option<Instant>; 3],
    pub should_quit: bool,
    pub tick: u64,
    pub theme: Theme,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            editor: Editor::new(),
            loading: false,
            result: None,
            error: None,
            focus: FocusPane::Editor,
            copied_at: [None; 3],
            should_quit: false,
            tick: 0,
            theme,
        }
    }

    /// Editing is disabled while a request is pending.
    pub fn input_enabled(&self) -> bool {
        !self.loading
    }

    /// Validate the input and, when acceptable, transition into the loading
    /// state and hand back the text to send.
    ///
    /// Returns `None` without side effects while a request is pending, and
    /// `None` with the inline validation message for blank input.
    pub fn submit(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        if self.editor.is_blank() {
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return None;
        }
        self.begin_request();
        Some(self.editor.content())
    }

    /// Clear any previous outcome and mark a request as in flight.
    pub fn begin_request(&mut self) {
        self.error = None;
        self.result = None;
        self.copied_at = [None; 3];
        self.loading = true;
    }

    /// Store the settled outcome and leave the loading state.
    pub fn finish_request(&mut self, outcome: Result<EnhancementResult, String>) {
        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(message) => self.error = Some(message),
        }
    }

    pub fn panel_text(&self, panel: Panel) -> Option<&str> {
        let result = self.result.as_ref()?;
        Some(match panel {
            Panel::Corrected => result.corrected.as_str(),
            Panel::Improved => result.improved.as_str(),
            Panel::Literary => result.literary.as_str(),
        })
    }

    /// Take the focused panel's text for a clipboard write and start its
    /// "copied" indicator. Returns `None` when there is nothing to copy.
    pub fn copy_focused(&mut self) -> Option<String> {
        let FocusPane::Results(panel) = self.focus else {
            return None;
        };
        if self.loading {
            return None;
        }
        let text = self.panel_text(panel)?.to_string();
        if text.is_empty() {
            return None;
        }
        self.mark_copied(panel);
        Some(text)
    }

    pub fn mark_copied(&mut self, panel: Panel) {
        self.copied_at[panel.index()] = Some(Instant::now());
    }

    /// Whether the panel's "copied" indicator is still within its 2-second
    /// window. Each panel's indicator is independent.
    pub fn copied_visible(&self, panel: Panel) -> bool {
        self.copied_at[panel.index()]
            .is_some_and(|at| at.elapsed() < COPIED_INDICATOR_TTL)
    }

    /// Tab order: editor, then the three panels left to right. Panels are
    /// skipped while they are not on screen.
    pub fn toggle_focus(&mut self) {
        if !self.show_results() {
            self.focus = FocusPane::Editor;
            return;
        }
        self.focus = match self.focus {
            FocusPane::Editor => FocusPane::Results(Panel::Corrected),
            FocusPane::Results(Panel::Corrected) => FocusPane::Results(Panel::Improved),
            FocusPane::Results(Panel::Improved) => FocusPane::Results(Panel::Literary),
            FocusPane::Results(Panel::Literary) => FocusPane::Editor,
        };
    }

    /// Whether the results area should be drawn at all. Mirrors the original
    /// behavior of showing the grid only once a request ran.
    pub fn show_results(&self) -> bool {
        self.loading || self.result.is_some()
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
