//! Draw panel state aggregate
//!
//! [`DrawPanel`] owns every piece of panel state (mode, both range pairs and
//! the draw phase). Front ends feed it [`PanelEvent`]s and re-read it to
//! render; nothing else mutates it.
//!
//! Draw trigger state machine:
//!
//! ```text
//!   Idle ──click──▶ InFlight ──Ok(v)──▶ Succeeded(v) ──click──▶ InFlight ...
//!                      │
//!                      └────Err(e)───▶ Failed(e)    ──click──▶ InFlight ...
//! ```
//!
//! A click while `InFlight` does nothing: the trigger is disabled, so at most
//! one draw is outstanding.

use crate::display::DrawDisplay;
use crate::error::{DrawError, DrawResult};
use crate::types::{DrawMode, DrawPhase, DrawRequest, ModeSelector, RangeField, RangePair};

/// One discrete input to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Mode toggle changed; `None` means the active button was deselected
    SelectMode(Option<DrawMode>),
    /// Switch to the other mode
    ToggleMode,
    /// A spinner of the active mode reported a value (`None` = no valid value)
    SetRange(RangeField, Option<u32>),
    /// Draw button clicked
    ClickDraw,
    /// The outstanding draw resolved or rejected
    DrawFinished(DrawResult<String>),
}

/// Panel state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPanel {
    mode: ModeSelector,
    id_range: RangePair,
    plane_range: RangePair,
    phase: DrawPhase,
}

impl DrawPanel {
    /// Panel as it looks right after mount
    pub fn new() -> Self {
        Self {
            mode: ModeSelector::new(DrawMode::IdMode),
            id_range: RangePair::id_default(),
            plane_range: RangePair::plane_default(),
            phase: DrawPhase::Idle,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode.current()
    }

    pub fn id_range(&self) -> &RangePair {
        &self.id_range
    }

    pub fn plane_range(&self) -> &RangePair {
        &self.plane_range
    }

    pub fn phase(&self) -> &DrawPhase {
        &self.phase
    }

    /// Range pair of the active mode
    pub fn active_range(&self) -> &RangePair {
        match self.mode.current() {
            DrawMode::IdMode => &self.id_range,
            DrawMode::PlaneMode => &self.plane_range,
        }
    }

    fn active_range_mut(&mut self) -> &mut RangePair {
        match self.mode.current() {
            DrawMode::IdMode => &mut self.id_range,
            DrawMode::PlaneMode => &mut self.plane_range,
        }
    }

    /// Status line, error banner and trigger state for the current phase
    pub fn display(&self) -> DrawDisplay {
        DrawDisplay::project(&self.phase)
    }

    /// Whether the draw button accepts clicks
    pub fn trigger_enabled(&self) -> bool {
        !self.phase.is_in_flight()
    }

    /// Apply one event. Returns the request to send when a draw starts.
    pub fn apply(&mut self, event: PanelEvent) -> Option<DrawRequest> {
        match event {
            PanelEvent::SelectMode(mode) => {
                self.set_mode(mode);
                None
            }
            PanelEvent::ToggleMode => {
                self.toggle_mode();
                None
            }
            PanelEvent::SetRange(field, value) => {
                self.set_range(field, value);
                None
            }
            PanelEvent::ClickDraw => self.click_draw(),
            PanelEvent::DrawFinished(outcome) => {
                self.finish_draw(outcome);
                None
            }
        }
    }

    // ===== Mode selector =====

    /// Returns `true` when the active mode changed
    pub fn set_mode(&mut self, mode: Option<DrawMode>) -> bool {
        let changed = self.mode.set_mode(mode);
        if changed {
            log::debug!("Mode -> {}", self.mode.current().key());
        }
        changed
    }

    pub fn toggle_mode(&mut self) -> DrawMode {
        let mode = self.mode.toggle();
        log::debug!("Mode -> {}", mode.key());
        mode
    }

    // ===== Range coordinator =====

    /// Route a spinner change to the active range pair
    pub fn set_range(&mut self, field: RangeField, value: Option<u32>) -> bool {
        self.active_range_mut().set(field, value)
    }

    // ===== Draw trigger =====

    /// Start a draw for the active mode.
    ///
    /// Returns `None` without touching anything while a draw is in flight.
    pub fn click_draw(&mut self) -> Option<DrawRequest> {
        if self.phase.is_in_flight() {
            log::debug!("Draw click ignored: a draw is already in flight");
            return None;
        }

        let range = self.active_range();
        if !range.is_consistent() {
            log::warn!(
                "Drawing with lower {} not below upper {}; the draw service will reject it",
                range.lower(),
                range.upper()
            );
        }

        let request = DrawRequest::for_mode(self.mode.current(), &self.id_range, &self.plane_range);
        log::info!("Starting {} with {request:?}", request.operation());
        self.phase = DrawPhase::InFlight;
        Some(request)
    }

    /// Record the outcome of the outstanding draw
    pub fn finish_draw(&mut self, outcome: DrawResult<String>) {
        if !self.phase.is_in_flight() {
            log::warn!(
                "Dropping draw outcome {outcome:?}: panel is {}",
                self.phase.name()
            );
            return;
        }

        self.phase = match outcome {
            Ok(value) => {
                log::info!("Draw succeeded: {value}");
                DrawPhase::Succeeded(value)
            }
            Err(err) => {
                report_failure(&err);
                DrawPhase::Failed(err.to_string())
            }
        };
    }
}

impl Default for DrawPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn report_failure(err: &DrawError) {
    if err.is_expected() {
        log::warn!("Draw failed: {err}");
    } else {
        log::error!("Draw failed: {err}");
    }

    if err.is_bridge_failure() {
        log::error!("Draw bridge unavailable; make sure the panel runs inside its host runtime");
        log::error!(
            "Host environment: {} ({}), thread {:?}",
            std::env::consts::OS,
            std::env::consts::ARCH,
            std::thread::current().name().unwrap_or("unnamed")
        );
    }
}
