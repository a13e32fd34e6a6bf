// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Wizard step gating for AppState.
//!
//! The wizard walks the user through four fixed steps. It reads only the
//! plan predicates (`has_valid_plot`, `has_non_boundary_rectangle`,
//! `has_any_shape`) and never mutates shapes itself.

use super::AppState;
use crate::model::Plan;
use serde::Serialize;

/// One entry of the static step catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardStep {
    pub id: u8,
    pub title: &'static str,
    pub prompt: &'static str,
}

pub const WIZARD_STEPS: [WizardStep; 4] = [
    WizardStep {
        id: 1,
        title: "Plot Size",
        prompt: "Define the boundary of your plot.",
    },
    WizardStep {
        id: 2,
        title: "House Shape",
        prompt: "Draw the basic outline of the house.",
    },
    WizardStep {
        id: 3,
        title: "Details",
        prompt: "Add interior walls, doors, and windows.",
    },
    WizardStep {
        id: 4,
        title: "Export/Save",
        prompt: "Save your project or export it.",
    },
];

const FIRST_STEP: u8 = 1;
const LAST_STEP: u8 = WIZARD_STEPS.len() as u8;

/// Position in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: u8,
}

impl Wizard {
    pub fn new() -> Self {
        Self { current: FIRST_STEP }
    }

    pub fn current_step(&self) -> u8 {
        self.current
    }

    pub fn step(&self) -> &'static WizardStep {
        &WIZARD_STEPS[usize::from(self.current - 1)]
    }

    /// Whether the current step's requirements are met
    pub fn can_proceed(&self, plan: &Plan) -> bool {
        match self.current {
            1 => plan.has_valid_plot(),
            2 | 3 => plan.has_non_boundary_rectangle(),
            _ => true,
        }
    }

    /// Advance one step if allowed. Returns whether the step changed.
    pub fn next_step(&mut self, plan: &Plan) -> bool {
        if self.current < LAST_STEP && self.can_proceed(plan) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_step(&mut self) -> bool {
        if self.current > FIRST_STEP {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `step_id`: any earlier step, or the next one when the
    /// current step is complete.
    pub fn go_to_step(&mut self, step_id: u8, plan: &Plan) -> bool {
        if step_id < FIRST_STEP {
            return false;
        }
        if step_id < self.current {
            self.current = step_id;
            true
        } else if step_id == self.current + 1 && step_id <= LAST_STEP && self.can_proceed(plan) {
            self.current = step_id;
            true
        } else {
            false
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn current_step(&self) -> &'static WizardStep {
        self.wizard.step()
    }

    pub fn can_proceed(&self) -> bool {
        self.wizard.can_proceed(self.session.plan())
    }

    /// Export is offered once there is something to export
    pub fn can_export(&self) -> bool {
        self.session.plan().has_any_shape()
    }

    pub fn next_step(&mut self) {
        if self.wizard.next_step(self.session.plan()) {
            tracing::info!("Wizard step {}", self.wizard.current_step());
        }
    }

    pub fn prev_step(&mut self) {
        if self.wizard.prev_step() {
            tracing::info!("Wizard step {}", self.wizard.current_step());
        }
    }

    pub fn go_to_step(&mut self, step_id: u8) {
        if self.wizard.go_to_step(step_id, self.session.plan()) {
            tracing::info!("Wizard step {}", self.wizard.current_step());
        } else {
            tracing::debug!("Wizard refused jump to step {}", step_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Shape, ShapeId, ShapeStyle};
    use kurbo::Point;

    fn plan_with_plot(w: f64, h: f64) -> Plan {
        let mut plan = Plan::new();
        plan.replace_plot_boundary(w, h).unwrap();
        plan
    }

    fn add_house(plan: &mut Plan) {
        plan.append(Shape::rectangle(
            ShapeId::from("house"),
            Point::new(1.0, 1.0),
            Point::new(8.0, 6.0),
            ShapeStyle::default(),
        ))
        .unwrap();
    }

    #[test]
    fn starts_at_plot_size() {
        let wizard = Wizard::new();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.step().title, "Plot Size");
    }

    #[test]
    fn step_one_needs_valid_plot() {
        let mut wizard = Wizard::new();
        assert!(!wizard.next_step(&Plan::new()));
        assert!(!wizard.next_step(&plan_with_plot(2.0, 5.0)));
        assert!(wizard.next_step(&plan_with_plot(50.0, 90.0)));
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn steps_two_and_three_need_a_house() {
        let mut plan = plan_with_plot(50.0, 90.0);
        let mut wizard = Wizard::new();
        wizard.next_step(&plan);
        assert!(!wizard.can_proceed(&plan));
        assert!(!wizard.next_step(&plan));

        add_house(&mut plan);
        assert!(wizard.next_step(&plan));
        assert_eq!(wizard.current_step(), 3);
        assert!(wizard.next_step(&plan));
        assert_eq!(wizard.current_step(), 4);
        assert!(wizard.can_proceed(&plan));
        assert!(!wizard.next_step(&plan));
        assert_eq!(wizard.step().title, "Export/Save");
    }

    #[test]
    fn prev_step_stops_at_first() {
        let mut wizard = Wizard::new();
        assert!(!wizard.prev_step());
        wizard.next_step(&plan_with_plot(50.0, 90.0));
        assert!(wizard.prev_step());
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn go_to_step_rules() {
        let mut plan = plan_with_plot(50.0, 90.0);
        add_house(&mut plan);
        let mut wizard = Wizard::new();

        // Cannot skip ahead
        assert!(!wizard.go_to_step(3, &plan));
        assert!(wizard.go_to_step(2, &plan));
        assert!(wizard.go_to_step(3, &plan));
        // Backward jumps are always allowed
        assert!(wizard.go_to_step(1, &Plan::new()));
        assert_eq!(wizard.current_step(), 1);
        // Not to itself, not out of range
        assert!(!wizard.go_to_step(1, &plan));
        assert!(!wizard.go_to_step(0, &plan));
    }

    #[test]
    fn forward_jump_needs_completed_step() {
        let mut wizard = Wizard::new();
        assert!(!wizard.go_to_step(2, &plan_with_plot(1.0, 1.0)));
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn app_state_wizard_flow() {
        let mut app = AppState::new();
        app.next_step();
        assert_eq!(app.current_step().id, 1);
        assert!(!app.can_export());

        app.create_preset_plot("50", "90");
        assert!(app.can_proceed());
        app.next_step();
        assert_eq!(app.current_step().id, 2);
        assert!(app.can_export());

        app.go_to_step(4);
        assert_eq!(app.current_step().id, 2);
        app.prev_step();
        assert_eq!(app.current_step().id, 1);
    }
}
