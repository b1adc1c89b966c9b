//! Mock implementations for testing

use rust_decimal::Decimal;
use std::sync::Mutex;

use crate::economics::TeamMemberAgreement;
use crate::team::TeamChangeListener;

/// A single notification captured by [`RecordingListener`]
#[derive(Debug, Clone, PartialEq)]
pub struct TeamChange {
    pub members: Vec<TeamMemberAgreement>,
    pub total_team_cost: Decimal,
}

/// Listener that records every team change it receives
#[derive(Debug, Default)]
pub struct RecordingListener {
    calls: Mutex<Vec<TeamChange>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notifications received so far
    pub fn calls(&self) -> Vec<TeamChange> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn last_total(&self) -> Option<Decimal> {
        self.calls().last().map(|change| change.total_team_cost)
    }
}

impl TeamChangeListener for RecordingListener {
    fn on_team_change(&self, members: &[TeamMemberAgreement], total_team_cost: Decimal) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(TeamChange {
                members: members.to_vec(),
                total_team_cost,
            });
        }
    }
}
