//! Team editing with change notification
//!
//! A `TeamEditor` holds the retreat's economics input, recomputes the
//! economics after every edit and tells registered listeners about the new
//! team list and total team cost so a parent can persist them.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::economics::{
    compute_economics_with_rate, PlatformFeeRate, RetreatEconomicsInput, RetreatEconomicsResult,
    TeamMemberAgreement,
};
use crate::error::{common, Result};

/// Receives the team list and total team cost after each edit.
///
/// Notifications are fire-and-forget: the editor ignores what a listener
/// does with them and never waits on it.
pub trait TeamChangeListener: Send + Sync {
    fn on_team_change(&self, members: &[TeamMemberAgreement], total_team_cost: Decimal);
}

impl<F> TeamChangeListener for F
where
    F: Fn(&[TeamMemberAgreement], Decimal) + Send + Sync,
{
    fn on_team_change(&self, members: &[TeamMemberAgreement], total_team_cost: Decimal) {
        self(members, total_team_cost)
    }
}

pub struct TeamEditor {
    input: RetreatEconomicsInput,
    rate: PlatformFeeRate,
    economics: RetreatEconomicsResult,
    listeners: Vec<Arc<dyn TeamChangeListener>>,
}

impl TeamEditor {
    pub fn new(input: RetreatEconomicsInput) -> Self {
        Self::with_rate(input, PlatformFeeRate::DEFAULT)
    }

    pub fn with_rate(input: RetreatEconomicsInput, rate: PlatformFeeRate) -> Self {
        let economics = compute_economics_with_rate(&input, rate);
        Self {
            input,
            rate,
            economics,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. It is not called until the next edit.
    pub fn subscribe(&mut self, listener: Arc<dyn TeamChangeListener>) {
        self.listeners.push(listener);
    }

    pub fn input(&self) -> &RetreatEconomicsInput {
        &self.input
    }

    pub fn members(&self) -> &[TeamMemberAgreement] {
        &self.input.team_members
    }

    /// Economics for the current state of the team
    pub fn economics(&self) -> &RetreatEconomicsResult {
        &self.economics
    }

    pub fn add_member(&mut self, member: TeamMemberAgreement) {
        debug!(role = %member.role, fee_type = %member.fee_type, "Adding team member");
        self.input.team_members.push(member);
        self.changed();
    }

    /// Edit the member at `index` in place
    pub fn update_member<F>(&mut self, index: usize, edit: F) -> Result<()>
    where
        F: FnOnce(&mut TeamMemberAgreement),
    {
        let team_size = self.input.team_members.len();
        let member = self
            .input
            .team_members
            .get_mut(index)
            .ok_or_else(|| common::member_not_found(index, team_size))?;
        edit(member);
        debug!(index, "Updated team member");
        self.changed();
        Ok(())
    }

    pub fn remove_member(&mut self, index: usize) -> Result<TeamMemberAgreement> {
        if index >= self.input.team_members.len() {
            return Err(common::member_not_found(
                index,
                self.input.team_members.len(),
            ));
        }
        let removed = self.input.team_members.remove(index);
        debug!(index, role = %removed.role, "Removed team member");
        self.changed();
        Ok(removed)
    }

    /// Change the retreat figures the fees depend on
    pub fn set_retreat(&mut self, price_per_person: Decimal, max_attendees: u32, num_nights: u32) {
        self.input.price_per_person = price_per_person;
        self.input.max_attendees = max_attendees;
        self.input.num_nights = num_nights;
        self.changed();
    }

    fn changed(&mut self) {
        self.economics = compute_economics_with_rate(&self.input, self.rate);
        trace!(
            listeners = self.listeners.len(),
            total_team_cost = %self.economics.total_team_cost,
            "Notifying team change listeners"
        );
        for listener in &self.listeners {
            listener.on_team_change(&self.input.team_members, self.economics.total_team_cost);
        }
    }
}
