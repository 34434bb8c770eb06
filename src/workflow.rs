multiversx_sc::imports!();

use crate::errors::{ERR_NO_NEXT_PHASE, ERR_PHASE_MISMATCH, ERR_PHASE_OUT_OF_RANGE};
use crate::types::WorkflowPhase;

/// The election state machine. Only the administrator moves the phase;
/// every other endpoint gates itself through `require_phase`.
#[multiversx_sc::module]
pub trait WorkflowModule: crate::admin::AdminModule + crate::events::EventsModule {
    /// Jumps to any valid phase, backward included, so the administrator
    /// can correct a premature transition.
    #[endpoint(setPhase)]
    fn set_phase(&self, target: u8) {
        let caller = self.blockchain().get_caller();
        self.require_administrator(&caller);

        let new_phase = match WorkflowPhase::from_index(target) {
            Some(phase) => phase,
            None => sc_panic!(ERR_PHASE_OUT_OF_RANGE),
        };
        self.transition_to(new_phase);
    }

    #[endpoint(advancePhase)]
    fn advance_phase(&self) {
        let caller = self.blockchain().get_caller();
        self.require_administrator(&caller);

        let new_phase = match self.current_phase().get().next() {
            Some(phase) => phase,
            None => sc_panic!(ERR_NO_NEXT_PHASE),
        };
        self.transition_to(new_phase);
    }

    fn transition_to(&self, new_phase: WorkflowPhase) {
        let previous = self.current_phase().get();
        self.previous_phase().set(previous);
        self.current_phase().set(new_phase);

        self.workflow_status_change_event(previous, new_phase);
    }

    fn require_phase(&self, expected: WorkflowPhase) {
        require!(self.current_phase().get() == expected, ERR_PHASE_MISMATCH);
    }

    #[view(getCurrentPhase)]
    #[storage_mapper("currentPhase")]
    fn current_phase(&self) -> SingleValueMapper<WorkflowPhase>;

    #[view(getPreviousPhase)]
    #[storage_mapper("previousPhase")]
    fn previous_phase(&self) -> SingleValueMapper<WorkflowPhase>;
}
