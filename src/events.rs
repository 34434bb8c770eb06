multiversx_sc::imports!();

use crate::types::WorkflowPhase;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("authorized")]
    fn authorized_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("workflowStatusChange")]
    fn workflow_status_change_event(
        &self,
        #[indexed] previous: WorkflowPhase,
        #[indexed] new: WorkflowPhase,
    );

    #[event("proposalRegistered")]
    fn proposal_registered_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("voted")]
    fn voted_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] proposal_id: u64);

    #[event("voteChanged")]
    fn vote_changed_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] previous_proposal_id: u64,
        #[indexed] new_proposal_id: u64,
    );

    #[event("administratorChanged")]
    fn administrator_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] new: &ManagedAddress,
    );
}
