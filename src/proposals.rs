multiversx_sc::imports!();

use crate::errors::{
    ERR_EMPTY_DESCRIPTION, ERR_NOT_REGISTERED, ERR_PROPOSAL_OUT_OF_RANGE, ERR_TOO_MANY_PROPOSALS,
    ERR_VOTE_COUNT_OVERFLOW, ERR_VOTE_COUNT_UNDERFLOW,
};
use crate::types::{Proposal, WorkflowPhase};

/// Append-only proposal registry. Ids start at 0 and are never reused.
#[multiversx_sc::module]
pub trait ProposalModule:
    crate::admin::AdminModule
    + crate::workflow::WorkflowModule
    + crate::voters::VoterModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: submitProposal
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(&self, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_phase(WorkflowPhase::ProposalsRegistrationStarted);
        require!(self.is_registered_voter(&caller), ERR_NOT_REGISTERED);
        require!(!description.is_empty(), ERR_EMPTY_DESCRIPTION);

        let proposal_id = self.proposal_count().get();
        require!(
            proposal_id < self.max_proposals().get(),
            ERR_TOO_MANY_PROPOSALS
        );

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            vote_count: 0,
        };
        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_registered_event(proposal_id, &caller);

        proposal_id
    }

    // ========================================================
    // INTERNAL: counter mutators, only reachable through ballots
    // ========================================================

    fn require_proposal_exists(&self, proposal_id: u64) {
        require!(
            proposal_id < self.proposal_count().get(),
            ERR_PROPOSAL_OUT_OF_RANGE
        );
    }

    fn increment_vote(&self, proposal_id: u64) {
        self.require_proposal_exists(proposal_id);
        self.proposals(proposal_id).update(|proposal| {
            proposal.vote_count = match proposal.vote_count.checked_add(1) {
                Some(count) => count,
                None => sc_panic!(ERR_VOTE_COUNT_OVERFLOW),
            };
        });
    }

    fn decrement_vote(&self, proposal_id: u64) {
        self.require_proposal_exists(proposal_id);
        self.proposals(proposal_id).update(|proposal| {
            proposal.vote_count = match proposal.vote_count.checked_sub(1) {
                Some(count) => count,
                None => sc_panic!(ERR_VOTE_COUNT_UNDERFLOW),
            };
        });
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal_exists(proposal_id);
        self.proposals(proposal_id).get()
    }

    /// All proposals in registration order.
    #[view(getProposals)]
    fn get_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in 0..self.proposal_count().get() {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("maxProposals")]
    fn max_proposals(&self) -> SingleValueMapper<u64>;
}
