#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod errors;
pub mod events;
pub mod proposals;
pub mod types;
pub mod voters;
pub mod workflow;

use errors::{
    ERR_ALREADY_VOTED, ERR_HAS_NOT_VOTED, ERR_INVALID_CONFIG, ERR_NOT_REGISTERED, ERR_NO_PROPOSALS,
};
use types::WorkflowPhase;

// ============================================================
// Contract
// ============================================================

/// Single-election ballot. Voters are whitelisted and register, submit
/// proposals, then cast one revisable vote each. Once votes are tallied
/// anyone can read the winning proposal.
#[multiversx_sc::contract]
pub trait Voting:
    admin::AdminModule
    + events::EventsModule
    + workflow::WorkflowModule
    + voters::VoterModule
    + proposals::ProposalModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, max_proposals: u64) {
        require!(max_proposals > 0, ERR_INVALID_CONFIG);

        let deployer = self.blockchain().get_caller();
        self.administrator().set(&deployer);
        self.max_proposals().set(max_proposals);
        self.proposal_count().set(0u64);
        self.current_phase().set(WorkflowPhase::RegisteringVoters);
        self.previous_phase().set(WorkflowPhase::RegisteringVoters);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: castVote
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_phase(WorkflowPhase::VotingSessionStarted);

        let mut voter = self.voter_or_default(&caller);
        require!(voter.is_registered, ERR_NOT_REGISTERED);
        require!(!voter.has_voted(), ERR_ALREADY_VOTED);
        self.require_proposal_exists(proposal_id);

        voter.voted_proposal_id = Some(proposal_id);
        self.voters(&caller).set(&voter);
        self.increment_vote(proposal_id);

        self.voted_event(&caller, proposal_id);
    }

    // ========================================================
    // ENDPOINT: changeVote
    // Moves exactly one vote from the recorded proposal to the
    // new one. Total votes are unchanged.
    // ========================================================

    #[endpoint(changeVote)]
    fn change_vote(&self, new_proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_phase(WorkflowPhase::VotingSessionStarted);

        let mut voter = self.voter_or_default(&caller);
        let previous_proposal_id = match voter.voted_proposal_id {
            Some(id) => id,
            None => sc_panic!(ERR_HAS_NOT_VOTED),
        };
        self.require_proposal_exists(new_proposal_id);

        self.decrement_vote(previous_proposal_id);
        voter.voted_proposal_id = Some(new_proposal_id);
        self.voters(&caller).set(&voter);
        self.increment_vote(new_proposal_id);

        self.vote_changed_event(&caller, previous_proposal_id, new_proposal_id);
    }

    // ========================================================
    // VIEWS: results
    // ========================================================

    /// Id of the proposal with the most votes. On a tie the lowest id wins.
    #[view(getWinner)]
    fn tally(&self) -> u64 {
        self.require_phase(WorkflowPhase::VotesTallied);

        let count = self.proposal_count().get();
        require!(count > 0, ERR_NO_PROPOSALS);

        let mut winner_id = 0u64;
        let mut winner_votes = self.proposals(0).get().vote_count;
        for proposal_id in 1..count {
            let votes = self.proposals(proposal_id).get().vote_count;
            if votes > winner_votes {
                winner_id = proposal_id;
                winner_votes = votes;
            }
        }
        winner_id
    }

    #[view(getWinningDescription)]
    fn winning_description(&self) -> ManagedBuffer {
        let winner_id = self.tally();
        self.proposals(winner_id).get().description
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue2<ManagedAddress, u64> {
        let administrator = self.administrator().get();
        let max_proposals = self.max_proposals().get();
        (administrator, max_proposals).into()
    }
}
