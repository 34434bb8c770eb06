multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_AUTHORIZED, ERR_INVALID_ADDRESS, ERR_NOT_AUTHORIZED};
use crate::types::{Voter, VoterInfo, WorkflowPhase};

#[multiversx_sc::module]
pub trait VoterModule:
    crate::admin::AdminModule + crate::workflow::WorkflowModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: authorize
    // Administrator whitelists an address for self-registration.
    // ========================================================

    #[endpoint(authorize)]
    fn authorize(&self, address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_administrator(&caller);
        self.require_phase(WorkflowPhase::RegisteringVoters);
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);

        let mut voter = self.voter_or_default(&address);
        require!(!voter.is_authorized, ERR_ALREADY_AUTHORIZED);

        voter.is_authorized = true;
        self.voters(&address).set(&voter);
        self.authorized_voters().insert(address.clone());

        self.authorized_event(&address);
    }

    // ========================================================
    // ENDPOINT: register
    // A whitelisted caller confirms its enrollment.
    // ========================================================

    #[endpoint(register)]
    fn register(&self) {
        let caller = self.blockchain().get_caller();
        self.require_phase(WorkflowPhase::RegisteringVoters);

        let mut voter = self.voter_or_default(&caller);
        require!(voter.is_authorized, ERR_NOT_AUTHORIZED);

        // Re-registration keeps the recorded ballot, otherwise the counted
        // vote would outlive the voter's has-voted flag.
        if !voter.is_registered {
            voter.is_registered = true;
            voter.voted_proposal_id = None;
            self.voters(&caller).set(&voter);
        }

        self.voter_registered_event(&caller);
    }

    fn voter_or_default(&self, address: &ManagedAddress) -> Voter {
        let mapper = self.voters(address);
        if mapper.is_empty() {
            Voter::default()
        } else {
            mapper.get()
        }
    }

    fn is_registered_voter(&self, address: &ManagedAddress) -> bool {
        self.voter_or_default(address).is_registered
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVoterInfo)]
    fn get_voter_info(&self, address: ManagedAddress) -> VoterInfo<Self::Api> {
        let voter = self.voter_or_default(&address);
        VoterInfo {
            address,
            is_registered: voter.is_registered,
            has_voted: voter.has_voted(),
            voted_proposal_id: voter.voted_proposal_id,
        }
    }

    #[view(isAuthorized)]
    fn is_authorized(&self, address: &ManagedAddress) -> bool {
        self.voter_or_default(address).is_authorized
    }

    #[view(getAuthorizedVoters)]
    fn get_authorized_voters(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.authorized_voters().len() as u64;
        let start = core::cmp::min(from, total);
        let end = core::cmp::min(start.saturating_add(count), total);
        let (start, end) = (start as usize, end as usize);

        for (idx, voter) in self.authorized_voters().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(voter);
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("voters")]
    fn voters(&self, address: &ManagedAddress) -> SingleValueMapper<Voter>;

    #[storage_mapper("authorizedVoters")]
    fn authorized_voters(&self) -> UnorderedSetMapper<ManagedAddress>;
}
