multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Workflow Phase: election lifecycle, in ordinal order
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorkflowPhase {
    /// Administrator whitelists addresses, whitelisted addresses register.
    RegisteringVoters,
    /// Registered voters submit proposals.
    ProposalsRegistrationStarted,
    ProposalsRegistrationEnded,
    /// Registered voters cast or change their single vote.
    VotingSessionStarted,
    VotingSessionEnded,
    /// Terminal. The winner can be queried.
    VotesTallied,
}

impl WorkflowPhase {
    pub const TERMINAL: WorkflowPhase = WorkflowPhase::VotesTallied;

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(WorkflowPhase::RegisteringVoters),
            1 => Some(WorkflowPhase::ProposalsRegistrationStarted),
            2 => Some(WorkflowPhase::ProposalsRegistrationEnded),
            3 => Some(WorkflowPhase::VotingSessionStarted),
            4 => Some(WorkflowPhase::VotingSessionEnded),
            5 => Some(WorkflowPhase::VotesTallied),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The phase right after this one, `None` once votes are tallied.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

// ============================================================
// Proposal: one candidate option with its running count
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub vote_count: u64,
}

// ============================================================
// Voter: per-address ballot state
// ============================================================

/// `has_voted` is not stored: a voter has voted exactly when
/// `voted_proposal_id` is set.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug, Default)]
pub struct Voter {
    pub is_authorized: bool,
    pub is_registered: bool,
    pub voted_proposal_id: Option<u64>,
}

impl Voter {
    pub fn has_voted(&self) -> bool {
        self.voted_proposal_id.is_some()
    }
}

/// Public projection returned by `getVoterInfo`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoterInfo<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: Option<u64>,
}
