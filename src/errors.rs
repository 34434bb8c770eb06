// ============================================================
// Error messages: every failed check aborts the call with one
// of these. The VM reverts all storage writes of a failed call.
// ============================================================

// ── Workflow ──

pub const ERR_PHASE_MISMATCH: &str = "Operation not allowed in the current workflow phase";
pub const ERR_PHASE_OUT_OF_RANGE: &str = "Invalid workflow phase";
pub const ERR_NO_NEXT_PHASE: &str = "Votes already tallied, no next phase";

// ── Access ──

pub const ERR_NOT_ADMINISTRATOR: &str = "Caller is not the administrator";
pub const ERR_NOT_AUTHORIZED: &str = "Caller is not authorized to register";
pub const ERR_NOT_REGISTERED: &str = "Caller is not a registered voter";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_ALREADY_AUTHORIZED: &str = "Address is already authorized";

// ── Ballot ──

pub const ERR_ALREADY_VOTED: &str = "Voter has already voted";
pub const ERR_HAS_NOT_VOTED: &str = "Voter has not voted yet";
pub const ERR_PROPOSAL_OUT_OF_RANGE: &str = "Proposal does not exist";
pub const ERR_NO_PROPOSALS: &str = "No proposals registered";
pub const ERR_EMPTY_DESCRIPTION: &str = "Proposal description cannot be empty";
pub const ERR_TOO_MANY_PROPOSALS: &str = "Proposal limit reached";
pub const ERR_VOTE_COUNT_OVERFLOW: &str = "Vote count overflow";
pub const ERR_VOTE_COUNT_UNDERFLOW: &str = "Vote count underflow";

// ── Configuration ──

pub const ERR_INVALID_CONFIG: &str = "Maximum proposal count must be positive";
