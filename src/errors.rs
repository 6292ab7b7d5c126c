// Input validation
pub const ERR_TICKET_NOT_FOUND: &str = "Breeding ticket does not exist";
pub const ERR_IDENTICAL_PARENTS: &str = "Cannot breed an Aminal with itself";
pub const ERR_SELF_BREEDING: &str = "Breeding contract cannot be a parent";
pub const ERR_INVALID_PARENT: &str = "Parent must be a deployed Aminal contract";
pub const ERR_INVALID_DURATION: &str = "Durations must be greater than zero";
pub const ERR_INVALID_PROPOSAL_INDEX: &str = "Gene proposal does not exist";
pub const ERR_INVALID_TRAIT_SLOT: &str = "Gene reports an unknown trait slot";

// Eligibility
pub const ERR_NOT_INITIATOR: &str = "Only authorized initiators can open tickets";
pub const ERR_GENE_CONTRACT_NOT_APPROVED: &str = "Gene contract is not approved";
pub const ERR_INSUFFICIENT_LOVE_TO_PROPOSE: &str = "Insufficient love to propose a gene";
pub const ERR_TRAIT_SLOT_MISMATCH: &str = "Gene trait slot does not match";
pub const ERR_INSUFFICIENT_WEIGHT: &str = "Insufficient voting weight";
pub const ERR_ALREADY_VOTED: &str = "Already voted on this ticket";
pub const ERR_ALREADY_VOTED_FOR_GENE: &str = "Already voted for a gene in this slot";
pub const ERR_EMPTY_VOTE: &str = "No trait choices given";
pub const ERR_DUPLICATE_SLOT: &str = "Trait slot voted more than once";

// Replaced target
pub const ERR_PROPOSAL_REPLACED: &str = "Gene proposal has been replaced";

// Double execution
pub const ERR_ALREADY_EXECUTED: &str = "Breeding already executed";
