multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Breeding Phase: derived from time and the executed flag
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BreedingPhase {
    /// Community members may submit gene proposals.
    GeneProposal,
    /// Trait, gene and veto votes are accepted.
    Voting,
    /// Voting closed. Anyone may execute the breeding once.
    Execution,
    /// Resolved (bred or vetoed). Terminal state.
    Completed,
}

impl BreedingPhase {
    /// Pure phase derivation. `executed` wins over the clock.
    pub fn at(
        now: u64,
        gene_proposal_deadline: u64,
        voting_deadline: u64,
        executed: bool,
    ) -> Self {
        if executed {
            BreedingPhase::Completed
        } else if now < gene_proposal_deadline {
            BreedingPhase::GeneProposal
        } else if now < voting_deadline {
            BreedingPhase::Voting
        } else {
            BreedingPhase::Execution
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BreedingPhase::GeneProposal => "GENE_PROPOSAL",
            BreedingPhase::Voting => "VOTING",
            BreedingPhase::Execution => "EXECUTION",
            BreedingPhase::Completed => "COMPLETED",
        }
    }
}

// ============================================================
// Trait Slot: the 8 independently inherited categories
// ============================================================

pub const TRAIT_SLOT_COUNT: usize = 8;

#[type_abi]
#[derive(
    TopEncode,
    TopDecode,
    NestedEncode,
    NestedDecode,
    ManagedVecItem,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
)]
pub enum TraitSlot {
    Back,
    Arm,
    Tail,
    Ears,
    Body,
    Face,
    Mouth,
    Misc,
}

impl TraitSlot {
    pub const ALL: [TraitSlot; TRAIT_SLOT_COUNT] = [
        TraitSlot::Back,
        TraitSlot::Arm,
        TraitSlot::Tail,
        TraitSlot::Ears,
        TraitSlot::Body,
        TraitSlot::Face,
        TraitSlot::Mouth,
        TraitSlot::Misc,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Maps the `u8` tag reported by gene contracts back to a slot.
    pub fn from_u8(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }
}

// ============================================================
// Aminal Traits: one value per slot
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AminalTraits<M: ManagedTypeApi> {
    pub back: ManagedBuffer<M>,
    pub arm: ManagedBuffer<M>,
    pub tail: ManagedBuffer<M>,
    pub ears: ManagedBuffer<M>,
    pub body: ManagedBuffer<M>,
    pub face: ManagedBuffer<M>,
    pub mouth: ManagedBuffer<M>,
    pub misc: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> AminalTraits<M> {
    pub fn get(&self, slot: TraitSlot) -> &ManagedBuffer<M> {
        match slot {
            TraitSlot::Back => &self.back,
            TraitSlot::Arm => &self.arm,
            TraitSlot::Tail => &self.tail,
            TraitSlot::Ears => &self.ears,
            TraitSlot::Body => &self.body,
            TraitSlot::Face => &self.face,
            TraitSlot::Mouth => &self.mouth,
            TraitSlot::Misc => &self.misc,
        }
    }

    pub fn set(&mut self, slot: TraitSlot, value: ManagedBuffer<M>) {
        match slot {
            TraitSlot::Back => self.back = value,
            TraitSlot::Arm => self.arm = value,
            TraitSlot::Tail => self.tail = value,
            TraitSlot::Ears => self.ears = value,
            TraitSlot::Body => self.body = value,
            TraitSlot::Face => self.face = value,
            TraitSlot::Mouth => self.mouth = value,
            TraitSlot::Misc => self.misc = value,
        }
    }
}

// ============================================================
// Render position overrides
// ============================================================

#[type_abi]
#[derive(
    TopEncode,
    TopDecode,
    NestedEncode,
    NestedDecode,
    ManagedVecItem,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
)]
pub struct PositionOverride {
    pub x: i64,
    pub y: i64,
    pub width: u64,
    pub height: u64,
}

/// Position handed to the factory for a slot won by a gene with an override.
#[type_abi]
#[derive(
    TopEncode,
    TopDecode,
    NestedEncode,
    NestedDecode,
    ManagedVecItem,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
)]
pub struct SlotPosition {
    pub slot: TraitSlot,
    pub position: PositionOverride,
}

// ============================================================
// Breeding Ticket: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BreedingTicket<M: ManagedTypeApi> {
    pub id: u64,
    pub parent_a: ManagedAddress<M>,
    pub parent_b: ManagedAddress<M>,
    pub child_description: ManagedBuffer<M>,
    pub child_token_uri: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub created_at: u64,
    pub gene_proposal_deadline: u64,
    pub voting_deadline: u64,
    pub executed: bool,
    /// Zero address until bred. Stays zero when vetoed.
    pub child_contract: ManagedAddress<M>,
    pub veto_votes: BigUint<M>,
    pub proceed_votes: BigUint<M>,
}

impl<M: ManagedTypeApi> BreedingTicket<M> {
    pub fn phase(&self, now: u64) -> BreedingPhase {
        BreedingPhase::at(
            now,
            self.gene_proposal_deadline,
            self.voting_deadline,
            self.executed,
        )
    }
}

// ============================================================
// Gene Proposal: append-only, cleared when replaced
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GeneProposal<M: ManagedTypeApi> {
    /// Zero address once the proposer replaced this proposal.
    pub proposer: ManagedAddress<M>,
    pub gene_contract: ManagedAddress<M>,
    pub gene_token_id: u64,
    pub position: Option<PositionOverride>,
    pub proposed_at: u64,
}

impl<M: ManagedTypeApi> GeneProposal<M> {
    pub fn is_live(&self) -> bool {
        !self.proposer.is_zero()
    }
}

/// Live proposal as returned by `getLiveGeneProposals`, with its tally.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GeneProposalInfo<M: ManagedTypeApi> {
    pub index: usize,
    pub proposal: GeneProposal<M>,
    pub votes: BigUint<M>,
}

/// Pointer from a proposer to their single live proposal on a ticket.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct ActiveProposalRef {
    pub slot: TraitSlot,
    pub index: usize,
}

// ============================================================
// Vote records
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct SlotTally<M: ManagedTypeApi> {
    pub parent_a_votes: BigUint<M>,
    pub parent_b_votes: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for SlotTally<M> {
    fn default() -> Self {
        SlotTally {
            parent_a_votes: BigUint::zero(),
            parent_b_votes: BigUint::zero(),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct TraitChoice {
    pub slot: TraitSlot,
    pub prefer_parent_a: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VetoPosition<M: ManagedTypeApi> {
    pub veto: bool,
    pub weight: BigUint<M>,
}
