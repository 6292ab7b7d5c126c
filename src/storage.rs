multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{
    ActiveProposalRef, AminalTraits, BreedingPhase, BreedingTicket, GeneProposal, SlotPosition, SlotTally,
    TraitChoice, TraitSlot, VetoPosition,
};

#[multiversx_sc::module]
pub trait StorageModule {
    // ========================================================
    // Shared guards
    // ========================================================

    fn require_ticket(&self, ticket_id: u64) -> BreedingTicket<Self::Api> {
        require!(!self.tickets(ticket_id).is_empty(), ERR_TICKET_NOT_FOUND);
        self.tickets(ticket_id).get()
    }

    fn current_phase(&self, ticket: &BreedingTicket<Self::Api>) -> BreedingPhase {
        ticket.phase(self.blockchain().get_block_timestamp())
    }

    fn require_phase(&self, ticket: &BreedingTicket<Self::Api>, required: BreedingPhase) {
        let actual = self.current_phase(ticket);
        if actual != required {
            let actual_name: ManagedBuffer = actual.name().into();
            let required_name: ManagedBuffer = required.name().into();
            sc_panic!(
                "Wrong phase: current {}, required {}",
                actual_name,
                required_name
            );
        }
    }

    fn slot_tally(&self, ticket_id: u64, slot: TraitSlot) -> SlotTally<Self::Api> {
        let mapper = self.trait_votes(ticket_id, slot);
        if mapper.is_empty() {
            SlotTally::default()
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("offspringFactory")]
    fn offspring_factory(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("geneProposalDuration")]
    fn gene_proposal_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votingDuration")]
    fn voting_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("minGeneProposalLove")]
    fn min_gene_proposal_love(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("initiators")]
    fn initiators(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("approvedGeneContracts")]
    fn approved_gene_contracts(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Tickets ──

    #[storage_mapper("ticketCount")]
    fn ticket_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("tickets")]
    fn tickets(&self, id: u64) -> SingleValueMapper<BreedingTicket<Self::Api>>;

    #[storage_mapper("childTraits")]
    fn child_traits(&self, ticket_id: u64) -> SingleValueMapper<AminalTraits<Self::Api>>;

    #[storage_mapper("childPositions")]
    fn child_positions(&self, ticket_id: u64) -> SingleValueMapper<ManagedVec<Self::Api, SlotPosition>>;

    // ── Gene proposals ──

    #[storage_mapper("geneProposals")]
    fn gene_proposals(
        &self,
        ticket_id: u64,
        slot: TraitSlot,
    ) -> VecMapper<GeneProposal<Self::Api>>;

    #[storage_mapper("activeGeneProposal")]
    fn active_gene_proposal(
        &self,
        ticket_id: u64,
        proposer: &ManagedAddress,
    ) -> SingleValueMapper<ActiveProposalRef>;

    #[storage_mapper("geneVotes")]
    fn gene_votes(&self, ticket_id: u64, slot: TraitSlot, index: usize) -> SingleValueMapper<BigUint>;

    #[storage_mapper("hasVotedForGene")]
    fn has_voted_for_gene(
        &self,
        ticket_id: u64,
        slot: TraitSlot,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<bool>;

    // ── Trait votes ──

    #[storage_mapper("traitVotes")]
    fn trait_votes(&self, ticket_id: u64, slot: TraitSlot) -> SingleValueMapper<SlotTally<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, ticket_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("voterPower")]
    fn voter_power(&self, ticket_id: u64, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("voterTraitChoices")]
    fn voter_trait_choices(&self, ticket_id: u64, voter: &ManagedAddress) -> VecMapper<TraitChoice>;

    // ── Veto ──

    #[storage_mapper("vetoPositions")]
    fn veto_positions(
        &self,
        ticket_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VetoPosition<Self::Api>>;
}
