multiversx_sc::imports!();

use crate::errors::*;
use crate::gene_proxy;
use crate::types::{ActiveProposalRef, BreedingPhase, GeneProposal, PositionOverride, TraitSlot};

// ============================================================
// Gene proposal registry
// Append-only per (ticket, slot). A proposer keeps a single live
// proposal per ticket; older ones are cleared, never removed.
// ============================================================

#[multiversx_sc::module]
pub trait GeneProposalsModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::weight::WeightModule
{
    #[endpoint(proposeGene)]
    fn propose_gene(
        &self,
        ticket_id: u64,
        slot: TraitSlot,
        gene_contract: ManagedAddress,
        gene_token_id: u64,
        opt_position: OptionalValue<PositionOverride>,
    ) -> usize {
        let caller = self.blockchain().get_caller();
        let ticket = self.require_ticket(ticket_id);
        self.require_phase(&ticket, BreedingPhase::GeneProposal);

        require!(
            self.approved_gene_contracts().contains(&gene_contract),
            ERR_GENE_CONTRACT_NOT_APPROVED
        );

        // Gate only: nothing is debited.
        let love = self.combined_love(&ticket, &caller);
        require!(
            love >= self.min_gene_proposal_love().get(),
            ERR_INSUFFICIENT_LOVE_TO_PROPOSE
        );

        let gene_slot = self.gene_trait_slot(&gene_contract, gene_token_id);
        require!(gene_slot == slot, ERR_TRAIT_SLOT_MISMATCH);

        let active_mapper = self.active_gene_proposal(ticket_id, &caller);
        if !active_mapper.is_empty() {
            let previous = active_mapper.get();
            self.clear_proposer(ticket_id, &previous);
            self.gene_replaced_event(ticket_id, previous.slot, previous.index, &caller);
        }

        let proposal = GeneProposal {
            proposer: caller.clone(),
            gene_contract,
            gene_token_id,
            position: opt_position.into_option(),
            proposed_at: self.blockchain().get_block_timestamp(),
        };
        let index = self.gene_proposals(ticket_id, slot).push(&proposal);
        active_mapper.set(ActiveProposalRef { slot, index });

        self.gene_proposed_event(ticket_id, slot, index, &caller);

        index
    }

    /// The tally of a cleared proposal stays in storage but can no longer grow or win.
    fn clear_proposer(&self, ticket_id: u64, target: &ActiveProposalRef) {
        let mut proposals = self.gene_proposals(ticket_id, target.slot);
        let mut proposal = proposals.get(target.index);
        proposal.proposer = ManagedAddress::zero();
        proposals.set(target.index, &proposal);
    }

    fn require_live_proposal(
        &self,
        ticket_id: u64,
        slot: TraitSlot,
        index: usize,
    ) -> GeneProposal<Self::Api> {
        let proposals = self.gene_proposals(ticket_id, slot);
        require!(
            index >= 1 && index <= proposals.len(),
            ERR_INVALID_PROPOSAL_INDEX
        );
        let proposal = proposals.get(index);
        require!(proposal.is_live(), ERR_PROPOSAL_REPLACED);
        proposal
    }

    fn gene_trait_slot(&self, gene_contract: &ManagedAddress, token_id: u64) -> TraitSlot {
        let tag: u8 = self
            .tx()
            .to(gene_contract)
            .typed(gene_proxy::GeneProxy)
            .get_trait_slot(token_id)
            .returns(ReturnsResult)
            .sync_call();
        match TraitSlot::from_u8(tag) {
            Some(slot) => slot,
            None => sc_panic!(ERR_INVALID_TRAIT_SLOT),
        }
    }

    fn gene_trait_value(&self, gene_contract: &ManagedAddress, token_id: u64) -> ManagedBuffer {
        self.tx()
            .to(gene_contract)
            .typed(gene_proxy::GeneProxy)
            .get_trait_value(token_id)
            .returns(ReturnsResult)
            .sync_call()
    }
}
