multiversx_sc::imports!();

use crate::resolution;
use crate::types::{
    ActiveProposalRef, AminalTraits, BreedingPhase, BreedingTicket, GeneProposal,
    GeneProposalInfo, SlotPosition, TraitChoice, TraitSlot, VetoPosition,
};

// ============================================================
// VIEWS: read-only queries
// ============================================================

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + crate::weight::WeightModule
{
    #[view(getTicket)]
    fn get_ticket(&self, ticket_id: u64) -> BreedingTicket<Self::Api> {
        self.require_ticket(ticket_id)
    }

    #[view(getTicketCount)]
    fn get_ticket_count(&self) -> u64 {
        self.ticket_count().get()
    }

    #[view(getTickets)]
    fn get_tickets(&self, from: u64, count: u64) -> MultiValueEncoded<BreedingTicket<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.ticket_count().get();
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if !self.tickets(id).is_empty() {
                result.push(self.tickets(id).get());
            }
        }
        result
    }

    #[view(getPhase)]
    fn get_phase(&self, ticket_id: u64) -> BreedingPhase {
        let ticket = self.require_ticket(ticket_id);
        self.current_phase(&ticket)
    }

    /// Parent A votes, parent B votes.
    #[view(getTraitVotes)]
    fn get_trait_votes(&self, ticket_id: u64, slot: TraitSlot) -> MultiValue2<BigUint, BigUint> {
        let tally = self.slot_tally(ticket_id, slot);
        (tally.parent_a_votes, tally.parent_b_votes).into()
    }

    #[view(getGeneVotes)]
    fn get_gene_votes(&self, ticket_id: u64, slot: TraitSlot, index: usize) -> BigUint {
        self.gene_votes(ticket_id, slot, index).get()
    }

    /// Includes replaced proposals; their proposer is the zero address.
    #[view(getGeneProposal)]
    fn get_gene_proposal(
        &self,
        ticket_id: u64,
        slot: TraitSlot,
        index: usize,
    ) -> OptionalValue<GeneProposal<Self::Api>> {
        let proposals = self.gene_proposals(ticket_id, slot);
        if index == 0 || index > proposals.len() {
            return OptionalValue::None;
        }
        OptionalValue::Some(proposals.get(index))
    }

    #[view(getGeneProposalCount)]
    fn get_gene_proposal_count(&self, ticket_id: u64, slot: TraitSlot) -> usize {
        self.gene_proposals(ticket_id, slot).len()
    }

    #[view(getLiveGeneProposals)]
    fn get_live_gene_proposals(
        &self,
        ticket_id: u64,
        slot: TraitSlot,
    ) -> MultiValueEncoded<GeneProposalInfo<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let proposals = self.gene_proposals(ticket_id, slot);
        for index in 1..=proposals.len() {
            let proposal = proposals.get(index);
            if !proposal.is_live() {
                continue;
            }
            result.push(GeneProposalInfo {
                index,
                proposal,
                votes: self.gene_votes(ticket_id, slot, index).get(),
            });
        }
        result
    }

    #[view(getActiveGeneProposal)]
    fn get_active_gene_proposal(
        &self,
        ticket_id: u64,
        proposer: &ManagedAddress,
    ) -> OptionalValue<ActiveProposalRef> {
        let mapper = self.active_gene_proposal(ticket_id, proposer);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(hasVoted)]
    fn has_voter_voted(&self, ticket_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(ticket_id, voter).get()
    }

    #[view(getVoterTraitChoices)]
    fn get_voter_trait_choices(
        &self,
        ticket_id: u64,
        voter: &ManagedAddress,
    ) -> MultiValueEncoded<TraitChoice> {
        let mut result = MultiValueEncoded::new();
        for choice in self.voter_trait_choices(ticket_id, voter).iter() {
            result.push(choice);
        }
        result
    }

    #[view(getVetoPosition)]
    fn get_veto_position(
        &self,
        ticket_id: u64,
        voter: &ManagedAddress,
    ) -> OptionalValue<VetoPosition<Self::Api>> {
        let mapper = self.veto_positions(ticket_id, voter);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    /// Veto votes, proceed votes.
    #[view(getVetoTally)]
    fn get_veto_tally(&self, ticket_id: u64) -> MultiValue2<BigUint, BigUint> {
        let ticket = self.require_ticket(ticket_id);
        (ticket.veto_votes, ticket.proceed_votes).into()
    }

    #[view(wouldBeVetoed)]
    fn would_be_vetoed(&self, ticket_id: u64) -> bool {
        let ticket = self.require_ticket(ticket_id);
        resolution::veto_prevails(&ticket.veto_votes, &ticket.proceed_votes)
    }

    /// Whether `user` may still cast a trait vote, and the weight it would
    /// carry: the locked power if already captured, otherwise live love.
    #[view(getVotingPower)]
    fn get_voting_power(&self, ticket_id: u64, user: &ManagedAddress) -> MultiValue2<bool, BigUint> {
        let ticket = self.require_ticket(ticket_id);
        let power_mapper = self.voter_power(ticket_id, user);
        let power = if power_mapper.is_empty() {
            self.combined_love(&ticket, user)
        } else {
            power_mapper.get()
        };

        let can_vote = self.current_phase(&ticket) == BreedingPhase::Voting
            && !self.has_voted(ticket_id, user).get()
            && power > 0u64;
        (can_vote, power).into()
    }

    #[view(getChildTraits)]
    fn get_child_traits(&self, ticket_id: u64) -> OptionalValue<AminalTraits<Self::Api>> {
        let mapper = self.child_traits(ticket_id);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getChildPositions)]
    fn get_child_positions(&self, ticket_id: u64) -> MultiValueEncoded<SlotPosition> {
        let mut result = MultiValueEncoded::new();
        for position in self.child_positions(ticket_id).get().iter() {
            result.push(position);
        }
        result
    }

    #[view(isInitiator)]
    fn is_initiator(&self, address: &ManagedAddress) -> bool {
        self.initiators().contains(address)
    }

    #[view(isGeneContractApproved)]
    fn is_gene_contract_approved(&self, gene_contract: &ManagedAddress) -> bool {
        self.approved_gene_contracts().contains(gene_contract)
    }

    /// Factory, gene proposal duration, voting duration, minimum love to propose.
    #[view(getBreedingConfig)]
    fn get_breeding_config(&self) -> MultiValue4<ManagedAddress, u64, u64, BigUint> {
        (
            self.offspring_factory().get(),
            self.gene_proposal_duration().get(),
            self.voting_duration().get(),
            self.min_gene_proposal_love().get(),
        )
            .into()
    }
}
