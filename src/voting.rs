multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{BreedingPhase, TraitChoice, TraitSlot, VetoPosition};

#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::weight::WeightModule
    + crate::gene_proposals::GeneProposalsModule
{
    // ========================================================
    // ENDPOINT: vote
    // One trait ballot per voter per ticket. Slots not named are
    // left to other voters and the parent A default.
    // ========================================================

    #[endpoint(vote)]
    fn vote(
        &self,
        ticket_id: u64,
        choices: MultiValueEncoded<MultiValue2<TraitSlot, bool>>,
    ) {
        let caller = self.blockchain().get_caller();
        let ticket = self.require_ticket(ticket_id);
        self.require_phase(&ticket, BreedingPhase::Voting);

        require!(!choices.is_empty(), ERR_EMPTY_VOTE);
        require!(!self.has_voted(ticket_id, &caller).get(), ERR_ALREADY_VOTED);

        let power = self.locked_voting_power(&ticket, &caller);

        let mut seen_slots = 0u8;
        let mut choice_records = self.voter_trait_choices(ticket_id, &caller);
        for choice in choices.into_iter() {
            let (slot, prefer_parent_a) = choice.into_tuple();
            let slot_bit = 1u8 << slot.index();
            require!(seen_slots & slot_bit == 0, ERR_DUPLICATE_SLOT);
            seen_slots |= slot_bit;

            let mut tally = self.slot_tally(ticket_id, slot);
            if prefer_parent_a {
                tally.parent_a_votes += &power;
            } else {
                tally.parent_b_votes += &power;
            }
            self.trait_votes(ticket_id, slot).set(&tally);
            choice_records.push(&TraitChoice {
                slot,
                prefer_parent_a,
            });
        }

        self.has_voted(ticket_id, &caller).set(true);
        self.trait_vote_event(ticket_id, &caller, &power);
    }

    // ========================================================
    // ENDPOINT: voteForGene
    // ========================================================

    #[endpoint(voteForGene)]
    fn vote_for_gene(&self, ticket_id: u64, slot: TraitSlot, index: usize) {
        let caller = self.blockchain().get_caller();
        let ticket = self.require_ticket(ticket_id);
        self.require_phase(&ticket, BreedingPhase::Voting);

        self.require_live_proposal(ticket_id, slot, index);
        require!(
            !self.has_voted_for_gene(ticket_id, slot, &caller).get(),
            ERR_ALREADY_VOTED_FOR_GENE
        );

        let power = self.locked_voting_power(&ticket, &caller);
        self.gene_votes(ticket_id, slot, index)
            .update(|votes| *votes += &power);
        self.has_voted_for_gene(ticket_id, slot, &caller).set(true);

        self.gene_vote_event(ticket_id, slot, index, &caller, &power);
    }

    // ========================================================
    // ENDPOINT: voteOnVeto
    // A standing position: each call moves the voter's fresh
    // weight to the chosen bucket.
    // ========================================================

    #[endpoint(voteOnVeto)]
    fn vote_on_veto(&self, ticket_id: u64, veto: bool) {
        let caller = self.blockchain().get_caller();
        let mut ticket = self.require_ticket(ticket_id);
        self.require_phase(&ticket, BreedingPhase::Voting);

        let position_mapper = self.veto_positions(ticket_id, &caller);
        let had_position = !position_mapper.is_empty();
        if had_position {
            let previous = position_mapper.get();
            if previous.veto {
                ticket.veto_votes -= &previous.weight;
            } else {
                ticket.proceed_votes -= &previous.weight;
            }
        }

        let weight = self.combined_love(&ticket, &caller);
        require!(had_position || weight > 0u64, ERR_INSUFFICIENT_WEIGHT);

        if veto {
            ticket.veto_votes += &weight;
        } else {
            ticket.proceed_votes += &weight;
        }

        self.tickets(ticket_id).set(&ticket);
        position_mapper.set(VetoPosition {
            veto,
            weight: weight.clone(),
        });

        self.veto_vote_event(ticket_id, &caller, veto, &weight);
    }
}
