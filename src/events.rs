multiversx_sc::imports!();

use crate::types::TraitSlot;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("ticketCreated")]
    fn ticket_created_event(
        &self,
        #[indexed] ticket_id: u64,
        #[indexed] parent_a: &ManagedAddress,
        #[indexed] parent_b: &ManagedAddress,
        #[indexed] creator: &ManagedAddress,
        voting_deadline: u64,
    );

    #[event("geneProposed")]
    fn gene_proposed_event(
        &self,
        #[indexed] ticket_id: u64,
        #[indexed] slot: TraitSlot,
        #[indexed] index: usize,
        proposer: &ManagedAddress,
    );

    #[event("geneReplaced")]
    fn gene_replaced_event(
        &self,
        #[indexed] ticket_id: u64,
        #[indexed] slot: TraitSlot,
        #[indexed] index: usize,
        proposer: &ManagedAddress,
    );

    #[event("traitVote")]
    fn trait_vote_event(
        &self,
        #[indexed] ticket_id: u64,
        #[indexed] voter: &ManagedAddress,
        power: &BigUint,
    );

    #[event("geneVote")]
    fn gene_vote_event(
        &self,
        #[indexed] ticket_id: u64,
        #[indexed] slot: TraitSlot,
        #[indexed] index: usize,
        #[indexed] voter: &ManagedAddress,
        power: &BigUint,
    );

    #[event("vetoVote")]
    fn veto_vote_event(
        &self,
        #[indexed] ticket_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] veto: bool,
        weight: &BigUint,
    );

    /// `child` is the zero address when the breeding was vetoed.
    #[event("breedingExecuted")]
    fn breeding_executed_event(
        &self,
        #[indexed] ticket_id: u64,
        #[indexed] vetoed: bool,
        child: &ManagedAddress,
    );
}
