#![no_std]

multiversx_sc::imports!();

pub mod aminal_breeding_proxy;
pub mod aminal_proxy;
pub mod errors;
pub mod events;
pub mod gene_proposals;
pub mod gene_proxy;
pub mod offspring_factory_proxy;
pub mod resolution;
pub mod storage;
pub mod types;
pub mod views;
pub mod voting;
pub mod weight;

use errors::*;
use resolution::SlotOutcome;
use types::{AminalTraits, BreedingPhase, BreedingTicket, SlotPosition, TraitSlot};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait AminalBreeding:
    storage::StorageModule
    + events::EventsModule
    + weight::WeightModule
    + gene_proposals::GeneProposalsModule
    + voting::VotingModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        offspring_factory: ManagedAddress,
        gene_proposal_duration: u64,
        voting_duration: u64,
        min_gene_proposal_love: BigUint,
    ) {
        self.offspring_factory().set(&offspring_factory);
        self.set_durations_internal(gene_proposal_duration, voting_duration);
        self.min_gene_proposal_love().set(&min_gene_proposal_love);
        self.ticket_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // OWNER: configuration
    // ========================================================

    #[only_owner]
    #[endpoint(setOffspringFactory)]
    fn set_offspring_factory(&self, offspring_factory: ManagedAddress) {
        self.offspring_factory().set(&offspring_factory);
    }

    /// Applies to tickets opened afterwards. Open tickets keep their deadlines.
    #[only_owner]
    #[endpoint(setDurations)]
    fn set_durations(&self, gene_proposal_duration: u64, voting_duration: u64) {
        self.set_durations_internal(gene_proposal_duration, voting_duration);
    }

    #[only_owner]
    #[endpoint(setMinGeneProposalLove)]
    fn set_min_gene_proposal_love(&self, min_gene_proposal_love: BigUint) {
        self.min_gene_proposal_love().set(&min_gene_proposal_love);
    }

    #[only_owner]
    #[endpoint(addInitiator)]
    fn add_initiator(&self, initiator: ManagedAddress) {
        self.initiators().insert(initiator);
    }

    #[only_owner]
    #[endpoint(removeInitiator)]
    fn remove_initiator(&self, initiator: ManagedAddress) {
        self.initiators().swap_remove(&initiator);
    }

    #[only_owner]
    #[endpoint(approveGeneContract)]
    fn approve_gene_contract(&self, gene_contract: ManagedAddress) {
        self.approved_gene_contracts().insert(gene_contract);
    }

    #[only_owner]
    #[endpoint(revokeGeneContract)]
    fn revoke_gene_contract(&self, gene_contract: ManagedAddress) {
        self.approved_gene_contracts().swap_remove(&gene_contract);
    }

    fn set_durations_internal(&self, gene_proposal_duration: u64, voting_duration: u64) {
        require!(
            gene_proposal_duration > 0 && voting_duration > 0,
            ERR_INVALID_DURATION
        );
        self.gene_proposal_duration().set(gene_proposal_duration);
        self.voting_duration().set(voting_duration);
    }

    // ========================================================
    // ENDPOINT: createBreedingTicket
    // Opened by the breeding skill once both Aminals agreed.
    // ========================================================

    #[endpoint(createBreedingTicket)]
    fn create_breeding_ticket(
        &self,
        parent_a: ManagedAddress,
        parent_b: ManagedAddress,
        child_description: ManagedBuffer,
        child_token_uri: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(self.initiators().contains(&caller), ERR_NOT_INITIATOR);

        require!(parent_a != parent_b, ERR_IDENTICAL_PARENTS);
        let own_address = self.blockchain().get_sc_address();
        require!(
            parent_a != own_address && parent_b != own_address,
            ERR_SELF_BREEDING
        );
        for parent in [&parent_a, &parent_b] {
            require!(
                !parent.is_zero() && self.blockchain().is_smart_contract(parent),
                ERR_INVALID_PARENT
            );
        }

        let ticket_id = self.ticket_count().get() + 1u64;
        let now = self.blockchain().get_block_timestamp();
        let gene_proposal_deadline = now + self.gene_proposal_duration().get();
        let voting_deadline = gene_proposal_deadline + self.voting_duration().get();

        let ticket = BreedingTicket {
            id: ticket_id,
            parent_a,
            parent_b,
            child_description,
            child_token_uri,
            creator: caller,
            created_at: now,
            gene_proposal_deadline,
            voting_deadline,
            executed: false,
            child_contract: ManagedAddress::zero(),
            veto_votes: BigUint::zero(),
            proceed_votes: BigUint::zero(),
        };

        self.tickets(ticket_id).set(&ticket);
        self.ticket_count().set(ticket_id);

        self.ticket_created_event(
            ticket_id,
            &ticket.parent_a,
            &ticket.parent_b,
            &ticket.creator,
            voting_deadline,
        );

        ticket_id
    }

    // ========================================================
    // ENDPOINT: executeBreeding
    // Anyone, once, after voting closes. Veto first, then each
    // slot on its own, then a single factory call.
    // ========================================================

    #[endpoint(executeBreeding)]
    fn execute_breeding(&self, ticket_id: u64) -> ManagedAddress {
        let mut ticket = self.require_ticket(ticket_id);
        require!(!ticket.executed, ERR_ALREADY_EXECUTED);
        self.require_phase(&ticket, BreedingPhase::Execution);

        if resolution::veto_prevails(&ticket.veto_votes, &ticket.proceed_votes) {
            ticket.executed = true;
            ticket.child_contract = ManagedAddress::zero();
            self.tickets(ticket_id).set(&ticket);
            self.breeding_executed_event(ticket_id, true, &ticket.child_contract);
            return ticket.child_contract;
        }

        let (child_traits, positions) = self.resolve_child_traits(&ticket);

        let parent_a_name = self.aminal_name(&ticket.parent_a);
        let parent_b_name = self.aminal_name(&ticket.parent_b);
        let name = resolution::child_name(&parent_a_name, &parent_b_name);
        let symbol = resolution::child_symbol(
            &self.aminal_symbol(&ticket.parent_a),
            &self.aminal_symbol(&ticket.parent_b),
        );

        // Marked before the external call; a failed call reverts everything.
        ticket.executed = true;
        self.tickets(ticket_id).set(&ticket);

        let child: ManagedAddress = self
            .tx()
            .to(self.offspring_factory().get())
            .typed(offspring_factory_proxy::OffspringFactoryProxy)
            .create_aminal_with_traits(
                name,
                symbol,
                ticket.child_description.clone(),
                ticket.child_token_uri.clone(),
                child_traits.clone(),
                positions.clone(),
                ticket.parent_a.clone(),
                ticket.parent_b.clone(),
            )
            .returns(ReturnsResult)
            .sync_call();

        ticket.child_contract = child.clone();
        self.tickets(ticket_id).set(&ticket);
        self.child_traits(ticket_id).set(&child_traits);
        self.child_positions(ticket_id).set(&positions);

        self.breeding_executed_event(ticket_id, false, &child);

        child
    }

    /// Reads parent traits and winning gene values, then decides every slot.
    fn resolve_child_traits(
        &self,
        ticket: &BreedingTicket<Self::Api>,
    ) -> (AminalTraits<Self::Api>, ManagedVec<Self::Api, SlotPosition>) {
        let parent_a_traits = self.aminal_traits(&ticket.parent_a);
        let parent_b_traits = self.aminal_traits(&ticket.parent_b);

        let mut child_traits = parent_a_traits.clone();
        let mut positions = ManagedVec::new();

        for slot in TraitSlot::ALL {
            let tally = self.slot_tally(ticket.id, slot);
            let leader = self.leading_live_gene(ticket.id, slot);

            match resolution::resolve_slot(&tally, leader) {
                SlotOutcome::Gene(index) => {
                    let proposal = self.gene_proposals(ticket.id, slot).get(index);
                    let value =
                        self.gene_trait_value(&proposal.gene_contract, proposal.gene_token_id);
                    child_traits.set(slot, value);
                    if let Some(position) = proposal.position {
                        positions.push(SlotPosition { slot, position });
                    }
                },
                SlotOutcome::ParentA => {
                    child_traits.set(slot, parent_a_traits.get(slot).clone());
                },
                SlotOutcome::ParentB => {
                    child_traits.set(slot, parent_b_traits.get(slot).clone());
                },
            }
        }

        (child_traits, positions)
    }

    /// Replaced proposals are skipped, whatever their tally.
    fn leading_live_gene(&self, ticket_id: u64, slot: TraitSlot) -> Option<(usize, BigUint<Self::Api>)> {
        let proposals = self.gene_proposals(ticket_id, slot);
        let candidates = (1..=proposals.len())
            .filter(|index| proposals.get(*index).is_live())
            .map(|index| (index, self.gene_votes(ticket_id, slot, index).get()));
        resolution::leading_gene(candidates)
    }

    fn aminal_traits(&self, aminal: &ManagedAddress) -> AminalTraits<Self::Api> {
        self.tx()
            .to(aminal)
            .typed(aminal_proxy::AminalProxy)
            .get_traits()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn aminal_name(&self, aminal: &ManagedAddress) -> ManagedBuffer {
        self.tx()
            .to(aminal)
            .typed(aminal_proxy::AminalProxy)
            .get_name()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn aminal_symbol(&self, aminal: &ManagedAddress) -> ManagedBuffer {
        self.tx()
            .to(aminal)
            .typed(aminal_proxy::AminalProxy)
            .get_symbol()
            .returns(ReturnsResult)
            .sync_call()
    }
}
