multiversx_sc::imports!();

use crate::aminal_proxy;
use crate::errors::*;
use crate::types::BreedingTicket;

/// Reads voting weight from the parents' love ledgers.
#[multiversx_sc::module]
pub trait WeightModule: crate::storage::StorageModule {
    fn love_in(&self, aminal: &ManagedAddress, user: &ManagedAddress) -> BigUint {
        self.tx()
            .to(aminal)
            .typed(aminal_proxy::AminalProxy)
            .love_from_user(user)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Love in parent A plus love in parent B, read live.
    fn combined_love(&self, ticket: &BreedingTicket<Self::Api>, user: &ManagedAddress) -> BigUint {
        self.love_in(&ticket.parent_a, user) + self.love_in(&ticket.parent_b, user)
    }

    /// Power used for trait and gene votes. Captured on the voter's first
    /// such vote and reused for the rest of the ticket.
    fn locked_voting_power(
        &self,
        ticket: &BreedingTicket<Self::Api>,
        voter: &ManagedAddress,
    ) -> BigUint {
        let power_mapper = self.voter_power(ticket.id, voter);
        if !power_mapper.is_empty() {
            return power_mapper.get();
        }

        let power = self.combined_love(ticket, voter);
        require!(power > 0u64, ERR_INSUFFICIENT_WEIGHT);
        power_mapper.set(&power);
        power
    }
}
