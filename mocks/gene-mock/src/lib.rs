#![no_std]

multiversx_sc::imports!();

pub mod gene_mock_proxy;

/// Stand-in gene registry: each token carries a slot tag and a trait value.
#[multiversx_sc::contract]
pub trait GeneMock {
    #[init]
    fn init(&self) {}

    #[endpoint(setGene)]
    fn set_gene(&self, token_id: u64, slot: u8, value: ManagedBuffer) {
        self.trait_slot(token_id).set(slot);
        self.trait_value(token_id).set(&value);
    }

    #[view(getTraitSlot)]
    #[storage_mapper("traitSlot")]
    fn trait_slot(&self, token_id: u64) -> SingleValueMapper<u8>;

    #[view(getTraitValue)]
    #[storage_mapper("traitValue")]
    fn trait_value(&self, token_id: u64) -> SingleValueMapper<ManagedBuffer>;
}
