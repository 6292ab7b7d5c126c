#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod offspring_factory_mock_proxy;

/// Encodes exactly like the breeding contract's `AminalTraits`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct MockTraits<M: ManagedTypeApi> {
    pub back: ManagedBuffer<M>,
    pub arm: ManagedBuffer<M>,
    pub tail: ManagedBuffer<M>,
    pub ears: ManagedBuffer<M>,
    pub body: ManagedBuffer<M>,
    pub face: ManagedBuffer<M>,
    pub mouth: ManagedBuffer<M>,
    pub misc: ManagedBuffer<M>,
}

/// Encodes exactly like the breeding contract's `SlotPosition`.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct MockSlotPosition {
    pub slot: u8,
    pub x: i64,
    pub y: i64,
    pub width: u64,
    pub height: u64,
}

/// Records every creation request and answers with a preset child address.
#[multiversx_sc::contract]
pub trait OffspringFactoryMock {
    #[init]
    fn init(&self) {}

    #[endpoint(setChildAddress)]
    fn set_child_address(&self, child: ManagedAddress) {
        self.child_address().set(&child);
    }

    #[allow(clippy::too_many_arguments)]
    #[endpoint(createAminalWithTraits)]
    fn create_aminal_with_traits(
        &self,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        description: ManagedBuffer,
        token_uri: ManagedBuffer,
        traits: MockTraits<Self::Api>,
        positions: ManagedVec<Self::Api, MockSlotPosition>,
        parent_a: ManagedAddress,
        parent_b: ManagedAddress,
    ) -> ManagedAddress {
        self.created_count().update(|count| *count += 1);
        self.last_name().set(&name);
        self.last_symbol().set(&symbol);
        self.last_description().set(&description);
        self.last_token_uri().set(&token_uri);
        self.last_traits().set(&traits);
        self.last_positions().set(&positions);
        self.last_parent_a().set(&parent_a);
        self.last_parent_b().set(&parent_b);
        self.child_address().get()
    }

    #[storage_mapper("childAddress")]
    fn child_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCreatedCount)]
    #[storage_mapper("createdCount")]
    fn created_count(&self) -> SingleValueMapper<u64>;

    #[view(getLastName)]
    #[storage_mapper("lastName")]
    fn last_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getLastSymbol)]
    #[storage_mapper("lastSymbol")]
    fn last_symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getLastDescription)]
    #[storage_mapper("lastDescription")]
    fn last_description(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getLastTokenUri)]
    #[storage_mapper("lastTokenUri")]
    fn last_token_uri(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getLastTraits)]
    #[storage_mapper("lastTraits")]
    fn last_traits(&self) -> SingleValueMapper<MockTraits<Self::Api>>;

    #[view(getLastPositions)]
    #[storage_mapper("lastPositions")]
    fn last_positions(&self) -> SingleValueMapper<ManagedVec<Self::Api, MockSlotPosition>>;

    #[view(getLastParentA)]
    #[storage_mapper("lastParentA")]
    fn last_parent_a(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLastParentB)]
    #[storage_mapper("lastParentB")]
    fn last_parent_b(&self) -> SingleValueMapper<ManagedAddress>;
}
