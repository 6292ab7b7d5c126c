#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod aminal_mock_proxy;

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

/// Stand-in parent Aminal: a settable love ledger plus name, symbol and traits.
#[multiversx_sc::contract]
pub trait AminalMock {
    #[init]
    fn init(&self) {}

    #[endpoint(setIdentity)]
    fn set_identity(&self, name: ManagedBuffer, symbol: ManagedBuffer) {
        self.name().set(&name);
        self.symbol().set(&symbol);
    }

    #[endpoint(setTraits)]
    fn set_traits(&self, traits: MockTraits<Self::Api>) {
        self.traits().set(&traits);
    }

    #[endpoint(setLove)]
    fn set_love(&self, user: ManagedAddress, amount: BigUint) {
        self.love(&user).set(&amount);
    }

    #[view(loveFromUser)]
    fn love_from_user(&self, user: ManagedAddress) -> BigUint {
        self.love(&user).get()
    }

    #[view(getName)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getSymbol)]
    #[storage_mapper("symbol")]
    fn symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getTraits)]
    #[storage_mapper("traits")]
    fn traits(&self) -> SingleValueMapper<MockTraits<Self::Api>>;

    #[storage_mapper("love")]
    fn love(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
