use multiversx_sc::proxy_imports::*;

use crate::types::{AminalTraits, SlotPosition};

pub struct OffspringFactoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for OffspringFactoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = OffspringFactoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        OffspringFactoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct OffspringFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> OffspringFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn create_aminal_with_traits<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<AminalTraits<Env::Api>>,
        Arg5: ProxyArg<ManagedVec<Env::Api, SlotPosition>>,
        Arg6: ProxyArg<ManagedAddress<Env::Api>>,
        Arg7: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        name: Arg0,
        symbol: Arg1,
        description: Arg2,
        token_uri: Arg3,
        traits: Arg4,
        positions: Arg5,
        parent_a: Arg6,
        parent_b: Arg7,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createAminalWithTraits")
            .argument(&name)
            .argument(&symbol)
            .argument(&description)
            .argument(&token_uri)
            .argument(&traits)
            .argument(&positions)
            .argument(&parent_a)
            .argument(&parent_b)
            .original_result()
    }
}
