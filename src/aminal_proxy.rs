use multiversx_sc::proxy_imports::*;

use crate::types::AminalTraits;

/// Parent Aminal contract: love ledger (Resource Oracle) and identity.
pub struct AminalProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AminalProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AminalProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AminalProxyMethods { wrapped_tx: tx }
    }
}

pub struct AminalProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> AminalProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn love_from_user<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        user: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("loveFromUser")
            .argument(&user)
            .original_result()
    }

    pub fn get_name(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getName")
            .original_result()
    }

    pub fn get_symbol(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSymbol")
            .original_result()
    }

    pub fn get_traits(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AminalTraits<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTraits")
            .original_result()
    }
}
