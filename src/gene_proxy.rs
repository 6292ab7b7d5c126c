use multiversx_sc::proxy_imports::*;

/// Gene registry contract. Slots are reported as raw `u8` tags.
pub struct GeneProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GeneProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GeneProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GeneProxyMethods { wrapped_tx: tx }
    }
}

pub struct GeneProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> GeneProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_trait_slot<Arg0: ProxyArg<u64>>(
        self,
        token_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u8> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTraitSlot")
            .argument(&token_id)
            .original_result()
    }

    pub fn get_trait_value<Arg0: ProxyArg<u64>>(
        self,
        token_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTraitValue")
            .argument(&token_id)
            .original_result()
    }
}
