multiversx_sc::imports!();

use crate::types::SlotTally;

/// Bytes uppercased per chunk when composing the child symbol.
const SYMBOL_CHUNK_LEN: usize = 32;

/// Which side supplies a slot's trait in the offspring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlotOutcome {
    ParentA,
    ParentB,
    /// 1-based index of the winning gene proposal.
    Gene(usize),
}

/// Veto is the default: ties, including zero participation, veto the breeding.
pub fn veto_prevails<M: ManagedTypeApi>(veto_votes: &BigUint<M>, proceed_votes: &BigUint<M>) -> bool {
    veto_votes >= proceed_votes
}

/// Strictly highest tally wins. On equal tallies the earliest candidate is kept.
pub fn leading_gene<M, I>(candidates: I) -> Option<(usize, BigUint<M>)>
where
    M: ManagedTypeApi,
    I: IntoIterator<Item = (usize, BigUint<M>)>,
{
    let mut leader: Option<(usize, BigUint<M>)> = None;
    for (index, votes) in candidates {
        let takes_lead = match &leader {
            None => true,
            Some((_, best)) => votes > *best,
        };
        if takes_lead {
            leader = Some((index, votes));
        }
    }
    leader
}

/// A gene must beat both parent tallies. Otherwise parent B needs a strict
/// majority over parent A.
pub fn resolve_slot<M: ManagedTypeApi>(
    tally: &SlotTally<M>,
    leader: Option<(usize, BigUint<M>)>,
) -> SlotOutcome {
    if let Some((index, votes)) = leader {
        if votes > tally.parent_a_votes && votes > tally.parent_b_votes {
            return SlotOutcome::Gene(index);
        }
    }

    if tally.parent_b_votes > tally.parent_a_votes {
        SlotOutcome::ParentB
    } else {
        SlotOutcome::ParentA
    }
}

/// `"<A>-<B>-Child"`
pub fn child_name<M: ManagedTypeApi>(
    parent_a_name: &ManagedBuffer<M>,
    parent_b_name: &ManagedBuffer<M>,
) -> ManagedBuffer<M> {
    let mut name = parent_a_name.clone();
    name.append_bytes(b"-");
    name.append(parent_b_name);
    name.append_bytes(b"-Child");
    name
}

pub fn child_symbol<M: ManagedTypeApi>(
    parent_a_symbol: &ManagedBuffer<M>,
    parent_b_symbol: &ManagedBuffer<M>,
) -> ManagedBuffer<M> {
    let mut symbol = ascii_uppercase(parent_a_symbol);
    symbol.append(&ascii_uppercase(parent_b_symbol));
    symbol
}

fn ascii_uppercase<M: ManagedTypeApi>(input: &ManagedBuffer<M>) -> ManagedBuffer<M> {
    let mut output = ManagedBuffer::new();
    let mut chunk = [0u8; SYMBOL_CHUNK_LEN];
    let len = input.len();
    let mut offset = 0;

    while offset < len {
        let take = core::cmp::min(SYMBOL_CHUNK_LEN, len - offset);
        let part = &mut chunk[..take];
        if input.load_slice(offset, part).is_err() {
            break;
        }
        part.make_ascii_uppercase();
        output.append_bytes(part);
        offset += take;
    }
    output
}
