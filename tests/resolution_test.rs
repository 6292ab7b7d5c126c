use aminal_breeding::resolution::{self, SlotOutcome};
use aminal_breeding::types::{BreedingPhase, SlotTally, TraitSlot};
use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::api::DebugApi;

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn tally(parent_a: u64, parent_b: u64) -> SlotTally<StaticApi> {
    SlotTally {
        parent_a_votes: big(parent_a),
        parent_b_votes: big(parent_b),
    }
}

fn buffer(text: &str) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::from(text)
}

#[test]
fn phase_follows_deadlines() {
    assert_eq!(BreedingPhase::at(99, 100, 200, false), BreedingPhase::GeneProposal);
    assert_eq!(BreedingPhase::at(100, 100, 200, false), BreedingPhase::Voting);
    assert_eq!(BreedingPhase::at(199, 100, 200, false), BreedingPhase::Voting);
    assert_eq!(BreedingPhase::at(200, 100, 200, false), BreedingPhase::Execution);
    assert_eq!(BreedingPhase::at(10_000, 100, 200, false), BreedingPhase::Execution);
}

#[test]
fn executed_ticket_is_completed_at_any_time() {
    assert_eq!(BreedingPhase::at(0, 100, 200, true), BreedingPhase::Completed);
    assert_eq!(BreedingPhase::at(150, 100, 200, true), BreedingPhase::Completed);
    assert_eq!(BreedingPhase::at(500, 100, 200, true), BreedingPhase::Completed);
}

#[test]
fn veto_wins_ties_and_silence() {
    assert!(resolution::veto_prevails(&big(0), &big(0)));
    assert!(resolution::veto_prevails(&big(7), &big(7)));
    assert!(resolution::veto_prevails(&big(8), &big(7)));
    assert!(!resolution::veto_prevails(&big(6), &big(7)));
}

#[test]
fn unvoted_slot_goes_to_parent_a() {
    assert_eq!(resolution::resolve_slot(&tally(0, 0), None), SlotOutcome::ParentA);
}

#[test]
fn tied_slot_goes_to_parent_a() {
    assert_eq!(resolution::resolve_slot(&tally(40, 40), None), SlotOutcome::ParentA);
}

#[test]
fn parent_b_needs_strict_majority() {
    assert_eq!(resolution::resolve_slot(&tally(40, 41), None), SlotOutcome::ParentB);
    assert_eq!(resolution::resolve_slot(&tally(41, 40), None), SlotOutcome::ParentA);
}

#[test]
fn gene_must_exceed_both_parents() {
    assert_eq!(
        resolution::resolve_slot(&tally(10, 100), Some((1, big(100)))),
        SlotOutcome::ParentB
    );
    assert_eq!(
        resolution::resolve_slot(&tally(100, 10), Some((1, big(100)))),
        SlotOutcome::ParentA
    );
    assert_eq!(
        resolution::resolve_slot(&tally(10, 100), Some((3, big(101)))),
        SlotOutcome::Gene(3)
    );
}

#[test]
fn gene_without_votes_never_wins() {
    assert_eq!(
        resolution::resolve_slot(&tally(0, 0), Some((1, big(0)))),
        SlotOutcome::ParentA
    );
}

#[test]
fn leading_gene_prefers_earliest_on_ties() {
    let candidates = vec![(2usize, big(50)), (4, big(80)), (5, big(80)), (7, big(10))];
    let (index, votes) = resolution::leading_gene(candidates).unwrap();
    assert_eq!(index, 4);
    assert_eq!(votes, big(80));
}

#[test]
fn leading_gene_of_nothing_is_none() {
    let candidates: Vec<(usize, BigUint<StaticApi>)> = Vec::new();
    assert!(resolution::leading_gene(candidates).is_none());
}

#[test]
fn child_name_joins_parent_names() {
    assert_eq!(
        resolution::child_name(&buffer("Adam"), &buffer("Eve")),
        buffer("Adam-Eve-Child")
    );
}

#[test]
fn child_symbol_is_uppercased_concatenation() {
    assert_eq!(
        resolution::child_symbol(&buffer("adam"), &buffer("Eve1")),
        buffer("ADAMEVE1")
    );
}

#[test]
fn child_symbol_handles_long_symbols() {
    let long_symbol = "abcdefghijklmnopqrstuvwxyz-abcdefghijklmnopqrstuvwxyz";
    assert_eq!(
        resolution::child_symbol(&buffer(long_symbol), &buffer("")),
        buffer("ABCDEFGHIJKLMNOPQRSTUVWXYZ-ABCDEFGHIJKLMNOPQRSTUVWXYZ")
    );
}

#[test]
fn trait_slot_tags_round_trip() {
    for slot in TraitSlot::ALL {
        assert_eq!(TraitSlot::from_u8(slot.index() as u8), Some(slot));
    }
    assert_eq!(TraitSlot::from_u8(7), Some(TraitSlot::Misc));
    assert_eq!(TraitSlot::from_u8(8), None);
}

#[test]
fn contract_object_builds() {
    let _: fn() -> aminal_breeding::ContractObj<DebugApi> = aminal_breeding::contract_obj;
}
