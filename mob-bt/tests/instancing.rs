use std::cell::RefCell;
use std::rc::Rc;

use mob_bt::{
    Action, BehaviorTree, BoxNode, Cooldown, Node, NodeKind, NodeState, Repeat, Repeater, Sequence,
};
use mob_core::{TickContext, WorldMut, WorldView};

#[derive(Default)]
struct World;

impl WorldView for World {
    type Agent = u64;
}

impl WorldMut for World {}

fn ctx(tick: u64, time_seconds: f64) -> TickContext {
    TickContext {
        tick,
        dt_seconds: 0.1,
        time_seconds,
    }
}

fn succeed_leaf(calls: &Rc<RefCell<u32>>) -> BoxNode<World> {
    let calls = Rc::clone(calls);
    Box::new(Action::new(move |_: &TickContext, _: u64, _: &mut World| {
        *calls.borrow_mut() += 1;
        NodeState::Success
    }))
}

#[test]
fn cloned_cooldown_state_is_independent_of_the_template() {
    let calls = Rc::new(RefCell::new(0u32));
    let mut template =
        BehaviorTree::with_root(Box::new(Cooldown::new(1.0, succeed_leaf(&calls))));

    let mut instance = template.clone();
    let mut world = World;

    // Completing the instance's cooldown at t=0 must not start the
    // template's cooldown window.
    assert_eq!(
        instance.update(&ctx(1, 0.0), 1, &mut world),
        NodeState::Success
    );
    assert_eq!(
        instance.update(&ctx(2, 0.5), 1, &mut world),
        NodeState::Failure
    );
    assert_eq!(
        template.update(&ctx(1, 0.5), 2, &mut world),
        NodeState::Success
    );

    // And completing the template must not reset the instance's window.
    assert_eq!(
        instance.update(&ctx(3, 0.9), 1, &mut world),
        NodeState::Failure
    );
}

#[test]
fn cloned_repeater_counter_is_independent() {
    let calls = Rc::new(RefCell::new(0u32));
    let template = Repeater::new(Repeat::Times(2), succeed_leaf(&calls));

    let mut world = World;
    let mut a = template.clone_node();
    let mut b = template.clone_node();

    assert_eq!(a.evaluate(&ctx(1, 0.0), 1, &mut world), NodeState::Running);
    assert_eq!(a.evaluate(&ctx(2, 0.1), 1, &mut world), NodeState::Success);

    // `b` starts from the template's pristine counter.
    assert_eq!(b.evaluate(&ctx(1, 0.0), 2, &mut world), NodeState::Running);
    assert_eq!(b.evaluate(&ctx(2, 0.1), 2, &mut world), NodeState::Success);

    // The template itself was never evaluated.
    assert_eq!(template.completed_runs(), 0);
    assert_eq!(template.last_state(), NodeState::Running);
}

#[test]
fn clone_preserves_structure() {
    let calls = Rc::new(RefCell::new(0u32));
    let template = BehaviorTree::with_root(Box::new(Sequence::new(vec![
        Box::new(Cooldown::new(0.5, succeed_leaf(&calls))) as BoxNode<World>,
        succeed_leaf(&calls),
    ])));

    let instance = template.clone();
    let root = instance.root().expect("clone must keep the root");
    assert_eq!(root.kind(), NodeKind::Sequence);
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.children()[0].kind(), NodeKind::Cooldown);
    assert_eq!(root.children()[1].kind(), NodeKind::Action);
}

#[test]
fn ticking_an_instance_leaves_the_template_untouched() {
    let calls = Rc::new(RefCell::new(0u32));
    let template = BehaviorTree::with_root(Box::new(Sequence::new(vec![succeed_leaf(&calls)])));

    let mut instance = template.clone();
    let mut world = World;
    instance.update(&ctx(1, 0.0), 1, &mut world);

    assert_eq!(instance.last_state(), NodeState::Success);
    assert_eq!(template.last_state(), NodeState::Running);
}

#[test]
fn empty_tree_fails_without_side_effects() {
    let mut tree = BehaviorTree::<World>::new();
    let mut world = World;
    assert_eq!(tree.update(&ctx(1, 0.0), 1, &mut world), NodeState::Failure);
    assert_eq!(tree.last_state(), NodeState::Failure);
    assert!(tree.root().is_none());
}
