use mob_bt::{
    advance_all, Action, AgentDriver, BehaviorTree, DriverConfig, DriverError, NodeState,
};
use mob_core::{TickContext, WorldMut, WorldView};

#[derive(Default)]
struct CountingWorld {
    paused: bool,
    updates: Vec<u64>,
}

impl WorldView for CountingWorld {
    type Agent = u64;

    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl WorldMut for CountingWorld {}

fn counting_template() -> BehaviorTree<CountingWorld> {
    BehaviorTree::with_root(Box::new(Action::new(
        |_: &TickContext, agent: u64, world: &mut CountingWorld| {
            world.updates.push(agent);
            NodeState::Success
        },
    )))
}

#[test]
fn driver_throttles_ticks_to_the_configured_interval() {
    let template = counting_template();
    let mut driver = AgentDriver::new(1u64, &template, DriverConfig::default())
        .expect("default config is valid");

    let mut world = CountingWorld::default();
    // Ten frames of 0.03s cover 0.30s; with a 0.1s interval the tree must be
    // updated exactly 3 times, not 10.
    let mut ticks = 0;
    for _ in 0..10 {
        if driver.advance(0.03, &mut world).is_some() {
            ticks += 1;
        }
    }

    assert_eq!(ticks, 3);
    assert_eq!(world.updates.len(), 3);
    assert_eq!(driver.last_state(), NodeState::Success);
}

#[test]
fn driver_carries_remainder_time_over() {
    let template = counting_template();
    let mut driver =
        AgentDriver::new(1u64, &template, DriverConfig::default()).expect("valid config");

    let mut world = CountingWorld::default();
    // 0.25s is more than two intervals but a single advance ticks at most
    // once; the 0.15s remainder is kept.
    assert!(driver.advance(0.25, &mut world).is_some());
    assert!(driver.advance(0.0, &mut world).is_some());
    assert!(driver.advance(0.0, &mut world).is_none());
    assert_eq!(world.updates.len(), 2);
}

#[test]
fn driver_skips_while_paused() {
    let template = counting_template();
    let mut driver =
        AgentDriver::new(1u64, &template, DriverConfig::default()).expect("valid config");

    let mut world = CountingWorld {
        paused: true,
        ..Default::default()
    };
    for _ in 0..10 {
        assert!(driver.advance(0.1, &mut world).is_none());
    }
    assert!(world.updates.is_empty());

    // Paused frames did not accumulate: unpausing still needs a full
    // interval before the first tick.
    world.paused = false;
    assert!(driver.advance(0.05, &mut world).is_none());
    assert!(driver.advance(0.05, &mut world).is_some());
}

#[test]
fn driver_rejects_invalid_intervals() {
    let template = counting_template();
    for interval in [0.0, -0.1, f32::NAN, f32::INFINITY] {
        let config = DriverConfig {
            update_interval: interval,
        };
        assert!(matches!(
            AgentDriver::new(1u64, &template, config),
            Err(DriverError::InvalidUpdateInterval(_))
        ));
    }
}

#[test]
fn driver_reset_reinitializes_tree_and_accumulator() {
    let template = counting_template();
    let mut driver =
        AgentDriver::new(1u64, &template, DriverConfig::default()).expect("valid config");

    let mut world = CountingWorld::default();
    assert!(driver.advance(0.15, &mut world).is_some());
    driver.reset();

    assert_eq!(driver.last_state(), NodeState::Running);
    // The 0.05s remainder was dropped by the reset.
    assert!(driver.advance(0.05, &mut world).is_none());
    assert!(driver.advance(0.05, &mut world).is_some());
}

#[test]
fn advance_all_ticks_agents_in_stable_id_order() {
    let template = counting_template();
    let mut drivers = vec![
        AgentDriver::new(7u64, &template, DriverConfig::default()).expect("valid config"),
        AgentDriver::new(3u64, &template, DriverConfig::default()).expect("valid config"),
        AgentDriver::new(5u64, &template, DriverConfig::default()).expect("valid config"),
    ];

    let mut world = CountingWorld::default();
    advance_all(0.1, &mut world, &mut drivers);
    assert_eq!(world.updates, vec![3, 5, 7]);
}
