use bevy::math::Vec2;
use mindspace_companion::config::*;
use mindspace_companion::network::{MindSpace, Node};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SURFACE: Vec2 = Vec2::new(800.0, 600.0);

fn seeded_network(seed: u64, node_count: usize) -> MindSpace {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut mind_space = MindSpace::new();
    mind_space.initialize(node_count, SURFACE, &mut rng);
    mind_space
}

fn assert_connections_valid(mind_space: &MindSpace) {
    let node_count = mind_space.nodes().len();
    for connection in mind_space.connections() {
        assert!(connection.from < node_count, "from index {} out of range", connection.from);
        assert!(connection.to < node_count, "to index {} out of range", connection.to);
        assert_ne!(connection.from, connection.to, "self-loop on node {}", connection.from);
        assert!((0.0..=1.0).contains(&connection.strength));
    }
}

#[test]
fn test_initialize_builds_requested_nodes() {
    for seed in 0..10 {
        let mind_space = seeded_network(seed, DEFAULT_NODE_COUNT);
        assert_eq!(mind_space.nodes().len(), DEFAULT_NODE_COUNT);
        assert_connections_valid(&mind_space);

        for node in mind_space.nodes() {
            assert!((0.0..=SURFACE.x).contains(&node.position.x));
            assert!((0.0..=SURFACE.y).contains(&node.position.y));
            assert!(node.velocity.x.abs() <= MAX_NODE_SPEED);
            assert!(node.velocity.y.abs() <= MAX_NODE_SPEED);
            assert!((MIN_NODE_RADIUS..=MAX_NODE_RADIUS).contains(&node.radius));
            assert!((0.0..=1.0).contains(&node.activity));
            assert_eq!(node.phase, 0.0);
        }
    }
}

#[test]
fn test_out_degree_never_exceeds_draw() {
    let mind_space = seeded_network(7, DEFAULT_NODE_COUNT);

    for from in 0..DEFAULT_NODE_COUNT {
        let out_degree = mind_space
            .connections()
            .iter()
            .filter(|connection| connection.from == from)
            .count();
        assert!(out_degree <= MAX_OUT_DEGREE);
    }
    assert!(mind_space.connections().len() <= DEFAULT_NODE_COUNT * MAX_OUT_DEGREE);
    assert_eq!(mind_space.stats().connections, mind_space.connections().len());
}

#[test]
fn test_degenerate_networks() {
    let empty = seeded_network(1, 0);
    assert!(empty.nodes().is_empty());
    assert!(empty.connections().is_empty());
    assert_eq!(empty.stats().mean_activity_percent, 0.0);

    // A lone node can only target itself, which is always skipped
    let single = seeded_network(1, 1);
    assert_eq!(single.nodes().len(), 1);
    assert!(single.connections().is_empty());
}

#[test]
fn test_zero_area_surface_places_nodes_at_origin() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut mind_space = MindSpace::new();
    mind_space.initialize(5, Vec2::ZERO, &mut rng);

    for node in mind_space.nodes() {
        assert_eq!(node.position, Vec2::ZERO);
    }
}

#[test]
fn test_tick_preserves_structure_and_activity_range() {
    let mut mind_space = seeded_network(11, DEFAULT_NODE_COUNT);
    let connections_before = mind_space.connections().to_vec();

    for frame in 0..500 {
        mind_space.tick(SURFACE, frame as f64 * 16.7);

        assert_eq!(mind_space.nodes().len(), DEFAULT_NODE_COUNT);
        assert_eq!(mind_space.connections(), connections_before.as_slice());
        for node in mind_space.nodes() {
            assert!((0.0..=1.0).contains(&node.activity));
        }
    }

    let expected_phase = 500.0 * PHASE_STEP;
    for node in mind_space.nodes() {
        assert!((node.phase - expected_phase).abs() < 1e-3);
    }
}

#[test]
fn test_nodes_never_escape_far() {
    let mut mind_space = seeded_network(5, DEFAULT_NODE_COUNT);

    for frame in 0..2_000 {
        mind_space.tick(SURFACE, frame as f64);
        for node in mind_space.nodes() {
            assert!(node.position.x >= -2.0 * MAX_NODE_SPEED);
            assert!(node.position.x <= SURFACE.x + 2.0 * MAX_NODE_SPEED);
            assert!(node.position.y >= -2.0 * MAX_NODE_SPEED);
            assert!(node.position.y <= SURFACE.y + 2.0 * MAX_NODE_SPEED);
        }
    }
}

#[test]
fn test_activity_follows_clock() {
    let mut node = Node {
        position: Vec2::new(10.0, 10.0),
        velocity: Vec2::ZERO,
        radius: 4.0,
        activity: 0.0,
        phase: 0.0,
    };

    node.pulse(0.0);
    assert!((node.activity - 0.5).abs() < 1e-6);
    assert!((node.phase - PHASE_STEP).abs() < 1e-6);

    // sin(pi/2 - 0.01 + 0.01) = 1
    node.pulse((std::f64::consts::FRAC_PI_2 - PHASE_STEP as f64) / ACTIVITY_TIME_SCALE);
    assert!((node.activity - 1.0).abs() < 1e-4);
}

#[test]
fn test_boundary_reflection_per_axis() {
    let mut past_right = Node {
        position: Vec2::new(SURFACE.x + 1.0, 300.0),
        velocity: Vec2::new(0.5, 0.25),
        radius: 4.0,
        activity: 0.0,
        phase: 0.0,
    };
    past_right.advance(SURFACE);
    assert!(past_right.velocity.x < 0.0);
    assert!(past_right.velocity.y > 0.0, "y must not flip when inside vertically");

    let mut past_bottom = Node {
        position: Vec2::new(400.0, SURFACE.y + 1.0),
        velocity: Vec2::new(0.25, 0.5),
        radius: 4.0,
        activity: 0.0,
        phase: 0.0,
    };
    past_bottom.advance(SURFACE);
    assert!(past_bottom.velocity.y < 0.0);
    assert!(past_bottom.velocity.x > 0.0);

    let mut past_origin = Node {
        position: Vec2::new(-1.0, -1.0),
        velocity: Vec2::new(-0.5, -0.5),
        radius: 4.0,
        activity: 0.0,
        phase: 0.0,
    };
    past_origin.advance(SURFACE);
    assert!(past_origin.velocity.x > 0.0);
    assert!(past_origin.velocity.y > 0.0);
}

#[test]
fn test_reflection_through_network_tick() {
    let mut mind_space = seeded_network(2, 3);
    {
        let node = &mut mind_space.nodes_mut()[0];
        node.position = Vec2::new(SURFACE.x + 1.0, 100.0);
        node.velocity = Vec2::new(1.0, 0.0);
    }

    mind_space.tick(SURFACE, 0.0);
    assert!(mind_space.nodes()[0].velocity.x < 0.0);
}

#[test]
fn test_stats_match_nodes() {
    let mut mind_space = seeded_network(9, DEFAULT_NODE_COUNT);
    mind_space.tick(SURFACE, 1234.0);

    let stats = mind_space.stats();
    let active = mind_space
        .nodes()
        .iter()
        .filter(|node| node.activity > ACTIVE_THRESHOLD)
        .count();
    let mean: f32 = mind_space.nodes().iter().map(|node| node.activity).sum::<f32>()
        / DEFAULT_NODE_COUNT as f32
        * 100.0;

    assert_eq!(stats.active_nodes, active);
    assert_eq!(stats.connections, mind_space.connections().len());
    assert!((stats.mean_activity_percent - mean).abs() < 1e-3);
    assert!((0.0..=100.0).contains(&stats.mean_activity_percent));
}

#[test]
fn test_reset_discards_previous_network() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut mind_space = MindSpace::new();
    mind_space.initialize(40, SURFACE, &mut rng);
    assert_eq!(mind_space.nodes().len(), 40);

    mind_space.reset(DEFAULT_NODE_COUNT, SURFACE, &mut rng);
    assert_eq!(mind_space.nodes().len(), DEFAULT_NODE_COUNT);
    assert_connections_valid(&mind_space);

    for frame in 0..10 {
        mind_space.tick(SURFACE, frame as f64);
        assert_connections_valid(&mind_space);
    }
    assert!(mind_space.nodes().iter().all(|node| node.phase > 0.0));
}
