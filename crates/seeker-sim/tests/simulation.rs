use seeker_core::{Cell, Direction, PathResult};
use seeker_nav::Heuristic;
use seeker_sim::export::{read_history_jsonl, write_history_jsonl, write_json, HistoryHeader};
use seeker_tools::{PathHistoryLog, PathRecord};
use seeker_sim::{SimConfig, Simulation, StopReason};

fn config(width: u32, height: u32) -> SimConfig {
    let mut config = SimConfig::default();
    config.grid.width = width;
    config.grid.height = height;
    config
}

fn straight_line() -> SimConfig {
    let mut config = config(10, 10);
    config.agent.initial_direction = Some(Direction::Right);
    config.food.position = Some(Cell::new(3, 0));
    config
}

#[test]
fn agent_eats_food_on_a_straight_line() {
    let mut sim = Simulation::new(straight_line()).expect("sim");
    assert_eq!(sim.food().position(), Cell::new(3, 0));

    let reports: Vec<_> = (0..3).map(|_| sim.step()).collect();
    assert!(!reports[0].ate);
    assert!(!reports[1].ate);
    assert!(reports[2].ate);
    assert_eq!(reports[2].outcome.position, Cell::new(3, 0));
    assert_eq!(reports[2].tick, 2);

    assert_eq!(sim.score(), 1);
    assert_eq!(sim.stop_reason(), Some(StopReason::ScoreReached));
    assert!(!sim.controller().state().occupies(sim.food().position()));
}

#[test]
fn run_stops_at_score_and_logs_every_tick() {
    let mut sim = Simulation::new(straight_line()).expect("sim");
    let summary = sim.run();

    assert_eq!(summary.ticks, 3);
    assert_eq!(summary.score, 1);
    assert_eq!(summary.stop_reason, Some(StopReason::ScoreReached));
    assert_eq!(summary.final_head, Cell::new(3, 0));
    assert_eq!(summary.final_direction, Direction::Right);
    assert_eq!(sim.history().len() as u64, summary.ticks);
    assert_eq!(summary.paths_found, 3);
    assert_eq!(summary.paths_not_found, 0);
}

#[test]
fn body_grows_after_eating() {
    let mut config = straight_line();
    config.max_score = 0;
    let mut sim = Simulation::new(config).expect("sim");
    for _ in 0..3 {
        sim.step();
    }
    assert_eq!(sim.controller().state().body().len(), 2);
    sim.step();
    assert_eq!(sim.controller().state().body().len(), 3);
}

#[test]
fn tick_limit_ends_unscored_runs() {
    let mut config = config(12, 9);
    config.max_score = 0;
    config.max_ticks = 25;
    config.seed = 9;

    let mut sim = Simulation::new(config).expect("sim");
    let summary = sim.run();
    assert_eq!(summary.ticks, 25);
    assert_eq!(summary.stop_reason, Some(StopReason::TickLimit));
    assert_eq!(sim.history().len(), 25);
}

#[test]
fn same_seed_replays_identically() {
    let mut config = config(15, 11);
    config.seed = 1234;
    config.max_score = 0;
    config.max_ticks = 60;

    let mut a = Simulation::new(config.clone()).expect("sim a");
    let mut b = Simulation::new(config).expect("sim b");
    let sa = a.run();
    let sb = b.run();

    assert_eq!(sa.score, sb.score);
    assert_eq!(sa.final_head, sb.final_head);
    assert_eq!(sa.food, sb.food);
    assert_eq!(a.history(), b.history());
}

#[test]
fn random_food_avoids_the_body() {
    for seed in 0..20 {
        let mut config = config(3, 3);
        config.seed = seed;
        config.agent.body_length = 3;
        config.agent.initial_direction = Some(Direction::Down);
        let sim = Simulation::new(config).expect("sim");
        assert!(!sim.controller().state().occupies(sim.food().position()));
    }
}

#[test]
fn external_food_placement_is_validated() {
    let mut sim = Simulation::new(straight_line()).expect("sim");
    sim.place_food(Cell::new(5, 5)).expect("in bounds");
    assert_eq!(sim.food().position(), Cell::new(5, 5));
    assert!(sim.place_food(Cell::new(10, 0)).is_err());
    assert_eq!(sim.food().position(), Cell::new(5, 5));
}

#[test]
fn reversing_override_is_ignored() {
    let mut sim = Simulation::new(straight_line()).expect("sim");
    assert!(!sim.override_direction(Direction::Left));
    assert!(sim.override_direction(Direction::Up));
}

#[test]
fn toroidal_heuristic_takes_the_wrapped_route() {
    let mut config = config(10, 1);
    config.agent.start = Cell::new(1, 0);
    config.agent.body_length = 1;
    config.agent.initial_direction = Some(Direction::Right);
    config.food.position = Some(Cell::new(8, 0));
    config.heuristic = Heuristic::Toroidal;

    let summary = Simulation::new(config).expect("sim").run();
    assert_eq!(summary.ticks, 3);
    assert_eq!(summary.final_direction, Direction::Left);
}

#[test]
fn visit_graph_and_history_export() {
    let mut config = straight_line();
    config.agent.start = Cell::new(2, 3);
    config.food.position = Some(Cell::new(6, 3));
    let mut sim = Simulation::new(config).expect("sim");
    sim.run();

    let graph = sim.visit_graph();
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.contains_edge(Cell::new(2, 3), Cell::new(3, 3)));
    assert_eq!(graph.start, Some(Cell::new(2, 3)));
    assert_eq!(graph.food, Some(sim.food().position()));

    let dir = tempfile::tempdir().expect("tempdir");
    let history_path = dir.path().join("out/history.jsonl");
    write_history_jsonl(&history_path, &sim.history_header(), sim.history())
        .expect("write history");
    let back = read_history_jsonl(&history_path).expect("read history");
    assert_eq!(&back.log, sim.history());
    assert_eq!(back.header.width, 10);
    assert_eq!(back.header.height, 10);
    assert_eq!(back.header.start, Cell::new(2, 3));
    assert_eq!(back.visit_graph(), graph);

    let graph_path = dir.path().join("graph.json");
    write_json(&graph_path, &graph).expect("write graph");
    let text = std::fs::read_to_string(&graph_path).expect("read graph");
    assert!(text.contains("\"edges\""));
    assert!(text.contains("\"start\""));
    assert!(text.contains("\"food\""));
}

#[test]
fn history_grid_comes_from_the_file_not_the_current_config() {
    let mut small = config(5, 4);
    small.max_score = 0;
    small.max_ticks = 12;
    small.seed = 3;
    let mut sim = Simulation::new(small).expect("sim");
    sim.run();

    let dir = tempfile::tempdir().expect("tempdir");
    let history_path = dir.path().join("small.jsonl");
    write_history_jsonl(&history_path, &sim.history_header(), sim.history())
        .expect("write history");

    let graph = read_history_jsonl(&history_path).expect("read history").visit_graph();
    assert_eq!((graph.width, graph.height), (5, 4));
    assert_eq!(graph.nodes().count(), 20);
    assert!(graph
        .visited_cells()
        .iter()
        .all(|c| (0..5).contains(&c.x) && (0..4).contains(&c.y)));
}

#[test]
fn history_cells_outside_the_header_grid_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let header = HistoryHeader {
        width: 3,
        height: 3,
        wrap: true,
        start: Cell::new(0, 0),
        food: Cell::new(2, 2),
    };
    let mut log = PathHistoryLog::new();
    log.push(PathRecord::new(
        0,
        Cell::new(0, 0),
        Cell::new(5, 0),
        PathResult::Found(vec![Cell::new(0, 0), Cell::new(5, 0)]),
    ));
    let path = dir.path().join("mismatch.jsonl");
    write_history_jsonl(&path, &header, &log).expect("write history");

    let err = read_history_jsonl(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("does not fit the header grid"), "{err:#}");
}

#[test]
fn history_without_header_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bare.jsonl");
    let record = PathRecord::new(0, Cell::new(0, 0), Cell::new(0, 0), PathResult::NotFound);
    std::fs::write(&path, serde_json::to_string(&record).expect("json")).expect("write");

    let err = read_history_jsonl(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("history header"), "{err:#}");

    let empty = dir.path().join("empty.jsonl");
    std::fs::write(&empty, "\n").expect("write");
    assert!(read_history_jsonl(&empty).is_err());
}
