mod test {
    use crate::agent::{OnlinePlanningAgent, PlanOutcome, PlanReport, nearest_food};
    use crate::config::PlannerConfig;
    use crate::core::*;
    use crate::error::PlannerError;
    use crate::test::test_util::PlannerTestState;

    #[test]
    fn heads_for_the_only_pellet() {
        let state = PlannerTestState::new(
            "
╭-----╮
|P  . |
╰-----╯
",
        );

        assert_eq!(
            state.plan(),
            PlanOutcome::Planned {
                direction: Direction::Right,
                goal: GridCell::new(1, 4),
                path: vec![
                    GridCell::new(1, 1),
                    GridCell::new(1, 2),
                    GridCell::new(1, 3),
                    GridCell::new(1, 4)
                ],
            }
        );
        assert_eq!(state.select_action(), Some(Direction::Right));
    }

    #[test]
    fn takes_the_tunnel_when_it_is_shorter() {
        let wall = "-".repeat(30);
        let corridor = format!(" P{}. ", " ".repeat(26));
        let state = PlannerTestState::new(&format!("{}\n{}\n{}\n", wall, corridor, wall));

        assert_eq!(
            state.plan(),
            PlanOutcome::Planned {
                direction: Direction::Left,
                goal: GridCell::new(1, 28),
                path: vec![
                    GridCell::new(1, 1),
                    GridCell::new(1, 0),
                    GridCell::new(1, 29),
                    GridCell::new(1, 28)
                ],
            }
        );
    }

    #[test]
    fn falls_back_to_failsafe_when_a_ghost_blocks_the_only_corridor() {
        let state = PlannerTestState::new(
            "
╭-------╮
|P  G  .|
╰-------╯
",
        );

        assert_eq!(state.plan(), PlanOutcome::Failsafe(Direction::Right));
        assert_eq!(state.select_action(), Some(Direction::Right));
    }

    #[test]
    fn failsafe_follows_the_configured_order() {
        let level = "
╭-----╮
|  .  |
| |P| |
| ╰G╯ |
|     |
╰-----╯
";
        // Only Up and Down are free of walls, and the ghost below threatens both.
        let state = PlannerTestState::new(level);
        assert_eq!(state.plan(), PlanOutcome::Failsafe(Direction::Up));

        let config = PlannerConfig {
            failsafe_order: [Direction::Down, Direction::Up, Direction::Left, Direction::Right],
            ..PlannerConfig::default()
        };
        let state = PlannerTestState::with_config(level, &config);
        assert_eq!(state.plan(), PlanOutcome::Failsafe(Direction::Down));
    }

    #[test]
    fn boxed_in_player_keeps_its_current_direction() {
        let state = PlannerTestState::new(
            "
╭-╮ .
|P|
╰-╯
",
        )
        .facing(Direction::Up);

        assert_eq!(state.plan(), PlanOutcome::Stalled(Direction::Up));
        assert_eq!(state.select_action(), Some(Direction::Up));
    }

    #[test]
    fn power_mode_ignores_live_ghosts() {
        let state = PlannerTestState::new(
            "
╭-------╮
|P  G  .|
╰-------╯
",
        )
        .powered();

        let perception = state.perceive();
        assert!(perception.hazards.is_empty());
        assert_eq!(state.plan().direction(), Some(Direction::Right));
        assert!(matches!(state.plan(), PlanOutcome::Planned { .. }));
    }

    #[test]
    fn dead_ghosts_do_not_block() {
        let state = PlannerTestState::new(
            "
╭-------╮
|P  X  .|
╰-------╯
",
        );

        assert!(state.perceive().hazards.is_empty());
        assert!(matches!(state.plan(), PlanOutcome::Planned { direction: Direction::Right, .. }));
    }

    #[test]
    fn cleared_board_is_complete_regardless_of_ghosts_or_power() {
        let level = "
╭-----╮
|P  G |
|   G |
╰-----╯
";
        let state = PlannerTestState::new(level);
        assert_eq!(state.plan(), PlanOutcome::LevelComplete);
        assert_eq!(state.select_action(), None);

        let state = PlannerTestState::new(level).powered();
        assert_eq!(state.plan(), PlanOutcome::LevelComplete);
        assert_eq!(state.select_action(), None);
    }

    #[test]
    fn capsules_count_as_food() {
        let state = PlannerTestState::new(
            "
╭-----╮
|P   o|
╰-----╯
",
        );

        assert!(matches!(state.plan(), PlanOutcome::Planned { goal, .. } if goal == GridCell::new(1, 5)));
    }

    #[test]
    fn nearest_food_breaks_ties_in_row_major_order() {
        let state = PlannerTestState::new(
            "
╭-----╮
|     |
|.   .|
|  P  |
╰-----╯
",
        );

        assert_eq!(nearest_food(&state.level.board, state.level.player), Some(GridCell::new(2, 1)));
        assert!(matches!(state.plan(), PlanOutcome::Planned { goal, .. } if goal == GridCell::new(2, 1)));
    }

    #[test]
    fn nearest_food_measures_straight_line_not_walking_distance() {
        // (1, 1) is two steps away as the crow flies but twelve on foot; (1, 6) is three on foot.
        let state = PlannerTestState::new(
            "
╭------╮
|.|P  .|
| |--- |
|      |
╰------╯
",
        );

        assert_eq!(state.perceive().goal, Some(GridCell::new(1, 1)));
        match state.plan() {
            PlanOutcome::Planned { direction, goal, path } => {
                assert_eq!(direction, Direction::Right);
                assert_eq!(goal, GridCell::new(1, 1));
                assert_eq!(path.len(), 13);
            }
            other => panic!("expected a plan, got {:?}", other),
        }
    }

    #[test]
    fn planned_path_stays_out_of_the_danger_zone() {
        let state = PlannerTestState::new(
            "
╭--------╮
|P      .|
|        |
|        |
|     G  |
╰--------╯
",
        );

        let perception = state.perceive();
        let PlanOutcome::Planned { path, .. } = state.plan() else {
            panic!("expected a plan");
        };
        for cell in &path {
            assert!(!perception.hazards.threatens(cell, DANGER_RADIUS), "{:?} is threatened", cell);
        }
    }

    #[test]
    fn planning_the_same_snapshot_twice_gives_the_same_answer() {
        let state = PlannerTestState::new(crate::levels::CLASSIC);
        let world = state.world();

        let first = state.agent.plan(&world);
        let second = state.agent.plan(&world);
        let fresh_agent = OnlinePlanningAgent::new(&PlannerConfig::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, fresh_agent.plan(&world));
    }

    #[test]
    fn classic_spawn_has_a_plan() {
        let state = PlannerTestState::new(crate::levels::CLASSIC);
        let perception = state.perceive();

        assert_eq!(perception.player, GridCell::new(24, 15));
        assert_eq!(perception.hazards.len(), 4);
        assert!(matches!(state.plan(), PlanOutcome::Planned { .. }));
    }

    #[test]
    fn unknown_search_engine_is_refused_at_construction() {
        let config = PlannerConfig {
            search_engine: "dijkstra".to_string(),
            ..PlannerConfig::default()
        };

        match OnlinePlanningAgent::new(&config) {
            Err(PlannerError::SearchEngineUnavailable { name }) => assert_eq!(name, "dijkstra"),
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("agent built without a search engine"),
        }
    }

    #[test]
    fn player_past_the_edge_is_wrapped_back_onto_the_board() {
        let mut state = PlannerTestState::new(
            "
------
 P .  
------
",
        );
        let mut world = state.world();
        // Mid-tunnel, one cell past the right edge.
        world.player = state.agent.mapper().to_world(GridCell::new(1, 6));
        assert_eq!(state.agent.perceive(&world).player, GridCell::new(1, 0));

        state.level.player = GridCell::new(1, 0);
        assert_eq!(state.agent.plan(&world), state.plan());
    }

    #[test]
    fn report_serialises_the_plan() {
        let state = PlannerTestState::new(
            "
╭-----╮
|P  . |
╰-----╯
",
        );
        let perception = state.perceive();
        let report = PlanReport::new(&perception, &state.plan());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["outcome"], "planned");
        assert_eq!(json["direction"], "Right");
        assert_eq!(json["goal"]["col"], 4);
        assert_eq!(json["path"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["hazards"].as_array().map(Vec::len), Some(0));
    }
}
