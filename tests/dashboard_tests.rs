use bpcomplexity::complexity::ComplexityScore;
use bpcomplexity::{
    aggregate_rows, Blueprint, ComplexityCalculator, ComplexityConfig, Dashboard, DashboardConfig,
    EntryResult, GraphBuilder, NodeGuid, Project, ScannedBlueprint, ScoreCache,
};
use pretty_assertions::assert_eq;

fn entry(name: &str, percent: f64) -> EntryResult {
    EntryResult {
        node_guid: NodeGuid::new(name),
        entry_display_name: name.to_string(),
        score: ComplexityScore {
            raw_score: percent,
            percent,
        },
    }
}

/// Event graph with `branches` sequential Branch nodes after BeginPlay
fn blueprint(name: &str, package: &str, branches: usize) -> Blueprint {
    let mut b = GraphBuilder::new(format!("{name}_EventGraph"));
    let begin = b.titled("K2Node_Event", "Event BeginPlay");
    let mut chain = vec![begin];
    for _ in 0..branches {
        chain.push(b.node("K2Node_ExecutionSequence"));
    }
    b.chain(&chain);

    let mut bp = Blueprint::new(name, package);
    bp.event_graphs.push(b.build());
    bp
}

#[test]
fn test_equal_percent_sorts_by_blueprint_then_entry() {
    let scanned = vec![
        ScannedBlueprint {
            name: "BP_Zeta".into(),
            path: "/Game".into(),
            results: vec![entry("A", 70.0)],
        },
        ScannedBlueprint {
            name: "BP_Alpha".into(),
            path: "/Game".into(),
            results: vec![entry("Tick", 70.0), entry("BeginPlay", 70.0)],
        },
    ];

    let rows = aggregate_rows(&scanned, 0.0);
    let order: Vec<_> = rows
        .iter()
        .map(|r| (r.blueprint_name.as_str(), r.entry_display_name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![("BP_Alpha", "BeginPlay"), ("BP_Alpha", "Tick"), ("BP_Zeta", "A")]
    );
}

#[test]
fn test_lowering_threshold_never_removes_rows() {
    let config = ComplexityConfig::default();
    let calc = ComplexityCalculator::new(&config);
    let project = Project {
        blueprints: (0..40)
            .map(|n| blueprint(&format!("BP_{n:02}"), "/Game/Gen", n))
            .collect(),
    };

    let mut dashboard = Dashboard::new(&DashboardConfig::default());
    let mut previous = 0;
    for threshold in [150.0, 100.0, 60.0, 30.0, 0.0] {
        dashboard.set_threshold(threshold);
        let count = dashboard.refresh(&calc, &project).len();
        assert!(count >= previous, "{threshold}: {count} < {previous}");
        previous = count;
    }
    assert_eq!(previous, 40);
}

#[test]
fn test_refresh_is_deterministic() {
    let config = ComplexityConfig::default();
    let calc = ComplexityCalculator::new(&config);
    let project = Project {
        blueprints: (0..25)
            .map(|n| blueprint(&format!("BP_{}", n % 7), "/Game", 20 + n % 3))
            .collect(),
    };

    let mut dashboard = Dashboard::new(&DashboardConfig::default());
    let first = dashboard.refresh(&calc, &project).to_vec();
    let second = dashboard.refresh(&calc, &project).to_vec();
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0].percent >= w[1].percent));
}

#[test]
fn test_package_prefix_filters_blueprints() {
    let config = ComplexityConfig::default();
    let calc = ComplexityCalculator::new(&config);
    let project = Project {
        blueprints: vec![
            blueprint("BP_Game", "/Game/Maps", 40),
            blueprint("BP_Engine", "/Engine/Tools", 40),
        ],
    };

    let mut dashboard = Dashboard::new(&DashboardConfig::default());
    let rows = dashboard.refresh(&calc, &project);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].object_path(), "/Game/Maps/BP_Game.BP_Game");

    dashboard.set_package_prefix(None);
    assert_eq!(dashboard.refresh(&calc, &project).len(), 2);
    assert_eq!(dashboard.scanned_blueprints(), 2);
}

#[test]
fn test_cache_matches_dashboard_scores() {
    let config = ComplexityConfig::default();
    let calc = ComplexityCalculator::new(&config);
    let bp = blueprint("BP_Cached", "/Game", 12);
    let cache = ScoreCache::new();

    assert_eq!(cache.handle_blueprint_compiled(&calc, &bp), 1);
    let guid = &bp.event_graphs[0].nodes[0].guid;
    let cached = cache.get(guid).unwrap();
    let fresh = calc.process_blueprint(Some(&bp))[0].score;
    assert_eq!(cached, fresh);
}
