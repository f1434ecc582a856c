use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use plum_arbiter::arbiter::Arbiter;
use plum_arbiter::config::ArbiterConfig;
use plum_arbiter::game_state::chess_rules::STANDARD_PLACEMENT;
use plum_arbiter::ids::PieceId;
use plum_arbiter::move_generation::move_search::destinations;
use plum_arbiter::utils::algebraic::algebraic_to_coordinate;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    expected_destinations: u64,
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        placement: STANDARD_PLACEMENT,
        expected_destinations: 40,
    },
    BenchCase {
        name: "rooks_and_kings",
        placement: "r3k2r/8/8/8/8/8/8/R3K2R",
        expected_destinations: 48,
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        placement: STANDARD_PLACEMENT,
        expected_destinations: 40,
    },
    BenchCase {
        name: "rooks_and_kings",
        placement: "r3k2r/8/8/8/8/8/8/R3K2R",
        expected_destinations: 48,
    },
    BenchCase {
        name: "lone_queens",
        placement: "8/8/8/3q4/4Q3/8/8/8",
        expected_destinations: 48,
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_destinations(c: &mut Criterion) {
    let suite_name = match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("destinations_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    for case in selected_cases() {
        let arbiter = Arbiter::from_placement(ArbiterConfig::default(), case.placement)
            .expect("benchmark placement should parse");
        let ids: Vec<PieceId> = arbiter.board().pieces().map(|p| p.id()).collect();

        // Correctness guard before benchmarking.
        let warmup: usize = ids
            .iter()
            .map(|&id| destinations(arbiter.board(), id).expect("search should run").len())
            .sum();
        assert_eq!(warmup as u64, case.expected_destinations, "count mismatch for {}", case.name);

        group.throughput(Throughput::Elements(case.expected_destinations));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &ids, |b, ids| {
            b.iter(|| {
                let total: usize = ids
                    .iter()
                    .map(|&id| {
                        destinations(black_box(arbiter.board()), black_box(id))
                            .map(|found| found.len())
                            .unwrap_or(0)
                    })
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_request");
    group.sample_size(30);

    let mut config = ArbiterConfig::default();
    config.enforce_turns = false;
    let template = Arbiter::from_placement(config, STANDARD_PLACEMENT).expect("standard placement should parse");
    let b1 = algebraic_to_coordinate("b1", 8).expect("valid square");
    let c3 = algebraic_to_coordinate("c3", 8).expect("valid square");
    let knight = template.board().occupant_at(b1).expect("knight on b1");

    for verify in [false, true] {
        let name = if verify { "knight_shuffle_verified" } else { "knight_shuffle" };
        let mut config = config;
        config.verify_invariants = verify;

        group.bench_function(name, |b| {
            b.iter_batched(
                || Arbiter::from_placement(config, STANDARD_PLACEMENT).expect("standard placement should parse"),
                |mut arbiter| {
                    let out = arbiter.occupy(knight, c3);
                    let back = arbiter.occupy(knight, b1);
                    let first = arbiter.submit_request(black_box(&out));
                    let second = arbiter.submit_request(black_box(&back));
                    assert!(first.is_committed() && second.is_committed());
                    arbiter
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(destination_benches, bench_destinations, bench_submit);
criterion_main!(destination_benches);
