//! Benchmarks for exhaustive word discovery.
//!
//! # Benchmarks
//!
//! - **`find_all`**: full trie-pruned search over a 6×6 grid, once with a
//!   sparse layout and once with every cell filled.
//! - **`find_all_min_length`**: the dense grid with different minimum word
//!   lengths. The minimum only filters results, so timings should stay flat.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench discovery
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use wordtrace_core::Grid;
use wordtrace_lexicon::Lexicon;
use wordtrace_solver::WordFinder;

const WORDS: &str = "
act ant ants arc are area arena art arts ate cane canes care cares caret
cart carts case cast cat cats coat coats cone cones core cores cost cot
dare dart darts date dates dear door dot dote ear earn ears east eat eats
era near neat nest net nets note notes oar oars oat oats once one ones
ore ores rant rate rates rest roast rot rote sane scan scar scare scone
score sea sear seat sect sent set soar sore sort star stare start stone
store tan tar tare tea tear tears ten tend tens tone tones tore torn
trace traces trade treason
";

const SPARSE: &str = "
    ST.RE.
    .ARCO.
    NE.ST.
    TO.NE.
    .ACT.S
    RE.OAT
";

const DENSE: &str = "
    STAREN
    OARCET
    NESTOR
    TONEAC
    RACTES
    EROATS
";

fn lexicon() -> Lexicon {
    Lexicon::parse(WORDS).unwrap()
}

fn bench_find_all(c: &mut Criterion) {
    let lexicon = lexicon();
    let finder = WordFinder::new(&lexicon).with_minimum_word_length(3);

    for (param, text) in [("sparse", SPARSE), ("dense", DENSE)] {
        let grid: Grid = text.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("find_all", param), &grid, |b, grid| {
            b.iter(|| finder.find_all(hint::black_box(grid)));
        });
    }
}

fn bench_find_all_min_length(c: &mut Criterion) {
    let lexicon = lexicon();
    let grid: Grid = DENSE.parse().unwrap();

    for minimum in [3, 4, 5] {
        let finder = WordFinder::new(&lexicon).with_minimum_word_length(minimum);
        c.bench_with_input(
            BenchmarkId::new("find_all_min_length", minimum),
            &grid,
            |b, grid| {
                b.iter(|| finder.find_all(hint::black_box(grid)));
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_find_all,
        bench_find_all_min_length
);
criterion_main!(benches);
