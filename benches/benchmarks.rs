//! Performance benchmarks for ppp

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ppp::test_utils::TestTree;
use ppp::{Entry, TreeFormatter, build};

/// Create a directory tree `depth` levels deep with `fanout` files and
/// `fanout` subdirectories at every level above the bottom.
fn create_test_tree(depth: usize, fanout: usize) -> TestTree {
    let tree = TestTree::new();
    fn fill(tree: &TestTree, base: &str, depth: usize, fanout: usize) {
        for i in 0..fanout {
            tree.add_file(&format!("{}file_{}.txt", base, i), "x");
        }
        if depth == 0 {
            return;
        }
        for i in 0..fanout {
            let dir = format!("{}dir_{}/", base, i);
            tree.add_dir(&dir);
            fill(tree, &dir, depth - 1, fanout);
        }
    }
    fill(&tree, "", depth, fanout);
    tree
}

/// Build the same shape entirely in memory.
fn in_memory_tree(name: String, depth: usize, fanout: usize) -> Entry {
    let mut children: Vec<Entry> = (0..fanout)
        .map(|i| Entry::file(format!("{}/file_{}.txt", name, i)))
        .collect();
    if depth > 0 {
        for i in 0..fanout {
            children.push(in_memory_tree(
                format!("{}/dir_{}", name, i),
                depth - 1,
                fanout,
            ));
        }
    }
    Entry::directory(name, children)
}

fn bench_build(c: &mut Criterion) {
    let small = create_test_tree(2, 3);
    let medium = create_test_tree(3, 5);

    let mut group = c.benchmark_group("build");

    group.bench_function("small_tree", |b| {
        b.iter(|| build(black_box(small.path())).unwrap())
    });

    group.bench_function("medium_tree", |b| {
        b.iter(|| build(black_box(medium.path())).unwrap())
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let formatter = TreeFormatter::new();
    let wide = in_memory_tree("wide".to_string(), 1, 200);
    let deep = in_memory_tree("deep".to_string(), 6, 3);

    let mut group = c.benchmark_group("format");

    group.bench_function("wide_tree", |b| {
        b.iter(|| formatter.format(black_box(&wide)))
    });

    group.bench_function("deep_tree", |b| {
        b.iter(|| formatter.format(black_box(&deep)))
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_format);
criterion_main!(benches);
