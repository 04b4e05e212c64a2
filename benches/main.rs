mod benchmarks;

use criterion::criterion_main;

criterion_main!(benchmarks::hull::benches, benchmarks::subdivision::benches);
